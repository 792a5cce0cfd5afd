//! Contact form inquiries
//!
//! The site only acknowledges inquiries. Delivery to a real backend plugs
//! in behind `InquirySink`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

pub const INQUIRY_ACKNOWLEDGED: &str =
    "Thank you for your inquiry! We will get back to you within 24 hours.";

/// Product line picked in the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductInterest {
    Aldrops,
    DoorKits,
    CabinetHandles,
    TowerBolts,
    Stoppers,
    MultipleProducts,
}

impl ProductInterest {
    pub const ALL: [ProductInterest; 6] = [
        ProductInterest::Aldrops,
        ProductInterest::DoorKits,
        ProductInterest::CabinetHandles,
        ProductInterest::TowerBolts,
        ProductInterest::Stoppers,
        ProductInterest::MultipleProducts,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProductInterest::Aldrops => "Aldrops",
            ProductInterest::DoorKits => "Door Kits",
            ProductInterest::CabinetHandles => "Cabinet Handles",
            ProductInterest::TowerBolts => "Tower Bolts",
            ProductInterest::Stoppers => "Stoppers",
            ProductInterest::MultipleProducts => "Multiple Products",
        }
    }

    /// Form value, matching the wire name
    pub fn slug(self) -> &'static str {
        match self {
            ProductInterest::Aldrops => "aldrops",
            ProductInterest::DoorKits => "door-kits",
            ProductInterest::CabinetHandles => "cabinet-handles",
            ProductInterest::TowerBolts => "tower-bolts",
            ProductInterest::Stoppers => "stoppers",
            ProductInterest::MultipleProducts => "multiple-products",
        }
    }
}

/// Fields of the contact form. Name and email are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInquiry {
    pub name: String,
    #[serde(default)]
    pub business: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub product_interest: Option<ProductInterest>,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ContactInquiry {
    pub fn validate(&self) -> Result<(), InquiryError> {
        if self.name.trim().is_empty() {
            return Err(InquiryError::MissingField("name"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(InquiryError::MissingField("email"));
        }
        match email.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(())
            }
            _ => Err(InquiryError::InvalidEmail),
        }
    }
}

/// Returned to the visitor once an inquiry is accepted
#[derive(Debug, Clone, Serialize)]
pub struct InquiryReceipt {
    pub reference: String,
    pub message: &'static str,
}

impl InquiryReceipt {
    pub fn new() -> Self {
        Self {
            reference: uuid::Uuid::new_v4().to_string(),
            message: INQUIRY_ACKNOWLEDGED,
        }
    }
}

impl Default for InquiryReceipt {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error)]
pub enum InquiryError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Email address is not valid")]
    InvalidEmail,
    /// The sink could not hand the inquiry on
    #[error("Failed to submit inquiry: {0}")]
    Delivery(String),
}

impl InquiryError {
    /// Whether the visitor can fix this by editing the form
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::MissingField(_) | Self::InvalidEmail)
    }
}

/// Destination for validated inquiries
#[async_trait]
pub trait InquirySink: Send + Sync {
    async fn submit_inquiry(&self, inquiry: &ContactInquiry) -> Result<InquiryReceipt, InquiryError>;

    fn name(&self) -> &str;
}

/// Acknowledges every inquiry without sending it anywhere
pub struct AcknowledgeOnly;

#[async_trait]
impl InquirySink for AcknowledgeOnly {
    async fn submit_inquiry(&self, _inquiry: &ContactInquiry) -> Result<InquiryReceipt, InquiryError> {
        Ok(InquiryReceipt::new())
    }

    fn name(&self) -> &str {
        "acknowledge-only"
    }
}

/// Logging wrapper for inquiry sinks
pub struct LoggingSink {
    inner: Arc<dyn InquirySink>,
}

impl LoggingSink {
    pub fn new(inner: Arc<dyn InquirySink>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl InquirySink for LoggingSink {
    async fn submit_inquiry(&self, inquiry: &ContactInquiry) -> Result<InquiryReceipt, InquiryError> {
        let start = std::time::Instant::now();
        let result = self.inner.submit_inquiry(inquiry).await;
        let duration = start.elapsed();

        match &result {
            Ok(receipt) => {
                tracing::info!(
                    sink = %self.inner.name(),
                    duration_ms = %duration.as_millis(),
                    reference = %receipt.reference,
                    product_interest = inquiry.product_interest.map(ProductInterest::slug),
                    "Inquiry accepted"
                );
            }
            Err(e) => {
                tracing::error!(
                    sink = %self.inner.name(),
                    duration_ms = %duration.as_millis(),
                    error = %e,
                    "Inquiry submission failed"
                );
            }
        }

        result
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
