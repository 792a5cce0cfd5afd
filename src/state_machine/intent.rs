//! Keyword intent classification
//!
//! Matching is plain substring containment on the lower-cased text, so
//! "ideal" hits "deal" and "border" hits "order". Groups are scanned in
//! priority order and the first hit wins.

use super::replies;
use serde::Serialize;

/// Classified purpose of a visitor message. Derived per input, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Products,
    Quote,
    Distributor,
    BulkOrder,
    Contact,
    FaqManufacture,
    FaqFinish,
    FaqPricing,
    FaqHistory,
    FaqCatalog,
    FaqCoverage,
    Fallback,
}

/// Menu intents, checked first
const PRIMARY_KEYWORDS: &[(Intent, &[&str])] = &[
    (Intent::Products, &["product", "view"]),
    (Intent::Quote, &["price", "quote", "cost"]),
    (Intent::Distributor, &["distributor", "partner", "deal"]),
    (Intent::BulkOrder, &["bulk", "order", "wholesale"]),
    (Intent::Contact, &["contact", "support", "call"]),
];

/// FAQ topics, only reached when no menu intent matched. "price" can never
/// select `FaqPricing` because `Quote` claims it first.
const FAQ_KEYWORDS: &[(Intent, &[&str])] = &[
    (Intent::FaqManufacture, &["manufacture", "make"]),
    (Intent::FaqFinish, &["finish", "color"]),
    (Intent::FaqPricing, &["price", "moq", "minimum"]),
    (Intent::FaqHistory, &["since", "established", "year"]),
    (Intent::FaqCatalog, &["catalog", "catalogue"]),
    (Intent::FaqCoverage, &["india", "supply", "deliver"]),
];

/// Classify free text into an intent
pub fn classify(text: &str) -> Intent {
    let lowered = text.to_lowercase();
    PRIMARY_KEYWORDS
        .iter()
        .chain(FAQ_KEYWORDS)
        .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map_or(Intent::Fallback, |(intent, _)| *intent)
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Products => "products",
            Intent::Quote => "quote",
            Intent::Distributor => "distributor",
            Intent::BulkOrder => "bulk_order",
            Intent::Contact => "contact",
            Intent::FaqManufacture => "faq_manufacture",
            Intent::FaqFinish => "faq_finish",
            Intent::FaqPricing => "faq_pricing",
            Intent::FaqHistory => "faq_history",
            Intent::FaqCatalog => "faq_catalog",
            Intent::FaqCoverage => "faq_coverage",
            Intent::Fallback => "fallback",
        }
    }

    /// Lead-capture intents ask for contact details and wait for them
    pub fn captures_lead(self) -> bool {
        matches!(
            self,
            Intent::Products | Intent::Quote | Intent::Distributor | Intent::BulkOrder
        )
    }

    /// Canned assistant reply for this intent
    pub fn reply(self) -> &'static str {
        match self {
            Intent::Products => replies::PRODUCTS,
            Intent::Quote => replies::QUOTE,
            Intent::Distributor => replies::DISTRIBUTOR,
            Intent::BulkOrder => replies::BULK_ORDER,
            Intent::Contact => replies::CONTACT,
            Intent::FaqManufacture => replies::FAQ_MANUFACTURE,
            Intent::FaqFinish => replies::FAQ_FINISH,
            Intent::FaqPricing => replies::FAQ_PRICING,
            Intent::FaqHistory => replies::FAQ_HISTORY,
            Intent::FaqCatalog => replies::FAQ_CATALOG,
            Intent::FaqCoverage => replies::FAQ_COVERAGE,
            Intent::Fallback => replies::FALLBACK,
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_groups() {
        assert_eq!(classify("Can I view your range?"), Intent::Products);
        assert_eq!(classify("How much does it COST"), Intent::Quote);
        assert_eq!(classify("I want to become a distributor in Pune"), Intent::Distributor);
        assert_eq!(classify("wholesale rates"), Intent::BulkOrder);
        assert_eq!(classify("Please call me"), Intent::Contact);
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(classify("what is the price for bulk order"), Intent::Quote);
        assert_eq!(classify("product support"), Intent::Products);
        assert_eq!(classify("partner for bulk supply"), Intent::Distributor);
    }

    #[test]
    fn test_faq_groups() {
        assert_eq!(classify("What do you manufacture?"), Intent::FaqManufacture);
        assert_eq!(classify("which colors"), Intent::FaqFinish);
        assert_eq!(classify("what is your MOQ"), Intent::FaqPricing);
        assert_eq!(classify("established when?"), Intent::FaqHistory);
        assert_eq!(classify("Do you have a catalogue?"), Intent::FaqCatalog);
        assert_eq!(classify("Do you ship across India"), Intent::FaqCoverage);
    }

    #[test]
    fn test_price_never_reaches_faq_pricing() {
        assert_eq!(classify("minimum price"), Intent::Quote);
        assert_eq!(classify("minimum quantity"), Intent::FaqPricing);
    }

    #[test]
    fn test_substring_matching_is_preserved() {
        assert_eq!(classify("an ideal finish"), Intent::Distributor);
        assert_eq!(classify("recall"), Intent::Contact);
    }

    #[test]
    fn test_fallback() {
        assert_eq!(classify("hello"), Intent::Fallback);
        assert_eq!(classify(""), Intent::Fallback);
    }

    const ALL_INTENTS: [Intent; 12] = [
        Intent::Products,
        Intent::Quote,
        Intent::Distributor,
        Intent::BulkOrder,
        Intent::Contact,
        Intent::FaqManufacture,
        Intent::FaqFinish,
        Intent::FaqPricing,
        Intent::FaqHistory,
        Intent::FaqCatalog,
        Intent::FaqCoverage,
        Intent::Fallback,
    ];

    #[test]
    fn test_lead_capture_intents() {
        let leads: Vec<Intent> = ALL_INTENTS
            .into_iter()
            .filter(|i| i.captures_lead())
            .collect();
        assert_eq!(
            leads,
            vec![Intent::Products, Intent::Quote, Intent::Distributor, Intent::BulkOrder]
        );
    }

    #[test]
    fn test_each_intent_has_its_own_reply() {
        let expected: [(Intent, &[&str]); 12] = [
            (Intent::Products, &["500+ premium stainless steel", "relevant product details"]),
            (Intent::Quote, &["accurate quotation", "Product code or requirement"]),
            (Intent::Distributor, &["distributor network", "City / State"]),
            (Intent::BulkOrder, &["bulk and wholesale orders", "Estimated quantity"]),
            (Intent::Contact, &["contact Virma International directly", "Contact Us form"]),
            (Intent::FaqManufacture, &["door hardware", "multiple finishes"]),
            (Intent::FaqFinish, &["Antique Brass", "custom decorative finishes"]),
            (Intent::FaqPricing, &["MOQ vary", "Get Price / Quote"]),
            (Intent::FaqHistory, &["since 2007", "18 years"]),
            (Intent::FaqCatalog, &["product catalogs", "to request one"]),
            (Intent::FaqCoverage, &["20+ wholesalers", "40+ retailers"]),
            (Intent::Fallback, &["Thank you for reaching out", "hello@virmahardware.com"]),
        ];

        for (intent, phrases) in expected {
            let reply = intent.reply();
            for phrase in phrases {
                assert!(reply.contains(phrase), "{intent} reply lacks {phrase:?}: {reply}");
            }
        }
        assert_eq!(
            expected.map(|(intent, _)| intent),
            ALL_INTENTS,
            "every intent is pinned"
        );
    }

    #[test]
    fn test_lead_replies_are_distinct() {
        let replies = [
            Intent::Products.reply(),
            Intent::Quote.reply(),
            Intent::Distributor.reply(),
            Intent::BulkOrder.reply(),
        ];
        for (i, a) in replies.iter().enumerate() {
            for b in &replies[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
