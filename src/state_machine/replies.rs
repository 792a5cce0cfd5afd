//! Canned assistant replies

pub const GREETING: &str = "Welcome to Virma International! How can I assist you today?";

pub const DETAILS_ACKNOWLEDGED: &str = "Thank you for your details! Our team will contact you within 24 hours.\n\nIs there anything else I can help you with?";

pub(super) const PRODUCTS: &str = "We manufacture 500+ premium stainless steel hardware products including aldrops, hinges, door kits, handle sets, and accessories.\n\nTo share relevant product details, please provide:\n• Company Name\n• Email Address\n• Phone Number";

pub(super) const QUOTE: &str = "Prices depend on product type, finish, size, and quantity.\n\nPlease share your details so we can send you an accurate quotation:\n• Company Name\n• Email Address\n• Phone Number\n• (Optional) Product code or requirement";

pub(super) const DISTRIBUTOR: &str = "We are always open to expanding our distributor network across India.\n\nPlease share your business details:\n• Company Name\n• Contact Person Name\n• Email Address\n• Phone Number\n• City / State";

pub(super) const BULK_ORDER: &str = "We specialize in bulk and wholesale orders for projects and dealers.\n\nKindly share your details:\n• Company Name\n• Email Address\n• Phone Number\n• (Optional) Estimated quantity or product type";

pub(super) const CONTACT: &str = "You can contact Virma International directly:\n\n📧 Email: hello@virmahardware.com\n📞 Phone: +91-XXXXXXXXXX\n⏱️ We respond within 24 hours on business days.\n\nOr fill out the Contact Us form on our website!";

pub(super) const FAQ_MANUFACTURE: &str = "We manufacture premium stainless steel door hardware including aldrops, hinges, door kits, handle sets, tower bolts, and accessories in multiple finishes.";

pub(super) const FAQ_FINISH: &str = "Our products are available in finishes like Full Polish, Matte, Antique Brass, Copper, Gold, Black, and custom decorative finishes.";

pub(super) const FAQ_PRICING: &str = "Prices and MOQ vary based on product type, size, finish, and quantity. Please select \"Get Price / Quote\" for detailed pricing.";

pub(super) const FAQ_HISTORY: &str = "Virma International has been serving the hardware industry since 2007 - over 18 years of excellence!";

pub(super) const FAQ_CATALOG: &str = "Yes, we provide product catalogs! Please select \"View Products\" or contact us at hello@virmahardware.com to request one.";

pub(super) const FAQ_COVERAGE: &str = "Yes, we distribute our products across India through our network of 20+ wholesalers and 40+ retailers.";

pub(super) const FALLBACK: &str = "Thank you for reaching out.\n\nFor detailed or specific queries, please contact us at:\n📧 hello@virmahardware.com\n\nOur team will assist you within 24 hours.";
