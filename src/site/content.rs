//! Company content shown on the site

pub const BRAND: &str = "Virma International";
pub const TAGLINE: &str = "Premium hardware solutions since 2007. Crafting excellence in every piece.";

pub struct ContactDetails {
    pub address_lines: &'static [&'static str],
    pub email: &'static str,
    pub phone: &'static str,
}

pub const CONTACT: ContactDetails = ContactDetails {
    address_lines: &[
        "D-97 Sector 1, Tala Nagri",
        "Aligarh-202001, Uttar Pradesh, India",
    ],
    email: "hello@virmahardware.com",
    phone: "+91-XXXXXXXXXX",
};

/// In-page anchors, in navigation order
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("about", "About"),
    ("products", "Products"),
    ("categories", "Categories"),
    ("network", "Network"),
];

pub struct Hero {
    pub badge: &'static str,
    pub headline: &'static str,
    pub highlight: &'static str,
    pub lead: &'static str,
}

pub const HERO: Hero = Hero {
    badge: "Since 2007",
    headline: "Premium Hardware",
    highlight: "Solutions",
    lead: "Crafting excellence in every piece. We manufacture and distribute premium door hardware, cabinet handles, and accessories across India.",
};

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Founded in 2007, Virma International has grown from a small workshop in Aligarh to one of India's most trusted names in premium hardware. Our commitment to quality craftsmanship and customer satisfaction has earned us a network of 20+ wholesalers and 40+ retailers across the nation.",
    "Every product that bears the Virma name undergoes rigorous quality testing, ensuring durability, elegance, and performance that exceeds expectations.",
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "18+", label: "Years Experience" },
    Stat { value: "20+", label: "Wholesalers" },
    Stat { value: "40+", label: "Retailers" },
    Stat { value: "500+", label: "Products" },
    Stat { value: "100K+", label: "Units Sold" },
    Stat { value: "98%", label: "Satisfaction" },
];

pub struct Product {
    pub name: &'static str,
    pub description: &'static str,
    pub sizes: &'static str,
}

pub const FEATURED_PRODUCTS: &[Product] = &[
    Product {
        name: "S.S. Premium Aldrops",
        description: "Engineered in stainless steel with smooth glide mechanism. Available in multiple sizes and finishes.",
        sizes: "6″ / 8″ / 10″ / 12″",
    },
    Product {
        name: "Door Hardware Kits",
        description: "Complete sets including aldrop, handle, stopper, and tower bolt with coordinated finishes.",
        sizes: "Standard & Premium",
    },
    Product {
        name: "Cabinet Handles",
        description: "Minimal profile with maximum grip. Perfect for modern and traditional interiors.",
        sizes: "4″ / 6″ / 8″ / 10″",
    },
];

pub struct Category {
    pub name: &'static str,
    pub count: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category { name: "Aldrops", count: "50+ variants" },
    Category { name: "Door Kits", count: "20+ sets" },
    Category { name: "Cabinet Handles", count: "100+ designs" },
    Category { name: "Tower Bolts", count: "30+ styles" },
    Category { name: "Stoppers", count: "15+ types" },
    Category { name: "Accessories", count: "200+ items" },
];

pub struct ValueProposition {
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUE_PROPOSITIONS: &[ValueProposition] = &[
    ValueProposition {
        title: "Premium Quality",
        description: "Every product undergoes rigorous quality testing to ensure durability and performance.",
    },
    ValueProposition {
        title: "Wide Range",
        description: "500+ products across multiple categories to meet all your hardware needs.",
    },
    ValueProposition {
        title: "Competitive Pricing",
        description: "Best value for money with bulk discounts and flexible pricing options.",
    },
    ValueProposition {
        title: "Pan-India Delivery",
        description: "Fast and secure delivery to all major cities across India.",
    },
];

pub const NETWORK_SUMMARY: &str = "With 20+ wholesalers and 40+ retail partners across India, we ensure our products reach every corner of the country. Our efficient logistics network guarantees timely delivery and excellent service.";

pub const NETWORK_CITIES: &[&str] = &[
    "Delhi",
    "Mumbai",
    "Pune",
    "Hyderabad",
    "Bangalore",
    "Chennai",
    "Kolkata",
    "Ahmedabad",
    "Jaipur",
    "Lucknow",
];

pub const CITIES_COVERED: &str = "60+";

pub const FOOTER_PRODUCT_LINKS: &[&str] = &["Aldrops", "Door Kits", "Cabinet Handles", "Tower Bolts"];

/// A static legal page
pub struct LegalPage {
    pub path: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub points: &'static [&'static str],
    pub last_updated: &'static str,
}

pub const PRIVACY_POLICY: LegalPage = LegalPage {
    path: "/privacy-policy",
    title: "Privacy Policy",
    intro: "We respect your privacy. Any information submitted through our website is used only to respond to inquiries and provide services.",
    points: &[
        "We do not sell or share your data.",
        "Contact details are used only for communication.",
        "No cookies are used for tracking.",
    ],
    last_updated: "2026",
};

pub const TERMS_OF_SERVICE: LegalPage = LegalPage {
    path: "/terms",
    title: "Terms of Service",
    intro: "By accessing this website, you agree to comply with the following terms and conditions.",
    points: &[
        "All content including images and branding belongs to Virma International.",
        "No material may be reused without written permission.",
        "Product pricing and availability may change without notice.",
        "We are not responsible for indirect damages from website usage.",
    ],
    last_updated: "2026",
};
