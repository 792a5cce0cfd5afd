//! Server-side HTML rendering

use super::content::{self, LegalPage};
use crate::inquiry::ProductInterest;
use chrono::Datelike;

/// Escape text for HTML element and attribute content
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/assets/site.css">
</head>
<body>
{body}
<script src="/assets/site.js" defer></script>
</body>
</html>
"#,
        title = escape(title),
    )
}

// ============================================================
// Shared chrome
// ============================================================

fn navigation(link_prefix: &str) -> String {
    let links: String = content::NAV_SECTIONS
        .iter()
        .map(|(id, label)| format!(r##"<a href="{link_prefix}#{id}">{}</a>"##, escape(label)))
        .collect();
    format!(
        r##"<nav class="site-nav" data-scroll-nav>
<a class="brand" href="/">{brand}</a>
<button class="nav-toggle" type="button" aria-label="Menu" data-nav-toggle>&#9776;</button>
<div class="nav-links">{links}<a class="btn-gold" href="{link_prefix}#contact">Contact Us</a></div>
</nav>"##,
        brand = escape(content::BRAND),
    )
}

fn footer(link_prefix: &str) -> String {
    let quick_links: String = content::NAV_SECTIONS
        .iter()
        .map(|(id, label)| {
            let label = if *id == "about" { "About Us" } else { *label };
            format!(r##"<li><a href="{link_prefix}#{id}">{}</a></li>"##, escape(label))
        })
        .collect();
    let product_links: String = content::FOOTER_PRODUCT_LINKS
        .iter()
        .map(|name| format!(r##"<li><a href="{link_prefix}#categories">{}</a></li>"##, escape(name)))
        .collect();
    let contact_lines: String = content::CONTACT
        .address_lines
        .iter()
        .chain([&content::CONTACT.email, &content::CONTACT.phone])
        .map(|line| format!("<li>{}</li>", escape(line)))
        .collect();
    let year = chrono::Utc::now().year();

    format!(
        r#"<footer class="site-footer">
<div class="footer-grid">
<div><div class="footer-brand">{brand}</div><p>{tagline}</p></div>
<div><h4>Quick Links</h4><ul>{quick_links}</ul></div>
<div><h4>Products</h4><ul>{product_links}</ul></div>
<div><h4>Contact</h4><ul>{contact_lines}</ul></div>
</div>
<div class="footer-bottom">
<span>&copy; {year} {brand}. All rights reserved.</span>
<span><a href="{privacy}">{privacy_title}</a> <a href="{terms}">{terms_title}</a></span>
</div>
</footer>"#,
        brand = escape(content::BRAND),
        tagline = escape(content::TAGLINE),
        privacy = content::PRIVACY_POLICY.path,
        privacy_title = escape(content::PRIVACY_POLICY.title),
        terms = content::TERMS_OF_SERVICE.path,
        terms_title = escape(content::TERMS_OF_SERVICE.title),
    )
}

fn chat_widget() -> String {
    format!(
        r#"<div class="chat-widget" data-chat-endpoint="/api/chat/sessions" hidden>
<div class="chat-header"><span>Virma Assistant</span><button type="button" aria-label="Minimize" data-chat-close>&minus;</button></div>
<div class="chat-log" data-chat-log></div>
<div class="chat-quick-replies" data-chat-quick-replies></div>
<form class="chat-input" data-chat-form><input type="text" name="text" placeholder="Type your message..." autocomplete="off"><button class="btn-gold" type="submit">Send</button></form>
</div>
<button class="chat-launcher btn-gold" type="button" data-chat-open>Chat with us</button>
<noscript><p class="chat-noscript">Chat needs JavaScript. Email us at {email}.</p></noscript>"#,
        email = escape(content::CONTACT.email),
    )
}

// ============================================================
// Landing page sections
// ============================================================

fn hero() -> String {
    let hero = &content::HERO;
    format!(
        r##"<section class="hero">
<div class="hero-text">
<span class="badge">{badge}</span>
<h1>{headline}<br><span class="gold">{highlight}</span></h1>
<p>{lead}</p>
<a class="btn-gold" href="#products">Explore Products</a>
<a class="btn-outline" href="#contact">Contact Us</a>
</div>
</section>"##,
        badge = escape(hero.badge),
        headline = escape(hero.headline),
        highlight = escape(hero.highlight),
        lead = escape(hero.lead),
    )
}

fn about() -> String {
    let paragraphs: String = content::ABOUT_PARAGRAPHS
        .iter()
        .map(|p| format!("<p>{}</p>", escape(p)))
        .collect();
    let stats: String = content::STATS
        .iter()
        .map(|stat| {
            format!(
                r#"<div class="stat-card"><div class="stat-value">{}</div><div class="stat-label">{}</div></div>"#,
                escape(stat.value),
                escape(stat.label)
            )
        })
        .collect();
    format!(
        r#"<section id="about" class="section">
<div class="two-col">
<div><h2>A Legacy of<br>Excellence</h2>{paragraphs}</div>
<div class="stat-grid">{stats}</div>
</div>
</section>"#
    )
}

fn products() -> String {
    let cards: String = content::FEATURED_PRODUCTS
        .iter()
        .map(|product| {
            format!(
                r##"<article class="card"><h3>{}</h3><p>{}</p><span class="pill">{}</span><a href="#contact">Request Catalogue</a></article>"##,
                escape(product.name),
                escape(product.description),
                escape(product.sizes)
            )
        })
        .collect();
    format!(
        r#"<section id="products" class="section alt">
<h2>Our Products</h2>
<p class="section-lead">Discover our range of premium hardware solutions, crafted with precision and designed to last.</p>
<div class="card-grid">{cards}</div>
</section>"#
    )
}

fn categories() -> String {
    let cards: String = content::CATEGORIES
        .iter()
        .map(|category| {
            format!(
                r#"<div class="category-card"><h3>{}</h3><p>{}</p></div>"#,
                escape(category.name),
                escape(category.count)
            )
        })
        .collect();
    format!(
        r#"<section id="categories" class="section">
<h2>Product Categories</h2>
<p class="section-lead">Explore our comprehensive range of hardware solutions for every need.</p>
<div class="card-grid">{cards}</div>
</section>"#
    )
}

fn why_choose() -> String {
    let cards: String = content::VALUE_PROPOSITIONS
        .iter()
        .map(|value| {
            format!(
                r#"<div class="feature-card"><h3>{}</h3><p>{}</p></div>"#,
                escape(value.title),
                escape(value.description)
            )
        })
        .collect();
    format!(
        r#"<section class="section alt">
<h2>Why Choose Virma</h2>
<p class="section-lead">We combine traditional craftsmanship with modern manufacturing to deliver excellence.</p>
<div class="card-grid four">{cards}</div>
</section>"#
    )
}

fn network() -> String {
    let cities: String = content::NETWORK_CITIES
        .iter()
        .map(|city| format!(r#"<span class="pill">{}</span>"#, escape(city)))
        .collect();
    format!(
        r#"<section id="network" class="section">
<div class="two-col">
<div>
<h2>Our Distribution<br>Network</h2>
<p>{summary}</p>
<div class="pill-row">{cities}</div>
<button class="btn-gold" type="button" data-chat-open data-chat-quick-reply="distributor">Become a Distributor</button>
</div>
<div class="coverage-badge"><div class="stat-value">{covered}</div><div class="stat-label">Cities Covered</div></div>
</div>
</section>"#,
        summary = escape(content::NETWORK_SUMMARY),
        covered = escape(content::CITIES_COVERED),
    )
}

fn contact() -> String {
    let details = &content::CONTACT;
    let address = details
        .address_lines
        .iter()
        .map(|line| escape(line))
        .collect::<Vec<_>>()
        .join("<br>");
    let options: String = ProductInterest::ALL
        .iter()
        .map(|interest| {
            format!(
                r#"<option value="{}">{}</option>"#,
                interest.slug(),
                escape(interest.label())
            )
        })
        .collect();
    format!(
        r#"<section id="contact" class="section alt">
<div class="two-col">
<div>
<h2>Get in Touch</h2>
<p>Have a question or need a quote? We'd love to hear from you. Fill out the form and our team will respond within 24 hours.</p>
<h4>Address</h4><p>{address}</p>
<h4>Email</h4><p>{email}</p>
<h4>Phone</h4><p>{phone}</p>
</div>
<form class="contact-form" data-inquiry-endpoint="/api/inquiries">
<label>Name *<input type="text" name="name" required></label>
<label>Business<input type="text" name="business"></label>
<label>Email *<input type="email" name="email" required></label>
<label>Phone<input type="tel" name="phone"></label>
<label>Product Interest<select name="product_interest"><option value="">Select a product</option>{options}</select></label>
<label>Quantity<input type="text" name="quantity" placeholder="e.g., 100 sets"></label>
<label class="wide">Message<textarea name="message" rows="4"></textarea></label>
<button class="btn-gold wide" type="submit">Send Inquiry</button>
<p class="form-status" data-inquiry-status role="status"></p>
</form>
</div>
</section>"#,
        email = escape(details.email),
        phone = escape(details.phone),
    )
}

// ============================================================
// Pages
// ============================================================

/// The single scrolling landing page
pub fn render_landing() -> String {
    let body = [
        navigation(""),
        "<main>".to_string(),
        hero(),
        about(),
        products(),
        categories(),
        why_choose(),
        network(),
        contact(),
        "</main>".to_string(),
        footer(""),
        chat_widget(),
    ]
    .join("\n");
    document(&format!("{} | Premium Hardware Solutions", content::BRAND), &body)
}

/// A legal page; in-page links point back at the landing page
pub fn render_legal(page: &LegalPage) -> String {
    let points: String = page
        .points
        .iter()
        .map(|point| format!("<li>{}</li>", escape(point)))
        .collect();
    let body = format!(
        r#"{nav}
<main class="legal">
<article>
<h1>{title}</h1>
<p>{intro}</p>
<ul>{points}</ul>
<p class="updated">Last updated: {updated}</p>
</article>
</main>
{footer}"#,
        nav = navigation("/"),
        title = escape(page.title),
        intro = escape(page.intro),
        updated = escape(page.last_updated),
        footer = footer("/"),
    );
    document(&format!("{} | {}", page.title, content::BRAND), &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_landing_has_every_section() {
        let html = render_landing();
        for id in ["about", "products", "categories", "network", "contact"] {
            assert!(html.contains(&format!(r#"id="{id}""#)), "missing section {id}");
        }
        assert!(html.contains("Why Choose Virma"));
        assert!(html.contains("Standard &amp; Premium"));
        assert!(html.contains("Lucknow"));
        assert!(html.contains("data-chat-endpoint"));
    }

    #[test]
    fn test_contact_form_fields() {
        let html = render_landing();
        for field in [
            "name", "business", "email", "phone", "product_interest", "quantity", "message",
        ] {
            assert!(html.contains(&format!(r#"name="{field}""#)), "missing field {field}");
        }
        assert!(html.contains(r#"<option value="multiple-products">Multiple Products</option>"#));
    }

    #[test]
    fn test_footer_links_to_legal_pages() {
        let html = render_landing();
        assert!(html.contains(r#"href="/privacy-policy""#));
        assert!(html.contains(r#"href="/terms""#));
    }

    #[test]
    fn test_legal_pages() {
        let privacy = render_legal(&content::PRIVACY_POLICY);
        assert!(privacy.contains("<h1>Privacy Policy</h1>"));
        assert!(privacy.contains("No cookies are used for tracking."));
        assert!(privacy.contains("Last updated: 2026"));
        assert!(privacy.contains(r##"href="/#contact""##));

        let terms = render_legal(&content::TERMS_OF_SERVICE);
        assert!(terms.contains("<h1>Terms of Service</h1>"));
        for point in content::TERMS_OF_SERVICE.points {
            assert!(terms.contains(&format!("<li>{}</li>", escape(point))));
        }
    }
}
