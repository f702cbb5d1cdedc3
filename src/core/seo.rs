//! # Structured Data
//!
//! The document head the site publishes: `<title>`, description/keywords,
//! Open Graph and Twitter Card tags, and one JSON-LD `HairSalon` block.
//!
//! [`Head`] models the head as an ordered element list. `mount` puts the
//! page's tags in (replacing earlier values for the same key), `unmount`
//! takes the JSON-LD block back out. The terminal shell uses the title for
//! the window title; `--print-head` renders the whole thing as HTML.

use serde_json::{Value, json};

use crate::core::content::{self, CONTACT};
use crate::core::format::format_hour;
use crate::core::state::Tab;

pub const SITE_KEYWORDS: &str =
    "barbershop, barber, haircut, skin fade, beard trim, hot towel shave, Springfield";
pub const SITE_IMAGE: &str = "https://sharpcornerbarbers.com/images/og-shopfront.jpg";
const SCHEMA_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Per-page values the head is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub url: String,
}

impl PageMeta {
    pub fn for_tab(tab: Tab) -> Self {
        let (title, description, path) = match tab {
            Tab::Home => (
                CONTACT.business_name.to_string(),
                "Classic craft, modern cuts. Fades, shaves and beard work on Market Street."
                    .to_string(),
                "/",
            ),
            Tab::About => (
                format!("About | {}", CONTACT.business_name),
                "Meet the barbers behind Sharp Corner and see our opening hours.".to_string(),
                "/about",
            ),
            Tab::Services => (
                format!("Services & Prices | {}", CONTACT.business_name),
                "Haircuts, skin fades, hot towel shaves and beard trims with prices.".to_string(),
                "/services",
            ),
            Tab::Contact => (
                format!("Contact | {}", CONTACT.business_name),
                "Send us a message or call to book your chair.".to_string(),
                "/contact",
            ),
        };
        PageMeta {
            title,
            description,
            url: format!("{}{}", CONTACT.website, path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaKey {
    /// `<meta name="...">`
    Name(&'static str),
    /// `<meta property="...">` (Open Graph)
    Property(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub enum HeadElement {
    Title(String),
    Meta { key: MetaKey, content: String },
    JsonLd(Value),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Head {
    elements: Vec<HeadElement>,
}

impl Head {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[HeadElement] {
        &self.elements
    }

    pub fn title(&self) -> Option<&str> {
        self.elements.iter().find_map(|e| match e {
            HeadElement::Title(t) => Some(t.as_str()),
            _ => None,
        })
    }

    pub fn meta(&self, key: &MetaKey) -> Option<&str> {
        self.elements.iter().find_map(|e| match e {
            HeadElement::Meta { key: k, content } if k == key => Some(content.as_str()),
            _ => None,
        })
    }

    pub fn json_ld(&self) -> Option<&Value> {
        self.elements.iter().find_map(|e| match e {
            HeadElement::JsonLd(v) => Some(v),
            _ => None,
        })
    }

    /// Installs the tags for `page`. Safe to call again on navigation.
    pub fn mount(&mut self, page: &PageMeta) {
        self.set_title(&page.title);

        let metas = [
            (MetaKey::Name("description"), page.description.clone()),
            (MetaKey::Name("keywords"), SITE_KEYWORDS.to_string()),
            (MetaKey::Property("og:title"), page.title.clone()),
            (MetaKey::Property("og:description"), page.description.clone()),
            (MetaKey::Property("og:type"), "website".to_string()),
            (MetaKey::Property("og:url"), page.url.clone()),
            (MetaKey::Property("og:image"), SITE_IMAGE.to_string()),
            (MetaKey::Name("twitter:card"), "summary_large_image".to_string()),
            (MetaKey::Name("twitter:title"), page.title.clone()),
            (MetaKey::Name("twitter:description"), page.description.clone()),
            (MetaKey::Name("twitter:image"), SITE_IMAGE.to_string()),
        ];
        for (key, content) in metas {
            self.set_meta(key, content);
        }

        self.elements.retain(|e| !matches!(e, HeadElement::JsonLd(_)));
        self.elements.push(HeadElement::JsonLd(business_json_ld()));
    }

    /// Removes the JSON-LD block. Title and meta tags stay.
    pub fn unmount(&mut self) {
        self.elements.retain(|e| !matches!(e, HeadElement::JsonLd(_)));
    }

    fn set_title(&mut self, title: &str) {
        match self
            .elements
            .iter_mut()
            .find(|e| matches!(e, HeadElement::Title(_)))
        {
            Some(HeadElement::Title(t)) => *t = title.to_string(),
            _ => self.elements.insert(0, HeadElement::Title(title.to_string())),
        }
    }

    fn set_meta(&mut self, key: MetaKey, content: String) {
        let existing = self.elements.iter_mut().find_map(|e| match e {
            HeadElement::Meta { key: k, content: c } if *k == key => Some(c),
            _ => None,
        });
        match existing {
            Some(c) => *c = content,
            None => self.elements.push(HeadElement::Meta { key, content }),
        }
    }

    pub fn render_html(&self) -> String {
        let mut out = String::new();
        for element in &self.elements {
            match element {
                HeadElement::Title(t) => {
                    out.push_str(&format!("<title>{}</title>\n", escape_text(t)));
                }
                HeadElement::Meta { key, content } => {
                    let (attr, name) = match key {
                        MetaKey::Name(n) => ("name", *n),
                        MetaKey::Property(p) => ("property", *p),
                    };
                    out.push_str(&format!(
                        "<meta {attr}=\"{}\" content=\"{}\">\n",
                        escape_text(name),
                        escape_text(content)
                    ));
                }
                HeadElement::JsonLd(value) => {
                    // `</` inside the payload would end the script element early
                    let payload = value.to_string().replace("</", "<\\/");
                    out.push_str(&format!(
                        "<script type=\"application/ld+json\">{payload}</script>\n"
                    ));
                }
            }
        }
        out
    }
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// schema.org `HairSalon` description of the business.
pub fn business_json_ld() -> Value {
    let opening_hours: Vec<Value> = content::HOURS
        .iter()
        .zip(SCHEMA_DAYS)
        .filter_map(|(hours, day)| {
            hours.open.map(|(opens, closes)| {
                json!({
                    "@type": "OpeningHoursSpecification",
                    "dayOfWeek": day,
                    "opens": format!("{opens:02}:00"),
                    "closes": format!("{closes:02}:00"),
                })
            })
        })
        .collect();

    let offers: Vec<Value> = content::SERVICES
        .iter()
        .map(|s| {
            json!({
                "@type": "Offer",
                "name": s.name,
                "price": format!("{}.{:02}", s.price_cents / 100, s.price_cents % 100),
                "priceCurrency": "USD",
            })
        })
        .collect();

    let ratings: Vec<u32> = content::TESTIMONIALS.iter().map(|t| t.rating as u32).collect();
    let average = if ratings.is_empty() {
        0.0
    } else {
        ratings.iter().sum::<u32>() as f64 / ratings.len() as f64
    };

    json!({
        "@context": "https://schema.org",
        "@type": "HairSalon",
        "name": CONTACT.business_name,
        "url": CONTACT.website,
        "image": SITE_IMAGE,
        "telephone": CONTACT.phone,
        "email": CONTACT.email,
        "priceRange": "$$",
        "address": {
            "@type": "PostalAddress",
            "streetAddress": CONTACT.street,
            "addressLocality": CONTACT.city,
            "addressRegion": CONTACT.region,
            "postalCode": CONTACT.postal_code,
            "addressCountry": CONTACT.country,
        },
        "openingHoursSpecification": opening_hours,
        "makesOffer": offers,
        "aggregateRating": {
            "@type": "AggregateRating",
            "ratingValue": format!("{average:.1}"),
            "reviewCount": ratings.len(),
        },
    })
}

/// One-line opening hours for the footer, closed days left out.
pub fn opening_summary() -> String {
    content::HOURS
        .iter()
        .filter_map(|h| {
            h.open
                .map(|(o, c)| format!("{} {}-{}", &h.day[..3], format_hour(o), format_hour(c)))
        })
        .collect::<Vec<_>>()
        .join(", ")
}
