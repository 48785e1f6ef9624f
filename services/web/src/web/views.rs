//! services/web/src/web/views.rs
//!
//! Page templates and the pieces of render model every page shares.

use axum::response::Html;
use fitflix_core::effects::reveal_delays;
use fitflix_core::City;
use serde::Serialize;
use tera::{Context, Tera};

const TEMPLATES: [(&str, &str); 11] = [
    ("layout.html", include_str!("../../templates/layout.html")),
    ("home.html", include_str!("../../templates/home.html")),
    ("gyms.html", include_str!("../../templates/gyms.html")),
    ("services.html", include_str!("../../templates/services.html")),
    ("memberships.html", include_str!("../../templates/memberships.html")),
    ("trainers.html", include_str!("../../templates/trainers.html")),
    ("trainer_profile.html", include_str!("../../templates/trainer_profile.html")),
    ("city_selection.html", include_str!("../../templates/city_selection.html")),
    ("book.html", include_str!("../../templates/book.html")),
    ("contact.html", include_str!("../../templates/contact.html")),
    ("404.html", include_str!("../../templates/404.html")),
];

/// The compiled page templates.
pub struct Views {
    tera: Tera,
}

impl Views {
    /// Compiles the built-in templates. Fails only if a template does not parse.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        Ok(Self { tera })
    }

    pub fn render(&self, template: &str, context: &Context) -> Result<Html<String>, tera::Error> {
        self.tera.render(template, context).map(Html)
    }
}

/// The model every page starts from: its title, the session's city, the full
/// list of cities for the picker in the navbar and the path the picker
/// returns to.
pub fn base_context(
    title: &str,
    current_city: &City,
    cities: &[City],
    return_path: &str,
) -> Context {
    let mut context = Context::new();
    context.insert("title", title);
    context.insert("return_path", return_path);
    context.insert("current_city", current_city);
    context.insert("cities", cities);
    context
}

/// A listing card paired with its reveal delay.
#[derive(Serialize)]
pub struct Card<T> {
    #[serde(flatten)]
    pub item: T,
    pub delay_ms: u64,
}

/// Wraps listing items so their cards fade in one after another.
pub fn staggered<T, I>(items: I) -> Vec<Card<T>>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let items: Vec<T> = items.into_iter().collect();
    let delays = reveal_delays(items.len());
    items
        .into_iter()
        .zip(delays)
        .map(|(item, delay)| Card {
            item,
            delay_ms: delay.as_millis() as u64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitflix_core::seed;

    #[test]
    fn every_template_parses() {
        assert!(Views::new().is_ok());
    }

    #[test]
    fn not_found_page_renders_with_base_context() {
        let catalog = seed::catalog().unwrap();
        let views = Views::new().unwrap();
        let context = base_context(
            "Page Not Found",
            catalog.default_city(),
            catalog.cities(),
            "/missing",
        );

        let Html(body) = views.render("404.html", &context).unwrap();
        assert!(body.contains("Page Not Found"));
        assert!(body.contains("Mumbai"));
        // autoescape renders '/' as an entity
        assert!(body.contains(r#"name="returnUrl" value="&#x2F;missing""#));
    }

    #[test]
    fn staggered_cards_keep_fields_and_delays() {
        let catalog = seed::catalog().unwrap();
        let cards = staggered(catalog.top_gyms(3));

        let delays: Vec<u64> = cards.iter().map(|c| c.delay_ms).collect();
        assert_eq!(delays, vec![0, 100, 200]);

        let json = serde_json::to_value(&cards[1]).unwrap();
        assert_eq!(json["name"], "PowerHouse Gym");
        assert_eq!(json["delay_ms"], 100);
    }
}
