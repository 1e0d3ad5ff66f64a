//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::BTreeMap;
use std::sync::Arc;

use url::Url;

use crate::core::catalog::{Catalog, Item};
use crate::core::category::{CuratedView, Taxonomy};
use crate::core::state::App;

fn item(id: &str, title: &str, category: &str, view_count: u64, tags: &[&str]) -> Item {
    Item {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        view_count,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        content: Some(format!("Answer to *{title}*")),
    }
}

/// A small music-shop catalog: "top" is curated (with a dangling id), and
/// "contact" links straight to item 7.
pub fn test_catalog() -> Catalog {
    let categories = ["top", "piano", "guitar", "lessons", "contact"]
        .iter()
        .map(|c| c.to_string())
        .collect();
    let curated = CuratedView {
        category: "top".to_string(),
        ids: vec!["3".to_string(), "1".to_string(), "9".to_string()],
    };
    let direct_links = BTreeMap::from([("contact".to_string(), "7".to_string())]);
    let taxonomy = Taxonomy::new(categories, "top".to_string(), Some(curated), direct_links)
        .expect("test taxonomy is valid");

    let items = vec![
        item("1", "How often should I tune my piano?", "piano", 10, &["tuning", "care"]),
        item("2", "What causes sticky piano keys?", "piano", 50, &["repair"]),
        item("3", "Which guitar strings should I buy?", "guitar", 5, &["strings"]),
        item("4", "Should I buy a digital or acoustic piano?", "piano", 10, &["buying"]),
        item("5", "Do you offer lessons for beginners?", "lessons", 30, &["beginners"]),
        item("6", "How long is a typical lesson?", "lessons", 30, &["beginners", "scheduling"]),
        item("7", "How can I contact the shop?", "contact", 1, &[]),
    ];
    Catalog::new(taxonomy, items).expect("test catalog is valid")
}

pub fn ids(items: &[&Item]) -> Vec<String> {
    items.iter().map(|i| i.id.clone()).collect()
}

/// Creates a test App over [`test_catalog`].
pub fn test_app() -> App {
    App::new(
        Arc::new(test_catalog()),
        Url::parse("https://faq.example.com").expect("valid test url"),
    )
}
