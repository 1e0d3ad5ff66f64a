//! Listing orders for the non-search paths: the authored "top" sequence and
//! the per-category popularity sort.

use log::debug;

use crate::core::catalog::Item;
use crate::core::category::Category;

/// Items in exactly the order of `ids`. Ids with no matching item are skipped.
pub fn curated<'a>(ids: &[String], items: &'a [Item]) -> Vec<&'a Item> {
    ids.iter()
        .filter_map(|id| {
            let found = items.iter().find(|item| &item.id == id);
            if found.is_none() {
                debug!("Curated id {:?} not in catalog, skipping", id);
            }
            found
        })
        .collect()
}

/// Items of one category, most viewed first. Equal counts keep collection order.
pub fn by_view_count<'a>(category: &Category, items: &'a [Item]) -> Vec<&'a Item> {
    let mut listed: Vec<&Item> = items
        .iter()
        .filter(|item| item.category == category.as_str())
        .collect();
    listed.sort_by(|a, b| b.view_count.cmp(&a.view_count));
    listed
}
