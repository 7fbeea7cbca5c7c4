//! Catalog rendering
//!
//! Leaked account records render as a flagged block, never coerced into
//! the item card shape.

use super::truncate;
use crate::domain::entities::{CatalogItem, CatalogRecord, ExposedAccount};

/// Render the browse view: a results header followed by one card per
/// record. `active_query` is the preserved query text when search holds
/// display authority.
pub fn render_listing(records: &[CatalogRecord], active_query: Option<&str>) -> String {
    let mut buf = String::new();

    match active_query {
        Some(query) => {
            buf.push_str(&format!(
                "# Search Results ({}) - searching for: \"{}\"\n\n",
                records.len(),
                query
            ));
        }
        None => {
            buf.push_str(&format!("# All Products ({})\n\n", records.len()));
        }
    }

    if records.is_empty() {
        buf.push_str("No products found.\n");
        buf.push_str("Try a different search term or clear your search.\n");
        return buf;
    }

    for record in records {
        match record {
            CatalogRecord::Item(item) => buf.push_str(&render_item_card(item)),
            CatalogRecord::Account(account) => buf.push_str(&render_account(account)),
        }
        buf.push('\n');
    }

    buf
}

fn render_item_card(item: &CatalogItem) -> String {
    let mut line = match item.id {
        Some(id) => format!("[{}] {} - ${:.2}", id, item.name, item.price),
        None => format!("[-] {} - ${:.2}", item.name, item.price),
    };

    if let Some(rating) = &item.rating {
        line.push_str(&format!(" | {:.1}/5 ({})", rating.average, rating.count));
    }
    if let Some(category) = &item.category {
        line.push_str(&format!(" | {}", category.to_uppercase()));
    }
    if !item.description.is_empty() {
        line.push_str(&format!("\n    {}", truncate(&item.description, 100)));
    }

    format!("{}\n", line)
}

fn render_account(account: &ExposedAccount) -> String {
    let id = account
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "!! EXPOSED USER DATA !!\n    ID: {}\n    Username: {}\n    Email: {}\n    Password: {}\n",
        id, account.username, account.email, account.password
    )
}

/// Render the detail view of one item (reviews render separately).
pub fn render_item_detail(item: &CatalogItem) -> String {
    let mut buf = String::new();

    buf.push_str(&format!("# {}\n\n", item.name));
    buf.push_str(&format!("Price: ${:.2}\n", item.price));
    if let Some(rating) = &item.rating {
        buf.push_str(&format!(
            "Rating: {:.1} / 5 ({} reviews)\n",
            rating.average, rating.count
        ));
    }
    if let Some(category) = &item.category {
        buf.push_str(&format!("Category: {}\n", category.to_uppercase()));
    }
    if !item.description.is_empty() {
        buf.push_str(&format!("\n{}\n", item.description));
    }
    // The cart affordance exists but is wired to nothing
    buf.push_str("\n[Add to Cart]\n");

    buf
}
