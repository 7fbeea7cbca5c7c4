//! Catalog feed entities and the record classifier
//!
//! The backend feed carries no type tag. Most records are catalog items,
//! but the unfiltered feed occasionally leaks account rows, so every
//! record is classified by field presence at the ingestion boundary:
//! a record carrying a `username` field is an account, everything else
//! is an item. Classification is total - any JSON value produces a
//! record, with missing optional fields defaulted rather than failing.

use serde::Serialize;
use serde_json::Value;

/// Unique identifier for a catalog product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ProductId(pub i64);

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// Aggregate rating attached to an item
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rating {
    /// Average score, expected in [0, 5]
    pub average: f64,
    /// Number of ratings, expected >= 0
    pub count: i64,
}

/// A well-formed catalog item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogItem {
    /// Absent when the feed omits a usable id; such items cannot be
    /// opened in the detail view.
    pub id: Option<ProductId>,
    pub name: String,
    pub description: String,
    /// Non-negative expected but not validated
    pub price: f64,
    pub image: String,
    pub category: Option<String>,
    pub rating: Option<Rating>,
}

/// An account row leaked into the catalog feed
///
/// Exists only because the backend feed is unfiltered. Rendered
/// distinctly, never coerced into an item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExposedAccount {
    pub id: Option<ProductId>,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// One entry of the catalog feed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CatalogRecord {
    Item(CatalogItem),
    Account(ExposedAccount),
}

impl CatalogRecord {
    pub fn id(&self) -> Option<ProductId> {
        match self {
            CatalogRecord::Item(item) => item.id,
            CatalogRecord::Account(account) => account.id,
        }
    }

    pub fn is_account(&self) -> bool {
        matches!(self, CatalogRecord::Account(_))
    }
}

/// Classify one feed record by field presence.
///
/// Pure and total: never errors, never panics. A record with a
/// `username` field is an `Account`; anything else (including
/// non-objects) projects into an `Item` with defaults for whatever
/// is missing.
pub fn classify(value: &Value) -> CatalogRecord {
    if value.get("username").is_some_and(|v| !v.is_null()) {
        CatalogRecord::Account(ExposedAccount {
            id: ident(value.get("id")),
            username: text(value, "username").unwrap_or_default(),
            // Partially item-shaped rows fall back to the item fields,
            // mirroring what the feed actually interleaves.
            email: text(value, "email")
                .or_else(|| text(value, "description"))
                .unwrap_or_default(),
            password: text(value, "password")
                .or_else(|| text(value, "price"))
                .unwrap_or_default(),
        })
    } else {
        CatalogRecord::Item(CatalogItem {
            id: ident(value.get("id")),
            name: text(value, "name")
                .or_else(|| text(value, "title"))
                .unwrap_or_default(),
            description: text(value, "description").unwrap_or_default(),
            price: number(value, "price").unwrap_or(0.0),
            image: text(value, "image").unwrap_or_default(),
            category: text(value, "category"),
            rating: number(value, "rating_rate").map(|average| Rating {
                average,
                count: value
                    .get("rating_count")
                    .and_then(Value::as_i64)
                    .unwrap_or(0),
            }),
        })
    }
}

/// A usable identifier: an integer, or a string holding one.
fn ident(value: Option<&Value>) -> Option<ProductId> {
    let value = value?;
    value
        .as_i64()
        .or_else(|| value.as_str()?.parse().ok())
        .map(ProductId)
}

/// A textual field: strings pass through, numbers are rendered.
fn text(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn number(value: &Value, key: &str) -> Option<f64> {
    match value.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classifies_item_without_username() {
        let record = classify(&json!({
            "id": 1,
            "name": "Widget",
            "description": "A widget",
            "price": 9.99,
            "image": "http://img/1.png",
            "category": "tools",
            "rating_rate": 4.5,
            "rating_count": 120,
        }));

        let CatalogRecord::Item(item) = record else {
            panic!("expected item");
        };
        assert_eq!(item.id, Some(ProductId(1)));
        assert_eq!(item.name, "Widget");
        assert_eq!(item.price, 9.99);
        assert_eq!(item.category.as_deref(), Some("tools"));
        let rating = item.rating.unwrap();
        assert_eq!(rating.average, 4.5);
        assert_eq!(rating.count, 120);
    }

    #[test]
    fn username_presence_selects_account() {
        let record = classify(&json!({
            "id": 2,
            "username": "bob",
            "email": "b@x.com",
            "password": "hunter2",
        }));

        let CatalogRecord::Account(account) = record else {
            panic!("expected account");
        };
        assert_eq!(account.id, Some(ProductId(2)));
        assert_eq!(account.username, "bob");
        assert_eq!(account.email, "b@x.com");
        assert_eq!(account.password, "hunter2");
    }

    #[test]
    fn account_falls_back_to_item_shaped_fields() {
        let record = classify(&json!({
            "id": 3,
            "username": "eve",
            "description": "e@x.com",
            "price": "s3cret",
        }));

        let CatalogRecord::Account(account) = record else {
            panic!("expected account");
        };
        assert_eq!(account.email, "e@x.com");
        assert_eq!(account.password, "s3cret");
    }

    #[test]
    fn item_accepts_title_alias_and_defaults() {
        let record = classify(&json!({ "title": "Gadget" }));

        let CatalogRecord::Item(item) = record else {
            panic!("expected item");
        };
        assert_eq!(item.id, None);
        assert_eq!(item.name, "Gadget");
        assert_eq!(item.description, "");
        assert_eq!(item.price, 0.0);
        assert!(item.rating.is_none());
        assert!(item.category.is_none());
    }

    #[test]
    fn classification_is_total_over_junk() {
        // Non-objects and empty objects still classify
        assert!(matches!(classify(&json!(null)), CatalogRecord::Item(_)));
        assert!(matches!(classify(&json!(42)), CatalogRecord::Item(_)));
        assert!(matches!(classify(&json!([])), CatalogRecord::Item(_)));
        assert!(matches!(classify(&json!({})), CatalogRecord::Item(_)));
        // Null username does not select the account variant
        assert!(matches!(
            classify(&json!({ "username": null, "name": "x" })),
            CatalogRecord::Item(_)
        ));
    }

    #[test]
    fn numeric_fields_tolerate_string_form() {
        let record = classify(&json!({ "id": "7", "name": "N", "price": "3.50" }));
        let CatalogRecord::Item(item) = record else {
            panic!("expected item");
        };
        assert_eq!(item.id, Some(ProductId(7)));
        assert_eq!(item.price, 3.5);
    }

    #[test]
    fn record_id_and_variant_accessors() {
        let item = classify(&json!({ "id": 5, "name": "A" }));
        assert_eq!(item.id(), Some(ProductId(5)));
        assert!(!item.is_account());

        let account = classify(&json!({ "username": "bob" }));
        assert_eq!(account.id(), None);
        assert!(account.is_account());
    }

    #[test]
    fn product_id_display_and_parse() {
        assert_eq!(ProductId(42).to_string(), "42");
        assert_eq!("42".parse::<ProductId>().unwrap(), ProductId(42));
        assert!("x".parse::<ProductId>().is_err());
    }
}
