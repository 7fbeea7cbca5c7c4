//! Test fixtures
//!
//! Factory functions for feed records and reviews with sensible defaults.

use serde_json::{json, Value};

use crate::domain::entities::Review;

/// A well-formed item record as the feed sends it
pub fn feed_item(id: i64, name: &str, price: f64) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{name} in fine condition"),
        "price": price,
        "image": format!("http://localhost:8000/images/{id}.png"),
        "category": "general",
    })
}

/// A leaked account record as the feed sends it
pub fn feed_account(id: i64, username: &str, email: &str, password: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "email": email,
        "password": password,
    })
}

pub fn test_review(username: &str, comment: &str) -> Review {
    Review {
        id: Some(1),
        username: username.to_string(),
        comment: comment.to_string(),
        created_at: None,
    }
}
