//! Review rendering
//!
//! Review text is attacker-controlled: the backend stores whatever was
//! submitted, markup included. Under `MarkupPolicy::Escaped` (the
//! default) the text is escaped before output. `MarkupPolicy::Raw`
//! reproduces the original storefront's verbatim injection of submitted
//! markup and must only ever be selected by the insecure-demo flag.

use super::{escape_markup, MarkupPolicy};
use crate::domain::entities::Review;

pub fn render_reviews(reviews: &[Review], policy: MarkupPolicy) -> String {
    let mut buf = String::new();

    buf.push_str(&format!("## Customer Reviews ({})\n\n", reviews.len()));

    if reviews.is_empty() {
        buf.push_str("No reviews yet. Be the first to review this product!\n");
        return buf;
    }

    for review in reviews {
        buf.push_str(&render_review(review, policy));
        buf.push('\n');
    }

    buf
}

fn render_review(review: &Review, policy: MarkupPolicy) -> String {
    let author = if review.username.is_empty() {
        "anonymous"
    } else {
        review.username.as_str()
    };
    let date = review
        .created_at
        .map(|at| at.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unknown date".to_string());

    let body = match policy {
        MarkupPolicy::Escaped => escape_markup(&review.comment),
        MarkupPolicy::Raw => review.comment.clone(),
    };

    format!("{} ({})\n    {}\n", author, date, body)
}
