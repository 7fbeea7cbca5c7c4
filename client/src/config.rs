use std::env;

use crate::render::MarkupPolicy;

#[derive(Clone)]
pub struct Config {
    /// Base URL of the catalog backend
    pub api_base_url: String,
    /// Render submitted review markup verbatim (insecure demo mode).
    /// Off by default; the renderer escapes markup unless this is set.
    pub raw_review_markup: bool,
    /// Submitter id used for review posts (the demo deployment has no login)
    pub user_id: i64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_base_url: env::var("SHOPFRONT_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            raw_review_markup: env::var("SHOPFRONT_RAW_REVIEW_MARKUP")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            user_id: env::var("SHOPFRONT_USER_ID")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
        }
    }

    /// Markup policy for the review renderer
    pub fn markup_policy(&self) -> MarkupPolicy {
        if self.raw_review_markup {
            MarkupPolicy::Raw
        } else {
            MarkupPolicy::Escaped
        }
    }
}
