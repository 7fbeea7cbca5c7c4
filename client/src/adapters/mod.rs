//! Adapters: concrete implementations of the domain ports

mod http;

pub use http::HttpCatalogApi;
