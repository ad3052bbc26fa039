//! HTTP client module for the catalog rating API

mod cookies;
mod endpoints;
mod http;
mod traits;

pub use cookies::{CookieJar, CookieStore, CSRF_COOKIE};
pub use endpoints::{Endpoint, EndpointResolver};
pub use http::HttpRatingClient;
pub use traits::RatingClientTrait;

#[cfg(test)]
pub use traits::MockRatingClientTrait;
