//! Endpoint resolution for offering-scoped API routes

use crate::state::OfferingContext;

/// Named API routes scoped to an offering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// A single offering
    OfferingEntry,
    /// Rating and comment collection of an offering
    RatingEntry,
}

impl Endpoint {
    fn suffix(self) -> &'static str {
        match self {
            Endpoint::OfferingEntry => "",
            Endpoint::RatingEntry => "/review",
        }
    }
}

/// Turns an endpoint name plus offering into an absolute URL
#[derive(Debug, Clone)]
pub struct EndpointResolver {
    base_url: String,
}

impl EndpointResolver {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve `endpoint` for `ctx`; path segments are percent-encoded
    pub fn resolve(&self, endpoint: Endpoint, ctx: &OfferingContext) -> String {
        format!(
            "{}/api/offering/offerings/{}/{}/{}{}",
            self.base_url,
            urlencoding::encode(&ctx.organization),
            urlencoding::encode(&ctx.name),
            urlencoding::encode(&ctx.version),
            endpoint.suffix()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> OfferingContext {
        OfferingContext::new("acme", "weather-api", "1.0")
    }

    #[test]
    fn test_rating_entry() {
        let resolver = EndpointResolver::new("http://localhost:8000");
        assert_eq!(
            resolver.resolve(Endpoint::RatingEntry, &ctx()),
            "http://localhost:8000/api/offering/offerings/acme/weather-api/1.0/review"
        );
    }

    #[test]
    fn test_offering_entry() {
        let resolver = EndpointResolver::new("http://localhost:8000");
        assert_eq!(
            resolver.resolve(Endpoint::OfferingEntry, &ctx()),
            "http://localhost:8000/api/offering/offerings/acme/weather-api/1.0"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let resolver = EndpointResolver::new("https://store.example.com//");
        assert_eq!(resolver.base_url(), "https://store.example.com");
    }

    #[test]
    fn test_segments_are_encoded() {
        let resolver = EndpointResolver::new("http://h");
        let ctx = OfferingContext::new("Big Org", "a/b", "1.0");
        assert_eq!(
            resolver.resolve(Endpoint::RatingEntry, &ctx),
            "http://h/api/offering/offerings/Big%20Org/a%2Fb/1.0/review"
        );
    }
}
