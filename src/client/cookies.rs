//! Cookie access for anti-forgery tokens

use crate::config::RatingConfig;
use std::collections::HashMap;

/// Name of the cookie carrying the CSRF token
pub const CSRF_COOKIE: &str = "csrftoken";

/// Environment variable that overrides the configured CSRF token
const CSRF_TOKEN_ENV: &str = "OFFERING_RATING_CSRF_TOKEN";

/// Read access to session cookies
pub trait CookieStore: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;

    /// Every cookie as a `Cookie` header value, `None` when there are none
    fn header(&self) -> Option<String>;
}

/// In-memory cookie store seeded from configuration
#[derive(Debug, Clone, Default)]
pub struct CookieJar {
    cookies: HashMap<String, String>,
}

impl CookieJar {
    pub fn new(cookies: HashMap<String, String>) -> Self {
        Self { cookies }
    }

    /// Cookies from the config file, with the CSRF token env override applied
    pub fn from_config(config: &RatingConfig) -> Self {
        let mut jar = Self::new(config.cookies.clone());
        if let Ok(token) = std::env::var(CSRF_TOKEN_ENV) {
            jar.set(CSRF_COOKIE, token);
        }
        jar
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.cookies.insert(name.to_string(), value.into());
    }
}

impl CookieStore for CookieJar {
    fn get(&self, name: &str) -> Option<String> {
        self.cookies
            .get(name)
            .filter(|value| !value.is_empty())
            .cloned()
    }

    fn header(&self) -> Option<String> {
        let mut pairs: Vec<String> = self
            .cookies
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        if pairs.is_empty() {
            return None;
        }
        pairs.sort();
        Some(pairs.join("; "))
    }
}
