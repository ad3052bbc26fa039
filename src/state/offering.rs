//! Offering domain types shared by the detail view and the comment form

use super::rating::Rating;
use serde::{Deserialize, Serialize};

/// Identifies the offering being rated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferingContext {
    pub organization: String,
    pub name: String,
    pub version: String,
}

impl OfferingContext {
    pub fn new(
        organization: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            organization: organization.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// Short label used in titles, e.g. `acme/weather-api 1.0`
    pub fn display_name(&self) -> String {
        format!("{}/{} {}", self.organization, self.name, self.version)
    }
}

/// Request body for a new rating entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentSubmission {
    pub title: String,
    pub comment: String,
    pub rating: Rating,
}

/// Offering as returned by the catalog
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OfferingDetails {
    pub name: String,
    #[serde(alias = "owner_organization")]
    pub organization: String,
    pub version: String,
    pub state: String,
    pub description: Option<String>,
    /// Average of all submitted ratings
    pub rating: f32,
    pub comments: Vec<OfferingComment>,
}

impl OfferingDetails {
    pub fn average_rating(&self) -> Rating {
        Rating::from_average(self.rating)
    }
}

/// A previously submitted comment
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OfferingComment {
    pub user: String,
    pub timestamp: String,
    pub title: String,
    pub comment: String,
    pub rating: Rating,
}
