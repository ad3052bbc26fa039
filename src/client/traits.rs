//! Trait abstraction for the rating client to enable mocking in tests

use crate::error::SubmissionError;
use crate::state::{CommentSubmission, OfferingDetails};
use anyhow::Result;
use async_trait::async_trait;

/// Operations against the catalog rating API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingClientTrait: Send + Sync {
    /// Fetch an offering with its average rating and comments.
    ///
    /// `cookies` is a ready `Cookie` header value.
    async fn get_offering(&self, url: &str, cookies: Option<String>) -> Result<OfferingDetails>;

    /// Post a new rating entry.
    ///
    /// `csrf_token` is sent as `X-CSRFToken` and `cookies` as the `Cookie`
    /// header when present.
    async fn submit_comment(
        &self,
        url: &str,
        csrf_token: Option<String>,
        cookies: Option<String>,
        submission: &CommentSubmission,
    ) -> Result<(), SubmissionError>;
}
