//! reqwest-backed client for the catalog rating API

use super::traits::RatingClientTrait;
use crate::error::SubmissionError;
use crate::state::{CommentSubmission, OfferingDetails};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};

/// Header carrying the anti-forgery token
const CSRF_HEADER: &str = "X-CSRFToken";

/// Client for the catalog rating API
#[derive(Clone)]
pub struct HttpRatingClient {
    client: reqwest::Client,
}

impl HttpRatingClient {
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("offering-rating/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl RatingClientTrait for HttpRatingClient {
    async fn get_offering(&self, url: &str, cookies: Option<String>) -> Result<OfferingDetails> {
        let mut request = self.client.get(url);
        if let Some(cookies) = cookies {
            request = request.header(COOKIE, cookies);
        }

        let response = request
            .send()
            .await
            .map_err(|e| anyhow!("Failed to load offering: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "{}",
                SubmissionError::rejected(status.as_u16(), &body)
            ));
        }

        response
            .json::<OfferingDetails>()
            .await
            .context("Invalid offering response")
    }

    async fn submit_comment(
        &self,
        url: &str,
        csrf_token: Option<String>,
        cookies: Option<String>,
        submission: &CommentSubmission,
    ) -> Result<(), SubmissionError> {
        // .json() sets Content-Type: application/json
        let mut request = self.client.post(url).json(submission);
        if let Some(token) = csrf_token {
            request = request.header(CSRF_HEADER, token);
        }
        if let Some(cookies) = cookies {
            request = request.header(COOKIE, cookies);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(SubmissionError::rejected(status.as_u16(), &body))
    }
}
