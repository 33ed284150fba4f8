//! HTTP client for the recipe-matching service.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Recipe;
use crate::SrfError;

/// Base URL the backing service listens on by default.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Recipe service error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub fn map_api_error(e: ApiError) -> SrfError {
    match e {
        ApiError::Request(req_err) => SrfError::Network(req_err),
        ApiError::Api { status, message } => SrfError::Api {
            status: reqwest::StatusCode::from_u16(status).ok(),
            message,
        },
    }
}

#[derive(Debug, Serialize)]
struct MatchRequest<'a> {
    ingredients: &'a [String],
    dietary: &'a str,
    max_results: u32,
}

#[derive(Debug, Serialize)]
struct SubstitutionsRequest<'a> {
    missing: &'a [String],
}

#[derive(Debug, Deserialize)]
struct DetectResponse {
    #[serde(default)]
    ingredients: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct RecipeApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl RecipeApiClient {
    pub fn new() -> std::result::Result<Self, ApiError> {
        Self::with_base_url(DEFAULT_API_URL, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> std::result::Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .no_proxy()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Detect ingredients in an uploaded image.
    ///
    /// An empty list means the service found nothing; callers must treat that
    /// as "no ingredients detected", not as an error.
    pub async fn detect_ingredients(
        &self,
        file_name: impl Into<String>,
        image: Vec<u8>,
    ) -> std::result::Result<Vec<String>, ApiError> {
        let part = Part::bytes(image).file_name(file_name.into());
        let form = Form::new().part("image", part);
        let url = format!("{}/detect", self.base_url);
        let response = self.client.post(&url).multipart(form).send().await?;

        let body: DetectResponse = self.handle_response(response).await?;
        Ok(body.ingredients.unwrap_or_default())
    }

    /// Match recipes against an ingredient query. An empty list is a valid
    /// "no matches" result.
    pub async fn match_recipes(
        &self,
        ingredients: &[String],
        dietary: &str,
        max_results: u32,
    ) -> std::result::Result<Vec<Recipe>, ApiError> {
        let url = format!("{}/match", self.base_url);
        let payload = MatchRequest {
            ingredients,
            dietary,
            max_results,
        };
        let response = self.client.post(&url).json(&payload).send().await?;

        self.handle_response(response).await
    }

    /// Look up substitutes for missing ingredients. An absent or empty list
    /// per key is a valid "no suggestions" result.
    pub async fn substitutions(
        &self,
        missing: &[String],
    ) -> std::result::Result<HashMap<String, Vec<String>>, ApiError> {
        let url = format!("{}/substitutions", self.base_url);
        let payload = SubstitutionsRequest { missing };
        let response = self.client.post(&url).json(&payload).send().await?;

        self.handle_response(response).await
    }

    /// Fetch the full sample-recipe catalog.
    pub async fn list_recipes(&self) -> std::result::Result<Vec<Recipe>, ApiError> {
        let url = format!("{}/recipes", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> std::result::Result<T, ApiError> {
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}
