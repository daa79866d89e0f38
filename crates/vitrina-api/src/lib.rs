// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use serde::Deserialize;
use std::time::Duration;
use url::Url;
use vitrina_app::Product;

/// Remote catalog client. One-shot: callers issue a single fetch per
/// session and never retry.
#[derive(Debug, Clone)]
pub struct Client {
    endpoint: String,
    timeout: Duration,
    http: HttpClient,
}

impl Client {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = endpoint.trim().trim_end_matches('/').to_owned();
        if endpoint.is_empty() {
            bail!("catalog.endpoint must not be empty");
        }
        Url::parse(&endpoint)
            .with_context(|| format!("catalog.endpoint {endpoint:?} is not a valid URL"))?;

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            endpoint,
            timeout,
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Performs the catalog GET and decodes the response envelope. An
    /// absent or null `products` array decodes to an empty list; deciding
    /// what an empty catalog means is the store's business, not ours.
    pub fn fetch_catalog(&self) -> Result<Vec<Product>> {
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .map_err(|error| connection_error(&self.endpoint, error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }

        let parsed: CatalogEnvelope = response.json().context("decode catalog response")?;
        Ok(parsed.products.unwrap_or_default())
    }
}

fn connection_error(endpoint: &str, error: reqwest::Error) -> anyhow::Error {
    anyhow!("cannot reach {endpoint} -- check the catalog endpoint and network ({error})")
}

fn clean_error_response(status: StatusCode, body: &str) -> anyhow::Error {
    if let Ok(parsed) = serde_json::from_str::<ErrorEnvelope>(body)
        && let Some(error) = parsed.error
        && !error.is_empty()
    {
        return anyhow!("catalog server error ({}): {}", status.as_u16(), error);
    }

    if body.len() < 100 && !body.contains('{') && !body.trim().is_empty() {
        return anyhow!("catalog server error ({}): {}", status.as_u16(), body.trim());
    }

    anyhow!("catalog server returned {}", status.as_u16())
}

#[derive(Debug, Deserialize)]
struct CatalogEnvelope {
    #[serde(default)]
    products: Option<Vec<Product>>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
}
