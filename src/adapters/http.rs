//! Shared request plumbing for the SIS-style services: a per-service
//! (app_id, app_key) header pair, the `apiResponse.response` envelope,
//! `page-number` pagination, and 404 meaning "no items".

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::config::credentials::ServiceCredentials;
use crate::utils::error::{Result, SisError};

pub(crate) const PAGE_SIZE: usize = 100;

#[derive(Debug)]
pub(crate) struct ServiceEndpoint {
    service: &'static str,
    base_url: Url,
    credentials: ServiceCredentials,
    client: Client,
}

impl ServiceEndpoint {
    pub(crate) fn new(
        service: &'static str,
        base_url: &str,
        credentials: ServiceCredentials,
    ) -> Result<Self> {
        let parsed = Url::parse(base_url).map_err(|e| SisError::InvalidUrl {
            service,
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(SisError::InvalidUrl {
                    service,
                    url: base_url.to_string(),
                    reason: format!("unsupported URL scheme: {scheme}"),
                })
            }
        }
        Ok(Self {
            service,
            base_url: parsed,
            credentials,
            client: Client::new(),
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// One envelope fetch, no pagination.
    pub(crate) async fn items(
        &self,
        path: &str,
        params: &[(&str, String)],
        item_key: &str,
    ) -> Result<Vec<Value>> {
        self.fetch_page(path, params, item_key, None).await
    }

    /// Fetches pages until a short page arrives.
    pub(crate) async fn paged_items(
        &self,
        path: &str,
        params: &[(&str, String)],
        item_key: &str,
    ) -> Result<Vec<Value>> {
        let mut collected = Vec::new();
        let mut page = 1usize;
        loop {
            let items = self.fetch_page(path, params, item_key, Some(page)).await?;
            let short_page = items.len() < PAGE_SIZE;
            collected.extend(items);
            if short_page {
                break;
            }
            page += 1;
        }
        Ok(collected)
    }

    async fn fetch_page(
        &self,
        path: &str,
        params: &[(&str, String)],
        item_key: &str,
        page: Option<usize>,
    ) -> Result<Vec<Value>> {
        let url = self.url_for(path);
        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .header("app_id", &self.credentials.app_id)
            .header("app_key", &self.credentials.app_key);
        for (key, value) in params {
            request = request.query(&[(key, value.as_str())]);
        }
        if let Some(page) = page {
            request = request.query(&[
                ("page-number", page.to_string()),
                ("page-size", PAGE_SIZE.to_string()),
            ]);
        }

        tracing::debug!(service = self.service, %url, page = ?page, "issuing request");
        let response = request
            .send()
            .await
            .map_err(|e| SisError::upstream(self.service, format!("GET {path}"), e))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!(service = self.service, path, "404: no items");
            return Ok(Vec::new());
        }
        if !response.status().is_success() {
            return Err(SisError::upstream(
                self.service,
                format!("GET {path}"),
                format!("status {}", response.status()),
            ));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SisError::upstream(self.service, format!("GET {path}"), e))?;
        let items = match body
            .pointer("/apiResponse/response")
            .and_then(|response| response.get(item_key))
        {
            Some(Value::Array(items)) => items.clone(),
            _ => Vec::new(),
        };
        Ok(items)
    }

    /// Decodes one wire item, pinning decode failures on this service.
    pub(crate) fn decode<T: DeserializeOwned>(&self, item: Value, context: &str) -> Result<T> {
        serde_json::from_value(item)
            .map_err(|e| SisError::upstream(self.service, context.to_string(), e))
    }
}
