use async_trait::async_trait;
use serde::Deserialize;

use crate::adapters::http::ServiceEndpoint;
use crate::config::credentials::ServiceCredentials;
use crate::domain::model::{Semester, TemporalPosition, Term};
use crate::domain::ports::TermsClient;
use crate::utils::error::Result;

pub const DEFAULT_BASE_URL: &str = "https://apis.berkeley.edu/sis/v1";

#[derive(Debug)]
pub struct HttpTermsClient {
    endpoint: ServiceEndpoint,
}

impl HttpTermsClient {
    pub fn new(credentials: ServiceCredentials) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, credentials)
    }

    pub fn with_base_url(base_url: &str, credentials: ServiceCredentials) -> Result<Self> {
        Ok(Self {
            endpoint: ServiceEndpoint::new("terms", base_url, credentials)?,
        })
    }

    async fn first_term(&self, params: &[(&str, String)]) -> Result<Option<Term>> {
        let items = self.endpoint.items("terms", params, "terms").await?;
        let Some(item) = items.into_iter().next() else {
            return Ok(None);
        };
        let wire: TermWire = self.endpoint.decode(item, "terms")?;
        Ok(Some(Term(wire.id.into_string())))
    }
}

#[async_trait]
impl TermsClient for HttpTermsClient {
    async fn term_for(&self, year: u16, semester: Semester) -> Result<Option<Term>> {
        let params = [("as-of-date", semester.as_of_date(year))];
        self.first_term(&params).await
    }

    async fn term_at(&self, position: TemporalPosition) -> Result<Option<Term>> {
        let params = [("temporal-position", position.as_str().to_string())];
        self.first_term(&params).await
    }
}

#[derive(Deserialize)]
struct TermWire {
    id: TermId,
}

/// Term ids are served as strings or numbers depending on the gateway
/// version.
#[derive(Deserialize)]
#[serde(untagged)]
enum TermId {
    Text(String),
    Numeric(i64),
}

impl TermId {
    fn into_string(self) -> String {
        match self {
            TermId::Text(id) => id,
            TermId::Numeric(id) => id.to_string(),
        }
    }
}
