use async_trait::async_trait;
use serde::Deserialize;

use crate::adapters::http::ServiceEndpoint;
use crate::adapters::wire::{self, EmailWire, NameWire};
use crate::config::credentials::ServiceCredentials;
use crate::domain::model::PersonName;
use crate::domain::ports::EmployeeClient;
use crate::utils::error::Result;

pub const DEFAULT_BASE_URL: &str = "https://apis.berkeley.edu/sis/v2";

pub struct HttpEmployeeClient {
    endpoint: ServiceEndpoint,
}

impl HttpEmployeeClient {
    pub fn new(credentials: ServiceCredentials) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, credentials)
    }

    pub fn with_base_url(base_url: &str, credentials: ServiceCredentials) -> Result<Self> {
        Ok(Self {
            endpoint: ServiceEndpoint::new("employees", base_url, credentials)?,
        })
    }

    async fn fetch_employee(&self, campus_uid: &str) -> Result<Option<EmployeeWire>> {
        let path = format!("employees/{campus_uid}");
        let context = format!("employee {campus_uid}");
        let params = [("id-type", "campus-uid".to_string())];
        let items = self.endpoint.items(&path, &params, "employees").await?;
        items
            .into_iter()
            .next()
            .map(|item| self.endpoint.decode(item, &context))
            .transpose()
    }
}

#[async_trait]
impl EmployeeClient for HttpEmployeeClient {
    async fn resolve_email(&self, campus_uid: &str) -> Result<Option<String>> {
        Ok(self
            .fetch_employee(campus_uid)
            .await?
            .and_then(|employee| wire::pick_email(&employee.emails)))
    }

    async fn resolve_name(&self, campus_uid: &str) -> Result<Option<PersonName>> {
        Ok(self
            .fetch_employee(campus_uid)
            .await?
            .and_then(|employee| wire::preferred_name(&employee.names)))
    }
}

#[derive(Deserialize)]
struct EmployeeWire {
    #[serde(default)]
    emails: Vec<EmailWire>,
    #[serde(default)]
    names: Vec<NameWire>,
}
