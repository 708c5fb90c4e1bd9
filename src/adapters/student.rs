use async_trait::async_trait;
use serde::Deserialize;

use crate::adapters::http::ServiceEndpoint;
use crate::adapters::wire::{self, CodedWire, EmailWire, NameWire};
use crate::config::credentials::ServiceCredentials;
use crate::domain::model::{IdType, PersonName};
use crate::domain::ports::StudentClient;
use crate::utils::error::Result;

pub const DEFAULT_BASE_URL: &str = "https://apis.berkeley.edu/sis/v2";

pub struct HttpStudentClient {
    endpoint: ServiceEndpoint,
}

impl HttpStudentClient {
    pub fn new(credentials: ServiceCredentials) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, credentials)
    }

    pub fn with_base_url(base_url: &str, credentials: ServiceCredentials) -> Result<Self> {
        Ok(Self {
            endpoint: ServiceEndpoint::new("students", base_url, credentials)?,
        })
    }
}

fn base_params(id_type: IdType) -> Vec<(&'static str, String)> {
    vec![
        ("id-type", id_type.as_str().to_string()),
        ("affiliation-status", "ACT".to_string()),
    ]
}

#[async_trait]
impl StudentClient for HttpStudentClient {
    async fn plans(&self, person_id: &str, id_type: IdType) -> Result<Vec<String>> {
        let path = format!("students/{person_id}");
        let context = format!("plans of {person_id}");
        let mut params = base_params(id_type);
        params.push(("inc-acad", "true".to_string()));
        params.push(("inc-completed-programs", "true".to_string()));
        let items = self
            .endpoint
            .items(&path, &params, "academicStatuses")
            .await?;

        let mut plans = Vec::new();
        for item in items {
            let status: AcademicStatusWire = self.endpoint.decode(item, &context)?;
            for student_plan in status.student_plans {
                plans.push(student_plan.academic_plan.plan.code);
            }
        }
        Ok(plans)
    }

    async fn campus_email(&self, person_id: &str, id_type: IdType) -> Result<Option<String>> {
        let path = format!("students/{person_id}");
        let context = format!("emails of {person_id}");
        let mut params = base_params(id_type);
        params.push(("inc-cntc", "true".to_string()));
        let items = self.endpoint.items(&path, &params, "emails").await?;
        let emails = items
            .into_iter()
            .map(|item| self.endpoint.decode::<EmailWire>(item, &context))
            .collect::<Result<Vec<_>>>()?;
        Ok(wire::pick_email(&emails))
    }

    async fn preferred_name(
        &self,
        person_id: &str,
        id_type: IdType,
    ) -> Result<Option<PersonName>> {
        let path = format!("students/{person_id}");
        let context = format!("names of {person_id}");
        let mut params = base_params(id_type);
        params.push(("inc-cntc", "true".to_string()));
        let items = self.endpoint.items(&path, &params, "names").await?;
        let names = items
            .into_iter()
            .map(|item| self.endpoint.decode::<NameWire>(item, &context))
            .collect::<Result<Vec<_>>>()?;
        Ok(wire::preferred_name(&names))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AcademicStatusWire {
    #[serde(default)]
    student_plans: Vec<StudentPlanWire>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StudentPlanWire {
    academic_plan: AcademicPlanWire,
}

#[derive(Deserialize)]
struct AcademicPlanWire {
    plan: CodedWire,
}
