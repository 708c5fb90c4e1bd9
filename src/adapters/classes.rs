use std::collections::BTreeSet;

use async_trait::async_trait;
use serde::Deserialize;

use crate::adapters::http::ServiceEndpoint;
use crate::adapters::wire::{self, CodedWire, IdentifierWire};
use crate::config::credentials::ServiceCredentials;
use crate::domain::model::{Section, StaffRecord, StaffRole, Term};
use crate::domain::ports::ClassesClient;
use crate::utils::error::Result;

pub const DEFAULT_BASE_URL: &str = "https://apis.berkeley.edu/sis/v1";

pub struct HttpClassesClient {
    endpoint: ServiceEndpoint,
}

impl HttpClassesClient {
    pub fn new(credentials: ServiceCredentials) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, credentials)
    }

    pub fn with_base_url(base_url: &str, credentials: ServiceCredentials) -> Result<Self> {
        Ok(Self {
            endpoint: ServiceEndpoint::new("classes", base_url, credentials)?,
        })
    }

    async fn fetch_sections(
        &self,
        path: &str,
        params: &[(&str, String)],
        context: &str,
    ) -> Result<Vec<ClassSectionWire>> {
        let items = self.endpoint.paged_items(path, params, "classSections").await?;
        items
            .into_iter()
            .map(|item| self.endpoint.decode(item, context))
            .collect()
    }
}

#[async_trait]
impl ClassesClient for HttpClassesClient {
    async fn get_section(
        &self,
        term: &Term,
        section_number: u32,
        include_secondary: bool,
    ) -> Result<Vec<Section>> {
        let params = [
            ("term-id", term.to_string()),
            ("include-secondary", include_secondary.to_string()),
        ];
        let path = format!("classes/sections/{section_number}");
        let wires = self
            .fetch_sections(&path, &params, &format!("section {section_number}"))
            .await?;
        Ok(wires.iter().map(to_section).collect())
    }

    async fn list_siblings(
        &self,
        term: &Term,
        subject_area: &str,
        catalog_number: &str,
    ) -> Result<Vec<Section>> {
        let params = [
            ("term-id", term.to_string()),
            ("subject-area-code", subject_area.to_uppercase()),
            ("catalog-number", catalog_number.to_uppercase()),
        ];
        let wires = self
            .fetch_sections(
                "classes/sections",
                &params,
                &format!("course family {subject_area} {catalog_number}"),
            )
            .await?;
        Ok(wires.iter().map(to_section).collect())
    }

    async fn list_staff(&self, term: &Term, section_number: u32) -> Result<Vec<StaffRecord>> {
        let params = [("term-id", term.to_string())];
        let path = format!("classes/sections/{section_number}");
        let wires = self
            .fetch_sections(&path, &params, &format!("staff of section {section_number}"))
            .await?;
        Ok(wires.iter().flat_map(staff_records).collect())
    }
}

fn to_section(wire: &ClassSectionWire) -> Section {
    Section {
        section_number: wire.id,
        subject_area: wire.class.course.subject_area.code.clone(),
        catalog_number: wire.class.course.catalog_number.formatted.clone(),
        display_name: wire.class.course.display_name.clone(),
        is_primary: wire
            .association
            .as_ref()
            .map(|association| association.primary)
            .unwrap_or(false),
    }
}

/// Staff assignments for one section, extracted from its meetings. The
/// wire format has no explicit GSI marker: staff on a primary section
/// are instructors, staff on a secondary section are GSIs.
fn staff_records(wire: &ClassSectionWire) -> Vec<StaffRecord> {
    let role = if wire
        .association
        .as_ref()
        .map(|association| association.primary)
        .unwrap_or(false)
    {
        StaffRole::Instructor
    } else {
        StaffRole::Gsi
    };

    let mut seen = BTreeSet::new();
    let mut records = Vec::new();
    for meeting in &wire.meetings {
        for assigned in &meeting.assigned_instructors {
            if let Some(uid) = wire::disclosed_campus_uid(&assigned.instructor.identifiers) {
                if seen.insert(uid.clone()) {
                    records.push(StaffRecord {
                        person_uid: uid,
                        role,
                        source_section: wire.id,
                    });
                }
            }
        }
    }
    records
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClassSectionWire {
    id: u32,
    class: ClassWire,
    association: Option<AssociationWire>,
    #[serde(default)]
    meetings: Vec<MeetingWire>,
}

#[derive(Deserialize)]
struct ClassWire {
    course: CourseWire,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CourseWire {
    subject_area: CodedWire,
    catalog_number: FormattedWire,
    display_name: String,
}

#[derive(Deserialize)]
struct FormattedWire {
    formatted: String,
}

#[derive(Deserialize)]
struct AssociationWire {
    primary: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MeetingWire {
    #[serde(default)]
    assigned_instructors: Vec<AssignedInstructorWire>,
}

#[derive(Deserialize)]
struct AssignedInstructorWire {
    instructor: InstructorWire,
}

#[derive(Deserialize)]
struct InstructorWire {
    #[serde(default)]
    identifiers: Vec<IdentifierWire>,
}
