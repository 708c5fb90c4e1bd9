use async_trait::async_trait;
use serde::Deserialize;

use crate::adapters::http::ServiceEndpoint;
use crate::adapters::wire::{self, CodedWire, IdentifierWire};
use crate::config::credentials::ServiceCredentials;
use crate::domain::model::{CourseEnrollment, EnrollmentRecord, EnrollmentStatus, IdType, Term};
use crate::domain::ports::EnrollmentsClient;
use crate::utils::error::Result;

pub const DEFAULT_BASE_URL: &str = "https://apis.berkeley.edu/sis/v2";

pub struct HttpEnrollmentsClient {
    endpoint: ServiceEndpoint,
}

impl HttpEnrollmentsClient {
    pub fn new(credentials: ServiceCredentials) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, credentials)
    }

    pub fn with_base_url(base_url: &str, credentials: ServiceCredentials) -> Result<Self> {
        Ok(Self {
            endpoint: ServiceEndpoint::new("enrollments", base_url, credentials)?,
        })
    }
}

#[async_trait]
impl EnrollmentsClient for HttpEnrollmentsClient {
    async fn list_enrollments(
        &self,
        term: &Term,
        section_number: u32,
    ) -> Result<Vec<EnrollmentRecord>> {
        let path = format!("enrollments/terms/{term}/classes/sections/{section_number}");
        let context = format!("term {term} section {section_number}");
        let items = self
            .endpoint
            .paged_items(&path, &[], "classSectionEnrollments")
            .await?;

        let mut records = Vec::new();
        for item in items {
            let enrollment: EnrollmentWire = self.endpoint.decode(item, &context)?;
            // Dropped records carry no roster meaning.
            let Some(status) =
                EnrollmentStatus::from_code(&enrollment.enrollment_status.status.code)
            else {
                continue;
            };
            let Some(uid) = wire::disclosed_campus_uid(&enrollment.student.identifiers) else {
                tracing::debug!(section_number, "enrollment without a disclosed campus uid");
                continue;
            };
            records.push(EnrollmentRecord {
                person_uid: uid,
                status,
                source_section: section_number,
            });
        }
        tracing::debug!(section_number, records = records.len(), "section enrollments");
        Ok(records)
    }

    async fn list_enrollments_by_person(
        &self,
        term: &Term,
        person_id: &str,
        id_type: IdType,
        enrolled_only: bool,
    ) -> Result<Vec<CourseEnrollment>> {
        let path = format!("enrollments/students/{person_id}");
        let context = format!("student {person_id} term {term}");
        let params = [
            ("id-type", id_type.as_str().to_string()),
            ("term-id", term.to_string()),
            ("enrolled-only", enrolled_only.to_string()),
            ("primary-only", "true".to_string()),
        ];
        let items = self
            .endpoint
            .paged_items(&path, &params, "studentEnrollments")
            .await?;

        let mut courses = Vec::new();
        for item in items {
            let enrollment: StudentEnrollmentWire = self.endpoint.decode(item, &context)?;
            let course = enrollment.class_section.class.course;
            courses.push(CourseEnrollment {
                course_id: wire::identifier_of_kind(&course.identifiers, "cs-course-id"),
                display_name: course.display_name,
            });
        }
        Ok(courses)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnrollmentWire {
    student: StudentWire,
    enrollment_status: StatusWire,
}

#[derive(Deserialize)]
struct StudentWire {
    #[serde(default)]
    identifiers: Vec<IdentifierWire>,
}

#[derive(Deserialize)]
struct StatusWire {
    status: CodedWire,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StudentEnrollmentWire {
    class_section: EnrolledSectionWire,
}

#[derive(Deserialize)]
struct EnrolledSectionWire {
    class: EnrolledClassWire,
}

#[derive(Deserialize)]
struct EnrolledClassWire {
    course: EnrolledCourseWire,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnrolledCourseWire {
    display_name: String,
    #[serde(default)]
    identifiers: Vec<IdentifierWire>,
}
