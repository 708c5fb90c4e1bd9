//! Capability interfaces, one per backend service. The resolution engine
//! depends only on these traits so it can run against in-memory fakes.

use async_trait::async_trait;

use crate::domain::model::{
    CourseEnrollment, EnrollmentRecord, IdType, PersonName, Section, Semester, StaffRecord,
    TemporalPosition, Term,
};
use crate::utils::error::Result;

#[async_trait]
pub trait TermsClient: Send + Sync {
    /// Canonical term id for a (year, semester) pair, if one exists.
    async fn term_for(&self, year: u16, semester: Semester) -> Result<Option<Term>>;

    /// Canonical term id at a relative position. `None` between semesters.
    async fn term_at(&self, position: TemporalPosition) -> Result<Option<Term>>;
}

#[async_trait]
pub trait ClassesClient: Send + Sync {
    /// The section for `(term, section_number)`. With `include_secondary`
    /// the result also carries the section's cross-referenced secondary
    /// children (labs, discussions). Empty means not found.
    async fn get_section(
        &self,
        term: &Term,
        section_number: u32,
        include_secondary: bool,
    ) -> Result<Vec<Section>>;

    /// Every section in the term sharing a (subject_area, catalog_number)
    /// course family, cross-listings included.
    async fn list_siblings(
        &self,
        term: &Term,
        subject_area: &str,
        catalog_number: &str,
    ) -> Result<Vec<Section>>;

    /// Staffing records for one section.
    async fn list_staff(&self, term: &Term, section_number: u32) -> Result<Vec<StaffRecord>>;
}

#[async_trait]
pub trait EnrollmentsClient: Send + Sync {
    /// Enrolled and waitlisted students for one section.
    async fn list_enrollments(
        &self,
        term: &Term,
        section_number: u32,
    ) -> Result<Vec<EnrollmentRecord>>;

    /// Per-term enrollment listing for one person. With `enrolled_only`
    /// the service excludes waitlisted courses.
    async fn list_enrollments_by_person(
        &self,
        term: &Term,
        person_id: &str,
        id_type: IdType,
        enrolled_only: bool,
    ) -> Result<Vec<CourseEnrollment>>;
}

#[async_trait]
pub trait StudentClient: Send + Sync {
    /// Academic plan codes from the student's active academic statuses.
    async fn plans(&self, person_id: &str, id_type: IdType) -> Result<Vec<String>>;

    /// Disclosed campus email, if the student discloses one.
    async fn campus_email(&self, person_id: &str, id_type: IdType) -> Result<Option<String>>;

    /// The student's preferred name.
    async fn preferred_name(&self, person_id: &str, id_type: IdType)
        -> Result<Option<PersonName>>;
}

#[async_trait]
pub trait EmployeeClient: Send + Sync {
    /// Campus email for an employee's campus uid.
    async fn resolve_email(&self, campus_uid: &str) -> Result<Option<String>>;

    /// Formatted-name source for staff constituents.
    async fn resolve_name(&self, campus_uid: &str) -> Result<Option<PersonName>>;
}
