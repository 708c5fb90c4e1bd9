//! In-memory implementations of the service ports, backing the core
//! engine tests. Fixed data in, deterministic answers out.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::model::{
    CourseEnrollment, EnrollmentRecord, EnrollmentStatus, IdType, PersonName, Section, Semester,
    StaffRecord, StaffRole, TemporalPosition, Term,
};
use crate::domain::ports::{
    ClassesClient, EmployeeClient, EnrollmentsClient, StudentClient, TermsClient,
};
use crate::utils::error::{Result, SisError};

pub(crate) fn section(number: u32, subject: &str, catalog: &str, primary: bool) -> Section {
    Section {
        section_number: number,
        subject_area: subject.to_string(),
        catalog_number: catalog.to_string(),
        display_name: format!("{subject} {catalog}"),
        is_primary: primary,
    }
}

pub(crate) fn enrollment(uid: &str, status: EnrollmentStatus, source: u32) -> EnrollmentRecord {
    EnrollmentRecord {
        person_uid: uid.to_string(),
        status,
        source_section: source,
    }
}

pub(crate) fn staff(uid: &str, role: StaffRole, source: u32) -> StaffRecord {
    StaffRecord {
        person_uid: uid.to_string(),
        role,
        source_section: source,
    }
}

#[derive(Default)]
pub(crate) struct FakeTerms {
    by_year_semester: HashMap<(u16, Semester), Term>,
    current: Option<Term>,
}

impl FakeTerms {
    pub(crate) fn with_term(mut self, year: u16, semester: Semester, term: Term) -> Self {
        self.by_year_semester.insert((year, semester), term);
        self
    }

    pub(crate) fn with_current(mut self, term: Term) -> Self {
        self.current = Some(term);
        self
    }
}

#[async_trait]
impl TermsClient for FakeTerms {
    async fn term_for(&self, year: u16, semester: Semester) -> Result<Option<Term>> {
        Ok(self.by_year_semester.get(&(year, semester)).cloned())
    }

    async fn term_at(&self, _position: TemporalPosition) -> Result<Option<Term>> {
        Ok(self.current.clone())
    }
}

#[derive(Default)]
pub(crate) struct FakeClasses {
    sections: Vec<Section>,
    children: HashMap<u32, Vec<u32>>,
    sibling_listings: HashMap<(String, String), Vec<Section>>,
    staff: HashMap<u32, Vec<StaffRecord>>,
}

impl FakeClasses {
    pub(crate) fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Registers the secondary children cross-referenced to a section.
    pub(crate) fn with_children(mut self, parent: u32, children: Vec<u32>) -> Self {
        self.children.insert(parent, children);
        self
    }

    /// Registers what the service reports for a course-family query;
    /// unregistered families report nothing, like an upstream gap.
    pub(crate) fn with_sibling_listing(
        mut self,
        subject: &str,
        catalog: &str,
        sections: Vec<Section>,
    ) -> Self {
        self.sibling_listings
            .insert((subject.to_string(), catalog.to_string()), sections);
        self
    }

    pub(crate) fn with_staff(mut self, section_number: u32, records: Vec<StaffRecord>) -> Self {
        self.staff.insert(section_number, records);
        self
    }

    fn find(&self, section_number: u32) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.section_number == section_number)
    }
}

#[async_trait]
impl ClassesClient for FakeClasses {
    async fn get_section(
        &self,
        _term: &Term,
        section_number: u32,
        include_secondary: bool,
    ) -> Result<Vec<Section>> {
        let Some(found) = self.find(section_number) else {
            return Ok(Vec::new());
        };
        let mut result = vec![found.clone()];
        if include_secondary {
            for &child in self.children.get(&section_number).into_iter().flatten() {
                if let Some(section) = self.find(child) {
                    result.push(section.clone());
                }
            }
        }
        Ok(result)
    }

    async fn list_siblings(
        &self,
        _term: &Term,
        subject_area: &str,
        catalog_number: &str,
    ) -> Result<Vec<Section>> {
        Ok(self
            .sibling_listings
            .get(&(subject_area.to_string(), catalog_number.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn list_staff(&self, _term: &Term, section_number: u32) -> Result<Vec<StaffRecord>> {
        Ok(self.staff.get(&section_number).cloned().unwrap_or_default())
    }
}

#[derive(Default)]
pub(crate) struct FakeEnrollments {
    by_section: HashMap<u32, Vec<EnrollmentRecord>>,
    by_person: HashMap<String, Vec<CourseEnrollment>>,
    failing_sections: Vec<u32>,
}

impl FakeEnrollments {
    pub(crate) fn with_enrollments(
        mut self,
        section_number: u32,
        records: Vec<EnrollmentRecord>,
    ) -> Self {
        self.by_section.insert(section_number, records);
        self
    }

    pub(crate) fn with_person_courses(
        mut self,
        person_id: &str,
        courses: Vec<CourseEnrollment>,
    ) -> Self {
        self.by_person.insert(person_id.to_string(), courses);
        self
    }

    pub(crate) fn with_failure(mut self, section_number: u32) -> Self {
        self.failing_sections.push(section_number);
        self
    }
}

#[async_trait]
impl EnrollmentsClient for FakeEnrollments {
    async fn list_enrollments(
        &self,
        term: &Term,
        section_number: u32,
    ) -> Result<Vec<EnrollmentRecord>> {
        if self.failing_sections.contains(&section_number) {
            return Err(SisError::upstream(
                "enrollments",
                format!("term {term} section {section_number}"),
                "injected failure",
            ));
        }
        Ok(self
            .by_section
            .get(&section_number)
            .cloned()
            .unwrap_or_default())
    }

    async fn list_enrollments_by_person(
        &self,
        _term: &Term,
        person_id: &str,
        _id_type: IdType,
        _enrolled_only: bool,
    ) -> Result<Vec<CourseEnrollment>> {
        Ok(self.by_person.get(person_id).cloned().unwrap_or_default())
    }
}

#[derive(Default)]
pub(crate) struct FakeStudents {
    plans: HashMap<String, Vec<String>>,
    emails: HashMap<String, String>,
    names: HashMap<String, PersonName>,
}

impl FakeStudents {
    pub(crate) fn with_plans(mut self, person_id: &str, plans: Vec<String>) -> Self {
        self.plans.insert(person_id.to_string(), plans);
        self
    }

    pub(crate) fn with_email(mut self, person_id: &str, email: &str) -> Self {
        self.emails.insert(person_id.to_string(), email.to_string());
        self
    }

    pub(crate) fn with_name(mut self, person_id: &str, name: PersonName) -> Self {
        self.names.insert(person_id.to_string(), name);
        self
    }
}

#[async_trait]
impl StudentClient for FakeStudents {
    async fn plans(&self, person_id: &str, _id_type: IdType) -> Result<Vec<String>> {
        Ok(self.plans.get(person_id).cloned().unwrap_or_default())
    }

    async fn campus_email(&self, person_id: &str, _id_type: IdType) -> Result<Option<String>> {
        Ok(self.emails.get(person_id).cloned())
    }

    async fn preferred_name(
        &self,
        person_id: &str,
        _id_type: IdType,
    ) -> Result<Option<PersonName>> {
        Ok(self.names.get(person_id).cloned())
    }
}

#[derive(Default)]
pub(crate) struct FakeEmployees {
    emails: HashMap<String, String>,
    names: HashMap<String, PersonName>,
}

impl FakeEmployees {
    pub(crate) fn with_email(mut self, campus_uid: &str, email: &str) -> Self {
        self.emails.insert(campus_uid.to_string(), email.to_string());
        self
    }

    #[allow(dead_code)]
    pub(crate) fn with_name(mut self, campus_uid: &str, name: PersonName) -> Self {
        self.names.insert(campus_uid.to_string(), name);
        self
    }
}

#[async_trait]
impl EmployeeClient for FakeEmployees {
    async fn resolve_email(&self, campus_uid: &str) -> Result<Option<String>> {
        Ok(self.emails.get(campus_uid).cloned())
    }

    async fn resolve_name(&self, campus_uid: &str) -> Result<Option<PersonName>> {
        Ok(self.names.get(campus_uid).cloned())
    }
}
