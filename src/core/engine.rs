//! One entry point per supported query shape, orchestrating the
//! resolvers over the five service ports.

use std::sync::Arc;

use crate::adapters::{
    classes::HttpClassesClient, employee::HttpEmployeeClient, enrollments::HttpEnrollmentsClient,
    student::HttpStudentClient, terms::HttpTermsClient,
};
use crate::config::credentials::Credentials;
use crate::core::{constituents, identifiers, profile, roster, sections, terms};
use crate::domain::model::{
    ConstituentQuery, CourseAttribute, IdType, IdentifierValue, ProfileAttribute, Section,
    SectionAttribute, Semester, Term,
};
use crate::domain::ports::{
    ClassesClient, EmployeeClient, EnrollmentsClient, StudentClient, TermsClient,
};
use crate::utils::error::Result;

pub struct SisEngine {
    terms: Arc<dyn TermsClient>,
    classes: Arc<dyn ClassesClient>,
    enrollments: Arc<dyn EnrollmentsClient>,
    students: Arc<dyn StudentClient>,
    employees: Arc<dyn EmployeeClient>,
}

impl SisEngine {
    pub fn new(
        terms: Arc<dyn TermsClient>,
        classes: Arc<dyn ClassesClient>,
        enrollments: Arc<dyn EnrollmentsClient>,
        students: Arc<dyn StudentClient>,
        employees: Arc<dyn EmployeeClient>,
    ) -> Self {
        Self {
            terms,
            classes,
            enrollments,
            students,
            employees,
        }
    }

    /// Engine wired to the live services at their default endpoints.
    pub fn over_http(credentials: &Credentials) -> Result<Self> {
        Ok(Self::new(
            Arc::new(HttpTermsClient::new(credentials.terms.clone())?),
            Arc::new(HttpClassesClient::new(credentials.classes.clone())?),
            Arc::new(HttpEnrollmentsClient::new(credentials.enrollments.clone())?),
            Arc::new(HttpStudentClient::new(credentials.students.clone())?),
            Arc::new(HttpEmployeeClient::new(credentials.employees.clone())?),
        ))
    }

    /// Term Resolver entry point, shared by every term-scoped shape.
    pub async fn resolve_term(
        &self,
        explicit: Option<&str>,
        year: Option<u16>,
        semester: Option<Semester>,
    ) -> Result<Term> {
        terms::resolve(self.terms.as_ref(), explicit, year, semester).await
    }

    /// The people query: matched sections -> aggregated roster ->
    /// classified constituents -> one resolved identifier per person.
    pub async fn people(&self, query: &ConstituentQuery) -> Result<Vec<IdentifierValue>> {
        let matched =
            sections::match_course(self.classes.as_ref(), &query.term, query.section_number, query.exact)
                .await?;
        let numbers = matched.section_numbers();
        tracing::info!(
            term = %query.term,
            course = %matched.requested.display_name,
            sections = numbers.len(),
            "matched sections"
        );

        let roster = roster::aggregate(
            self.classes.as_ref(),
            self.enrollments.as_ref(),
            &query.term,
            &numbers,
        )
        .await?;
        let people = constituents::classify(&roster, query.constituent);
        tracing::info!(constituent = ?query.constituent, people = people.len(), "classified");

        let mut values = Vec::with_capacity(people.len());
        for person in &people {
            values.push(
                identifiers::resolve(
                    self.students.as_ref(),
                    self.employees.as_ref(),
                    person,
                    query.constituent,
                    query.identifier,
                )
                .await?,
            );
        }
        Ok(values)
    }

    /// The section query: descriptive attributes only.
    pub async fn section(
        &self,
        term: &Term,
        section_number: u32,
        attribute: SectionAttribute,
    ) -> Result<Vec<String>> {
        let section = sections::describe(self.classes.as_ref(), term, section_number).await?;
        Ok(render_section(&section, attribute))
    }

    /// The student query: one attribute of one student record.
    pub async fn student(
        &self,
        person_id: &str,
        id_type: IdType,
        attribute: ProfileAttribute,
    ) -> Result<Vec<String>> {
        profile::student_attribute(self.students.as_ref(), person_id, id_type, attribute).await
    }

    /// The courses query: a person's per-term enrollment listing.
    pub async fn courses(
        &self,
        term: &Term,
        person_id: &str,
        id_type: IdType,
        attribute: CourseAttribute,
        include_waitlisted: bool,
    ) -> Result<Vec<String>> {
        profile::course_listing(
            self.enrollments.as_ref(),
            term,
            person_id,
            id_type,
            attribute,
            include_waitlisted,
        )
        .await
    }
}

fn render_section(section: &Section, attribute: SectionAttribute) -> Vec<String> {
    let primary_flag = if section.is_primary { "1" } else { "0" };
    match attribute {
        SectionAttribute::SubjectArea => vec![section.subject_area.clone()],
        SectionAttribute::CatalogNumber => vec![section.catalog_number.clone()],
        SectionAttribute::DisplayName => vec![section.display_name.clone()],
        SectionAttribute::IsPrimary => vec![primary_flag.to_string()],
        SectionAttribute::All => vec![
            format!("section_number {}", section.section_number),
            format!("subject_area {}", section.subject_area),
            format!("catalog_number {}", section.catalog_number),
            format!("display_name {}", section.display_name),
            format!("is_primary {primary_flag}"),
        ],
    }
}
