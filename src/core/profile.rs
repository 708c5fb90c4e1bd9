//! Student Profile Resolver: direct per-person lookups that do not go
//! through section matching.

use crate::domain::model::{CourseAttribute, IdType, ProfileAttribute, Term};
use crate::domain::ports::{EnrollmentsClient, StudentClient};
use crate::utils::error::Result;

/// Fetches one attribute of a student record. Plans may be several
/// values; email and name are at most one.
pub async fn student_attribute(
    students: &dyn StudentClient,
    person_id: &str,
    id_type: IdType,
    attribute: ProfileAttribute,
) -> Result<Vec<String>> {
    match attribute {
        ProfileAttribute::Plans => students.plans(person_id, id_type).await,
        ProfileAttribute::Email => Ok(students
            .campus_email(person_id, id_type)
            .await?
            .into_iter()
            .collect()),
        ProfileAttribute::Name => Ok(students
            .preferred_name(person_id, id_type)
            .await?
            .map(|name| name.formatted())
            .into_iter()
            .collect()),
    }
}

/// Per-term course listing for one person, rendered as the requested
/// course descriptor. Queries the Enrollments service by person, not by
/// section.
pub async fn course_listing(
    enrollments: &dyn EnrollmentsClient,
    term: &Term,
    person_id: &str,
    id_type: IdType,
    attribute: CourseAttribute,
    include_waitlisted: bool,
) -> Result<Vec<String>> {
    let courses = enrollments
        .list_enrollments_by_person(term, person_id, id_type, !include_waitlisted)
        .await?;
    tracing::debug!(person_id, courses = courses.len(), "course listing");
    Ok(courses
        .into_iter()
        .filter_map(|course| match attribute {
            CourseAttribute::CourseId => course.course_id,
            CourseAttribute::DisplayName => Some(course.display_name),
        })
        .collect())
}
