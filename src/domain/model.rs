use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::utils::error::SisError;

/// Canonical SIS term identifier, e.g. "2258". Opaque to the engine;
/// resolved once per invocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Term(pub String);

impl Term {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Semester {
    Spring,
    Summer,
    Fall,
}

impl Semester {
    /// A date that falls safely inside the semester, used for the Terms
    /// service `as-of-date` lookup.
    pub fn as_of_date(&self, year: u16) -> String {
        let month = match self {
            Semester::Spring => 2,
            Semester::Summer => 7,
            Semester::Fall => 10,
        };
        chrono::NaiveDate::from_ymd_opt(i32::from(year), month, 1)
            .expect("month and day are fixed valid values")
            .format("%Y-%m-%d")
            .to_string()
    }
}

/// Relative term position understood by the Terms service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemporalPosition {
    Current,
    Next,
    Previous,
}

impl TemporalPosition {
    /// Wire spelling; the service expects a capitalized token.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemporalPosition::Current => "Current",
            TemporalPosition::Next => "Next",
            TemporalPosition::Previous => "Previous",
        }
    }
}

impl FromStr for TemporalPosition {
    type Err = SisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "current" => Ok(TemporalPosition::Current),
            "next" => Ok(TemporalPosition::Next),
            "previous" => Ok(TemporalPosition::Previous),
            _ => Err(SisError::input(format!(
                "{s} is not a term id or one of current/next/previous"
            ))),
        }
    }
}

/// One class section as described by the Classes service.
/// `subject_area` + `catalog_number` identify the course family;
/// `is_primary` distinguishes lectures from labs and discussions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub section_number: u32,
    pub subject_area: String,
    pub catalog_number: String,
    pub display_name: String,
    pub is_primary: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum EnrollmentStatus {
    Enrolled,
    Waitlisted,
}

impl EnrollmentStatus {
    /// Maps the service status code. Dropped ("D") records carry no
    /// roster meaning and yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "E" => Some(EnrollmentStatus::Enrolled),
            "W" => Some(EnrollmentStatus::Waitlisted),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StaffRole {
    Instructor,
    Gsi,
}

/// One student enrollment in one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentRecord {
    pub person_uid: String,
    pub status: EnrollmentStatus,
    pub source_section: u32,
}

/// One staffing assignment in one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffRecord {
    pub person_uid: String,
    pub role: StaffRole,
    pub source_section: u32,
}

/// Merged enrollment and staffing data for a matched section set,
/// de-duplicated and ready for classification.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub enrollments: Vec<EnrollmentRecord>,
    pub staff: Vec<StaffRecord>,
}

/// The merged, de-duplicated unit of output. Keyed strictly by uid; a
/// person may simultaneously carry an enrollment status and staff roles
/// when the upstream data overlaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub uid: String,
    pub status: Option<EnrollmentStatus>,
    pub roles: Vec<StaffRole>,
}

impl Person {
    pub fn new(uid: impl Into<String>) -> Self {
        Person {
            uid: uid.into(),
            status: None,
            roles: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Constituent {
    Enrolled,
    Waitlisted,
    Students,
    Instructors,
    Gsis,
    Staff,
}

impl Constituent {
    /// Staff constituents resolve identifiers through the Employee
    /// service; student constituents through the Student service.
    pub fn is_staff(&self) -> bool {
        matches!(
            self,
            Constituent::Instructors | Constituent::Gsis | Constituent::Staff
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IdentifierKind {
    CampusUid,
    Email,
    Name,
}

/// Person id namespace accepted by the Student and Enrollments services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IdType {
    CampusUid,
    StudentId,
}

impl IdType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdType::CampusUid => "campus-uid",
            IdType::StudentId => "student-id",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SectionAttribute {
    SubjectArea,
    CatalogNumber,
    DisplayName,
    IsPrimary,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CourseAttribute {
    CourseId,
    DisplayName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProfileAttribute {
    Plans,
    Email,
    Name,
}

/// Full input contract for a people query. Constructed once per
/// invocation, after term resolution.
#[derive(Debug, Clone)]
pub struct ConstituentQuery {
    pub term: Term,
    pub section_number: u32,
    pub exact: bool,
    pub constituent: Constituent,
    pub identifier: IdentifierKind,
}

/// A resolved output identifier. An undisclosed value is an explicit
/// marker, never an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierValue {
    Value(String),
    Undisclosed,
}

impl fmt::Display for IdentifierValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierValue::Value(v) => f.write_str(v),
            IdentifierValue::Undisclosed => f.write_str("(undisclosed)"),
        }
    }
}

/// A person's name as held by the Student or Employee service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    pub given: String,
    pub family: String,
}

impl PersonName {
    /// The single supported output format: "Last, First".
    pub fn formatted(&self) -> String {
        format!("{}, {}", self.family, self.given)
    }
}

/// One course from a per-student enrollment listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseEnrollment {
    pub course_id: Option<String>,
    pub display_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semester_as_of_date() {
        assert_eq!(Semester::Spring.as_of_date(2019), "2019-02-01");
        assert_eq!(Semester::Summer.as_of_date(2019), "2019-07-01");
        assert_eq!(Semester::Fall.as_of_date(2019), "2019-10-01");
    }

    #[test]
    fn test_enrollment_status_codes() {
        assert_eq!(
            EnrollmentStatus::from_code("E"),
            Some(EnrollmentStatus::Enrolled)
        );
        assert_eq!(
            EnrollmentStatus::from_code("W"),
            Some(EnrollmentStatus::Waitlisted)
        );
        assert_eq!(EnrollmentStatus::from_code("D"), None);
    }

    #[test]
    fn test_temporal_position_parsing() {
        assert_eq!(
            "current".parse::<TemporalPosition>().unwrap(),
            TemporalPosition::Current
        );
        assert_eq!(
            "Next".parse::<TemporalPosition>().unwrap(),
            TemporalPosition::Next
        );
        assert!("2258".parse::<TemporalPosition>().is_err());
    }

    #[test]
    fn test_undisclosed_marker_is_not_empty() {
        let marker = IdentifierValue::Undisclosed.to_string();
        assert!(!marker.is_empty());
        assert_ne!(marker, IdentifierValue::Value(String::new()).to_string());
    }

    #[test]
    fn test_name_formatting() {
        let name = PersonName {
            given: "Ada".to_string(),
            family: "Lovelace".to_string(),
        };
        assert_eq!(name.formatted(), "Lovelace, Ada");
    }
}
