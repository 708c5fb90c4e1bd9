//! Section Matcher: decides which sections count as "the same course"
//! under the exact / course-family matching policy.

use std::collections::BTreeSet;

use crate::domain::model::{Section, Term};
use crate::domain::ports::ClassesClient;
use crate::utils::error::{Result, SisError};

/// The outcome of section matching: the requested section's own record
/// (which carries the course-family attributes) and the full matched set.
#[derive(Debug, Clone)]
pub struct CourseMatch {
    pub requested: Section,
    pub sections: Vec<Section>,
}

impl CourseMatch {
    /// Matched section numbers, de-duplicated and sorted.
    pub fn section_numbers(&self) -> Vec<u32> {
        let numbers: BTreeSet<u32> = self.sections.iter().map(|s| s.section_number).collect();
        numbers.into_iter().collect()
    }
}

/// Matches the sections to treat as one course. With `exact` the set is
/// the requested section plus its cross-referenced secondary children;
/// otherwise every section in the term sharing the same
/// (subject_area, catalog_number), cross-listings included.
pub async fn match_course(
    classes: &dyn ClassesClient,
    term: &Term,
    section_number: u32,
    exact: bool,
) -> Result<CourseMatch> {
    let fetched = classes.get_section(term, section_number, true).await?;
    let requested = fetched
        .iter()
        .find(|s| s.section_number == section_number)
        .cloned()
        .ok_or_else(|| SisError::not_found("section", section_number.to_string()))?;

    if exact {
        tracing::debug!(
            section_number,
            matched = fetched.len(),
            "exact match: requested section and its secondary children"
        );
        return Ok(CourseMatch {
            requested,
            sections: fetched,
        });
    }

    let siblings = classes
        .list_siblings(term, &requested.subject_area, &requested.catalog_number)
        .await?;
    if siblings.is_empty() {
        // The requested section's own existence is already confirmed, so
        // an empty sibling listing degrades to a singleton match.
        tracing::warn!(
            section_number,
            subject_area = %requested.subject_area,
            catalog_number = %requested.catalog_number,
            "no sibling sections reported; matching the requested section only"
        );
        return Ok(CourseMatch {
            sections: vec![requested.clone()],
            requested,
        });
    }

    tracing::debug!(
        section_number,
        subject_area = %requested.subject_area,
        catalog_number = %requested.catalog_number,
        matched = siblings.len(),
        "course-family match"
    );
    Ok(CourseMatch {
        requested,
        sections: siblings,
    })
}

/// Fetches the descriptive attributes of one section, for the section
/// query shape. Does not touch enrollment or staffing data.
pub async fn describe(
    classes: &dyn ClassesClient,
    term: &Term,
    section_number: u32,
) -> Result<Section> {
    classes
        .get_section(term, section_number, false)
        .await?
        .into_iter()
        .find(|s| s.section_number == section_number)
        .ok_or_else(|| SisError::not_found("section", section_number.to_string()))
}
