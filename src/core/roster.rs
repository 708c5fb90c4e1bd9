//! Roster Aggregator: fetches enrollment and staffing data for every
//! matched section concurrently, then merges into a de-duplicated roster.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use futures::future::{try_join, try_join_all};

use crate::domain::model::{EnrollmentRecord, EnrollmentStatus, Roster, StaffRecord, Term};
use crate::domain::ports::{ClassesClient, EnrollmentsClient};
use crate::utils::error::{Result, SisError};

/// Fetches and merges the roster for a matched section set. Per-section
/// fetches run concurrently; nothing is merged until every section's data
/// has arrived. Any fetch failure aborts the whole aggregation, since a
/// partial roster is indistinguishable from a genuinely small one.
pub async fn aggregate(
    classes: &dyn ClassesClient,
    enrollments: &dyn EnrollmentsClient,
    term: &Term,
    section_numbers: &[u32],
) -> Result<Roster> {
    let fetches = section_numbers.iter().map(|&number| async move {
        let (enrolled, staff) = try_join(
            enrollments.list_enrollments(term, number),
            classes.list_staff(term, number),
        )
        .await?;
        Ok::<_, SisError>((enrolled, staff))
    });

    // Barrier join before any merging.
    let per_section = try_join_all(fetches).await?;

    let mut all_enrollments = Vec::new();
    let mut all_staff = Vec::new();
    for (enrolled, staff) in per_section {
        all_enrollments.extend(enrolled);
        all_staff.extend(staff);
    }
    tracing::info!(
        sections = section_numbers.len(),
        enrollments = all_enrollments.len(),
        staff = all_staff.len(),
        "aggregated roster"
    );

    Ok(Roster {
        enrollments: dedupe_enrollments(all_enrollments),
        staff: dedupe_staff(all_staff),
    })
}

/// De-duplicates enrollment records by uid. When sibling sections
/// disagree on status, enrolled beats waitlisted.
pub fn dedupe_enrollments(records: Vec<EnrollmentRecord>) -> Vec<EnrollmentRecord> {
    let mut by_uid: BTreeMap<String, EnrollmentRecord> = BTreeMap::new();
    for record in records {
        match by_uid.entry(record.person_uid.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            Entry::Occupied(mut slot) => {
                if record.status == EnrollmentStatus::Enrolled {
                    slot.insert(record);
                }
            }
        }
    }
    by_uid.into_values().collect()
}

/// De-duplicates staff records by (uid, role), so a person staffing both
/// a lecture and a lab keeps both roles.
pub fn dedupe_staff(records: Vec<StaffRecord>) -> Vec<StaffRecord> {
    let mut seen = BTreeSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert((record.person_uid.clone(), record.role)))
        .collect()
}
