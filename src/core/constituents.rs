//! Constituent Classifier: pure filtering of the merged roster into the
//! requested constituent category. No I/O.

use std::collections::BTreeMap;

use crate::domain::model::{Constituent, EnrollmentStatus, Person, Roster, StaffRole};

/// Selects the people in `constituent` from an aggregated roster. Output
/// is keyed by uid and sorted by uid, so repeated runs over the same
/// roster yield identical sets.
pub fn classify(roster: &Roster, constituent: Constituent) -> Vec<Person> {
    let mut people: BTreeMap<String, Person> = BTreeMap::new();

    for record in &roster.enrollments {
        let selected = match constituent {
            Constituent::Enrolled => record.status == EnrollmentStatus::Enrolled,
            Constituent::Waitlisted => record.status == EnrollmentStatus::Waitlisted,
            Constituent::Students => true,
            _ => false,
        };
        if selected {
            let person = people
                .entry(record.person_uid.clone())
                .or_insert_with(|| Person::new(record.person_uid.clone()));
            person.status = Some(record.status);
        }
    }

    for record in &roster.staff {
        let selected = match constituent {
            Constituent::Instructors => record.role == StaffRole::Instructor,
            Constituent::Gsis => record.role == StaffRole::Gsi,
            Constituent::Staff => true,
            _ => false,
        };
        if selected {
            let person = people
                .entry(record.person_uid.clone())
                .or_insert_with(|| Person::new(record.person_uid.clone()));
            if !person.roles.contains(&record.role) {
                person.roles.push(record.role);
            }
        }
    }

    people.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{enrollment, staff};

    /// enrolled=[A,B], waitlisted=[C], instructor=[D], gsi=[E]
    fn sample_roster() -> Roster {
        Roster {
            enrollments: vec![
                enrollment("A", EnrollmentStatus::Enrolled, 100),
                enrollment("B", EnrollmentStatus::Enrolled, 100),
                enrollment("C", EnrollmentStatus::Waitlisted, 100),
            ],
            staff: vec![
                staff("D", StaffRole::Instructor, 100),
                staff("E", StaffRole::Gsi, 101),
            ],
        }
    }

    fn uids(people: &[Person]) -> Vec<&str> {
        people.iter().map(|p| p.uid.as_str()).collect()
    }

    #[test]
    fn test_enrolled_and_waitlisted_partition_students() {
        let roster = sample_roster();
        let enrolled = classify(&roster, Constituent::Enrolled);
        let waitlisted = classify(&roster, Constituent::Waitlisted);
        let students = classify(&roster, Constituent::Students);

        assert_eq!(uids(&enrolled), vec!["A", "B"]);
        assert_eq!(uids(&waitlisted), vec!["C"]);
        // students is exactly the union, nothing double-counted
        assert_eq!(uids(&students), vec!["A", "B", "C"]);
        assert_eq!(students.len(), enrolled.len() + waitlisted.len());
    }

    #[test]
    fn test_staff_is_the_union_of_instructors_and_gsis() {
        let roster = sample_roster();
        assert_eq!(uids(&classify(&roster, Constituent::Instructors)), vec!["D"]);
        assert_eq!(uids(&classify(&roster, Constituent::Gsis)), vec!["E"]);
        assert_eq!(uids(&classify(&roster, Constituent::Staff)), vec!["D", "E"]);
    }

    #[test]
    fn test_staff_are_not_counted_as_students() {
        let roster = sample_roster();
        let students = classify(&roster, Constituent::Students);
        assert!(!uids(&students).contains(&"D"));
        assert!(!uids(&students).contains(&"E"));
    }

    #[test]
    fn test_dual_role_person_appears_once_in_staff() {
        let roster = Roster {
            enrollments: vec![],
            staff: vec![
                staff("X", StaffRole::Instructor, 100),
                staff("X", StaffRole::Gsi, 101),
            ],
        };
        let selected = classify(&roster, Constituent::Staff);
        assert_eq!(selected.len(), 1);
        assert_eq!(
            selected[0].roles,
            vec![StaffRole::Instructor, StaffRole::Gsi]
        );
    }

    #[test]
    fn test_overlapping_enrollment_and_staff_records_are_independent() {
        // Unspecified upstream; the two record kinds do not suppress
        // each other.
        let roster = Roster {
            enrollments: vec![enrollment("X", EnrollmentStatus::Enrolled, 100)],
            staff: vec![staff("X", StaffRole::Gsi, 101)],
        };
        assert_eq!(uids(&classify(&roster, Constituent::Students)), vec!["X"]);
        assert_eq!(uids(&classify(&roster, Constituent::Gsis)), vec!["X"]);
    }
}
