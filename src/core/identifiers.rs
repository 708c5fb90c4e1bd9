//! Identifier Resolver: produces the requested output identifier for one
//! already-deduplicated person, issuing supplementary lookups when the
//! identifier is not the uid itself.

use crate::domain::model::{Constituent, IdType, IdentifierKind, IdentifierValue, Person};
use crate::domain::ports::{EmployeeClient, StudentClient};
use crate::utils::error::Result;

/// Resolves one identifier for one person. Invoked once per selected
/// person, never once per matched section; de-duplication must already
/// have happened so the Student and Employee services see each uid once.
pub async fn resolve(
    students: &dyn StudentClient,
    employees: &dyn EmployeeClient,
    person: &Person,
    constituent: Constituent,
    kind: IdentifierKind,
) -> Result<IdentifierValue> {
    match kind {
        IdentifierKind::CampusUid => Ok(IdentifierValue::Value(person.uid.clone())),
        IdentifierKind::Email => {
            let email = if constituent.is_staff() {
                employees.resolve_email(&person.uid).await?
            } else {
                students
                    .campus_email(&person.uid, IdType::CampusUid)
                    .await?
            };
            Ok(email
                .map(IdentifierValue::Value)
                .unwrap_or(IdentifierValue::Undisclosed))
        }
        IdentifierKind::Name => {
            let name = if constituent.is_staff() {
                employees.resolve_name(&person.uid).await?
            } else {
                students
                    .preferred_name(&person.uid, IdType::CampusUid)
                    .await?
            };
            Ok(name
                .map(|name| IdentifierValue::Value(name.formatted()))
                .unwrap_or(IdentifierValue::Undisclosed))
        }
    }
}
