//! Wire fragments shared by several services.

use serde::Deserialize;

use crate::domain::model::PersonName;

#[derive(Debug, Deserialize)]
pub(crate) struct IdentifierWire {
    #[serde(default)]
    pub disclose: bool,
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A person's campus uid, honouring the disclosure flag.
pub(crate) fn disclosed_campus_uid(identifiers: &[IdentifierWire]) -> Option<String> {
    identifiers
        .iter()
        .find(|identifier| identifier.disclose && identifier.kind == "campus-uid")
        .map(|identifier| identifier.id.clone())
}

/// A non-person identifier such as a course id. No disclosure semantics.
pub(crate) fn identifier_of_kind(identifiers: &[IdentifierWire], kind: &str) -> Option<String> {
    identifiers
        .iter()
        .find(|identifier| identifier.kind == kind)
        .map(|identifier| identifier.id.clone())
}

#[derive(Debug, Deserialize)]
pub(crate) struct CodedWire {
    pub code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EmailWire {
    #[serde(rename = "type")]
    pub kind: CodedWire,
    pub email_address: String,
}

/// Campus email when on file, otherwise any other listed address.
pub(crate) fn pick_email(emails: &[EmailWire]) -> Option<String> {
    emails
        .iter()
        .find(|email| email.kind.code == "CAMP")
        .or_else(|| emails.iter().find(|email| email.kind.code == "OTHR"))
        .map(|email| email.email_address.clone())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NameWire {
    #[serde(rename = "type")]
    pub kind: CodedWire,
    pub given_name: String,
    pub family_name: String,
}

/// The preferred name when flagged, otherwise the first name on record.
pub(crate) fn preferred_name(names: &[NameWire]) -> Option<PersonName> {
    names
        .iter()
        .find(|name| name.kind.code == "PRF")
        .or_else(|| names.first())
        .map(|name| PersonName {
            given: name.given_name.clone(),
            family: name.family_name.clone(),
        })
}
