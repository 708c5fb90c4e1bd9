//! Term Resolver: maps an explicit term token or a (year, semester) pair
//! to the canonical term identifier.

use crate::domain::model::{Semester, TemporalPosition, Term};
use crate::domain::ports::TermsClient;
use crate::utils::error::{Result, SisError};

/// Resolves the term for a query. An explicit token is either a numeric
/// term id (passed through verbatim) or a temporal position resolved by
/// lookup. Without an explicit token, both year and semester must be
/// given; with neither, the current term is the default.
pub async fn resolve(
    client: &dyn TermsClient,
    explicit: Option<&str>,
    year: Option<u16>,
    semester: Option<Semester>,
) -> Result<Term> {
    if explicit.is_some() && (year.is_some() || semester.is_some()) {
        return Err(SisError::input(
            "specify either a term id or a year and semester, not both",
        ));
    }

    if let Some(token) = explicit {
        if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
            return Ok(Term(token.to_string()));
        }
        let position: TemporalPosition = token.parse()?;
        return lookup_position(client, position).await;
    }

    match (year, semester) {
        (Some(year), Some(semester)) => {
            tracing::debug!(year, ?semester, "looking up term id");
            client.term_for(year, semester).await?.ok_or_else(|| {
                SisError::not_found("term", format!("{year} {semester:?}"))
            })
        }
        (None, None) => lookup_position(client, TemporalPosition::Current).await,
        _ => Err(SisError::input(
            "specify both year and semester, or neither",
        )),
    }
}

async fn lookup_position(client: &dyn TermsClient, position: TemporalPosition) -> Result<Term> {
    // e.g. between semesters the service has no current term to offer
    client.term_at(position).await?.ok_or_else(|| {
        SisError::not_found("term", format!("temporal position {}", position.as_str()))
    })
}
