//! Credentials file loading. Each backend service is gated by its own
//! (app_id, app_key) pair; a missing pair is a startup error, never a
//! per-call one.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::utils::error::{Result, SisError};

/// One service's (app_id, app_key) header pair.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceCredentials {
    pub app_id: String,
    pub app_key: String,
}

/// The validated credential set for all five services.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub terms: ServiceCredentials,
    pub classes: ServiceCredentials,
    pub enrollments: ServiceCredentials,
    pub students: ServiceCredentials,
    pub employees: ServiceCredentials,
}

impl Credentials {
    pub fn default_path() -> PathBuf {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_default()
            .join(".sis.json")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let raw: RawCredentials = serde_json::from_str(content)?;
        raw.validated()
    }
}

/// Flat key layout of the credentials file, e.g. `terms_id`/`terms_key`.
#[derive(Debug, Default, Deserialize)]
struct RawCredentials {
    terms_id: Option<String>,
    terms_key: Option<String>,
    classes_id: Option<String>,
    classes_key: Option<String>,
    enrollments_id: Option<String>,
    enrollments_key: Option<String>,
    students_id: Option<String>,
    students_key: Option<String>,
    employees_id: Option<String>,
    employees_key: Option<String>,
}

impl RawCredentials {
    fn validated(self) -> Result<Credentials> {
        Ok(Credentials {
            terms: pair("terms", self.terms_id, self.terms_key)?,
            classes: pair("classes", self.classes_id, self.classes_key)?,
            enrollments: pair("enrollments", self.enrollments_id, self.enrollments_key)?,
            students: pair("students", self.students_id, self.students_key)?,
            employees: pair("employees", self.employees_id, self.employees_key)?,
        })
    }
}

fn pair(
    service: &'static str,
    id: Option<String>,
    key: Option<String>,
) -> Result<ServiceCredentials> {
    match (id, key) {
        (Some(app_id), Some(app_key)) => Ok(ServiceCredentials { app_id, app_key }),
        _ => Err(SisError::Config { service }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_set() -> String {
        serde_json::json!({
            "terms_id": "t", "terms_key": "tk",
            "classes_id": "c", "classes_key": "ck",
            "enrollments_id": "e", "enrollments_key": "ek",
            "students_id": "s", "students_key": "sk",
            "employees_id": "m", "employees_key": "mk",
        })
        .to_string()
    }

    #[test]
    fn test_full_credential_set_loads() {
        let credentials = Credentials::from_json_str(&full_set()).unwrap();
        assert_eq!(credentials.terms.app_id, "t");
        assert_eq!(credentials.employees.app_key, "mk");
    }

    #[test]
    fn test_missing_pair_names_the_service() {
        let content = serde_json::json!({
            "terms_id": "t", "terms_key": "tk",
            "classes_id": "c", "classes_key": "ck",
            "enrollments_id": "e", "enrollments_key": "ek",
            "students_id": "s", "students_key": "sk",
            "employees_id": "m",
        })
        .to_string();
        let err = Credentials::from_json_str(&content).unwrap_err();
        match err {
            SisError::Config { service } => assert_eq!(service, "employees"),
            other => panic!("expected Config, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(full_set().as_bytes()).unwrap();
        let credentials = Credentials::load(file.path()).unwrap();
        assert_eq!(credentials.students.app_id, "s");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Credentials::load(Path::new("/nonexistent/.sis.json")).unwrap_err();
        assert!(matches!(err, SisError::Io(_)));
    }
}
