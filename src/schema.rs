//! JSON Schema checks for intelligence documents.
//!
//! Both parties agree on a schema for the documents they hash. Validation happens before
//! hashing and is reported, but whether a failing document is fatal is the caller's call.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use jsonschema::{Retrieve, Uri, Validator};
use serde_json::Value;

use crate::{Error, Result};

/// A single schema violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer to the offending value, empty for the document root.
    pub instance_path: String,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// Outcome of validating one document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Every violation found; empty when the document is valid.
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// True when no violations were found.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Resolves `$ref` URIs to schema files next to the referencing schema.
///
/// Only the last path segment of the URI is used, so both relative references such as
/// `"defs.json"` and absolute `$id`-style URIs ending in a file name resolve locally.
struct SiblingFileRetriever {
    dir: PathBuf,
}

impl Retrieve for SiblingFileRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> core::result::Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let uri = uri.as_str();
        let filename = uri.rsplit('/').next().unwrap_or(uri);
        let text = fs::read_to_string(self.dir.join(filename))?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Compiled JSON schema.
pub struct SchemaValidator {
    validator: Validator,
}

impl SchemaValidator {
    /// Compiles a schema from an already parsed value.
    pub fn new(schema: &Value) -> Result<Self> {
        let validator =
            jsonschema::validator_for(schema).map_err(|e| Error::Schema(e.to_string()))?;
        Ok(Self { validator })
    }

    /// Loads and compiles the schema at `path`.
    ///
    /// `$ref`s to other files are resolved against the schema's own directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let schema: Value = serde_json::from_str(&text)
            .map_err(|e| Error::Schema(format!("{}: {e}", path.display())))?;

        let dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let mut options = jsonschema::options();
        options.with_retriever(SiblingFileRetriever { dir });
        let validator = options
            .build(&schema)
            .map_err(|e| Error::Schema(format!("{}: {e}", path.display())))?;

        Ok(Self { validator })
    }

    /// Validates a parsed document.
    pub fn validate(&self, document: &Value) -> ValidationReport {
        let violations = self
            .validator
            .iter_errors(document)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        ValidationReport { violations }
    }

    /// Parses and validates the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Json`] if it is not JSON.
    pub fn validate_file(&self, path: impl AsRef<Path>) -> Result<ValidationReport> {
        let text = fs::read_to_string(path)?;
        let document: Value = serde_json::from_str(&text)?;
        Ok(self.validate(&document))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;

    use super::*;

    fn intel_schema() -> Value {
        json!({
            "type": "object",
            "required": ["indicator", "severity"],
            "properties": {
                "indicator": { "type": "string" },
                "severity": { "type": "integer", "minimum": 0, "maximum": 10 }
            }
        })
    }

    #[test]
    fn valid_document_has_no_violations() {
        let validator = SchemaValidator::new(&intel_schema()).unwrap();
        let report = validator.validate(&json!({ "indicator": "198.51.100.7", "severity": 4 }));
        assert!(report.is_valid());
    }

    #[test]
    fn violations_are_listed_with_paths() {
        let validator = SchemaValidator::new(&intel_schema()).unwrap();
        let report = validator.validate(&json!({ "indicator": 7, "severity": 11 }));
        assert!(!report.is_valid());
        assert_eq!(report.violations.len(), 2);
        assert!(report
            .violations
            .iter()
            .any(|v| v.instance_path == "/indicator"));
        assert!(report
            .violations
            .iter()
            .any(|v| v.instance_path == "/severity"));
    }

    #[test]
    fn missing_required_field_reported_at_root() {
        let validator = SchemaValidator::new(&intel_schema()).unwrap();
        let report = validator.validate(&json!({ "indicator": "x" }));
        assert_eq!(report.violations.len(), 1);
        assert!(report.violations[0].to_string().starts_with("(root): "));
    }

    #[test]
    fn invalid_schema_rejected() {
        let result = SchemaValidator::new(&json!({ "type": 12 }));
        assert!(matches!(result, Err(Error::Schema(_))));
    }

    #[test]
    fn sibling_schema_references_resolve() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("indicator.json"),
            r#"{ "type": "string", "minLength": 1 }"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("intel.json"),
            r#"{ "type": "object", "properties": { "indicator": { "$ref": "indicator.json" } } }"#,
        )
        .unwrap();

        let validator = SchemaValidator::from_file(dir.path().join("intel.json")).unwrap();
        assert!(validator.validate(&json!({ "indicator": "198.51.100.7" })).is_valid());

        let report = validator.validate(&json!({ "indicator": 7 }));
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].instance_path, "/indicator");
    }

    #[test]
    fn missing_referenced_schema_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intel.json");
        fs::write(
            &path,
            r#"{ "properties": { "indicator": { "$ref": "absent.json" } } }"#,
        )
        .unwrap();

        assert!(matches!(
            SchemaValidator::from_file(&path),
            Err(Error::Schema(_))
        ));
    }

    #[test]
    fn validate_file_rejects_non_json_document() {
        let validator = SchemaValidator::new(&intel_schema()).unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        assert!(matches!(
            validator.validate_file(file.path()),
            Err(Error::Json(_))
        ));
    }
}
