//! Feature Schema Artifact
//!
//! The model ships with a JSON array naming its input fields. The service
//! refuses to start unless that list equals the built-in layout.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, ScoringError};
use crate::logic::features::layout::{compute_layout_hash, validate_layout};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSchema {
    pub fields: Vec<String>,
}

impl FeatureSchema {
    /// Load and verify the schema artifact. Any failure is fatal for startup.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ScoringError::StartupFatal(format!("feature schema {}: {}", path.display(), e))
        })?;

        let schema: FeatureSchema = serde_json::from_str(&raw).map_err(|e| {
            ScoringError::StartupFatal(format!("feature schema {} is malformed: {}", path.display(), e))
        })?;

        validate_layout(schema.fields.as_slice())
            .map_err(|e| ScoringError::StartupFatal(e.to_string()))?;

        log::info!(
            "Feature schema verified: {} fields (hash: {:08x})",
            schema.fields.len(),
            schema.hash()
        );

        Ok(schema)
    }

    pub fn hash(&self) -> u32 {
        compute_layout_hash(self.fields.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::layout::{layout_hash, FEATURE_LAYOUT};

    fn write(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("model_features.json");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_load_matching_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, &serde_json::to_string(FEATURE_LAYOUT).unwrap());

        let schema = FeatureSchema::load(&path).unwrap();
        assert_eq!(schema.fields.len(), 7);
        assert_eq!(schema.hash(), layout_hash());
    }

    #[test]
    fn test_missing_schema_is_fatal() {
        let err = FeatureSchema::load(Path::new("/nonexistent/model_features.json")).unwrap_err();
        assert!(matches!(err, ScoringError::StartupFatal(_)));
    }

    #[test]
    fn test_malformed_schema_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "{not json");
        assert!(matches!(FeatureSchema::load(&path), Err(ScoringError::StartupFatal(_))));
    }

    #[test]
    fn test_reordered_schema_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            r#"["Type_Encoded","Torque","Rotational speed","Tool wear","Air_Temp_C","Proc_Temp_C","Power_W"]"#,
        );
        assert!(matches!(FeatureSchema::load(&path), Err(ScoringError::StartupFatal(_))));
    }
}
