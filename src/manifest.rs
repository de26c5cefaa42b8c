//! Page manifests: the bootstrap data a page renders its fields from
//!
//! ```yaml
//! entity_id: 42
//! fields:
//!   - key: field-first_name
//!     kind: text
//!     value: Jane
//!   - key: field-category
//!     kind: enumerated
//!     options: [staff, contractor]
//!     value: staff
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::FieldEditConfig;
use crate::field::{EntityId, FieldKey, FieldKind};
use crate::model::{EditableField, PageModel, PageSettings};

/// One field as delivered by the page bootstrap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub key: FieldKey,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default)]
    pub value: String,
}

/// Entity id plus the editable fields of one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageManifest {
    pub entity_id: EntityId,
    pub fields: Vec<FieldSpec>,
}

#[derive(Debug)]
pub enum ManifestError {
    Read(std::io::Error),
    Parse(String),
    /// An enumerated field without options can never hold a valid value
    NoOptions(FieldKey),
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::Read(e) => write!(f, "Failed to read page manifest: {}", e),
            ManifestError::Parse(e) => write!(f, "Failed to parse page manifest: {}", e),
            ManifestError::NoOptions(key) => {
                write!(f, "Enumerated field {} has no options", key)
            }
        }
    }
}

impl std::error::Error for ManifestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ManifestError::Read(e) => Some(e),
            _ => None,
        }
    }
}

impl PageManifest {
    /// Load a manifest; `.json` files are JSON, everything else YAML
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(ManifestError::Read)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let manifest = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_yaml(&content)?
        };
        tracing::debug!(
            path = %path.display(),
            fields = manifest.fields.len(),
            "loaded page manifest"
        );
        Ok(manifest)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ManifestError> {
        let manifest: Self =
            serde_yaml::from_str(content).map_err(|e| ManifestError::Parse(e.to_string()))?;
        manifest.check()?;
        Ok(manifest)
    }

    pub fn from_json(content: &str) -> Result<Self, ManifestError> {
        let manifest: Self =
            serde_json::from_str(content).map_err(|e| ManifestError::Parse(e.to_string()))?;
        manifest.check()?;
        Ok(manifest)
    }

    fn check(&self) -> Result<(), ManifestError> {
        match self
            .fields
            .iter()
            .find(|f| f.kind == FieldKind::Enumerated && f.options.is_empty())
        {
            Some(field) => Err(ManifestError::NoOptions(field.key.clone())),
            None => Ok(()),
        }
    }

    /// Build the page model, taking page-wide settings from `config`
    pub fn into_page(self, config: &FieldEditConfig) -> PageModel {
        let mut page = PageModel::new(PageSettings::from_config(config, self.entity_id));
        for spec in self.fields {
            page.add_field(
                EditableField::new(spec.key, spec.kind, &spec.value).with_options(spec.options),
            );
        }
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_format::DateFormatSetting;

    const YAML: &str = r#"
entity_id: 42
fields:
  - key: field-first_name
    value: Jane
  - key: field-category
    kind: enumerated
    options: [staff, contractor]
    value: staff
"#;

    #[test]
    fn test_yaml_manifest() {
        let manifest = PageManifest::from_yaml(YAML).unwrap();
        assert_eq!(manifest.entity_id, EntityId::from(42));
        assert_eq!(manifest.fields.len(), 2);
        assert_eq!(manifest.fields[0].kind, FieldKind::Text);
        assert_eq!(manifest.fields[1].options, vec!["staff", "contractor"]);
    }

    #[test]
    fn test_json_manifest_with_string_id() {
        let manifest = PageManifest::from_json(
            r#"{"entity_id":"emp-7",
                "fields":[{"key":"field-active","kind":"boolean","value":"True"}]}"#,
        )
        .unwrap();
        assert_eq!(manifest.entity_id, EntityId::from("emp-7"));
        assert_eq!(manifest.fields[0].kind, FieldKind::Boolean);
    }

    #[test]
    fn test_enumerated_without_options_is_rejected() {
        let err = PageManifest::from_yaml(
            "entity_id: 1\nfields:\n  - key: field-color\n    kind: enumerated\n",
        )
        .unwrap_err();
        assert!(matches!(err, ManifestError::NoOptions(_)));
    }

    #[test]
    fn test_into_page() {
        let config = FieldEditConfig {
            date_format: DateFormatSetting::DayFirst,
            ..FieldEditConfig::default()
        };
        let page = PageManifest::from_yaml(YAML).unwrap().into_page(&config);
        assert_eq!(page.len(), 2);
        let id = page.find("field-category").unwrap();
        assert_eq!(page.field(id).unwrap().display_text(), Some("staff"));
        assert_eq!(
            page.settings.date_format,
            crate::date_format::DateFormatPreference::DayFirst
        );
    }
}
