//! The typed model of a project's `app.yaml`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{DomainError, Platform, SemanticVersion};

/// Keys every project must define, in reporting order.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "id", "launch", "version"];

/// One project's configuration, as loaded from `app.yaml`.
///
/// The required keys deserialize as options so that an incomplete file
/// still loads; [`AppConfig::validate`] turns the gaps into a single
/// recoverable error listing every missing field. Unknown top-level keys
/// (platform sections included) collect into `sections` and flow through
/// to templates untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub name: Option<String>,
    pub id: Option<String>,
    pub launch: Option<String>,
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_num: Option<u64>,
    #[serde(flatten)]
    pub sections: BTreeMap<String, Value>,
}

impl AppConfig {
    /// Check that every required key is present.
    pub fn validate(&self) -> Result<(), DomainError> {
        let present = [&self.name, &self.id, &self.launch, &self.version];
        let fields: Vec<&'static str> = REQUIRED_FIELDS
            .iter()
            .zip(present)
            .filter(|(_, value)| value.is_none())
            .map(|(field, _)| *field)
            .collect();
        if fields.is_empty() {
            Ok(())
        } else {
            Err(DomainError::MissingRequiredFields { fields })
        }
    }

    /// Borrow the platform's section mutably, creating it empty if absent.
    ///
    /// This is the only mutation surface a platform hook gets: its own
    /// section, never the whole config. A present non-map value under the
    /// platform key is rejected rather than overwritten.
    pub fn ensure_platform_section(
        &mut self,
        platform: Platform,
    ) -> Result<&mut serde_json::Map<String, Value>, DomainError> {
        let value = self
            .sections
            .entry(platform.as_str().to_string())
            .or_insert_with(|| Value::Object(Default::default()));
        match value {
            Value::Object(map) => Ok(map),
            _ => Err(DomainError::PlatformSectionInvalid {
                platform: platform.to_string(),
            }),
        }
    }

    /// Read-only view of a platform's section, if it exists as a map.
    pub fn platform_section(&self, platform: Platform) -> Option<&serde_json::Map<String, Value>> {
        self.sections.get(platform.as_str()).and_then(Value::as_object)
    }

    /// Compute `version_num` from `version` unless already present.
    ///
    /// A pre-computed value is an explicit override and is kept as-is, so
    /// repeated setups never churn it.
    pub fn ensure_version_num(&mut self) -> Result<(), DomainError> {
        if self.version_num.is_some() {
            return Ok(());
        }
        let Some(version) = self.version.as_deref() else {
            return Err(DomainError::MissingRequiredFields {
                fields: vec!["version"],
            });
        };
        self.version_num = Some(SemanticVersion::parse(version)?.encode());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> AppConfig {
        serde_json::from_value(json!({
            "name": "demo",
            "id": "com.example.demo",
            "launch": "Main",
            "version": "1.2.3",
            "android": { "target": "latest" },
        }))
        .unwrap()
    }

    // ── deserialization ─────────────────────────────────────────────────

    #[test]
    fn unknown_keys_collect_into_sections() {
        let config = config();
        assert_eq!(config.name.as_deref(), Some("demo"));
        assert_eq!(
            config.sections.get("android"),
            Some(&json!({ "target": "latest" }))
        );
    }

    #[test]
    fn serializes_back_with_sections_inline() {
        let value = serde_json::to_value(config()).unwrap();
        assert_eq!(value["android"]["target"], json!("latest"));
        assert_eq!(value["name"], json!("demo"));
    }

    // ── validation ──────────────────────────────────────────────────────

    #[test]
    fn complete_config_validates() {
        assert_eq!(config().validate(), Ok(()));
    }

    #[test]
    fn missing_fields_are_reported_together_in_order() {
        let config: AppConfig =
            serde_json::from_value(json!({ "id": "com.example.demo" })).unwrap();
        assert_eq!(
            config.validate(),
            Err(DomainError::MissingRequiredFields {
                fields: vec!["name", "launch", "version"],
            })
        );
    }

    // ── platform sections ───────────────────────────────────────────────

    #[test]
    fn ensure_creates_an_empty_section() {
        let mut config = config();
        let section = config.ensure_platform_section(Platform::Ios).unwrap();
        assert!(section.is_empty());
        assert!(config.sections.contains_key("ios"));
    }

    #[test]
    fn ensure_keeps_an_existing_section() {
        let mut config = config();
        let section = config.ensure_platform_section(Platform::Android).unwrap();
        assert_eq!(section.get("target"), Some(&json!("latest")));
    }

    #[test]
    fn non_map_section_is_rejected() {
        let mut config: AppConfig =
            serde_json::from_value(json!({ "android": "oops" })).unwrap();
        assert_eq!(
            config.ensure_platform_section(Platform::Android),
            Err(DomainError::PlatformSectionInvalid {
                platform: "android".into()
            })
        );
    }

    // ── version_num ─────────────────────────────────────────────────────

    #[test]
    fn version_num_is_computed_once() {
        let mut config = config();
        config.ensure_version_num().unwrap();
        assert_eq!(config.version_num, Some(1_020_300));
    }

    #[test]
    fn existing_version_num_is_an_override() {
        let mut config = config();
        config.version_num = Some(42);
        config.ensure_version_num().unwrap();
        assert_eq!(config.version_num, Some(42));
    }

    #[test]
    fn bad_version_propagates_the_domain_error() {
        let mut config = config();
        config.version = Some("nope".into());
        assert_eq!(
            config.ensure_version_num(),
            Err(DomainError::VersionNotSemantic)
        );
    }
}
