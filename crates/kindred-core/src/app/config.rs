//! ResolverConfig - serializable description of a resolver binding.

use serde::{Deserialize, Serialize};

use super::resolver::DEFAULT_PREDICATE;
use crate::domain::{ConfigError, KindId};

/// A resolver binding as it appears in configuration.
///
/// ```json
/// { "root": "shape", "predicate": "can_handle", "default": "polygon" }
/// ```
///
/// `predicate` defaults to `"can_handle"`; `default` is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    pub root: KindId,

    #[serde(default = "default_predicate")]
    pub predicate: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<KindId>,
}

fn default_predicate() -> String {
    DEFAULT_PREDICATE.to_string()
}

impl ResolverConfig {
    pub fn new(root: impl Into<KindId>) -> Self {
        Self {
            root: root.into(),
            predicate: default_predicate(),
            default: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let config = ResolverConfig::from_json(r#"{ "root": "shape" }"#).unwrap();
        assert_eq!(config, ResolverConfig::new("shape"));
        assert_eq!(config.predicate, "can_handle");
        assert!(config.default.is_none());
    }

    #[test]
    fn full_config_is_read() {
        let config = ResolverConfig::from_json(
            r#"{ "root": "shape", "predicate": "accepts", "default": "polygon" }"#,
        )
        .unwrap();
        assert_eq!(config.root, KindId::new("shape"));
        assert_eq!(config.predicate, "accepts");
        assert_eq!(config.default, Some(KindId::new("polygon")));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = ResolverConfig::from_json(r#"{ "root": "shape", "cache": true }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn missing_root_is_rejected() {
        assert!(ResolverConfig::from_json(r#"{ "predicate": "accepts" }"#).is_err());
    }

    #[test]
    fn default_is_omitted_when_unset() {
        let json = ResolverConfig::new("shape").to_json().unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["root"], "shape");
        assert_eq!(v["predicate"], "can_handle");
        assert!(v.get("default").is_none());
    }
}
