//! Tree configuration.
//!
//! The only tunable is the domain: the rectangle assigned to the root node's
//! cell. Every indexed point is expected to lie inside it, since the cells of
//! all descendants are carved out of it and queries prune by those cells.

use crate::error::{KdError, Result};
use kdspace_types::Rectangle;
use serde::{Deserialize, Serialize};

/// Configuration for a [`SpatialTree`](crate::SpatialTree).
///
/// # Example
///
/// ```rust
/// use kdspace::{Rectangle, TreeConfig};
///
/// // Unit square by default
/// let config = TreeConfig::default();
/// assert_eq!(config.domain, Rectangle::unit());
///
/// // Load from JSON
/// let json = r#"{ "domain": { "min": { "x": 0.0, "y": 0.0 }, "max": { "x": 10.0, "y": 5.0 } } }"#;
/// let config = TreeConfig::from_json(json).unwrap();
/// assert_eq!(config.domain.xmax(), 10.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Cell of the root node.
    #[serde(default = "TreeConfig::default_domain")]
    pub domain: Rectangle,
}

impl TreeConfig {
    fn default_domain() -> Rectangle {
        Rectangle::unit()
    }

    /// Set the rectangle that bounds the root cell.
    pub fn with_domain(mut self, domain: Rectangle) -> Self {
        self.domain = domain;
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !self.domain.is_well_formed() {
            return Err(KdError::InvalidConfig(format!(
                "domain must have finite bounds with min <= max, got: {}",
                self.domain
            )));
        }

        if self.domain.width() == 0.0 && self.domain.height() == 0.0 {
            log::warn!(
                "Domain {} is a single point; every other point falls outside it",
                self.domain
            );
        }

        Ok(())
    }

    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: TreeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: TreeConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            domain: Self::default_domain(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TreeConfig::default();
        assert_eq!(config.domain, Rectangle::unit());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_domain() {
        let domain = Rectangle::new(-1.0, -1.0, 1.0, 1.0);
        let config = TreeConfig::default().with_domain(domain);
        assert_eq!(config.domain, domain);
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = TreeConfig::default().with_domain(Rectangle::new(0.0, 0.0, 4.0, 2.0));
        let json = config.to_json().unwrap();
        let back = TreeConfig::from_json(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_config_json_defaults() {
        let config = TreeConfig::from_json("{}").unwrap();
        assert_eq!(config, TreeConfig::default());
    }

    #[test]
    fn test_config_rejects_inverted_domain() {
        let json = r#"{ "domain": { "min": { "x": 1.0, "y": 0.0 }, "max": { "x": 0.0, "y": 1.0 } } }"#;
        let err = TreeConfig::from_json(json).unwrap_err();
        assert!(matches!(err, KdError::InvalidConfig(_)));
    }

    #[test]
    fn test_config_rejects_malformed_json() {
        let err = TreeConfig::from_json("{ domain: ").unwrap_err();
        assert!(matches!(err, KdError::Serialization(_)));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
            [domain.min]
            x = 0.0
            y = 0.0

            [domain.max]
            x = 2.0
            y = 3.0
        "#;
        let config = TreeConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.domain, Rectangle::new(0.0, 0.0, 2.0, 3.0));
    }
}
