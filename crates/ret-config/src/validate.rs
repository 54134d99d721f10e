//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No collections are defined.
    NoCollectionsDefined,
    /// A configured glossary file does not exist.
    GlossaryPathMissing {
        /// The missing path, as configured.
        path: String,
    },
    /// A collection weight override references a collection that isn't defined.
    UnknownCollectionWeight {
        /// Name of the undefined collection.
        collection: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCollectionsDefined => write!(f, "no collections are defined in configuration"),
            Self::GlossaryPathMissing { path } => {
                write!(f, "glossary file does not exist: {path}")
            }
            Self::UnknownCollectionWeight { collection } => {
                write!(f, "collection_weights references undefined collection '{collection}'")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
///
/// This checks for:
/// - Empty configuration (no collections defined)
/// - A configured glossary path that doesn't exist
/// - Collection weight overrides for undefined collections
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.collections.is_empty() {
        warnings.push(ConfigWarning::NoCollectionsDefined);
    }

    if let Some(ref path) = config.glossary_path
        && !path.is_file()
    {
        warnings.push(ConfigWarning::GlossaryPathMissing { path: path.display().to_string() });
    }

    for name in config.collection_weights.keys() {
        if !config.collections.contains_key(name) {
            warnings.push(ConfigWarning::UnknownCollectionWeight { collection: name.clone() });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_validate_empty_config() {
        let config = Config::default();
        let warnings = config.validate();
        assert!(warnings.contains(&ConfigWarning::NoCollectionsDefined));
    }

    #[test]
    fn test_validate_glossary_path_missing() {
        let config = Config {
            glossary_path: Some(PathBuf::from("/nonexistent/glossary.toml")),
            collections: [("docs".to_string(), PathBuf::from("/tmp"))].into(),
            ..Default::default()
        };

        let warnings = config.validate();
        assert!(warnings.iter().any(|w| matches!(w, ConfigWarning::GlossaryPathMissing { .. })));
    }

    #[test]
    fn test_validate_glossary_path_present() {
        let dir = tempfile::tempdir().unwrap();
        let glossary = dir.path().join("glossary.toml");
        std::fs::write(&glossary, "").unwrap();

        let config = Config {
            glossary_path: Some(glossary),
            collections: [("docs".to_string(), dir.path().to_path_buf())].into(),
            ..Default::default()
        };

        let warnings = config.validate();
        assert!(!warnings.iter().any(|w| matches!(w, ConfigWarning::GlossaryPathMissing { .. })));
    }

    #[test]
    fn test_validate_unknown_collection_weight() {
        let config = Config {
            collections: [("docs".to_string(), PathBuf::from("/tmp"))].into(),
            collection_weights: [("scratch".to_string(), 2.0)].into(),
            ..Default::default()
        };

        let warnings = config.validate();
        assert!(warnings.iter().any(
            |w| matches!(w, ConfigWarning::UnknownCollectionWeight { collection } if collection == "scratch")
        ));
    }

    #[test]
    fn test_validate_no_warnings_for_well_formed_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            collections: [("docs".to_string(), dir.path().to_path_buf())].into(),
            collection_weights: [("docs".to_string(), 1.5)].into(),
            ..Default::default()
        };

        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_warning_display() {
        let warning = ConfigWarning::NoCollectionsDefined;
        assert_eq!(warning.to_string(), "no collections are defined in configuration");

        let warning = ConfigWarning::UnknownCollectionWeight { collection: "scratch".into() };
        assert_eq!(
            warning.to_string(),
            "collection_weights references undefined collection 'scratch'"
        );
    }
}
