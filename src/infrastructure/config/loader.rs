use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use super::resolver::{expand_tilde, ConfigResolver};
use crate::domain::models::config::{convert_mapping, SectionMap};

/// Configuration error types
///
/// Every variant is fatal for the invocation that hit it. A requested
/// section that is merely absent is not an error; it is logged and skipped.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to obtain configuration: no configuration file resolved")]
    EmptyPath,

    #[error("Unable to read configuration file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to parse YAML data in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Configuration syntax error: structure expected")]
    StructureExpected,

    #[error("No configuration found for {} sections", .sections.join(", "))]
    NoSections { sections: Vec<String> },
}

/// Loads named sections from a YAML configuration document.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load `sections` from the file at `path`.
    ///
    /// A leading `~/` in `path` is expanded. Fails when the file cannot be
    /// read or parsed, when its top level is not a mapping, or when none of
    /// the requested sections is present.
    pub fn load<S: AsRef<str>>(path: &Path, sections: &[S]) -> Result<SectionMap, ConfigError> {
        let raw = path.to_string_lossy();
        if raw.is_empty() {
            return Err(ConfigError::EmptyPath);
        }

        Self::read_sections(expand_tilde(&raw), sections)
    }

    /// Resolve the active file through `resolver` and load `sections` from it.
    ///
    /// `~/` is not expanded again; the resolver already applied its own home
    /// directory, or left the path literal when it has none.
    pub fn load_active<S: AsRef<str>>(
        resolver: &mut ConfigResolver,
        override_path: &str,
        sections: &[S],
    ) -> Result<SectionMap, ConfigError> {
        let path = resolver.resolve_active(override_path);
        if path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath);
        }
        Self::read_sections(path.to_path_buf(), sections)
    }

    fn read_sections<S: AsRef<str>>(
        path: PathBuf,
        sections: &[S],
    ) -> Result<SectionMap, ConfigError> {
        debug!(path = %path.display(), "loading configuration");

        let source = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        Self::parse_sections(&source, sections).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse { path, source },
            other => other,
        })
    }

    /// Extract `sections` from an in-memory YAML document.
    ///
    /// Parse failures carry an empty path; [`ConfigLoader::load`] fills in
    /// the file name.
    pub fn parse_sections<S: AsRef<str>>(
        source: &str,
        sections: &[S],
    ) -> Result<SectionMap, ConfigError> {
        let document: serde_yaml::Value =
            serde_yaml::from_str(source).map_err(|source| ConfigError::Parse {
                path: PathBuf::new(),
                source,
            })?;

        let serde_yaml::Value::Mapping(root) = untag(document) else {
            return Err(ConfigError::StructureExpected);
        };

        let mut root = convert_mapping(root);

        let mut content = SectionMap::new();
        for section in sections {
            let section = section.as_ref();
            match root.remove(section) {
                Some(value) => {
                    content.insert(section.to_string(), value);
                }
                None if content.contains_key(section) => {}
                None => warn!("Section '{section}' does not exist"),
            }
        }

        if content.is_empty() {
            return Err(ConfigError::NoSections {
                sections: sections.iter().map(|s| s.as_ref().to_string()).collect(),
            });
        }

        Ok(content)
    }
}

fn untag(value: serde_yaml::Value) -> serde_yaml::Value {
    match value {
        serde_yaml::Value::Tagged(tagged) => {
            let serde_yaml::value::TaggedValue { value, .. } = *tagged;
            untag(value)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::config::ConfigValue;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const DOCUMENT: &str = r"
A:
  host: example.com
  port: 8080
B:
  - one
  - two
";

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_requested_sections() {
        let file = write_config(DOCUMENT);
        let sections = ConfigLoader::load(file.path(), &["A", "B"]).unwrap();

        assert_eq!(sections.len(), 2);
        assert_eq!(
            sections["A"].get("host").and_then(ConfigValue::as_str),
            Some("example.com")
        );
        assert_eq!(sections["A"].get("port"), Some(&ConfigValue::Integer(8080)));
        assert_eq!(sections["B"].as_sequence().map(Vec::len), Some(2));
    }

    #[test]
    fn test_missing_section_is_tolerated() {
        let file = write_config(DOCUMENT);
        let sections = ConfigLoader::load(file.path(), &["A", "C"]).unwrap();

        assert_eq!(sections.keys().collect::<Vec<_>>(), ["A"]);
    }

    #[test]
    fn test_all_sections_missing() {
        let file = write_config(DOCUMENT);
        let err = ConfigLoader::load(file.path(), &["C", "D"]).unwrap_err();

        assert!(matches!(err, ConfigError::NoSections { .. }));
        assert_eq!(err.to_string(), "No configuration found for C, D sections");
    }

    #[test]
    fn test_no_sections_requested() {
        let file = write_config(DOCUMENT);
        let err = ConfigLoader::load::<&str>(file.path(), &[]).unwrap_err();

        assert!(matches!(err, ConfigError::NoSections { ref sections } if sections.is_empty()));
    }

    #[test]
    fn test_duplicate_request_keeps_section() {
        let file = write_config(DOCUMENT);
        let sections = ConfigLoader::load(file.path(), &["A", "A"]).unwrap();
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn test_empty_path() {
        let err = ConfigLoader::load(Path::new(""), &["A"]).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPath));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("absent.conf");
        let err = ConfigLoader::load(&path, &["A"]).unwrap_err();

        match err {
            ConfigError::Read { path: failed, source } => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_yaml() {
        let file = write_config("A: [unclosed\n");
        let err = ConfigLoader::load(file.path(), &["A"]).unwrap_err();

        match &err {
            ConfigError::Parse { path, .. } => assert_eq!(path, file.path()),
            other => panic!("Expected Parse error, got {other:?}"),
        }
        assert!(err.to_string().starts_with("Unable to parse YAML data in "));
    }

    #[test]
    fn test_top_level_must_be_mapping() {
        for source in ["- a\n- b\n", "just a string\n", ""] {
            let err = ConfigLoader::parse_sections(source, &["A"]).unwrap_err();
            assert!(
                matches!(err, ConfigError::StructureExpected),
                "source {source:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_load_active_uses_override() {
        let file = write_config(DOCUMENT);
        let mut resolver = ConfigResolver::with_home("spaceman", None);
        let override_path = file.path().to_string_lossy().into_owned();

        let sections = ConfigLoader::load_active(&mut resolver, &override_path, &["B"]).unwrap();
        assert!(sections.contains_key("B"));
        assert_eq!(resolver.paths().active, file.path());
    }

    #[test]
    fn test_load_active_keeps_tilde_when_home_unknown() {
        let mut resolver = ConfigResolver::with_home("spaceman", None);
        let err = ConfigLoader::load_active(&mut resolver, "~/spaceman_absent.conf", &["A"])
            .unwrap_err();

        match err {
            ConfigError::Read { path, .. } => assert_eq!(path, Path::new("~/spaceman_absent.conf")),
            other => panic!("Expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_active_uses_injected_home() {
        let home = tempfile::TempDir::new().unwrap();
        std::fs::write(home.path().join("custom.conf"), DOCUMENT).unwrap();
        let mut resolver =
            ConfigResolver::with_home("spaceman", Some(home.path().to_path_buf()));

        let sections = ConfigLoader::load_active(&mut resolver, "~/custom.conf", &["A"]).unwrap();
        assert!(sections.contains_key("A"));
        assert_eq!(resolver.paths().active, home.path().join("custom.conf"));
    }
}
