use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use tracing::warn;

/// Sections extracted from a configuration document, keyed by section name.
pub type SectionMap = BTreeMap<String, ConfigValue>;

/// Known configuration file locations for one process.
///
/// `active` is the file currently in effect. It starts out as `local` and is
/// only ever replaced by an explicit override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigPaths {
    /// System-wide configuration file
    pub global: PathBuf,
    /// Per-user configuration file
    pub local: PathBuf,
    /// Per-user session file
    pub session: PathBuf,
    /// File in effect for this invocation
    pub active: PathBuf,
}

/// A configuration file location together with whether it exists on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigCandidate {
    /// Role of the location: `global`, `local`, `session` or `active`
    pub role: &'static str,
    pub path: PathBuf,
    pub exists: bool,
}

/// Parsed configuration content.
///
/// Every node of a loaded document maps onto exactly one variant, so callers
/// can match on the shape of a section instead of probing a dynamic value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<ConfigValue>),
    Mapping(BTreeMap<String, ConfigValue>),
}

impl ConfigValue {
    /// Look up a key when this value is a mapping.
    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Mapping(map) => map.get(key),
            _ => None,
        }
    }

    pub const fn as_mapping(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub const fn as_sequence(&self) -> Option<&Vec<Self>> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// True for everything except sequences and mappings.
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::Sequence(_) | Self::Mapping(_))
    }
}

impl fmt::Display for ConfigValue {
    /// Scalars render as their plain text; collections render as compact JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("~"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
            Self::Sequence(_) | Self::Mapping(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

impl From<serde_yaml::Value> for ConfigValue {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => n
                .as_i64()
                .map_or_else(|| Self::Float(n.as_f64().unwrap_or_default()), Self::Integer),
            Value::String(s) => Self::String(s),
            Value::Sequence(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Mapping(map) => Self::Mapping(convert_mapping(map)),
            Value::Tagged(tagged) => {
                let serde_yaml::value::TaggedValue { value, .. } = *tagged;
                Self::from(value)
            }
        }
    }
}

/// Convert a YAML mapping, rendering its keys as strings.
///
/// Distinct keys can render to the same string (`1` and `"1"`). The later
/// entry wins and a `warn` event names the key.
pub(crate) fn convert_mapping(map: serde_yaml::Mapping) -> BTreeMap<String, ConfigValue> {
    let mut converted = BTreeMap::new();
    for (key, value) in map {
        let key = mapping_key(key);
        if converted.insert(key.clone(), ConfigValue::from(value)).is_some() {
            warn!("Duplicate key '{key}', keeping the later value");
        }
    }
    converted
}

/// Render a YAML mapping key as a string.
///
/// Section names are strings in practice, but YAML allows any scalar (or even
/// a collection) as a key.
fn mapping_key(key: serde_yaml::Value) -> String {
    use serde_yaml::Value;

    match key {
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "~".to_string(),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
