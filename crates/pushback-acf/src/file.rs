//! Aircraft file property store

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use pushback_core::AcfError;

/// Line that terminates the property section
const PROPERTIES_END: &str = "PROPERTIES_END";

/// Prefix of a property line
const PROPERTY_PREFIX: &str = "P ";

/// A parsed aircraft description file
///
/// Maps slash-delimited keys (`_wing/1/_Croot`, `acf/_cgZ`, ...) to their raw
/// string values. The store is never mutated after parsing.
#[derive(Debug, Clone, Default)]
pub struct AcfFile {
    version: i32,
    props: HashMap<String, String>,
}

impl AcfFile {
    /// Read and parse an aircraft file from disk
    pub fn read(path: impl AsRef<Path>) -> Result<Self, AcfError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| AcfError::Io {
            path: path.display().to_string(),
            source,
        })?;
        // Descriptions and names inside acf files are not always UTF-8
        let text = String::from_utf8_lossy(&bytes);
        let acf = Self::parse_str(&text)?;
        tracing::debug!(
            "Read {} ({} properties, version {})",
            path.display(),
            acf.len(),
            acf.version
        );
        Ok(acf)
    }

    /// Parse aircraft file content
    pub fn parse_str(content: &str) -> Result<Self, AcfError> {
        let mut lines = content.lines().map(str::trim);

        let marker = lines.next().ok_or(AcfError::Empty)?;
        if marker.is_empty() && content.trim().is_empty() {
            return Err(AcfError::Empty);
        }
        if marker != "I" && marker != "A" {
            return Err(AcfError::BadMarker {
                marker: marker.to_string(),
            });
        }

        let version_line = lines.next().unwrap_or_default();
        let version = parse_version_line(version_line).ok_or_else(|| AcfError::BadVersion {
            line: version_line.to_string(),
        })?;

        let tag = lines.next().unwrap_or_default();
        if tag != "ACF" {
            return Err(AcfError::MissingAcfTag {
                line: tag.to_string(),
            });
        }

        let mut props = HashMap::new();
        for line in lines {
            if line == PROPERTIES_END {
                break;
            }
            let Some(rest) = line.strip_prefix(PROPERTY_PREFIX) else {
                continue;
            };
            let rest = rest.trim_start();
            let (key, value) = match rest.split_once(char::is_whitespace) {
                Some((key, value)) => (key, value.trim()),
                None => (rest, ""),
            };
            if key.is_empty() {
                continue;
            }
            match props.entry(key.to_string()) {
                Entry::Vacant(slot) => {
                    slot.insert(value.to_string());
                }
                Entry::Occupied(_) => {
                    tracing::debug!("Ignoring duplicate property {}", key);
                }
            }
        }

        Ok(Self { version, props })
    }

    /// Build a store from already-split properties
    pub fn from_properties<K, V>(version: i32, props: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = HashMap::new();
        for (key, value) in props {
            map.entry(key.into()).or_insert_with(|| value.into());
        }
        Self {
            version,
            props: map,
        }
    }

    /// File format version (e.g. 1100, 1200)
    pub fn version(&self) -> i32 {
        self.version
    }

    /// Look up the raw value of a property
    pub fn find(&self, key: &str) -> Option<&str> {
        self.props.get(key).map(String::as_str)
    }

    /// Whether a property is present
    pub fn contains(&self, key: &str) -> bool {
        self.props.contains_key(key)
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Whether the store has no properties
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Iterate over all `(key, value)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Parse `"<version> version"`; the trailing word is optional
fn parse_version_line(line: &str) -> Option<i32> {
    let mut words = line.split_whitespace();
    let version = words.next()?.parse::<i32>().ok()?;
    match words.next() {
        None => Some(version),
        Some(word) if word.eq_ignore_ascii_case("version") => Some(version),
        Some(_) => None,
    }
}
