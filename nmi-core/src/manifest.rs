use crate::{InspectError, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

pub const MANIFEST_FILE: &str = "package.json";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "lenient_map")]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "lenient_map")]
    pub dev_dependencies: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "lenient_map")]
    pub peer_dependencies: BTreeMap<String, String>,
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub module_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub main: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub module: Option<String>,
    pub exports: Option<Exports>,
}

// Published manifests carry `null`, arrays and numbers in places npm
// documents as strings or maps. Anything off-shape reads as absent.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(value) => Ok(Some(value)),
        _ => Ok(None),
    }
}

fn lenient_map<'de, D>(deserializer: D) -> std::result::Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(entries) = Value::deserialize(deserializer)? else {
        return Ok(BTreeMap::new());
    };

    Ok(entries
        .into_iter()
        .filter_map(|(name, range)| match range {
            Value::String(range) => Some((name, range)),
            _ => None,
        })
        .collect())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Exports {
    Path(String),
    Map(BTreeMap<String, Value>),
    List(Vec<Value>),
    Other(Value),
}

impl Exports {
    pub fn has_condition(&self, condition: &str) -> bool {
        let Exports::Map(map) = self else {
            return false;
        };

        if map.contains_key(condition) {
            return true;
        }

        map.get(".")
            .and_then(Value::as_object)
            .is_some_and(|root| root.contains_key(condition))
    }
}

/// A missing file is `Ok(None)`; unreadable or unparsable content is an
/// error the walk downgrades to a skip.
pub fn read_manifest(path: &Path) -> Result<Option<Manifest>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(InspectError::ReadFile {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let manifest: Manifest =
        serde_json::from_str(&data).map_err(|source| InspectError::ParseJson {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(Some(manifest))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Manifest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn parses_dependency_sections() {
        let manifest = parse(
            r#"{
                "name": "app",
                "version": "1.2.3",
                "dependencies": { "react": "^18.0.0" },
                "devDependencies": { "typescript": "^5.0.0" },
                "peerDependencies": { "react-dom": "*" }
            }"#,
        );

        assert_eq!(manifest.name.as_deref(), Some("app"));
        assert_eq!(manifest.version.as_deref(), Some("1.2.3"));
        assert!(manifest.dependencies.contains_key("react"));
        assert!(manifest.dev_dependencies.contains_key("typescript"));
        assert!(manifest.peer_dependencies.contains_key("react-dom"));
    }

    #[test]
    fn accepts_every_exports_shape() {
        let string = parse(r#"{ "exports": "./index.js" }"#);
        assert!(matches!(string.exports, Some(Exports::Path(_))));

        let list = parse(r#"{ "exports": ["./a.js", "./b.js"] }"#);
        assert!(matches!(list.exports, Some(Exports::List(_))));

        let map = parse(r#"{ "exports": { "import": "./a.mjs" } }"#);
        assert!(matches!(map.exports, Some(Exports::Map(_))));

        let null = parse(r#"{ "exports": null }"#);
        assert!(null.exports.is_none());
    }

    #[test]
    fn finds_conditions_at_top_level_or_under_dot() {
        let top = parse(r#"{ "exports": { "require": "./a.cjs" } }"#);
        let nested = parse(r#"{ "exports": { ".": { "import": "./a.mjs" } } }"#);
        let deep = parse(r#"{ "exports": { "./sub": { "import": "./a.mjs" } } }"#);

        assert!(top.exports.as_ref().unwrap().has_condition("require"));
        assert!(nested.exports.as_ref().unwrap().has_condition("import"));
        assert!(!deep.exports.as_ref().unwrap().has_condition("import"));
    }

    #[test]
    fn off_shape_fields_read_as_absent() {
        let manifest = parse(
            r#"{
                "version": "1.0.0",
                "main": null,
                "type": 5,
                "dependencies": [],
                "devDependencies": null,
                "peerDependencies": { "react": "*", "broken": 1 }
            }"#,
        );

        assert_eq!(manifest.version.as_deref(), Some("1.0.0"));
        assert!(manifest.main.is_none());
        assert!(manifest.module_type.is_none());
        assert!(manifest.dependencies.is_empty());
        assert!(manifest.dev_dependencies.is_empty());
        assert_eq!(manifest.peer_dependencies.len(), 1);
        assert!(manifest.peer_dependencies.contains_key("react"));
    }

    #[test]
    fn non_string_version_is_absent() {
        assert!(parse(r#"{ "version": 1 }"#).version.is_none());
    }

    #[test]
    fn missing_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_manifest(&dir.path().join(MANIFEST_FILE)).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILE);
        fs::write(&path, "{ not json").unwrap();

        let err = read_manifest(&path).unwrap_err();
        assert!(matches!(err, InspectError::ParseJson { .. }));
    }
}
