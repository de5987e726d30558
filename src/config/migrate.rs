//! Keep older configuration files in step with the current `Config` fields.

use super::Config;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::io;
use std::path::Path;

fn read_mapping(path: &Path) -> io::Result<Mapping> {
    let content = fs::read_to_string(path)?;
    match serde_yaml::from_str::<Value>(&content) {
        Ok(Value::Mapping(m)) => Ok(m),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(_) => Err(io::Error::other(format!(
            "{}: configuration is not a mapping",
            path.display()
        ))),
        Err(e) => Err(io::Error::other(format!("{}: {e}", path.display()))),
    }
}

fn defaults() -> io::Result<Mapping> {
    match serde_yaml::to_value(Config::default()) {
        Ok(Value::Mapping(m)) => Ok(m),
        Ok(_) => Err(io::Error::other("default configuration is not a mapping")),
        Err(e) => Err(io::Error::other(e.to_string())),
    }
}

/// Names of the known fields absent from the file.
pub fn missing_fields(path: &Path) -> io::Result<Vec<String>> {
    let current = read_mapping(path)?;
    Ok(defaults()?
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Write the default value of every missing field into the file.
/// Existing values are never changed. Returns the added field names.
pub fn add_missing_fields(path: &Path) -> io::Result<Vec<String>> {
    let mut current = read_mapping(path)?;
    let mut added = Vec::new();

    for (k, v) in defaults()? {
        if !current.contains_key(&k) {
            if let Some(name) = k.as_str() {
                added.push(name.to_string());
            }
            current.insert(k, v);
        }
    }

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&Value::Mapping(current))
            .map_err(|e| io::Error::other(format!("serialize error: {e}")))?;
        fs::write(path, serialized)?;
    }

    Ok(added)
}
