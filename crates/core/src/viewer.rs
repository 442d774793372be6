//! Viewer profiles.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Arbitrary string-to-string attributes attached to a viewer.
///
/// A `BTreeMap` keeps the serialized text stable for identical contents.
pub type InfoMap = BTreeMap<String, String>;

/// A viewer profile as exchanged over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    /// Unique viewer name.
    pub username: String,
    /// Free-form info fields.
    #[serde(default)]
    pub info: InfoMap,
    /// Number of tasks attributed to the viewer.
    #[serde(default)]
    pub task_count: i64,
}

impl Viewer {
    /// Create a viewer with no info and a zero task count.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            info: InfoMap::new(),
            task_count: 0,
        }
    }

    /// Builder-style helper to set one info field.
    pub fn with_info(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.info.insert(field.into(), value.into());
        self
    }
}

/// Decode stored info text. Null or empty text is an empty map.
pub fn decode_info(raw: Option<&str>) -> Result<InfoMap> {
    match raw {
        None => Ok(InfoMap::new()),
        Some(text) if text.trim().is_empty() => Ok(InfoMap::new()),
        Some(text) => {
            serde_json::from_str(text).map_err(|e| Error::InvalidInfo(format!("{e}: {text}")))
        }
    }
}

/// Encode an info map to its stored text form.
pub fn encode_info(info: &InfoMap) -> Result<String> {
    serde_json::to_string(info).map_err(|e| Error::InvalidInfo(e.to_string()))
}
