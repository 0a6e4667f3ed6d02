use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use crate::foundation::error::{ReelError, ReelResult};
use crate::scene::model::{VideoConfig, VideoConfigDef};
use crate::scene::normalize::normalize;

impl VideoConfig {
    /// Normalize an in-memory boundary definition.
    pub fn from_def(def: &VideoConfigDef) -> ReelResult<Self> {
        normalize(def)
    }

    /// Parse and normalize a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        let def: VideoConfigDef = serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse video config JSON: {e}")))?;
        Self::from_def(&def)
    }

    /// Parse and normalize a configuration from a JSON string.
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        let def: VideoConfigDef = serde_json::from_str(s)
            .map_err(|e| ReelError::serde(format!("parse video config JSON: {e}")))?;
        Self::from_def(&def)
    }

    /// Parse and normalize a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::validation(format!("open video config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize the normalized configuration for export/download.
    pub fn to_json_pretty(&self) -> ReelResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ReelError::serde(format!("serialize video config: {e}")))
    }

    /// Serialize the normalized configuration into a writer.
    pub fn write_json<W: std::io::Write>(&self, w: W) -> ReelResult<()> {
        serde_json::to_writer_pretty(w, self)
            .map_err(|e| ReelError::serde(format!("serialize video config: {e}")))
    }
}

impl FromStr for VideoConfig {
    type Err = ReelError;

    fn from_str(s: &str) -> ReelResult<Self> {
        Self::from_json_str(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
