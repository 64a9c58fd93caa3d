//! Ordered entry lists driving both procedures.
//!
//! The built-in lists mirror the eight game icons the application ships with. A JSON
//! manifest can replace them; array order is iteration order.
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;

/// Placeholder source used by every built-in remote entry
pub const PLACEHOLDER_URL: &str = "https://picsum.photos/300/200";

const BUILTIN_LOCAL: [(&str, &str); 8] = [
    ("狼人杀.jpeg", "game1.png"),
    ("谁是卧底.png", "game2.png"),
    ("麻将.jpeg", "game3.png"),
    ("斗地主.jpeg", "game4.png"),
    ("UNO.jpeg", "game5.png"),
    ("拆弹猫.jpeg", "game6.png"),
    ("五子棋.jpeg", "game7.png"),
    ("象棋.jpeg", "game8.png"),
];

/// Local source filename mapped to an output filename, both relative to the images directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalEntry {
    pub source: String,
    pub output: String,
}

impl LocalEntry {
    pub fn new(source: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
        }
    }
}

/// Output filename mapped to the URL it is downloaded from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteEntry {
    pub output: String,
    pub url: String,
}

impl RemoteEntry {
    pub fn new(output: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub local: Vec<LocalEntry>,
    #[serde(default)]
    pub remote: Vec<RemoteEntry>,
}

impl Manifest {
    pub fn builtin() -> Self {
        Self {
            local: builtin_local_entries(),
            remote: builtin_remote_entries(),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let manifest = Self::from_json_str(&text)?;
        info!(
            "Loaded manifest {:?}: {} local, {} remote entries",
            path,
            manifest.local.len(),
            manifest.remote.len()
        );
        Ok(manifest)
    }

    /// Points every remote entry at `url`, keeping outputs and order
    pub fn with_remote_url(mut self, url: &str) -> Self {
        for entry in &mut self.remote {
            entry.url = url.to_string();
        }
        self
    }
}

pub fn builtin_local_entries() -> Vec<LocalEntry> {
    BUILTIN_LOCAL
        .iter()
        .map(|(source, output)| LocalEntry::new(*source, *output))
        .collect()
}

pub fn builtin_remote_entries() -> Vec<RemoteEntry> {
    BUILTIN_LOCAL
        .iter()
        .map(|(_, output)| RemoteEntry::new(*output, PLACEHOLDER_URL))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lists_keep_declaration_order() {
        let manifest = Manifest::builtin();
        assert_eq!(manifest.local.len(), 8);
        assert_eq!(manifest.remote.len(), 8);
        assert_eq!(manifest.local[0], LocalEntry::new("狼人杀.jpeg", "game1.png"));
        assert_eq!(manifest.local[7], LocalEntry::new("象棋.jpeg", "game8.png"));
        let outputs: Vec<&str> = manifest.remote.iter().map(|e| e.output.as_str()).collect();
        assert_eq!(
            outputs,
            [
                "game1.png", "game2.png", "game3.png", "game4.png", "game5.png", "game6.png",
                "game7.png", "game8.png"
            ]
        );
    }

    #[test]
    fn json_manifest_preserves_order_and_defaults_missing_lists() {
        let manifest = Manifest::from_json_str(
            r#"{ "local": [
                    { "source": "b.jpeg", "output": "second.png" },
                    { "source": "a.jpeg", "output": "first.png" }
               ] }"#,
        )
        .unwrap();
        assert_eq!(manifest.local[0].source, "b.jpeg");
        assert_eq!(manifest.local[1].output, "first.png");
        assert!(manifest.remote.is_empty());
    }

    #[test]
    fn remote_url_override_replaces_each_slot() {
        let manifest = Manifest::builtin().with_remote_url("http://example.test/icon.png");
        assert!(
            manifest
                .remote
                .iter()
                .all(|e| e.url == "http://example.test/icon.png")
        );
        assert_eq!(manifest.remote[2].output, "game3.png");
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        assert!(matches!(
            Manifest::from_json_str("{ \"local\": 3 }"),
            Err(crate::Error::Manifest(_))
        ));
    }
}
