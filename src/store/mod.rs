// SPDX-License-Identifier: PMPL-1.0-or-later

//! On-disk document store for locale message files.
//!
//! One YAML file per locale, named `messages_<locale>.yml`. The document
//! carries the four message categories; categories absent from the file
//! deserialize as empty maps so a partially-edited file still loads.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Serialized shape of a locale message file.
///
/// `info` and `error` are flat key → template maps; `help` and `usage` are
/// keyed by command, then sub-command. Templates may contain `{n}`
/// placeholders and `&` color markers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagesDocument {
    #[serde(default)]
    pub info: BTreeMap<String, String>,
    #[serde(default)]
    pub error: BTreeMap<String, String>,
    #[serde(default)]
    pub help: BTreeMap<String, BTreeMap<String, String>>,
    #[serde(default)]
    pub usage: BTreeMap<String, BTreeMap<String, String>>,
}

/// Why a locale file could not be loaded.
///
/// The loader treats the two cases differently: a missing file falls back
/// without touching the disk, a malformed one is deleted first.
#[derive(Debug)]
pub enum LoadError {
    /// The locale file does not exist.
    NotFound,
    /// The file exists but could not be read or parsed.
    Malformed(anyhow::Error),
}

/// Path of the message file for `locale` under `base_dir`.
///
/// The caller-supplied locale casing is preserved in the file name.
pub fn locale_path(base_dir: &Path, locale: &str) -> PathBuf {
    base_dir.join(format!("messages_{locale}.yml"))
}

/// Load and parse a locale message file.
pub fn load(path: &Path) -> Result<MessagesDocument, LoadError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Err(LoadError::NotFound),
        Err(err) => {
            return Err(LoadError::Malformed(
                anyhow::Error::new(err).context(format!("reading {}", path.display())),
            ));
        }
    };

    serde_yaml::from_str(&content).map_err(|err| {
        LoadError::Malformed(anyhow::Error::new(err).context(format!("parsing {}", path.display())))
    })
}

/// Write a document back to disk, replacing any existing file.
pub fn save(path: &Path, document: &MessagesDocument) -> Result<()> {
    let payload = serde_yaml::to_string(document)
        .with_context(|| format!("serializing messages for {}", path.display()))?;
    fs::write(path, payload).with_context(|| format!("writing {}", path.display()))
}

/// Remove a locale file, typically after a failed parse.
pub fn delete(path: &Path) -> Result<()> {
    fs::remove_file(path).with_context(|| format!("deleting {}", path.display()))
}
