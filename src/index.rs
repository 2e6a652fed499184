//! Ingestion of audio source index files.
//!
//! Each audio source directory carries an `index.json` mapping headwords to
//! the audio files under its `media` directory, and audio files to reading
//! and pitch accent metadata.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::slice;

use anyhow::{Context, Result};
use serde::Deserialize;

/// A parsed `index.json` describing one audio source.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Index {
    pub meta: Meta,
    pub headwords: BTreeMap<String, FileNames>,
    pub files: BTreeMap<String, FileEntry>,
}

/// Source metadata.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub name: Option<String>,
}

/// One or several file names for a headword.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FileNames {
    One(String),
    Many(Vec<String>),
}

/// Metadata carried by one audio file entry.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileEntry {
    pub kana_reading: Option<String>,
    pub pitch_number: Option<String>,
    pub pitch_pattern: Option<String>,
}

impl Index {
    /// Load an index file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read(path).with_context(|| path.display().to_string())?;
        let index = serde_json::from_slice(&data).with_context(|| path.display().to_string())?;
        Ok(index)
    }
}

impl FileNames {
    /// The file names in index order.
    pub fn as_slice(&self) -> &[String] {
        match self {
            FileNames::One(name) => slice::from_ref(name),
            FileNames::Many(names) => names,
        }
    }
}
