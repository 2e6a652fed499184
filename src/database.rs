//! Store mapping headwords to pronunciation audio.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use musli::{Decode, Encode};
use thiserror::Error;

use crate::deinflect::deinflect;
use crate::index::Index;
use crate::kana;
use crate::{DATABASE_MAGIC, DATABASE_VERSION};

/// An error raised when opening a stored database.
#[derive(Debug, Error)]
pub enum OpenError {
    #[error("Not valid due to magic mismatch")]
    MagicMismatch,
    #[error("Outdated database version")]
    Outdated,
    #[error("{0}")]
    Decode(
        #[from]
        #[source]
        musli_storage::Error,
    ),
    #[error("{0}")]
    Io(
        #[from]
        #[source]
        io::Error,
    ),
}

/// Metadata stored for one audio file.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct FileInfo {
    /// Name of the source the file came from.
    pub source: String,
    /// Hiragana reading of the pronounced word.
    pub reading: String,
    /// Pitch accent number, when the source provides one.
    pub pitch_number: Option<String>,
    /// Pitch accent pattern, when the source provides one.
    pub pitch_pattern: Option<String>,
}

/// A successful lookup.
#[derive(Debug)]
pub struct Hit<'a> {
    /// The headword that matched: the looked up word itself or one of its
    /// deinflections.
    pub headword: &'a str,
    /// Audio file paths for the headword, in index order.
    pub paths: &'a [String],
}

/// Headword-keyed store of pronunciation audio built from the indexes of
/// every configured audio source.
#[derive(Debug, Default, Encode, Decode)]
pub struct Database {
    /// Headword to audio file paths. One headword may carry files from
    /// several sources; order within follows ingestion order.
    headwords: HashMap<String, Vec<String>>,
    /// Audio file path to stored metadata.
    files: HashMap<String, FileInfo>,
}

impl Database {
    /// Build a database from every audio source directory under
    /// `audio_dir`. Directories without an index file are skipped.
    pub fn build(audio_dir: &Path) -> Result<Self> {
        let mut database = Self::default();

        let entries = fs::read_dir(audio_dir)
            .with_context(|| format!("reading audio directory {}", audio_dir.display()))?;

        for entry in entries {
            let dir = entry?.path();

            if !dir.is_dir() {
                continue;
            }

            let index_path = dir.join("index.json");

            if !index_path.is_file() {
                tracing::debug!("no index file in {}", dir.display());
                continue;
            }

            tracing::debug!("processing {}", dir.display());
            let index = Index::load(&index_path)?;
            database.add_index(&dir, index);
        }

        tracing::info!(
            "indexed {} headwords across {} files",
            database.headwords.len(),
            database.files.len()
        );

        Ok(database)
    }

    /// Merge one parsed source index into the database.
    fn add_index(&mut self, dir: &Path, index: Index) {
        let source = match index.meta.name {
            Some(name) => name,
            None => dir
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };

        for (headword, names) in &index.headwords {
            let paths = self.headwords.entry(headword.clone()).or_default();

            for name in names.as_slice() {
                paths.push(media_path(dir, name));
            }
        }

        for (name, entry) in index.files {
            let Some(kana_reading) = entry.kana_reading else {
                tracing::debug!("no kana reading for {name}");
                continue;
            };

            self.files.insert(
                media_path(dir, &name),
                FileInfo {
                    source: source.clone(),
                    reading: kana::to_hiragana(&kana_reading),
                    pitch_number: entry.pitch_number,
                    pitch_pattern: entry.pitch_pattern,
                },
            );
        }
    }

    /// Serialize the database to `path`, creating parent directories as
    /// needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        let mut data = Vec::new();
        data.extend_from_slice(&DATABASE_MAGIC.to_le_bytes());
        data.extend_from_slice(&DATABASE_VERSION.to_le_bytes());
        musli_storage::to_writer(&mut data, self)?;

        fs::write(path, data).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Load a database previously written by [`Database::save`].
    pub fn load(path: &Path) -> Result<Self, OpenError> {
        let data = fs::read(path)?;

        if data.len() < 8 {
            return Err(OpenError::MagicMismatch);
        }

        let magic = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
        let version = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);

        if magic != DATABASE_MAGIC {
            return Err(OpenError::MagicMismatch);
        }

        if version != DATABASE_VERSION {
            return Err(OpenError::Outdated);
        }

        Ok(musli_storage::from_slice(&data[8..])?)
    }

    /// Audio paths for `word`, trying the exact word first and every
    /// deinflection hypothesis after it, in production order.
    pub fn lookup(&self, word: &str) -> Option<Hit<'_>> {
        if let Some(hit) = self.exact(word) {
            return Some(hit);
        }

        for candidate in deinflect(word) {
            if let Some(hit) = self.exact(&candidate) {
                tracing::debug!("found {word} through deinflection {}", hit.headword);
                return Some(hit);
            }
        }

        None
    }

    fn exact(&self, word: &str) -> Option<Hit<'_>> {
        let (headword, paths) = self.headwords.get_key_value(word)?;

        if paths.is_empty() {
            return None;
        }

        Some(Hit {
            headword,
            paths,
        })
    }

    /// Stored metadata for an audio file path.
    pub fn info(&self, path: &str) -> Option<&FileInfo> {
        self.files.get(path)
    }

    /// The subset of `hit`'s paths whose stored reading matches `reading`.
    ///
    /// Readings compare in hiragana, so katakana input matches hiragana
    /// entries and vice versa.
    pub fn filter_reading<'d>(&'d self, hit: &Hit<'d>, reading: &str) -> Vec<&'d str> {
        let reading = kana::to_hiragana(reading);

        hit.paths
            .iter()
            .filter(|path| {
                self.files
                    .get(path.as_str())
                    .is_some_and(|info| info.reading == reading)
            })
            .map(String::as_str)
            .collect()
    }

    /// Test if the database holds no headwords.
    pub fn is_empty(&self) -> bool {
        self.headwords.is_empty()
    }
}

/// Full path to an audio file inside a source directory.
fn media_path(dir: &Path, name: &str) -> String {
    dir.join("media").join(name).to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::Database;
    use crate::index::Index;

    fn database() -> Database {
        let index: Index = serde_json::from_str(
            r#"{
                "meta": {"name": "test source"},
                "headwords": {
                    "食べる": ["taberu.ogg", "taberu2.ogg"],
                    "辞書": "jisho.ogg",
                    "橋": "hashi.ogg"
                },
                "files": {
                    "taberu.ogg": {"kana_reading": "タベル"},
                    "taberu2.ogg": {"kana_reading": "たべる"},
                    "jisho.ogg": {"kana_reading": "ジショ", "pitch_number": "1"},
                    "hashi.ogg": {"kana_reading": "はし", "pitch_pattern": "はし＼"}
                }
            }"#,
        )
        .unwrap();

        let mut database = Database::default();
        database.add_index(Path::new("/audio/test"), index);
        database
    }

    fn media(name: &str) -> String {
        super::media_path(Path::new("/audio/test"), name)
    }

    #[test]
    fn exact_lookup() {
        let database = database();
        let hit = database.lookup("辞書").unwrap();
        assert_eq!(hit.headword, "辞書");
        assert_eq!(hit.paths, [media("jisho.ogg")]);
    }

    #[test]
    fn deinflected_lookup() {
        let database = database();
        let hit = database.lookup("食べた").unwrap();
        assert_eq!(hit.headword, "食べる");
        assert_eq!(hit.paths, [media("taberu.ogg"), media("taberu2.ogg")]);
    }

    #[test]
    fn missing_lookup() {
        let database = database();
        assert!(database.lookup("飲む").is_none());
    }

    #[test]
    fn stored_info() {
        let database = database();
        let info = database.info(&media("jisho.ogg")).unwrap();
        assert_eq!(info.source, "test source");
        // Readings normalize to hiragana at ingestion.
        assert_eq!(info.reading, "じしょ");
        assert_eq!(info.pitch_number.as_deref(), Some("1"));
    }

    #[test]
    fn reading_filter() {
        let database = database();
        let hit = database.lookup("食べる").unwrap();

        // Katakana input matches hiragana stored readings.
        let matching = database.filter_reading(&hit, "タベル");
        assert_eq!(matching, [media("taberu.ogg"), media("taberu2.ogg")]);

        let none = database.filter_reading(&hit, "のむ");
        assert!(none.is_empty());
    }

    #[test]
    fn save_and_load() {
        let database = database();
        let path = std::env::temp_dir().join(format!("jpron-test-{}.db", std::process::id()));

        database.save(&path).unwrap();
        let loaded = Database::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let hit = loaded.lookup("橋").unwrap();
        assert_eq!(hit.paths, [media("hashi.ogg")]);
        assert_eq!(loaded.info(&media("hashi.ogg")), database.info(&media("hashi.ogg")));
    }

    #[test]
    fn rejects_foreign_files() {
        use super::OpenError;

        let path = std::env::temp_dir().join(format!("jpron-bad-{}.db", std::process::id()));
        std::fs::write(&path, b"not a database").unwrap();

        let result = Database::load(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(OpenError::MagicMismatch)));
    }
}
