//! In-memory message catalog for menu labels.
//!
//! Messages are loaded per language from nested JSON objects such as
//! `{"nav": {"retrieve": "Search"}}` and stored under dotted keys
//! (`nav.retrieve`). Keys that are plain source text stay as written.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::Translate;

/// Errors raised while loading messages.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed message file {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot derive a language code from {}", .path.display())]
    InvalidFileName { path: PathBuf },

    #[error("message root must be a JSON object")]
    NotAnObject,

    #[error("message '{key}' must be a string or an object")]
    InvalidMessage { key: String },
}

type Messages = Arc<HashMap<String, String>>;

/// Per-language message store.
///
/// Each language's messages are held behind an `Arc` and replaced as a
/// whole, so a [`CatalogView`] always sees one consistent set.
#[derive(Default)]
pub struct MessageCatalog {
    languages: DashMap<String, Messages>,
}

impl MessageCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all messages for a language. Returns the message count.
    pub fn replace_language(&self, language: &str, messages: HashMap<String, String>) -> usize {
        let count = messages.len();
        self.languages
            .insert(normalize_language(language), Arc::new(messages));
        count
    }

    /// Add or overwrite a single message.
    pub fn insert(&self, language: &str, key: impl Into<String>, message: impl Into<String>) {
        let mut entry = self
            .languages
            .entry(normalize_language(language))
            .or_default();
        Arc::make_mut(entry.value_mut()).insert(key.into(), message.into());
    }

    /// Load a language from a JSON document, replacing its current messages.
    pub fn load_json(&self, language: &str, json: &str) -> Result<usize, CatalogError> {
        let value: Value = serde_json::from_str(json).map_err(|source| CatalogError::Json {
            path: PathBuf::from(format!("<{language}>")),
            source,
        })?;
        let messages = flatten_messages(&value)?;
        let count = self.replace_language(language, messages);
        info!(language = %language, count, "loaded menu messages");
        Ok(count)
    }

    /// Load a single `<language>.json` file.
    pub fn load_file(&self, path: &Path) -> Result<usize, CatalogError> {
        let language = language_for_path(path)?;

        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value = serde_json::from_str(&content).map_err(|source| CatalogError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        let messages = flatten_messages(&value)?;
        let count = self.replace_language(&language, messages);
        info!(language = %language, count, path = %path.display(), "loaded menu messages");
        Ok(count)
    }

    /// Load every `*.json` file in `dir`, one language per file.
    ///
    /// Files that fail to load are skipped with a warning so one broken
    /// translation does not take the others down. Returns the number of
    /// languages loaded.
    pub fn load_dir(&self, dir: &Path) -> Result<usize, CatalogError> {
        let entries = fs::read_dir(dir).map_err(|source| CatalogError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        // language -> file it was loaded from
        let mut sources: HashMap<String, PathBuf> = HashMap::new();
        for path in paths {
            match self.load_file(&path) {
                Ok(_) => {
                    let Ok(language) = language_for_path(&path) else {
                        continue;
                    };
                    if let Some(earlier) = sources.insert(language.clone(), path.clone()) {
                        warn!(
                            language = %language,
                            earlier = %earlier.display(),
                            path = %path.display(),
                            "message file overrides another file for the same language"
                        );
                    }
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping message file");
                }
            }
        }

        let loaded = sources.len();
        debug!(dir = %dir.display(), languages = loaded, "message directory scanned");
        Ok(loaded)
    }

    /// Known language codes, sorted.
    pub fn languages(&self) -> Vec<String> {
        let mut langs: Vec<String> = self.languages.iter().map(|e| e.key().clone()).collect();
        langs.sort();
        langs
    }

    /// Whether any messages were loaded for `language`.
    pub fn contains_language(&self, language: &str) -> bool {
        self.languages.contains_key(&normalize_language(language))
    }

    /// Number of messages for `language`.
    pub fn message_count(&self, language: &str) -> usize {
        self.languages
            .get(&normalize_language(language))
            .map(|m| m.len())
            .unwrap_or_default()
    }

    /// Translator bound to one language's current messages.
    ///
    /// The view keeps a snapshot: later reloads do not affect it.
    pub fn view(&self, language: &str) -> CatalogView {
        let language = normalize_language(language);
        let messages = self.languages.get(&language).map(|m| Arc::clone(m.value()));
        CatalogView { language, messages }
    }
}

impl std::fmt::Debug for MessageCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageCatalog")
            .field("languages", &self.languages())
            .finish()
    }
}

/// One language's messages, usable as a [`Translate`] implementation.
#[derive(Debug, Clone)]
pub struct CatalogView {
    language: String,
    messages: Option<Messages>,
}

impl CatalogView {
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Message for `key`, if the language has one.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.as_ref()?.get(key).map(String::as_str)
    }
}

impl Translate for CatalogView {
    /// Falls back to the key itself when no message exists.
    fn translate(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_string()
    }
}

/// Flatten a nested JSON message object into dotted keys.
pub fn flatten_messages(value: &Value) -> Result<HashMap<String, String>, CatalogError> {
    let Value::Object(map) = value else {
        return Err(CatalogError::NotAnObject);
    };

    let mut out = HashMap::new();
    for (key, child) in map {
        flatten_into(key.clone(), child, &mut out)?;
    }
    Ok(out)
}

fn flatten_into(
    key: String,
    value: &Value,
    out: &mut HashMap<String, String>,
) -> Result<(), CatalogError> {
    match value {
        Value::String(s) => {
            out.insert(key, s.clone());
        }
        Value::Object(map) => {
            for (child_key, child) in map {
                flatten_into(format!("{key}.{child_key}"), child, out)?;
            }
        }
        _ => return Err(CatalogError::InvalidMessage { key }),
    }
    Ok(())
}

/// Language code named by a `<language>.json` file.
fn language_for_path(path: &Path) -> Result<String, CatalogError> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(normalize_language)
        .filter(|l| !l.is_empty())
        .ok_or_else(|| CatalogError::InvalidFileName {
            path: path.to_path_buf(),
        })
}

/// Language codes are compared case-insensitively with `_` treated as `-`.
pub(crate) fn normalize_language(language: &str) -> String {
    language.trim().to_lowercase().replace('_', "-")
}
