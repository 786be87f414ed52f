//! navmenu test utilities.
//!
//! Stub translators and message fixtures for integration tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use navmenu::{MenuProvider, MessageCatalog, Translate};

/// Returns every key unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoTranslator;

impl Translate for EchoTranslator {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Fixed key → message table, falling back to the key.
#[derive(Debug, Clone, Default)]
pub struct MapTranslator {
    messages: HashMap<String, String>,
}

impl MapTranslator {
    pub fn new<I, K, V>(messages: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            messages: messages
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Translate for MapTranslator {
    fn translate(&self, key: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

/// Echoes keys and records every call in order.
#[derive(Debug, Default)]
pub struct RecordingTranslator {
    calls: RefCell<Vec<String>>,
}

impl RecordingTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys requested so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Translate for RecordingTranslator {
    fn translate(&self, key: &str) -> String {
        self.calls.borrow_mut().push(key.to_string());
        key.to_string()
    }
}

/// English messages for a handful of menu keys.
pub const EN_MESSAGES: &str = r#"{
    "nav": {
        "retrieve": "Search",
        "dashboard": "Dashboard",
        "manage": "Management",
        "dataSource": "Data Source",
        "collectAccess": "Log Collection",
        "New_acquisition": "New Collection"
    },
    "新建仪表盘": "New Dashboard"
}"#;

/// Chinese messages for a handful of menu keys.
pub const ZH_MESSAGES: &str = r#"{
    "nav": {
        "retrieve": "检索",
        "manage": "管理"
    }
}"#;

/// Catalog holding [`EN_MESSAGES`] and [`ZH_MESSAGES`].
///
/// # Panics
///
/// Panics if the fixtures fail to load.
#[allow(clippy::expect_used)]
pub fn sample_catalog() -> MessageCatalog {
    let catalog = MessageCatalog::new();
    catalog
        .load_json("en", EN_MESSAGES)
        .expect("EN_MESSAGES must load");
    catalog
        .load_json("zh-cn", ZH_MESSAGES)
        .expect("ZH_MESSAGES must load");
    catalog
}

/// Provider over [`sample_catalog`] with `default_language` as fallback.
pub fn sample_provider(default_language: &str) -> MenuProvider {
    MenuProvider::new(Arc::new(sample_catalog()), default_language)
}
