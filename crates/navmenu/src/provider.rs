//! Per-language menu trees.
//!
//! A tree is built the first time a language is requested and shared as an
//! immutable `Arc<[MenuNode]>` afterwards. Reloading a language's messages
//! rebuilds its tree and swaps the cached reference in one step; readers
//! still holding the old tree keep a consistent copy.

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::locale::{CatalogError, MessageCatalog, flatten_messages, normalize_language};
use crate::menu::{self, MenuNode};

/// Builds, caches and swaps localized menu trees.
pub struct MenuProvider {
    catalog: Arc<MessageCatalog>,
    default_language: String,
    trees: DashMap<String, Arc<[MenuNode]>>,

    /// Held across replace, build and swap so concurrent reloads cannot
    /// leave a tree cached that was built from superseded messages.
    reload_lock: Mutex<()>,
}

impl MenuProvider {
    pub fn new(catalog: Arc<MessageCatalog>, default_language: &str) -> Self {
        Self {
            catalog,
            default_language: normalize_language(default_language),
            trees: DashMap::new(),
            reload_lock: Mutex::new(()),
        }
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Languages a tree can be served in: every catalog language plus the
    /// default, sorted.
    pub fn languages(&self) -> Vec<String> {
        let mut langs = self.catalog.languages();
        if !langs.contains(&self.default_language) {
            langs.push(self.default_language.clone());
            langs.sort();
        }
        langs
    }

    /// Whether `language` resolves to itself rather than the default.
    pub fn is_known(&self, language: &str) -> bool {
        let language = normalize_language(language);
        language == self.default_language || self.catalog.contains_language(&language)
    }

    /// Map a requested language to one a tree can be built for.
    pub fn resolve_language(&self, requested: Option<&str>) -> String {
        match requested {
            Some(lang) if self.is_known(lang) => normalize_language(lang),
            _ => self.default_language.clone(),
        }
    }

    /// Menu for `language`, building it on first use.
    ///
    /// Unknown languages are served the default language's tree.
    pub fn menu(&self, language: &str) -> Arc<[MenuNode]> {
        let language = self.resolve_language(Some(language));
        if let Some(tree) = self.trees.get(&language) {
            return Arc::clone(tree.value());
        }

        let tree = self.build(&language);
        Arc::clone(self.trees.entry(language).or_insert(tree).value())
    }

    /// Replace a language's messages and swap in a freshly built tree.
    pub fn reload(&self, language: &str, messages: HashMap<String, String>) -> Arc<[MenuNode]> {
        let _guard = self.reload_lock.lock();
        let count = self.catalog.replace_language(language, messages);
        let language = self.resolve_language(Some(language));
        let tree = self.build(&language);
        self.trees.insert(language.clone(), Arc::clone(&tree));
        info!(language = %language, messages = count, "menu reloaded");
        tree
    }

    /// [`reload`](Self::reload) from a nested JSON message document.
    pub fn reload_json(&self, language: &str, json: &str) -> Result<Arc<[MenuNode]>, CatalogError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|source| CatalogError::Json {
                path: format!("<{language}>").into(),
                source,
            })?;
        let messages = flatten_messages(&value)?;
        Ok(self.reload(language, messages))
    }

    /// Drop every cached tree; the next request rebuilds.
    pub fn invalidate(&self) {
        self.trees.clear();
    }

    fn build(&self, language: &str) -> Arc<[MenuNode]> {
        let view = self.catalog.view(language);
        let tree: Arc<[MenuNode]> = menu::build_menu(&view).into();
        debug!(language = %language, nodes = menu::count(&tree), "menu tree built");
        tree
    }
}

impl std::fmt::Debug for MenuProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuProvider")
            .field("default_language", &self.default_language)
            .field("cached", &self.trees.len())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn provider() -> MenuProvider {
        let catalog = MessageCatalog::new();
        catalog
            .load_json("en", r#"{"nav": {"retrieve": "Search", "manage": "Manage"}}"#)
            .unwrap();
        catalog
            .load_json("zh-cn", r#"{"nav": {"retrieve": "检索"}}"#)
            .unwrap();
        MenuProvider::new(Arc::new(catalog), "zh-CN")
    }

    #[test]
    fn builds_localized_tree() {
        let provider = provider();
        let en = provider.menu("en");
        assert_eq!(en[0].name, "Search");
        assert_eq!(en[5].name, "Manage");
        // Missing messages fall back to the key.
        assert_eq!(en[2].name, "nav.extract");

        let zh = provider.menu("zh-cn");
        assert_eq!(zh[0].name, "检索");
    }

    #[test]
    fn caches_per_language() {
        let provider = provider();
        let a = provider.menu("en");
        let b = provider.menu("EN");
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn unknown_language_uses_default() {
        let provider = provider();
        assert_eq!(provider.resolve_language(Some("fr")), "zh-cn");
        assert_eq!(provider.resolve_language(None), "zh-cn");
        let fr = provider.menu("fr");
        assert!(Arc::ptr_eq(&fr, &provider.menu("zh-cn")));
    }

    #[test]
    fn default_language_is_listed_even_without_messages() {
        let provider = MenuProvider::new(Arc::new(MessageCatalog::new()), "en");
        assert_eq!(provider.languages(), ["en"]);
        assert_eq!(provider.menu("en")[0].name, "nav.retrieve");
    }

    #[test]
    fn reload_swaps_tree_and_keeps_old_readers_intact() {
        let provider = provider();
        let before = provider.menu("en");

        let mut messages = HashMap::new();
        messages.insert("nav.retrieve".to_string(), "Query".to_string());
        let after = provider.reload("en", messages);

        assert_eq!(before[0].name, "Search");
        assert_eq!(after[0].name, "Query");
        assert!(Arc::ptr_eq(&after, &provider.menu("en")));
    }

    #[test]
    fn reload_json_adds_language() {
        let provider = provider();
        assert!(!provider.is_known("fr"));
        let tree = provider
            .reload_json("fr", r#"{"nav": {"retrieve": "Recherche"}}"#)
            .unwrap();
        assert_eq!(tree[0].name, "Recherche");
        assert!(provider.is_known("fr"));
        assert_eq!(provider.languages(), ["en", "fr", "zh-cn"]);
    }

    #[test]
    fn reload_json_rejects_bad_messages() {
        let provider = provider();
        let before = provider.menu("en");
        assert!(provider.reload_json("en", r#"{"nav": [1]}"#).is_err());
        assert!(Arc::ptr_eq(&before, &provider.menu("en")));
    }

    #[test]
    fn concurrent_reloads_leave_cache_matching_catalog() {
        let provider = provider();

        std::thread::scope(|s| {
            for i in 0..8 {
                let provider = &provider;
                s.spawn(move || {
                    for round in 0..25 {
                        let mut messages = HashMap::new();
                        messages.insert("nav.retrieve".to_string(), format!("Search {i}/{round}"));
                        provider.reload("en", messages);
                    }
                });
            }
            s.spawn(|| {
                for _ in 0..100 {
                    let _ = provider.menu("en");
                }
            });
        });

        let expected = menu::build_menu(&provider.catalog().view("en"));
        assert_eq!(&provider.menu("en")[..], &expected[..]);
    }

    #[test]
    fn invalidate_rebuilds_equal_tree() {
        let provider = provider();
        let first = provider.menu("en");
        provider.invalidate();
        let second = provider.menu("en");
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first, second);
    }
}
