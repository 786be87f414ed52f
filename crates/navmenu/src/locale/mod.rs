//! Label localization.
//!
//! Menu construction only needs a [`Translate`] implementation. Any
//! `Fn(&str) -> String` qualifies; [`MessageCatalog`] provides the
//! file-backed one used by the server.

mod catalog;

pub use catalog::{CatalogError, CatalogView, MessageCatalog, flatten_messages};
pub(crate) use catalog::normalize_language;

/// Resolves a translation key to a display string for one language.
///
/// Implementations fall back to returning the key (or some default) when
/// they have no message for it; resolution never fails.
pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}
