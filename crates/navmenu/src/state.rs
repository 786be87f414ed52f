//! Application state shared across all handlers.

use std::sync::Arc;

use crate::provider::MenuProvider;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone, Debug)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    /// Localized menu trees.
    menus: MenuProvider,
}

impl AppState {
    pub fn new(menus: MenuProvider) -> Self {
        Self {
            inner: Arc::new(AppStateInner { menus }),
        }
    }

    /// Get the menu provider.
    pub fn menus(&self) -> &MenuProvider {
        &self.inner.menus
    }
}
