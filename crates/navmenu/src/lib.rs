//! Navigation menu library.
//!
//! Declares the log platform's navigation menu, resolves its labels
//! through an injected translator and serves the result over HTTP.
//! The `navmenu` binary is the main entry point for running the server.

pub mod config;
pub mod dump;
pub mod error;
pub mod language;
pub mod locale;
pub mod menu;
pub mod provider;
pub mod routes;
pub mod state;

pub use config::Config;
pub use locale::{MessageCatalog, Translate};
pub use menu::{MenuFlags, MenuNode, build_menu};
pub use provider::MenuProvider;
pub use state::AppState;
