//! Navigation menu tree.
//!
//! The menu is declared once as a static table and provides:
//! - Localized trees built through an injected translator
//! - Read-only lookups by id path or first match, for routing and breadcrumbs

mod node;
mod table;
mod walk;

pub use node::{MenuFlags, MenuNode};
pub use table::{MenuEntry, NAV_MENU, build_menu, resolve_entries};
pub use walk::{count, find_path, trail, walk};
