//! JSON export of a resolved menu.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::warn;

use crate::provider::MenuProvider;

/// Write the menu for `lang` to `out` as JSON followed by a newline.
///
/// Unknown or missing languages fall back to the provider's default.
/// Returns the language the labels were resolved in.
pub fn dump_menu<W: Write>(
    provider: &MenuProvider,
    lang: Option<&str>,
    compact: bool,
    out: &mut W,
) -> Result<String> {
    let language = provider.resolve_language(lang);
    if let Some(requested) = lang
        && !provider.is_known(requested)
    {
        warn!(requested = %requested, using = %language, "unknown language");
    }

    let tree = provider.menu(&language);
    let json = if compact {
        serde_json::to_string(&tree[..])
    } else {
        serde_json::to_string_pretty(&tree[..])
    }
    .context("failed to serialize menu")?;

    writeln!(out, "{json}").context("failed to write menu")?;
    Ok(language)
}
