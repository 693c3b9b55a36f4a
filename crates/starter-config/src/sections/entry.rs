//! Entry classification: bundle inputs by key, HTML templates by value.

use std::path::PathBuf;

use indexmap::IndexMap;

use crate::context::BuildContext;

/// Text after the last `.`, or the whole string when there is none.
pub(crate) fn extension(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(_, ext)| ext)
}

/// Entries whose key ends in `js` or `css`.
pub fn bundle_entries(entries: &IndexMap<String, String>) -> impl Iterator<Item = (&str, &str)> {
    entries
        .iter()
        .filter(|(key, _)| matches!(extension(key), "js" | "css"))
        .map(|(key, value)| (key.as_str(), value.as_str()))
}

/// Entries whose value ends in `html`.
pub fn template_entries(
    entries: &IndexMap<String, String>,
) -> impl Iterator<Item = (&str, &str)> {
    entries
        .iter()
        .filter(|(_, value)| extension(value) == "html")
        .map(|(key, value)| (key.as_str(), value.as_str()))
}

/// Build the bundle entry map: source paths made absolute and a trailing
/// `.js` stripped from each output name. `.css` names are kept as-is.
pub fn build_entries(
    entries: &IndexMap<String, String>,
    ctx: &BuildContext,
) -> IndexMap<String, PathBuf> {
    bundle_entries(entries)
        .map(|(key, source)| {
            let name = key.strip_suffix(".js").unwrap_or(key);
            (name.to_owned(), ctx.resolve(source))
        })
        .collect()
}
