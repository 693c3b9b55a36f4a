use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::sections::entry::template_entries;

/// Script injection point for generated pages.
pub const HTML_INJECT: &str = "head";

/// One HTML page generated from a template entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlDescriptor {
    /// Output filename (the entry key)
    pub filename: String,

    /// Template source, passed through without path resolution
    pub template: String,

    pub inject: String,

    /// The single chunk injected into this page
    pub chunks: Vec<String>,
}

pub fn build_html(entries: &IndexMap<String, String>) -> Vec<HtmlDescriptor> {
    template_entries(entries)
        .map(|(key, template)| HtmlDescriptor {
            filename: key.to_owned(),
            template: template.to_owned(),
            inject: HTML_INJECT.to_owned(),
            chunks: vec![key.strip_suffix(".html").unwrap_or(key).to_owned()],
        })
        .collect()
}
