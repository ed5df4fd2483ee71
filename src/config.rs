//! HTML output options, loadable from a JSON file.
//!
//! ```json
//! {
//!   "plotly": {"online": "https://cdn.plot.ly/plotly-2.35.2.min.js"},
//!   "mathjax": "exclude",
//!   "div_id": "chart",
//!   "full_document": true
//! }
//! ```
//!
//! Missing keys fall back to [`HtmlOptions::default`].

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
pub const MATHJAX_CDN_URL: &str = "https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-svg.js";
const DEFAULT_DIV_ID: &str = "plotly-figure";

/// Where a script bundle comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JavaScriptBundle {
    /// `<script src="url">`.
    Online(String),
    /// `<script src="path">` pointing at a file next to the output.
    Local(PathBuf),
    /// Script source embedded in the document.
    Inline(String),
    /// No script tag; the host page provides the library.
    Exclude,
}

impl JavaScriptBundle {
    /// Read a bundle from disk so it can be embedded in the output.
    pub fn inline_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        fs::read_to_string(path).map(JavaScriptBundle::Inline)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlOptions {
    #[serde(default = "default_plotly")]
    pub plotly: JavaScriptBundle,
    #[serde(default = "default_mathjax")]
    pub mathjax: JavaScriptBundle,
    /// Id of the `<div>` the figure is drawn into.
    #[serde(default = "default_div_id")]
    pub div_id: String,
    /// Emit `<!DOCTYPE html>...` rather than a fragment for embedding.
    #[serde(default = "default_true")]
    pub full_document: bool,
    /// Resize the chart with its container.
    #[serde(default = "default_true")]
    pub responsive: bool,
    /// Document `<title>`; only used for full documents.
    #[serde(default)]
    pub title: Option<String>,
}

fn default_plotly() -> JavaScriptBundle {
    JavaScriptBundle::Online(PLOTLY_CDN_URL.to_string())
}

fn default_mathjax() -> JavaScriptBundle {
    JavaScriptBundle::Online(MATHJAX_CDN_URL.to_string())
}

fn default_div_id() -> String {
    DEFAULT_DIV_ID.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            plotly: default_plotly(),
            mathjax: default_mathjax(),
            div_id: default_div_id(),
            full_document: true,
            responsive: true,
            title: None,
        }
    }
}

impl HtmlOptions {
    /// Load options from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save options as pretty JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Options for a `<div>` fragment that relies on the host page for scripts.
    pub fn fragment() -> Self {
        Self {
            plotly: JavaScriptBundle::Exclude,
            mathjax: JavaScriptBundle::Exclude,
            full_document: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_keys_use_defaults() {
        let opts: HtmlOptions = serde_json::from_str(r#"{"mathjax": "exclude"}"#).unwrap();
        assert_eq!(opts.mathjax, JavaScriptBundle::Exclude);
        assert_eq!(opts.plotly, JavaScriptBundle::Online(PLOTLY_CDN_URL.into()));
        assert_eq!(opts.div_id, "plotly-figure");
        assert!(opts.full_document);
        assert!(opts.responsive);
    }

    #[test]
    fn save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("html.json");
        let opts = HtmlOptions {
            plotly: JavaScriptBundle::Local("plotly.min.js".into()),
            title: Some("Report".into()),
            ..HtmlOptions::fragment()
        };
        opts.save(&path).unwrap();
        assert_eq!(HtmlOptions::load(&path).unwrap(), opts);
    }

    #[test]
    fn inline_file_reads_source() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bundle.js");
        fs::write(&path, "window.Plotly = {};").unwrap();
        assert_eq!(
            JavaScriptBundle::inline_file(&path).unwrap(),
            JavaScriptBundle::Inline("window.Plotly = {};".into())
        );
        assert!(JavaScriptBundle::inline_file(dir.path().join("missing.js")).is_err());
    }
}
