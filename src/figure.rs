use crate::config::HtmlOptions;
use crate::error::Result;
use crate::html;
use crate::schema::{Layout, Trace};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A complete chart: traces plus layout, in Plotly's `{"data": [...], "layout": {...}}`
/// shape. `data` is always emitted, even when empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Figure {
    #[serde(default)]
    pub data: Vec<Trace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trace(mut self, trace: impl Into<Trace>) -> Self {
        self.data.push(trace.into());
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn add_trace(&mut self, trace: impl Into<Trace>) {
        self.data.push(trace.into());
    }

    /// Compact wire JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    /// Read and decode a figure JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_json(&text)?)
    }

    /// Render to an HTML document or fragment. Pure: the script bundles in `options`
    /// are used as given.
    pub fn to_html(&self, options: &HtmlOptions) -> serde_json::Result<String> {
        html::render(self, options)
    }

    pub fn write_html<P: AsRef<Path>>(&self, path: P, options: &HtmlOptions) -> Result<()> {
        let document = self.to_html(options)?;
        fs::write(path.as_ref(), document)?;
        log::debug!("wrote figure HTML to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Histogram, Title};
    use tempfile::tempdir;

    #[test]
    fn empty_figure_keeps_data_array() {
        assert_eq!(Figure::new().to_json().unwrap(), r#"{"data":[]}"#);
        let back = Figure::from_json("{}").unwrap();
        assert_eq!(back, Figure::new());
    }

    #[test]
    fn write_and_load_html_and_json() {
        let dir = tempdir().unwrap();
        let fig = Figure::new()
            .with_trace(Histogram {
                x: Some(vec![1.0, 2.0, 2.0]),
                ..Default::default()
            })
            .with_layout(Layout {
                title: Some(Title::new("Counts")),
                ..Default::default()
            });

        let html_path = dir.path().join("fig.html");
        fig.write_html(&html_path, &HtmlOptions::default()).unwrap();
        let text = fs::read_to_string(&html_path).unwrap();
        assert!(text.contains(r#""type":"histogram""#));

        let json_path = dir.path().join("fig.json");
        fs::write(&json_path, fig.to_json().unwrap()).unwrap();
        assert_eq!(Figure::load(&json_path).unwrap(), fig);
    }
}
