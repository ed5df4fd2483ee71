//! typed_plotly
//!
//! Strongly typed Plotly figure objects that serialize to exactly the JSON plotly.js
//! expects, and back.
//!
//! ### Features
//! - One struct per schema object, every attribute optional; unset attributes never
//!   reach the wire
//! - Flag attributes (`hoverinfo`) as typed sets with a deterministic `x+y+name` encoding
//! - Histogram, HeatmapGL, Surface, Parcoords and Image traces plus the aggregate
//!   transform
//! - HTML rendering with configurable script bundles, and a browser viewer
//!
//! ### Example
//! ```no_run
//! use typed_plotly::schema::{Histogram, HoverInfo, Layout, Title};
//! use typed_plotly::{Figure, HtmlOptions};
//!
//! let figure = Figure::new()
//!     .with_trace(Histogram {
//!         x: Some(vec![1.0, 2.0, 2.0, 3.0]),
//!         hover_info: Some(HoverInfo::X | HoverInfo::Y),
//!         ..Default::default()
//!     })
//!     .with_layout(Layout {
//!         title: Some(Title::new("Counts")),
//!         ..Default::default()
//!     });
//! figure.write_html("counts.html", &HtmlOptions::default())?;
//! typed_plotly::browser::show(&figure, &HtmlOptions::default())?;
//! # Ok::<(), typed_plotly::Error>(())
//! ```

pub mod flags;

pub mod browser;
pub mod config;
pub mod error;
pub mod figure;
pub mod html;
pub mod schema;
pub mod transforms;

pub use config::{HtmlOptions, JavaScriptBundle};
pub use error::{Error, FlagParseError, Result};
pub use figure::Figure;
pub use flags::{Flag, FlagSet};
