//! Typed mirror of the Plotly figure schema.
//!
//! Every attribute is an `Option`: `None` never reaches the wire, `Some` always does,
//! even when it holds a zero, an empty string or an empty flag set. Nested objects stay
//! nested (`{"marker": {"line": {"width": 1}}}`); keys are never flattened into dotted
//! paths.
//!
//! Decoding is strict: a key that no field models is an error rather than being
//! dropped, so a decoded figure always re-encodes to everything it was given.
//!
//! Objects are built with struct literals and `..Default::default()`:
//!
//! ```
//! use typed_plotly::schema::{HoverInfo, Histogram};
//!
//! let trace = Histogram {
//!     hover_info: Some(HoverInfo::X | HoverInfo::Name),
//!     opacity: Some(0.5),
//!     name: Some("trace1".into()),
//!     ..Default::default()
//! };
//! assert_eq!(
//!     serde_json::to_string(&trace).unwrap(),
//!     r#"{"opacity":0.5,"name":"trace1","hoverinfo":"x+name"}"#
//! );
//! ```

pub mod common;
pub mod layout;
pub mod traces;
pub mod values;

pub use common::{ColorBar, Font, HoverInfo, HoverLabel, Stream};
pub use layout::{HoverMode, Layout, Title};
pub use traces::{
    HeatmapGl, Histogram, Image, ImageHoverInfo, Parcoords, Surface, SurfaceHoverInfo, Trace,
};
pub use values::{Angle, Anything, Color, ColorScale, Data, InfoArray, SubplotId, Visible};
