//! Trace types. A trace struct serializes to exactly the attributes that are set;
//! wrapping it in [`Trace`] adds the `"type"` key the renderer dispatches on.

pub mod heatmapgl;
pub mod histogram;
pub mod image;
pub mod parcoords;
pub mod surface;

pub use heatmapgl::HeatmapGl;
pub use histogram::Histogram;
pub use image::{Image, ImageHoverInfo};
pub use parcoords::Parcoords;
pub use surface::{Surface, SurfaceHoverInfo};

use serde::{Deserialize, Serialize};

/// One entry of a figure's `data` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Histogram(Box<Histogram>),
    #[serde(rename = "heatmapgl")]
    HeatmapGl(Box<HeatmapGl>),
    Surface(Box<Surface>),
    Parcoords(Box<Parcoords>),
    Image(Box<Image>),
}

impl Trace {
    /// Wire value of the `"type"` key.
    pub fn trace_type(&self) -> &'static str {
        match self {
            Trace::Histogram(_) => "histogram",
            Trace::HeatmapGl(_) => "heatmapgl",
            Trace::Surface(_) => "surface",
            Trace::Parcoords(_) => "parcoords",
            Trace::Image(_) => "image",
        }
    }

    /// Whether the renderer can animate this trace type between frames.
    pub fn is_animatable(&self) -> bool {
        false
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Trace::Histogram(t) => t.name.as_deref(),
            Trace::HeatmapGl(t) => t.name.as_deref(),
            Trace::Surface(t) => t.name.as_deref(),
            Trace::Parcoords(t) => t.name.as_deref(),
            Trace::Image(t) => t.name.as_deref(),
        }
    }
}

impl From<Histogram> for Trace {
    fn from(t: Histogram) -> Self {
        Trace::Histogram(Box::new(t))
    }
}

impl From<HeatmapGl> for Trace {
    fn from(t: HeatmapGl) -> Self {
        Trace::HeatmapGl(Box::new(t))
    }
}

impl From<Surface> for Trace {
    fn from(t: Surface) -> Self {
        Trace::Surface(Box::new(t))
    }
}

impl From<Parcoords> for Trace {
    fn from(t: Parcoords) -> Self {
        Trace::Parcoords(Box::new(t))
    }
}

impl From<Image> for Trace {
    fn from(t: Image) -> Self {
        Trace::Image(Box::new(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tag_matches_trace_type() {
        let traces: Vec<Trace> = vec![
            Histogram::default().into(),
            HeatmapGl::default().into(),
            Surface::default().into(),
            Parcoords::default().into(),
            Image::default().into(),
        ];
        for trace in &traces {
            let value = serde_json::to_value(trace).unwrap();
            assert_eq!(value, json!({"type": trace.trace_type()}));
            let back: Trace = serde_json::from_value(value).unwrap();
            assert_eq!(&back, trace);
        }
    }

    #[test]
    fn unknown_trace_type_is_rejected() {
        assert!(serde_json::from_value::<Trace>(json!({"type": "scatter"})).is_err());
    }
}
