//! `heatmapgl`: WebGL heatmap of the `z` matrix, one colored cell per value.

use crate::flags::FlagSet;
use crate::schema::common::{ColorBar, HoverInfo, HoverLabel, Stream};
use crate::schema::values::{Anything, ColorScale, Data, SubplotId, Visible, present};
use crate::transforms::Transform;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeatmapGl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<Visible>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,
    #[serde(rename = "customdata", skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<Vec<Anything>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub meta: Option<Anything>,
    #[serde(rename = "hoverinfo", skip_serializing_if = "Option::is_none")]
    pub hover_info: Option<FlagSet<HoverInfo>>,
    #[serde(rename = "hoverlabel", skip_serializing_if = "Option::is_none")]
    pub hover_label: Option<HoverLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<Stream>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transforms: Option<Vec<Transform>>,
    #[serde(
        rename = "uirevision",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub ui_revision: Option<Anything>,
    /// Rows of cell values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<Vec<Vec<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<f64>>,
    /// Alternate to `x`: starting coordinate, stepped by `dx`.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub x0: Option<Anything>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dx: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<f64>>,
    /// Alternate to `y`: starting coordinate, stepped by `dy`.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub y0: Option<Anything>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Data<String>>,
    /// Swap the x and y axes of `z`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transpose: Option<bool>,
    #[serde(rename = "xtype", skip_serializing_if = "Option::is_none")]
    pub x_type: Option<CoordinateType>,
    #[serde(rename = "ytype", skip_serializing_if = "Option::is_none")]
    pub y_type: Option<CoordinateType>,
    #[serde(rename = "zauto", skip_serializing_if = "Option::is_none")]
    pub z_auto: Option<bool>,
    #[serde(rename = "zmin", skip_serializing_if = "Option::is_none")]
    pub z_min: Option<f64>,
    #[serde(rename = "zmax", skip_serializing_if = "Option::is_none")]
    pub z_max: Option<f64>,
    #[serde(rename = "zmid", skip_serializing_if = "Option::is_none")]
    pub z_mid: Option<f64>,
    #[serde(rename = "colorscale", skip_serializing_if = "Option::is_none")]
    pub color_scale: Option<ColorScale>,
    #[serde(rename = "autocolorscale", skip_serializing_if = "Option::is_none")]
    pub auto_color_scale: Option<bool>,
    #[serde(rename = "reversescale", skip_serializing_if = "Option::is_none")]
    pub reverse_scale: Option<bool>,
    #[serde(rename = "showscale", skip_serializing_if = "Option::is_none")]
    pub show_scale: Option<bool>,
    #[serde(rename = "colorbar", skip_serializing_if = "Option::is_none")]
    pub color_bar: Option<ColorBar>,
    #[serde(rename = "coloraxis", skip_serializing_if = "Option::is_none")]
    pub color_axis: Option<SubplotId>,
    #[serde(rename = "xaxis", skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<SubplotId>,
    #[serde(rename = "yaxis", skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<SubplotId>,
    #[serde(rename = "idssrc", skip_serializing_if = "Option::is_none")]
    pub ids_src: Option<String>,
    #[serde(rename = "customdatasrc", skip_serializing_if = "Option::is_none")]
    pub custom_data_src: Option<String>,
    #[serde(rename = "metasrc", skip_serializing_if = "Option::is_none")]
    pub meta_src: Option<String>,
    #[serde(rename = "hoverinfosrc", skip_serializing_if = "Option::is_none")]
    pub hover_info_src: Option<String>,
    #[serde(rename = "zsrc", skip_serializing_if = "Option::is_none")]
    pub z_src: Option<String>,
    #[serde(rename = "xsrc", skip_serializing_if = "Option::is_none")]
    pub x_src: Option<String>,
    #[serde(rename = "ysrc", skip_serializing_if = "Option::is_none")]
    pub y_src: Option<String>,
    #[serde(rename = "textsrc", skip_serializing_if = "Option::is_none")]
    pub text_src: Option<String>,
}

/// `Array` uses the coordinate arrays as given; `Scaled` builds them from `x0`/`dx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateType {
    Array,
    Scaled,
}
