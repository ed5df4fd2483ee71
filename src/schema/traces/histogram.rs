//! `histogram` trace.
//!
//! Sample data goes in `x` for vertical histograms and in `y` for horizontal ones.
//! Bins are set with `x_bins`/`y_bins` unless an aggregation function is given.

use crate::flags::FlagSet;
use crate::schema::common::{Calendar, ColorBar, HoverInfo, HoverLabel, Stream};
use crate::schema::values::{Anything, Color, ColorScale, Data, SubplotId, Visible, present};
use crate::transforms::Transform;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Histogram {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<Visible>,
    #[serde(rename = "showlegend", skip_serializing_if = "Option::is_none")]
    pub show_legend: Option<bool>,
    /// Traces in the same legend group toggle together.
    #[serde(rename = "legendgroup", skip_serializing_if = "Option::is_none")]
    pub legend_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Shown as the legend item and on hover.
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
    /// Indices of selected points. An empty array selects nothing; any non-array value
    /// clears the selection.
    #[serde(
        rename = "selectedpoints",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub selected_points: Option<Anything>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Data<String>>,
    #[serde(rename = "hovertext", skip_serializing_if = "Option::is_none")]
    pub hover_text: Option<Data<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(rename = "histfunc", skip_serializing_if = "Option::is_none")]
    pub binning_function: Option<BinningFunction>,
    #[serde(rename = "histnorm", skip_serializing_if = "Option::is_none")]
    pub normalization: Option<Normalization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cumulative: Option<Cumulative>,
    /// Maximum number of x bins; ignored when `x_bins.size` is set.
    #[serde(rename = "nbinsx", skip_serializing_if = "Option::is_none")]
    pub x_num_bins: Option<u32>,
    #[serde(rename = "xbins", skip_serializing_if = "Option::is_none")]
    pub x_bins: Option<Bins>,
    #[serde(rename = "nbinsy", skip_serializing_if = "Option::is_none")]
    pub y_num_bins: Option<u32>,
    #[serde(rename = "ybins", skip_serializing_if = "Option::is_none")]
    pub y_bins: Option<Bins>,
    #[serde(rename = "autobinx", skip_serializing_if = "Option::is_none")]
    pub x_auto_bin: Option<bool>,
    #[serde(rename = "autobiny", skip_serializing_if = "Option::is_none")]
    pub y_auto_bin: Option<bool>,
    /// Histograms with the same `bin_group` on the same axes share bin settings.
    #[serde(rename = "bingroup", skip_serializing_if = "Option::is_none")]
    pub bin_group: Option<String>,
    #[serde(rename = "hovertemplate", skip_serializing_if = "Option::is_none")]
    pub hover_template: Option<Data<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(rename = "offsetgroup", skip_serializing_if = "Option::is_none")]
    pub offset_group: Option<String>,
    #[serde(rename = "alignmentgroup", skip_serializing_if = "Option::is_none")]
    pub alignment_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<SelectionStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unselected: Option<SelectionStyle>,
    #[serde(rename = "error_x", skip_serializing_if = "Option::is_none")]
    pub x_error: Option<ErrorBar>,
    #[serde(rename = "error_y", skip_serializing_if = "Option::is_none")]
    pub y_error: Option<ErrorBar>,
    #[serde(rename = "xcalendar", skip_serializing_if = "Option::is_none")]
    pub x_calendar: Option<Calendar>,
    #[serde(rename = "ycalendar", skip_serializing_if = "Option::is_none")]
    pub y_calendar: Option<Calendar>,
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
    #[serde(rename = "xsrc", skip_serializing_if = "Option::is_none")]
    pub x_src: Option<String>,
    #[serde(rename = "ysrc", skip_serializing_if = "Option::is_none")]
    pub y_src: Option<String>,
    #[serde(rename = "textsrc", skip_serializing_if = "Option::is_none")]
    pub text_src: Option<String>,
    #[serde(rename = "hovertextsrc", skip_serializing_if = "Option::is_none")]
    pub hover_text_src: Option<String>,
    #[serde(rename = "hovertemplatesrc", skip_serializing_if = "Option::is_none")]
    pub hover_template_src: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[serde(rename = "v")]
    Vertical,
    #[serde(rename = "h")]
    Horizontal,
}

/// How the values that fall into a bin are combined. `Count` ignores the value data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinningFunction {
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

/// Normalization of bin heights. `None` (the empty string) keeps raw counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    #[serde(rename = "")]
    None,
    Percent,
    Probability,
    Density,
    #[serde(rename = "probability density")]
    ProbabilityDensity,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cumulative {
    /// Replaces each bin with the running sum of bins; normalization applies to the
    /// sums.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<CumulativeDirection>,
    #[serde(rename = "currentbin", skip_serializing_if = "Option::is_none")]
    pub current_bin: Option<CurrentBin>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CumulativeDirection {
    Increasing,
    Decreasing,
}

/// Whether the current bin is part of its own running sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrentBin {
    Include,
    Exclude,
    Half,
}

/// Explicit bin edges. Values are numbers, or date/category strings matching the axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Bins {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub start: Option<Anything>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub end: Option<Anything>,
    /// Bin width; `"M<n>"` gives month bins on date axes.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub size: Option<Anything>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkerLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Data<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Data<Color>>,
    #[serde(rename = "cauto", skip_serializing_if = "Option::is_none")]
    pub c_auto: Option<bool>,
    #[serde(rename = "cmin", skip_serializing_if = "Option::is_none")]
    pub c_min: Option<f64>,
    #[serde(rename = "cmax", skip_serializing_if = "Option::is_none")]
    pub c_max: Option<f64>,
    #[serde(rename = "cmid", skip_serializing_if = "Option::is_none")]
    pub c_mid: Option<f64>,
    #[serde(rename = "colorscale", skip_serializing_if = "Option::is_none")]
    pub color_scale: Option<ColorScale>,
    #[serde(rename = "autocolorscale", skip_serializing_if = "Option::is_none")]
    pub auto_color_scale: Option<bool>,
    #[serde(rename = "reversescale", skip_serializing_if = "Option::is_none")]
    pub reverse_scale: Option<bool>,
    #[serde(rename = "coloraxis", skip_serializing_if = "Option::is_none")]
    pub color_axis: Option<SubplotId>,
    #[serde(rename = "widthsrc", skip_serializing_if = "Option::is_none")]
    pub width_src: Option<String>,
    #[serde(rename = "colorsrc", skip_serializing_if = "Option::is_none")]
    pub color_src: Option<String>,
}

/// Bar marker. A numeric `color` array is mapped through `color_scale`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<MarkerLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Data<Color>>,
    #[serde(rename = "cauto", skip_serializing_if = "Option::is_none")]
    pub c_auto: Option<bool>,
    #[serde(rename = "cmin", skip_serializing_if = "Option::is_none")]
    pub c_min: Option<f64>,
    #[serde(rename = "cmax", skip_serializing_if = "Option::is_none")]
    pub c_max: Option<f64>,
    #[serde(rename = "cmid", skip_serializing_if = "Option::is_none")]
    pub c_mid: Option<f64>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Data<f64>>,
    #[serde(rename = "colorsrc", skip_serializing_if = "Option::is_none")]
    pub color_src: Option<String>,
    #[serde(rename = "opacitysrc", skip_serializing_if = "Option::is_none")]
    pub opacity_src: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectionMarker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectionTextFont {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// Styling of selected (or unselected) points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectionStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<SelectionMarker>,
    #[serde(rename = "textfont", skip_serializing_if = "Option::is_none")]
    pub text_font: Option<SelectionTextFont>,
}

/// How error bar lengths are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorRule {
    Percent,
    Constant,
    Sqrt,
    Data,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorBar {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub rule: Option<ErrorRule>,
    /// When false, `array_minus`/`value_minus` set the lower bars.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symmetric: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub array: Option<Vec<f64>>,
    #[serde(rename = "arrayminus", skip_serializing_if = "Option::is_none")]
    pub array_minus: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(rename = "valueminus", skip_serializing_if = "Option::is_none")]
    pub value_minus: Option<f64>,
    #[serde(rename = "traceref", skip_serializing_if = "Option::is_none")]
    pub trace_reference: Option<u32>,
    #[serde(rename = "tracerefminus", skip_serializing_if = "Option::is_none")]
    pub trace_reference_minus: Option<u32>,
    /// Horizontal bars only: reuse the style of the vertical ones.
    #[serde(rename = "copy_ystyle", skip_serializing_if = "Option::is_none")]
    pub copy_y_style: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    /// Width of the cross-bar at both ends, in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(rename = "arraysrc", skip_serializing_if = "Option::is_none")]
    pub array_src: Option<String>,
    #[serde(rename = "arrayminussrc", skip_serializing_if = "Option::is_none")]
    pub array_minus_src: Option<String>,
}
