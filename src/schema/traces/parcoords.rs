//! `parcoords`: parallel coordinates. Each entry of `dimensions` is one vertical axis;
//! each data row is a polyline crossing all of them.

use crate::schema::common::{ColorBar, Domain, Font, Stream};
use crate::schema::values::{
    Angle, Anything, Color, ColorScale, Data, InfoArray, SubplotId, Visible, present,
};
use crate::transforms::Transform;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Parcoords {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<Visible>,
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
    pub domain: Option<Domain>,
    /// Rotation of the axis labels; `0` is horizontal, `90` vertical.
    #[serde(rename = "labelangle", skip_serializing_if = "Option::is_none")]
    pub label_angle: Option<Angle>,
    #[serde(rename = "labelside", skip_serializing_if = "Option::is_none")]
    pub label_side: Option<LabelSide>,
    #[serde(rename = "labelfont", skip_serializing_if = "Option::is_none")]
    pub label_font: Option<Font>,
    #[serde(rename = "tickfont", skip_serializing_if = "Option::is_none")]
    pub tick_font: Option<Font>,
    #[serde(rename = "rangefont", skip_serializing_if = "Option::is_none")]
    pub range_font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Vec<Dimension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(rename = "idssrc", skip_serializing_if = "Option::is_none")]
    pub ids_src: Option<String>,
    #[serde(rename = "customdatasrc", skip_serializing_if = "Option::is_none")]
    pub custom_data_src: Option<String>,
    #[serde(rename = "metasrc", skip_serializing_if = "Option::is_none")]
    pub meta_src: Option<String>,
}

impl Parcoords {
    pub fn with_dimension(mut self, dimension: Dimension) -> Self {
        self.dimensions.get_or_insert_with(Vec::new).push(dimension);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelSide {
    Top,
    Bottom,
}

/// One axis of the chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dimension {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "tickvals", skip_serializing_if = "Option::is_none")]
    pub tick_values: Option<Vec<f64>>,
    #[serde(rename = "ticktext", skip_serializing_if = "Option::is_none")]
    pub tick_text: Option<Vec<String>>,
    #[serde(rename = "tickformat", skip_serializing_if = "Option::is_none")]
    pub tick_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// Domain of the axis; defaults to the extent of `values`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<InfoArray>,
    /// Highlighted interval, `[min, max]` or a list of such pairs.
    #[serde(rename = "constraintrange", skip_serializing_if = "Option::is_none")]
    pub constraint_range: Option<InfoArray>,
    /// Allow several constraint ranges on this axis.
    #[serde(rename = "multiselect", skip_serializing_if = "Option::is_none")]
    pub multi_select: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "templateitemname", skip_serializing_if = "Option::is_none")]
    pub template_item_name: Option<String>,
    #[serde(rename = "tickvalssrc", skip_serializing_if = "Option::is_none")]
    pub tick_values_src: Option<String>,
    #[serde(rename = "ticktextsrc", skip_serializing_if = "Option::is_none")]
    pub tick_text_src: Option<String>,
    #[serde(rename = "valuessrc", skip_serializing_if = "Option::is_none")]
    pub values_src: Option<String>,
}

impl Dimension {
    pub fn new(label: &str, values: Vec<f64>) -> Self {
        Self {
            label: Some(label.to_string()),
            values: Some(values),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Line {
    /// One color for all lines, or one number per line mapped through `color_scale`.
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
    #[serde(rename = "colorsrc", skip_serializing_if = "Option::is_none")]
    pub color_src: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dimensions_serialize_as_a_list() {
        let trace = Parcoords::default()
            .with_dimension(Dimension::new("A", vec![1.0, 2.0]))
            .with_dimension(Dimension {
                constraint_range: Some(InfoArray::from([1.5, 2.5])),
                ..Dimension::new("B", vec![3.0, 4.0])
            });
        assert_eq!(
            serde_json::to_value(&trace).unwrap(),
            json!({"dimensions": [
                {"label": "A", "values": [1.0, 2.0]},
                {"label": "B", "constraintrange": [1.5, 2.5], "values": [3.0, 4.0]}
            ]})
        );
    }
}
