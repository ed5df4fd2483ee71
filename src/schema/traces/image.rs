//! `image`: a raster of color pixels.
//!
//! In a cartesian subplot the y axis is reversed and constrained so that pixels are
//! drawn as squares.

use crate::flags::FlagSet;
use crate::schema::common::{HoverLabel, Stream};
use crate::schema::values::{Anything, Data, InfoArray, SubplotId, Visible, present};
use serde::{Deserialize, Serialize};

crate::flag_set! {
    pub enum ImageHoverInfo as "hoverinfo" {
        X = "x",
        Y = "y",
        Z = "z",
        Color = "color",
        Name = "name",
        Text = "text",
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Image {
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
    #[serde(rename = "hoverlabel", skip_serializing_if = "Option::is_none")]
    pub hover_label: Option<HoverLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<Stream>,
    #[serde(
        rename = "uirevision",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub ui_revision: Option<Anything>,
    /// Rows of pixels; each pixel holds 3 or 4 color components.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<Vec<Vec<Vec<f64>>>>,
    #[serde(rename = "colormodel", skip_serializing_if = "Option::is_none")]
    pub color_model: Option<ColorModel>,
    /// Lower bound of each color component; the default depends on `color_model`.
    #[serde(rename = "zmin", skip_serializing_if = "Option::is_none")]
    pub z_min: Option<InfoArray>,
    #[serde(rename = "zmax", skip_serializing_if = "Option::is_none")]
    pub z_max: Option<InfoArray>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub x0: Option<Anything>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub y0: Option<Anything>,
    /// Pixel width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dx: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Data<String>>,
    #[serde(rename = "hovertext", skip_serializing_if = "Option::is_none")]
    pub hover_text: Option<Data<String>>,
    #[serde(rename = "hoverinfo", skip_serializing_if = "Option::is_none")]
    pub hover_info: Option<FlagSet<ImageHoverInfo>>,
    #[serde(rename = "hovertemplate", skip_serializing_if = "Option::is_none")]
    pub hover_template: Option<Data<String>>,
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
    #[serde(rename = "zsrc", skip_serializing_if = "Option::is_none")]
    pub z_src: Option<String>,
    #[serde(rename = "textsrc", skip_serializing_if = "Option::is_none")]
    pub text_src: Option<String>,
    #[serde(rename = "hovertextsrc", skip_serializing_if = "Option::is_none")]
    pub hover_text_src: Option<String>,
    #[serde(rename = "hoverinfosrc", skip_serializing_if = "Option::is_none")]
    pub hover_info_src: Option<String>,
    #[serde(rename = "hovertemplatesrc", skip_serializing_if = "Option::is_none")]
    pub hover_template_src: Option<String>,
}

/// How the components of each pixel in `z` are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorModel {
    Rgb,
    Rgba,
    Hsl,
    Hsla,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn image_hoverinfo_orders_color_before_name() {
        let image = Image {
            hover_info: Some(ImageHoverInfo::Text | ImageHoverInfo::Name | ImageHoverInfo::Color),
            color_model: Some(ColorModel::Rgba),
            z_max: Some(InfoArray::from([255.0, 255.0, 255.0, 1.0])),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&image).unwrap(),
            json!({
                "colormodel": "rgba",
                "zmax": [255.0, 255.0, 255.0, 1.0],
                "hoverinfo": "color+name+text"
            })
        );
    }
}
