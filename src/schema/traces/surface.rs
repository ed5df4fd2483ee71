//! `surface`: a 3D surface over the `z` matrix, drawn in a `scene`.

use crate::flags::FlagSet;
use crate::schema::common::{Calendar, ColorBar, HoverLabel, Stream};
use crate::schema::values::{Anything, Color, ColorScale, Data, SubplotId, Visible, present};
use serde::{Deserialize, Serialize};

crate::flag_set! {
    /// Hover information available on surfaces.
    pub enum SurfaceHoverInfo as "hoverinfo" {
        X = "x",
        Y = "y",
        Z = "z",
        Text = "text",
        Name = "name",
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Surface {
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
    pub hover_info: Option<FlagSet<SurfaceHoverInfo>>,
    #[serde(rename = "hoverlabel", skip_serializing_if = "Option::is_none")]
    pub hover_label: Option<HoverLabel>,
    #[serde(rename = "hovertemplate", skip_serializing_if = "Option::is_none")]
    pub hover_template: Option<Data<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<Stream>,
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
    /// Surface heights, one row per `y` value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<Vec<Vec<f64>>>,
    /// Values used for coloring instead of `z`.
    #[serde(rename = "surfacecolor", skip_serializing_if = "Option::is_none")]
    pub surface_color: Option<Vec<Vec<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Data<String>>,
    #[serde(rename = "hovertext", skip_serializing_if = "Option::is_none")]
    pub hover_text: Option<Data<String>>,
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
    pub contours: Option<Contours>,
    /// Hide the surface itself; useful to show only contour lines.
    #[serde(rename = "hidesurface", skip_serializing_if = "Option::is_none")]
    pub hide_surface: Option<bool>,
    #[serde(rename = "connectgaps", skip_serializing_if = "Option::is_none")]
    pub connect_gaps: Option<bool>,
    #[serde(rename = "lightposition", skip_serializing_if = "Option::is_none")]
    pub light_position: Option<LightPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lighting: Option<Lighting>,
    #[serde(rename = "xcalendar", skip_serializing_if = "Option::is_none")]
    pub x_calendar: Option<Calendar>,
    #[serde(rename = "ycalendar", skip_serializing_if = "Option::is_none")]
    pub y_calendar: Option<Calendar>,
    #[serde(rename = "zcalendar", skip_serializing_if = "Option::is_none")]
    pub z_calendar: Option<Calendar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<SubplotId>,
    #[serde(rename = "idssrc", skip_serializing_if = "Option::is_none")]
    pub ids_src: Option<String>,
    #[serde(rename = "customdatasrc", skip_serializing_if = "Option::is_none")]
    pub custom_data_src: Option<String>,
    #[serde(rename = "metasrc", skip_serializing_if = "Option::is_none")]
    pub meta_src: Option<String>,
    #[serde(rename = "hoverinfosrc", skip_serializing_if = "Option::is_none")]
    pub hover_info_src: Option<String>,
    #[serde(rename = "hovertemplatesrc", skip_serializing_if = "Option::is_none")]
    pub hover_template_src: Option<String>,
    #[serde(rename = "xsrc", skip_serializing_if = "Option::is_none")]
    pub x_src: Option<String>,
    #[serde(rename = "ysrc", skip_serializing_if = "Option::is_none")]
    pub y_src: Option<String>,
    #[serde(rename = "zsrc", skip_serializing_if = "Option::is_none")]
    pub z_src: Option<String>,
    #[serde(rename = "surfacecolorsrc", skip_serializing_if = "Option::is_none")]
    pub surface_color_src: Option<String>,
    #[serde(rename = "textsrc", skip_serializing_if = "Option::is_none")]
    pub text_src: Option<String>,
    #[serde(rename = "hovertextsrc", skip_serializing_if = "Option::is_none")]
    pub hover_text_src: Option<String>,
}

/// Contour lines along each axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contours {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<AxisContours>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<AxisContours>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<AxisContours>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AxisContours {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
    /// Step between contour levels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Projection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Color contour lines through the trace color scale instead of `color`.
    #[serde(rename = "usecolormap", skip_serializing_if = "Option::is_none")]
    pub use_color_map: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Highlight the contour under the cursor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<bool>,
    #[serde(rename = "highlightcolor", skip_serializing_if = "Option::is_none")]
    pub highlight_color: Option<Color>,
    #[serde(rename = "highlightwidth", skip_serializing_if = "Option::is_none")]
    pub highlight_width: Option<f64>,
}

/// Project contour lines onto the walls of the scene.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Projection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LightPosition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Lighting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ambient: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diffuse: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specular: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roughness: Option<f64>,
    /// Reflectance at grazing angles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fresnel: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn surface_hoverinfo_has_its_own_universe() {
        let surface = Surface {
            hover_info: Some(SurfaceHoverInfo::Name | SurfaceHoverInfo::Z),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&surface).unwrap(),
            json!({"hoverinfo": "z+name"})
        );
        assert!(serde_json::from_value::<Surface>(json!({"hoverinfo": "all"})).is_err());
    }

    #[test]
    fn contours_nest_three_levels() {
        let surface = Surface {
            contours: Some(Contours {
                z: Some(AxisContours {
                    show: Some(true),
                    project: Some(Projection {
                        z: Some(true),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&surface).unwrap(),
            json!({"contours": {"z": {"show": true, "project": {"z": true}}}})
        );
    }
}
