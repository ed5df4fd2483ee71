//! Sub-objects that recur across trace types: fonts, hover labels, streams, domains
//! and color bars. Each is defined once here and embedded by every trace that
//! carries it.

use super::values::{Angle, Anything, Color, InfoArray, present};
use serde::{Deserialize, Serialize};

crate::flag_set! {
    /// Trace information shown on hover. With `None` or `Skip` nothing is displayed,
    /// but `None` still fires hover and click events.
    pub enum HoverInfo as "hoverinfo" {
        X = "x",
        Y = "y",
        Z = "z",
        Text = "text",
        Name = "name",
        All = "all",
        None = "none",
        Skip = "skip",
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Font {
    /// HTML font family; several families may be given, comma separated, in order
    /// of preference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// Font of hover labels; every property can also reference a data column.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HoverFont {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(rename = "familysrc", skip_serializing_if = "Option::is_none")]
    pub family_src: Option<String>,
    #[serde(rename = "sizesrc", skip_serializing_if = "Option::is_none")]
    pub size_src: Option<String>,
    #[serde(rename = "colorsrc", skip_serializing_if = "Option::is_none")]
    pub color_src: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverAlign {
    Left,
    Right,
    Auto,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HoverLabel {
    #[serde(rename = "bgcolor", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(rename = "bordercolor", skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<HoverFont>,
    /// Only has an effect when the label spans two or more lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<HoverAlign>,
    /// Characters of the trace name to show; `-1` shows the whole name.
    #[serde(rename = "namelength", skip_serializing_if = "Option::is_none")]
    pub name_length: Option<i32>,
    #[serde(rename = "bgcolorsrc", skip_serializing_if = "Option::is_none")]
    pub background_color_src: Option<String>,
    #[serde(rename = "bordercolorsrc", skip_serializing_if = "Option::is_none")]
    pub border_color_src: Option<String>,
    #[serde(rename = "alignsrc", skip_serializing_if = "Option::is_none")]
    pub align_src: Option<String>,
    #[serde(rename = "namelengthsrc", skip_serializing_if = "Option::is_none")]
    pub name_length_src: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stream {
    /// Links this trace to a stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Points kept on the plot from an incoming stream; only the newest are shown.
    #[serde(rename = "maxpoints", skip_serializing_if = "Option::is_none")]
    pub max_points: Option<f64>,
}

/// Placement of a trace in the figure, as fractions of the plotting area or as a
/// grid cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Domain {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<InfoArray>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<InfoArray>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

/// Calendar used to interpret date data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Calendar {
    Gregorian,
    Chinese,
    Coptic,
    Discworld,
    Ethiopian,
    Hebrew,
    Islamic,
    Julian,
    Mayan,
    Nanakshahi,
    Nepali,
    Persian,
    Jalali,
    Taiwan,
    Thai,
    Ummalqura,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThicknessMode {
    Fraction,
    Pixels,
}

/// Units of the color bar length: fraction of the plot height or pixels.
pub type LengthMode = ThicknessMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XAnchor {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YAnchor {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickMode {
    Auto,
    Linear,
    Array,
}

/// Where tick marks are drawn. `None` is the empty string on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ticks {
    Outside,
    Inside,
    #[serde(rename = "")]
    None,
}

/// Which tick labels carry a prefix, suffix or exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowTicks {
    All,
    First,
    Last,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExponentFormat {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "e")]
    LowerE,
    #[serde(rename = "E")]
    UpperE,
    #[serde(rename = "power")]
    Power,
    #[serde(rename = "SI")]
    SI,
    #[serde(rename = "B")]
    B,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleSide {
    Right,
    Top,
    Bottom,
}

/// Tick label format that applies only within a zoom range.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TickFormatStop {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// `[min, max]` dtick values this format applies to; `null` leaves a side open.
    #[serde(rename = "dtickrange", skip_serializing_if = "Option::is_none")]
    pub dtick_range: Option<InfoArray>,
    /// Format string, same syntax as `tickformat`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "templateitemname", skip_serializing_if = "Option::is_none")]
    pub template_item_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorBarTitle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<TitleSide>,
}

/// Color bar drawn next to a color-mapped trace.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorBar {
    #[serde(rename = "thicknessmode", skip_serializing_if = "Option::is_none")]
    pub thickness_mode: Option<ThicknessMode>,
    /// Thickness excluding padding, in `thickness_mode` units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    #[serde(rename = "lenmode", skip_serializing_if = "Option::is_none")]
    pub length_mode: Option<LengthMode>,
    /// Length excluding padding, in `length_mode` units.
    #[serde(rename = "len", skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(rename = "xanchor", skip_serializing_if = "Option::is_none")]
    pub x_anchor: Option<XAnchor>,
    #[serde(rename = "xpad", skip_serializing_if = "Option::is_none")]
    pub x_pad: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(rename = "yanchor", skip_serializing_if = "Option::is_none")]
    pub y_anchor: Option<YAnchor>,
    #[serde(rename = "ypad", skip_serializing_if = "Option::is_none")]
    pub y_pad: Option<f64>,
    #[serde(rename = "outlinecolor", skip_serializing_if = "Option::is_none")]
    pub outline_color: Option<Color>,
    #[serde(rename = "outlinewidth", skip_serializing_if = "Option::is_none")]
    pub outline_width: Option<f64>,
    #[serde(rename = "bordercolor", skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(rename = "borderwidth", skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(rename = "bgcolor", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(rename = "tickmode", skip_serializing_if = "Option::is_none")]
    pub tick_mode: Option<TickMode>,
    /// Maximum number of ticks; only used with `TickMode::Auto`.
    #[serde(rename = "nticks", skip_serializing_if = "Option::is_none")]
    pub n_ticks: Option<u32>,
    /// First tick position. A number, or a date string on date axes.
    #[serde(
        rename = "tick0",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub tick0: Option<Anything>,
    /// Step between ticks. A number, or `"M<n>"` for months on date axes.
    #[serde(
        rename = "dtick",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub dtick: Option<Anything>,
    #[serde(rename = "tickvals", skip_serializing_if = "Option::is_none")]
    pub tick_values: Option<Vec<f64>>,
    #[serde(rename = "ticktext", skip_serializing_if = "Option::is_none")]
    pub tick_text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<Ticks>,
    #[serde(rename = "ticklen", skip_serializing_if = "Option::is_none")]
    pub tick_length: Option<f64>,
    #[serde(rename = "tickwidth", skip_serializing_if = "Option::is_none")]
    pub tick_width: Option<f64>,
    #[serde(rename = "tickcolor", skip_serializing_if = "Option::is_none")]
    pub tick_color: Option<Color>,
    #[serde(rename = "showticklabels", skip_serializing_if = "Option::is_none")]
    pub show_tick_labels: Option<bool>,
    #[serde(rename = "tickfont", skip_serializing_if = "Option::is_none")]
    pub tick_font: Option<Font>,
    #[serde(rename = "tickangle", skip_serializing_if = "Option::is_none")]
    pub tick_angle: Option<Angle>,
    /// d3-format string for tick labels.
    #[serde(rename = "tickformat", skip_serializing_if = "Option::is_none")]
    pub tick_format: Option<String>,
    #[serde(rename = "tickformatstops", skip_serializing_if = "Option::is_none")]
    pub tick_format_stops: Option<Vec<TickFormatStop>>,
    #[serde(rename = "tickprefix", skip_serializing_if = "Option::is_none")]
    pub tick_prefix: Option<String>,
    #[serde(rename = "showtickprefix", skip_serializing_if = "Option::is_none")]
    pub show_tick_prefix: Option<ShowTicks>,
    #[serde(rename = "ticksuffix", skip_serializing_if = "Option::is_none")]
    pub tick_suffix: Option<String>,
    #[serde(rename = "showticksuffix", skip_serializing_if = "Option::is_none")]
    pub show_tick_suffix: Option<ShowTicks>,
    #[serde(rename = "separatethousands", skip_serializing_if = "Option::is_none")]
    pub separate_thousands: Option<bool>,
    #[serde(rename = "exponentformat", skip_serializing_if = "Option::is_none")]
    pub exponent_format: Option<ExponentFormat>,
    #[serde(rename = "showexponent", skip_serializing_if = "Option::is_none")]
    pub show_exponent: Option<ShowTicks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<ColorBarTitle>,
    #[serde(rename = "tickvalssrc", skip_serializing_if = "Option::is_none")]
    pub tick_values_src: Option<String>,
    #[serde(rename = "ticktextsrc", skip_serializing_if = "Option::is_none")]
    pub tick_text_src: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_ticks_is_empty_string() {
        assert_eq!(serde_json::to_value(Ticks::None).unwrap(), json!(""));
        assert_eq!(serde_json::from_value::<Ticks>(json!("")).unwrap(), Ticks::None);
    }

    #[test]
    fn exponent_format_tokens_are_case_sensitive() {
        assert_eq!(serde_json::to_value(ExponentFormat::LowerE).unwrap(), json!("e"));
        assert_eq!(serde_json::to_value(ExponentFormat::UpperE).unwrap(), json!("E"));
        assert_eq!(serde_json::to_value(ExponentFormat::SI).unwrap(), json!("SI"));
    }

    #[test]
    fn color_bar_uses_wire_names() {
        let bar = ColorBar {
            thickness_mode: Some(ThicknessMode::Pixels),
            length: Some(0.5),
            tick_angle: Some(Angle::Auto),
            tick_format_stops: Some(vec![TickFormatStop {
                dtick_range: Some(InfoArray::new([Anything::null(), Anything::from(1000.0)])),
                value: Some(".2f".into()),
                ..Default::default()
            }]),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&bar).unwrap(),
            json!({
                "thicknessmode": "pixels",
                "len": 0.5,
                "tickangle": "auto",
                "tickformatstops": [{"dtickrange": [null, 1000.0], "value": ".2f"}]
            })
        );
    }

    #[test]
    fn explicit_null_survives_a_round_trip() {
        let bar: ColorBar = serde_json::from_value(json!({"dtick": null})).unwrap();
        assert_eq!(bar.dtick, Some(Anything::null()));
        assert_eq!(bar.tick0, None);
        assert_eq!(serde_json::to_value(&bar).unwrap(), json!({"dtick": null}));
    }
}
