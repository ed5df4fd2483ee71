//! Figure-wide layout attributes.

use super::common::Font;
use super::values::{Anything, Color, present};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    /// Global font; titles and tick labels inherit from it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Size the plot to its container on first draw.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autosize: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(rename = "paper_bgcolor", skip_serializing_if = "Option::is_none")]
    pub paper_background_color: Option<Color>,
    #[serde(rename = "plot_bgcolor", skip_serializing_if = "Option::is_none")]
    pub plot_background_color: Option<Color>,
    #[serde(rename = "showlegend", skip_serializing_if = "Option::is_none")]
    pub show_legend: Option<bool>,
    #[serde(rename = "hovermode", skip_serializing_if = "Option::is_none")]
    pub hover_mode: Option<HoverMode>,
    #[serde(rename = "barmode", skip_serializing_if = "Option::is_none")]
    pub bar_mode: Option<BarMode>,
    /// Decimal and thousands separators, e.g. `".,"` or `", "`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separators: Option<String>,
    #[serde(
        rename = "uirevision",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub ui_revision: Option<Anything>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub meta: Option<Anything>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Title {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    /// Horizontal position in normalized coordinates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl Title {
    pub fn new(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Default::default()
        }
    }
}

/// Margins in pixels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Margin {
    #[serde(rename = "l", skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(rename = "r", skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    #[serde(rename = "t", skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(rename = "b", skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    /// Padding between the plotting area and the axis lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pad: Option<f64>,
    #[serde(rename = "autoexpand", skip_serializing_if = "Option::is_none")]
    pub auto_expand: Option<bool>,
}

/// Hover interaction mode. `Disabled` is `false` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverMode {
    X,
    Y,
    Closest,
    XUnified,
    YUnified,
    Disabled,
}

impl HoverMode {
    fn token(self) -> Option<&'static str> {
        match self {
            HoverMode::X => Some("x"),
            HoverMode::Y => Some("y"),
            HoverMode::Closest => Some("closest"),
            HoverMode::XUnified => Some("x unified"),
            HoverMode::YUnified => Some("y unified"),
            HoverMode::Disabled => None,
        }
    }
}

impl Serialize for HoverMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.token() {
            Some(token) => serializer.serialize_str(token),
            None => serializer.serialize_bool(false),
        }
    }
}

impl<'de> Deserialize<'de> for HoverMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HoverModeVisitor;

        impl Visitor<'_> for HoverModeVisitor {
            type Value = HoverMode;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a hover mode string or false")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<HoverMode, E> {
                if v {
                    Err(E::invalid_value(de::Unexpected::Bool(v), &self))
                } else {
                    Ok(HoverMode::Disabled)
                }
            }

            fn visit_str<E: de::Error>(self, s: &str) -> Result<HoverMode, E> {
                match s {
                    "x" => Ok(HoverMode::X),
                    "y" => Ok(HoverMode::Y),
                    "closest" => Ok(HoverMode::Closest),
                    "x unified" => Ok(HoverMode::XUnified),
                    "y unified" => Ok(HoverMode::YUnified),
                    other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
                }
            }
        }

        deserializer.deserialize_any(HoverModeVisitor)
    }
}

/// How bars (and histograms) sharing a position are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    Stack,
    Group,
    Overlay,
    Relative,
}
