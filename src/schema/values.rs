//! Leaf value types shared by every schema object.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Open-ended attribute value, passed through to the wire untouched.
///
/// `Some(Anything::null())` serializes as an explicit `null`, which is distinct from
/// leaving the field unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Anything(pub Value);

impl Anything {
    pub fn null() -> Self {
        Self(Value::Null)
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }
}

impl From<Value> for Anything {
    fn from(v: Value) -> Self {
        Self(v)
    }
}

impl From<f64> for Anything {
    fn from(v: f64) -> Self {
        Self(Value::from(v))
    }
}

impl From<i64> for Anything {
    fn from(v: i64) -> Self {
        Self(Value::from(v))
    }
}

impl From<bool> for Anything {
    fn from(v: bool) -> Self {
        Self(Value::Bool(v))
    }
}

impl From<&str> for Anything {
    fn from(v: &str) -> Self {
        Self(Value::String(v.to_string()))
    }
}

impl From<String> for Anything {
    fn from(v: String) -> Self {
        Self(Value::String(v))
    }
}

impl<T: Into<Anything>> From<Vec<T>> for Anything {
    fn from(v: Vec<T>) -> Self {
        Self(Value::Array(v.into_iter().map(|x| x.into().0).collect()))
    }
}

/// Serde helper for `Option<Anything>` fields: a present key always yields `Some`,
/// so an explicit JSON `null` survives a round trip.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Attribute that accepts either one value for all points or one value per point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Data<T> {
    Scalar(T),
    Array(Vec<T>),
}

impl<T> Data<T> {
    pub fn scalar(value: impl Into<T>) -> Self {
        Data::Scalar(value.into())
    }

    pub fn array<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<T>,
    {
        Data::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T> From<Vec<T>> for Data<T> {
    fn from(v: Vec<T>) -> Self {
        Data::Array(v)
    }
}

impl From<&str> for Data<String> {
    fn from(v: &str) -> Self {
        Data::Scalar(v.to_string())
    }
}

impl From<String> for Data<String> {
    fn from(v: String) -> Self {
        Data::Scalar(v)
    }
}

impl From<Color> for Data<Color> {
    fn from(v: Color) -> Self {
        Data::Scalar(v)
    }
}

/// Fixed-length array whose items may differ in type (ranges, domains).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InfoArray(pub Vec<Anything>);

impl InfoArray {
    pub fn new<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Anything>,
    {
        Self(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Anything>, const N: usize> From<[T; N]> for InfoArray {
    fn from(items: [T; N]) -> Self {
        Self::new(items)
    }
}

/// A color: any CSS color string, or a number mapped through a color scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Value(f64),
    Css(String),
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Css(format!("rgb({r}, {g}, {b})"))
    }

    /// `alpha` is clamped to `0.0..=1.0`.
    pub fn rgba(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Color::Css(format!("rgba({r}, {g}, {b}, {})", alpha.clamp(0.0, 1.0)))
    }

    /// `0xRRGGBB` to `"#rrggbb"`.
    pub fn hex(rgb: u32) -> Self {
        Color::Css(format!("#{:06x}", rgb & 0x00FF_FFFF))
    }
}

impl From<&str> for Color {
    fn from(v: &str) -> Self {
        Color::Css(v.to_string())
    }
}

impl From<String> for Color {
    fn from(v: String) -> Self {
        Color::Css(v)
    }
}

impl From<f64> for Color {
    fn from(v: f64) -> Self {
        Color::Value(v)
    }
}

/// A named scale (`"Viridis"`) or explicit `[stop, color]` pairs, stops in `0..=1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorScale {
    Named(String),
    Stops(Vec<(f64, Color)>),
}

impl From<&str> for ColorScale {
    fn from(v: &str) -> Self {
        ColorScale::Named(v.to_string())
    }
}

impl From<Vec<(f64, Color)>> for ColorScale {
    fn from(v: Vec<(f64, Color)>) -> Self {
        ColorScale::Stops(v)
    }
}

/// Rotation in degrees, or `"auto"` to let the renderer choose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Angle {
    Auto,
    Degrees(f64),
}

impl Serialize for Angle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Angle::Auto => serializer.serialize_str("auto"),
            Angle::Degrees(d) => serializer.serialize_f64(d),
        }
    }
}

impl<'de> Deserialize<'de> for Angle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AngleVisitor;

        impl Visitor<'_> for AngleVisitor {
            type Value = Angle;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a number of degrees or \"auto\"")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Angle, E> {
                Ok(Angle::Degrees(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Angle, E> {
                Ok(Angle::Degrees(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Angle, E> {
                Ok(Angle::Degrees(v as f64))
            }

            fn visit_str<E: de::Error>(self, s: &str) -> Result<Angle, E> {
                match s {
                    "auto" => Ok(Angle::Auto),
                    other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
                }
            }
        }

        deserializer.deserialize_any(AngleVisitor)
    }
}

/// Trace visibility. On the wire this is `true`, `false` or `"legendonly"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visible {
    True,
    False,
    /// Not drawn, but listed in the legend.
    LegendOnly,
}

impl Serialize for Visible {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Visible::True => serializer.serialize_bool(true),
            Visible::False => serializer.serialize_bool(false),
            Visible::LegendOnly => serializer.serialize_str("legendonly"),
        }
    }
}

impl<'de> Deserialize<'de> for Visible {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VisibleVisitor;

        impl Visitor<'_> for VisibleVisitor {
            type Value = Visible;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "true, false or \"legendonly\"")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Visible, E> {
                Ok(if v { Visible::True } else { Visible::False })
            }

            fn visit_str<E: de::Error>(self, s: &str) -> Result<Visible, E> {
                match s {
                    "legendonly" => Ok(Visible::LegendOnly),
                    other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
                }
            }
        }

        deserializer.deserialize_any(VisibleVisitor)
    }
}

impl From<bool> for Visible {
    fn from(v: bool) -> Self {
        if v { Visible::True } else { Visible::False }
    }
}

/// Reference to a subplot, axis, scene or color axis: `"x"`, `"x2"`, `"scene3"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubplotId(String);

impl SubplotId {
    /// `index` 0 and 1 both name the first subplot, which carries no number.
    pub fn numbered(base: &str, index: u32) -> Self {
        if index <= 1 {
            Self(base.to_string())
        } else {
            Self(format!("{base}{index}"))
        }
    }

    pub fn x(index: u32) -> Self {
        Self::numbered("x", index)
    }

    pub fn y(index: u32) -> Self {
        Self::numbered("y", index)
    }

    pub fn scene(index: u32) -> Self {
        Self::numbered("scene", index)
    }

    pub fn color_axis(index: u32) -> Self {
        Self::numbered("coloraxis", index)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SubplotId {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

impl fmt::Display for SubplotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn visible_uses_booleans_on_the_wire() {
        assert_eq!(serde_json::to_value(Visible::True).unwrap(), json!(true));
        assert_eq!(serde_json::to_value(Visible::False).unwrap(), json!(false));
        assert_eq!(
            serde_json::to_value(Visible::LegendOnly).unwrap(),
            json!("legendonly")
        );
        let v: Visible = serde_json::from_str("\"legendonly\"").unwrap();
        assert_eq!(v, Visible::LegendOnly);
        assert!(serde_json::from_str::<Visible>("\"yes\"").is_err());
    }

    #[test]
    fn angle_accepts_auto_and_numbers() {
        assert_eq!(serde_json::to_value(Angle::Auto).unwrap(), json!("auto"));
        assert_eq!(serde_json::to_value(Angle::Degrees(45.0)).unwrap(), json!(45.0));
        assert_eq!(serde_json::from_str::<Angle>("-90").unwrap(), Angle::Degrees(-90.0));
        assert_eq!(serde_json::from_str::<Angle>("\"auto\"").unwrap(), Angle::Auto);
    }

    #[test]
    fn color_constructors() {
        assert_eq!(Color::rgb(1, 2, 3), Color::Css("rgb(1, 2, 3)".into()));
        assert_eq!(Color::rgba(1, 2, 3, 1.5), Color::Css("rgba(1, 2, 3, 1)".into()));
        assert_eq!(Color::hex(0x1f77b4), Color::Css("#1f77b4".into()));
        assert_eq!(serde_json::to_value(Color::Value(0.5)).unwrap(), json!(0.5));
    }

    #[test]
    fn colorscale_stops_are_pairs() {
        let scale = ColorScale::Stops(vec![(0.0, "white".into()), (1.0, Color::hex(0xff0000))]);
        assert_eq!(
            serde_json::to_value(&scale).unwrap(),
            json!([[0.0, "white"], [1.0, "#ff0000"]])
        );
        let back: ColorScale = serde_json::from_value(json!("Viridis")).unwrap();
        assert_eq!(back, ColorScale::Named("Viridis".into()));
    }

    #[test]
    fn data_is_scalar_or_array() {
        let one: Data<String> = "marker.color".into();
        assert_eq!(serde_json::to_value(&one).unwrap(), json!("marker.color"));
        let many: Data<String> = Data::array(["a", "b"]);
        assert_eq!(serde_json::to_value(&many).unwrap(), json!(["a", "b"]));
        let back: Data<String> = serde_json::from_value(json!(["a", "b"])).unwrap();
        assert_eq!(back, many);
    }

    #[test]
    fn subplot_ids_drop_the_first_index() {
        assert_eq!(SubplotId::x(1).as_str(), "x");
        assert_eq!(SubplotId::y(2).as_str(), "y2");
        assert_eq!(SubplotId::scene(3).to_string(), "scene3");
        assert_eq!(SubplotId::color_axis(0).as_str(), "coloraxis");
    }
}
