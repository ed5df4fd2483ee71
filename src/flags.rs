//! Combinable option sets (`flaglist` attributes in the Plotly schema).
//!
//! A flag attribute such as `hoverinfo` accepts any combination of a fixed set of
//! tokens, written on the wire as a single `+`-joined string (`"x+y+name"`).
//!
//! - Each attribute gets its own closed flag enum, declared with [`flag_set!`]; flags
//!   outside that universe cannot be constructed.
//! - [`FlagSet`] stores the selection as a bitset indexed by declaration position.
//! - Encoding walks the universe in declaration order, so the output never depends on
//!   the order flags were inserted in.
//! - The empty set encodes to `""`, which is a real value and not the same thing as
//!   leaving the attribute unset.
//!
//! ```
//! use typed_plotly::schema::HoverInfo;
//!
//! let info = HoverInfo::Name | HoverInfo::X;
//! assert_eq!(info.to_string(), "x+name");
//! ```

use crate::error::FlagParseError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{BitAnd, BitOr, BitOrAssign, Sub};
use std::str::FromStr;

/// A single flag drawn from an attribute's closed universe.
///
/// Implemented by [`flag_set!`]; `ALL` lists the universe in its canonical order and
/// `index` must be the flag's position in `ALL`.
///
/// A [`FlagSet`] holds 32 flags. `flag_set!` rejects larger universes at compile time;
/// a hand-written impl whose `index` is 32 or more yields a flag that is never stored.
pub trait Flag: Copy + Eq + fmt::Debug + 'static {
    /// Attribute name, used in parse errors.
    const NAME: &'static str;
    /// Every flag of the universe, in declaration order.
    const ALL: &'static [Self];

    /// Literal wire token.
    fn token(self) -> &'static str;

    /// Position of the flag in [`Flag::ALL`], below 32.
    fn index(self) -> u32;

    fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|flag| flag.token() == token)
    }
}

/// A set of flags of one attribute, encoded as a `+`-joined string.
pub struct FlagSet<F: Flag> {
    bits: u32,
    marker: PhantomData<F>,
}

impl<F: Flag> FlagSet<F> {
    /// The empty selection; encodes to `""`.
    pub const fn empty() -> Self {
        Self {
            bits: 0,
            marker: PhantomData,
        }
    }

    /// Every flag of the universe.
    pub fn all() -> Self {
        F::ALL.iter().copied().collect()
    }

    /// Zero for an index past the 32-bit range.
    fn bit(flag: F) -> u32 {
        1u32.checked_shl(flag.index()).unwrap_or(0)
    }

    pub fn contains(&self, flag: F) -> bool {
        self.bits & Self::bit(flag) != 0
    }

    /// Adds `flag`; returns `true` if it was not present before.
    pub fn insert(&mut self, flag: F) -> bool {
        let bit = Self::bit(flag);
        let added = bit != 0 && self.bits & bit == 0;
        self.bits |= bit;
        added
    }

    /// Removes `flag`; returns `true` if it was present.
    pub fn remove(&mut self, flag: F) -> bool {
        let removed = self.contains(flag);
        self.bits &= !Self::bit(flag);
        removed
    }

    /// Builder-style [`FlagSet::insert`].
    pub fn with(mut self, flag: F) -> Self {
        self.insert(flag);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Present flags in universe order.
    pub fn iter(&self) -> impl Iterator<Item = F> {
        let bits = self.bits;
        F::ALL
            .iter()
            .copied()
            .filter(move |flag| bits & Self::bit(*flag) != 0)
    }

    pub fn union(self, other: Self) -> Self {
        Self::from_bits(self.bits | other.bits)
    }

    pub fn intersection(self, other: Self) -> Self {
        Self::from_bits(self.bits & other.bits)
    }

    pub fn difference(self, other: Self) -> Self {
        Self::from_bits(self.bits & !other.bits)
    }

    fn from_bits(bits: u32) -> Self {
        Self {
            bits,
            marker: PhantomData,
        }
    }

    /// Wire form: present tokens in universe order joined by `+`.
    pub fn encode(&self) -> String {
        self.iter().map(F::token).collect::<Vec<_>>().join("+")
    }

    /// Inverse of [`FlagSet::encode`]. `""` is the empty set; repeated tokens collapse.
    pub fn parse(s: &str) -> Result<Self, FlagParseError> {
        if s.is_empty() {
            return Ok(Self::empty());
        }
        s.split('+')
            .map(|token| {
                F::from_token(token).ok_or_else(|| FlagParseError {
                    attribute: F::NAME,
                    token: token.to_string(),
                })
            })
            .collect()
    }
}

impl<F: Flag> Clone for FlagSet<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Flag> Copy for FlagSet<F> {}

impl<F: Flag> PartialEq for FlagSet<F> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<F: Flag> Eq for FlagSet<F> {}

impl<F: Flag> Hash for FlagSet<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<F: Flag> Default for FlagSet<F> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<F: Flag> fmt::Debug for FlagSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<F: Flag> fmt::Display for FlagSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl<F: Flag> FromStr for FlagSet<F> {
    type Err = FlagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<F: Flag> From<F> for FlagSet<F> {
    fn from(flag: F) -> Self {
        Self::from_bits(Self::bit(flag))
    }
}

impl<F: Flag> FromIterator<F> for FlagSet<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

impl<F: Flag> Extend<F> for FlagSet<F> {
    fn extend<I: IntoIterator<Item = F>>(&mut self, iter: I) {
        for flag in iter {
            self.insert(flag);
        }
    }
}

impl<F: Flag> BitOr for FlagSet<F> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl<F: Flag> BitOr<F> for FlagSet<F> {
    type Output = Self;

    fn bitor(self, rhs: F) -> Self {
        self.with(rhs)
    }
}

impl<F: Flag> BitOrAssign for FlagSet<F> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl<F: Flag> BitOrAssign<F> for FlagSet<F> {
    fn bitor_assign(&mut self, rhs: F) {
        self.insert(rhs);
    }
}

impl<F: Flag> BitAnd for FlagSet<F> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl<F: Flag> Sub for FlagSet<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.difference(rhs)
    }
}

impl<F: Flag> Serialize for FlagSet<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, F: Flag> Deserialize<'de> for FlagSet<F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Declare a flag universe: a closed enum whose variants map to wire tokens, in the
/// order they must appear in the encoded string.
///
/// ```
/// typed_plotly::flag_set! {
///     /// Which parts of a label are shown.
///     pub enum LabelPart as "textinfo" {
///         Label = "label",
///         Value = "value",
///     }
/// }
///
/// let parts = LabelPart::Value | LabelPart::Label;
/// assert_eq!(parts.encode(), "label+value");
/// ```
#[macro_export]
macro_rules! flag_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $attribute:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::flags::Flag for $name {
            const NAME: &'static str = $attribute;
            const ALL: &'static [Self] = &[$( $name::$variant ),+];

            fn token(self) -> &'static str {
                match self {
                    $( $name::$variant => $token ),+
                }
            }

            fn index(self) -> u32 {
                self as u32
            }
        }

        const _: () = assert!(
            <$name as $crate::flags::Flag>::ALL.len() <= 32,
            "flag universes are stored in a u32"
        );

        impl ::std::ops::BitOr for $name {
            type Output = $crate::flags::FlagSet<$name>;

            fn bitor(self, rhs: Self) -> Self::Output {
                $crate::flags::FlagSet::from(self) | rhs
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::flag_set! {
        enum Part as "part" {
            X = "x",
            Y = "y",
            Z = "z",
            Text = "text",
            Name = "name",
        }
    }

    #[test]
    fn encodes_in_universe_order() {
        let set = Part::Name | Part::X;
        assert_eq!(set.encode(), "x+name");

        let mut built = FlagSet::empty();
        built.insert(Part::Text);
        built.insert(Part::Y);
        built.insert(Part::X);
        assert_eq!(built.to_string(), "x+y+text");
    }

    #[test]
    fn empty_set_is_empty_string() {
        assert_eq!(FlagSet::<Part>::empty().encode(), "");
        assert_eq!(FlagSet::<Part>::parse("").unwrap(), FlagSet::empty());
    }

    #[test]
    fn every_subset_round_trips() {
        for bits in 0u32..(1 << Part::ALL.len()) {
            let set: FlagSet<Part> = Part::ALL
                .iter()
                .copied()
                .filter(|p| bits & (1 << p.index()) != 0)
                .collect();
            let expected: Vec<&str> = Part::ALL
                .iter()
                .filter(|p| set.contains(**p))
                .map(|p| p.token())
                .collect();
            assert_eq!(set.encode(), expected.join("+"));
            assert_eq!(FlagSet::<Part>::parse(&set.encode()).unwrap(), set);
        }
    }

    #[test]
    fn parse_rejects_unknown_tokens() {
        let err = FlagSet::<Part>::parse("x+color").unwrap_err();
        assert_eq!(err.attribute, "part");
        assert_eq!(err.token, "color");
        assert_eq!(err.to_string(), "unknown part flag `color`");
    }

    #[test]
    fn duplicate_tokens_collapse() {
        let set = FlagSet::<Part>::parse("name+x+name").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.encode(), "x+name");
    }

    #[test]
    fn set_operations() {
        let a = Part::X | Part::Y | Part::Z;
        let b = Part::Y | Part::Name;
        assert_eq!((a | b).encode(), "x+y+z+name");
        assert_eq!((a & b).encode(), "y");
        assert_eq!((a - b).encode(), "x+z");

        let mut c = a;
        assert!(c.remove(Part::X));
        assert!(!c.remove(Part::X));
        c |= Part::Text;
        assert_eq!(c.encode(), "y+z+text");
        assert_eq!(FlagSet::<Part>::all().len(), 5);
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Wide {
        Low,
        High,
    }

    impl Flag for Wide {
        const NAME: &'static str = "wide";
        const ALL: &'static [Self] = &[Wide::Low, Wide::High];

        fn token(self) -> &'static str {
            match self {
                Wide::Low => "low",
                Wide::High => "high",
            }
        }

        fn index(self) -> u32 {
            match self {
                Wide::Low => 0,
                Wide::High => 40,
            }
        }
    }

    #[test]
    fn index_past_32_bits_is_never_stored() {
        let mut set = FlagSet::<Wide>::empty();
        assert!(!set.insert(Wide::High));
        assert!(set.insert(Wide::Low));
        assert!(!set.contains(Wide::High));
        assert_eq!(set.encode(), "low");
        assert_eq!(FlagSet::<Wide>::all().encode(), "low");
    }
}
