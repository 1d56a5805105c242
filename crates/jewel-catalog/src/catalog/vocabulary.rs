//! Fixed facet vocabularies.
//!
//! Each facet is a closed enum with a display label and a URL slug derived
//! from it ("Very Good" -> `very-good`). Catalog data and query strings go
//! through `parse`, so a value outside the vocabulary never reaches the
//! filter engine.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Lowercase a label and join its alphanumeric runs with `-`.
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    for c in label.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Generates a closed vocabulary enum with labels, slugs and serde support.
macro_rules! vocabulary {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every value, in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Display label, also used in catalog data.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// URL-safe form of the label.
            pub fn slug(&self) -> String {
                slugify(self.as_str())
            }

            /// Parse a label or slug, ignoring case and punctuation.
            pub fn parse(value: &str) -> Option<Self> {
                let wanted = slugify(value);
                Self::ALL.iter().copied().find(|v| v.slug() == wanted)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Self::parse(&raw).ok_or_else(|| {
                    D::Error::custom(format!(
                        "`{}` is not a known {}",
                        raw,
                        stringify!($name)
                    ))
                })
            }
        }
    };
}

vocabulary! {
    /// Top-level product category. Partitions the catalog before any facet.
    Group {
        White => "white",
        /// Fancy-color stones.
        Color => "color",
        Melee => "melee",
        /// Fancy shapes.
        Fancy => "fancy",
    }
}

vocabulary! {
    /// Diamond shape.
    Shape {
        Round => "Round",
        Oval => "Oval",
        Princess => "Princess",
        Cushion => "Cushion",
        Emerald => "Emerald",
        Pear => "Pear",
        Marquise => "Marquise",
        Radiant => "Radiant",
        Asscher => "Asscher",
        Heart => "Heart",
    }
}

vocabulary! {
    /// Standard white-diamond color scale.
    WhiteColor {
        D => "D",
        E => "E",
        F => "F",
        G => "G",
        H => "H",
        I => "I",
        J => "J",
        K => "K",
    }
}

vocabulary! {
    /// Fancy-color names.
    FancyColor {
        Yellow => "Fancy Yellow",
        Pink => "Fancy Pink",
        Blue => "Fancy Blue",
        Green => "Fancy Green",
        Orange => "Fancy Orange",
        Champagne => "Fancy Champagne",
    }
}

vocabulary! {
    /// Clarity grade.
    Clarity {
        Fl => "FL",
        If => "IF",
        Vvs1 => "VVS1",
        Vvs2 => "VVS2",
        Vs1 => "VS1",
        Vs2 => "VS2",
        Si1 => "SI1",
        Si2 => "SI2",
    }
}

vocabulary! {
    /// Cut grade.
    CutGrade {
        Ideal => "Ideal",
        Excellent => "Excellent",
        VeryGood => "Very Good",
        Good => "Good",
    }
}

vocabulary! {
    /// Polish and symmetry grade.
    FinishGrade {
        Excellent => "Excellent",
        VeryGood => "Very Good",
        Good => "Good",
    }
}

vocabulary! {
    /// Grading laboratory.
    Certification {
        Igi => "IGI",
        Gia => "GIA",
        Gcal => "GCAL",
        Hrd => "HRD",
    }
}

/// Which color vocabulary a group draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorScale {
    White,
    Fancy,
}

impl ColorScale {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScale::White => "white",
            ColorScale::Fancy => "fancy-color",
        }
    }

    /// Every grade on this scale, in display order.
    pub fn options(&self) -> Vec<ColorGrade> {
        match self {
            ColorScale::White => WhiteColor::ALL.iter().copied().map(ColorGrade::White).collect(),
            ColorScale::Fancy => FancyColor::ALL.iter().copied().map(ColorGrade::Fancy).collect(),
        }
    }
}

impl Group {
    /// Color vocabulary used by records in this group.
    pub fn color_scale(&self) -> ColorScale {
        match self {
            Group::Color => ColorScale::Fancy,
            Group::White | Group::Melee | Group::Fancy => ColorScale::White,
        }
    }
}

impl Default for Group {
    fn default() -> Self {
        Group::White
    }
}

/// A color grade from either scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorGrade {
    White(WhiteColor),
    Fancy(FancyColor),
}

impl ColorGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorGrade::White(c) => c.as_str(),
            ColorGrade::Fancy(c) => c.as_str(),
        }
    }

    pub fn slug(&self) -> String {
        slugify(self.as_str())
    }

    /// Parse a grade from either scale.
    pub fn parse(value: &str) -> Option<Self> {
        WhiteColor::parse(value)
            .map(ColorGrade::White)
            .or_else(|| FancyColor::parse(value).map(ColorGrade::Fancy))
    }

    /// Scale this grade belongs to.
    pub fn scale(&self) -> ColorScale {
        match self {
            ColorGrade::White(_) => ColorScale::White,
            ColorGrade::Fancy(_) => ColorScale::Fancy,
        }
    }
}

impl fmt::Display for ColorGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ColorGrade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ColorGrade {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ColorGrade::parse(&raw)
            .ok_or_else(|| D::Error::custom(format!("`{}` is not a known color grade", raw)))
    }
}

/// Read-only view of every facet vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    pub groups: &'static [Group],
    pub shapes: &'static [Shape],
    pub white_colors: &'static [WhiteColor],
    pub fancy_colors: &'static [FancyColor],
    pub clarities: &'static [Clarity],
    pub cuts: &'static [CutGrade],
    pub finishes: &'static [FinishGrade],
    pub certifications: &'static [Certification],
}

impl Vocabulary {
    /// The process-wide vocabularies.
    pub const STANDARD: Vocabulary = Vocabulary {
        groups: Group::ALL,
        shapes: Shape::ALL,
        white_colors: WhiteColor::ALL,
        fancy_colors: FancyColor::ALL,
        clarities: Clarity::ALL,
        cuts: CutGrade::ALL,
        finishes: FinishGrade::ALL,
        certifications: Certification::ALL,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Very Good"), "very-good");
        assert_eq!(slugify("VVS1"), "vvs1");
        assert_eq!(slugify("  Fancy  Yellow "), "fancy-yellow");
    }

    #[test]
    fn test_parse_accepts_label_and_slug() {
        assert_eq!(CutGrade::parse("Very Good"), Some(CutGrade::VeryGood));
        assert_eq!(CutGrade::parse("very-good"), Some(CutGrade::VeryGood));
        assert_eq!(Clarity::parse("vvs2"), Some(Clarity::Vvs2));
        assert_eq!(Shape::parse("ROUND"), Some(Shape::Round));
        assert_eq!(Shape::parse("triangle"), None);
    }

    #[test]
    fn test_color_grade_parses_both_scales() {
        assert_eq!(ColorGrade::parse("D"), Some(ColorGrade::White(WhiteColor::D)));
        assert_eq!(
            ColorGrade::parse("fancy-pink"),
            Some(ColorGrade::Fancy(FancyColor::Pink))
        );
        assert_eq!(ColorGrade::parse("Z"), None);
    }

    #[test]
    fn test_group_color_scale() {
        assert_eq!(Group::Color.color_scale(), ColorScale::Fancy);
        assert_eq!(Group::White.color_scale(), ColorScale::White);
        assert_eq!(Group::Melee.color_scale(), ColorScale::White);
        assert_eq!(Group::Fancy.color_scale(), ColorScale::White);
        assert_eq!(ColorScale::Fancy.options().len(), FancyColor::ALL.len());
    }

    #[test]
    fn test_unknown_label_fails_deserialization() {
        let err = serde_json::from_str::<Certification>("\"XYZ\"").unwrap_err();
        assert!(err.to_string().contains("not a known Certification"));

        let cert: Certification = serde_json::from_str("\"GIA\"").unwrap();
        assert_eq!(cert, Certification::Gia);
    }
}
