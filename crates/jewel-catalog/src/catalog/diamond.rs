//! Diamond records and carat weights.

use crate::catalog::vocabulary::{
    Certification, Clarity, ColorGrade, CutGrade, FinishGrade, Group, Shape,
};
use crate::ids::DiamondId;
use crate::price::Price;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Carat weight in hundredths of a carat ("points").
///
/// Fixed-point so range filters compare exactly: a stone listed at 1.01ct
/// is inside `[1.01, 2.00]` without floating-point slop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Carat(u32);

impl Carat {
    /// Lower bound of the carat filter.
    pub const MIN_FILTER: Carat = Carat(0);
    /// Upper bound of the carat filter.
    pub const MAX_FILTER: Carat = Carat(500);

    /// Create a weight from points (1ct = 100 points).
    pub const fn from_points(points: u32) -> Self {
        Carat(points)
    }

    /// Get the weight in points.
    pub fn points(&self) -> u32 {
        self.0
    }

    /// Convert a decimal weight, rounding to the nearest point.
    /// Returns `None` for negative or non-finite values.
    pub fn from_decimal(carats: f64) -> Option<Self> {
        if !carats.is_finite() || carats < 0.0 {
            return None;
        }
        let points = (carats * 100.0).round();
        if points > u32::MAX as f64 {
            return None;
        }
        Some(Carat(points as u32))
    }

    /// Convert a decimal weight that must be a whole number of points.
    /// Returns `None` for weights finer than 0.01ct.
    pub fn from_exact_decimal(carats: f64) -> Option<Self> {
        let points = carats * 100.0;
        if (points - points.round()).abs() > 1e-6 {
            return None;
        }
        Self::from_decimal(carats)
    }

    /// Parse a decimal string such as `"1.5"`, rounding to the nearest point.
    pub fn parse(value: &str) -> Option<Self> {
        value.trim().parse::<f64>().ok().and_then(Self::from_decimal)
    }

    /// Get the weight as a decimal.
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Check if the weight is above zero.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Carat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{}", whole)
        } else if frac % 10 == 0 {
            write!(f, "{}.{}", whole, frac / 10)
        } else {
            write!(f, "{}.{:02}", whole, frac)
        }
    }
}

impl Serialize for Carat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Carat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = f64::deserialize(deserializer)?;
        if !raw.is_finite() || raw < 0.0 {
            return Err(D::Error::custom(format!("invalid carat weight {}", raw)));
        }
        Carat::from_exact_decimal(raw).ok_or_else(|| {
            D::Error::custom(format!(
                "carat weight {} is finer than a hundredth of a carat",
                raw
            ))
        })
    }
}

/// A diamond in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diamond {
    /// Unique identifier, used in links and detail paths.
    pub id: DiamondId,
    /// Display name.
    pub name: String,
    /// Top-level category.
    pub group: Group,
    pub shape: Shape,
    pub carat: Carat,
    pub color: ColorGrade,
    pub clarity: Clarity,
    pub cut: CutGrade,
    pub polish: FinishGrade,
    pub symmetry: FinishGrade,
    /// Free-form dimensions, e.g. "6.45 x 6.47 x 3.98 mm".
    pub measurements: String,
    pub certification: Certification,
    /// Listed price, or on request when absent in the data.
    #[serde(default)]
    pub price: Price,
    pub in_stock: bool,
    /// Promoted in the default sort and the homepage carousel.
    #[serde(default)]
    pub featured: bool,
    /// Image path or URL.
    pub image: String,
}

impl Diamond {
    /// Short description used in inquiry messages:
    /// `"Round, 1.01ct, D, VVS1"`.
    pub fn spec_summary(&self) -> String {
        format!(
            "{}, {}ct, {}, {}",
            self.shape, self.carat, self.color, self.clarity
        )
    }

    /// Detail page path.
    pub fn path(&self) -> String {
        format!("/diamonds/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::vocabulary::WhiteColor;

    #[test]
    fn test_carat_display_trims_zeros() {
        assert_eq!(Carat::from_points(200).to_string(), "2");
        assert_eq!(Carat::from_points(150).to_string(), "1.5");
        assert_eq!(Carat::from_points(101).to_string(), "1.01");
        assert_eq!(Carat::from_points(5).to_string(), "0.05");
    }

    #[test]
    fn test_carat_parse() {
        assert_eq!(Carat::parse("1.5"), Some(Carat::from_points(150)));
        assert_eq!(Carat::parse(" 0.3 "), Some(Carat::from_points(30)));
        assert_eq!(Carat::parse("-1"), None);
        assert_eq!(Carat::parse("abc"), None);
        assert_eq!(Carat::parse("NaN"), None);
    }

    #[test]
    fn test_diamond_deserializes_from_catalog_json() {
        let json = r#"{
            "id": "LJ-W-100",
            "name": "Round Brilliant 1.01ct",
            "group": "white",
            "shape": "Round",
            "carat": 1.01,
            "color": "D",
            "clarity": "VVS1",
            "cut": "Ideal",
            "polish": "Excellent",
            "symmetry": "Very Good",
            "measurements": "6.45 x 6.47 x 3.98 mm",
            "certification": "IGI",
            "price": null,
            "inStock": true,
            "image": "/images/round.jpg"
        }"#;

        let diamond: Diamond = serde_json::from_str(json).unwrap();
        assert_eq!(diamond.carat, Carat::from_points(101));
        assert_eq!(diamond.color, ColorGrade::White(WhiteColor::D));
        assert_eq!(diamond.symmetry, FinishGrade::VeryGood);
        assert!(diamond.price.is_on_request());
        assert!(!diamond.featured);
        assert_eq!(diamond.spec_summary(), "Round, 1.01ct, D, VVS1");
        assert_eq!(diamond.path(), "/diamonds/LJ-W-100");
    }
}
