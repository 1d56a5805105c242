//! The static, validated catalog.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::catalog::diamond::Diamond;
use crate::catalog::vocabulary::{ColorGrade, Group, Vocabulary};
use crate::error::CatalogError;
use crate::ids::DiamondId;
use crate::price::Price;

/// Catalog data shipped with the site.
const BUILTIN_CATALOG: &str = include_str!("../../data/diamonds.json");

/// Immutable list of diamonds, validated once at load.
///
/// There is no mutation API: the catalog is built at startup and only read
/// afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    diamonds: Vec<Diamond>,
    index: HashMap<DiamondId, usize>,
}

impl Catalog {
    /// Build a catalog from records, enforcing every record invariant.
    ///
    /// Fails on the first duplicate id, non-positive carat, zero price or
    /// color grade from the wrong scale for the record's group.
    pub fn from_records(diamonds: Vec<Diamond>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(diamonds.len());

        for (position, diamond) in diamonds.iter().enumerate() {
            validate(diamond)?;
            if index.insert(diamond.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(diamond.id.clone()));
            }
        }

        debug!(records = diamonds.len(), "catalog validated");
        Ok(Self { diamonds, index })
    }

    /// Parse and validate a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let diamonds: Vec<Diamond> = serde_json::from_str(json)?;
        Self::from_records(diamonds)
    }

    /// Load the catalog shipped with the site.
    pub fn builtin() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(BUILTIN_CATALOG)?;
        info!(records = catalog.len(), "loaded built-in catalog");
        Ok(catalog)
    }

    /// All records in catalog order.
    pub fn all(&self) -> &[Diamond] {
        &self.diamonds
    }

    pub fn len(&self) -> usize {
        self.diamonds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diamonds.is_empty()
    }

    /// Look up a record by id. A miss is a normal outcome, not an error.
    pub fn get(&self, id: &str) -> Option<&Diamond> {
        self.index
            .get(&DiamondId::new(id))
            .map(|&position| &self.diamonds[position])
    }

    /// Records in a group, in catalog order.
    pub fn in_group(&self, group: Group) -> impl Iterator<Item = &Diamond> + '_ {
        self.diamonds.iter().filter(move |d| d.group == group)
    }

    /// Featured records across all groups, in catalog order.
    pub fn featured(&self) -> impl Iterator<Item = &Diamond> + '_ {
        self.diamonds.iter().filter(|d| d.featured)
    }

    /// The fixed facet vocabularies.
    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::STANDARD
    }

    /// Color options offered for a group's color facet.
    pub fn color_options(&self, group: Group) -> Vec<ColorGrade> {
        group.color_scale().options()
    }
}

fn validate(diamond: &Diamond) -> Result<(), CatalogError> {
    if !diamond.carat.is_positive() {
        return Err(CatalogError::InvalidCarat(diamond.id.clone()));
    }

    if diamond.price == Price::Amount(0) {
        return Err(CatalogError::InvalidPrice(diamond.id.clone()));
    }

    let scale = diamond.color.scale();
    if scale != diamond.group.color_scale() {
        return Err(CatalogError::ColorScaleMismatch {
            id: diamond.id.clone(),
            group: diamond.group,
            scale: scale.as_str(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::diamond::Carat;
    use crate::catalog::vocabulary::{
        Certification, Clarity, CutGrade, FancyColor, FinishGrade, Shape, WhiteColor,
    };

    fn diamond(id: &str, group: Group) -> Diamond {
        let color = match group.color_scale() {
            crate::catalog::vocabulary::ColorScale::White => ColorGrade::White(WhiteColor::E),
            crate::catalog::vocabulary::ColorScale::Fancy => ColorGrade::Fancy(FancyColor::Blue),
        };
        Diamond {
            id: DiamondId::new(id),
            name: format!("Test {}", id),
            group,
            shape: Shape::Oval,
            carat: Carat::from_points(120),
            color,
            clarity: Clarity::Vs1,
            cut: CutGrade::Excellent,
            polish: FinishGrade::Excellent,
            symmetry: FinishGrade::Excellent,
            measurements: "8.1 x 6.0 x 3.7 mm".to_string(),
            certification: Certification::Igi,
            price: Price::amount(2500),
            in_stock: true,
            featured: false,
            image: "/images/test.jpg".to_string(),
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        for group in Group::ALL {
            assert!(catalog.in_group(*group).count() > 0, "group {} is empty", group);
        }
        assert!(catalog.featured().count() > 0);
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog =
            Catalog::from_records(vec![diamond("a", Group::White), diamond("b", Group::Color)])
                .unwrap();

        assert_eq!(catalog.get("b").map(|d| d.group), Some(Group::Color));
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = Catalog::from_records(vec![diamond("a", Group::White), diamond("a", Group::Melee)])
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id.as_str() == "a"));
    }

    #[test]
    fn test_zero_carat_rejected() {
        let mut d = diamond("a", Group::White);
        d.carat = Carat::from_points(0);
        assert!(matches!(
            Catalog::from_records(vec![d]),
            Err(CatalogError::InvalidCarat(_))
        ));
    }

    #[test]
    fn test_zero_price_rejected() {
        let mut d = diamond("a", Group::White);
        d.price = Price::amount(0);
        assert!(matches!(
            Catalog::from_records(vec![d]),
            Err(CatalogError::InvalidPrice(_))
        ));
    }

    #[test]
    fn test_color_scale_must_match_group() {
        let mut d = diamond("a", Group::Color);
        d.color = ColorGrade::White(WhiteColor::D);
        let err = Catalog::from_records(vec![d]).unwrap_err();
        assert!(matches!(err, CatalogError::ColorScaleMismatch { group: Group::Color, .. }));
    }

    #[test]
    fn test_out_of_vocabulary_value_fails_load() {
        let json = r#"[{
            "id": "x", "name": "x", "group": "white", "shape": "Triangle",
            "carat": 1.0, "color": "D", "clarity": "IF", "cut": "Ideal",
            "polish": "Excellent", "symmetry": "Excellent", "measurements": "",
            "certification": "IGI", "inStock": true, "image": ""
        }]"#;
        assert!(matches!(Catalog::from_json(json), Err(CatalogError::Parse(_))));
    }

    fn record_with_carat(carat: &str) -> String {
        format!(
            r#"[{{
            "id": "x", "name": "x", "group": "white", "shape": "Round",
            "carat": {}, "color": "D", "clarity": "IF", "cut": "Ideal",
            "polish": "Excellent", "symmetry": "Excellent", "measurements": "",
            "certification": "IGI", "price": 1000, "inStock": true, "image": ""
        }}]"#,
            carat
        )
    }

    #[test]
    fn test_carat_weights_load_exactly() {
        let catalog = Catalog::from_json(&record_with_carat("1.01")).unwrap();
        assert_eq!(catalog.get("x").map(|d| d.carat), Some(Carat::from_points(101)));

        let catalog = Catalog::from_json(&record_with_carat("4.02")).unwrap();
        assert_eq!(catalog.get("x").map(|d| d.carat), Some(Carat::from_points(402)));
    }

    #[test]
    fn test_sub_point_carat_fails_load() {
        for carat in ["1.006", "0.005", "0.004"] {
            let err = Catalog::from_json(&record_with_carat(carat)).unwrap_err();
            assert!(matches!(err, CatalogError::Parse(_)), "{} loaded", carat);
            assert!(err.to_string().contains("finer than a hundredth"), "{}", err);
        }
    }

    #[test]
    fn test_color_options_follow_group() {
        let catalog = Catalog::from_records(Vec::new()).unwrap();
        assert_eq!(catalog.color_options(Group::White).len(), WhiteColor::ALL.len());
        assert_eq!(catalog.color_options(Group::Color).len(), FancyColor::ALL.len());
    }
}
