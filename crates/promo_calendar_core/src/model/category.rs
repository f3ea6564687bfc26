//! Promo categories and their display metadata.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Closed set of promo categories.
///
/// Used for filtering and styling only; the layout engine never inspects
/// display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Free bet offers.
    ApuestaGratis,
    /// Free spins offers.
    GirosGratis,
    /// Boosted odds offers.
    Supercuotas,
}

/// Display metadata attached to one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

impl Category {
    /// All categories in filter-bar order.
    pub const ALL: [Category; 3] = [
        Category::ApuestaGratis,
        Category::GirosGratis,
        Category::Supercuotas,
    ];

    /// Returns the stable wire key (`apuesta_gratis|giros_gratis|supercuotas`).
    pub fn key(self) -> &'static str {
        match self {
            Self::ApuestaGratis => "apuesta_gratis",
            Self::GirosGratis => "giros_gratis",
            Self::Supercuotas => "supercuotas",
        }
    }

    /// Returns the display metadata for this category.
    pub fn style(self) -> CategoryStyle {
        match self {
            Self::ApuestaGratis => CategoryStyle {
                label: "Apuesta Gratis",
                icon: "fas fa-gift",
                color: "primary",
            },
            Self::GirosGratis => CategoryStyle {
                label: "Giros Gratis",
                icon: "fas fa-dice",
                color: "gray",
            },
            Self::Supercuotas => CategoryStyle {
                label: "Supercuotas",
                icon: "fas fa-chart-line",
                color: "accent-orange",
            },
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Category key outside the known enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl Display for UnknownCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown category `{}`; expected apuesta_gratis|giros_gratis|supercuotas",
            self.0
        )
    }
}

impl Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.key() == normalized)
            .ok_or_else(|| UnknownCategory(normalized.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::Category;

    #[test]
    fn keys_parse_back_to_the_same_category() {
        for category in Category::ALL {
            assert_eq!(category.key().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn unknown_key_is_rejected_with_the_offending_value() {
        let err = "casino_bonus".parse::<Category>().unwrap_err();
        assert!(err.to_string().contains("casino_bonus"));
    }

    #[test]
    fn serde_uses_snake_case_keys() {
        let json = serde_json::to_value(Category::GirosGratis).unwrap();
        assert_eq!(json, "giros_gratis");
    }
}
