//! Position domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::FALLBACK_CATEGORY_LABEL;
use crate::errors::{Error, Result, ValidationError};
use crate::sunburst::Rgba;

/// A single holding as entered by the user.
///
/// `category` drives the inner ring, `style` the middle ring and `name`
/// the outer ring of the sunburst.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: String,
    pub category: String,
    pub style: String,
    pub name: String,
    pub amount: Decimal,
}

impl Position {
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        style: impl Into<String>,
        name: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            style: style.into(),
            name: name.into(),
            amount,
        }
    }

    /// Validates the position before it reaches the hierarchy builder.
    ///
    /// The layout engine assumes non-negative amounts; this is where that
    /// assumption is enforced.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if self.category.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "category".to_string(),
            )));
        }
        if self.style.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "style".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        if self.amount < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::NegativeAmount {
                id: self.id.clone(),
                amount: self.amount.to_string(),
            }));
        }
        Ok(())
    }
}

/// Partial update of a position; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionUpdate {
    pub category: Option<String>,
    pub style: Option<String>,
    pub name: Option<String>,
    pub amount: Option<Decimal>,
}

impl PositionUpdate {
    pub fn apply_to(self, position: &mut Position) {
        if let Some(category) = self.category {
            position.category = category;
        }
        if let Some(style) = self.style {
            position.style = style;
        }
        if let Some(name) = self.name {
            position.name = name;
        }
        if let Some(amount) = self.amount {
            position.amount = amount;
        }
    }
}

/// Validates a whole list: every position individually, unique ids, and a
/// total that fits in a `Decimal`.
pub fn validate_positions(positions: &[Position]) -> Result<()> {
    let mut seen = std::collections::HashSet::with_capacity(positions.len());
    for position in positions {
        position.validate()?;
        if !seen.insert(position.id.as_str()) {
            return Err(Error::Validation(ValidationError::DuplicateId(
                position.id.clone(),
            )));
        }
    }
    if checked_total(positions).is_none() {
        return Err(Error::Validation(ValidationError::TotalOverflow));
    }
    Ok(())
}

/// Sum of all amounts, or `None` if it overflows.
pub fn checked_total(positions: &[Position]) -> Option<Decimal> {
    positions
        .iter()
        .try_fold(Decimal::ZERO, |acc, p| acc.checked_add(p.amount))
}

/// Known top-level asset classes and their base chart colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetCategory {
    AShare,
    Overseas,
    Bonds,
    Commodities,
    Cash,
    Other,
}

impl AssetCategory {
    /// Categories offered in the editor, in display order. `Other` is only
    /// a palette fallback and is not offered.
    pub const SELECTABLE: [AssetCategory; 5] = [
        AssetCategory::AShare,
        AssetCategory::Overseas,
        AssetCategory::Bonds,
        AssetCategory::Commodities,
        AssetCategory::Cash,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AssetCategory::AShare => "A股市场",
            AssetCategory::Overseas => "海外市场/QDII",
            AssetCategory::Bonds => "债券/固收",
            AssetCategory::Commodities => "商品/黄金",
            AssetCategory::Cash => "现金/货币基金",
            AssetCategory::Other => FALLBACK_CATEGORY_LABEL,
        }
    }

    pub fn color(&self) -> Rgba {
        match self {
            AssetCategory::AShare => Rgba::rgb(0xef, 0x44, 0x44),
            AssetCategory::Overseas => Rgba::rgb(0x3b, 0x82, 0xf6),
            AssetCategory::Bonds => Rgba::rgb(0x10, 0xb9, 0x81),
            AssetCategory::Commodities => Rgba::rgb(0xf5, 0x9e, 0x0b),
            AssetCategory::Cash => Rgba::rgb(0x64, 0x74, 0x8b),
            AssetCategory::Other => Rgba::rgb(0x8b, 0x5c, 0xf6),
        }
    }

    /// Resolves a free-text category label; unknown labels map to `Other`.
    pub fn from_label(label: &str) -> Self {
        Self::SELECTABLE
            .into_iter()
            .find(|c| c.label() == label)
            .unwrap_or(AssetCategory::Other)
    }
}

/// Palette lookup by category label, falling back to the "other" color.
pub fn category_color(label: &str) -> Rgba {
    AssetCategory::from_label(label).color()
}
