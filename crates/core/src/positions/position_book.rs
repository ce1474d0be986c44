//! In-memory editing model backing the positions table.

use log::debug;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::constants::{DEFAULT_NEW_POSITION_NAME, DEFAULT_NEW_POSITION_STYLE};
use crate::errors::{Error, Result, ValidationError};

use super::{checked_total, validate_positions, AssetCategory, Position, PositionUpdate};

/// Ordered list of positions with the edit operations the table offers.
///
/// Every mutation leaves a new snapshot in `positions()`; callers rebuild
/// the hierarchy and layout from that snapshot explicitly.
#[derive(Debug, Clone, Default)]
pub struct PositionBook {
    positions: Vec<Position>,
}

impl PositionBook {
    pub fn new(positions: Vec<Position>) -> Result<Self> {
        validate_positions(&positions)?;
        Ok(Self { positions })
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Appends a placeholder row and returns it.
    pub fn add_default(&mut self) -> &Position {
        let position = Position::new(
            Uuid::new_v4().to_string(),
            AssetCategory::AShare.label(),
            DEFAULT_NEW_POSITION_STYLE,
            DEFAULT_NEW_POSITION_NAME,
            Decimal::ZERO,
        );
        debug!("Adding position row {}", position.id);
        self.positions.push(position);
        &self.positions[self.positions.len() - 1]
    }

    /// Applies a partial update. The book is left unchanged if the result
    /// would be invalid.
    pub fn update(&mut self, id: &str, update: PositionUpdate) -> Result<&Position> {
        let index = self
            .positions
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| Error::PositionNotFound(id.to_string()))?;

        let mut candidate = self.positions[index].clone();
        update.apply_to(&mut candidate);
        candidate.validate()?;

        let others = self.total_excluding(index);
        if others.checked_add(candidate.amount).is_none() {
            return Err(Error::Validation(ValidationError::TotalOverflow));
        }

        self.positions[index] = candidate;
        Ok(&self.positions[index])
    }

    pub fn remove(&mut self, id: &str) -> Result<Position> {
        let index = self
            .positions
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| Error::PositionNotFound(id.to_string()))?;
        debug!("Removing position row {}", id);
        Ok(self.positions.remove(index))
    }

    /// Sum of all amounts. Every edit keeps this representable.
    pub fn total(&self) -> Decimal {
        checked_total(&self.positions).unwrap_or(Decimal::MAX)
    }

    fn total_excluding(&self, index: usize) -> Decimal {
        self.positions
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .fold(Decimal::ZERO, |acc, (_, p)| acc.saturating_add(p.amount))
    }
}
