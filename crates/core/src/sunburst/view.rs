//! Couples a computed layout with the hover state drawn on top of it.

use log::debug;

use crate::errors::Result;
use crate::hierarchy::build_hierarchy;
use crate::interaction::{InteractionState, PointerEvent, SunburstInteraction};
use crate::positions::Position;

use super::{compute_layout, LayoutConfig, SunburstLayout};

/// The chart as the renderer sees it: current layout plus focus.
///
/// Nothing recomputes implicitly. Callers invoke `recompute` whenever the
/// position list or the canvas size changes, passing both explicitly.
#[derive(Debug, Clone)]
pub struct SunburstView {
    layout: SunburstLayout,
    interaction: SunburstInteraction,
}

impl SunburstView {
    pub fn new(positions: &[Position], config: &LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            layout: compute_layout(&build_hierarchy(positions), config),
            interaction: SunburstInteraction::default(),
        })
    }

    /// Rebuilds hierarchy and layout from scratch and drops any focus,
    /// since node ids of the previous layout no longer apply.
    pub fn recompute(&mut self, positions: &[Position], config: &LayoutConfig) -> Result<()> {
        config.validate()?;
        debug!("Recomputing sunburst for {} positions", positions.len());
        self.layout = compute_layout(&build_hierarchy(positions), config);
        self.interaction.reset();
        Ok(())
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> &InteractionState {
        self.interaction.handle(event, &self.layout)
    }

    pub fn layout(&self) -> &SunburstLayout {
        &self.layout
    }

    pub fn interaction(&self) -> &SunburstInteraction {
        &self.interaction
    }
}
