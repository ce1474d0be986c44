//! Hover state machine: `Idle` <-> `Focused(node)`.

use log::{debug, warn};

use crate::constants::{BREADCRUMB_SEPARATOR, DIMMED_OPACITY, HIGHLIGHT_STROKE_WIDTH};
use crate::sunburst::{NodeId, Rgba, SunburstLayout};
use crate::utils::format::{format_currency, format_percentage};

use super::{
    ArcStyle, FocusState, InteractionState, PointerEvent, PointerPosition, Stroke, Tooltip,
};

/// Tracks which arc is hovered. Purely presentational: it never touches
/// the layout or the positions.
#[derive(Debug, Clone, Default)]
pub struct SunburstInteraction {
    state: InteractionState,
}

impl SunburstInteraction {
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn focus(&self) -> Option<&FocusState> {
        match &self.state {
            InteractionState::Focused(focus) => Some(focus),
            InteractionState::Idle => None,
        }
    }

    pub fn reset(&mut self) {
        self.state = InteractionState::Idle;
    }

    /// Applies one pointer event against the layout currently drawn.
    pub fn handle(&mut self, event: PointerEvent, layout: &SunburstLayout) -> &InteractionState {
        match event {
            PointerEvent::Enter { node, pointer } => match focus_on(layout, node, pointer) {
                Some(focus) => {
                    debug!("Focused node {:?} ({}%)", node, focus.percentage);
                    self.state = InteractionState::Focused(focus);
                }
                None => warn!("Ignoring pointer-enter on unknown node {:?}", node),
            },
            PointerEvent::Move { pointer } => {
                if let InteractionState::Focused(focus) = &mut self.state {
                    focus.pointer = pointer;
                }
            }
            PointerEvent::Leave => self.state = InteractionState::Idle,
        }
        &self.state
    }

    pub fn is_highlighted(&self, id: NodeId) -> bool {
        self.focus().is_some_and(|f| f.is_highlighted(id))
    }

    /// Opacity and outline for an arc. Everything is fully opaque while
    /// idle; while focused, the hovered path is outlined and the rest dimmed.
    pub fn arc_style(&self, id: NodeId) -> ArcStyle {
        match self.focus() {
            None => ArcStyle {
                fill_opacity: 1.0,
                stroke: None,
            },
            Some(focus) if focus.is_highlighted(id) => ArcStyle {
                fill_opacity: 1.0,
                stroke: Some(Stroke {
                    color: Rgba::WHITE,
                    width: HIGHLIGHT_STROKE_WIDTH,
                }),
            },
            Some(_) => ArcStyle {
                fill_opacity: DIMMED_OPACITY,
                stroke: None,
            },
        }
    }

    pub fn tooltip(&self, layout: &SunburstLayout) -> Option<Tooltip> {
        let focus = self.focus()?;
        let node = layout.node(focus.hovered)?;
        Some(Tooltip {
            name: node.name.clone(),
            breadcrumb: focus.breadcrumb.clone(),
            value: node.value,
            formatted_value: format_currency(node.value),
            percentage: focus.percentage,
            formatted_percentage: format_percentage(focus.percentage),
            pointer: focus.pointer,
        })
    }
}

fn focus_on(layout: &SunburstLayout, id: NodeId, pointer: PointerPosition) -> Option<FocusState> {
    layout.node(id)?;

    let ancestor_chain = layout.ancestors(id);
    let breadcrumb = ancestor_chain
        .iter()
        .filter_map(|a| layout.node(*a))
        .map(|n| n.name.as_str())
        .collect::<Vec<_>>()
        .join(BREADCRUMB_SEPARATOR);

    Some(FocusState {
        hovered: id,
        ancestor_chain,
        breadcrumb,
        pointer,
        percentage: layout.percentage_of_total(id),
    })
}
