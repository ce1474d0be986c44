use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use wealthspectrum_core::{
    interaction::{
        ArcStyle, InteractionState, PointerEvent, PointerPosition, Tooltip, TooltipPlacement,
    },
    positions::{validate_positions, Position},
    sunburst::{LayoutConfig, NodeId, SunburstLayout, SunburstView},
};

/// Upper bound on events replayed by a single focus request.
const MAX_REPLAYED_EVENTS: usize = 1_000;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutRequest {
    positions: Vec<Position>,
    #[serde(default)]
    config: Option<LayoutConfig>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Viewport {
    width: f64,
    height: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FocusRequest {
    positions: Vec<Position>,
    #[serde(default)]
    config: Option<LayoutConfig>,
    #[serde(default)]
    events: Vec<PointerEvent>,
    /// When given, the tooltip is placed so it stays inside this viewport.
    #[serde(default)]
    viewport: Option<Viewport>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FocusSnapshot {
    interaction: InteractionState,
    highlighted: Vec<NodeId>,
    /// One entry per layout node, indexed by node id.
    arc_styles: Vec<ArcStyle>,
    tooltip: Option<Tooltip>,
    tooltip_position: Option<PointerPosition>,
}

fn build_view(
    state: &AppState,
    positions: &[Position],
    config: Option<LayoutConfig>,
) -> ApiResult<SunburstView> {
    validate_positions(positions)?;
    let config = config.unwrap_or_else(|| state.layout_config.clone());
    Ok(SunburstView::new(positions, &config)?)
}

async fn compute_sunburst_layout(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LayoutRequest>,
) -> ApiResult<Json<SunburstLayout>> {
    let view = build_view(&state, &request.positions, request.config)?;
    Ok(Json(view.layout().clone()))
}

async fn replay_focus(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FocusRequest>,
) -> ApiResult<Json<FocusSnapshot>> {
    if request.events.len() > MAX_REPLAYED_EVENTS {
        return Err(ApiError::BadRequest(format!(
            "At most {} pointer events can be replayed, got {}",
            MAX_REPLAYED_EVENTS,
            request.events.len()
        )));
    }

    let mut view = build_view(&state, &request.positions, request.config)?;
    for event in request.events {
        view.handle_pointer(event);
    }

    let interaction = view.interaction();
    let layout = view.layout();
    let tooltip = interaction.tooltip(layout);
    let tooltip_position = match (&tooltip, &request.viewport) {
        (Some(t), Some(viewport)) => Some(TooltipPlacement::place(
            t.pointer,
            viewport.width,
            viewport.height,
        )),
        (Some(t), None) => Some(t.pointer),
        (None, _) => None,
    };

    Ok(Json(FocusSnapshot {
        interaction: interaction.state().clone(),
        highlighted: interaction
            .focus()
            .map(|f| f.highlight_set())
            .unwrap_or_default(),
        arc_styles: layout
            .nodes
            .iter()
            .map(|n| interaction.arc_style(n.id))
            .collect(),
        tooltip,
        tooltip_position,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sunburst/layout", post(compute_sunburst_layout))
        .route("/sunburst/focus", post(replay_focus))
}
