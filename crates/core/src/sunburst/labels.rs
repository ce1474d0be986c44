//! Label fitting and placement for sunburst arcs.

use serde::{Deserialize, Serialize};

use crate::constants::LABEL_ELLIPSIS;

const CATEGORY_FONT_SIZE: f64 = 12.0;
const DEFAULT_FONT_SIZE: f64 = 10.0;

/// Where and how to draw an arc's label.
///
/// The label is drawn at the origin after rotating by `rotation` degrees,
/// translating `radial_offset` pixels along the x axis and, when `flipped`,
/// rotating another 180° so text on the left half reads upright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelLayout {
    pub text: String,
    pub rotation: f64,
    pub radial_offset: f64,
    pub flipped: bool,
    pub font_size: f64,
    pub bold: bool,
}

impl LabelLayout {
    /// SVG `transform` attribute equivalent of this placement.
    pub fn svg_transform(&self) -> String {
        format!(
            "rotate({}) translate({},0) rotate({})",
            self.rotation,
            self.radial_offset,
            if self.flipped { 180 } else { 0 }
        )
    }
}

/// Cuts `text` to at most `max_chars` characters, appending an ellipsis
/// marker when anything was cut.
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars).collect();
    format!("{}{}", kept, LABEL_ELLIPSIS)
}

/// Computes the label for an arc, or `None` when the arc is too thin.
///
/// Angles are the unpadded extent in radians; `band_mid` is the middle of
/// the ring in pixels.
pub(crate) fn fit_label(
    name: &str,
    depth: usize,
    angle_start: f64,
    angle_end: f64,
    band_mid: f64,
    min_angle: f64,
    max_chars: usize,
) -> Option<LabelLayout> {
    if angle_end - angle_start <= min_angle {
        return None;
    }

    let mid_degrees = ((angle_start + angle_end) / 2.0).to_degrees();
    Some(LabelLayout {
        text: truncate_label(name, max_chars),
        rotation: mid_degrees - 90.0,
        radial_offset: band_mid,
        flipped: mid_degrees >= 180.0,
        font_size: if depth == 1 {
            CATEGORY_FONT_SIZE
        } else {
            DEFAULT_FONT_SIZE
        },
        bold: depth == 1,
    })
}
