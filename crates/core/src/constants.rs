/// Display name of the synthetic root node (the whole portfolio).
pub const ROOT_NODE_NAME: &str = "总资产";

/// Label of the fallback palette entry for unrecognized categories.
pub const FALLBACK_CATEGORY_LABEL: &str = "其他";

/// Decimal precision for percentages shown to the user
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Default square canvas edge, in pixels.
pub const DEFAULT_CANVAS_SIZE: f64 = 600.0;

/// Default padding angle between sibling arcs, in radians.
pub const DEFAULT_PAD_ANGLE: f64 = 0.005;

/// Pixels trimmed off each ring's outer edge so rings don't touch.
pub const DEFAULT_RING_GAP: f64 = 1.0;

/// Arcs narrower than this (radians) get no label.
pub const DEFAULT_LABEL_MIN_ANGLE: f64 = 0.15;

/// Labels longer than this many characters are truncated.
pub const DEFAULT_LABEL_MAX_CHARS: usize = 15;

/// Marker appended to truncated labels.
pub const LABEL_ELLIPSIS: &str = "...";

/// Fill opacity of a style ring (depth 2) relative to its category color.
pub const STYLE_RING_OPACITY: f64 = 0.8;

/// Fill opacity of an instrument ring (depth 3) relative to its category color.
pub const INSTRUMENT_RING_OPACITY: f64 = 0.6;

/// Luma at or above which labels switch to dark text (0-255 scale).
pub const TEXT_CONTRAST_THRESHOLD: f64 = 128.0;

/// Opacity of arcs outside the highlighted path while an arc is focused.
pub const DIMMED_OPACITY: f64 = 0.3;

/// Outline width of highlighted arcs, in pixels.
pub const HIGHLIGHT_STROKE_WIDTH: f64 = 2.0;

/// Separator used when joining breadcrumb names.
pub const BREADCRUMB_SEPARATOR: &str = " > ";

/// Defaults for a freshly added position row.
pub const DEFAULT_NEW_POSITION_STYLE: &str = "大盘/价值";
pub const DEFAULT_NEW_POSITION_NAME: &str = "新基金";
