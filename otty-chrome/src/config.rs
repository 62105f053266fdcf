use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTER_MARGIN_SIZE: i32 = 20;
pub const DEFAULT_CORNER_RADIUS: i32 = 10;
pub const DEFAULT_MINIMUM_WIDTH: f64 = 400.0;
pub const DEFAULT_MINIMUM_HEIGHT: f64 = 400.0;
pub const DEFAULT_RESIZE_BORDER_WIDTH: i32 = 6;
pub const DEFAULT_TITLE_BAR_HEIGHT: i32 = 42;

/// Base values the chrome geometry is derived from.
///
/// Values are taken as-is; nothing is clamped or validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// Drop-shadow margin around the chrome body.
    pub outer_margin_size: i32,
    /// Rounding of the chrome corners.
    pub corner_radius: i32,
    pub minimum_width: f64,
    pub minimum_height: f64,
    /// Width of the invisible resize band.
    pub resize_border_width: i32,
    /// Height of the custom caption area.
    pub title_bar_height: i32,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            outer_margin_size: DEFAULT_OUTER_MARGIN_SIZE,
            corner_radius: DEFAULT_CORNER_RADIUS,
            minimum_width: DEFAULT_MINIMUM_WIDTH,
            minimum_height: DEFAULT_MINIMUM_HEIGHT,
            resize_border_width: DEFAULT_RESIZE_BORDER_WIDTH,
            title_bar_height: DEFAULT_TITLE_BAR_HEIGHT,
        }
    }
}

impl ChromeConfig {
    pub fn with_outer_margin_size(mut self, value: i32) -> Self {
        self.outer_margin_size = value;
        self
    }

    pub fn with_corner_radius(mut self, value: i32) -> Self {
        self.corner_radius = value;
        self
    }

    pub fn with_minimum_size(mut self, width: f64, height: f64) -> Self {
        self.minimum_width = width;
        self.minimum_height = height;
        self
    }

    pub fn with_resize_border_width(mut self, value: i32) -> Self {
        self.resize_border_width = value;
        self
    }

    pub fn with_title_bar_height(mut self, value: i32) -> Self {
        self.title_bar_height = value;
        self
    }
}
