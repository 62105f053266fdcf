//! Native resize support for frameless windows.

use crate::geometry::{Point, Size};

/// One-shot patch applied to the host window when the chrome is built.
///
/// Platforms that lose native resize or maximize behavior once their
/// decorations are removed install their fix here. The chrome core calls
/// [`ResizeFixup::apply`] exactly once and never looks at it again.
pub trait ResizeFixup<H: ?Sized> {
    fn apply(&self, window: &H);
}

impl<H: ?Sized, F> ResizeFixup<H> for F
where
    F: Fn(&H),
{
    fn apply(&self, window: &H) {
        self(window)
    }
}

/// Fix-up for platforms that need none.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResizeFixup;

impl<H: ?Sized> ResizeFixup<H> for NoResizeFixup {
    fn apply(&self, _window: &H) {}
}

/// Edge or corner a resize gesture starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeDirection {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

/// What a pointer press at some window position should start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitRegion {
    /// Regular content; the press belongs to the widgets underneath.
    Client,
    /// Caption area; the press starts a window drag.
    Caption,
    /// Resize band; the press starts a native resize.
    Resize(ResizeDirection),
}

/// Bands used by [`hit_test`], measured from the window edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBands {
    /// Width of the resize band on every edge. Zero disables resizing.
    pub resize: f64,
    /// Distance from the top edge to the bottom of the caption.
    pub caption_bottom: f64,
}

/// Classify a window-relative pointer position.
///
/// Corner grips reach twice the band width along each edge so diagonal
/// resizing stays easy to hit. Positions outside the window are `Client`.
pub fn hit_test(pointer: Point, window: Size, bands: HitBands) -> HitRegion {
    let Point { x, y } = pointer;
    if x < 0.0 || y < 0.0 || x >= window.width || y >= window.height {
        return HitRegion::Client;
    }

    let band = bands.resize.max(0.0);
    if band > 0.0 {
        let corner = band * 2.0;
        let top = y < band;
        let bottom = y >= window.height - band;
        let left = x < band;
        let right = x >= window.width - band;
        let near_left = x < corner;
        let near_right = x >= window.width - corner;
        let near_top = y < corner;
        let near_bottom = y >= window.height - corner;

        let direction = if (top && near_left) || (left && near_top) {
            Some(ResizeDirection::NorthWest)
        } else if (top && near_right) || (right && near_top) {
            Some(ResizeDirection::NorthEast)
        } else if (bottom && near_left) || (left && near_bottom) {
            Some(ResizeDirection::SouthWest)
        } else if (bottom && near_right) || (right && near_bottom) {
            Some(ResizeDirection::SouthEast)
        } else if top {
            Some(ResizeDirection::North)
        } else if bottom {
            Some(ResizeDirection::South)
        } else if left {
            Some(ResizeDirection::West)
        } else if right {
            Some(ResizeDirection::East)
        } else {
            None
        };

        if let Some(direction) = direction {
            return HitRegion::Resize(direction);
        }
    }

    if y < bands.caption_bottom {
        HitRegion::Caption
    } else {
        HitRegion::Client
    }
}
