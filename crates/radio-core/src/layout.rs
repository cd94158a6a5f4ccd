//! Pixel geometry for the spectrum surface.
//!
//! Everything here is pure so the frame geometry can be verified host-side
//! without a canvas. The wasm frontend maps these rectangles 1:1 onto
//! `fillRect` calls.

use crate::constants::{BAR_FILL_RATIO, GAP_FILL_RATIO};

/// Backing-store dimensions of the drawing surface, in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

/// Axis-aligned rectangle in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Per-bin horizontal layout: each bin owns `width / bin_count` pixels,
/// split 60% bar / 40% gap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarLayout {
    pub bar_width: f32,
    pub gap_width: f32,
}

impl BarLayout {
    pub fn new(surface_width: u32, bin_count: usize) -> Self {
        let slot = surface_width as f32 / bin_count.max(1) as f32;
        Self {
            bar_width: slot * BAR_FILL_RATIO,
            gap_width: slot * GAP_FILL_RATIO,
        }
    }

    /// Left edge of the bar for bin `index`.
    #[inline]
    pub fn bar_x(&self, index: usize) -> f32 {
        index as f32 * (self.bar_width + self.gap_width)
    }
}

/// Map a magnitude sample to a bar height, bounded by the surface height.
#[inline]
pub fn bar_height(magnitude: u8, surface_height: u32) -> f32 {
    (magnitude as f32).min(surface_height as f32)
}

/// Full rectangle for one bar, anchored to the bottom edge of the surface.
pub fn bar_rect(layout: &BarLayout, index: usize, magnitude: u8, size: SurfaceSize) -> Rect {
    let h = bar_height(magnitude, size.height);
    Rect {
        x: layout.bar_x(index),
        y: size.height as f32 - h,
        w: layout.bar_width,
        h,
    }
}

/// The two bars of the centered paused glyph.
pub fn pause_glyph(size: SurfaceSize) -> [Rect; 2] {
    let cx = size.width as f32 / 2.0;
    let cy = size.height as f32 / 2.0;
    [
        Rect {
            x: cx - 5.0,
            y: cy - 10.0,
            w: 5.0,
            h: 20.0,
        },
        Rect {
            x: cx + 5.0,
            y: cy - 10.0,
            w: 5.0,
            h: 20.0,
        },
    ]
}

/// Placement of the "Live" badge in the top-right corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LiveBadge {
    pub dot: Rect,
    pub text_x: f32,
    pub text_y: f32,
}

pub fn live_badge(size: SurfaceSize) -> LiveBadge {
    let w = size.width as f32;
    LiveBadge {
        dot: Rect {
            x: w - 60.0,
            y: 10.0,
            w: 10.0,
            h: 10.0,
        },
        text_x: w - 50.0,
        text_y: 20.0,
    }
}
