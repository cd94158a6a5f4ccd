// Host-side tests for the spectrum frame geometry.

use radio_core::{
    bar_height, bar_rect, live_badge, pause_glyph, BarLayout, SurfaceSize,
};

#[test]
fn bar_layout_64_bins_at_640px() {
    let layout = BarLayout::new(640, 64);
    assert!((layout.bar_width - 6.0).abs() < 1e-6);
    assert!((layout.gap_width - 4.0).abs() < 1e-6);
}

#[test]
fn bars_span_the_full_surface_width() {
    let layout = BarLayout::new(640, 64);
    let span = (layout.bar_width + layout.gap_width) * 64.0;
    assert!((span - 640.0).abs() < 1e-3);

    // last bar's right edge sits one gap short of the right border
    let last_right = layout.bar_x(63) + layout.bar_width;
    assert!((last_right - (640.0 - layout.gap_width)).abs() < 1e-3);
}

#[test]
fn bar_positions_are_evenly_spaced() {
    let layout = BarLayout::new(512, 64);
    let pitch = layout.bar_width + layout.gap_width;
    for i in 1..64 {
        let step = layout.bar_x(i) - layout.bar_x(i - 1);
        assert!((step - pitch).abs() < 1e-4, "bin {i} step {step} != {pitch}");
    }
}

#[test]
fn bar_height_is_monotonic_in_magnitude() {
    let height = 480;
    let mut prev = -1.0f32;
    for m in 0..=255u8 {
        let h = bar_height(m, height);
        assert!(h >= prev, "height regressed at magnitude {m}");
        prev = h;
    }
}

#[test]
fn bar_height_is_bounded_by_surface_height() {
    // a surface shorter than the 0..=255 magnitude range clamps
    for m in 0..=255u8 {
        assert!(bar_height(m, 100) <= 100.0);
    }
    assert_eq!(bar_height(255, 100), 100.0);
}

#[test]
fn bar_rect_is_anchored_to_the_bottom_edge() {
    let size = SurfaceSize {
        width: 640,
        height: 480,
    };
    let layout = BarLayout::new(size.width, 64);
    let r = bar_rect(&layout, 3, 120, size);
    assert!((r.y + r.h - 480.0).abs() < 1e-4);
    assert!((r.h - 120.0).abs() < 1e-6);
    assert!((r.x - layout.bar_x(3)).abs() < 1e-6);
}

#[test]
fn geometry_tracks_a_resize() {
    // same bin count, new surface width: bar geometry must be recomputed
    let before = BarLayout::new(640, 64);
    let after = BarLayout::new(1280, 64);
    assert!((after.bar_width - 2.0 * before.bar_width).abs() < 1e-5);
    assert!((after.gap_width - 2.0 * before.gap_width).abs() < 1e-5);
}

#[test]
fn pause_glyph_is_centered() {
    for (w, h) in [(640u32, 480u32), (333, 217), (1920, 1080)] {
        let size = SurfaceSize {
            width: w,
            height: h,
        };
        let [left, right] = pause_glyph(size);
        // symmetric around the vertical center line
        let cx = w as f32 / 2.0;
        assert!(((cx - left.x) - (right.x + right.w - cx)).abs() < 1e-4);
        // vertically centered
        assert!((left.y + left.h / 2.0 - h as f32 / 2.0).abs() < 1e-4);
        assert_eq!(left.w, right.w);
        assert_eq!(left.h, right.h);
    }
}

#[test]
fn live_badge_hugs_the_top_right_corner() {
    let size = SurfaceSize {
        width: 640,
        height: 480,
    };
    let badge = live_badge(size);
    assert!(badge.dot.x + badge.dot.w < 640.0);
    assert!(badge.dot.y >= 0.0);
    assert!(badge.text_x > badge.dot.x);

    // stays inside the surface after a shrink too
    let small = live_badge(SurfaceSize {
        width: 200,
        height: 100,
    });
    assert!(small.dot.x + small.dot.w < 200.0);
}

#[test]
fn degenerate_bin_count_does_not_divide_by_zero() {
    let layout = BarLayout::new(640, 0);
    assert!(layout.bar_width.is_finite());
    assert!(layout.gap_width.is_finite());
}
