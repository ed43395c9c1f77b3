// Host-side tests for the runaway-button geometry.

use glam::Vec2;
use valentine_core::*;

fn button() -> Rect {
    // center at (140, 120)
    Rect {
        left: 100.0,
        top: 100.0,
        width: 80.0,
        height: 40.0,
    }
}

#[test]
fn pointer_at_or_beyond_trigger_distance_does_not_qualify() {
    let b = button();
    let center = b.center();
    assert!(!within_trigger(
        center + Vec2::new(REPEL_TRIGGER_DIST, 0.0),
        b
    ));
    assert!(!within_trigger(
        center + Vec2::new(0.0, REPEL_TRIGGER_DIST + 30.0),
        b
    ));
    assert!(within_trigger(
        center + Vec2::new(REPEL_TRIGGER_DIST - 1.0, 0.0),
        b
    ));
}

#[test]
fn repel_steps_directly_away_from_pointer() {
    let b = button();
    // pointer straight left of the center pushes the button right
    let pointer = Vec2::new(100.0, 120.0);
    let pos = repel_from(pointer, b, 1000.0, 1000.0);
    assert!((pos.x - (b.left + REPEL_STEP)).abs() < 1e-3);
    assert!((pos.y - b.top).abs() < 1e-3);
}

#[test]
fn repel_result_stays_inside_zone_bounds() {
    let zone_w = 300.0;
    let zone_h = 200.0;
    let b = Rect {
        left: 210.0,
        top: 150.0,
        width: 80.0,
        height: 40.0,
    };
    // pointer left of center, so the raw step would leave the zone
    let pos = repel_from(Vec2::new(200.0, 170.0), b, zone_w, zone_h);
    assert!(pos.x >= 0.0 && pos.x <= zone_w - b.width);
    assert!(pos.y >= 0.0 && pos.y <= zone_h - b.height);
    assert!((pos.x - (zone_w - b.width)).abs() < 1e-3);
}

#[test]
fn pinned_edge_absorbs_further_repulsion() {
    let zone_w = 300.0;
    let zone_h = 200.0;
    // already pinned to the right edge
    let b = Rect {
        left: 220.0,
        top: 150.0,
        width: 80.0,
        height: 40.0,
    };
    let pos = repel_from(Vec2::new(210.0, 170.0), b, zone_w, zone_h);
    assert!((pos.x - b.left).abs() < 1e-3);
    assert!((pos.y - b.top).abs() < 1e-3);
}

#[test]
fn pointer_on_center_falls_back_to_a_unit_push() {
    let b = button();
    let pos = repel_from(b.center(), b, 1000.0, 1000.0);
    // degenerate direction resolves to a fixed push along +x
    assert!((pos.x - (b.left + REPEL_STEP)).abs() < 1e-3);
    assert!((pos.y - b.top).abs() < 1e-3);
}

#[test]
fn button_larger_than_zone_clamps_to_origin() {
    let b = Rect {
        left: 10.0,
        top: 10.0,
        width: 80.0,
        height: 40.0,
    };
    let pos = repel_from(Vec2::new(5.0, 5.0), b, 50.0, 30.0);
    assert_eq!(pos, Vec2::ZERO);
}

#[test]
fn random_qualifying_moves_never_escape_the_zone() {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let zone_w = 640.0;
    let zone_h = 360.0;
    let mut b = Rect {
        left: 280.0,
        top: 160.0,
        width: 80.0,
        height: 40.0,
    };
    for _ in 0..500 {
        let pointer = Vec2::new(rng.gen::<f32>() * zone_w, rng.gen::<f32>() * zone_h);
        if !within_trigger(pointer, b) {
            continue;
        }
        let pos = repel_from(pointer, b, zone_w, zone_h);
        assert!(pos.x >= 0.0 && pos.x <= zone_w - b.width, "left escaped: {pos:?}");
        assert!(pos.y >= 0.0 && pos.y <= zone_h - b.height, "top escaped: {pos:?}");
        b.left = pos.x;
        b.top = pos.y;
    }
}

#[test]
fn yes_scale_is_non_decreasing_and_capped() {
    let mut scale = 1.0_f32;
    for step in 0..30 {
        let next = grow_yes(scale);
        assert!(next >= scale, "scale shrank at step {step}");
        assert!(next <= YES_SCALE_MAX + 1e-6);
        scale = next;
    }
    assert!((scale - YES_SCALE_MAX).abs() < 1e-6);
}

#[test]
fn yes_scale_reaches_the_cap_after_twelve_steps() {
    let mut scale = 1.0_f32;
    for _ in 0..12 {
        scale = grow_yes(scale);
    }
    assert!((scale - YES_SCALE_MAX).abs() < 1e-3);
    // a thirteenth step pins to the cap exactly
    assert_eq!(grow_yes(scale), YES_SCALE_MAX.min(scale + YES_SCALE_STEP));
    assert!(grow_yes(YES_SCALE_MAX) <= YES_SCALE_MAX);
}
