#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn container() -> Container {
    Container::new(0.0, 0.0, 800.0, 600.0)
}

fn bubble() -> Size {
    Size::new(200.0, 100.0)
}

fn place_at(x: f64, y: f64) -> Placement {
    place(Point::new(x, y), bubble(), &container(), &BubbleConfig::default())
}

// =============================================================
// Horizontal
// =============================================================

#[test]
fn right_side_when_it_fits() {
    let p = place_at(100.0, 300.0);
    assert_eq!(p.side, Side::Right);
    assert_eq!(p.x, 200.0);
}

#[test]
fn right_side_when_exactly_flush_with_edge() {
    // 500 + 100 + 200 == 800
    let p = place_at(500.0, 300.0);
    assert_eq!(p.side, Side::Right);
    assert_eq!(p.x, 600.0);
}

#[test]
fn flips_left_on_overflow() {
    let p = place_at(750.0, 300.0);
    assert_eq!(p.side, Side::Left);
    assert_eq!(p.x, 450.0);
}

#[test]
fn left_flip_is_the_only_fallback() {
    // Neither side fits a 700px bubble at x=400: the left flip is kept even
    // though it runs off the container's left edge.
    let p = place(Point::new(400.0, 300.0), Size::new(700.0, 100.0), &container(), &BubbleConfig::default());
    assert_eq!(p.side, Side::Left);
    assert_eq!(p.x, -400.0);
}

#[test]
fn custom_gap_is_honoured() {
    let cfg = BubbleConfig { gap: 40.0, ..BubbleConfig::default() };
    let p = place(Point::new(100.0, 300.0), bubble(), &container(), &cfg);
    assert_eq!(p.x, 140.0);
}

// =============================================================
// Vertical
// =============================================================

#[test]
fn lifted_by_a_third_of_the_height() {
    let p = place_at(750.0, 300.0);
    assert!(approx_eq(p.y, 300.0 - 100.0 / 3.0));
    assert!(!p.scroll);
    assert_eq!(p.height, 100.0);
}

#[test]
fn clamped_to_bottom_edge() {
    let p = place_at(100.0, 580.0);
    assert_eq!(p.x, 200.0);
    assert_eq!(p.y, 500.0);
}

#[test]
fn clamped_to_top_edge() {
    let p = place_at(100.0, 10.0);
    assert_eq!(p.y, 0.0);
}

#[test]
fn pointer_above_container_clamps_to_top() {
    let p = place_at(100.0, -50.0);
    assert_eq!(p.y, 0.0);
}

#[test]
fn taller_than_container_scrolls_from_top() {
    let p = place(Point::new(100.0, 300.0), Size::new(200.0, 900.0), &container(), &BubbleConfig::default());
    assert!(p.scroll);
    assert_eq!(p.y, 0.0);
    assert_eq!(p.height, 600.0);
    assert_eq!(p.width, 200.0);
}

#[test]
fn exactly_container_height_does_not_scroll() {
    let p = place(Point::new(100.0, 300.0), Size::new(200.0, 600.0), &container(), &BubbleConfig::default());
    assert!(!p.scroll);
    assert_eq!(p.y, 0.0);
}

#[test]
fn zero_bias_keeps_top_at_pointer() {
    let cfg = BubbleConfig { vertical_bias: 0.0, ..BubbleConfig::default() };
    let p = place(Point::new(100.0, 200.0), bubble(), &container(), &cfg);
    assert_eq!(p.y, 200.0);
}

// =============================================================
// near_edge_x
// =============================================================

#[test]
fn near_edge_is_left_edge_on_right_side() {
    let p = place_at(100.0, 300.0);
    assert_eq!(p.near_edge_x(), 200.0);
}

#[test]
fn near_edge_is_right_edge_on_left_side() {
    let p = place_at(750.0, 300.0);
    assert_eq!(p.near_edge_x(), 650.0);
}
