//! Property tests for bubble placement and connector geometry over arbitrary
//! containers, bubble sizes, and pointer positions.

#![allow(clippy::float_cmp)]

use neatline_bubbles::config::BubbleConfig;
use neatline_bubbles::connector::wedge;
use neatline_bubbles::geom::{Container, Point, Size};
use neatline_bubbles::placement::{Side, place};
use proptest::prelude::*;

const EPS: f64 = 1e-9;

/// Container offset and size, bubble size, and a pointer inside the container.
fn scene() -> impl Strategy<Value = (Container, Size, Point)> {
    (0u16..400, 0u16..400, 200u16..2000, 100u16..1200, 1u16..800, 1u16..1600)
        .prop_flat_map(|(left, top, cw, ch, w, h)| {
            let container = Container::new(f64::from(left), f64::from(top), f64::from(cw), f64::from(ch));
            let size = Size::new(f64::from(w), f64::from(h));
            (Just(container), Just(size), 0..=cw, 0..=ch)
        })
        .prop_map(|(container, size, px, py)| (container, size, Point::new(f64::from(px), f64::from(py))))
}

proptest! {
    #[test]
    fn side_follows_right_edge_overflow((container, size, pointer) in scene()) {
        let config = BubbleConfig::default();
        let placement = place(pointer, size, &container, &config);
        let fits_right = pointer.x + config.gap + size.width <= container.width;

        if fits_right {
            prop_assert_eq!(placement.side, Side::Right);
            prop_assert_eq!(placement.x, pointer.x + config.gap);
        } else {
            prop_assert_eq!(placement.side, Side::Left);
            prop_assert_eq!(placement.x, pointer.x - size.width - config.gap);
        }
        prop_assert_eq!(placement.width, size.width);
    }

    #[test]
    fn bubble_stays_inside_container_vertically((container, size, pointer) in scene()) {
        let placement = place(pointer, size, &container, &BubbleConfig::default());

        prop_assert!(placement.y >= -EPS);
        prop_assert!(placement.y + placement.height <= container.height + EPS);
    }

    #[test]
    fn tall_bubbles_scroll_from_the_top((container, size, pointer) in scene()) {
        let placement = place(pointer, size, &container, &BubbleConfig::default());

        prop_assert_eq!(placement.scroll, size.height > container.height);
        if placement.scroll {
            prop_assert_eq!(placement.y, 0.0);
            prop_assert_eq!(placement.height, container.height);
        } else {
            prop_assert_eq!(placement.height, size.height);
        }
    }

    #[test]
    fn wedge_spans_from_inset_to_near_edge((container, size, pointer) in scene()) {
        let config = BubbleConfig::default();
        let placement = place(pointer, size, &container, &config);
        let shape = wedge(pointer, &placement, &config);

        prop_assert_eq!(shape.width, config.gap - config.connector_inset);
        prop_assert_eq!(shape.height, placement.height);
        prop_assert_eq!(shape.origin.y, placement.y);
        let near_side_x = match placement.side {
            Side::Right => pointer.x + config.connector_inset,
            Side::Left => placement.near_edge_x(),
        };
        prop_assert_eq!(shape.origin.x, near_side_x);
        prop_assert!((shape.apex.y - (pointer.y - placement.y)).abs() < EPS);

        let (apex_x, base_x) = match placement.side {
            Side::Right => (0.0, shape.width),
            Side::Left => (shape.width, 0.0),
        };
        prop_assert_eq!(shape.apex.x, apex_x);
        prop_assert_eq!(shape.base_top.x, base_x);
        prop_assert_eq!(shape.base_bottom.x, base_x);
        prop_assert!(shape.base_top.y <= shape.base_bottom.y);
        prop_assert!(shape.base_bottom.y <= shape.height);
    }
}
