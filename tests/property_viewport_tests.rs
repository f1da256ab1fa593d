use glchart::core::{Sample, Series, ViewSize, Viewport, ViewportConfig};
use proptest::prelude::*;

const MIN_UNITS_PER_PIXEL: f64 = 1e-3;

fn viewport_with_data(width: u32) -> Viewport {
    let config = ViewportConfig::default().with_min_units_per_pixel(MIN_UNITS_PER_PIXEL);
    let mut viewport = Viewport::new(ViewSize::new(width, 200), config).expect("viewport");
    let samples = (0..2_000)
        .map(|i| Sample::new(i as f64 * 0.5, (i as f64 * 0.01).sin()))
        .collect();
    viewport
        .attach_series(Series::new("wave", None, samples).expect("series"))
        .expect("attach");
    viewport
}

proptest! {
    #[test]
    fn set_visible_range_is_idempotent(
        width in 50u32..2_000,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
    ) {
        let mut viewport = viewport_with_data(width);
        viewport.set_visible_range(a, b).expect("first");
        let first = viewport.visible_range().expect("visible");
        let first_camera = viewport.camera_x();
        viewport.set_visible_range(a, b).expect("second");
        prop_assert_eq!(viewport.visible_range().expect("visible"), first);
        prop_assert_eq!(viewport.camera_x(), first_camera);
    }

    #[test]
    fn zooming_out_never_shrinks_x_span(
        start in 0.0f64..0.5,
        span in 0.01f64..0.5,
        delta in 0.0f64..10.0,
    ) {
        let mut viewport = viewport_with_data(640);
        viewport.set_visible_range(start, start + span).expect("set range");
        let before = viewport.visible_range().expect("visible").x.span();
        viewport.add_units_per_pixel(delta).expect("zoom out");
        let after = viewport.visible_range().expect("visible").x.span();
        prop_assert!(after >= before);
    }

    #[test]
    fn camera_and_scale_respect_floors(
        moves in prop::collection::vec(-500.0f64..500.0, 1..32),
        zooms in prop::collection::vec(-5.0f64..5.0, 1..32),
    ) {
        let mut viewport = viewport_with_data(400);
        for delta in moves {
            let camera_x = viewport.move_camera(delta).expect("move");
            prop_assert!(camera_x >= 0.0);
        }
        for delta in zooms {
            let units_per_pixel = viewport.add_units_per_pixel(delta).expect("zoom");
            prop_assert!(units_per_pixel >= MIN_UNITS_PER_PIXEL);
        }
    }

    #[test]
    fn normalized_range_stays_in_unit_interval(
        a in -1.0f64..2.0,
        b in -1.0f64..2.0,
        pan in -1_000.0f64..1_000.0,
    ) {
        let mut viewport = viewport_with_data(300);
        let applied = viewport.set_visible_range(a, b).expect("clamped");
        prop_assert!(0.0 <= applied.min() && applied.min() <= applied.max() && applied.max() <= 1.0);
        viewport.move_camera(pan).expect("move");
        let range = viewport.normalized_range().expect("normalized");
        prop_assert!(0.0 <= range.min() && range.min() <= range.max() && range.max() <= 1.0);
    }
}
