use approx::assert_relative_eq;
use glchart::ChartError;
use glchart::core::{
    FollowAction, FollowMode, PlaybackCursor, Sample, Series, ViewSize, Viewport, ViewportConfig,
};

/// Domain `[0, 1000]`, 200 px drawable showing `[0, 200]`.
fn viewport_showing_first_fifth() -> Viewport {
    let mut viewport =
        Viewport::new(ViewSize::new(200, 100), ViewportConfig::default()).expect("viewport");
    let samples = (0..=1000).map(|i| Sample::new(i as f64, i as f64)).collect();
    viewport
        .attach_series(Series::new("ramp", None, samples).expect("series"))
        .expect("attach");
    viewport.set_visible_range(0.0, 0.2).expect("set range");
    viewport
}

fn assert_window(viewport: &Viewport, min: f64, max: f64) {
    let visible = viewport.visible_range().expect("visible");
    assert_relative_eq!(visible.x.min, min, epsilon = 1e-9);
    assert_relative_eq!(visible.x.max, max, epsilon = 1e-9);
}

#[test]
fn mid_domain_position_recentres_window() {
    let mut viewport = viewport_showing_first_fifth();
    let mut cursor = PlaybackCursor::new(true);

    let action = cursor
        .set_current_position(500.0, &mut viewport)
        .expect("position");

    assert_eq!(action, FollowAction::Recentred);
    assert_eq!(cursor.position(), 500.0);
    assert_window(&viewport, 400.0, 600.0);
}

#[test]
fn free_mode_only_moves_indicator() {
    let mut viewport = viewport_showing_first_fifth();
    let mut cursor = PlaybackCursor::new(false);
    assert_eq!(cursor.follow_mode(), FollowMode::Free);

    let action = cursor
        .set_current_position(500.0, &mut viewport)
        .expect("position");

    assert_eq!(action, FollowAction::None);
    assert_eq!(cursor.position(), 500.0);
    assert_window(&viewport, 0.0, 200.0);
}

#[test]
fn visible_position_near_start_keeps_window() {
    let mut viewport = viewport_showing_first_fifth();
    let mut cursor = PlaybackCursor::new(true);

    let action = cursor
        .set_current_position(50.0, &mut viewport)
        .expect("position");

    assert_eq!(action, FollowAction::AssertShown { recentred: false });
    assert_window(&viewport, 0.0, 200.0);
}

#[test]
fn hidden_position_near_end_scrolls_to_edge() {
    let mut viewport = viewport_showing_first_fifth();
    let mut cursor = PlaybackCursor::new(true);

    let action = cursor
        .set_current_position(950.0, &mut viewport)
        .expect("position");

    assert_eq!(action, FollowAction::AssertShown { recentred: true });
    assert_window(&viewport, 800.0, 1000.0);
}

#[test]
fn centring_keeps_window_width_at_domain_start() {
    let mut viewport = viewport_showing_first_fifth();
    viewport.set_visible_range(0.5, 0.7).expect("set range");
    let mut cursor = PlaybackCursor::new(false);
    cursor
        .set_current_position(30.0, &mut viewport)
        .expect("position");

    let range = cursor.center_camera(&mut viewport).expect("center");
    assert_relative_eq!(range.min(), 0.0);
    assert_relative_eq!(range.max(), 0.2, epsilon = 1e-12);
    assert_window(&viewport, 0.0, 200.0);
}

#[test]
fn toggling_follow_changes_mode() {
    let mut cursor = PlaybackCursor::new(false);
    cursor.set_follow_enabled(true);
    assert!(cursor.follow_enabled());
    assert_eq!(cursor.follow_mode(), FollowMode::Following);
}

#[test]
fn invalid_positions_and_missing_data_are_rejected() {
    let mut viewport = viewport_showing_first_fifth();
    let mut cursor = PlaybackCursor::new(true);
    assert!(matches!(
        cursor.set_current_position(f64::NAN, &mut viewport),
        Err(ChartError::InvalidArgument(_))
    ));

    let mut empty =
        Viewport::new(ViewSize::new(200, 100), ViewportConfig::default()).expect("viewport");
    assert!(matches!(
        cursor.set_current_position(10.0, &mut empty),
        Err(ChartError::PreconditionViolation(_))
    ));

    cursor.set_follow_enabled(false);
    assert_eq!(
        cursor
            .set_current_position(10.0, &mut empty)
            .expect("free mode needs no data"),
        FollowAction::None
    );
}
