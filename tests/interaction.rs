use chrono::{Datelike, NaiveDate};
use gantt_rs_timeline::{
    MemoryHost, MemorySurface, MountError, PointerEvent, Surface, Task, TimelineChart,
    TimelineConfig,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn mount(viewport_width: f32) -> TimelineChart<MemorySurface> {
    let tasks = vec![
        Task::new("Design", date(2026, 1, 5), date(2026, 1, 16)).unwrap(),
        Task::new("Build", date(2026, 1, 19), date(2026, 3, 6)).unwrap(),
    ];
    let config = TimelineConfig {
        today: Some(date(2026, 2, 10)),
        ..TimelineConfig::default()
    };
    let mut host = MemoryHost::new();
    host.insert("#timeline", MemorySurface::new(viewport_width));
    TimelineChart::mount(&mut host, "#timeline", 2026, tasks, config).unwrap()
}

#[test]
fn missing_selector_fails_to_mount() {
    let mut host = MemoryHost::new();
    host.insert("#timeline", MemorySurface::new(800.0));
    let result = TimelineChart::mount(
        &mut host,
        "#sidebar",
        2026,
        Vec::new(),
        TimelineConfig::default(),
    );
    match result {
        Err(MountError::ContainerNotFound { selector }) => assert_eq!(selector, "#sidebar"),
        other => panic!("expected a mount failure, got {other:?}"),
    }
}

#[test]
fn a_full_session_drags_zooms_and_recenters() {
    let mut chart = mount(800.0);

    // Mounting centers on the configured today.
    let today_ordinal = date(2026, 2, 10).ordinal() as f32;
    assert_eq!(
        chart.state().viewport_scroll,
        today_ordinal * 30.0 - 400.0
    );

    // Drag left by 120px across two moves.
    let before_drag = chart.state().viewport_scroll;
    chart.handle_pointer(PointerEvent::Down { x: 500.0, y: 60.0 });
    chart.handle_pointer(PointerEvent::Moved { x: 440.0, y: 60.0 });
    chart.handle_pointer(PointerEvent::Moved { x: 380.0, y: 60.0 });
    chart.handle_pointer(PointerEvent::Up);
    assert_eq!(chart.state().viewport_scroll, before_drag + 120.0);

    // One wheel notch out, one in, back to the starting width.
    chart.handle_pointer(PointerEvent::Wheel { delta_y: 1.0 });
    assert!((chart.day_width() - 27.0).abs() < 1e-4);
    chart.handle_pointer(PointerEvent::Wheel { delta_y: -1.0 });
    assert!((chart.day_width() - 29.7).abs() < 1e-4);

    // Jump to a date at the current zoom.
    assert!(chart.scroll_to_date(date(2026, 9, 1)));
    let expected = date(2026, 9, 1).ordinal() as f32 * chart.day_width() - 400.0;
    assert!((chart.state().viewport_scroll - expected).abs() < 1e-3);

    // Dates outside the charted year do not move the viewport.
    let parked = chart.state().viewport_scroll;
    assert!(!chart.scroll_to_date(date(2027, 9, 1)));
    assert_eq!(chart.state().viewport_scroll, parked);
}

#[test]
fn surface_scroll_stays_within_content() {
    let mut chart = mount(800.0);
    chart.handle_pointer(PointerEvent::Down { x: 10_000.0, y: 0.0 });
    chart.handle_pointer(PointerEvent::Moved { x: -50_000.0, y: 0.0 });
    let max_scroll = chart.grid().content_width() - 800.0;
    assert_eq!(chart.state().viewport_scroll, max_scroll);

    chart.handle_pointer(PointerEvent::Moved { x: 90_000.0, y: 0.0 });
    assert_eq!(chart.state().viewport_scroll, 0.0);
}

#[test]
fn zooming_out_far_keeps_a_readable_grid() {
    let mut chart = mount(800.0);
    for _ in 0..100 {
        chart.handle_pointer(PointerEvent::Wheel { delta_y: 1.0 });
    }
    assert_eq!(chart.day_width(), 4.0);
    // At 4px per day the density filter kicks in.
    let visible = chart.scene().days.iter().filter(|d| d.visible).count();
    assert_eq!(visible, 46);
    assert_eq!(chart.grid().content_width(), 365.0 * 4.0);
}

#[test]
fn dispose_hands_back_a_blank_surface() {
    let chart = mount(800.0);
    let surface = chart.dispose();
    assert!(surface.nodes().is_empty());
    assert_eq!(surface.content_width(), 0.0);
    assert_eq!(surface.scroll_x(), 0.0);
}
