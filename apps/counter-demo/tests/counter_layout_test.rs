use counter_demo::counter_ui;
use tessera_testing::{assert_layout_rect, RecordingTarget};
use tessera_ui::prelude::*;

#[test]
fn counter_screen_layout_in_console_cells() {
    let engine = LayoutEngine::with_text_measurer(MonospacedTextMeasurer::CONSOLE);
    let layout = engine
        .calculate_layout_strict(&counter_ui(42, || {}, || {}), Constraints::new(0.0, 0.0, 80.0, 20.0))
        .expect("keys are unique");

    assert_layout_rect(&layout, "title", (0.0, 0.0, 11.0, 1.0));
    assert_layout_rect(&layout, "counter-box", (0.0, 2.0, 13.0, 5.0));
    assert_layout_rect(&layout, "counter-text", (0.0, 2.0, 9.0, 1.0));
    assert_layout_rect(&layout, "decrement-box", (0.0, 8.0, 17.0, 12.0));
    assert_layout_rect(&layout, "increment-box", (19.0, 8.0, 17.0, 12.0));
    assert_layout_rect(&layout, "buttons", (0.0, 8.0, 36.0, 12.0));
    assert_layout_rect(&layout, "root", (0.0, 0.0, 36.0, 20.0));
}

#[test]
fn counter_screen_draw_calls() {
    let mut renderer = Renderer::new(RecordingTarget::new());
    renderer
        .render(&counter_ui(5, || {}, || {}), Constraints::unbounded())
        .expect("recording never fails");

    assert_eq!(
        renderer.target().texts(),
        ["Counter App", "Count: 5", "-", "+"]
    );
    assert_eq!(renderer.target().rects().len(), 3);
}
