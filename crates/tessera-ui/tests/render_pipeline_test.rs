//! Rendering widget trees onto recording and console targets.

use std::sync::Arc;

use tessera_render_console::ConsoleRenderTarget;
use tessera_testing::{assert_rect_approx_eq, DrawOp, RecordingTarget, LAYOUT_TOLERANCE};
use tessera_ui::keys;
use tessera_ui::prelude::*;

fn counter_ui(count: i64) -> Node {
    Column(
        "root",
        props! { keys::SPACING => 1.0 },
        [
            Text("title", "Counter", props! { keys::FONT_SIZE => 20.0 }),
            Box(
                "counter-box",
                props! { keys::PADDING => 2.0 },
                [Text("counter-text", format!("Count: {count}"), Props::new())],
            ),
            Row(
                "buttons",
                props! { keys::SPACING => 2.0 },
                [
                    Button("decrement", "-", || {}, Props::new()),
                    Button("increment", "+", || {}, Props::new()),
                ],
            ),
        ],
    )
}

#[test]
fn custom_button_is_drawn_from_its_expanded_keys() {
    let mut renderer = Renderer::new(RecordingTarget::new());
    let layout = renderer
        .render(&counter_ui(0), Constraints::unbounded())
        .expect("recording never fails");

    let target = renderer.target();
    assert_eq!(target.texts(), ["Counter", "Count: 0", "-", "+"]);
    assert_eq!(target.rects().len(), 3);
    let plus = target.text_rect("+").expect("plus drawn");
    assert_rect_approx_eq(
        plus,
        layout.get("increment-text").expect("laid out"),
        LAYOUT_TOLERANCE,
        "increment label",
    );
    assert_eq!(target.ops().first(), Some(&DrawOp::Clear));
    assert_eq!(target.ops().last(), Some(&DrawOp::Flush));
}

#[test]
fn box_props_reach_the_target() {
    let mut renderer = Renderer::new(RecordingTarget::new());
    renderer
        .render(&counter_ui(3), Constraints::unbounded())
        .expect("recording never fails");

    let box_props: Vec<_> = renderer
        .target()
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Rect { props, .. } => Some(props.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(box_props[0].get_float(keys::PADDING, 0.0), 2.0);
    assert_eq!(box_props[1].get_string(keys::BACKGROUND_COLOR, ""), "#2196F3");
}

#[test]
fn state_change_rerenders_new_tree() {
    let state = Arc::new(StateManager::new());
    let counter = state.create_state("counter", 0);
    let mut renderer = Renderer::new(RecordingTarget::new());

    let frame = |renderer: &mut Renderer<RecordingTarget>, count: i64| {
        renderer
            .render(&counter_ui(count), Constraints::unbounded())
            .expect("recording never fails");
    };

    frame(&mut renderer, counter.get().and_then(|v| v.as_int()).unwrap_or(0));
    counter.update(|value| PropValue::from(value.and_then(|v| v.as_int()).unwrap_or(0) + 1));
    frame(&mut renderer, counter.get().and_then(|v| v.as_int()).unwrap_or(0));

    assert_eq!(renderer.target().frame_count(), 2);
    assert!(renderer.target().texts().contains(&"Count: 1".to_string()));
}

#[test]
fn console_board_shows_the_counter() {
    let engine = LayoutEngine::with_text_measurer(MonospacedTextMeasurer::CONSOLE);
    let target = ConsoleRenderTarget::with_writer(24, 8, Vec::new());
    let mut renderer = Renderer::with_engine(engine, target);
    renderer
        .render(&counter_ui(2), Constraints::new(0.0, 0.0, 24.0, 8.0))
        .expect("write to vec");

    let lines = renderer.target().lines();
    assert_eq!(lines[0].trim_end(), "Counter");
    assert!(lines[2].starts_with("Count: 2"));
    assert_eq!(lines[6].trim_end(), "+----------+");

    let written = String::from_utf8(renderer.into_target().into_writer()).expect("utf8");
    assert_eq!(written.lines().count(), 8);
}
