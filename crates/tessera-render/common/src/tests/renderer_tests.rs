use super::*;
use tessera_core::{props, FunctionComponent};

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear,
    Rect(String, Rect),
    Text(String, Rect),
    Flush,
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
    fail_flush: bool,
}

impl RenderTarget for Recorder {
    type Error = String;

    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn draw_rect(&mut self, rect: Rect, props: &Props) {
        self.ops
            .push(Op::Rect(props.get_string("tag", "").to_owned(), rect));
    }

    fn draw_text(&mut self, text: &str, rect: Rect, _props: &Props) {
        self.ops.push(Op::Text(text.to_owned(), rect));
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.ops.push(Op::Flush);
        if self.fail_flush {
            return Err("sink closed".into());
        }
        Ok(())
    }
}

fn text(key: &str, value: &str) -> Node {
    Node::new(
        NodeKind::Text,
        key,
        props! { keys::TEXT => value, keys::FONT_SIZE => 10.0 },
    )
}

#[test]
fn render_clears_draws_in_tree_order_and_flushes() {
    let root = Node::new(NodeKind::Column, "col", Props::new()).with_children([
        text("title", "Hi"),
        Node::new(NodeKind::Box, "frame", props! { "tag" => "frame", keys::PADDING => 1.0 })
            .with_child(text("body", "abc")),
    ]);

    let mut renderer = Renderer::new(Recorder::default());
    let layout = renderer
        .render(&root, Constraints::unbounded())
        .expect("render");

    let title = layout.get("title").expect("title laid out");
    let frame = layout.get("frame").expect("frame laid out");
    let body = layout.get("body").expect("body laid out");
    assert_eq!(
        renderer.target().ops,
        vec![
            Op::Clear,
            Op::Text("Hi".into(), title),
            Op::Rect("frame".into(), frame),
            Op::Text("abc".into(), body),
            Op::Flush,
        ]
    );
}

#[test]
fn custom_node_renders_its_replacement() {
    let root = Node::new(NodeKind::Custom, "button", props! { keys::LABEL => "Go" })
        .with_component(FunctionComponent::new(|props: &Props| {
            Node::new(NodeKind::Box, "button-box", props! { "tag" => "button" })
                .with_child(text("button-text", props.get_string(keys::LABEL, "")))
        }));

    let mut renderer = Renderer::new(Recorder::default());
    let layout = renderer
        .render(&root, Constraints::unbounded())
        .expect("render");

    assert!(!layout.contains_key("button"));
    let ops = &renderer.target().ops;
    assert!(ops.contains(&Op::Rect(
        "button".into(),
        layout.get("button-box").expect("box laid out")
    )));
    assert!(ops.contains(&Op::Text(
        "Go".into(),
        layout.get("button-text").expect("text laid out")
    )));
}

#[test]
fn containers_do_not_draw_themselves() {
    let root = Node::new(NodeKind::Row, "row", Props::new()).with_child(
        Node::new(NodeKind::Container, "wrap", Props::new()).with_child(text("t", "x")),
    );

    let mut renderer = Renderer::new(Recorder::default());
    renderer
        .render(&root, Constraints::unbounded())
        .expect("render");

    let draws: Vec<_> = renderer
        .target()
        .ops
        .iter()
        .filter(|op| matches!(op, Op::Rect(..) | Op::Text(..)))
        .collect();
    assert_eq!(draws.len(), 1);
}

#[test]
fn flush_error_is_returned() {
    let mut renderer = Renderer::new(Recorder {
        fail_flush: true,
        ..Recorder::default()
    });
    let result = renderer.render(&text("t", "x"), Constraints::unbounded());
    assert_eq!(result, Err("sink closed".to_string()));
}

#[test]
fn renders_through_a_borrowed_target() {
    let mut recorder = Recorder::default();
    {
        let mut renderer = Renderer::new(&mut recorder);
        renderer
            .render(&text("t", "x"), Constraints::unbounded())
            .expect("render");
    }
    assert_eq!(recorder.ops.first(), Some(&Op::Clear));
    assert_eq!(recorder.ops.last(), Some(&Op::Flush));
}

#[test]
fn subtree_missing_from_layout_is_skipped() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    // Yields a different key on every expansion, so the render walk never
    // finds the entry the layout walk recorded.
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let unstable = Node::new(NodeKind::Custom, "unstable", Props::new()).with_component(
        FunctionComponent::new(move |_: &Props| {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            Node::new(NodeKind::Box, format!("box-{n}"), Props::new())
                .with_child(text(&format!("label-{n}"), "lost"))
        }),
    );
    let root = Node::new(NodeKind::Column, "col", Props::new())
        .with_children([unstable, text("kept", "ok")]);

    let mut renderer = Renderer::new(Recorder::default());
    let layout = renderer
        .render(&root, Constraints::unbounded())
        .expect("render");

    assert!(layout.contains_key("box-0"));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(
        renderer.target().ops,
        vec![
            Op::Clear,
            Op::Text("ok".into(), layout.get("kept").expect("kept laid out")),
            Op::Flush,
        ]
    );
}
