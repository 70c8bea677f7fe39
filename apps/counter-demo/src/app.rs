//! Counter application: state, tree construction and frame rendering.
//!
//! Layout runs with [`MonospacedTextMeasurer::CONSOLE`] (one cell per
//! character and per line) so that rectangles line up with the character
//! board. With the default 0.6/1.2 font metric a 16px label would be
//! 19.2 rows tall on a 20-row board, so the boxes printed here are smaller
//! than the ones that metric produces.

use std::io::{self, Write};
use std::sync::Arc;

use tessera_render_console::ConsoleRenderTarget;
use tessera_ui::prelude::*;
use tessera_ui::{keys, ListenerId};

use crate::options::DemoOptions;

pub const COUNTER_KEY: &str = "counter";

/// Builds the counter screen for `count`.
pub fn counter_ui(
    count: i64,
    on_decrement: impl Fn() + Send + Sync + 'static,
    on_increment: impl Fn() + Send + Sync + 'static,
) -> Node {
    Column(
        "root",
        props! { keys::SPACING => 1.0 },
        [
            Text(
                "title",
                "Counter App",
                props! { keys::FONT_SIZE => 20.0, keys::TEXT_ALIGN => "center" },
            ),
            Box(
                "counter-box",
                props! {
                    keys::PADDING => 2.0,
                    keys::BORDER_RADIUS => 4.0,
                    keys::BACKGROUND_COLOR => "#E0E0E0",
                },
                [Text(
                    "counter-text",
                    format!("Count: {count}"),
                    props! { keys::FONT_SIZE => 18.0, keys::TEXT_ALIGN => "center" },
                )],
            ),
            Row(
                "buttons",
                props! { keys::SPACING => 2.0 },
                [
                    Button(
                        "decrement",
                        "-",
                        on_decrement,
                        props! { keys::BACKGROUND_COLOR => "#F44336" },
                    ),
                    Button(
                        "increment",
                        "+",
                        on_increment,
                        props! { keys::BACKGROUND_COLOR => "#4CAF50" },
                    ),
                ],
            ),
        ],
    )
}

fn read_count(value: Option<PropValue>) -> i64 {
    value.and_then(|value| value.as_int()).unwrap_or(0)
}

/// Holds the counter state and a console renderer sized from
/// [`DemoOptions`].
pub struct CounterApp<W: Write> {
    state: Arc<StateManager>,
    counter: StateHandle,
    listener: ListenerId,
    renderer: Renderer<ConsoleRenderTarget<W>>,
    constraints: Constraints,
}

impl<W: Write> CounterApp<W> {
    pub fn new(options: DemoOptions, writer: W) -> Self {
        let state = Arc::new(StateManager::new());
        let counter = state.create_state(COUNTER_KEY, 0);
        let listener = state.add_listener(COUNTER_KEY, |old, new| {
            log::info!(
                "counter: {} -> {new}",
                old.map_or_else(|| "unset".to_owned(), ToString::to_string)
            );
        });

        let engine = LayoutEngine::with_text_measurer(MonospacedTextMeasurer::CONSOLE);
        let target = ConsoleRenderTarget::with_writer(options.width, options.height, writer);
        let constraints = Constraints::new(0.0, 0.0, options.width as f64, options.height as f64);

        Self {
            state,
            counter,
            listener,
            renderer: Renderer::with_engine(engine, target),
            constraints,
        }
    }

    pub fn count(&self) -> i64 {
        read_count(self.counter.get())
    }

    pub fn state(&self) -> &Arc<StateManager> {
        &self.state
    }

    pub fn target(&self) -> &ConsoleRenderTarget<W> {
        self.renderer.target()
    }

    /// Builds the tree for the current count, wiring the buttons to state.
    ///
    /// Decrementing stops at zero.
    pub fn build(&self) -> Node {
        let decrement = self.counter.clone();
        let increment = self.counter.clone();
        counter_ui(
            self.count(),
            move || {
                let current = read_count(decrement.get());
                if current > 0 {
                    decrement.set(current - 1);
                }
            },
            move || increment.update(|value| PropValue::from(read_count(value) + 1)),
        )
    }

    /// Renders the current state and returns the tree that was drawn, so
    /// events can be dispatched against it.
    pub fn render_frame(&mut self) -> io::Result<Node> {
        let root = self.build();
        let layout = self.renderer.render(&root, self.constraints)?;
        if layout.has_duplicates() {
            log::warn!("frame has duplicate keys: {:?}", layout.duplicate_keys());
        }
        Ok(root)
    }
}

impl<W: Write> Drop for CounterApp<W> {
    fn drop(&mut self) {
        self.state.remove_listener(COUNTER_KEY, self.listener);
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
