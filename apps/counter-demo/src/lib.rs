pub mod app;
pub mod options;

pub use app::{counter_ui, CounterApp};
pub use options::DemoOptions;
