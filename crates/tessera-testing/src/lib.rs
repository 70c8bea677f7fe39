//! Testing utilities and harness for Tessera

pub mod assertions;
pub mod recording;

pub use assertions::*;
pub use recording::{DrawOp, RecordingTarget};

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::recording::{DrawOp, RecordingTarget};
}
