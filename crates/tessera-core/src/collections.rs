//! Hash map used for props, state and layout tables.
//!
//! Keys are short strings; `FxHashMap` is used unless the `std-hash`
//! feature asks for the standard SipHash map.

#[cfg(feature = "std-hash")]
pub mod map {
    pub use std::collections::HashMap;
}

#[cfg(not(feature = "std-hash"))]
pub mod map {
    pub use rustc_hash::FxHashMap as HashMap;
}
