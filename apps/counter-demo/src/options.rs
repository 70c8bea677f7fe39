//! Demo configuration.

use std::env;

pub const WIDTH_VAR: &str = "TESSERA_WIDTH";
pub const HEIGHT_VAR: &str = "TESSERA_HEIGHT";

/// Size of the console board, in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoOptions {
    pub width: usize,
    pub height: usize,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            width: 80,
            height: 20,
        }
    }
}

impl DemoOptions {
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Defaults overridden by `TESSERA_WIDTH` / `TESSERA_HEIGHT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Unparsable values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            width: read_dimension(&lookup, WIDTH_VAR).unwrap_or(defaults.width),
            height: read_dimension(&lookup, HEIGHT_VAR).unwrap_or(defaults.height),
        }
    }
}

fn read_dimension(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<usize> {
    let raw = lookup(name)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("ignoring {name}={raw:?}: {err}");
            None
        }
    }
}
