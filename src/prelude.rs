//! Commonly used imports.
pub use log::{debug, trace};
