//! Platform abstraction layer
//!
//! Browser events are translated here into simulation input so the wasm host
//! only forwards raw coordinates. Everything in this module is plain Rust and
//! runs under native tests.

pub mod input;

pub use input::{InputAdapter, PointerEvent};
