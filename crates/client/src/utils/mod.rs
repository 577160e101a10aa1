#[cfg(feature = "wasm")]
pub mod location;
pub mod tracing;
