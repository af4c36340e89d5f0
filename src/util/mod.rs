//! Small utilities shared across the SDK.

pub mod debounce;

pub use debounce::Debouncer;
