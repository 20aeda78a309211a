//! Shared primitive types used by tokens, matchers and diagnostics.

pub mod span;

pub use span::{Position, Span};
