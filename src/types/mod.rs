//! Common types and error definitions.

/// Guarded f64/Decimal conversion helpers.
pub mod decimal;

/// Error types using thiserror.
pub mod error;

/// Primitive type aliases for domain concepts.
pub mod primitives;
