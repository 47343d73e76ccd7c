#![deny(missing_docs)]
#![doc = "Error taxonomy and shared descriptors for the Noether commutative algebra engine."]

pub mod errors;
pub mod provenance;

pub use errors::{AlgebraError, ErrorInfo};
pub use provenance::SchemaVersion;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, AlgebraError>;
