//! Error types for the `halfx` crate

/// Errors that could occur while building a [`crate::HalfOps`] handle
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// [`crate::PathOption::NativeOnly`] is in use and this build has no
    /// native path.
    #[error("native 16-bit path is not available in this configuration and no fallback was enabled")]
    NativeUnavailable,
}
