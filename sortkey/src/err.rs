//! Error types for the `sortkey` crate

/// Configuration errors raised while building a comparator
///
/// These are all programmer errors in a test's parameters. Comparisons
/// themselves never fail once a comparator exists.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The bit range has no bits in it.
    #[error("bit range {start}..{end} is empty")]
    EmptyRange {
        /// Requested first bit
        start: u32,
        /// Requested end bit
        end: u32,
    },

    /// The bit range is wider than the 64-bit extraction mask.
    #[error("bit range {start}..{end} is wider than 64 bits")]
    RangeTooWide {
        /// Requested first bit
        start: u32,
        /// Requested end bit
        end: u32,
    },

    /// The bit range extends past the end of the key.
    #[error("bit range ends at {end} but the key only has {bits} bits")]
    OutOfBounds {
        /// Requested end bit
        end: u32,
        /// Width of the key type
        bits: u32,
    },

    /// A partial bit range was requested for a key that can't be sliced.
    ///
    /// Only full-width comparisons are defined for signed integers and
    /// floating point keys.
    #[error("key type {key} supports only full-width comparison, not bits {start}..{end}")]
    NotSliceable {
        /// Name of the key type
        key: &'static str,
        /// Requested first bit
        start: u32,
        /// Requested end bit
        end: u32,
    },
}
