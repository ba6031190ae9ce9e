//! Error types for arithmetic coding.

use thiserror::Error;

/// Error variants for codec operations.
///
/// Every variant is fatal for the call that produced it: a failed decode
/// yields no usable prefix and the caller must discard the whole result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The decoder consumed every real bit and the bounded run of padding bits
    /// before producing the requested number of symbols.
    #[error("unexpected end of stream")]
    EndOfStream,

    /// The model could not resolve a point or a symbol to its alphabet.
    #[error("symbol or point out of the model's range")]
    OutOfRangeSymbol,

    /// The length header ended before a terminating group, or does not fit in 64 bits.
    #[error("malformed varint length header")]
    MalformedVarInt,

    /// `encode` was called on an encoder after `finalize`.
    #[error("coding session already finalized")]
    SessionFinalized,

    /// A symbol interval that does not satisfy `lo < hi <= denominator <= MAX_FREQUENCY`.
    #[error("invalid interval [{lo}, {hi}) for denominator {denominator}")]
    InvalidInterval {
        /// Inclusive lower cumulative frequency.
        lo: u32,
        /// Exclusive upper cumulative frequency.
        hi: u32,
        /// Total cumulative frequency.
        denominator: u32,
    },

    /// A frequency table whose total does not fit the coder's precision.
    #[error("cumulative frequency {total} exceeds the coder's maximum")]
    FrequencyOverflow {
        /// Total after clamping zero entries to one.
        total: u64,
    },
}

/// A specialized Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
