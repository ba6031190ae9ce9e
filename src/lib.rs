//! # Arithmetic-Coded Strings
//!
//! *Compact, self-describing blobs for short natural-language text.*
//!
//! ## Intuition First
//!
//! Think of the unit interval `[0, 1)` as a ruler. Each letter of English
//! gets a slice of it sized by how often that letter shows up: a wide slice
//! for `' '` and `'e'`, a sliver for `'Q'`. To encode a message, zoom into
//! the slice of the first letter, then into the slice of the second letter
//! *inside* that, and so on. The whole message ends up as one tiny interval,
//! and any number inside it, written in binary, identifies the message. Wide
//! slices shrink the interval slowly, so common letters cost few bits.
//!
//! ## The Problem
//!
//! Short strings are a bad fit for general-purpose compressors:
//! - **Dictionary coders (LZ77, LZW)**: need repetition inside the input, and a short string has none.
//! - **Huffman coding**: knows the letter distribution but spends whole bits per symbol.
//!
//! A static model of the language plus arithmetic coding spends fractional
//! bits per symbol without needing any repetition in the input itself.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon         Entropy as the fundamental limit
//! 1952  Huffman         Prefix codes: whole bits per symbol
//! 1967  Kucera/Francis  Brown Corpus, source of the English byte model
//! 1976  Rissanen/Pasco  Arithmetic coding: fractional bits, finite precision
//! 1987  Witten et al.   Integer implementation with bits-to-follow
//! ```
//!
//! ## Mathematical Formulation
//!
//! For a model with cumulative frequencies `C(s)` and total `T`, symbol `s`
//! owns `[C(s), C(s) + f(s))`. With the current code range `[L, U]` and
//! `R = U - L + 1`:
//!
//! ```text
//! L' = L + floor(C(s) * R / T)
//! U' = L + floor((C(s) + f(s)) * R / T) - 1
//! ```
//!
//! The coder works on 32-bit code values held in `u64`, and bounds `T` by
//! `2^30 - 1` so that every renormalized range is wider than `T`.
//!
//! ## Blob Format
//!
//! ```text
//! blob := "" | VarInt(decompressed_length) ++ packed_bits
//! ```
//!
//! ## Complexity Analysis
//!
//! - **Time**: O(1) per encoded byte; O(log 256) per decoded byte for the static model.
//! - **Space**: O(1) coder state; the model table is 257 words.
//!
//! ## Failure Modes
//!
//! 1. **Model mismatch**: decoding with a different model than encoding silently yields garbage or `OutOfRangeSymbol`. Blobs do not record the model.
//! 2. **Truncation**: a cut header is `MalformedVarInt`; a cut body ends in `EndOfStream` after a bounded number of padding bits.
//!
//! ## References
//!
//! - Witten, I. H., Neal, R. M., Cleary, J. G. (1987). "Arithmetic coding for data compression."
//! - Kucera, H., Francis, W. N. (1967). "Computational Analysis of Present-Day American English."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod arithmetic;
pub mod bitio;
pub mod codec;
pub mod english;
pub mod error;
pub mod model;
pub mod varint;

pub use arithmetic::{Decoder, Encoder};
pub use codec::{compress, decompress, decompress_into, Codec};
pub use error::{Error, Result};
pub use model::{FrequencyModel, Interval, StaticByteModel, ENGLISH};
