//! Cumulative-frequency models.
//!
//! A model splits `[0, scaling_factor)` into one half-open interval per
//! symbol. Encoder and decoder must see the same model, in the same state, at
//! every step; for a static model that simply means using the same table.

use crate::arithmetic::MAX_FREQUENCY;
use crate::english::BROWN_CORPUS_FREQUENCIES;
use crate::error::{Error, Result};

/// Half-open range `[lo, hi)` of cumulative frequency owned by one symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval {
    /// Inclusive lower bound.
    pub lo: u32,
    /// Exclusive upper bound.
    pub hi: u32,
}

impl Interval {
    /// Create an interval `[lo, hi)`.
    pub const fn new(lo: u32, hi: u32) -> Self {
        Self { lo, hi }
    }

    /// Frequency of the symbol, `hi - lo`.
    pub fn width(&self) -> u32 {
        self.hi.saturating_sub(self.lo)
    }

    /// Whether `point` lies inside the interval.
    pub fn contains(&self, point: u32) -> bool {
        self.lo <= point && point < self.hi
    }
}

/// Capability interface consumed by the encoder and decoder.
///
/// For a correct model the intervals of all symbols partition
/// `[0, scaling_factor())` exactly, with no gaps or overlaps. That is what
/// makes every encoded stream decodable.
///
/// Methods take `&self`: a model is fixed for the life of a session. An
/// adaptive model would have to be updated identically on both sides after
/// every symbol and must not be shared between concurrent sessions.
pub trait FrequencyModel {
    /// Alphabet of the model.
    type Symbol: Copy;

    /// Total cumulative frequency, the denominator of every interval.
    fn scaling_factor(&self) -> u32;

    /// Interval of `symbol`.
    ///
    /// # Errors
    /// Returns `Error::OutOfRangeSymbol` if `symbol` is not in the alphabet.
    fn interval(&self, symbol: Self::Symbol) -> Result<Interval>;

    /// The unique symbol whose interval contains `point`.
    ///
    /// # Errors
    /// Returns `Error::OutOfRangeSymbol` if no interval does (`point >= scaling_factor()`).
    fn symbol_for_point(&self, point: u32) -> Result<Self::Symbol>;
}

impl<M: FrequencyModel + ?Sized> FrequencyModel for &M {
    type Symbol = M::Symbol;

    fn scaling_factor(&self) -> u32 {
        (**self).scaling_factor()
    }

    fn interval(&self, symbol: Self::Symbol) -> Result<Interval> {
        (**self).interval(symbol)
    }

    fn symbol_for_point(&self, point: u32) -> Result<Self::Symbol> {
        (**self).symbol_for_point(point)
    }
}

const NUM_BYTES: usize = 256;

/// The default English model, built at compile time.
pub static ENGLISH: StaticByteModel = StaticByteModel::from_frequencies(&BROWN_CORPUS_FREQUENCIES);

/// Fixed model over the 256 byte values.
///
/// Zero frequencies are raised to one, so every byte can be encoded even if
/// the table never saw it. Lookup by byte is a table index; lookup by point
/// is a binary search over the 257 cumulative bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticByteModel {
    /// `cumulative[b]..cumulative[b + 1]` is the interval of byte `b`.
    cumulative: [u32; NUM_BYTES + 1],
}

impl StaticByteModel {
    /// Build a model from raw byte counts in a const context.
    ///
    /// # Panics
    /// Panics if the clamped total exceeds [`MAX_FREQUENCY`]. Used for
    /// `static` tables, where that becomes a compile error; use
    /// [`try_new`](Self::try_new) for tables known only at runtime.
    pub const fn from_frequencies(frequencies: &[u32; NUM_BYTES]) -> Self {
        assert!(
            clamped_total(frequencies) <= MAX_FREQUENCY as u64,
            "frequency table exceeds MAX_FREQUENCY"
        );
        let mut cumulative = [0u32; NUM_BYTES + 1];
        let mut i = 0;
        while i < NUM_BYTES {
            cumulative[i + 1] = cumulative[i] + clamp(frequencies[i]);
            i += 1;
        }
        Self { cumulative }
    }

    /// Build a model from raw byte counts.
    ///
    /// # Errors
    /// Returns `Error::FrequencyOverflow` if the clamped total exceeds [`MAX_FREQUENCY`].
    pub fn try_new(frequencies: &[u32; NUM_BYTES]) -> Result<Self> {
        let total = clamped_total(frequencies);
        if total > MAX_FREQUENCY as u64 {
            return Err(Error::FrequencyOverflow { total });
        }
        Ok(Self::from_frequencies(frequencies))
    }

    /// Byte distribution of typical English text.
    pub fn english() -> Self {
        ENGLISH.clone()
    }

    /// Every byte equally likely; one byte costs exactly eight bits.
    pub fn uniform() -> Self {
        Self::from_frequencies(&[1; NUM_BYTES])
    }

    /// Effective (clamped) frequency of `byte`.
    pub fn frequency(&self, byte: u8) -> u32 {
        let b = byte as usize;
        self.cumulative[b + 1] - self.cumulative[b]
    }

    /// The 257 cumulative bounds.
    pub fn cumulative(&self) -> &[u32] {
        &self.cumulative
    }
}

impl Default for StaticByteModel {
    fn default() -> Self {
        Self::english()
    }
}

impl FrequencyModel for StaticByteModel {
    type Symbol = u8;

    fn scaling_factor(&self) -> u32 {
        self.cumulative[NUM_BYTES]
    }

    fn interval(&self, symbol: u8) -> Result<Interval> {
        // Every u8 is in the alphabet.
        let i = symbol as usize;
        Ok(Interval::new(self.cumulative[i], self.cumulative[i + 1]))
    }

    fn symbol_for_point(&self, point: u32) -> Result<u8> {
        // First bound strictly greater than `point`; cumulative[0] == 0 so it is never index 0.
        let upper = self.cumulative.partition_point(|&bound| bound <= point);
        if upper > NUM_BYTES {
            return Err(Error::OutOfRangeSymbol);
        }
        Ok((upper - 1) as u8)
    }
}

const fn clamp(frequency: u32) -> u32 {
    if frequency == 0 {
        1
    } else {
        frequency
    }
}

const fn clamped_total(frequencies: &[u32; NUM_BYTES]) -> u64 {
    let mut total = 0u64;
    let mut i = 0;
    while i < NUM_BYTES {
        total += clamp(frequencies[i]) as u64;
        i += 1;
    }
    total
}
