//! Binary arithmetic coding with bits-to-follow underflow handling.
//!
//! The coder keeps a code range `[lower, upper]` inside `[0, TOP_VALUE]`.
//! Each symbol narrows the range to its share of the model's cumulative
//! frequency; whenever the leading bit of the range is settled it is emitted
//! and the range is doubled. A range that straddles the midpoint while
//! sitting inside the middle half cannot emit yet: it is recentred and the
//! decision is deferred as a pending opposite bit.
//!
//! The decoder replays exactly the same arithmetic on the same bounds, so its
//! code range tracks the encoder's bit for bit.

use tracing::trace;

use crate::bitio::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::model::{FrequencyModel, Interval};

/// Number of significant bits in a code value.
pub const CODE_VALUE_BITS: u32 = 32;

/// Code values are held in a wider type so products never overflow.
pub type CodeValue = u64;

/// Largest code value, `2^32 - 1`.
pub const TOP_VALUE: CodeValue = (1 << CODE_VALUE_BITS) - 1;
/// Point after the first quarter, `2^30`.
pub const FIRST_QUARTER: CodeValue = TOP_VALUE / 4 + 1;
/// Point after the first half, `2^31`.
pub const HALF: CodeValue = 2 * FIRST_QUARTER;
/// Point after the third quarter, `3 * 2^30`.
pub const THIRD_QUARTER: CodeValue = 3 * FIRST_QUARTER;

/// Largest allowed scaling factor, `2^30 - 1`.
pub const MAX_FREQUENCY: u32 = (1 << 30) - 1;

/// Padding bits the decoder may invent past the end of the stream.
const MAX_GARBAGE_BITS: u32 = CODE_VALUE_BITS - 2;

// Frequencies must fit a quarter of the code range, or a renormalized range
// could be narrower than the denominator and starve a symbol.
const _: () = assert!(u32::BITS - MAX_FREQUENCY.leading_zeros() + 2 <= CODE_VALUE_BITS);
const _: () = assert!(TOP_VALUE.checked_mul(MAX_FREQUENCY as CodeValue).is_some());

/// Map `interval / denominator` of the unit range onto `[lower, upper]`.
///
/// Both sides of the codec must narrow through this one function.
pub fn sub_interval(
    lower: CodeValue,
    upper: CodeValue,
    interval: Interval,
    denominator: u32,
) -> (CodeValue, CodeValue) {
    let span = upper - lower + 1;
    let denominator = denominator as CodeValue;
    (
        lower + interval.lo as CodeValue * span / denominator,
        lower + interval.hi as CodeValue * span / denominator - 1,
    )
}

fn check_interval(interval: Interval, denominator: u32) -> Result<()> {
    if denominator == 0
        || denominator > MAX_FREQUENCY
        || interval.lo >= interval.hi
        || interval.hi > denominator
    {
        return Err(Error::InvalidInterval {
            lo: interval.lo,
            hi: interval.hi,
            denominator,
        });
    }
    Ok(())
}

/// Arithmetic encoder session writing into a [`BitWriter`].
///
/// Drive it with [`encode`](Self::encode), then call
/// [`finalize`](Self::finalize) once; nothing is flushed implicitly on drop.
#[derive(Debug)]
pub struct Encoder<'a> {
    sink: &'a mut BitWriter,
    lower: CodeValue,
    upper: CodeValue,
    /// Opposite bits owed after the next emitted bit.
    bits_to_follow: u64,
    finalized: bool,
}

impl<'a> Encoder<'a> {
    /// Start a session over `sink`.
    pub fn new(sink: &'a mut BitWriter) -> Self {
        Self {
            sink,
            lower: 0,
            upper: TOP_VALUE,
            bits_to_follow: 0,
            finalized: false,
        }
    }

    /// Encode one symbol occupying `interval` out of `denominator`.
    ///
    /// # Errors
    /// - `Error::SessionFinalized` after [`finalize`](Self::finalize).
    /// - `Error::InvalidInterval` unless `lo < hi <= denominator <= MAX_FREQUENCY`.
    pub fn encode(&mut self, interval: Interval, denominator: u32) -> Result<()> {
        if self.finalized {
            return Err(Error::SessionFinalized);
        }
        check_interval(interval, denominator)?;

        (self.lower, self.upper) = sub_interval(self.lower, self.upper, interval, denominator);

        loop {
            if self.upper < HALF {
                self.emit(false);
            } else if self.lower >= HALF {
                self.emit(true);
                self.lower -= HALF;
                self.upper -= HALF;
            } else if self.lower >= FIRST_QUARTER && self.upper < THIRD_QUARTER {
                self.bits_to_follow += 1;
                self.lower -= FIRST_QUARTER;
                self.upper -= FIRST_QUARTER;
            } else {
                break;
            }
            self.lower <<= 1;
            self.upper = (self.upper << 1) | 1;
        }
        Ok(())
    }

    /// Encode `symbol` under `model`.
    pub fn encode_symbol<M: FrequencyModel + ?Sized>(
        &mut self,
        model: &M,
        symbol: M::Symbol,
    ) -> Result<()> {
        self.encode(model.interval(symbol)?, model.scaling_factor())
    }

    /// Emit the bits that pin down the final range and flush the sink.
    ///
    /// Two bits selecting the quarter containing `lower` are enough for the
    /// decoder; the rest it pads with zeros. Repeated calls do nothing.
    pub fn finalize(&mut self) {
        if self.finalized {
            return;
        }
        self.bits_to_follow += 1;
        self.emit(self.lower >= FIRST_QUARTER);
        self.sink.finalize();
        self.finalized = true;
        trace!(bits = self.sink.bit_len(), "encoder finalized");
    }

    /// Whether [`finalize`](Self::finalize) has run.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    fn emit(&mut self, bit: bool) {
        self.sink.put(bit);
        for _ in 0..self.bits_to_follow {
            self.sink.put(!bit);
        }
        self.bits_to_follow = 0;
    }
}

/// Arithmetic decoder session reading from a [`BitReader`].
///
/// The stream has no end marker: the caller must request exactly as many
/// symbols as were encoded.
#[derive(Debug)]
pub struct Decoder<'a> {
    source: BitReader<'a>,
    lower: CodeValue,
    upper: CodeValue,
    /// Window of `CODE_VALUE_BITS` stream bits aligned with the code range.
    value: CodeValue,
    garbage_bits: u32,
    decoded: usize,
}

impl<'a> Decoder<'a> {
    /// Start a session, priming the code value with the first 32 bits of `source`.
    ///
    /// # Errors
    /// Returns `Error::EndOfStream` if `source` is too short to supply the
    /// leading bits of the code value.
    pub fn new(source: BitReader<'a>) -> Result<Self> {
        let mut decoder = Self {
            source,
            lower: 0,
            upper: TOP_VALUE,
            value: 0,
            garbage_bits: 0,
            decoded: 0,
        };
        for _ in 0..CODE_VALUE_BITS {
            decoder.value = (decoder.value << 1) | decoder.read_bit()? as CodeValue;
        }
        trace!(
            value = decoder.value,
            garbage_bits = decoder.garbage_bits,
            "decoder primed"
        );
        Ok(decoder)
    }

    /// Decode the next symbol under `model`.
    ///
    /// # Errors
    /// - `Error::EndOfStream` if the stream ran out beyond the padding allowance.
    /// - `Error::OutOfRangeSymbol` if the model cannot resolve the point, or
    ///   resolves it to a symbol whose interval does not contain it.
    /// - `Error::InvalidInterval` for a model outside the coder's precision.
    pub fn decode<M: FrequencyModel + ?Sized>(&mut self, model: &M) -> Result<M::Symbol> {
        self.normalize()?;

        let denominator = model.scaling_factor();
        if denominator == 0 || denominator > MAX_FREQUENCY {
            return Err(Error::InvalidInterval {
                lo: 0,
                hi: 0,
                denominator,
            });
        }
        let span = self.upper - self.lower + 1;
        let point = ((self.value - self.lower + 1) * denominator as CodeValue - 1) / span;
        // value lies in [lower, upper], so point < denominator fits u32.
        let point = point as u32;

        let symbol = model.symbol_for_point(point)?;
        let interval = model.interval(symbol)?;
        check_interval(interval, denominator)?;
        if !interval.contains(point) {
            return Err(Error::OutOfRangeSymbol);
        }

        (self.lower, self.upper) = sub_interval(self.lower, self.upper, interval, denominator);
        self.decoded += 1;
        Ok(symbol)
    }

    /// Number of symbols decoded so far.
    pub fn symbols_decoded(&self) -> usize {
        self.decoded
    }

    fn normalize(&mut self) -> Result<()> {
        loop {
            if self.upper < HALF {
                // Leading bit is 0 on both bounds; nothing to subtract.
            } else if self.lower >= HALF {
                self.value -= HALF;
                self.lower -= HALF;
                self.upper -= HALF;
            } else if self.lower >= FIRST_QUARTER && self.upper < THIRD_QUARTER {
                self.value -= FIRST_QUARTER;
                self.lower -= FIRST_QUARTER;
                self.upper -= FIRST_QUARTER;
            } else {
                return Ok(());
            }
            self.lower <<= 1;
            self.upper = (self.upper << 1) | 1;
            self.value = (self.value << 1) | self.read_bit()? as CodeValue;
        }
    }

    fn read_bit(&mut self) -> Result<bool> {
        if let Some(bit) = self.source.get() {
            return Ok(bit);
        }
        // The encoder's tail guarantees the leading bits are real; past that
        // a bounded run of zeros stands in for the trimmed padding.
        self.garbage_bits += 1;
        if self.garbage_bits > MAX_GARBAGE_BITS {
            return Err(Error::EndOfStream);
        }
        Ok(false)
    }
}
