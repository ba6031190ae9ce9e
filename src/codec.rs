//! Self-describing blobs: length header plus arithmetic-coded body.
//!
//! ```text
//! blob := "" | VarInt(decompressed_length) ++ packed_bits
//! ```
//!
//! The empty input is special-cased to the empty blob; every other blob
//! starts with a header of at least one byte.

use tracing::debug;

use crate::arithmetic::{Decoder, Encoder};
use crate::bitio::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::model::{FrequencyModel, StaticByteModel};
use crate::varint;

/// Compress `data` under `model`.
///
/// Pure: the same input and model always give the same blob.
///
/// # Errors
/// Propagates model errors (`OutOfRangeSymbol`, `InvalidInterval`) for
/// models that do not cover every byte or exceed the coder's precision.
pub fn compress<M>(data: &[u8], model: &M) -> Result<Vec<u8>>
where
    M: FrequencyModel<Symbol = u8> + ?Sized,
{
    debug!(input = data.len(), "compressing");
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let mut header = Vec::with_capacity(varint::encoded_len(data.len() as u64) + data.len());
    varint::write_varint(&mut header, data.len() as u64);

    let mut sink = BitWriter::with_prefix(header);
    let mut encoder = Encoder::new(&mut sink);
    for &byte in data {
        encoder.encode_symbol(model, byte)?;
    }
    encoder.finalize();

    let blob = sink.into_bytes();
    debug!(input = data.len(), output = blob.len(), "compressed");
    Ok(blob)
}

/// Decompress a blob produced by [`compress`] under the same model.
///
/// # Errors
/// - `Error::MalformedVarInt` if the header is truncated.
/// - `Error::EndOfStream` if the body is too short for the declared length.
/// - `Error::OutOfRangeSymbol` if the model does not match the stream.
pub fn decompress<M>(blob: &[u8], model: &M) -> Result<Vec<u8>>
where
    M: FrequencyModel<Symbol = u8> + ?Sized,
{
    let mut out = Vec::new();
    decompress_into(blob, model, &mut out)?;
    Ok(out)
}

/// Decompress `blob` and append the bytes to `dest`.
///
/// On error `dest` is restored to its original length.
pub fn decompress_into<M>(blob: &[u8], model: &M, dest: &mut Vec<u8>) -> Result<()>
where
    M: FrequencyModel<Symbol = u8> + ?Sized,
{
    debug!(input = blob.len(), "decompressing");
    let start = dest.len();
    let result = decode_body(blob, model, dest);
    if let Err(ref e) = result {
        debug!(error = %e, "decompression failed");
        dest.truncate(start);
    }
    result
}

fn decode_body<M>(blob: &[u8], model: &M, dest: &mut Vec<u8>) -> Result<()>
where
    M: FrequencyModel<Symbol = u8> + ?Sized,
{
    if blob.is_empty() {
        return Ok(());
    }

    let (length, header_len) = varint::read_varint(blob)?;
    let length = usize::try_from(length).map_err(|_| Error::MalformedVarInt)?;
    let body = &blob[header_len..];

    let mut decoder = Decoder::new(BitReader::new(body))?;
    // The header is untrusted until the body has decoded.
    dest.reserve(length.min(body.len().saturating_mul(8) + 64));
    for _ in 0..length {
        dest.push(decoder.decode(model)?);
    }

    debug!(input = blob.len(), output = length, "decompressed");
    Ok(())
}

/// A compressor/decompressor pair bound to one model.
///
/// ```
/// use acstr::Codec;
///
/// let codec = Codec::english();
/// let blob = codec.compress(b"Hello, World!").unwrap();
/// assert_eq!(blob.len(), 11);
/// assert_eq!(codec.decompress(&blob).unwrap(), b"Hello, World!");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Codec<M> {
    model: M,
}

impl Codec<StaticByteModel> {
    /// Codec over the default English model.
    pub fn english() -> Self {
        Self::new(StaticByteModel::english())
    }
}

impl<M: FrequencyModel<Symbol = u8>> Codec<M> {
    /// Bind `model`.
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// The bound model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// See [`compress`].
    pub fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        compress(data, &self.model)
    }

    /// See [`decompress`].
    pub fn decompress(&self, blob: &[u8]) -> Result<Vec<u8>> {
        decompress(blob, &self.model)
    }

    /// See [`decompress_into`].
    pub fn decompress_into(&self, blob: &[u8], dest: &mut Vec<u8>) -> Result<()> {
        decompress_into(blob, &self.model, dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ENGLISH;

    #[test]
    fn test_empty_maps_to_empty() {
        assert!(compress(b"", &ENGLISH).unwrap().is_empty());
        assert!(decompress(b"", &ENGLISH).unwrap().is_empty());
    }

    #[test]
    fn test_hello_world_is_eleven_bytes() {
        let blob = compress(b"Hello, World!", &ENGLISH).unwrap();
        assert_eq!(blob.len(), 11);
        assert_eq!(blob[0], 13);
        assert_eq!(decompress(&blob, &ENGLISH).unwrap(), b"Hello, World!");
    }

    #[test]
    fn test_single_byte_roundtrip() {
        for byte in [0u8, b'a', b' ', 0xFF] {
            let blob = compress(&[byte], &ENGLISH).unwrap();
            assert_eq!(decompress(&blob, &ENGLISH).unwrap(), vec![byte]);
        }
    }

    #[test]
    fn test_uniform_model_costs_eight_bits_per_byte() {
        let model = StaticByteModel::uniform();
        let data: Vec<u8> = (0..=255).collect();
        let blob = compress(&data, &model).unwrap();
        // Two-byte header, 256 payload bytes, one byte for the tail bits.
        assert_eq!(blob.len(), 2 + 256 + 1);
        assert_eq!(decompress(&blob, &model).unwrap(), data);
    }

    #[test]
    fn test_decompress_into_appends() {
        let blob = compress(b"world", &ENGLISH).unwrap();
        let mut dest = b"hello ".to_vec();
        decompress_into(&blob, &ENGLISH, &mut dest).unwrap();
        assert_eq!(dest, b"hello world");
    }

    #[test]
    fn test_failed_decompress_leaves_dest_untouched() {
        let blob = compress(b"some text that needs a few bytes", &ENGLISH).unwrap();
        let mut dest = b"keep".to_vec();
        let err = decompress_into(&blob[..3], &ENGLISH, &mut dest).unwrap_err();
        assert_eq!(err, Error::EndOfStream);
        assert_eq!(dest, b"keep");
    }

    #[test]
    fn test_truncated_header_is_malformed() {
        assert_eq!(decompress(&[0x80], &ENGLISH), Err(Error::MalformedVarInt));
        assert_eq!(
            decompress(&[0x80, 0x80], &ENGLISH),
            Err(Error::MalformedVarInt)
        );
    }

    #[test]
    fn test_header_only_blob_is_end_of_stream() {
        assert_eq!(decompress(&[0x05], &ENGLISH), Err(Error::EndOfStream));
    }

    #[test]
    fn test_zero_length_header_decodes_nothing() {
        // Well-formed, although compress never emits a zero length.
        assert_eq!(decompress(&[0x00, 0, 0, 0, 0], &ENGLISH).unwrap(), b"");
    }

    /// Records the `message` of every event.
    #[derive(Clone, Default)]
    struct Messages(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

    impl tracing::field::Visit for Messages {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            if field.name() == "message" {
                self.0.lock().unwrap().push(format!("{value:?}"));
            }
        }
    }

    impl tracing::Subscriber for Messages {
        fn enabled(&self, _: &tracing::Metadata<'_>) -> bool {
            true
        }
        fn new_span(&self, _: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            tracing::span::Id::from_u64(1)
        }
        fn record(&self, _: &tracing::span::Id, _: &tracing::span::Record<'_>) {}
        fn record_follows_from(&self, _: &tracing::span::Id, _: &tracing::span::Id) {}
        fn event(&self, event: &tracing::Event<'_>) {
            event.record(&mut self.clone());
        }
        fn enter(&self, _: &tracing::span::Id) {}
        fn exit(&self, _: &tracing::span::Id) {}
    }

    #[test]
    fn test_failed_decompress_is_logged_on_entry_and_failure() {
        let messages = Messages::default();
        tracing::subscriber::with_default(messages.clone(), || {
            let _ = compress(b"abc", &ENGLISH);
            let _ = decompress(&[0x80], &ENGLISH);
        });
        let seen = messages.0.lock().unwrap().clone();
        assert!(seen.iter().any(|m| m == "compressing"));
        assert!(seen.iter().any(|m| m == "compressed"));
        assert!(seen.iter().any(|m| m == "decompressing"));
        assert!(seen.iter().any(|m| m == "decompression failed"));
        assert!(!seen.iter().any(|m| m == "decompressed"));
    }

    #[test]
    fn test_codec_binds_model() {
        let codec = Codec::new(StaticByteModel::uniform());
        let blob = codec.compress(b"\x00\x01binary\xFF").unwrap();
        assert_eq!(codec.decompress(&blob).unwrap(), b"\x00\x01binary\xFF");
        let english = Codec::english();
        assert_eq!(english.model().scaling_factor(), ENGLISH.scaling_factor());
    }
}
