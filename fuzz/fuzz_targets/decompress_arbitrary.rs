#![no_main]
use acstr::{decompress, Error, ENGLISH};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|blob: &[u8]| {
    // Bound the work per input.
    if blob.len() > 4096 {
        return;
    }
    match decompress(blob, &ENGLISH) {
        Ok(_) => {}
        Err(Error::EndOfStream | Error::MalformedVarInt) => {}
        Err(e) => panic!("unexpected error: {e}"),
    }
});
