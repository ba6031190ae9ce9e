#![no_main]
use acstr::{compress, decompress, StaticByteModel, ENGLISH};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<u8>, bool)| {
    let (input, use_uniform) = data;

    let uniform = StaticByteModel::uniform();
    let model = if use_uniform { &uniform } else { &ENGLISH };

    let blob = compress(&input, model).unwrap();
    if input.is_empty() {
        assert!(blob.is_empty());
    }
    let output = decompress(&blob, model).unwrap();

    assert_eq!(input, output);
});
