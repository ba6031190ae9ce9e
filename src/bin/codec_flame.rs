use acstr::{compress, decompress, ENGLISH};

fn main() {
    let input = "The quick brown fox jumps over the lazy dog. ".repeat(200);

    for _ in 0..1000 {
        let blob = compress(input.as_bytes(), &ENGLISH).unwrap();
        let output = decompress(&blob, &ENGLISH).unwrap();
        assert_eq!(output.len(), input.len());
    }
}
