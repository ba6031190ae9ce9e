use acstr::arithmetic::{Decoder, Encoder};
use acstr::bitio::{BitReader, BitWriter};
use acstr::{compress, decompress, FrequencyModel, StaticByteModel, ENGLISH};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SAMPLE: &str = "During the winter of 1927-28 officials of the Federal government made a \
strange and secret investigation of certain conditions in the ancient Massachusetts seaport \
of Innsmouth. The public first learned of it in February, when a vast series of raids and \
arrests occurred. ";

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    for repeat in [1usize, 16] {
        let input = SAMPLE.repeat(repeat).into_bytes();
        let blob = compress(&input, &ENGLISH).unwrap();
        group.throughput(Throughput::Bytes(input.len() as u64));

        group.bench_with_input(BenchmarkId::new("compress", input.len()), &input, |b, input| {
            b.iter(|| compress(input, &ENGLISH).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("decompress", input.len()), &blob, |b, blob| {
            b.iter(|| decompress(blob, &ENGLISH).unwrap())
        });
    }
    group.finish();
}

fn bench_coder_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("coder_uniform");
    // Dyadic intervals: no underflow, exactly eight bits per symbol.
    let model = StaticByteModel::uniform();
    let input: Vec<u8> = (0..4096).map(|i| (i * 7 % 256) as u8).collect();
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("encode", |b| {
        b.iter(|| {
            let mut sink = BitWriter::new();
            let mut encoder = Encoder::new(&mut sink);
            for &byte in &input {
                encoder
                    .encode(model.interval(byte).unwrap(), model.scaling_factor())
                    .unwrap();
            }
            encoder.finalize();
            sink.into_bytes()
        })
    });

    let mut sink = BitWriter::new();
    let mut encoder = Encoder::new(&mut sink);
    for &byte in &input {
        encoder.encode_symbol(&model, byte).unwrap();
    }
    encoder.finalize();
    let bytes = sink.into_bytes();

    group.bench_function("decode", |b| {
        b.iter(|| {
            let mut decoder = Decoder::new(BitReader::new(&bytes)).unwrap();
            for _ in 0..input.len() {
                decoder.decode(&model).unwrap();
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_codec, bench_coder_uniform);
criterion_main!(benches);
