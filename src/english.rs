//! Byte frequencies of typical English prose.
//!
//! Occurrence counts of each byte value in the Brown Corpus. Bytes that never
//! occur there (most control codes and everything above `0x7F`) are zero in
//! the raw table; [`StaticByteModel`](crate::StaticByteModel) lifts them to one
//! so that any input stays encodable.

/// Raw Brown Corpus byte counts, indexed by byte value.
#[rustfmt::skip]
pub const BROWN_CORPUS_FREQUENCIES: [u32; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 13580, 89324, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1105892, 1597, 0, 0, 579, 147, 166, 28683, 2464, 2495, 173, 1, 58982, 15401, 55578, 236,
    4458, 5182, 2621, 1732, 1452, 2144, 1451, 1065, 1265, 2125, 1987, 5566, 0, 0, 0, 4694,
    0, 11385, 6527, 7776, 4080, 3166, 4263, 3444, 8015, 12543, 3008, 1494, 3252, 7455, 3798, 3267,
    5162, 241, 3663, 10322, 15568, 1640, 1055, 6003, 56, 1610, 122, 2, 0, 2, 0, 0,
    17674, 371418, 66277, 139434, 184215, 589980, 106409, 89140, 249219, 333212, 4748, 29685, 192894, 113186, 332908, 357020,
    90770, 4862, 287337, 300431, 423392, 127159, 46206, 83137, 9379, 80164, 4431, 16, 0, 16, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];
