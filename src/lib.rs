//! # Bitmap RLE Encoding Scheme
//!
//! Lossless run-length coding for binary rasters that contain long runs of
//! identical bits.
//!
//! ```text
//!  input bits   0000 0000 0000 1111 1000 00
//!                │            │       │
//!                ▼            ▼       ▼
//!  records      [12]         [5]     [5]
//!                ▼
//!  encoded      0000 1100 0000 0101 0000 0101
//! ```
//!
//! Every record is exactly 8 bits and holds one run length in `0..=255`.
//! The first record always describes a run of `0` bits; the described
//! value flips after every record, zero-length records included. A stream
//! that starts with a `1` bit therefore begins with a zero-length record.
//!
//! A run longer than 255 does not fit in one record. It is split with a
//! continuation marker, a maximal record followed by a zero-length one:
//!
//! ```text
//!  300 zero bits  ->  [255] [0] [45]
//! ```
//!
//! The zero-length record flips the described value away and straight
//! back, so the decoder keeps emitting the same bit.
//!
//! The encoding carries no header and no payload length; expanding
//! reproduces exactly as many bits as the records sum to.
//!
//! ```
//! use bitmaprle::{compress, expand, BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! let raster = [0x00u8, 0x00, 0xFF, 0xFF, 0x00];
//!
//! let mut encoded = Vec::new();
//! compress(
//!     &mut BitReader::new(Cursor::new(&raster[..])),
//!     &mut BitWriter::new(&mut encoded),
//! )
//! .unwrap();
//! assert_eq!(encoded, [16, 16, 8]);
//!
//! let mut decoded = Vec::new();
//! expand(
//!     &mut BitReader::new(Cursor::new(&encoded[..])),
//!     &mut BitWriter::new(&mut decoded),
//! )
//! .unwrap();
//! assert_eq!(decoded, raster);
//! ```

#[macro_use]
extern crate log;

mod bitio;
pub use bitio::{BitRead, BitReader, BitWrite, BitWriter};

mod compress;
pub use compress::compress;

mod expand;
pub use expand::expand;

/// width in bits of one run-length record
pub const RUN_WIDTH: usize = 8;
/// longest run a single record can describe
pub const MAX_RUN: u32 = (1 << RUN_WIDTH) - 1;

/// byte-aligned payloads and their exact encodings, both hex
#[cfg(test)]
pub(crate) const TEST_VECTOR: [(&str, &str); 18] = [
    ("", ""),
    ("00", "08"),
    ("ff", "0008"),
    ("0f", "0404"),
    ("f0", "000404"),
    ("80", "000107"),
    ("01", "0701"),
    ("7e", "010601"),
    ("aa", "000101010101010101"),
    ("55", "0101010101010101"),
    ("00ff00", "080808"),
    ("0f00ff", "04040808"),
    ("0000000000", "28"),
    ("ffffffffff", "0028"),
    ("ffffc0", "001206"),
    ("00000000000000000000000000000000ff", "8008"),
    (
        "0000000000000000000000000000000000000000000000000000000000000000",
        "ff0001",
    ),
    (
        "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        "00ff0001",
    ),
];
