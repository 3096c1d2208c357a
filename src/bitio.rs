use std::io::{self, Read, Write};

/// Capability to read a stream one bit at a time.
///
/// Reading past the end of the stream fails with
/// [`io::ErrorKind::UnexpectedEof`]; callers that check [`is_empty`]
/// before every read never see it.
///
/// [`is_empty`]: BitRead::is_empty
pub trait BitRead {
    /// Returns true when no further bit can be produced.
    fn is_empty(&mut self) -> io::Result<bool>;

    /// Reads a single bit from the stream.
    fn read_bit(&mut self) -> io::Result<bool>;

    /// Reads `count` bits as an unsigned integer, first bit in the most
    /// significant position.
    ///
    /// # Panics
    ///
    /// Panics if `count > 32`.
    fn read_bits(&mut self, count: usize) -> io::Result<u32>;
}

/// Capability to write a stream one bit at a time.
pub trait BitWrite {
    /// Writes a single bit to the stream.
    fn write_bit(&mut self, bit: bool) -> io::Result<()>;

    /// Writes the low `count` bits of `value`, most significant first.
    ///
    /// # Panics
    ///
    /// Panics if `count > 32`.
    fn write_bits(&mut self, value: u32, count: usize) -> io::Result<()>;

    /// Zero-pads any partially filled byte and flushes the underlying
    /// stream. Calling it a second time only re-flushes.
    fn close(&mut self) -> io::Result<()>;
}

/// Adapts an input stream to bit-level reads, MSB-first within each byte.
///
/// Holds one byte of lookahead so exhaustion is known before a read is
/// attempted.
///
/// # Example
/// ```
/// # use bitmaprle::{BitRead, BitReader};
/// let mut reader = BitReader::new(std::io::Cursor::new([0xabu8, 0xcd]));
/// assert_eq!(reader.read_bits(4).ok(), Some(0xa));
/// assert_eq!(reader.read_bits(12).ok(), Some(0xbcd));
/// assert_eq!(reader.is_empty().ok(), Some(true));
/// ```
pub struct BitReader<R> {
    reader: R,
    buffer: u8,
    remaining: u8,
    exhausted: bool,
}

impl<R: Read> BitReader<R> {
    pub fn new(reader: R) -> BitReader<R> {
        BitReader {
            reader,
            buffer: 0,
            remaining: 0,
            exhausted: false,
        }
    }

    fn refill(&mut self) -> io::Result<()> {
        let mut byte = [0u8; 1];
        match self.reader.read_exact(&mut byte) {
            Ok(()) => {
                self.buffer = byte[0];
                self.remaining = 8;
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                self.exhausted = true;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

impl<R: Read> BitRead for BitReader<R> {
    fn is_empty(&mut self) -> io::Result<bool> {
        if self.remaining == 0 && !self.exhausted {
            self.refill()?;
        }
        Ok(self.remaining == 0)
    }

    fn read_bit(&mut self) -> io::Result<bool> {
        if self.is_empty()? {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "bit stream exhausted",
            ));
        }
        self.remaining -= 1;
        Ok((self.buffer >> self.remaining) & 1 == 1)
    }

    fn read_bits(&mut self, count: usize) -> io::Result<u32> {
        assert!(count <= 32);
        let mut value = 0;
        for _ in 0..count {
            value = (value << 1) | self.read_bit()? as u32;
        }
        Ok(value)
    }
}

/// Adapts an output stream to bit-level writes, MSB-first within each
/// byte. A partially filled byte stays buffered until [`close`] pads it
/// with zeros.
///
/// [`close`]: BitWrite::close
///
/// # Example
/// ```
/// # use bitmaprle::{BitWrite, BitWriter};
/// let mut out = Vec::new();
/// let mut writer = BitWriter::new(&mut out);
/// writer.write_bits(0xabc, 12).unwrap();
/// writer.write_bits(0xd, 4).unwrap();
/// writer.close().unwrap();
/// assert_eq!(out, [0xab, 0xcd]);
/// ```
pub struct BitWriter<W> {
    writer: W,
    buffer: u8,
    filled: u8,
}

impl<W: Write> BitWriter<W> {
    pub fn new(writer: W) -> BitWriter<W> {
        BitWriter {
            writer,
            buffer: 0,
            filled: 0,
        }
    }
}

impl<W: Write> BitWrite for BitWriter<W> {
    fn write_bit(&mut self, bit: bool) -> io::Result<()> {
        self.buffer = (self.buffer << 1) | bit as u8;
        self.filled += 1;
        if self.filled == 8 {
            self.writer.write_all(&[self.buffer])?;
            self.buffer = 0;
            self.filled = 0;
        }
        Ok(())
    }

    fn write_bits(&mut self, value: u32, count: usize) -> io::Result<()> {
        assert!(count <= 32);
        for shift in (0..count).rev() {
            self.write_bit((value >> shift) & 1 == 1)?;
        }
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        while self.filled != 0 {
            self.write_bit(false)?;
        }
        self.writer.flush()
    }
}

/// In-memory adapter over a plain bit vector, for payloads whose length
/// is not a multiple of 8.
#[cfg(test)]
pub(crate) struct BitBuf {
    pub bits: Vec<bool>,
    pos: usize,
}

#[cfg(test)]
impl BitBuf {
    pub fn new() -> BitBuf {
        BitBuf {
            bits: Vec::new(),
            pos: 0,
        }
    }

    pub fn from_bits(bits: Vec<bool>) -> BitBuf {
        BitBuf { bits, pos: 0 }
    }
}

#[cfg(test)]
impl BitRead for BitBuf {
    fn is_empty(&mut self) -> io::Result<bool> {
        Ok(self.pos >= self.bits.len())
    }

    fn read_bit(&mut self) -> io::Result<bool> {
        match self.bits.get(self.pos) {
            Some(&bit) => {
                self.pos += 1;
                Ok(bit)
            }
            None => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "bit buffer exhausted",
            )),
        }
    }

    fn read_bits(&mut self, count: usize) -> io::Result<u32> {
        assert!(count <= 32);
        let mut value = 0;
        for _ in 0..count {
            value = (value << 1) | self.read_bit()? as u32;
        }
        Ok(value)
    }
}

#[cfg(test)]
impl BitWrite for BitBuf {
    fn write_bit(&mut self, bit: bool) -> io::Result<()> {
        self.bits.push(bit);
        Ok(())
    }

    fn write_bits(&mut self, value: u32, count: usize) -> io::Result<()> {
        assert!(count <= 32);
        for shift in (0..count).rev() {
            self.bits.push((value >> shift) & 1 == 1);
        }
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}
