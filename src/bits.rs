//! MSB-first bit packing over `std::io` readers and writers.

use std::io::{self, Read, Write};

/// Packs bits into bytes, most significant bit first.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    inner: W,
    byte: u8,
    used: u8,
    bytes_written: u64,
}

impl<W: Write> BitWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            byte: 0,
            used: 0,
            bytes_written: 0,
        }
    }

    pub fn write_bit(&mut self, bit: bool) -> io::Result<()> {
        self.byte = (self.byte << 1) | bit as u8;
        self.used += 1;
        if self.used == 8 {
            self.inner.write_all(&[self.byte])?;
            self.bytes_written += 1;
            self.byte = 0;
            self.used = 0;
        }
        Ok(())
    }

    pub fn write_bits(&mut self, bits: &[bool]) -> io::Result<()> {
        for &bit in bits {
            self.write_bit(bit)?;
        }
        Ok(())
    }

    /// Write all eight bits of `value`, most significant first.
    pub fn write_u8(&mut self, value: u8) -> io::Result<()> {
        for i in (0..8).rev() {
            self.write_bit((value >> i) & 1 != 0)?;
        }
        Ok(())
    }

    /// Bits sitting in the partially filled byte.
    pub fn pending_bits(&self) -> u8 {
        self.used
    }

    /// Total bits accepted so far.
    pub fn bits_written(&self) -> u64 {
        self.bytes_written * 8 + self.used as u64
    }

    /// Fill the partial byte (if any) with `pad`, write it and hand back the
    /// underlying writer.
    pub fn finish(mut self, pad: bool) -> io::Result<W> {
        while self.used != 0 {
            self.write_bit(pad)?;
        }
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Reads bits from a byte source, most significant bit first.
#[derive(Debug, Clone)]
pub struct BitReader<R: Read> {
    inner: R,
    byte: u8,
    remaining: u8,
    pos: u64,
}

impl<'a> BitReader<&'a [u8]> {
    pub fn from_slice(data: &'a [u8]) -> Self {
        Self::new(data)
    }
}

impl<R: Read> BitReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            byte: 0,
            remaining: 0,
            pos: 0,
        }
    }

    /// Next bit, or `None` once the source is exhausted.
    pub fn read_bit(&mut self) -> io::Result<Option<bool>> {
        if self.remaining == 0 {
            let mut buf = [0u8; 1];
            loop {
                match self.inner.read(&mut buf) {
                    Ok(0) => return Ok(None),
                    Ok(_) => break,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                }
            }
            self.byte = buf[0];
            self.remaining = 8;
        }
        self.remaining -= 1;
        self.pos += 1;
        Ok(Some((self.byte >> self.remaining) & 1 != 0))
    }

    /// Next eight bits as a byte, or `None` if fewer than eight remain.
    pub fn read_u8(&mut self) -> io::Result<Option<u8>> {
        let mut value = 0u8;
        for _ in 0..8 {
            match self.read_bit()? {
                Some(bit) => value = (value << 1) | bit as u8,
                None => return Ok(None),
            }
        }
        Ok(Some(value))
    }

    pub fn bits_read(&self) -> u64 {
        self.pos
    }
}
