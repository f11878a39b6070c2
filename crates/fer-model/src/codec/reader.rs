//! Little-endian byte reader for the holiday wire format.
//!
//! Every read is bounds-checked and fails with
//! [`Error::CorruptData`] instead of panicking, so truncated or garbled
//! input can never take down the caller.

use fer_core::errors::{Error, Result};

/// Cursor over a byte slice.
#[derive(Debug)]
pub(crate) struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        ByteReader { buf, pos: 0 }
    }

    /// Take the next `n` bytes.
    pub(crate) fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.buf.len())
            .ok_or_else(|| Error::CorruptData("unexpected end of data".to_string()))?;
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    /// Strict boolean: only 0 and 1 are acceptable encodings.
    pub(crate) fn read_bool(&mut self) -> Result<bool> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(Error::CorruptData(format!("invalid boolean byte {other}"))),
        }
    }

    pub(crate) fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes(bytes.try_into().expect("slice is 4 bytes")))
    }

    pub(crate) fn read_i32(&mut self) -> Result<i32> {
        let bytes = self.take(4)?;
        Ok(i32::from_le_bytes(bytes.try_into().expect("slice is 4 bytes")))
    }

    pub(crate) fn read_i64(&mut self) -> Result<i64> {
        let bytes = self.take(8)?;
        Ok(i64::from_le_bytes(bytes.try_into().expect("slice is 8 bytes")))
    }

    /// Length-prefixed UTF-8 string.
    pub(crate) fn read_string(&mut self) -> Result<String> {
        let len = self.read_u32()? as usize;
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec())
            .map_err(|_| Error::CorruptData("string field is not valid UTF-8".to_string()))
    }

    /// Presence byte followed by the value when present.
    pub(crate) fn read_opt_i32(&mut self) -> Result<Option<i32>> {
        if self.read_bool()? {
            Ok(Some(self.read_i32()?))
        } else {
            Ok(None)
        }
    }

    /// Fail unless the whole input has been consumed.
    pub(crate) fn finish(&self) -> Result<()> {
        if self.pos != self.buf.len() {
            return Err(Error::CorruptData(format!(
                "{} trailing bytes after the holiday record",
                self.buf.len() - self.pos
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::writer::ByteWriter;

    #[test]
    fn primitive_roundtrip() {
        let mut w = ByteWriter::new();
        w.put_u8(7);
        w.put_bool(true);
        w.put_i32(-42);
        w.put_i64(1 << 40);
        w.put_string("Grundlovsdag");
        w.put_opt_i32(None);
        w.put_opt_i32(Some(1986));
        let bytes = w.into_bytes();

        let mut r = ByteReader::new(&bytes);
        assert_eq!(r.read_u8().unwrap(), 7);
        assert!(r.read_bool().unwrap());
        assert_eq!(r.read_i32().unwrap(), -42);
        assert_eq!(r.read_i64().unwrap(), 1 << 40);
        assert_eq!(r.read_string().unwrap(), "Grundlovsdag");
        assert_eq!(r.read_opt_i32().unwrap(), None);
        assert_eq!(r.read_opt_i32().unwrap(), Some(1986));
        assert!(r.finish().is_ok());
    }

    #[test]
    fn truncation_detected() {
        let mut w = ByteWriter::new();
        w.put_i32(1);
        let bytes = w.into_bytes();
        let mut r = ByteReader::new(&bytes[..2]);
        assert!(matches!(r.read_i32(), Err(Error::CorruptData(_))));
    }

    #[test]
    fn sloppy_boolean_rejected() {
        let mut r = ByteReader::new(&[2]);
        assert!(matches!(r.read_bool(), Err(Error::CorruptData(_))));
    }

    #[test]
    fn trailing_bytes_rejected() {
        let r = ByteReader::new(&[0]);
        assert!(matches!(r.finish(), Err(Error::CorruptData(_))));
    }
}
