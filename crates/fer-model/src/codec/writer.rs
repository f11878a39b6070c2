//! Little-endian byte writer for the holiday wire format.

/// Appends primitive fields to a growing byte buffer. All multi-byte values
/// are little-endian; strings are length-prefixed UTF-8.
#[derive(Debug, Default)]
pub(crate) struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    pub(crate) fn new() -> Self {
        ByteWriter::default()
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub(crate) fn put_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub(crate) fn put_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub(crate) fn put_bool(&mut self, value: bool) {
        self.buf.push(value as u8);
    }

    pub(crate) fn put_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub(crate) fn put_i32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub(crate) fn put_i64(&mut self, value: i64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Length-prefixed UTF-8 string.
    pub(crate) fn put_string(&mut self, value: &str) {
        self.put_u32(value.len() as u32);
        self.buf.extend_from_slice(value.as_bytes());
    }

    /// Presence byte followed by the value when present.
    pub(crate) fn put_opt_i32(&mut self, value: Option<i32>) {
        match value {
            Some(v) => {
                self.put_bool(true);
                self.put_i32(v);
            }
            None => self.put_bool(false),
        }
    }
}
