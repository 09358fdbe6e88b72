//! Binary Canonical Serialization (BCS) writer.
//!
//! BCS is the wire format Sui uses for transaction data: fixed-width
//! integers are little-endian, sequence lengths and enum variant indices
//! are ULEB128, and byte vectors are length-prefixed.

// ---------------------------------------------------------------------------
// ULEB128
// ---------------------------------------------------------------------------

/// Encode `value` as unsigned LEB128 into a new byte vector.
///
/// Each byte carries 7 bits of payload, lowest group first; the high bit
/// marks that another byte follows.
///
/// # Arguments
/// * `value` - The value to encode.
///
/// # Returns
/// A `Vec<u8>` of 1 to 10 bytes.
pub fn uleb128(value: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(uleb128_len(value));
    let mut v = value;
    loop {
        let byte = (v & 0x7f) as u8;
        v >>= 7;
        if v == 0 {
            out.push(byte);
            return out;
        }
        out.push(byte | 0x80);
    }
}

/// Return the number of bytes `uleb128(value)` produces.
pub fn uleb128_len(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    bits.max(1).div_ceil(7)
}

// ---------------------------------------------------------------------------
// BcsWriter
// ---------------------------------------------------------------------------

/// A buffer-based writer for BCS data.
///
/// Wraps a `Vec<u8>` and provides methods to append fixed-size integers,
/// ULEB128 lengths, and length-prefixed byte vectors.
#[derive(Debug, Default)]
pub struct BcsWriter {
    buf: Vec<u8>,
}

impl BcsWriter {
    /// Create a new empty writer.
    pub fn new() -> Self {
        BcsWriter { buf: Vec::new() }
    }

    /// Create a new writer with a pre-allocated capacity.
    ///
    /// # Arguments
    /// * `capacity` - Initial byte capacity of the internal buffer.
    pub fn with_capacity(capacity: usize) -> Self {
        BcsWriter { buf: Vec::with_capacity(capacity) }
    }

    /// Append raw bytes with no length prefix.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Append a single byte.
    pub fn write_u8(&mut self, val: u8) {
        self.buf.push(val);
    }

    /// Append a bool as `0x00` or `0x01`.
    pub fn write_bool(&mut self, val: bool) {
        self.buf.push(u8::from(val));
    }

    /// Append a little-endian u16 (2 bytes).
    pub fn write_u16_le(&mut self, val: u16) {
        self.buf.extend_from_slice(&val.to_le_bytes());
    }

    /// Append a little-endian u32 (4 bytes).
    pub fn write_u32_le(&mut self, val: u32) {
        self.buf.extend_from_slice(&val.to_le_bytes());
    }

    /// Append a little-endian u64 (8 bytes).
    pub fn write_u64_le(&mut self, val: u64) {
        self.buf.extend_from_slice(&val.to_le_bytes());
    }

    /// Append a little-endian u128 (16 bytes).
    pub fn write_u128_le(&mut self, val: u128) {
        self.buf.extend_from_slice(&val.to_le_bytes());
    }

    /// Append a ULEB128-encoded value (sequence length or variant index).
    pub fn write_uleb128(&mut self, val: u64) {
        self.buf.extend_from_slice(&uleb128(val));
    }

    /// Append a sequence length.
    pub fn write_len(&mut self, len: usize) {
        self.write_uleb128(len as u64);
    }

    /// Append a length-prefixed byte vector (`vector<u8>`).
    pub fn write_byte_vec(&mut self, bytes: &[u8]) {
        self.write_len(bytes.len());
        self.write_bytes(bytes);
    }

    /// Append a length-prefixed UTF-8 string.
    pub fn write_str(&mut self, s: &str) {
        self.write_byte_vec(s.as_bytes());
    }

    /// Return the number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the writer and return the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uleb128_boundaries() {
        assert_eq!(uleb128(0), vec![0x00]);
        assert_eq!(uleb128(1), vec![0x01]);
        assert_eq!(uleb128(127), vec![0x7f]);
        assert_eq!(uleb128(128), vec![0x80, 0x01]);
        assert_eq!(uleb128(300), vec![0xac, 0x02]);
        assert_eq!(uleb128(16384), vec![0x80, 0x80, 0x01]);
        assert_eq!(uleb128(u64::MAX).len(), 10);
    }

    #[test]
    fn test_uleb128_len_matches_encoding() {
        for v in [0u64, 1, 127, 128, 16383, 16384, u32::MAX as u64, u64::MAX] {
            assert_eq!(uleb128_len(v), uleb128(v).len(), "value {}", v);
        }
    }

    #[test]
    fn test_writer_integers_are_little_endian() {
        let mut w = BcsWriter::new();
        w.write_u16_le(0x0102);
        w.write_u64_le(1000);
        assert_eq!(hex::encode(w.into_bytes()), "0201e803000000000000");
    }

    #[test]
    fn test_write_str_is_length_prefixed() {
        let mut w = BcsWriter::with_capacity(8);
        assert!(w.is_empty());
        w.write_str("new");
        assert_eq!(w.len(), 4);
        assert_eq!(w.into_bytes(), vec![3, b'n', b'e', b'w']);
    }
}
