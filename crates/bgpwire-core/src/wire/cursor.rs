use super::error::WireError;

/// Bounds-checked read position over a borrowed byte buffer.
///
/// Every read advances the position by exactly the bytes consumed and
/// fails with [`WireError::TruncatedBuffer`] instead of indexing past
/// the end. A failed read consumes nothing.
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        let bytes = self.read_bytes(1)?;
        Ok(bytes[0])
    }

    pub fn read_u16_be(&mut self) -> Result<u16, WireError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32_be(&mut self) -> Result<u32, WireError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        let end = self
            .pos
            .checked_add(n)
            .ok_or(WireError::TruncatedBuffer {
                needed: n,
                remaining: self.remaining(),
            })?;
        if end > self.buf.len() {
            return Err(WireError::TruncatedBuffer {
                needed: n,
                remaining: self.remaining(),
            });
        }
        let bytes = &self.buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    /// Advance past `n` bytes without returning them.
    pub fn skip(&mut self, n: usize) -> Result<(), WireError> {
        self.read_bytes(n).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;
    use crate::wire::error::WireError;

    #[test]
    fn reads_advance_position() {
        let buf = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        let mut cursor = Cursor::new(&buf);

        assert_eq!(cursor.read_u8().unwrap(), 0x01);
        assert_eq!(cursor.read_u16_be().unwrap(), 0x0203);
        assert_eq!(cursor.read_u32_be().unwrap(), 0x0405_0607);
        assert_eq!(cursor.position(), 7);
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn read_past_end_fails_without_consuming() {
        let buf = [0x01, 0x02];
        let mut cursor = Cursor::new(&buf);
        cursor.read_u8().unwrap();

        let err = cursor.read_u32_be().unwrap_err();
        assert_eq!(
            err,
            WireError::TruncatedBuffer {
                needed: 4,
                remaining: 1
            }
        );
        // Failed read left the position untouched.
        assert_eq!(cursor.remaining(), 1);
        assert_eq!(cursor.read_u8().unwrap(), 0x02);
    }

    #[test]
    fn skip_is_bounds_checked() {
        let buf = [0x01, 0x02, 0x03];
        let mut cursor = Cursor::new(&buf);
        cursor.skip(2).unwrap();
        assert_eq!(cursor.remaining(), 1);
        assert!(cursor.skip(2).is_err());
    }

    #[test]
    fn cursors_over_disjoint_buffers_are_independent() {
        let a = [0xaa];
        let b = [0xbb];
        let mut cursor_a = Cursor::new(&a);
        let mut cursor_b = Cursor::new(&b);
        assert_eq!(cursor_a.read_u8().unwrap(), 0xaa);
        assert_eq!(cursor_b.read_u8().unwrap(), 0xbb);
        assert_eq!(cursor_a.remaining(), 0);
        assert_eq!(cursor_b.remaining(), 0);
    }
}
