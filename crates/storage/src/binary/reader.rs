use super::DecodeError;

/// Cursor over an in-memory data file.
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> ByteReader<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// # Errors
    ///
    /// Returns `DecodeError::UnexpectedEnd` when no byte is left.
    pub fn read_u8(&mut self, what: &'static str) -> Result<u8, DecodeError> {
        Ok(self.read_bytes(1, what)?[0])
    }

    /// # Errors
    ///
    /// Returns `DecodeError::UnexpectedEnd` when fewer than `len` bytes are left.
    pub fn read_bytes(&mut self, len: usize, what: &'static str) -> Result<&'a [u8], DecodeError> {
        if len > self.remaining() {
            return Err(DecodeError::UnexpectedEnd {
                what,
                offset: self.position,
            });
        }
        let start = self.position;
        self.position += len;
        Ok(&self.bytes[start..self.position])
    }

    /// Reads `count` little-endian 64-bit words.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::UnexpectedEnd` when fewer than `count` words are left.
    pub fn read_u64_array(
        &mut self,
        count: usize,
        what: &'static str,
    ) -> Result<Vec<u64>, DecodeError> {
        let len = count
            .checked_mul(size_of::<u64>())
            .ok_or(DecodeError::UnexpectedEnd {
                what,
                offset: self.position,
            })?;
        let raw = self.read_bytes(len, what)?;
        Ok(raw
            .chunks_exact(size_of::<u64>())
            .map(|chunk| {
                let mut word = [0u8; 8];
                word.copy_from_slice(chunk);
                u64::from_le_bytes(word)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_in_order_and_reports_offsets() {
        let data = [3u8, b'a', b'b', 1, 0, 0, 0, 0, 0, 0, 0];
        let mut reader = ByteReader::new(&data);
        assert_eq!(reader.read_u8("count").unwrap(), 3);
        assert_eq!(reader.read_bytes(2, "name").unwrap(), b"ab");
        assert_eq!(reader.read_u64_array(1, "words").unwrap(), vec![1]);
        assert!(reader.is_exhausted());
        assert_eq!(
            reader.read_u8("count"),
            Err(DecodeError::UnexpectedEnd {
                what: "count",
                offset: 11
            })
        );
    }

    #[test]
    fn short_word_array_is_rejected_without_consuming() {
        let data = [0u8; 12];
        let mut reader = ByteReader::new(&data);
        assert!(reader.read_u64_array(2, "words").is_err());
        assert_eq!(reader.remaining(), 12);
    }
}
