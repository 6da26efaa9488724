/// Append-only buffer for building a data file in memory.
#[derive(Debug, Default)]
pub struct ByteWriter {
    bytes: Vec<u8>,
}

impl ByteWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_u8(&mut self, value: u8) {
        self.bytes.push(value);
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Writes each word little-endian.
    pub fn write_u64_array(&mut self, words: &[u64]) {
        self.bytes.reserve(words.len() * size_of::<u64>());
        for word in words {
            self.bytes.extend_from_slice(&word.to_le_bytes());
        }
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_little_endian() {
        let mut writer = ByteWriter::new();
        writer.write_u8(2);
        writer.write_bytes(b"Go");
        writer.write_u64_array(&[0x0102]);
        assert_eq!(
            writer.into_bytes(),
            vec![2, b'G', b'o', 0x02, 0x01, 0, 0, 0, 0, 0, 0]
        );
    }
}
