use aoc_core::model::{BitGrid, Tracker};

use super::{ByteReader, ByteWriter, DecodeError};

/// Serialize a tracker: year count, then every language in registry order.
#[must_use]
pub fn encode(tracker: &Tracker) -> Vec<u8> {
    let mut writer = ByteWriter::new();
    writer.write_u8(tracker.year_count());
    for language in tracker.registry() {
        let name = language.name().as_str().as_bytes();
        // LanguageName guarantees 1..=255 bytes.
        writer.write_u8(name.len() as u8);
        writer.write_bytes(name);
        writer.write_u64_array(language.days().words());
    }
    writer.into_bytes()
}

/// Rebuild a tracker from a data file.
///
/// Records may appear in any order; the registry re-sorts them.
///
/// # Errors
///
/// Returns `DecodeError` for empty or truncated input, invalid names, and
/// names the registry rejects (such as case-insensitive duplicates).
pub fn decode(bytes: &[u8]) -> Result<Tracker, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }
    let mut reader = ByteReader::new(bytes);
    let year_count = reader.read_u8("year count")?;
    let mut tracker = Tracker::new(year_count);

    while !reader.is_exhausted() {
        let offset = bytes.len() - reader.remaining();
        let len = reader.read_u8("name length")?;
        if len == 0 {
            return Err(DecodeError::EmptyName { offset });
        }
        let raw = reader.read_bytes(usize::from(len), "language name")?;
        let name = std::str::from_utf8(raw).map_err(|_| DecodeError::InvalidName { offset })?;
        let words = reader.read_u64_array(usize::from(year_count), "year words")?;
        tracker.restore_language(name, BitGrid::from_words(words))?;
    }

    Ok(tracker)
}
