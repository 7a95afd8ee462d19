//! Small helpers shared by the decoders

/// Decode 1 to 4 big-endian bytes as an unsigned integer.
///
/// Returns `None` for an empty slice or one longer than four bytes.
pub fn unsigned_from_be_bytes(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() || bytes.len() > 4 {
        return None;
    }

    Some(
        bytes
            .iter()
            .fold(0u32, |acc, byte| (acc << 8) | u32::from(*byte)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_from_be_bytes() {
        assert_eq!(unsigned_from_be_bytes(&[0x2A]), Some(42));
        assert_eq!(unsigned_from_be_bytes(&[0x01, 0x00]), Some(256));
        assert_eq!(unsigned_from_be_bytes(&[0x01, 0x02, 0x03]), Some(0x010203));
        assert_eq!(
            unsigned_from_be_bytes(&[0xFF, 0xFF, 0xFF, 0xFF]),
            Some(u32::MAX)
        );
    }

    #[test]
    fn test_unsigned_from_be_bytes_rejects_bad_widths() {
        assert_eq!(unsigned_from_be_bytes(&[]), None);
        assert_eq!(unsigned_from_be_bytes(&[0, 0, 0, 0, 1]), None);
    }
}
