/// The digest handed to [`truncate`](crate::truncate) can't be truncated
#[derive(Debug, Eq, PartialEq)]
pub enum TruncationError {
    /// The digest was empty, so no offset can be derived from its last byte
    Empty,
    /// The 4-byte window at the derived offset runs past the end of the digest.
    /// Holds the derived offset and the digest length
    OutOfBounds(usize, usize),
}

impl std::error::Error for TruncationError {}

impl std::fmt::Display for TruncationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TruncationError::Empty => write!(
                f,
                "Digest is empty, no truncation offset can be derived from its last byte"
            ),
            TruncationError::OutOfBounds(offset, len) => write!(
                f,
                "Digest of {} bytes is too short to read 4 bytes at offset {}. {} bytes are needed",
                len,
                offset,
                offset + 4,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::TruncationError;

    #[test]
    fn empty() {
        let error = TruncationError::Empty;
        assert_eq!(
            error.to_string(),
            "Digest is empty, no truncation offset can be derived from its last byte".to_string()
        )
    }

    #[test]
    fn out_of_bounds() {
        let error = TruncationError::OutOfBounds(13, 16);
        assert_eq!(
            error.to_string(),
            "Digest of 16 bytes is too short to read 4 bytes at offset 13. 17 bytes are needed"
                .to_string()
        )
    }
}
