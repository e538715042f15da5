//! Dynamic truncation of an HMAC digest per [rfc-4226](https://tools.ietf.org/html/rfc4226#section-5.3)

use crate::TruncationError;

/// Extracts a 31-bit unsigned integer from an HMAC digest per [rfc-4226](https://tools.ietf.org/html/rfc4226#section-5.3)
///
/// The low nibble of the last digest byte selects an offset in `0..=15`; the 4
/// bytes starting there are read as a big-endian integer with the top bit
/// masked off, so the result always fits in 31 bits and can never be mistaken
/// for a negative number. The caller is expected to reduce the result modulo
/// `10^digits` to obtain a decimal code.
///
/// The digest is typically a 20, 32 or 64 byte HMAC-SHA1/SHA256/SHA512 output;
/// any length works as long as the selected window fits. Since the offset can
/// reach 15, digests of at least 19 bytes always do.
///
/// # Errors
///
/// Will return an error if the digest is empty, or if the 4-byte window at the
/// derived offset would run past the end of the digest. A digest that short is
/// never a valid HMAC output, and zero-padding it would silently produce a
/// wrong code.
///
/// ```rust
/// use otp_primitives::truncate;
///
/// // RFC 4226 Appendix D, counter 0
/// let digest = [
///     0xcc, 0x93, 0xcf, 0x18, 0x50, 0x8d, 0x94, 0x93, 0x4c, 0x64, 0xb6, 0x5d, 0x8b, 0xa7,
///     0x66, 0x7f, 0xb7, 0xcd, 0xe4, 0xb0,
/// ];
/// assert_eq!(truncate(&digest), Ok(1284755224));
/// ```
pub fn truncate(digest: &[u8]) -> Result<u32, TruncationError> {
    let last = digest.last().ok_or(TruncationError::Empty)?;
    let offset = (last & 15) as usize;
    let window = digest
        .get(offset..offset + 4)
        .ok_or(TruncationError::OutOfBounds(offset, digest.len()))?;
    Ok(u32::from_be_bytes(window.try_into().unwrap()) & 0x7fff_ffff)
}
