//! Unpadded base32 encoding per [rfc-4648](https://tools.ietf.org/html/rfc4648#section-6)

/// The standard [rfc-4648](https://tools.ietf.org/html/rfc4648#section-6) alphabet, index 0 is `A`, index 31 is `7`
const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Encodes bytes as uppercase base32 per [rfc-4648](https://tools.ietf.org/html/rfc4648#section-6), without `=` padding
///
/// This is the encoding authenticator apps expect for a shared secret, which
/// might be useful when users want to manually add the secret to their
/// authenticator. Input bits are consumed most-significant-first in groups of
/// 5; a final partial group is padded with zero bits on the right. The output
/// is always exactly `ceil(8 * data.len() / 5)` characters long and never
/// contains a padding character.
///
/// ```rust
/// use otp_primitives::encode;
///
/// assert_eq!(encode(b"foobar"), "MZXW6YTBOI");
/// assert_eq!(encode(&[]), "");
/// ```
pub fn encode(data: &[u8]) -> String {
    let mut output = String::with_capacity((data.len() * 8 + 4) / 5);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for &byte in data {
        buffer = (buffer << 8) | u32::from(byte);
        bits += 8;

        while bits >= 5 {
            bits -= 5;
            output.push(ALPHABET[((buffer >> bits) & 31) as usize] as char);
        }
    }

    // 1 to 4 bits left over; left-align them in a final 5-bit group
    if bits > 0 {
        output.push(ALPHABET[((buffer << (5 - bits)) & 31) as usize] as char);
    }

    output
}
