use crate::error::ColorFormatError;

/// Determine whether the string is a well-formed hexadecimal color.
///
/// This function returns `true` if the string, after stripping one optional
/// leading `#`, consists of exactly 3 or 6 hexadecimal digits, independent of
/// case. It is a typing-validity gate for UI shells, not a strict conformance
/// check, and hence accepts the shorthand notation as well as the missing
/// hash.
///
/// ```
/// # use contrastcheck::is_hex;
/// assert!(is_hex("#fada5e"));
/// assert!(is_hex("abc"));
/// assert!(!is_hex("#1"));
/// assert!(!is_hex("zzzzzz"));
/// ```
pub fn is_hex(s: &str) -> bool {
    let digits = s.strip_prefix('#').unwrap_or(s);
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parse a 24-bit color in hexadecimal format. If successful, this function
/// returns the three coordinates as unsigned bytes. It transparently handles
/// single-digit coordinates as well as the missing leading `#`.
pub(crate) fn parse_hashed(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 3 && digits.len() != 6 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let factor = s.len() / 3;
        let t = s
            .get(factor * index..factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_coordinate(digits, 0)?;
    let c2 = parse_coordinate(digits, 1)?;
    let c3 = parse_coordinate(digits, 2)?;
    Ok([c1, c2, c3])
}

/// Format the 24-bit color as a hashed hexadecimal string.
///
/// The canonical output form is seven characters, a `#` followed by six
/// lowercase hexadecimal digits, even if the color was parsed from the
/// shorthand notation.
pub(crate) fn format_hashed(
    coordinates: &[u8; 3],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let [r, g, b] = *coordinates;
    f.write_fmt(format_args!("#{:02x}{:02x}{:02x}", r, g, b))
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{is_hex, parse_hashed, ColorFormatError};

    #[test]
    fn test_is_hex() {
        assert!(is_hex("#112233"));
        assert!(is_hex("112233"));
        assert!(is_hex("#abc"));
        assert!(is_hex("abc"));
        assert!(is_hex("ABC"));

        // Partially typed input is not yet convertible.
        assert!(!is_hex(""));
        assert!(!is_hex("#"));
        assert!(!is_hex("#1"));
        assert!(!is_hex("#1122"));
        assert!(!is_hex("#1122334"));
        assert!(!is_hex("zzzzzz"));
        assert!(!is_hex("#11223g"));
    }

    #[test]
    fn test_parse_hashed() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hashed("#123")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hashed("#112233")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hashed("fff")?, [0xff_u8, 0xff, 0xff]);
        assert_eq!(parse_hashed("ffffff")?, [0xff_u8, 0xff, 0xff]);
        assert_eq!(parse_hashed("#FFAA00")?, [0xff_u8, 0xaa, 0x00]);

        assert_eq!(
            parse_hashed("#ff"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            parse_hashed("#1234567"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            parse_hashed("#💩00"),
            Err(ColorFormatError::UnexpectedCharacters)
        );

        let result = parse_hashed("#0g0");
        assert!(matches!(result, Err(ColorFormatError::MalformedHex)));

        let result = parse_hashed("#00000g");
        assert!(matches!(result, Err(ColorFormatError::MalformedHex)));

        Ok(())
    }
}
