//! Utility module with contrastcheck's errors.

/// An erroneous color format.
///
/// Parsing a hexadecimal color may fail in one of two ways, with unexpected
/// characters or malformed hexadecimal digits. Interactively incomplete input,
/// say, a user who has typed `#1` so far, produces an error value rather than
/// a panic, so that a UI shell can keep the previous valid state and move on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format with an unexpected number of characters. For example,
    /// `#00` is missing a hexadecimal digit, whereas `#1234567` has one too
    /// many. Only 3 and 6 digits after the optional `#` are well-formed.
    UnexpectedCharacters,

    /// A color format that has a malformed hexadecimal coordinate. For
    /// example, `#efg` has a malformed third coordinate.
    MalformedHex,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Self::UnexpectedCharacters => {
                f.write_str("hex color should have 3 or 6 digits after the optional '#'")
            }
            Self::MalformedHex => {
                f.write_str("hex color should contain only hexadecimal digits")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}
