//! The state of a contrast checking session.

use crate::error::ColorFormatError;
use crate::object::{Hsl, Rgb};
use crate::wcag::Assessment;
use crate::Float;

/// The maximum number of saved color pairs.
const HISTORY_LIMIT: usize = 6;

/// The contrast ratio below which the foreground itself becomes illegible and
/// an overlay color takes its place.
const OVERLAY_CONTRAST: Float = 3.0;

/// A saved pair of background and foreground colors.
///
/// Saved pairs store the canonical 7-character hexadecimal form of both
/// colors, which is also the form a shell displays as a swatch.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColorPair {
    pub background: String,
    pub foreground: String,
}

/// The complete state of a contrast checking session.
///
/// A checker owns a background and a foreground color, the contrast ratio and
/// [`Assessment`] derived from them, and a short history of saved color
/// pairs. It performs no I/O: a UI shell feeds it parsed colors and persists
/// whatever state it wants to keep across sessions.
///
/// Every update goes through a reducer method that replaces part of the state
/// and rederives the ratio and assessment, so the derived fields can never go
/// stale:
///
/// ```
/// # use contrastcheck::{Checker, Hsl};
/// let mut checker = Checker::new();
/// checker.set_foreground(Hsl::achromatic(0.95));
/// assert!(!checker.assessment().all_pass());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Checker {
    background: Hsl,
    foreground: Hsl,
    contrast: Float,
    #[cfg_attr(feature = "serde", serde(rename = "level"))]
    assessment: Assessment,
    #[cfg_attr(feature = "serde", serde(rename = "colors"))]
    saved: Vec<ColorPair>,
}

impl Checker {
    /// Create a new checker with the default colors.
    ///
    /// The defaults are a light yellow background and a near-black
    /// foreground, a pairing that passes every conformance level.
    pub fn new() -> Self {
        Self::with_colors(Hsl::new(49.73, 1.0, 0.71), Hsl::achromatic(0.133))
    }

    /// Create a new checker with the given colors and an empty history.
    pub fn with_colors(background: Hsl, foreground: Hsl) -> Self {
        let contrast = Rgb::from(background).contrast_against(&Rgb::from(foreground));

        Self {
            background,
            foreground,
            contrast,
            assessment: Assessment::new(contrast),
            saved: Vec::new(),
        }
    }

    /// Access the background color.
    pub fn background(&self) -> Hsl {
        self.background
    }

    /// Access the foreground color.
    pub fn foreground(&self) -> Hsl {
        self.foreground
    }

    /// Access the contrast ratio between the current colors.
    pub fn contrast(&self) -> Float {
        self.contrast
    }

    /// Access the assessment of the current contrast ratio.
    pub fn assessment(&self) -> &Assessment {
        &self.assessment
    }

    /// Access the saved color pairs, most recently saved first.
    pub fn saved(&self) -> &[ColorPair] {
        &self.saved
    }

    /// Replace the background color and rederive ratio and assessment.
    pub fn set_background(&mut self, color: Hsl) {
        self.background = color;
        self.refresh();
    }

    /// Replace the foreground color and rederive ratio and assessment.
    pub fn set_foreground(&mut self, color: Hsl) {
        self.foreground = color;
        self.refresh();
    }

    /// Exchange the background and foreground colors.
    ///
    /// The contrast ratio is symmetric, so this update rederives the
    /// assessment only for consistency; its outcome cannot change.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.background, &mut self.foreground);
        self.refresh();
    }

    /// Save the current color pair at the front of the history.
    ///
    /// If an identical pair has been saved before, the history remains
    /// unchanged and this method returns `false`. Once the history holds six
    /// pairs, saving another one drops the oldest.
    pub fn save(&mut self) -> bool {
        let pair = ColorPair {
            background: self.background.to_hex(),
            foreground: self.foreground.to_hex(),
        };

        if self.saved.contains(&pair) {
            return false;
        }

        if HISTORY_LIMIT <= self.saved.len() {
            self.saved.pop();
        }
        self.saved.insert(0, pair);
        true
    }

    /// Restore a previously saved color pair as the current colors.
    ///
    /// The pair's hexadecimal strings are parsed back into colors; a
    /// malformed pair leaves the checker unchanged and surfaces the parse
    /// error.
    pub fn restore(&mut self, pair: &ColorPair) -> Result<(), ColorFormatError> {
        let background = pair.background.parse::<Hsl>()?;
        let foreground = pair.foreground.parse::<Hsl>()?;

        self.background = background;
        self.foreground = foreground;
        self.refresh();
        Ok(())
    }

    /// Determine the color for overlaying text onto the background.
    ///
    /// As long as the current contrast ratio is at least 3.0, that simply is
    /// the foreground color. Below that, the foreground itself is illegible
    /// and a high-contrast stand-in takes its place: white on a dark
    /// background, near-black `#222222` on a light one.
    pub fn overlay_color(&self) -> String {
        if self.contrast < OVERLAY_CONTRAST {
            if self.background.is_dark() {
                "#ffffff".to_string()
            } else {
                "#222222".to_string()
            }
        } else {
            self.foreground.to_hex()
        }
    }

    /// Rederive the contrast ratio and assessment from the current colors.
    fn refresh(&mut self) {
        self.contrast = Rgb::from(self.background).contrast_against(&Rgb::from(self.foreground));
        self.assessment = Assessment::new(self.contrast);
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new()
    }
}

// ====================================================================================================================

#[cfg(all(test, feature = "serde"))]
mod serde_test {
    use super::Checker;

    #[test]
    fn test_checker_json() -> Result<(), serde_json::Error> {
        let mut checker = Checker::new();
        assert!(checker.save(), "first save should succeed");

        // The persisted layout uses the original key names.
        let json = serde_json::to_string(&checker)?;
        assert!(json.contains(r#""level":"#), "assessment should persist as level");
        assert!(json.contains(r#""colors":"#), "history should persist as colors");

        let round_trip: Checker = serde_json::from_str(&json)?;
        assert_eq!(round_trip, checker);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{Checker, ColorPair, HISTORY_LIMIT};
    use crate::object::Hsl;
    use crate::wcag::{Level, Status};
    use crate::ColorFormatError;

    #[test]
    fn test_defaults() {
        let checker = Checker::new();

        // The stock pairing comes in just under 12.72.
        assert!((checker.contrast() - 12.72).abs() < 0.01, "unexpected ratio");
        assert!(checker.assessment().all_pass(), "defaults should pass");
        assert!(checker.saved().is_empty(), "history should start empty");
    }

    #[test]
    fn test_reducers_rederive() {
        let mut checker = Checker::new();

        checker.set_foreground(Hsl::achromatic(0.95));
        assert!(checker.contrast() < 1.5, "light on light should not pass");
        assert_eq!(checker.assessment().get(Level::AaLarge), Status::Fail);

        checker.set_foreground(Hsl::achromatic(0.0));
        assert!(checker.assessment().all_pass(), "black on yellow should pass");
    }

    #[test]
    fn test_swap_preserves_contrast() {
        let mut checker = Checker::new();
        let before = checker.contrast();
        let background = checker.background();
        let foreground = checker.foreground();

        checker.swap();

        assert_eq!(checker.background(), foreground);
        assert_eq!(checker.foreground(), background);
        crate::assert_close_enough!(checker.contrast(), before);
    }

    #[test]
    fn test_save_deduplicates() {
        let mut checker = Checker::new();

        assert!(checker.save(), "first save should succeed");
        assert!(!checker.save(), "identical pair should not save twice");
        assert_eq!(checker.saved().len(), 1);
    }

    #[test]
    fn test_save_caps_history() {
        let mut checker = Checker::new();

        for step in 0..=HISTORY_LIMIT {
            checker.set_foreground(Hsl::achromatic(step as crate::Float / 20.0));
            assert!(checker.save(), "distinct pairs should save");
        }

        assert_eq!(checker.saved().len(), HISTORY_LIMIT);

        // The oldest pair dropped off the end.
        let oldest = &checker.saved()[HISTORY_LIMIT - 1];
        assert_eq!(oldest.foreground, Hsl::achromatic(1.0 / 20.0).to_hex());
    }

    #[test]
    fn test_restore() -> Result<(), ColorFormatError> {
        let mut checker = Checker::new();
        checker.restore(&ColorPair {
            background: "#000000".to_string(),
            foreground: "#ffffff".to_string(),
        })?;

        assert!((checker.contrast() - 21.0).abs() < 1e-9, "unexpected ratio");
        assert!(checker.background().is_dark(), "background should be black");

        // A malformed pair leaves the checker untouched.
        let before = checker.clone();
        let result = checker.restore(&ColorPair {
            background: "#zz0000".to_string(),
            foreground: "#ffffff".to_string(),
        });
        assert_eq!(result, Err(ColorFormatError::MalformedHex));
        assert_eq!(checker, before);
        Ok(())
    }

    #[test]
    fn test_overlay_color() {
        let mut checker = Checker::new();

        // Plenty of contrast: the overlay is the foreground itself.
        assert_eq!(checker.overlay_color(), checker.foreground().to_hex());

        // Too little contrast over a light background.
        checker.set_foreground(Hsl::achromatic(0.8));
        assert_eq!(checker.overlay_color(), "#222222");

        // Too little contrast over a dark background.
        checker.set_background(Hsl::achromatic(0.1));
        checker.set_foreground(Hsl::achromatic(0.2));
        assert_eq!(checker.overlay_color(), "#ffffff");
    }
}
