//! # Contrastcheck
//!
//! Contrastcheck determines whether a foreground and a background color read
//! well together, as codified by the [Web Content Accessibility
//! Guidelines](https://www.w3.org/TR/WCAG21/#contrast-minimum). It is a pure
//! computation library: every function is synchronous, allocation-light, and
//! free of I/O, so a UI shell can invoke it on every keystroke without
//! coordination.
//!
//!
//! ## 1. Overview
//!
//! Contrastcheck's main abstractions are:
//!
//!   * [`Rgb`] implements **24-bit sRGB colors**, the representation users
//!     type and copy as hashed hexadecimal strings. Its methods expose the
//!     [relative luminance](Rgb::luminance) and [contrast
//!     ratio](Rgb::contrast_against) computations.
//!   * [`Hsl`] implements **hue/saturation/lightness colors**, the
//!     representation a picker with separate channel controls naturally
//!     animates between. Achromatic colors carry an explicit [undefined
//!     hue](Hsl::hue) instead of a stale angle.
//!   * [`Assessment`] maps a contrast ratio to a [`Status`] for each WCAG
//!     [`Level`], i.e., AA and AAA at normal and large text sizes.
//!   * [`Checker`] combines the above into the state of a contrast checking
//!     session, updated through pure reducer methods and including a short
//!     history of saved color pairs.
//!
//! Data flows one way: two colors in, their hex/RGB forms as needed, one
//! luminance per color, one ratio, one assessment out.
//!
//!
//! ## 2. One-Two-Three: Contrast!
//!
//! Checking a color pair takes three steps. First, parse the colors:
//!
//! ```
//! # use contrastcheck::{ColorFormatError, Rgb};
//! # fn main() -> Result<(), ColorFormatError> {
//! let background: Rgb = "#fada5e".parse()?;
//! let foreground: Rgb = "#222".parse()?;
//! # Ok(())
//! # }
//! ```
//!
//! Second, compute the contrast ratio:
//!
//! ```
//! # use contrastcheck::{ColorFormatError, Rgb};
//! # fn main() -> Result<(), ColorFormatError> {
//! # let background: Rgb = "#fada5e".parse()?;
//! # let foreground: Rgb = "#222".parse()?;
//! let ratio = foreground.contrast_against(&background);
//! assert!(ratio > 10.0);
//! # Ok(())
//! # }
//! ```
//!
//! Third, classify the ratio:
//!
//! ```
//! # use contrastcheck::{Assessment, ColorFormatError, Rgb};
//! # fn main() -> Result<(), ColorFormatError> {
//! # let background: Rgb = "#fada5e".parse()?;
//! # let foreground: Rgb = "#222".parse()?;
//! # let ratio = foreground.contrast_against(&background);
//! let assessment = Assessment::new(ratio);
//! assert!(assessment.all_pass());
//! # Ok(())
//! # }
//! ```
//!
//!
//! ## 3. Feature Flags
//!
//! This crate has two features:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`serde`** enables serialization and deserialization of this crate's
//!     types with [serde](https://serde.rs). [`Hsl`] serializes as the
//!     three-element array a picker shell persists, with `null` standing in
//!     for an undefined hue.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod checker;
mod core;
pub mod error;
mod object;
mod wcag;

pub use checker::{Checker, ColorPair};
pub use crate::core::is_hex;
#[doc(hidden)]
pub use crate::core::to_eq_bits;
pub use error::ColorFormatError;
pub use object::{Hsl, Rgb};
pub use wcag::{Assessment, Level, Status};
