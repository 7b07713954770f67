#![deny(unsafe_code)]
//! Color model core for color-studio.
//!
//! Provides the immutable [`ColorValue`], text conversion and parsing
//! ([`format`]), CSS named colors ([`names`]), harmony palettes
//! ([`palette`]), WCAG contrast analysis ([`contrast`]), export snippets
//! ([`export`]) and reproducible [`PaletteRecipe`]s. Everything here is pure
//! and synchronous; callers own all state.

pub mod color;
pub mod contrast;
pub mod error;
pub mod export;
pub mod format;
pub mod info;
pub mod names;
pub mod palette;
pub mod params;
pub mod prng;
pub mod recipe;

pub use color::{ColorValue, Hsl, Rgb};
pub use contrast::{ContrastReport, TextSize, WcagLevel};
pub use error::{ColorError, Result};
pub use export::ExportFormat;
pub use format::{Cmyk, ColorFormat};
pub use info::ColorInfo;
pub use palette::{Derivation, Palette, Scheme, SchemeParams, Swatch};
pub use prng::Xorshift64;
pub use recipe::PaletteRecipe;
