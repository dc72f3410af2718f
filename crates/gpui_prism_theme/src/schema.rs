use std::{ops::Deref, path::Path, sync::LazyLock};

use gpui::{Global, Pixels, Rgba, SharedString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::deserializers::{de_color, de_font_family, de_pixels};

/// The design-token record: fonts, sizes, and colors.
///
/// Parsed once from a JSON document and never mutated afterwards. All three
/// groups are total over their fixed key sets, so token access is infallible.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Theme {
    pub fonts: ThemeFonts,
    pub sizes: ThemeSizes,
    pub colors: ThemeColors,
}

macro_rules! builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub const $name: LazyLockTheme = LazyLockTheme::new(|| Theme::from_string(include_str!($path)).unwrap());
        )+
    };
}

pub struct LazyLockTheme(LazyLock<Theme>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> Theme) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

impl Theme {
    builtin_themes!(["../themes/default.json", DEFAULT]);

    /// Parses a theme from a JSON document.
    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Theme, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    /// Reads and parses a theme from a JSON file on disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Theme, ThemeError> {
        Self::from_string(std::fs::read_to_string(path)?)
    }
}

impl Global for Theme {}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

/// Failure to load a theme document. Token access itself never fails.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse theme: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Font-family identifiers keyed by semantic weight.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeFonts {
    #[serde(deserialize_with = "de_font_family")]
    pub light: SharedString,
    #[serde(deserialize_with = "de_font_family")]
    pub regular: SharedString,
    #[serde(deserialize_with = "de_font_family")]
    pub semi_bold: SharedString,
    #[serde(deserialize_with = "de_font_family")]
    pub bold: SharedString,
    #[serde(deserialize_with = "de_font_family")]
    pub extra_bold: SharedString,
}

/// Text sizes keyed by semantic scale step.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeSizes {
    #[serde(deserialize_with = "de_pixels")]
    pub s: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub m: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub l: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
}

/// The palette. Values accept hex (`#f5406e`) or functional
/// (`rgba(245,245,245,0.04)`) notation in the document.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    #[serde(deserialize_with = "de_color")]
    pub blue: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub dark_blue: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub gray: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub dark_gray: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub white: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub whitish: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub pink: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub green: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub orange: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub tile_back: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub purple: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub light_purple: Rgba,
}
