#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::App;

use crate::ext::ThemeExt;

/// Font-weight variants that resolve to theme-defined family identifiers.
///
/// Use `resolve()` to get the actual `SharedString` from the current theme.
#[derive(Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::SharedString)]
pub enum ThemeFontKind {
    /// Light weight.
    #[assoc(resolve = cx.get_theme().fonts.light.clone())]
    Light,
    /// Regular body weight.
    #[assoc(resolve = cx.get_theme().fonts.regular.clone())]
    Regular,
    /// Semi-bold weight.
    #[assoc(resolve = cx.get_theme().fonts.semi_bold.clone())]
    SemiBold,
    /// Bold weight.
    #[assoc(resolve = cx.get_theme().fonts.bold.clone())]
    Bold,
    /// Extra-bold weight.
    #[assoc(resolve = cx.get_theme().fonts.extra_bold.clone())]
    ExtraBold,
}

/// Text size variants that resolve to theme-defined pixel values.
#[derive(Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
pub enum ThemeSizeKind {
    /// Small text.
    #[assoc(resolve = cx.get_theme().sizes.s)]
    S,
    /// Medium, standard body text.
    #[assoc(resolve = cx.get_theme().sizes.m)]
    M,
    /// Large text.
    #[assoc(resolve = cx.get_theme().sizes.l)]
    L,
    /// Extra large text.
    #[assoc(resolve = cx.get_theme().sizes.xl)]
    Xl,
}

/// Palette variants that resolve to theme-defined colors.
#[derive(Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
pub enum ThemeColorKind {
    #[assoc(resolve = cx.get_theme().colors.blue)]
    Blue,
    #[assoc(resolve = cx.get_theme().colors.dark_blue)]
    DarkBlue,
    #[assoc(resolve = cx.get_theme().colors.gray)]
    Gray,
    #[assoc(resolve = cx.get_theme().colors.dark_gray)]
    DarkGray,
    #[assoc(resolve = cx.get_theme().colors.white)]
    White,
    #[assoc(resolve = cx.get_theme().colors.whitish)]
    Whitish,
    #[assoc(resolve = cx.get_theme().colors.pink)]
    Pink,
    #[assoc(resolve = cx.get_theme().colors.green)]
    Green,
    #[assoc(resolve = cx.get_theme().colors.orange)]
    Orange,
    #[assoc(resolve = cx.get_theme().colors.tile_back)]
    TileBack,
    #[assoc(resolve = cx.get_theme().colors.purple)]
    Purple,
    #[assoc(resolve = cx.get_theme().colors.light_purple)]
    LightPurple,
}
