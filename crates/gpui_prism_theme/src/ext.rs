use gpui::App;

use crate::schema::Theme;

/// Extension trait for accessing and modifying the global theme.
pub trait ThemeExt {
    /// Changes the theme.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    /// Gets an immutable reference to the theme.
    fn get_theme(&self) -> &Theme;
}

impl ThemeExt for App {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        self.set_global::<Theme>(theme.as_ref().clone())
    }

    fn get_theme(&self) -> &Theme {
        self.global()
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::{TestAppContext, px, rgb};

    #[gpui::test]
    fn test_set_and_get_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            let theme = cx.get_theme();
            assert_eq!(
                theme.fonts.regular, "OpenSans Regular",
                "Theme should carry the builtin fonts"
            );
        });
    }

    #[gpui::test]
    fn test_consecutive_reads_are_identical(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            let first = cx.get_theme().clone();
            let second = cx.get_theme().clone();
            assert_eq!(first, second, "Reads should observe the same value");
        });
    }

    #[gpui::test]
    fn test_theme_has_fonts(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            let fonts = &cx.get_theme().fonts;

            assert!(!fonts.light.is_empty(), "Light should name a family");
            assert!(!fonts.regular.is_empty(), "Regular should name a family");
            assert!(
                !fonts.semi_bold.is_empty(),
                "SemiBold should name a family"
            );
            assert!(!fonts.bold.is_empty(), "Bold should name a family");
            assert!(
                !fonts.extra_bold.is_empty(),
                "ExtraBold should name a family"
            );
        });
    }

    #[gpui::test]
    fn test_theme_has_sizes(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            let sizes = &cx.get_theme().sizes;

            assert!(sizes.s > px(0.), "Size s should be positive");
            assert!(sizes.m > px(0.), "Size m should be positive");
            assert!(sizes.l > px(0.), "Size l should be positive");
            assert!(sizes.xl > px(0.), "Size xl should be positive");
        });
    }

    #[gpui::test]
    fn test_theme_has_colors(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            let colors = &cx.get_theme().colors;

            assert_eq!(colors.pink, rgb(0xf5406e), "Pink should match the palette");
            assert_eq!(colors.white, rgb(0xffffff), "White should match the palette");
            assert!(
                colors.tile_back.a > 0.0 && colors.tile_back.a < 1.0,
                "TileBack should be translucent"
            );
        });
    }

    #[gpui::test]
    fn test_theme_as_ref(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let theme = Theme::DEFAULT;
            let theme_ref: &Theme = theme.as_ref();
            assert!(
                !theme_ref.fonts.regular.is_empty(),
                "Theme ref should carry fonts"
            );

            cx.set_theme(Theme::DEFAULT);
            let retrieved = cx.get_theme();
            assert_eq!(
                retrieved.colors, theme_ref.colors,
                "Palettes should match"
            );
        });
    }
}
