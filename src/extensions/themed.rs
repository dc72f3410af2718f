use gpui::{App, Styled};

use crate::theme::{ThemeColorKind, ThemeFontKind, ThemeSizeKind};

/// Extension trait applying resolved theme tokens to any styled element.
///
/// This is the surface consumers reach for when writing style rules against
/// the token contract, instead of threading the theme record by hand.
pub trait ThemedStyled: Styled + Sized {
    /// Sets the font family from a theme weight token.
    fn themed_font(self, kind: ThemeFontKind, cx: &App) -> Self {
        self.font_family(kind.resolve(cx))
    }

    /// Sets the text size from a theme size token.
    fn themed_text_size(self, kind: ThemeSizeKind, cx: &App) -> Self {
        self.text_size(kind.resolve(cx))
    }

    /// Sets the text color from a theme palette token.
    fn themed_text_color(self, kind: ThemeColorKind, cx: &App) -> Self {
        self.text_color(kind.resolve(cx))
    }
}

impl<E: Styled> ThemedStyled for E {}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::{Theme, ThemeExt};
    use gpui::{
        AppContext, Context, IntoElement, ParentElement, Render, Styled, TestAppContext,
        VisualTestContext, Window, div, px,
    };

    #[gpui::test]
    fn test_themed_text_size_is_applied(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            let mut element = div().themed_text_size(ThemeSizeKind::M, cx);
            assert_eq!(
                element.style().text.as_ref().unwrap().font_size,
                Some(px(18.).into()),
                "M should resolve to the builtin medium size"
            );
        });
    }

    #[gpui::test]
    fn test_themed_font_is_applied(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            let mut element = div().themed_font(ThemeFontKind::Bold, cx);
            assert_eq!(
                element.style().text.as_ref().unwrap().font_family,
                Some("OpenSans Bold".into()),
                "Bold should resolve to the builtin bold family"
            );
        });
    }

    #[gpui::test]
    fn test_themed_styles_render_in_window(cx: &mut TestAppContext) {
        struct ThemedTestView;

        impl Render for ThemedTestView {
            fn render(
                &mut self,
                _window: &mut Window,
                cx: &mut Context<Self>,
            ) -> impl IntoElement {
                div()
                    .themed_font(ThemeFontKind::Regular, cx)
                    .themed_text_size(ThemeSizeKind::S, cx)
                    .themed_text_color(ThemeColorKind::Whitish, cx)
                    .child("Sample")
            }
        }

        let window = cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|_cx| ThemedTestView)
            })
            .unwrap()
        });

        let _cx = VisualTestContext::from_window(window.into(), cx);

        // The window creation itself validates rendering works
    }
}
