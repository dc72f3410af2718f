use gpui::{
    App, AppContext, Application, Bounds, Context, Div, IntoElement, Menu, ParentElement, Render,
    Styled, TitlebarOptions, Window, WindowBounds, WindowOptions, div, point, px, size,
};

use gpui_prism::{
    components::ThemeProvider,
    extensions::ThemedStyled,
    theme::{ThemeColorKind, ThemeExt, ThemeFontKind, ThemeSizeKind},
};

struct TokenGallery;

impl Render for TokenGallery {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        gpui_prism::init_for_window(window, cx);

        let theme = cx.get_theme();

        div()
            .size_full()
            .bg(theme.colors.dark_blue)
            .flex()
            .flex_col()
            .gap(px(12.))
            .p(px(40.))
            .themed_font(ThemeFontKind::Regular, cx)
            .themed_text_size(ThemeSizeKind::M, cx)
            .themed_text_color(ThemeColorKind::Whitish, cx)
            .child(
                div()
                    .themed_font(ThemeFontKind::ExtraBold, cx)
                    .themed_text_size(ThemeSizeKind::Xl, cx)
                    .child("Token gallery"),
            )
            .child(
                div()
                    .themed_text_size(ThemeSizeKind::S, cx)
                    .themed_text_color(ThemeColorKind::Gray, cx)
                    .child("Every palette entry, straight from the ambient theme."),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap(px(6.))
                    .children(
                        [
                            (ThemeColorKind::Blue, "blue"),
                            (ThemeColorKind::DarkBlue, "darkBlue"),
                            (ThemeColorKind::Gray, "gray"),
                            (ThemeColorKind::DarkGray, "darkGray"),
                            (ThemeColorKind::White, "white"),
                            (ThemeColorKind::Whitish, "whitish"),
                            (ThemeColorKind::Pink, "pink"),
                            (ThemeColorKind::Green, "green"),
                            (ThemeColorKind::Orange, "orange"),
                            (ThemeColorKind::TileBack, "tileBack"),
                            (ThemeColorKind::Purple, "purple"),
                            (ThemeColorKind::LightPurple, "lightPurple"),
                        ]
                        .map(|(kind, label)| swatch(kind, label, cx)),
                    ),
            )
    }
}

fn swatch(kind: ThemeColorKind, label: &'static str, cx: &App) -> Div {
    div()
        .flex()
        .items_center()
        .gap(px(8.))
        .child(div().size(px(16.)).rounded_full().bg(kind.resolve(cx)))
        .child(
            div()
                .themed_text_size(ThemeSizeKind::S, cx)
                .child(label),
        )
}

fn main() {
    Application::new().run(|cx: &mut App| {
        gpui_prism::init(cx);

        cx.set_menus(vec![Menu {
            name: "Token Gallery".into(),
            items: vec![],
        }]);

        let bounds = Bounds::centered(None, size(px(420.), px(640.)), cx);

        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    appears_transparent: true,
                    traffic_light_position: Some(point(px(10.), px(10.))),
                    ..Default::default()
                }),
                ..Default::default()
            },
            |window, cx| {
                let gallery = cx.new(|_cx| TokenGallery);
                cx.new(|cx| ThemeProvider::new(gallery, window, cx))
            },
        )
        .unwrap();

        cx.activate(true);
    });
}
