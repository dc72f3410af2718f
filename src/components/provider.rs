use std::any::TypeId;

use gpui::{AnyView, Context, IntoElement, Render, Window};

use crate::theme::{Theme, ThemeExt};

/// ThemeProvider wraps a single child view and makes the theme ambiently
/// available to it for as long as the provider is mounted.
///
/// Rendering is a pure pass-through: the child is rendered unchanged, with no
/// wrapper markup. When the provider is released the ambient registration is
/// removed, so nothing leaks into unrelated subtrees.
///
/// # Example
///
/// ```ignore
/// // In your window creation:
/// cx.open_window(options, |window, cx| {
///     let main_view = cx.new(|_cx| YourMainView);
///     cx.new(|cx| ThemeProvider::new(main_view, window, cx))
/// });
/// ```
pub struct ThemeProvider {
    view: AnyView,
}

impl ThemeProvider {
    /// Creates a provider distributing the builtin theme.
    pub fn new(view: impl Into<AnyView>, window: &mut Window, cx: &mut Context<Self>) -> Self {
        Self::with_theme(Theme::DEFAULT, view, window, cx)
    }

    /// Creates a provider distributing the given theme.
    pub fn with_theme<T: AsRef<Theme>>(
        theme: T,
        view: impl Into<AnyView>,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        cx.set_theme(theme);

        cx.on_release(|_this, cx| {
            if cx.has_global::<Theme>() {
                cx.remove_global::<Theme>();
            }
        })
        .detach();

        Self { view: view.into() }
    }

    /// Checks if the child view of this provider is of the specific type.
    pub fn is_of_view<V: Render>(&self) -> bool {
        TypeId::of::<V>() == self.view.entity_type()
    }
}

impl Render for ThemeProvider {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        self.view.clone()
    }
}
