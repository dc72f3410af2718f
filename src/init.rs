use gpui::{App, Window};

use crate::theme::{Theme, ThemeExt};

/// Installs the builtin theme unless the application already registered one.
pub fn init(cx: &mut App) {
    if !cx.has_global::<Theme>() {
        cx.set_theme(Theme::DEFAULT);
    }
}

pub fn init_for_window(window: &mut Window, cx: &mut App) {
    window.set_rem_size(cx.get_theme().sizes.m);
}
