pub mod components;

pub mod extensions;

pub use gpui_prism_theme as theme;

mod init;
pub use init::*;
