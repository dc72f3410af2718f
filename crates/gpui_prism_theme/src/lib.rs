//! Design tokens (fonts, sizes, colors) and the machinery that makes them
//! ambiently available to UI code through gpui's global context.
//!
//! The token set is a flat, closed record parsed once from an embedded JSON
//! document. Consumers read it through [`ThemeExt`] or the per-group kind
//! enums.

mod schema;
pub use schema::*;

mod deserializers;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;
