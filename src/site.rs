//! Marketing pages
//!
//! Page content is typed data in `content`; `render` turns it into
//! complete HTML documents. Styling and client behaviour live in the
//! embedded assets.

pub mod content;
mod render;

pub use render::{render_landing, render_legal};
