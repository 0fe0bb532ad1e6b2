//! Markup templates.
//!
//! Pure `String` builders from state values; no events, no state. Views
//! compose these and hand the result to the [`Surface`](crate::view::Surface)
//! in one piece (re-render by full reconstruction).

pub mod components;
pub mod layout;

pub use layout::{LayoutParams, layout};

/// Escapes a string for safe interpolation into markup.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
