//! Theme-to-CSS composition for the primitive set.
//!
//! [`crate::ThemeProvider`] renders this once per theme; components
//! themselves emit only markup plus `data-ui-*` tokens.

use crate::input::input_css;
use crate::loader::loader_css;
use crate::theme::ThemeTokens;
use crate::visually_hidden::visually_hidden_css;

/// Builds the complete CSS layer for the primitive set from a token bundle.
///
/// Output is deterministic for a given theme, so re-rendering a provider with
/// an identical theme yields byte-identical styles.
pub fn stylesheet(theme: &ThemeTokens) -> String {
    let mut css = String::from(visually_hidden_css());
    css.push_str(&input_css(theme));
    css.push_str(&loader_css(theme));
    css
}
