//! Shared themed UI primitive library.
//!
//! The crate owns a small set of reusable Leptos primitives — the single-line
//! input family and the loading spinner — plus the [`ThemeTokens`] model and
//! the `data-ui-*` DOM contract their CSS layer consumes. Apps compose these
//! primitives instead of emitting ad hoc control markup; all theme-derived
//! styling flows through [`ThemeProvider`] rather than per-component style
//! literals.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod input;
mod loader;
mod stylesheet;
mod theme;
mod visually_hidden;

pub use input::{InputWidth, NumberInput, PasswordInput, TextInput};
pub use loader::{Loader, LoaderSize, LoaderTone};
pub use stylesheet::stylesheet;
pub use theme::{
    use_theme, FontScale, FrameTokens, Palette, SizeScale, SpaceScale, ThemeProvider, ThemeTokens,
};
pub use visually_hidden::VisuallyHiddenText;

/// Convenience imports for application crates consuming the primitive set.
pub mod prelude {
    pub use crate::{
        use_theme, InputWidth, Loader, LoaderSize, LoaderTone, NumberInput, PasswordInput,
        TextInput, ThemeProvider, ThemeTokens, VisuallyHiddenText,
    };
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn merge_layout_class_appends_non_empty_extra_classes() {
        assert_eq!(merge_layout_class("ui-loader", None), "ui-loader");
        assert_eq!(merge_layout_class("ui-loader", Some("")), "ui-loader");
        assert_eq!(
            merge_layout_class("ui-loader", Some("form-busy")),
            "ui-loader form-busy"
        );
    }

    #[test]
    fn bool_token_maps_to_dom_contract_strings() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }
}
