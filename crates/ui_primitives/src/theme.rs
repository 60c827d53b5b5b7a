//! Theme token model plus the provider/hook pair that injects it.
//!
//! Tokens are owned by the application and shared read-only: [`ThemeProvider`]
//! places one [`ThemeTokens`] value in Leptos context and renders the CSS
//! layer derived from it, and [`use_theme`] reads it back anywhere in the
//! subtree. Components never mutate the theme and never cache it across
//! renders.

use leptos::*;

use crate::stylesheet::stylesheet;

/// Pixel-based size scale with a root-relative unit converter.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeScale {
    /// Root font size in pixels, the denominator for [`SizeScale::px_to_rem`].
    pub base_font_px: f32,
    /// Named spacing steps in pixels.
    pub space: SpaceScale,
    /// Named font-size steps in pixels.
    pub font: FontScale,
}

impl SizeScale {
    /// Converts a pixel length to a `rem` string against the root font size.
    pub fn px_to_rem(&self, px: f32) -> String {
        format!("{}rem", px / self.base_font_px)
    }
}

impl Default for SizeScale {
    fn default() -> Self {
        Self {
            base_font_px: 16.0,
            space: SpaceScale::default(),
            font: FontScale::default(),
        }
    }
}

/// Named spacing steps in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaceScale {
    /// Tightest step, used for control padding.
    pub xxs: f32,
    /// Compact step.
    pub xs: f32,
    /// Default step.
    pub s: f32,
    /// Spacious step.
    pub m: f32,
}

impl Default for SpaceScale {
    fn default() -> Self {
        Self {
            xxs: 8.0,
            xs: 16.0,
            s: 24.0,
            m: 32.0,
        }
    }
}

/// Named font-size steps in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontScale {
    /// Caption/annotation size.
    pub short: f32,
    /// Body/control size.
    pub tall: f32,
    /// Heading size.
    pub grande: f32,
}

impl Default for FontScale {
    fn default() -> Self {
        Self {
            short: 11.0,
            tall: 14.0,
            grande: 18.0,
        }
    }
}

/// Semantic color palette consumed by the primitive CSS layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Plain surface color.
    pub white: String,
    /// Plain foreground color.
    pub black: String,
    /// Faint neutral, used for disabled borders.
    pub mono_p10: String,
    /// Mid neutral, used for placeholder text.
    pub mono_p30: String,
    /// Primary action color.
    pub main: String,
    /// Lightened primary, used for focus borders.
    pub main_p10: String,
    /// Brand accent color.
    pub brand: String,
    /// Danger/error color.
    pub red: String,
    /// Default body-text color.
    pub text_black: String,
    /// Inverse body-text color for dark surfaces.
    pub text_white: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            white: "#fff".to_string(),
            black: "#23221f".to_string(),
            mono_p10: "#d6d6d6".to_string(),
            mono_p30: "#9e9e9e".to_string(),
            main: "#0077c7".to_string(),
            main_p10: "#0091e0".to_string(),
            brand: "#00c4cc".to_string(),
            red: "#e01e5a".to_string(),
            text_black: "#23221f".to_string(),
            text_white: "#fff".to_string(),
        }
    }
}

/// Border and frame tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameTokens {
    /// Default one-pixel control border shorthand.
    pub border_default: String,
    /// Medium corner radius.
    pub border_radius_m: String,
}

impl Default for FrameTokens {
    fn default() -> Self {
        Self {
            border_default: "1px solid #d6d6d6".to_string(),
            border_radius_m: "6px".to_string(),
        }
    }
}

/// Complete read-only design-token bundle supplied by the application.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThemeTokens {
    /// Size scale and unit converter.
    pub size: SizeScale,
    /// Semantic color palette.
    pub palette: Palette,
    /// Border and frame tokens.
    pub frame: FrameTokens,
}

impl ThemeTokens {
    /// Spacing sized to roughly `count` characters of body text, as a `rem`
    /// string.
    pub fn spacing_by_char(&self, count: f32) -> String {
        self.size.px_to_rem(count * self.size.base_font_px)
    }
}

#[component]
/// Provides [`ThemeTokens`] to descendant primitives and renders the CSS
/// layer derived from them.
pub fn ThemeProvider(
    /// Token bundle to inject. Falls back to [`ThemeTokens::default`].
    #[prop(optional)]
    theme: Option<ThemeTokens>,
    children: Children,
) -> impl IntoView {
    let theme = theme.unwrap_or_default();
    let css = stylesheet(&theme);
    provide_context(theme);

    view! {
        <style>{css}</style>
        {children()}
    }
}

/// Reads the ambient [`ThemeTokens`], falling back to the default bundle when
/// no [`ThemeProvider`] is mounted above the caller.
pub fn use_theme() -> ThemeTokens {
    use_context::<ThemeTokens>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn px_to_rem_divides_by_the_root_font_size() {
        let size = SizeScale::default();
        assert_eq!(size.px_to_rem(8.0), "0.5rem");
        assert_eq!(size.px_to_rem(14.0), "0.875rem");
        assert_eq!(size.px_to_rem(16.0), "1rem");
    }

    #[test]
    fn spacing_by_char_tracks_the_root_font_size() {
        let theme = ThemeTokens::default();
        assert_eq!(theme.spacing_by_char(1.0), "1rem");
        assert_eq!(theme.spacing_by_char(0.5), "0.5rem");
    }

    #[test]
    fn use_theme_falls_back_to_defaults_without_a_provider() {
        let runtime = create_runtime();
        assert_eq!(use_theme(), ThemeTokens::default());
        runtime.dispose();
    }

    #[test]
    fn use_theme_reads_the_provided_bundle() {
        let runtime = create_runtime();
        let mut custom = ThemeTokens::default();
        custom.palette.brand = "#123456".to_string();
        let expected = custom.clone();

        // Context lives on a reactive owner, so resolve the hook inside one.
        let resolved = create_memo(move |_| {
            provide_context(custom.clone());
            use_theme()
        });

        assert_eq!(resolved.get_untracked(), expected);
        runtime.dispose();
    }

    #[test]
    fn default_bundle_carries_distinct_tone_colors() {
        let palette = Palette::default();
        assert_ne!(palette.brand, palette.main);
        assert_ne!(palette.text_black, palette.text_white);
    }
}
