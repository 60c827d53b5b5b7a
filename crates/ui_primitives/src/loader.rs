//! Decorative busy indicator.
//!
//! The loader is purely presentational: a `role="status"` container holding a
//! rotating composite of four arc lines plus always-present visually hidden
//! alt text and an optional visible caption. It takes no callbacks and holds
//! no state; every visual decision is a prop token or a theme token resolved
//! by the CSS layer.

use leptos::*;

use crate::merge_layout_class;
use crate::theme::ThemeTokens;
use crate::visually_hidden::VisuallyHiddenText;

mod animation;

use animation::{
    keyframes_css, COG_DURATION, CONTAINER_DURATION, CONTAINER_ROTATE, FILL_UNFILL_ROTATE,
    LEFT_SPIN, LINE_DURATION, LINE_FADES, RIGHT_SPIN, SPINNER_EASING,
};

/// Default accessible label announced to assistive technology.
const DEFAULT_ALT: &str = "処理中";

/// Spinner footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderSize {
    /// Compact 24px spinner.
    S,
    /// Default 48px spinner.
    M,
}

impl Default for LoaderSize {
    fn default() -> Self {
        Self::M
    }
}

impl LoaderSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::S => "s",
            Self::M => "m",
        }
    }
}

/// Loader color tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderTone {
    /// Brand-colored spinner for light surfaces.
    Primary,
    /// White spinner for dark or tinted surfaces.
    Light,
}

impl Default for LoaderTone {
    fn default() -> Self {
        Self::Primary
    }
}

impl LoaderTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Light => "light",
        }
    }
}

fn resolved_alt(alt: Option<String>) -> String {
    alt.unwrap_or_else(|| DEFAULT_ALT.to_string())
}

fn caption(text: Option<String>, tone: LoaderTone) -> Option<impl IntoView> {
    text.map(|text| {
        view! {
            <span class="ui-loader-text" data-ui-tone=tone.token()>{text}</span>
        }
    })
}

#[component]
/// Animated busy indicator with hidden alt text and an optional caption.
pub fn Loader(
    #[prop(default = LoaderSize::M)] size: LoaderSize,
    /// Accessible label. Defaults to a fixed localized string.
    #[prop(optional, into)]
    alt: Option<String>,
    /// Visible caption rendered under the spinner when supplied.
    #[prop(optional, into)]
    text: Option<String>,
    #[prop(default = LoaderTone::Primary)] tone: LoaderTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Pass-through container attributes (extra ARIA attributes and the like).
    #[prop(attrs)]
    attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let alt = resolved_alt(alt);

    view! {
        <div
            {..attrs}
            class=merge_layout_class("ui-loader", layout_class)
            role="status"
            data-ui-primitive="true"
            data-ui-kind="loader"
            data-ui-size=size.token()
            data-ui-tone=tone.token()
        >
            <span class="ui-loader-spinner" data-ui-size=size.token()>
                {(1..=4_u8)
                    .map(|line| view! {
                        <span
                            class="ui-loader-line"
                            data-ui-line=line.to_string()
                            data-ui-tone=tone.token()
                        >
                            <span class="ui-loader-cog">
                                <span class="ui-loader-arc" data-ui-arc="left"></span>
                            </span>
                            <span class="ui-loader-ticker">
                                <span class="ui-loader-arc" data-ui-arc="center"></span>
                            </span>
                            <span class="ui-loader-cog">
                                <span class="ui-loader-arc" data-ui-arc="right"></span>
                            </span>
                        </span>
                    })
                    .collect_view()}
                <VisuallyHiddenText>{alt}</VisuallyHiddenText>
            </span>
            {caption(text, tone)}
        </div>
    }
}

pub(crate) fn loader_css(theme: &ThemeTokens) -> String {
    let palette = &theme.palette;
    let mut css = keyframes_css();

    css.push_str(&format!(
        ".ui-loader{{display:inline-block;overflow:hidden;}}\
.ui-loader-spinner{{position:relative;display:block;margin:0 auto;\
animation:{CONTAINER_ROTATE} {CONTAINER_DURATION} linear infinite;}}\
.ui-loader-spinner[data-ui-size=\"m\"]{{width:48px;height:48px;}}\
.ui-loader-spinner[data-ui-size=\"m\"] .ui-loader-arc{{border-width:4px;}}\
.ui-loader-spinner[data-ui-size=\"s\"]{{width:24px;height:24px;}}\
.ui-loader-spinner[data-ui-size=\"s\"] .ui-loader-arc{{border-width:2px;}}\
.ui-loader-line{{position:absolute;display:block;width:100%;height:100%;opacity:0;}}"
    ));

    for (index, fade) in LINE_FADES.iter().enumerate() {
        css.push_str(&format!(
            ".ui-loader-line[data-ui-line=\"{line}\"]{{\
animation:{FILL_UNFILL_ROTATE} {LINE_DURATION} {SPINNER_EASING} infinite both,\
{fade} {LINE_DURATION} {SPINNER_EASING} infinite both;}}",
            line = index + 1,
        ));
    }

    css.push_str(&format!(
        ".ui-loader-line[data-ui-tone=\"primary\"]{{border-color:{brand};}}\
@media (prefers-contrast: more){{\
.ui-loader-line[data-ui-tone=\"primary\"]{{border-color:{main};}}}}\
.ui-loader-line[data-ui-tone=\"light\"]{{border-color:{white};}}\
.ui-loader-cog{{display:inline-block;position:relative;width:50%;height:100%;\
overflow:hidden;border-color:inherit;}}\
.ui-loader-ticker{{position:absolute;box-sizing:border-box;top:0;left:45%;display:block;\
width:10%;height:100%;overflow:hidden;border-color:inherit;}}\
.ui-loader-arc{{position:absolute;top:0;left:0;display:block;width:200%;height:100%;\
box-sizing:border-box;border-style:solid;border-color:inherit;\
border-bottom-color:transparent;border-radius:50%;animation:none;}}\
.ui-loader-arc[data-ui-arc=\"left\"]{{border-right-color:transparent;transform:rotate(129deg);\
animation:{LEFT_SPIN} {COG_DURATION} {SPINNER_EASING} infinite both;}}\
.ui-loader-arc[data-ui-arc=\"center\"]{{width:1000%;left:-450%;}}\
.ui-loader-arc[data-ui-arc=\"right\"]{{left:-100%;border-left-color:transparent;\
transform:rotate(-129deg);\
animation:{RIGHT_SPIN} {COG_DURATION} {SPINNER_EASING} infinite both;}}\
.ui-loader-text{{display:block;margin-top:{caption_gap};font-size:{caption_font};\
text-align:center;}}\
.ui-loader-text[data-ui-tone=\"primary\"]{{color:{text_black};}}\
.ui-loader-text[data-ui-tone=\"light\"]{{color:{text_white};}}",
        brand = palette.brand,
        main = palette.main,
        white = palette.white,
        caption_gap = theme.spacing_by_char(1.0),
        caption_font = theme.size.px_to_rem(theme.size.font.tall),
        text_black = palette.text_black,
        text_white = palette.text_white,
    ));

    css
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_are_medium_and_primary() {
        assert_eq!(LoaderSize::default(), LoaderSize::M);
        assert_eq!(LoaderTone::default(), LoaderTone::Primary);
        assert!(!DEFAULT_ALT.is_empty());
    }

    #[test]
    fn alt_text_is_always_present_and_defaults_to_the_localized_label() {
        assert_eq!(resolved_alt(None), DEFAULT_ALT);
        assert_eq!(resolved_alt(Some("Busy".to_string())), "Busy");
        assert!(!resolved_alt(None).is_empty());
    }

    #[test]
    fn caption_renders_only_when_text_is_supplied() {
        let runtime = create_runtime();
        assert!(caption(None, LoaderTone::Primary).is_none());
        assert!(caption(Some("Loading…".to_string()), LoaderTone::Primary).is_some());
        runtime.dispose();
    }

    #[test]
    fn size_variants_produce_distinct_dimension_rules() {
        let css = loader_css(&ThemeTokens::default());
        assert!(css.contains(".ui-loader-spinner[data-ui-size=\"m\"]{width:48px;height:48px;}"));
        assert!(css.contains(".ui-loader-spinner[data-ui-size=\"s\"]{width:24px;height:24px;}"));
        assert!(css.contains(".ui-loader-spinner[data-ui-size=\"m\"] .ui-loader-arc{border-width:4px;}"));
        assert!(css.contains(".ui-loader-spinner[data-ui-size=\"s\"] .ui-loader-arc{border-width:2px;}"));
    }

    #[test]
    fn tones_use_distinct_border_colors_with_a_contrast_override() {
        let theme = ThemeTokens::default();
        let css = loader_css(&theme);

        assert!(css.contains(&format!(
            ".ui-loader-line[data-ui-tone=\"primary\"]{{border-color:{};}}",
            theme.palette.brand
        )));
        assert!(css.contains(&format!(
            ".ui-loader-line[data-ui-tone=\"light\"]{{border-color:{};}}",
            theme.palette.white
        )));
        assert!(css.contains("@media (prefers-contrast: more)"));
        assert!(css.contains(&format!("border-color:{};}}}}", theme.palette.main)));
    }

    #[test]
    fn every_line_gets_the_shared_rotation_plus_its_own_fade() {
        let css = loader_css(&ThemeTokens::default());
        for (index, fade) in LINE_FADES.iter().enumerate() {
            let rule = format!(
                ".ui-loader-line[data-ui-line=\"{}\"]{{animation:{} {} {} infinite both,{} {} {} infinite both;}}",
                index + 1,
                FILL_UNFILL_ROTATE,
                LINE_DURATION,
                SPINNER_EASING,
                fade,
                LINE_DURATION,
                SPINNER_EASING,
            );
            assert!(css.contains(&rule), "missing animation rule for line {}", index + 1);
        }
    }

    #[test]
    fn loader_css_is_deterministic_for_a_fixed_theme() {
        let theme = ThemeTokens::default();
        assert_eq!(loader_css(&theme), loader_css(&theme));
    }
}
