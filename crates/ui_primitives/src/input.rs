//! Single-line input family.
//!
//! One mode-parameterized implementation renders every variant; the exported
//! [`TextInput`], [`NumberInput`], and [`PasswordInput`] components are thin
//! fixed-argument wrappers over it. The family is strictly controlled: the
//! caller owns `value`, the control keeps no copy, and change/blur
//! notifications echo the caller-supplied `name` back alongside the current
//! native value. `error` and `disabled` are visual flags only; no validation
//! happens here.

use leptos::*;

use crate::theme::ThemeTokens;
use crate::{bool_token, merge_layout_class};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Text,
    Number,
    Password,
}

impl InputMode {
    fn token(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Password => "password",
        }
    }
}

/// Requested control width.
#[derive(Debug, Clone, PartialEq)]
pub enum InputWidth {
    /// Let the browser size the control.
    Auto,
    /// Fixed pixel width. Out-of-range values pass through uncorrected.
    Px(i32),
    /// Pre-formatted CSS length string, emitted verbatim.
    Raw(String),
}

impl Default for InputWidth {
    fn default() -> Self {
        Self::Auto
    }
}

impl From<i32> for InputWidth {
    fn from(px: i32) -> Self {
        Self::Px(px)
    }
}

impl From<&str> for InputWidth {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<String> for InputWidth {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

fn width_style(width: &InputWidth) -> String {
    match width {
        InputWidth::Auto => "auto".to_string(),
        InputWidth::Px(px) => format!("{px}px"),
        InputWidth::Raw(raw) => raw.clone(),
    }
}

#[allow(clippy::too_many_arguments)]
fn render_input(
    mode: InputMode,
    value: MaybeSignal<String>,
    name: String,
    required: MaybeSignal<bool>,
    placeholder: Option<String>,
    disabled: MaybeSignal<bool>,
    error: MaybeSignal<bool>,
    width: InputWidth,
    layout_class: Option<&'static str>,
    on_change: Option<Callback<(String, String)>>,
    on_blur: Option<Callback<(String, String)>>,
) -> impl IntoView {
    let change_name = name.clone();
    let blur_name = name.clone();

    view! {
        <input
            class=merge_layout_class("ui-text-input", layout_class)
            class:error=move || error.get()
            type=mode.token()
            prop:value=move || value.get()
            name=name
            required=move || required.get()
            placeholder=placeholder
            disabled=move || disabled.get()
            style:width=width_style(&width)
            data-ui-primitive="true"
            data-ui-kind="text-input"
            data-ui-mode=mode.token()
            data-ui-invalid=move || bool_token(error.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:input=move |ev| {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call((change_name.clone(), event_target_value(&ev)));
                }
            }
            on:blur=move |ev| {
                if let Some(on_blur) = on_blur.as_ref() {
                    on_blur.call((blur_name.clone(), event_target_value(&ev)));
                }
            }
        />
    }
}

#[component]
/// Controlled single-line text input.
pub fn TextInput(
    /// Caller-owned current value.
    #[prop(into)]
    value: MaybeSignal<String>,
    /// Field identifier, echoed back in change/blur notifications.
    #[prop(into)]
    name: String,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    #[prop(optional, into)] width: InputWidth,
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Change notification, invoked as `(name, value)` on every input event.
    #[prop(optional)]
    on_change: Option<Callback<(String, String)>>,
    /// Blur notification, invoked as `(name, value)`.
    #[prop(optional)]
    on_blur: Option<Callback<(String, String)>>,
) -> impl IntoView {
    render_input(
        InputMode::Text,
        value,
        name,
        required,
        placeholder,
        disabled,
        error,
        width,
        layout_class,
        on_change,
        on_blur,
    )
}

#[component]
/// Controlled single-line numeric input. The value stays a string; numeric
/// parsing and validation belong to the caller.
pub fn NumberInput(
    /// Caller-owned current value.
    #[prop(into)]
    value: MaybeSignal<String>,
    /// Field identifier, echoed back in change/blur notifications.
    #[prop(into)]
    name: String,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    #[prop(optional, into)] width: InputWidth,
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Change notification, invoked as `(name, value)` on every input event.
    #[prop(optional)]
    on_change: Option<Callback<(String, String)>>,
    /// Blur notification, invoked as `(name, value)`.
    #[prop(optional)]
    on_blur: Option<Callback<(String, String)>>,
) -> impl IntoView {
    render_input(
        InputMode::Number,
        value,
        name,
        required,
        placeholder,
        disabled,
        error,
        width,
        layout_class,
        on_change,
        on_blur,
    )
}

#[component]
/// Controlled single-line password input with browser-native masking.
pub fn PasswordInput(
    /// Caller-owned current value.
    #[prop(into)]
    value: MaybeSignal<String>,
    /// Field identifier, echoed back in change/blur notifications.
    #[prop(into)]
    name: String,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    #[prop(optional, into)] width: InputWidth,
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Change notification, invoked as `(name, value)` on every input event.
    #[prop(optional)]
    on_change: Option<Callback<(String, String)>>,
    /// Blur notification, invoked as `(name, value)`.
    #[prop(optional)]
    on_blur: Option<Callback<(String, String)>>,
) -> impl IntoView {
    render_input(
        InputMode::Password,
        value,
        name,
        required,
        placeholder,
        disabled,
        error,
        width,
        layout_class,
        on_change,
        on_blur,
    )
}

pub(crate) fn input_css(theme: &ThemeTokens) -> String {
    let ThemeTokens {
        size,
        palette,
        frame,
    } = theme;

    format!(
        ".ui-text-input{{display:inline-block;padding:{padding};border-radius:{radius};\
border:{border};background-color:{white};color:{black};font-size:{font};line-height:1.6;\
outline:none;box-sizing:border-box;}}\
.ui-text-input::placeholder{{color:{placeholder};}}\
.ui-text-input:focus{{border-color:{focus};}}\
.ui-text-input.error{{border-color:{error};}}\
.ui-text-input[disabled]{{border-color:{disabled};pointer-events:none;}}",
        padding = size.px_to_rem(size.space.xxs),
        radius = frame.border_radius_m,
        border = frame.border_default,
        white = palette.white,
        black = palette.black,
        font = size.px_to_rem(size.font.tall),
        placeholder = palette.mono_p30,
        focus = palette.main_p10,
        error = palette.red,
        disabled = palette.mono_p10,
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn numeric_width_is_suffixed_with_px() {
        assert_eq!(width_style(&InputWidth::from(240)), "240px");
    }

    #[test]
    fn preformatted_width_passes_through_verbatim() {
        assert_eq!(width_style(&InputWidth::from("50%")), "50%");
        assert_eq!(width_style(&InputWidth::from("12.5em".to_string())), "12.5em");
    }

    #[test]
    fn omitted_width_renders_auto() {
        assert_eq!(width_style(&InputWidth::default()), "auto");
    }

    #[test]
    fn negative_width_is_not_clamped() {
        // Deliberate pass-through: the browser decides what to do with it.
        assert_eq!(width_style(&InputWidth::from(-10)), "-10px");
    }

    #[test]
    fn each_mode_maps_to_its_native_input_type() {
        assert_eq!(InputMode::Text.token(), "text");
        assert_eq!(InputMode::Number.token(), "number");
        assert_eq!(InputMode::Password.token(), "password");
    }

    #[test]
    fn input_css_wires_theme_tokens_into_every_state_rule() {
        let theme = ThemeTokens::default();
        let css = input_css(&theme);

        assert!(css.contains(&format!("border:{}", theme.frame.border_default)));
        assert!(css.contains(&format!(
            ".ui-text-input.error{{border-color:{};}}",
            theme.palette.red
        )));
        assert!(css.contains(&format!(
            ".ui-text-input[disabled]{{border-color:{};pointer-events:none;}}",
            theme.palette.mono_p10
        )));
        assert!(css.contains(&format!("font-size:{}", theme.size.px_to_rem(14.0))));
    }
}
