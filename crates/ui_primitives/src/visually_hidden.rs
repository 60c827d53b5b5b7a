//! Text that exists for assistive technology but is visually clipped.

use leptos::*;

#[component]
/// Renders children into the accessibility tree without painting them.
///
/// Uses the 1px clip-rect technique rather than `display:none` so screen
/// readers still announce the content.
pub fn VisuallyHiddenText(children: Children) -> impl IntoView {
    view! { <span class="ui-visually-hidden">{children()}</span> }
}

pub(crate) fn visually_hidden_css() -> &'static str {
    ".ui-visually-hidden{position:absolute;width:1px;height:1px;margin:-1px;padding:0;\
border:0;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}
