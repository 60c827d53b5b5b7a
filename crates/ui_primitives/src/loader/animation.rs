//! Keyframe definitions and fixed timing constants for the loader spinner.
//!
//! The spinner is the familiar indeterminate-arc composition: an outer
//! container spins continuously while four lines rotate through an eight-step
//! fill/unfill cycle and fade in and out at staggered quarter-cycle offsets.
//! Timing is shared by every instance and is not caller-configurable.

/// Duration of one left/right cog sweep.
pub(crate) const COG_DURATION: &str = "1333ms";
/// Duration of one full fill/unfill cycle across the four lines.
pub(crate) const LINE_DURATION: &str = "5332ms";
/// Duration of one outer container revolution.
pub(crate) const CONTAINER_DURATION: &str = "1600ms";
/// Standard-curve easing shared by every spinner keyframe.
pub(crate) const SPINNER_EASING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";

/// Continuous rotation applied to the spinner container.
pub(crate) const CONTAINER_ROTATE: &str = "ui-loader-container-rotate";
/// Eight-step 135-degree rotation shared by all four lines.
pub(crate) const FILL_UNFILL_ROTATE: &str = "ui-loader-fill-unfill-rotate";
/// Sweep of the left arc segment.
pub(crate) const LEFT_SPIN: &str = "ui-loader-left-spin";
/// Sweep of the right arc segment.
pub(crate) const RIGHT_SPIN: &str = "ui-loader-right-spin";

/// Fade keyframe name for each spinner line, indexed by line number minus one.
pub(crate) const LINE_FADES: [&str; 4] = [
    "ui-loader-line1-fade",
    "ui-loader-line2-fade",
    "ui-loader-line3-fade",
    "ui-loader-line4-fade",
];

// Opacity windows staggered a quarter cycle apart; line 1 additionally owns
// the wrap-around window so exactly one line is visible at any moment.
const LINE_FADE_FRAMES: [&str; 4] = [
    "from{opacity:1}25%{opacity:1}26%{opacity:0}89%{opacity:0}90%{opacity:1}to{opacity:1}",
    "from{opacity:0}15%{opacity:0}25%{opacity:1}50%{opacity:1}51%{opacity:0}to{opacity:0}",
    "from{opacity:0}40%{opacity:0}50%{opacity:1}75%{opacity:1}76%{opacity:0}to{opacity:0}",
    "from{opacity:0}65%{opacity:0}75%{opacity:1}90%{opacity:1}91%{opacity:0}to{opacity:0}",
];

pub(crate) fn keyframes_css() -> String {
    let mut css = format!(
        "@keyframes {CONTAINER_ROTATE}{{to{{transform:rotate(360deg)}}}}\
@keyframes {FILL_UNFILL_ROTATE}{{\
12.5%{{transform:rotate(135deg)}}\
25%{{transform:rotate(270deg)}}\
37.5%{{transform:rotate(405deg)}}\
50%{{transform:rotate(540deg)}}\
62.5%{{transform:rotate(675deg)}}\
75%{{transform:rotate(810deg)}}\
87.5%{{transform:rotate(945deg)}}\
to{{transform:rotate(1080deg)}}}}\
@keyframes {LEFT_SPIN}{{\
from{{transform:rotate(130deg)}}50%{{transform:rotate(-5deg)}}to{{transform:rotate(130deg)}}}}\
@keyframes {RIGHT_SPIN}{{\
from{{transform:rotate(-130deg)}}50%{{transform:rotate(5deg)}}to{{transform:rotate(-130deg)}}}}"
    );

    for (name, frames) in LINE_FADES.iter().zip(LINE_FADE_FRAMES.iter()) {
        css.push_str(&format!("@keyframes {name}{{{frames}}}"));
    }

    css
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn each_line_owns_a_distinct_fade_sequence() {
        for (i, fade) in LINE_FADES.iter().enumerate() {
            for other in LINE_FADES.iter().skip(i + 1) {
                assert_ne!(fade, other);
            }
        }
        assert_eq!(LINE_FADES.len(), LINE_FADE_FRAMES.len());
    }

    #[test]
    fn keyframes_css_defines_every_named_sequence() {
        let css = keyframes_css();
        for name in [CONTAINER_ROTATE, FILL_UNFILL_ROTATE, LEFT_SPIN, RIGHT_SPIN]
            .into_iter()
            .chain(LINE_FADES)
        {
            assert!(
                css.contains(&format!("@keyframes {name}{{")),
                "missing keyframes for {name}"
            );
        }
    }

    #[test]
    fn fade_windows_are_staggered_a_quarter_cycle_apart() {
        assert!(LINE_FADE_FRAMES[0].starts_with("from{opacity:1}25%{opacity:1}"));
        assert!(LINE_FADE_FRAMES[1].contains("25%{opacity:1}50%{opacity:1}"));
        assert!(LINE_FADE_FRAMES[2].contains("50%{opacity:1}75%{opacity:1}"));
        assert!(LINE_FADE_FRAMES[3].contains("75%{opacity:1}90%{opacity:1}"));
    }
}
