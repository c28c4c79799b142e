//! Multi-line text component

use dioxus::prelude::*;
use fider_common::{text_lines, TextLines};

/// Renders text with a line break after every `\n`-separated segment.
///
/// Absent or empty text renders a single empty paragraph.
#[component]
pub fn MultiLineText(#[props(default)] text: Option<String>) -> Element {
    match text_lines(text.as_deref()) {
        TextLines::Empty => rsx! {
            p {}
        },
        TextLines::Lines(lines) => rsx! {
            div {
                for (i, line) in lines.into_iter().enumerate() {
                    span { key: "{i}",
                        "{line}"
                        br {}
                    }
                }
            }
        },
    }
}
