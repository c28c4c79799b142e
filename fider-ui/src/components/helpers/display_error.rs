//! Error display component

use dioxus::prelude::*;
use fider_common::{ErrorNotice, ERROR_HEADER};

/// Negative message box with a fixed header and the error's message.
///
/// Renders an empty div when there is no error.
#[component]
pub fn DisplayError(#[props(default)] error: Option<ErrorNotice>) -> Element {
    let Some(error) = error else {
        return rsx! {
            div {}
        };
    };

    tracing::debug!("Displaying error: {}", error);
    let message = error.message();

    rsx! {
        div { class: "ui negative message",
            div { class: "header", "{ERROR_HEADER}" }
            p { "{message}" }
        }
    }
}
