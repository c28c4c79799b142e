//! Gravatar avatar component

use dioxus::prelude::*;
use fider_common::{gravatar_url, AVATAR_CLASS};

/// Avatar image for an email address, served by gravatar.com
#[component]
pub fn Gravatar(
    /// Hashed as-is; when absent the URL ends with an empty digest
    #[props(default)]
    email: Option<String>,
) -> Element {
    let src = gravatar_url(email.as_deref());

    rsx! {
        img { class: AVATAR_CLASS, src: "{src}" }
    }
}
