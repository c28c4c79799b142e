//! Fixture page showing each component in all of its states

use crate::error::GalleryError;
use dioxus::prelude::*;
use fider_ui::{DisplayError, ErrorNotice, Gravatar, MultiLineText};
use std::io;
use std::path::PathBuf;

pub const SEMANTIC_UI_CSS: &str =
    "https://cdn.jsdelivr.net/npm/semantic-ui@2.4.2/dist/semantic.min.css";

const EMAILS: &[Option<&str>] = &[
    Some("test@example.com"),
    Some("jon.snow@got.com"),
    Some(""),
    None,
];

const TEXTS: &[Option<&str>] = &[
    Some("A single line"),
    Some("First line\nSecond line\n\nAfter a blank line"),
    Some("\n"),
    Some(""),
    None,
];

/// Human-readable label for an optional fixture value
fn describe(value: Option<&str>) -> String {
    match value {
        Some(value) => format!("{:?}", value),
        None => "absent".to_string(),
    }
}

/// Error shown in the gallery's failure example
fn sample_failure() -> ErrorNotice {
    let err = GalleryError::Io {
        path: PathBuf::from("/srv/fider/gallery.html"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
    };
    ErrorNotice::from_error(&err)
}

#[component]
fn Section(heading: String, children: Element) -> Element {
    rsx! {
        div { class: "ui segment",
            h2 { class: "ui header", "{heading}" }
            div { class: "ui list", {children} }
        }
    }
}

#[component]
fn GalleryPage(title: String, stylesheet: String) -> Element {
    let emails: Vec<(Option<String>, String)> = EMAILS
        .iter()
        .map(|email| (email.map(str::to_string), describe(*email)))
        .collect();
    let texts: Vec<(Option<String>, String)> = TEXTS
        .iter()
        .map(|text| (text.map(str::to_string), describe(*text)))
        .collect();
    let failure = sample_failure();

    rsx! {
        head {
            meta { charset: "utf-8" }
            title { "{title}" }
            link { rel: "stylesheet", href: "{stylesheet}" }
        }
        body {
            div { class: "ui container",
                h1 { class: "ui header", "{title}" }
                Section { heading: "Gravatar",
                    for (i, (email, label)) in emails.into_iter().enumerate() {
                        div { key: "{i}", class: "item",
                            Gravatar { email }
                            code { "{label}" }
                        }
                    }
                }
                Section { heading: "MultiLineText",
                    for (i, (text, label)) in texts.into_iter().enumerate() {
                        div { key: "{i}", class: "item",
                            code { "{label}" }
                            MultiLineText { text }
                        }
                    }
                }
                Section { heading: "DisplayError",
                    div { class: "item",
                        code { "absent" }
                        DisplayError {}
                    }
                    div { class: "item",
                        code { "{failure}" }
                        DisplayError { error: failure.clone() }
                    }
                }
            }
        }
    }
}

/// Render the full gallery document.
pub fn render_page(title: &str, stylesheet: &str) -> String {
    tracing::debug!(
        "Rendering gallery with {} emails and {} texts",
        EMAILS.len(),
        TEXTS.len()
    );
    let document = dioxus_ssr::render_element(rsx! {
        GalleryPage { title: title.to_string(), stylesheet: stylesheet.to_string() }
    });
    format!("<!DOCTYPE html>\n<html>{}</html>", document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_is_a_document() {
        let page = render_page("Components", SEMANTIC_UI_CSS);
        assert!(page.starts_with("<!DOCTYPE html>\n<html><head>"));
        assert!(page.ends_with("</body></html>"));
        assert!(page.contains("<title>Components</title>"));
        assert!(page.contains(SEMANTIC_UI_CSS));
    }

    #[test]
    fn test_title_is_escaped() {
        let page = render_page("<Fider>", SEMANTIC_UI_CSS);
        assert!(!page.contains("<Fider>"));
    }

    #[test]
    fn test_every_email_fixture_renders_an_avatar() {
        let page = render_page("Components", SEMANTIC_UI_CSS);
        assert_eq!(page.matches("ui avatar image").count(), EMAILS.len());
        assert!(page.contains("https://www.gravatar.com/avatar/55502f40dc8b7c769880b10874abc9d0"));
        assert!(page.contains(r#"src="https://www.gravatar.com/avatar/""#));
    }

    #[test]
    fn test_failure_example_is_rendered() {
        let page = render_page("Components", SEMANTIC_UI_CSS);
        assert_eq!(page.matches("Oops, an error occurred...").count(), 1);
        assert!(page.contains("permission denied"));
    }

    #[test]
    fn test_describe_distinguishes_empty_from_absent() {
        assert_eq!(describe(None), "absent");
        assert_eq!(describe(Some("")), "\"\"");
    }
}
