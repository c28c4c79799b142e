use dioxus::prelude::*;

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// Render a component tree to an HTML string
pub fn render(element: Element) -> String {
    dioxus_ssr::render_element(element)
}
