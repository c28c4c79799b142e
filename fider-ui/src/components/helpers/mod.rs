//! Common helper UI components

mod display_error;
mod gravatar;
mod multi_line_text;

pub use display_error::DisplayError;
pub use gravatar::Gravatar;
pub use multi_line_text::MultiLineText;
