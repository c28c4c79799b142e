//! fider-common - View-model logic shared by the fider UI components
//!
//! Everything here is framework-free: the components in `fider-ui` only
//! turn these values into markup.

pub mod gravatar;
pub mod multiline;
pub mod notice;

pub use gravatar::{gravatar_hash, gravatar_url, md5_hex, AVATAR_CLASS, GRAVATAR_BASE_URL};
pub use multiline::{text_lines, TextLines};
pub use notice::{ErrorNotice, ERROR_HEADER};
