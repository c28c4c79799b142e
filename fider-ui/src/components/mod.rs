//! Shared UI components

pub mod helpers;

pub use helpers::{DisplayError, Gravatar, MultiLineText};
