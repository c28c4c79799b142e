//! fider-ui - Shared presentational components for fider
//!
//! Pure view components: each one is a function of its props and renders
//! the view models from `fider-common`.

pub mod components;

pub use components::*;
pub use fider_common::ErrorNotice;
