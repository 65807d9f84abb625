// Defensive programming lints - prevent panics and unsafe patterns
#![deny(clippy::indexing_slicing)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::fallible_impl_from)]
#![warn(clippy::wildcard_enum_match_arm)]
#![warn(clippy::fn_params_excessive_bools)]
// Idiomatic Rust lints
#![warn(clippy::needless_return)]
#![warn(clippy::let_and_return)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::explicit_iter_loop)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::indexing_slicing))]

//! A text field whose placeholder floats above the entered text.
//!
//! The widget core is host independent: layout and animation go through the
//! [`LayoutEngine`] and [`Animator`] collaborators and icons through
//! [`AssetLoader`]. The [`ui`] module draws it with ratatui.

pub mod animation;
pub mod assets;
pub mod config;
pub mod field;
pub mod layout;
pub mod logging;
pub mod style;
pub mod ui;

pub use animation::{Animator, ImmediateAnimator, TRANSITION_DURATION, TickAnimator};
pub use assets::{AssetLoader, BundledAssets, Icon};
pub use field::{
    FieldChanges, FieldState, FloatingLabelTextField, TextEntryDelegate, UNLIMITED,
};
pub use layout::{ConstraintLayout, LayoutEngine};
pub use style::{CornerMask, FieldStyle, FontDescriptor, Rgba, color_from_hex_string};
