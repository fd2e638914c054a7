// SPDX-License-Identifier: MPL-2.0
//! User interface components for rendering the notification center.
//!
//! This module follows the Elm-style "state down, messages up" pattern:
//! the widgets read queue state and emit [`toast::Manager`] and
//! [`popup::Stack`] messages that the host feeds back through
//! `handle_message`.
//!
//! - [`toast`] - Toast cards and the bottom-right overlay column
//! - [`popup`] - Modal backdrop and dialog cards over arbitrary content
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//!
//! [`toast::Manager`]: crate::toast::Manager
//! [`popup::Stack`]: crate::popup::Stack

pub mod design_tokens;
pub mod popup;
pub mod theming;
pub mod toast;
