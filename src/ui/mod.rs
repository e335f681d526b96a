// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down,
//! messages up" pattern.
//!
//! - [`carousel`] - Inline paging slide collection with lazy image
//!   loading and a page indicator
//! - [`fullscreen`] - Full-screen viewer with pinch-to-zoom,
//!   pan-to-dismiss and pan-to-reposition gestures
//! - [`widgets`] - Custom Iced widgets (loading spinner)

pub mod carousel;
pub mod fullscreen;
pub mod widgets;
