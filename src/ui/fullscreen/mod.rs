// SPDX-License-Identifier: MPL-2.0
//! Full-screen viewer: zoom, pan-to-dismiss and reposition gestures over
//! a nested carousel.

pub mod component;
pub mod dismiss;
pub mod reposition;
pub mod view;
pub mod zoom;

pub use component::{Effect, Message, State};
pub use view::view;
