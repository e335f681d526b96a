// SPDX-License-Identifier: MPL-2.0
//! Inline carousel: paging slide collection, lazy image loading and the
//! page indicator.

pub mod component;
pub mod indicator;
pub mod paging;
pub mod view;

pub use component::{Effect, Message, Seed, State};
pub use indicator::Indicator;
pub use view::view;
