// SPDX-License-Identifier: MPL-2.0
//! Flutter component preview panel.
//!
//! "State down, messages up": the host owns a [`State`], forwards
//! [`Message`]s to [`State::update`] and pushes theme snapshots down as
//! [`Message::ThemeChanged`].

pub mod component;
mod fallback;
mod frame;

pub use component::{Context, Message, Props, State};
