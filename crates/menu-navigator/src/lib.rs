#![cfg_attr(not(test), no_std)]

//! Paginated menu navigation widget for frame-stepped handheld UIs.
//!
//! The widget renders a list of text options across fixed-size pages, tracks a
//! single pointed option and turns held/pressed keypad input into selection
//! changes with auto-repeat, page flips, sound cues and listener callbacks.
//!
//! Rendering, audio and input are provided by the host through the traits in
//! [`render`], [`audio`] and [`input`].

pub mod audio;
pub mod error;
pub mod input;
pub mod menu;
pub mod render;

pub use audio::{SfxPlayer, SoundHandle, SoundItem};
pub use error::ConfigError;
pub use input::{Directions, KeyState, Keypad};
pub use menu::{
    Callbacks, MenuListener, MenuNavigator, MenuNavigatorBuilder, MenuSfx, PageLayout,
    PointedChange, ScrollTiming,
};
pub use render::{Color, Font, GenerateError, Palette, Point, TextGenerator, TextSprite};
