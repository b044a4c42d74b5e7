//! Paginated menu: configuration, layout math, scroll timing and the navigator.
//!
//! * Renders the option texts of the page that holds the pointed option.
//! * Up/Down move the pointer, wrapping across pages.
//! * Left/Right flip pages when the options do not fit on one.
//! * Activate fires [`MenuListener::on_activated`] for the pointed option.
//! * Cancel fires [`MenuListener::on_cancelled`].

mod builder;
mod layout;
mod navigator;
mod scroll;

pub use builder::{DEFAULT_BG_PRIORITY, MAX_BG_PRIORITY, MenuNavigatorBuilder};
pub use layout::PageLayout;
pub use navigator::{MAX_PAGE_LINES, MenuNavigator};
pub use scroll::ScrollTiming;

use crate::audio::SoundItem;

/// Pointer movement reported to [`MenuListener::on_pointed_changed`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PointedChange {
    pub prev_page: usize,
    pub prev_index: usize,
    pub new_page: usize,
    pub new_index: usize,
}

impl PointedChange {
    pub const fn page_changed(&self) -> bool {
        self.prev_page != self.new_page
    }
}

/// Receiver of menu events, invoked synchronously from
/// [`MenuNavigator::update`].
pub trait MenuListener {
    fn on_pointed_changed(&mut self, _change: PointedChange) {}

    fn on_activated(&mut self, _index: usize) {}

    fn on_cancelled(&mut self) {}
}

impl MenuListener for () {}

impl<T> MenuListener for &mut T
where
    T: MenuListener + ?Sized,
{
    fn on_pointed_changed(&mut self, change: PointedChange) {
        (**self).on_pointed_changed(change);
    }

    fn on_activated(&mut self, index: usize) {
        (**self).on_activated(index);
    }

    fn on_cancelled(&mut self) {
        (**self).on_cancelled();
    }
}

/// Listener assembled from one closure per event.
///
/// ```
/// use menu_navigator::Callbacks;
///
/// let mut chosen = None;
/// let callbacks = Callbacks::new().on_activated(|index| chosen = Some(index));
/// # drop(callbacks);
/// # let _ = chosen;
/// ```
pub struct Callbacks<P, A, C> {
    pointed_changed: P,
    activated: A,
    cancelled: C,
}

impl Callbacks<fn(PointedChange), fn(usize), fn()> {
    pub fn new() -> Self {
        Self {
            pointed_changed: |_| {},
            activated: |_| {},
            cancelled: || {},
        }
    }
}

impl Default for Callbacks<fn(PointedChange), fn(usize), fn()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, A, C> Callbacks<P, A, C> {
    pub fn on_pointed_changed<F>(self, f: F) -> Callbacks<F, A, C>
    where
        F: FnMut(PointedChange),
    {
        Callbacks {
            pointed_changed: f,
            activated: self.activated,
            cancelled: self.cancelled,
        }
    }

    pub fn on_activated<F>(self, f: F) -> Callbacks<P, F, C>
    where
        F: FnMut(usize),
    {
        Callbacks {
            pointed_changed: self.pointed_changed,
            activated: f,
            cancelled: self.cancelled,
        }
    }

    pub fn on_cancelled<F>(self, f: F) -> Callbacks<P, A, F>
    where
        F: FnMut(),
    {
        Callbacks {
            pointed_changed: self.pointed_changed,
            activated: self.activated,
            cancelled: f,
        }
    }
}

impl<P, A, C> MenuListener for Callbacks<P, A, C>
where
    P: FnMut(PointedChange),
    A: FnMut(usize),
    C: FnMut(),
{
    fn on_pointed_changed(&mut self, change: PointedChange) {
        (self.pointed_changed)(change);
    }

    fn on_activated(&mut self, index: usize) {
        (self.activated)(index);
    }

    fn on_cancelled(&mut self) {
        (self.cancelled)();
    }
}

/// Sound cues played by the navigator. Unset cues stay silent.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MenuSfx {
    pub pointed_changed: Option<SoundItem>,
    pub activated: Option<SoundItem>,
    /// Reserved for hosts that reject an activation; never played by the
    /// navigator itself.
    pub activate_failed: Option<SoundItem>,
    pub cancelled: Option<SoundItem>,
}
