//! Sound cue playback abstraction.

/// Opaque identifier of a sound effect known to the host's audio engine.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SoundItem(pub u16);

/// Handle to a cue that is currently playing.
pub trait SoundHandle {
    fn stop(&mut self);
}

/// Best-effort sound effect player.
pub trait SfxPlayer {
    type Handle: SoundHandle;

    /// Starts `sfx`, returning `None` when it could not be played.
    fn play(&mut self, sfx: SoundItem) -> Option<Self::Handle>;
}

impl SoundHandle for () {
    fn stop(&mut self) {}
}

/// Silent player for menus without audio.
impl SfxPlayer for () {
    type Handle = ();

    fn play(&mut self, _sfx: SoundItem) -> Option<Self::Handle> {
        None
    }
}

impl<T> SfxPlayer for &mut T
where
    T: SfxPlayer + ?Sized,
{
    type Handle = T::Handle;

    fn play(&mut self, sfx: SoundItem) -> Option<Self::Handle> {
        (**self).play(sfx)
    }
}
