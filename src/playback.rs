//! Playback exclusivity: at most one audio preview plays at a time.
//!
//! The host owns the audio clips and exposes them through a
//! [`ClipRegistry`]. The controller never scans for players on its own; it
//! asks the registry which clips are playing and pauses them before
//! starting the requested one, all within a single call.

use serde::Serialize;

/// Audio clips owned by the host (one per timeline entry).
///
/// Commands are fire-and-forget. `pause` must be idempotent.
pub trait ClipRegistry {
    type Handle: Copy + PartialEq + std::fmt::Debug;

    /// Every clip currently playing other than `handle`.
    fn playing_except(&self, handle: Self::Handle) -> Vec<Self::Handle>;
    fn pause(&mut self, handle: Self::Handle);
    /// Move the play position back to zero.
    fn rewind(&mut self, handle: Self::Handle);
    fn play(&mut self, handle: Self::Handle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "clip", rename_all = "camelCase")]
pub enum PlaybackState<H> {
    Idle,
    Playing(H),
}

#[derive(Debug, Clone)]
pub struct PlaybackController<H> {
    state: PlaybackState<H>,
}

impl<H> Default for PlaybackController<H> {
    fn default() -> Self {
        Self {
            state: PlaybackState::Idle,
        }
    }
}

impl<H: Copy + PartialEq + std::fmt::Debug> PlaybackController<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState<H> {
        self.state
    }

    pub fn is_playing(&self, handle: H) -> bool {
        self.state == PlaybackState::Playing(handle)
    }

    /// Start `handle` from the beginning, pausing every other clip first.
    pub fn request_play<R>(&mut self, registry: &mut R, handle: H)
    where
        R: ClipRegistry<Handle = H>,
    {
        for other in registry.playing_except(handle) {
            log::debug!("pausing clip {:?} before playing {:?}", other, handle);
            registry.pause(other);
        }
        registry.rewind(handle);
        registry.play(handle);
        log::debug!("playing clip {:?}", handle);
        self.state = PlaybackState::Playing(handle);
    }

    /// Pause whatever is playing.
    pub fn stop<R>(&mut self, registry: &mut R)
    where
        R: ClipRegistry<Handle = H>,
    {
        if let PlaybackState::Playing(current) = self.state {
            registry.pause(current);
            log::debug!("stopped clip {:?}", current);
        }
        self.state = PlaybackState::Idle;
    }

    /// The host saw `handle` reach its end.
    pub fn clip_ended(&mut self, handle: H) {
        if self.is_playing(handle) {
            self.state = PlaybackState::Idle;
        }
    }
}
