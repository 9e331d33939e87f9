//! Sound cues for the terminal frontend.
//!
//! A terminal has no mixer, so every cue is rendered as the terminal bell.
//! The handle is opened and closed by the run loop; the engine never sees it.

use std::io::{self, Write};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Fruit eaten
    Eat,
    /// Snake crashed
    GameOver,
}

/// Audio output owned by the presentation layer.
pub struct AudioHandle<W: Write = io::Stdout> {
    out: Option<W>,
    muted: bool,
}

impl AudioHandle<io::Stdout> {
    /// Opens audio on the process stdout.
    #[must_use]
    pub fn open(muted: bool) -> Self {
        Self::with_writer(io::stdout(), muted)
    }
}

impl<W: Write> AudioHandle<W> {
    #[must_use]
    pub fn with_writer(out: W, muted: bool) -> Self {
        if muted {
            log::info!("audio muted");
        }

        Self {
            out: Some(out),
            muted,
        }
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }

        let Some(out) = self.out.as_mut() else {
            return;
        };

        let result = match effect {
            SoundEffect::Eat => out.write_all(b"\x07"),
            // Two bells for a crash.
            SoundEffect::GameOver => out.write_all(b"\x07\x07"),
        }
        .and_then(|()| out.flush());

        if let Err(error) = result {
            log::warn!("failed to play {effect:?}, audio disabled: {error}");
            self.out = None;
        }
    }

    /// Releases the output, returning it to the caller.
    pub fn close(mut self) -> Option<W> {
        self.out.take()
    }
}

#[cfg(test)]
mod tests {
    use super::{AudioHandle, SoundEffect};

    #[test]
    fn cues_write_bells() {
        let mut audio = AudioHandle::with_writer(Vec::new(), false);

        audio.play(SoundEffect::Eat);
        audio.play(SoundEffect::GameOver);

        assert_eq!(audio.close(), Some(b"\x07\x07\x07".to_vec()));
    }

    #[test]
    fn muted_handle_stays_silent() {
        let mut audio = AudioHandle::with_writer(Vec::new(), true);

        audio.play(SoundEffect::Eat);

        assert!(audio.is_muted());
        assert_eq!(audio.close(), Some(Vec::new()));
    }
}
