//! Sound collaborator. Cues are symbolic names; a missing clip is a logged
//! no-op and never reaches the tick loop as an error.

pub const SOUND_LASER: &str = "laser";
pub const SOUND_MISSILE: &str = "missile";
pub const SOUND_EXPLOSION: &str = "explosion";
pub const SOUND_PICKUP: &str = "pickup";
pub const SOUND_MUSIC: &str = "music";

pub trait AudioPlayer: Send {
    fn play(&mut self, name: &str) -> anyhow::Result<()>;
    fn loop_sound(&mut self, name: &str) -> anyhow::Result<()>;
    fn stop_sound(&mut self, name: &str) -> anyhow::Result<()>;
}

/// Silent player used when no audio backend is attached.
#[derive(Default)]
pub struct NullAudio;

impl AudioPlayer for NullAudio {
    fn play(&mut self, _name: &str) -> anyhow::Result<()> {
        Ok(())
    }

    fn loop_sound(&mut self, _name: &str) -> anyhow::Result<()> {
        Ok(())
    }

    fn stop_sound(&mut self, _name: &str) -> anyhow::Result<()> {
        Ok(())
    }
}
