//! Audio seams: fire-and-forget cues and background music control
//!
//! The simulation only names cues; the host supplies the backends. Both
//! traits are fire-and-forget so a missing or failed audio device can never
//! stall a tick.

/// Sound effect types the game can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Weapon fired (fireball or sword slash)
    Attack,
    /// Super bomb detonated
    SuperBomb,
    /// Item collected
    ItemPickup,
}

/// Playback parameters for a single cue trigger
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CueParams {
    pub left_volume: f32,
    pub right_volume: f32,
    pub priority: i32,
    pub loop_count: i32,
    pub rate: f32,
}

impl Default for CueParams {
    fn default() -> Self {
        Self {
            left_volume: 1.0,
            right_volume: 1.0,
            priority: 1,
            loop_count: 0,
            rate: 1.0,
        }
    }
}

impl CueParams {
    /// Per-cue tuning; the bomb plays louder and slightly faster
    pub fn for_cue(cue: AudioCue) -> Self {
        match cue {
            AudioCue::SuperBomb => Self {
                left_volume: 1.2,
                right_volume: 1.2,
                rate: 1.1,
                ..Self::default()
            },
            AudioCue::Attack | AudioCue::ItemPickup => Self::default(),
        }
    }
}

/// One-shot sound effect backend
pub trait CuePlayer: Send + Sync {
    fn trigger(&self, cue: AudioCue, params: CueParams);
}

/// Looping background music backend
pub trait MusicController: Send + Sync {
    fn start(&self);
    fn pause(&self);
    /// Seek back to the beginning of the track
    fn rewind(&self);
    fn is_playing(&self) -> bool;
}

/// Backend that swallows every cue; used headless and in tests
#[derive(Debug, Default)]
pub struct NullCuePlayer;

impl CuePlayer for NullCuePlayer {
    fn trigger(&self, cue: AudioCue, _params: CueParams) {
        log::debug!("cue {cue:?} (no audio backend)");
    }
}

/// Music controller that never plays; used headless and in tests
#[derive(Debug, Default)]
pub struct NullMusic;

impl MusicController for NullMusic {
    fn start(&self) {}
    fn pause(&self) {}
    fn rewind(&self) {}
    fn is_playing(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bomb_cue_is_louder_and_faster() {
        let params = CueParams::for_cue(AudioCue::SuperBomb);
        assert!(params.left_volume > 1.0);
        assert!(params.right_volume > 1.0);
        assert!(params.rate > 1.0);
        assert_eq!(params.loop_count, 0);
    }

    #[test]
    fn standard_cues_use_defaults() {
        assert_eq!(CueParams::for_cue(AudioCue::Attack), CueParams::default());
        assert_eq!(
            CueParams::for_cue(AudioCue::ItemPickup),
            CueParams::default()
        );
    }
}
