//! Fixed-cadence frame loop
//!
//! A dedicated thread advances the simulation once per ~16 ms tick and then
//! renders, both under the shared game-state lock so the two phases never
//! interleave mid-frame. The cadence is best effort: a late tick is not
//! compensated, the loop just sleeps its fixed period again. Stopping joins
//! the thread, so the in-flight tick always completes before the caller gets
//! the surface back.
//!
//! Input reaches the loop through an intent mailbox: movement flags and
//! weapon selection are idempotent sets, attack and restart are one-shot
//! triggers consumed at the next tick boundary.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::audio::{CueParams, CuePlayer, MusicController};
use crate::consts::TICK_MILLIS;
use crate::persistence::KeyValueStore;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, WeaponKind, tick};

/// Render-surface consumer, called once per tick after State Advance
///
/// Absence of a sink never skips the advance; the round clock is wall-clock
/// based either way.
pub trait RenderSink: Send {
    fn render(&mut self, state: &GameState);
}

/// Pending intents, written by the host and drained once per tick
#[derive(Debug, Clone, Default)]
pub struct IntentState {
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    pending_weapon: Option<WeaponKind>,
    attack_queued: bool,
    restart_queued: bool,
}

impl IntentState {
    /// Build this tick's input; one-shot triggers are consumed
    fn take_input(&mut self) -> TickInput {
        TickInput {
            move_up: self.move_up,
            move_down: self.move_down,
            move_left: self.move_left,
            move_right: self.move_right,
            select_weapon: self.pending_weapon.take(),
            attack: std::mem::take(&mut self.attack_queued),
            restart: std::mem::take(&mut self.restart_queued),
        }
    }
}

/// External collaborators the loop drives on behalf of the simulation
pub struct Collaborators {
    pub cues: Arc<dyn CuePlayer>,
    pub music: Arc<dyn MusicController>,
    pub store: Box<dyn KeyValueStore>,
    pub render: Option<Box<dyn RenderSink>>,
}

struct Shared {
    game: Mutex<GameState>,
    intents: Mutex<IntentState>,
    settings: Mutex<Settings>,
    running: AtomicBool,
}

/// Handle to the running frame loop
pub struct FrameLoop {
    shared: Arc<Shared>,
    music: Arc<dyn MusicController>,
    handle: Option<JoinHandle<()>>,
}

impl FrameLoop {
    /// Spawn the loop thread. The wall clock starts now; `state` should have
    /// been constructed with `now_ms` 0 (or restarted on the first tick).
    pub fn start(state: GameState, settings: Settings, collaborators: Collaborators) -> Self {
        let Collaborators {
            cues,
            music,
            mut store,
            mut render,
        } = collaborators;

        let shared = Arc::new(Shared {
            game: Mutex::new(state),
            intents: Mutex::new(IntentState::default()),
            settings: Mutex::new(settings),
            running: AtomicBool::new(true),
        });

        let loop_shared = Arc::clone(&shared);
        let loop_cues = Arc::clone(&cues);
        let loop_music = Arc::clone(&music);
        let epoch = Instant::now();

        let handle = thread::Builder::new()
            .name("frame-loop".into())
            .spawn(move || {
                log::info!("frame loop started");
                while loop_shared.running.load(Ordering::Acquire) {
                    let now_ms = epoch.elapsed().as_millis() as u64;
                    let input = loop_shared.intents.lock().unwrap().take_input();
                    let settings = *loop_shared.settings.lock().unwrap();
                    {
                        let mut game = loop_shared.game.lock().unwrap();
                        tick(&mut game, &input, now_ms);
                        for event in game.drain_events() {
                            dispatch(
                                event,
                                &game,
                                &settings,
                                loop_cues.as_ref(),
                                loop_music.as_ref(),
                                store.as_mut(),
                            );
                        }
                        if let Some(sink) = render.as_mut() {
                            sink.render(&game);
                        }
                    }
                    // Best-effort cadence, no catch-up on overrun
                    thread::sleep(Duration::from_millis(TICK_MILLIS));
                }
                log::info!("frame loop stopped");
            })
            .expect("failed to spawn frame loop thread");

        Self {
            shared,
            music,
            handle: Some(handle),
        }
    }

    // --- intent surface ---

    pub fn set_moving_up(&self, on: bool) {
        self.shared.intents.lock().unwrap().move_up = on;
    }

    pub fn set_moving_down(&self, on: bool) {
        self.shared.intents.lock().unwrap().move_down = on;
    }

    pub fn set_moving_left(&self, on: bool) {
        self.shared.intents.lock().unwrap().move_left = on;
    }

    pub fn set_moving_right(&self, on: bool) {
        self.shared.intents.lock().unwrap().move_right = on;
    }

    /// Release every movement flag (pointer lifted)
    pub fn stop_moving(&self) {
        let mut intents = self.shared.intents.lock().unwrap();
        intents.move_up = false;
        intents.move_down = false;
        intents.move_left = false;
        intents.move_right = false;
    }

    pub fn select_weapon(&self, weapon: WeaponKind) {
        self.shared.intents.lock().unwrap().pending_weapon = Some(weapon);
    }

    /// Queue one attack for the next tick
    pub fn trigger_attack(&self) {
        self.shared.intents.lock().unwrap().attack_queued = true;
    }

    /// Queue a round restart for the next tick
    pub fn request_restart(&self) {
        self.shared.intents.lock().unwrap().restart_queued = true;
    }

    // --- settings / music ---

    pub fn toggle_music(&self) {
        let mut settings = self.shared.settings.lock().unwrap();
        settings.toggle_music();
        if settings.music_enabled {
            if !self.music.is_playing() {
                self.music.rewind();
            }
            self.music.start();
        } else {
            self.music.pause();
        }
    }

    pub fn toggle_sound_effects(&self) {
        self.shared.settings.lock().unwrap().toggle_sound_effects();
    }

    pub fn settings(&self) -> Settings {
        *self.shared.settings.lock().unwrap()
    }

    // --- observation ---

    /// Read the game state under the shared lock
    pub fn with_game<R>(&self, f: impl FnOnce(&GameState) -> R) -> R {
        f(&self.shared.game.lock().unwrap())
    }

    pub fn is_running(&self) -> bool {
        self.shared.running.load(Ordering::Acquire)
    }

    /// Stop the loop and wait for the in-flight tick to finish
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.shared.running.store(false, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("frame loop thread panicked");
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Forward one simulation event to the collaborator it concerns
fn dispatch(
    event: GameEvent,
    game: &GameState,
    settings: &Settings,
    cues: &dyn CuePlayer,
    music: &dyn MusicController,
    store: &mut dyn KeyValueStore,
) {
    match event {
        GameEvent::Cue(cue) => {
            if settings.sound_effects_enabled {
                cues.trigger(cue, CueParams::for_cue(cue));
            }
        }
        GameEvent::MusicPaused => {
            if music.is_playing() {
                music.pause();
            }
        }
        GameEvent::ScoresChanged => game.high_scores.save(store),
        GameEvent::RoundRestarted => {
            if settings.music_enabled && !music.is_playing() {
                music.rewind();
                music.start();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::SpriteTable;
    use crate::audio::{NullCuePlayer, NullMusic};
    use crate::highscores::HighScores;
    use crate::persistence::MemoryStore;
    use crate::sim::{Bounds, Outcome};

    fn headless_loop() -> FrameLoop {
        let state = GameState::new(
            7,
            Bounds::default(),
            &SpriteTable::standard(),
            HighScores::default_ledger(),
            0,
        );
        FrameLoop::start(
            state,
            Settings::default(),
            Collaborators {
                cues: Arc::new(NullCuePlayer),
                music: Arc::new(NullMusic),
                store: Box::new(MemoryStore::new()),
                render: None,
            },
        )
    }

    #[test]
    fn loop_ticks_without_a_render_sink() {
        let frame_loop = headless_loop();
        thread::sleep(Duration::from_millis(120));
        // Scroll advances every simulated tick, so some ticks must have run
        let scrolled = frame_loop.with_game(|g| g.scroll_offset);
        assert!(scrolled < 0.0);
        assert!(frame_loop.with_game(|g| g.outcome) == Outcome::Running);
        frame_loop.stop();
    }

    #[test]
    fn attack_intent_is_consumed_once() {
        let frame_loop = headless_loop();
        frame_loop.trigger_attack();
        thread::sleep(Duration::from_millis(120));
        // One queued attack yields exactly one fireball (it flies right and
        // despawns long after this window)
        let fired = frame_loop.with_game(|g| g.projectiles.len());
        assert_eq!(fired, 1);
        frame_loop.stop();
    }

    #[test]
    fn movement_intents_steer_the_player() {
        let frame_loop = headless_loop();
        let start_x = frame_loop.with_game(|g| g.player.entity.pos.x);
        frame_loop.set_moving_right(true);
        thread::sleep(Duration::from_millis(100));
        frame_loop.stop_moving();
        let moved_x = frame_loop.with_game(|g| g.player.entity.pos.x);
        assert!(moved_x > start_x);
        frame_loop.stop();
    }

    #[test]
    fn stop_joins_the_loop_thread() {
        let frame_loop = headless_loop();
        assert!(frame_loop.is_running());
        frame_loop.stop();
        // Dropping after stop must not double-join or hang
    }

    #[test]
    fn take_input_clears_one_shots_and_keeps_flags() {
        let mut intents = IntentState {
            move_left: true,
            ..Default::default()
        };
        intents.attack_queued = true;
        intents.restart_queued = true;
        intents.pending_weapon = Some(WeaponKind::SwordSlash);

        let first = intents.take_input();
        assert!(first.move_left && first.attack && first.restart);
        assert_eq!(first.select_weapon, Some(WeaponKind::SwordSlash));

        let second = intents.take_input();
        assert!(second.move_left);
        assert!(!second.attack && !second.restart);
        assert_eq!(second.select_weapon, None);
    }
}
