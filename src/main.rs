//! Knight Rush entry point
//!
//! Headless demo driver: boots the frame loop with null audio and an
//! in-memory store, plays a few seconds of a round with scripted intents,
//! and prints the resulting stats. A real front end supplies its own
//! sprite provider, audio backends, storage, and render sink.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use knight_rush::assets::SpriteTable;
use knight_rush::audio::{NullCuePlayer, NullMusic};
use knight_rush::driver::{Collaborators, FrameLoop};
use knight_rush::highscores::HighScores;
use knight_rush::persistence::MemoryStore;
use knight_rush::settings::Settings;
use knight_rush::sim::{Bounds, GameState, WeaponKind};

fn main() {
    env_logger::init();

    let mut store = MemoryStore::new();
    let high_scores = HighScores::load(&mut store);
    let settings = Settings::load(&store);

    let state = GameState::new(
        0xC0FFEE,
        Bounds::default(),
        &SpriteTable::standard(),
        high_scores,
        0,
    );

    let frame_loop = FrameLoop::start(
        state,
        settings,
        Collaborators {
            cues: Arc::new(NullCuePlayer),
            music: Arc::new(NullMusic),
            store: Box::new(store),
            render: None,
        },
    );

    // Drift toward the incoming enemies and swing the sword now and then.
    frame_loop.select_weapon(WeaponKind::SwordSlash);
    frame_loop.set_moving_right(true);
    for _ in 0..8 {
        thread::sleep(Duration::from_millis(750));
        frame_loop.trigger_attack();
    }
    frame_loop.stop_moving();

    let (health, gold, remaining, outcome) = frame_loop.with_game(|game| {
        (
            game.player.health,
            game.player.gold,
            game.remaining_secs(6000),
            game.outcome,
        )
    });
    println!("after demo: outcome {outcome:?}, health {health}, gold {gold}, {remaining}s left");
    let top = frame_loop.with_game(|game| game.high_scores.entries().to_vec());
    println!("high scores: {top:?}");

    frame_loop.stop();
}
