//! High score ledger
//!
//! Six descending entries, persisted through the key-value store as a
//! comma-delimited integer list. Won rounds record the gold haul; lost rounds
//! never touch the ledger.

use serde::{Deserialize, Serialize};

use crate::persistence::KeyValueStore;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 6;

/// Ledger contents on first run or after a corrupt read
pub const DEFAULT_LEDGER: [u32; 6] = [500, 400, 300, 200, 100, 50];

/// High score ledger, sorted descending
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HighScores {
    entries: Vec<u32>,
}

impl HighScores {
    /// Storage key in the key-value store
    pub const STORAGE_KEY: &'static str = "high_scores";

    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The seed ledger shown before anyone has played
    pub fn default_ledger() -> Self {
        Self {
            entries: DEFAULT_LEDGER.to_vec(),
        }
    }

    /// Insert a score, keeping the ledger sorted descending and capped
    pub fn record(&mut self, score: u32) {
        let pos = self
            .entries
            .iter()
            .position(|&e| score > e)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, score);
        self.entries.truncate(MAX_HIGH_SCORES);
    }

    /// Whether a score would appear on the ledger if recorded now
    pub fn would_place(&self, score: u32) -> bool {
        self.entries.len() < MAX_HIGH_SCORES
            || self.entries.last().is_some_and(|&lowest| score > lowest)
    }

    /// Scores in rank order
    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().copied()
    }

    /// Comma-delimited wire form, e.g. `500,400,300,200,100,50`
    pub fn to_delimited(&self) -> String {
        self.entries
            .iter()
            .map(|score| score.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Parse the wire form; any malformed field rejects the whole string
    pub fn from_delimited(raw: &str) -> Option<Self> {
        let mut entries: Vec<u32> = Vec::new();
        for field in raw.split(',').filter(|f| !f.is_empty()) {
            entries.push(field.trim().parse().ok()?);
        }
        if entries.is_empty() {
            return None;
        }
        entries.sort_unstable_by(|a, b| b.cmp(a));
        entries.truncate(MAX_HIGH_SCORES);
        Some(Self { entries })
    }

    /// Load from the store; a missing or corrupt value reseeds the default
    /// ledger and writes it back
    pub fn load(store: &mut dyn KeyValueStore) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Some(raw) => match Self::from_delimited(&raw) {
                Some(scores) => {
                    log::info!("loaded {} high scores", scores.entries.len());
                    scores
                }
                None => {
                    log::warn!("stored high scores malformed, reseeding defaults");
                    let scores = Self::default_ledger();
                    scores.save(store);
                    scores
                }
            },
            None => {
                log::info!("no high scores found, seeding defaults");
                let scores = Self::default_ledger();
                scores.save(store);
                scores
            }
        }
    }

    /// Persist the current ledger
    pub fn save(&self, store: &mut dyn KeyValueStore) {
        store.put(Self::STORAGE_KEY, &self.to_delimited());
        log::debug!("high scores saved ({} entries)", self.entries.len());
    }
}
