/// Best-score persistence.
///
/// One small JSON record at a fixed path. A missing or malformed file reads
/// as zero; writes are best-effort — losing a score file is never worth
/// interrupting play.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreRecord {
    pub highest_score: u32,
}

pub fn score_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".alien_armada_score.json")
}

pub fn load_high_score(path: &Path) -> u32 {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|s| serde_json::from_str::<ScoreRecord>(&s).ok())
        .map(|record| record.highest_score)
        .unwrap_or(0)
}

pub fn save_high_score(path: &Path, highest_score: u32) {
    let record = ScoreRecord { highest_score };
    if let Ok(json) = serde_json::to_string(&record) {
        let _ = std::fs::write(path, json);
    }
}
