//! High score persistence
//!
//! One integer in a plain text file. A missing or malformed file counts as
//! "no score yet" rather than an error, and the file is only rewritten when
//! a new score strictly beats the stored one.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The persisted best score for one game
#[derive(Debug, Clone)]
pub struct HighScore {
    path: PathBuf,
    best: u32,
}

impl HighScore {
    /// Load the stored score, defaulting to 0 on any read or parse failure
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = read_score(&path);
        Self { path, best }
    }

    /// Best score seen so far (0 if none)
    pub fn best(&self) -> u32 {
        self.best
    }

    /// Check whether a score would beat the stored best
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.best
    }

    /// Record a finished session's score.
    ///
    /// Overwrites the file iff the score strictly exceeds the stored best.
    /// Returns whether a new record was written.
    pub fn submit(&mut self, score: u32) -> io::Result<bool> {
        if !self.qualifies(score) {
            return Ok(false);
        }
        fs::write(&self.path, score.to_string())?;
        log::info!("new high score {} (was {})", score, self.best);
        self.best = score;
        Ok(true)
    }
}

fn read_score(path: &Path) -> u32 {
    match fs::read_to_string(path) {
        Ok(text) => match text.trim().parse() {
            Ok(score) => score,
            Err(_) => {
                log::warn!("malformed high score file {:?}, treating as 0", path);
                0
            }
        },
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("arcade_cabinet_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_defaults_to_zero() {
        let path = temp_path("missing.txt");
        let _ = fs::remove_file(&path);
        assert_eq!(HighScore::load(&path).best(), 0);
    }

    #[test]
    fn test_malformed_file_defaults_to_zero() {
        let path = temp_path("malformed.txt");
        fs::write(&path, "not a number").unwrap();
        assert_eq!(HighScore::load(&path).best(), 0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_submit_only_on_strict_improvement() {
        let path = temp_path("strict.txt");
        fs::write(&path, "10").unwrap();

        let mut hs = HighScore::load(&path);
        assert_eq!(hs.best(), 10);

        // Lower and equal scores leave the file alone
        assert!(!hs.submit(7).unwrap());
        assert!(!hs.submit(10).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "10");

        // A strictly higher score rewrites it
        assert!(hs.submit(15).unwrap());
        assert_eq!(hs.best(), 15);
        assert_eq!(fs::read_to_string(&path).unwrap(), "15");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_reload_sees_submitted_score() {
        let path = temp_path("reload.txt");
        let _ = fs::remove_file(&path);

        let mut hs = HighScore::load(&path);
        hs.submit(42).unwrap();
        assert_eq!(HighScore::load(&path).best(), 42);

        let _ = fs::remove_file(&path);
    }
}
