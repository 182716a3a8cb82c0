//! Isolated test environment with temp directory.

use super::{JotCommand, TestNote};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary data directory.
///
/// The data directory and an empty config home live under one temp
/// directory that is removed on drop.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the data directory
    data_dir: PathBuf,
    /// Path used as `XDG_CONFIG_HOME`
    config_home: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let data_dir = temp_dir.path().join("data");
        let config_home = temp_dir.path().join("config");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data directory");
        std::fs::create_dir_all(&config_home).expect("Failed to create config directory");
        Self {
            _temp_dir: temp_dir,
            data_dir,
            config_home,
        }
    }

    /// Returns the path to the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the path of the default slot file.
    pub fn slot_path(&self) -> PathBuf {
        self.data_dir.join("notes.json")
    }

    /// Writes the given notes to the default slot, in order.
    pub fn seed(&self, notes: &[TestNote]) {
        let records: Vec<Value> = notes.iter().map(TestNote::to_json).collect();
        let json = serde_json::to_string(&records).expect("Failed to serialize notes");
        self.write_slot(&json);
    }

    /// Writes raw text to the default slot.
    pub fn write_slot(&self, contents: &str) {
        std::fs::write(self.slot_path(), contents).expect("Failed to write slot");
    }

    /// Writes a `config.toml` that the binary will pick up.
    pub fn write_config(&self, contents: &str) {
        let dir = self.config_home.join("jot");
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        std::fs::write(dir.join("config.toml"), contents).expect("Failed to write config");
    }

    /// Creates a JotCommand configured for this test environment.
    pub fn cmd(&self) -> JotCommand {
        JotCommand::new()
            .config_home(&self.config_home)
            .dir(&self.data_dir)
    }

    /// Creates a JotCommand that relies on the config file for its directory.
    pub fn cmd_without_dir(&self) -> JotCommand {
        JotCommand::new().config_home(&self.config_home)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.data_dir().is_dir(), "data directory should exist");
        assert!(!env.slot_path().exists(), "slot starts absent");
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.data_dir().to_path_buf()
        };
        assert!(
            !path.exists(),
            "temp directory should be cleaned up on drop"
        );
    }

    #[test]
    fn test_env_seed_writes_array() {
        let env = TestEnv::new();
        env.seed(&[TestNote::new("One"), TestNote::new("Two")]);

        let slot = crate::common::read_slot(&env.slot_path());
        let titles: Vec<&str> = slot
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, ["One", "Two"]);
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.data_dir().to_string_lossy());
    }
}
