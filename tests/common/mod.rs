#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment for running the `vigenere` binary
///
/// HOME and XDG_CONFIG_HOME point into a temp dir so a developer's own
/// config file never leaks into the tests.
pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub config_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        let config_dir = root.join("config");
        fs::create_dir_all(&config_dir).expect("create config dir");

        Self {
            _tmp: tmp,
            root,
            config_dir,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("vigenere").expect("binary built");
        cmd.env("HOME", &self.root)
            .env("XDG_CONFIG_HOME", &self.config_dir)
            .env_remove("VIGENERE_KEY")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write a file relative to the environment root and return its path
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        fs::write(&path, content).expect("write fixture");
        path
    }

    /// Write the default config file picked up without `--config`
    pub fn write_default_config(&self, content: &str) -> PathBuf {
        let dir = self.config_dir.join("vigenere");
        fs::create_dir_all(&dir).expect("create vigenere config dir");
        let path = dir.join("config.yaml");
        fs::write(&path, content).expect("write default config");
        path
    }

    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).expect("read output")
    }
}
