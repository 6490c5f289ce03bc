//! Test environment for isolated rollout runs.
//!
//! `TestEnv` owns a temporary install prefix and a working directory holding
//! `rollout.toml`. The binary runs with the config home redirected and every
//! `ROLLOUT_*` variable cleared, so the developer's own settings never leak in.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

pub const APP: &str = "myapp";

const ROLLOUT_VARS: [&str; 6] = [
    "ROLLOUT_APP",
    "ROLLOUT_HOST",
    "ROLLOUT_PREFIX",
    "ROLLOUT_RETAIN",
    "ROLLOUT_INSTALL_MODE",
    "ROLLOUT_NO_COLOR",
];

/// Result of running the rollout binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    #[allow(dead_code)]
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad json {l:?}: {e}")))
            .collect()
    }
}

pub struct TestEnv {
    /// Install prefix; the application root is `<prefix>/myapp`
    pub prefix: TempDir,
    /// Working directory holding rollout.toml and built artifacts
    pub work: TempDir,
    /// Redirected config home
    pub home: TempDir,
}

impl TestEnv {
    /// Environment whose restart command is `restart`
    pub fn with_restart(restart: &str) -> Self {
        let env = Self {
            prefix: TempDir::new().expect("prefix"),
            work: TempDir::new().expect("work dir"),
            home: TempDir::new().expect("home"),
        };
        std::fs::create_dir_all(env.root()).expect("create root");
        env.write_config(&format!(
            "[app]\nname = \"{APP}\"\ninstall_prefix = \"{}\"\nservice_command = \"{}\"\n",
            env.prefix.path().display(),
            restart.replace('"', "\\\""),
        ));
        env
    }

    /// Environment whose restart always succeeds
    pub fn new() -> Self {
        Self::with_restart("true")
    }

    pub fn root(&self) -> PathBuf {
        self.prefix.path().join(APP)
    }

    pub fn current_link(&self) -> PathBuf {
        self.root().join("current.war")
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.work.path().join("rollout.toml"), content).expect("write config");
    }

    /// Write a local build output `<work>/build/<name>`
    pub fn build(&self, name: &str, content: &str) -> PathBuf {
        let dir = self.work.path().join("build");
        std::fs::create_dir_all(&dir).expect("create build dir");
        let path = dir.join(name);
        std::fs::write(&path, content).expect("write artifact");
        path
    }

    /// Place already-installed artifacts directly in the root
    pub fn install_files(&self, names: &[&str]) {
        for name in names {
            std::fs::write(self.root().join(name), name.as_bytes()).expect("install file");
        }
    }

    #[cfg(unix)]
    pub fn point_current(&self, name: &str) {
        let link = self.current_link();
        let _ = std::fs::remove_file(&link);
        std::os::unix::fs::symlink(self.root().join(name), link).expect("symlink");
    }

    /// Name of the file the current link resolves to
    pub fn current_target(&self) -> Option<String> {
        std::fs::read_link(self.current_link())
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_in(self.work.path(), args)
    }

    pub fn run_in(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_rollout"));
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path())
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("RUST_LOG");
        for var in ROLLOUT_VARS {
            cmd.env_remove(var);
        }

        let output = cmd.output().expect("Failed to execute rollout");
        to_result(output)
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
