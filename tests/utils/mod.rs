use anyhow::{Context, Result};
use std::io::Write;
use std::process::{Command, Stdio};

use super::common::TestEnvironment;

pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandOutput {
    /// Stdout parsed as JSON lines
    pub fn events(&self) -> Result<Vec<serde_json::Value>> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).with_context(|| format!("not JSON: {l}")))
            .collect()
    }
}

/// Run the binary with `answers` piped to stdin, one per line.
pub fn run_users_session(
    env: &TestEnvironment,
    args: &[&str],
    answers: &[&str],
) -> Result<CommandOutput> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_usersapp"))
        .args(args)
        .env("XDG_CONFIG_HOME", env.config_home())
        .env("HOME", env.path())
        .env_remove("NO_COLOR")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("spawning usersapp")?;

    {
        let mut stdin = child.stdin.take().context("stdin not captured")?;
        let mut script = answers.join("\n");
        script.push('\n');
        // The binary may exit before reading everything (e.g. bad config)
        let _ = stdin.write_all(script.as_bytes());
    }

    let output = child.wait_with_output()?;

    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(-1),
    })
}
