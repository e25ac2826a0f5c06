#![allow(dead_code)]

use std::io::Cursor;

use holdem_cli::commands::{PlayOptions, handle_play_command};
use holdem_cli::error::CliError;

/// Sets or clears an environment variable for the lifetime of the guard.
/// Tests using it must be `#[serial]`.
pub struct TempEnvVar {
    key: &'static str,
    previous: Option<String>,
}

impl TempEnvVar {
    pub fn set(key: &'static str, value: &str) -> Self {
        let previous = std::env::var(key).ok();
        // SAFETY: callers are serialized, nothing else touches the environment
        unsafe { std::env::set_var(key, value) };
        Self { key, previous }
    }

    pub fn unset(key: &'static str) -> Self {
        let previous = std::env::var(key).ok();
        // SAFETY: see `set`
        unsafe { std::env::remove_var(key) };
        Self { key, previous }
    }
}

impl Drop for TempEnvVar {
    fn drop(&mut self) {
        // SAFETY: see `set`
        unsafe {
            match &self.previous {
                Some(prev) => std::env::set_var(self.key, prev),
                None => std::env::remove_var(self.key),
            }
        }
    }
}

/// Clears every variable the configuration layer reads.
pub fn clean_env() -> Vec<TempEnvVar> {
    [
        "HOLDEM_CONFIG",
        "HOLDEM_SEED",
        "HOLDEM_PLAYERS",
        "HOLDEM_STACK",
        "HOLDEM_BLINDS",
        "HOLDEM_OPPONENTS",
        "HOLDEM_TIMEOUT",
        "HOLDEM_SIM_BREAK_AFTER",
    ]
    .into_iter()
    .map(TempEnvVar::unset)
    .collect()
}

pub fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut argv = vec!["holdem"];
    argv.extend_from_slice(args);
    let code = holdem_cli::run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

/// Plays a session with scripted keyboard input.
pub fn play_with_input(opts: PlayOptions, input: &str) -> (Result<(), CliError>, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let result = handle_play_command(opts, &mut out, &mut err, &mut stdin);
    (
        result,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}
