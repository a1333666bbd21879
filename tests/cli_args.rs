//! Integration tests for CLI argument handling
//!
//! Runs the `pokefetch` binary with scripted stdin.

use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Helper to run the CLI with given args and stdin, capturing output
fn run_cli(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_pokefetch"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute pokefetch");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for pokefetch")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"], "");
    assert!(output.status.success(), "Expected --help to exit successfully");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pokefetch"), "Help should mention pokefetch");
    assert!(stdout.contains("--api-url"), "Help should mention --api-url");
    assert!(stdout.contains("--cache-ttl-secs"));
}

#[test]
fn test_zero_timeout_prints_error_and_exits() {
    let output = run_cli(&["--timeout-secs", "0"], "");
    assert!(!output.status.success(), "Expected zero timeout to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("timeout must be positive"),
        "Should explain the invalid timeout: {}",
        stderr
    );
}

#[test]
fn test_zero_cache_ttl_prints_error_and_exits() {
    let output = run_cli(&["--cache-ttl-secs", "0"], "");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cache interval must be positive"), "{}", stderr);
}

#[test]
fn test_scripted_session_runs_to_exit() {
    let output = run_cli(&["--cache-ttl-secs", "120"], "help\nexit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("PokeFetch > "));
    assert!(stdout.contains("API responses are cached for 120 seconds."));
    assert!(stdout.contains("Goodbye!"));
    assert!(!stdout.contains('\u{1b}'), "Piped stdout should not be colored");
}

#[test]
fn test_end_of_input_ends_session() {
    let output = run_cli(&[], "bogus\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Unknown command: bogus"));
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use std::time::Duration;

    use clap::Parser;
    use pokefetch::cli::{Cli, StartupConfig};

    #[test]
    fn test_cli_env_style_defaults() {
        let cli = Cli::parse_from(["pokefetch"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.client.timeout, Duration::from_secs(cli.timeout_secs));
        assert_eq!(config.log_level, cli.log_level);
    }

    #[test]
    fn test_startup_config_with_local_api() {
        let cli = Cli::parse_from(["pokefetch", "--api-url", "http://127.0.0.1:8080/api/v2"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.client.base_url, "http://127.0.0.1:8080/api/v2");
    }

    #[test]
    fn test_startup_config_rejects_opaque_url() {
        let cli = Cli::parse_from(["pokefetch", "--api-url", "mailto:ash@example.com"]);
        assert!(StartupConfig::from_cli(&cli).is_err());
    }
}
