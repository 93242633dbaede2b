use std::path::Path;
use std::process::{Command, Output};

/// Run the CLI binary against the collection file at `store`.
pub fn run_cli(args: &[&str], store: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_userstore"));
    cmd.args(args);
    cmd.env("USERSTORE_PATH", store);
    cmd.env_remove("RUST_LOG");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub fn run_cli_success(args: &[&str], store: &Path) -> String {
    let output = run_cli(args, store);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure, returning stderr.
pub fn run_cli_failure(args: &[&str], store: &Path) -> String {
    let output = run_cli(args, store);
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Create a user and return its id.
pub fn create_user(store: &Path, display_name: &str, email: &str) -> String {
    let stdout = run_cli_success(
        &["create", "--display-name", display_name, "--email", email],
        store,
    );
    stdout
        .lines()
        .next()
        .expect("create printed nothing")
        .trim()
        .to_string()
}
