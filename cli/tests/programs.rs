use std::process::{Command, Output};

fn run(bin: &str) -> Output {
    Command::new(bin)
        .env_remove("RUST_LOG")
        .env_remove("RECURSION_LOG_LEVEL")
        .env_remove("RECURSION_LOG_ANSI")
        .output()
        .expect("failed to spawn driver")
}

#[test]
fn factorial_program() {
    let output = run(env!("CARGO_BIN_EXE_factorial"));

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Factorial Calculator\n\
         ====================\n\
         \n\
         factorial(0) = 1\n\
         factorial(1) = 1\n\
         factorial(2) = 2\n\
         factorial(3) = 6\n\
         factorial(4) = 24\n\
         factorial(5) = 120\n\
         \n\
         Note: Values beyond 5! exceed 8-bit range (max 255)\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn multiply_program() {
    let output = run(env!("CARGO_BIN_EXE_multiply"));

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Recursive Multiplication Calculator\n\
         ====================================\n\
         \n\
         multiply(0, 5) = 0\n\
         multiply(5, 0) = 0\n\
         multiply(1, 7) = 7\n\
         multiply(3, 4) = 12\n\
         multiply(5, 6) = 30\n\
         multiply(7, 8) = 56\n\
         multiply(10, 10) = 100\n\
         \n\
         Note: Results are limited to 8-bit range (max 255)\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn debug_logging_stays_off_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_multiply"))
        .env("RUST_LOG", "debug")
        .env("RECURSION_LOG_ANSI", "false")
        .output()
        .expect("failed to spawn driver");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().filter(|l| l.starts_with("multiply(")).count(), 7);
    assert!(!stdout.contains("evaluated case"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("evaluated case"));
}

const FACTORIAL_REPORT: &str = "Factorial Calculator\n\
    ====================\n\
    \n\
    factorial(0) = 1\n\
    factorial(1) = 1\n\
    factorial(2) = 2\n\
    factorial(3) = 6\n\
    factorial(4) = 24\n\
    factorial(5) = 120\n\
    \n\
    Note: Values beyond 5! exceed 8-bit range (max 255)\n";

#[test]
fn unknown_log_level_falls_back_to_warn() {
    let output = Command::new(env!("CARGO_BIN_EXE_factorial"))
        .env_remove("RUST_LOG")
        .env("RECURSION_LOG_LEVEL", "verbose")
        .env("RECURSION_LOG_ANSI", "false")
        .output()
        .expect("failed to spawn driver");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), FACTORIAL_REPORT);
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid log level"));
}

#[test]
fn unreadable_log_config_uses_defaults() {
    let output = Command::new(env!("CARGO_BIN_EXE_factorial"))
        .env_remove("RUST_LOG")
        .env_remove("RECURSION_LOG_LEVEL")
        .env("RECURSION_LOG_ANSI", "sometimes")
        .output()
        .expect("failed to spawn driver");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), FACTORIAL_REPORT);
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to load logging configuration"));
}
