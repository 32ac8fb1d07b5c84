use std::process::{Command, Output};

fn generate_seed(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_generate_seed"))
        .args(args)
        .env_remove("GENERATE_SEED_LOG")
        .output()
        .expect("failed to execute generate_seed")
}

#[test]
fn prints_known_vector_and_exits_zero() {
    let output = generate_seed(&["origin", "0", "abc"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "7f5001b5ada3\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn inputs_starting_with_hyphen_are_hashed_verbatim() {
    let trailing = generate_seed(&["origin", "0", "-abc"]);
    assert!(trailing.status.success());
    assert_eq!(String::from_utf8_lossy(&trailing.stdout), "c5a2def1124f\n");

    let leading = generate_seed(&["-origin", "0", "abc"]);
    assert!(leading.status.success());
    assert_eq!(String::from_utf8_lossy(&leading.stdout), "3bd27abddfb8\n");

    let negative = generate_seed(&["origin", "-1", "abc"]);
    assert!(negative.status.success());
    assert_eq!(String::from_utf8_lossy(&negative.stdout), "64a69d735da4\n");
}

#[test]
fn repeated_runs_print_identical_seed() {
    let first = generate_seed(&["git@example.com:repo.git", "1700000000", "deadbeef"]);
    let second = generate_seed(&["git@example.com:repo.git", "1700000000", "deadbeef"]);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn missing_arguments_fail_without_seed_output() {
    for args in [&[][..], &["origin"][..], &["origin", "0"][..]] {
        let output = generate_seed(args);

        assert!(!output.status.success(), "args {args:?} should fail");
        assert_eq!(output.status.code(), Some(2));
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
    }
}

#[test]
fn debug_logging_stays_off_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_generate_seed"))
        .args(["origin", "0", "abc"])
        .env("GENERATE_SEED_LOG", "debug")
        .output()
        .expect("failed to execute generate_seed");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "7f5001b5ada3\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("derived seed"));
}
