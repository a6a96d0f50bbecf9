use std::{fs, path::PathBuf, process::Command};

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("divisor-gen-{tag}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn run(dir: &PathBuf, args: &[&str]) -> (bool, String) {
    let out = Command::new(env!("CARGO_BIN_EXE_divisor-gen"))
        .args(args)
        .arg("--dir")
        .arg(dir)
        .output()
        .unwrap();
    (out.status.success(), String::from_utf8(out.stdout).unwrap())
}

#[test]
fn degenerate_range() {
    let dir = scratch_dir("degenerate");
    let (ok, stdout) = run(&dir, &["--min", "5", "--max", "5", "--output", "f", "--seed", "1"]);
    assert!(ok);
    assert!(stdout.contains("Random n value: 5"));
    assert_eq!(fs::read_to_string(dir.join("f")).unwrap(), "5\n");
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn value_within_range_and_seed_reproducible() {
    let dir = scratch_dir("seeded");
    let args = ["--min", "1000", "--max", "10000", "--seed", "77", "--output"];
    for name in ["a", "b"] {
        let mut full = args.to_vec();
        full.push(name);
        assert!(run(&dir, &full).0);
    }
    let a = fs::read_to_string(dir.join("a")).unwrap();
    assert_eq!(a, fs::read_to_string(dir.join("b")).unwrap());
    let n: u64 = a.trim_end().parse().unwrap();
    assert!((1000..=10000).contains(&n));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn invalid_arguments_write_nothing() {
    let dir = scratch_dir("invalid");
    for (min, max, msg) in [
        ("100", "1", "min must be less than or equal to max"),
        ("0", "10", "min must be between 1 and 10^18"),
        ("-5", "10", "min must be between 1 and 10^18"),
        ("1", "1000000000000000001", "max must be between 1 and 10^18"),
        ("one", "10", "min must be a valid integer"),
    ] {
        let (ok, stdout) = run(&dir, &["--min", min, "--max", max, "--output", "f"]);
        assert!(!ok, "{min} {max}");
        assert!(stdout.contains(msg), "{stdout}");
        assert!(!dir.join("f").exists());
    }
}

#[test]
fn negative_seed_is_accepted_and_reproducible() {
    let dir = scratch_dir("negative-seed");
    for name in ["a", "b"] {
        let args = ["--min", "1", "--max", "1000000", "--seed", "-1", "--output", name];
        let (ok, stdout) = run(&dir, &args);
        assert!(ok, "{stdout}");
        assert!(stdout.contains("Using random seed: -1"));
    }
    assert_eq!(
        fs::read(dir.join("a")).unwrap(),
        fs::read(dir.join("b")).unwrap()
    );
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn underscore_separated_bounds() {
    let dir = scratch_dir("underscore");
    let (ok, stdout) = run(&dir, &["--min", "1_000", "--max", "1_000", "--output", "f"]);
    assert!(ok, "{stdout}");
    assert_eq!(fs::read_to_string(dir.join("f")).unwrap(), "1000\n");
    fs::remove_dir_all(&dir).unwrap();
}
