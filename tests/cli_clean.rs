//! End-to-end tests for the `vendorclean` binary.

mod common;

use common::{set, TestEnv};

const REPO: &str = "host01/org01/repo01";

fn repo_files(names: &[&str]) -> std::collections::BTreeSet<String> {
    names.iter().map(|n| format!("{REPO}/{n}")).collect()
}

#[test]
fn clean_with_flags_removes_non_go_and_tests() {
    let env = TestEnv::with_fixture();

    let result = env.run(&["--only-go", "--no-tests", "--yes"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("Clean Complete"));
    assert!(result.stdout.contains("4 files removed"));
    assert!(result.stdout.contains("1 nested vendor trees removed"));
    assert_eq!(
        env.vendor_files(),
        repo_files(&["file01.go", "subpkg01/file02.go"])
    );
}

#[test]
fn non_interactive_run_does_not_prompt() {
    let env = TestEnv::with_fixture();

    let result = env.run(&["--only-go"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(!result.stdout.contains("Aborted"));
    assert!(!env.project_path("vendor/host01/org01/repo01/README").exists());
}

#[test]
fn dry_run_lists_entries_and_keeps_tree() {
    let env = TestEnv::with_fixture();
    let before = env.vendor_files();

    let result = env.run(&["--only-go", "--dry-run"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("Dry Run"));
    assert!(result.stdout.contains("host01/org01/repo01/README"));
    assert!(result.stdout.contains("(nested vendor)"));
    assert!(result.stdout.contains("Run without --dry-run"));
    assert_eq!(env.vendor_files(), before);
}

#[test]
fn json_emits_ndjson_events() {
    let env = TestEnv::with_fixture();

    let result = env.run(&["--json", "--only-go", "--no-tests"]);

    assert!(result.success, "stderr: {}", result.stderr);
    let events = result.json_events();
    assert_eq!(events.first().unwrap()["event"], "clean_start");
    assert_eq!(events.first().unwrap()["dry_run"], false);

    let removed: Vec<_> = events
        .iter()
        .filter(|e| e["event"] == "entry_removed")
        .collect();
    assert_eq!(removed.len(), 5);
    assert!(removed
        .iter()
        .any(|e| e["path"] == "host01/org01/repo01/vendor" && e["kind"] == "nested_vendor"));

    let complete = events.last().unwrap();
    assert_eq!(complete["event"], "clean_complete");
    assert_eq!(complete["success"], true);
    assert_eq!(complete["files_removed"], 4);
    assert_eq!(complete["nested_vendor_removed"], 1);
}

#[test]
fn second_run_has_nothing_to_clean() {
    let env = TestEnv::with_fixture();

    assert!(env.run(&["--only-go", "--yes"]).success);
    let result = env.run(&["--only-go", "--yes"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("Nothing to Clean"));
}

#[test]
fn missing_vendor_dir_fails() {
    let env = TestEnv::new();
    env.write_project_file("glide.lock", common::GLIDE_LOCK);

    let result = env.run(&["--yes"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("Vendor directory not found"));
}

#[test]
fn missing_manifest_fails_with_json_error() {
    let env = TestEnv::new();
    env.write_project_file("vendor/a/b/c/x.go", "package c");

    let result = env.run(&["--json"]);

    assert!(!result.success);
    let events = result.json_events();
    assert_eq!(events.last().unwrap()["event"], "error");
    assert_eq!(events.last().unwrap()["code"], "manifest_not_found");
    assert!(env.project_path("vendor/a/b/c/x.go").exists());
}

#[test]
fn project_config_enables_options() {
    let env = TestEnv::with_fixture();
    env.write_project_file(
        "vendorclean.toml",
        "[clean]\nonly_go = true\nno_tests = true\nkeep_legal_files = true\n",
    );

    let result = env.run(&["--yes"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(
        env.vendor_files(),
        repo_files(&["LICENSE", "file01.go", "subpkg01/file02.go"])
    );
}

#[test]
fn user_config_applies_without_project_config() {
    let env = TestEnv::with_fixture();
    let user_dir = env.config_home.path().join("vendorclean");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(user_dir.join("config.toml"), "[clean]\nonly_go = true\n").unwrap();

    let result = env.run(&["--yes"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(!env.project_path("vendor/host01/org01/repo01/README").exists());
    assert!(env
        .project_path("vendor/host01/org01/repo01/file01_test.go")
        .exists());
}

#[test]
fn environment_enables_options() {
    let env = TestEnv::with_fixture();

    let result = env.run_with_env(
        &["--yes"],
        &[
            ("VENDORCLEAN_ONLY_GO", "true"),
            ("VENDORCLEAN_NO_TESTS", "1"),
        ],
    );

    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(
        env.vendor_files(),
        repo_files(&["file01.go", "subpkg01/file02.go"])
    );
}

#[test]
fn keep_flag_preserves_matches() {
    let env = TestEnv::with_fixture();

    let result = env.run(&["--only-go", "--keep", "README", "--yes"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(
        env.vendor_files(),
        repo_files(&[
            "README",
            "file01.go",
            "file01_test.go",
            "subpkg01/file02.go",
            "subpkg01/file02_test.go",
        ])
    );
}

#[test]
fn unknown_config_key_warns_but_runs() {
    let env = TestEnv::with_fixture();
    env.write_project_file("vendorclean.toml", "[clean]\nonly_goo = true\n");

    let result = env.run(&["--yes"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stderr.contains("unknown config key"));
    assert!(result.stderr.contains("did you mean 'only_go'"));
}

#[test]
fn invalid_config_file_fails() {
    let env = TestEnv::with_fixture();
    env.write_project_file("vendorclean.toml", "[clean\nonly_go = true\n");
    let before = env.vendor_files();

    let result = env.run(&["--yes"]);

    assert!(!result.success);
    assert!(result.stderr.contains("vendorclean.toml"));
    assert_eq!(env.vendor_files(), before);
}

#[test]
fn root_defaults_to_current_directory() {
    let env = TestEnv::with_fixture();

    let result = env.run_in(env.project_root.path(), &["--only-go", "--no-tests", "-y"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(
        env.vendor_files(),
        set(&[
            "host01/org01/repo01/file01.go",
            "host01/org01/repo01/subpkg01/file02.go",
        ])
    );
}

#[test]
fn help_lists_flags() {
    let env = TestEnv::new();

    let result = env.run_in(env.project_root.path(), &["--help"]);

    assert!(result.success);
    for flag in ["--only-go", "--no-tests", "--keep-legal-files", "--use-lock-file", "--dry-run"] {
        assert!(result.stdout.contains(flag), "missing {flag}");
    }
}
