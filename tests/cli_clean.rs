//! Integration tests for `rollout clean`.

#![cfg(unix)]

mod common;

use common::*;

const SIX: [&str; 6] = [
    "myapp-1.war",
    "myapp-2.war",
    "myapp-3.war",
    "myapp-4.war",
    "myapp-5.war",
    "myapp-6.war",
];

#[test]
fn clean_keeps_current_and_newest_others() {
    let env = TestEnv::new();
    env.install_files(&SIX);
    env.point_current("myapp-3.war");

    let result = env.run(&["clean", "--yes"]);

    assert!(result.success, "{}", result.combined_output());
    assert_not_installed!(env, "myapp-1.war");
    for name in &SIX[1..] {
        assert_installed!(env, name);
    }
    assert_output_contains!(result, "Removing old installed versions:");
    assert_output_contains!(result, "myapp-1.war");
}

#[test]
fn clean_never_removes_current() {
    let env = TestEnv::new();
    env.install_files(&SIX);
    env.point_current("myapp-1.war");

    let result = env.run(&["clean", "--yes", "--retain", "1"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(list_names(&env.root()), vec!["current.war", "myapp-1.war"]);
}

#[test]
fn clean_with_few_versions_does_nothing() {
    let env = TestEnv::new();
    env.install_files(&SIX[..3]);
    env.point_current("myapp-3.war");

    let result = env.run(&["clean", "--yes"]);

    assert!(result.success, "{}", result.combined_output());
    assert_output_contains!(result, "No cleanable versions installed.");
    assert_eq!(list_names(&env.root()).len(), 4);
}

#[test]
fn clean_rejects_zero_retention() {
    let env = TestEnv::new();
    env.install_files(&SIX);
    env.point_current("myapp-6.war");

    let result = env.run(&["clean", "--yes", "--retain", "0"]);

    assert!(!result.success);
    assert_output_contains!(result, "retention count must be at least 1");
    assert_eq!(list_names(&env.root()).len(), 7);
}

#[test]
fn clean_retain_comes_from_config() {
    let env = TestEnv::new();
    env.write_config(&format!(
        "[app]\nname = \"myapp\"\ninstall_prefix = \"{}\"\n\n[deploy]\nretain = 2\n",
        env.prefix.path().display()
    ));
    env.install_files(&SIX);
    env.point_current("myapp-6.war");

    let result = env.run(&["clean", "--yes"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(
        list_names(&env.root()),
        vec!["current.war", "myapp-5.war", "myapp-6.war"]
    );
}

#[test]
fn clean_json_emits_plan_before_removals() {
    let env = TestEnv::new();
    env.install_files(&SIX);
    env.point_current("myapp-6.war");

    let result = env.run(&["--json", "clean", "--retain", "4"]);

    assert!(result.success, "{}", result.combined_output());
    let events = result.json_events();
    let names: Vec<&str> = events.iter().map(|e| e["event"].as_str().unwrap()).collect();
    let planned = names.iter().position(|n| *n == "cleanup_planned").unwrap();
    let first_removed = names.iter().position(|n| *n == "removed").unwrap();
    assert!(planned < first_removed);
    assert_eq!(names.iter().filter(|n| **n == "removed").count(), 2);
    assert_eq!(*names.last().unwrap(), "complete");
}
