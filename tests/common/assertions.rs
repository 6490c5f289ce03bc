//! Assertion macros with descriptive failure messages.

use std::path::Path;

/// Names in a directory, sorted (for debugging and comparisons)
pub fn list_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

/// Assert that an artifact exists in the application root.
///
/// # Example
/// ```ignore
/// assert_installed!(env, "myapp-1.0.war");
/// ```
#[macro_export]
macro_rules! assert_installed {
    ($env:expr, $name:expr) => {
        let full_path = $env.root().join($name);
        assert!(
            full_path.exists(),
            "Expected '{}' in the application root, but it doesn't exist.\n\
             Root contains:\n  {}",
            $name,
            $crate::common::list_names(&$env.root()).join("\n  ")
        );
    };
}

/// Assert that an artifact is absent from the application root.
#[macro_export]
macro_rules! assert_not_installed {
    ($env:expr, $name:expr) => {
        let full_path = $env.root().join($name);
        assert!(
            !full_path.exists(),
            "Expected '{}' to be removed, but it still exists.\n\
             Root contains:\n  {}",
            $name,
            $crate::common::list_names(&$env.root()).join("\n  ")
        );
    };
}

/// Assert that command output contains a substring.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $needle:expr) => {
        assert!(
            $result.combined_output().contains($needle),
            "Expected output to contain '{}'.\n\
             --- stdout ---\n{}\n--- stderr ---\n{}",
            $needle,
            $result.stdout,
            $result.stderr
        );
    };
}
