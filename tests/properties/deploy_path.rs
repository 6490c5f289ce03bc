//! Property tests for deploy path computation.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use rollout::domain::value_objects::DeployLayout;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_][A-Za-z0-9._-]{0,15}")
        .unwrap()
        .prop_filter("not a dot segment", |s| s != "." && s != "..")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The deploy path is always `root/basename(source)`.
    #[test]
    fn property_deploy_path_is_root_plus_basename(
        dirs in proptest::collection::vec(segment(), 0..4),
        name in segment(),
        absolute in any::<bool>(),
    ) {
        let layout = DeployLayout::for_app(Path::new("/opt"), "myapp", "current.war");
        let mut source = if absolute { PathBuf::from("/") } else { PathBuf::new() };
        for dir in &dirs {
            source.push(dir);
        }
        source.push(&name);

        let path = layout.deploy_path(&source).unwrap();

        prop_assert_eq!(path, Path::new("/opt/myapp").join(&name));
    }

    /// PROPERTY: Deploy path computation never panics on arbitrary input.
    #[test]
    fn property_deploy_path_never_panics(s in "(?s).{0,128}") {
        let layout = DeployLayout::for_app(Path::new("/opt"), "myapp", "current.war");
        if let Some(path) = layout.deploy_path(Path::new(&s)) {
            prop_assert!(path.starts_with("/opt/myapp"));
        }
    }
}
