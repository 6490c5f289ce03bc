//! Property tests for artifact name parsing.

use proptest::prelude::*;

use rollout::ArtifactPattern;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A name built from the convention yields its version back.
    #[test]
    fn property_version_is_recovered(
        app in "[a-z][a-z0-9-]{0,12}",
        version in "[0-9A-Za-z][0-9A-Za-z._-]{0,15}",
        ext in "(war|jar|ear|tar\\.gz)",
    ) {
        let pattern = ArtifactPattern::new(app.as_str(), ext.as_str()).unwrap();
        let filename = format!("{}-{}.{}", app, version, ext);

        prop_assert_eq!(pattern.convert_to_version(&filename), Some(version.as_str()));
        let full_path = format!("/opt/{}/{}", app, filename);
        prop_assert!(pattern.matches(&full_path));
    }

    /// PROPERTY: Parsing never panics and any version is a substring of the name.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,128}") {
        let pattern = ArtifactPattern::new("myapp", "war").unwrap();
        if let Some(version) = pattern.convert_to_version(&s) {
            prop_assert!(!version.is_empty());
            prop_assert!(s.contains(version));
        }
    }
}
