use semverd::{IdentifierKind, Version, VersionError};

#[cfg(test)]
mod valid_version_tests {
    use super::*;

    #[test]
    fn test_valid_versions_parse() {
        let valid = [
            "1.0.0",
            "2.10.3",
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-0.3.7",
            "1.0.0-x.7.z.92",
            "1.0.0-alpha+001",
            "1.0.0+20130313144700",
            "1.0.0-beta+exp.sha.5114f85",
            "1.0.0--",
            "1.0.0-0",
            "0.0.0",
        ];

        for input in valid {
            assert!(Version::parse(input).is_ok(), "expected {input} to parse");
        }
    }

    #[test]
    fn test_rendering_reproduces_input() -> anyhow::Result<()> {
        let inputs = [
            "0.0.1",
            "1.0.0-alpha.beta.1",
            "1.0.0-rc-1+build.001",
            "10.20.30+meta-data.0",
        ];

        for input in inputs {
            let version: Version = input.parse()?;
            let rendered = version.to_string();
            assert_eq!(rendered, input);
            assert_eq!(Version::parse(&rendered)?, version);
        }
        Ok(())
    }
}

#[cfg(test)]
mod invalid_version_tests {
    use super::*;

    fn error_of(input: &str) -> VersionError {
        Version::parse(input).expect_err(input)
    }

    #[test]
    fn test_leading_zero_rejection() {
        assert!(matches!(
            error_of("01.0.0"),
            VersionError::LeadingZero { kind: IdentifierKind::Major, .. }
        ));
        assert!(matches!(
            error_of("1.01.0"),
            VersionError::LeadingZero { kind: IdentifierKind::Minor, .. }
        ));
        assert!(matches!(
            error_of("1.0.01"),
            VersionError::LeadingZero { kind: IdentifierKind::Patch, .. }
        ));
        assert!(matches!(
            error_of("1.0.0-01"),
            VersionError::LeadingZero { kind: IdentifierKind::PreRelease, .. }
        ));
    }

    #[test]
    fn test_core_arity_rejection() {
        assert!(matches!(error_of("1.0"), VersionError::CoreArity { found: 2, .. }));
        assert!(matches!(error_of("1"), VersionError::CoreArity { found: 1, .. }));
        assert!(matches!(error_of("1.2.3.4"), VersionError::CoreArity { found: 4, .. }));
    }

    #[test]
    fn test_empty_identifier_rejection() {
        assert!(matches!(
            error_of("1.0.0-"),
            VersionError::EmptyIdentifier { kind: IdentifierKind::PreRelease, .. }
        ));
        assert!(matches!(
            error_of("1.0.0+"),
            VersionError::EmptyIdentifier { kind: IdentifierKind::Build, .. }
        ));
        assert!(matches!(
            error_of("1.0.0-alpha..beta"),
            VersionError::EmptyIdentifier { kind: IdentifierKind::PreRelease, .. }
        ));
        assert!(matches!(
            error_of("1.0.0-alpha.."),
            VersionError::EmptyIdentifier { kind: IdentifierKind::PreRelease, .. }
        ));
        assert!(matches!(
            error_of("1..0"),
            VersionError::EmptyIdentifier { kind: IdentifierKind::Minor, .. }
        ));
    }

    #[test]
    fn test_second_plus_is_an_invalid_build_character() {
        assert_eq!(
            error_of("1.0.0+build+meta"),
            VersionError::InvalidCharacter {
                kind: IdentifierKind::Build,
                value: "build+meta".to_string(),
                character: '+',
            }
        );
    }

    #[test]
    fn test_invalid_character_rejection() {
        assert!(matches!(
            error_of("1.0.0-α"),
            VersionError::InvalidCharacter { kind: IdentifierKind::PreRelease, character: 'α', .. }
        ));
        assert!(matches!(
            error_of("v1.0.0"),
            VersionError::InvalidCharacter { kind: IdentifierKind::Major, character: 'v', .. }
        ));
        assert!(matches!(
            error_of("1.0.0-beta_1"),
            VersionError::InvalidCharacter { character: '_', .. }
        ));
        assert!(matches!(
            error_of(" 1.0.0"),
            VersionError::InvalidCharacter { character: ' ', .. }
        ));
    }

    #[test]
    fn test_error_message_names_offending_value() {
        let message = error_of("1.0.0-alpha.01").to_string();
        assert!(message.contains("pre_release"));
        assert!(message.contains("01"));
    }
}
