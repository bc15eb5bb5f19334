//! Successor versions and clean copies.

use semver_kit::{Error, parse};

#[test]
fn test_next_without_base() -> Result<(), Error> {
    assert_eq!(parse("1.0.0")?.next()?.to_string(), "1.0.1");
    Ok(())
}

#[test]
fn test_next_accepts_string_base() -> Result<(), Error> {
    assert_eq!(parse("1.0.0")?.next_from("1.0.2")?.to_string(), "1.0.2");
    Ok(())
}

#[test]
fn test_next_rejects_pre_release_base_for_release() -> Result<(), Error> {
    let result = parse("1.0.0")?.next_from("1.0.0-rc");
    assert!(matches!(result, Err(Error::PreReleaseBaseMismatch { .. })));
    assert!(result.err().is_some_and(|err| err.is_base_error()));
    Ok(())
}

#[test]
fn test_next_table() -> Result<(), Error> {
    // (expected, base, current)
    let cases = [
        // Move to next significant release
        ("2.0.0", "2.0.0", "1.0.0"),
        ("1.2.0", "1.2.0", "1.1.0"),
        ("1.0.0", "1.0.0", "1.0.0-beta"),
        ("1.0.0-rc.0", "1.0.0-rc.0", "1.0.0-beta.0"),
        ("1.0.0-beta.0", "1.0.0-beta.0", "1.0.0-alpha.0"),
        ("2.0.0-alpha.0", "2.0.0-alpha.0", "1.9.0"),
        ("2.1.0-alpha.0", "2.1.0-alpha.0", "2.0.0"),
        ("2.1.1-alpha.0", "2.1.1-alpha.0", "2.1.0"),
        // Increment patch
        ("1.0.1", "1.0.0", "1.0.0"),
        ("1.0.2", "1.0.0", "1.0.1"),
        ("1.0.2", "1.0.2", "1.0.1"),
        // Increment pre-release number
        ("1.0.0-beta.1", "1.0.0-beta.0", "1.0.0-beta.0"),
        ("1.0.0-beta.2", "1.0.0-beta.0", "1.0.0-beta.1"),
        ("1.0.0-beta.6000", "1.0.0-beta.0", "1.0.0-beta.5999"),
        // Ignore build metadata
        ("1.0.1", "1.0.0", "1.0.0+123421"),
        ("1.0.0-beta.1", "1.0.0-beta.0", "1.0.0-beta.0+123421"),
    ];

    for (expected, base, current) in cases {
        let base = parse(base)?;
        let current = parse(current)?;
        assert_eq!(
            current.next_from(&base)?.to_string(),
            expected,
            "next of {current} from base {base}"
        );
    }
    Ok(())
}

#[test]
fn test_next_graduates_pre_release() -> Result<(), Error> {
    // A pre-release with a plain base older than itself leaves pre-release
    let next = parse("2.0.0-rc.3")?.next_from("1.0.0")?;
    assert_eq!(next.to_string(), "2.0.0");
    assert!(!next.has_pre_release());
    Ok(())
}

#[test]
fn test_next_of_versionable_pre_release() -> Result<(), Error> {
    let next = parse("1.0.0-0.1.2")?.next_from("1.0.0-0.0.1")?;
    assert_eq!(next.to_string(), "1.0.0-0.1.3");
    Ok(())
}

#[test]
fn test_next_drops_original_string() -> Result<(), Error> {
    let next = parse("1.0.0")?.next_from("2.0.0+build.7")?;
    assert_eq!(next.to_string(), "2.0.0");
    assert_eq!(next.original_version(), "");
    Ok(())
}

#[test]
fn test_clean_copy() -> Result<(), Error> {
    assert_eq!(parse("1.2.3")?.clean_copy().to_string(), "1.2.3");
    assert_eq!(parse("1.0.0-beta.1")?.clean_copy().to_string(), "1.0.0-beta.1");
    assert_eq!(parse("1.0.0+build")?.clean_copy().to_string(), "1.0.0");
    assert!(!parse("1.0.0+build.4")?.clean_copy().has_build());
    assert_eq!(parse("1.0.0")?.clean_copy().original_version(), "");
    Ok(())
}
