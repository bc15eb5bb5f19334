//! Ordering across triples, pre-releases and builds.

use semver_kit::{Error, PreRelease, Version, compare, parse};

/// Assert that `bigger` is strictly greater than `smaller`, in both directions.
fn assert_version_bigger_than(bigger: &str, smaller: &str) -> Result<(), Error> {
    let v1 = parse(bigger)?;
    let v2 = parse(smaller)?;

    assert!(!compare::equals(&v1, &v2), "{bigger} should not equal {smaller}");
    assert!(compare::greater_than(&v1, &v2), "{bigger} should be greater than {smaller}");
    assert!(!compare::smaller_than(&v1, &v2), "{bigger} should not be smaller than {smaller}");
    assert!(compare::smaller_than(&v2, &v1), "{smaller} should be smaller than {bigger}");
    assert!(!compare::greater_than(&v2, &v1), "{smaller} should not be greater than {bigger}");
    Ok(())
}

#[test]
fn test_equals() -> Result<(), Error> {
    assert!(compare::equals(&parse("0.0.1")?, &parse("0.0.1")?));
    assert!(!compare::equals(&parse("0.0.2")?, &parse("0.0.1")?));

    assert!(compare::equals(&parse("0.0.1-alpha")?, &parse("0.0.1-alpha")?));
    assert!(!compare::equals(&parse("0.0.1-alpha")?, &parse("0.0.1-rc")?));

    assert!(compare::equals(&parse("0.0.1-alpha.1")?, &parse("0.0.1-alpha.1")?));
    assert!(!compare::equals(&parse("0.0.1-alpha.1")?, &parse("0.0.1-alpha.2")?));

    assert!(compare::equals(&parse("0.0.1+build.1")?, &parse("0.0.1+build.1")?));
    assert!(!compare::equals(&parse("0.0.1+build.1")?, &parse("0.0.1+build.2")?));

    assert!(compare::equals(
        &parse("0.0.1-alpha.1+build.1")?,
        &parse("0.0.1-alpha.1+build.1")?
    ));
    assert!(!compare::equals(
        &parse("0.0.1-alpha.1+build.1")?,
        &parse("0.0.1-alpha.2+build.1")?
    ));
    Ok(())
}

#[test]
fn test_equals_ignores_build_parts() -> Result<(), Error> {
    assert!(compare::equals(
        &parse("1.0.0+build.1.foo")?,
        &parse("1.0.0+build.1.bar")?
    ));
    Ok(())
}

#[test]
fn test_versionable() -> Result<(), Error> {
    assert_version_bigger_than("2.0.2", "0.0.4")?;
    assert_version_bigger_than("1.2.3", "1.2.2")?;
    assert_version_bigger_than("0.0.1", "0.0.0")?;
    assert_version_bigger_than("2.0.0", "1.9.9")?;
    assert_version_bigger_than("1.2.0", "1.1.9")?;

    let v1 = parse("4.0.0")?;
    let v2 = parse("4.0.0")?;
    assert!(!compare::greater_than(&v1, &v2));
    assert!(!compare::smaller_than(&v1, &v2));
    Ok(())
}

#[test]
fn test_pre_release() -> Result<(), Error> {
    // Release beats its pre-releases
    assert_version_bigger_than("1.2.3", "1.2.3-alpha")?;
    assert_version_bigger_than("1.2.3", "1.2.3-rc.6")?;

    // Greek precedence, then release number
    assert_version_bigger_than("1.2.3-beta", "1.2.3-alpha.1")?;
    assert_version_bigger_than("1.2.3-beta.1", "1.2.3-alpha.1")?;
    assert_version_bigger_than("1.2.3-beta.1", "1.2.3-beta")?;
    assert_version_bigger_than("1.2.3-beta.2", "1.2.3-beta.1")?;
    assert_version_bigger_than("1.2.3-rc.6", "1.2.3-alpha.1")?;

    // Versionable pre-releases
    assert_version_bigger_than("1.2.3-0.0.2", "1.2.3-0.0.1")?;
    assert_version_bigger_than("1.2.3-0.0.1", "1.2.3-rc.9")?;
    Ok(())
}

#[test]
fn test_unknown_greek_beats_known() -> Result<(), Error> {
    assert_version_bigger_than("1.2.3-dev.0", "1.2.3-rc.9")?;
    assert_version_bigger_than("1.2.3-snapshot", "1.2.3-alpha.3")?;
    Ok(())
}

#[test]
fn test_hyphenated_greek_tags() {
    // The grammar has no hyphen in pre-release tails, so these only come
    // from versions built directly.
    let tagged = |greek: &str, number: u64| {
        Version::new(1, 2, 3).with_pre_release(PreRelease::tagged(greek, number))
    };

    assert!(compare::greater_than(&tagged("pre-rc", 0), &tagged("beta", 9)));
    assert!(compare::greater_than(&tagged("alpha", 0), &tagged("pre-alpha", 9)));
    assert!(compare::smaller_than(&tagged("pre-beta", 4), &tagged("beta", 0)));
}

#[test]
fn test_unknown_vs_unknown_favours_left_operand() -> Result<(), Error> {
    let foo = parse("1.2.3-foo")?;
    let bar = parse("1.2.3-bar")?;

    assert!(compare::greater_than(&foo, &bar));
    assert!(compare::greater_than(&bar, &foo));
    assert!(!compare::smaller_than(&foo, &bar));
    assert!(!compare::smaller_than(&bar, &foo));
    Ok(())
}

#[test]
fn test_build() -> Result<(), Error> {
    assert_version_bigger_than("1.2.3+build", "1.2.3")?;
    assert_version_bigger_than("1.2.3+build.2", "1.2.3+build.1")?;
    assert_version_bigger_than("1.2.3+build.2.foo", "1.2.3+build.1.bar")?;
    assert_version_bigger_than("1.2.3+build.1", "1.2.3+build")?;
    Ok(())
}

#[test]
fn test_pre_release_and_build() -> Result<(), Error> {
    assert_version_bigger_than("1.2.3+build", "1.2.3-rc.1")?;
    assert_version_bigger_than("1.2.3-rc.1+build", "1.2.3-rc.1")?;
    assert_version_bigger_than("1.2.3-rc.1+build.2", "1.2.3-rc.1+build.1")?;
    assert_version_bigger_than("1.2.3+build.2", "1.2.3-rc.1+build.2")?;
    assert_version_bigger_than("1.2.3-rc.1+build.3.foo", "1.2.3-rc.1+build.2")?;
    Ok(())
}

#[test]
fn test_greatest() -> Result<(), Error> {
    let versions = [parse("0.1.2")?, parse("0.1.2-rc.1")?, parse("0.1.2-rc")?];
    assert_eq!(compare::greatest(&versions)?.to_string(), "0.1.2");

    let versions = [
        parse("0.1.2")?,
        parse("0.1.2-rc.1")?,
        parse("0.1.2-alpha+build.12345")?,
        parse("0.1.3-beta")?,
        parse("0.1.2")?,
        parse("0.1.0")?,
    ];
    assert_eq!(compare::greatest(&versions)?.to_string(), "0.1.3-beta.0");
    Ok(())
}

#[test]
fn test_greatest_keeps_last_of_equals() -> Result<(), Error> {
    let versions = [parse("1.0.0+build.1.first")?, parse("1.0.0+build.1.last")?];
    let greatest = compare::greatest(&versions)?;
    assert_eq!(greatest.original_version(), "1.0.0+build.1.last");
    Ok(())
}

#[test]
fn test_greatest_requires_input() {
    let none: Vec<Version> = Vec::new();
    assert_eq!(compare::greatest(&none), Err(Error::EmptyInput));
}
