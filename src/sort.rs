//! Sorting sets of versions.

use crate::compare;
use crate::error::Result;
use crate::logging::trace;
use crate::parser::{IntoVersion, Parser};
use crate::version::Version;

/// Sort strings and/or versions into ascending order.
///
/// Strings are parsed with the default [`Parser`]; the first parse failure
/// is returned. An empty input yields an empty vector.
///
/// # Example
///
/// ```
/// use semver_kit::sort;
///
/// let sorted = sort(["1.0.0", "1.0.0-rc.1", "0.9.0"])?;
/// let sorted: Vec<String> = sorted.iter().map(ToString::to_string).collect();
/// assert_eq!(sorted, ["0.9.0", "1.0.0-rc.1", "1.0.0"]);
/// # Ok::<(), semver_kit::Error>(())
/// ```
pub fn sort<I>(items: I) -> Result<Vec<Version>>
where
    I: IntoIterator,
    I::Item: IntoVersion,
{
    sort_with(&Parser::new(), items)
}

/// Like [`sort`], parsing strings with the given parser.
pub fn sort_with<I>(parser: &Parser, items: I) -> Result<Vec<Version>>
where
    I: IntoIterator,
    I::Item: IntoVersion,
{
    let versions = items
        .into_iter()
        .map(|item| item.into_version(parser))
        .collect::<Result<Vec<_>>>()?;

    Ok(sort_array(versions))
}

/// Quicksort a vector of versions into ascending order.
///
/// The middle element is the pivot; everything not greater than the pivot
/// goes to its left. Duplicates are kept; stability is not guaranteed.
pub fn sort_array(mut versions: Vec<Version>) -> Vec<Version> {
    if versions.is_empty() {
        return versions;
    }

    trace!(count = versions.len(), "sorting versions");

    let pivot = versions.remove((versions.len() - 1) / 2);
    let (greater, smaller): (Vec<_>, Vec<_>) = versions
        .into_iter()
        .partition(|version| compare::greater_than(version, &pivot));

    let mut sorted = sort_array(smaller);
    sorted.push(pivot);
    sorted.extend(sort_array(greater));
    sorted
}
