//! `X.Y.Z` triple parsing and numeric field coercion.

use crate::error::{Error, Result};
use crate::logging::warn;
use crate::version::Versionable;

use super::NumberMode;

/// Parse a strict `X.Y.Z` string into any type built from a triple.
///
/// The output type is chosen by the caller, e.g. a root
/// [`Version`](crate::Version) or a [`PreRelease`](crate::PreRelease).
pub(crate) fn parse_versionable<T>(input: &str, numbers: NumberMode) -> Result<T>
where
    T: From<Versionable>,
{
    let mut fields = input.split('.');
    let (Some(major), Some(minor), Some(patch), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(Error::InvalidVersionable(input.to_string()));
    };

    Ok(T::from(Versionable::new(
        coerce_number(input, major, numbers)?,
        coerce_number(input, minor, numbers)?,
        coerce_number(input, patch, numbers)?,
    )))
}

/// Turn one dot-delimited field into a number according to `numbers`.
pub(crate) fn coerce_number(input: &str, field: &str, numbers: NumberMode) -> Result<u64> {
    match numbers {
        NumberMode::Strict => {
            if !is_numeric(field) {
                return Err(Error::invalid_number(input, field));
            }
            field
                .parse()
                .map_err(|_| Error::invalid_number(input, field))
        }
        NumberMode::Lenient => {
            if !is_numeric(field) {
                warn!(input = input, field = field, "coercing non-numeric field");
            }
            Ok(lenient_number(field))
        }
    }
}

/// Leading ASCII digits as a number, 0 if there are none, saturating on overflow.
pub(crate) fn lenient_number(field: &str) -> u64 {
    field
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(u64::from(digit - b'0'))
        })
}

pub(crate) fn is_numeric(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::{PreRelease, Version};

    #[test]
    fn test_parse_into_either_target() {
        let version: Version = parse_versionable("1.2.3", NumberMode::Strict).unwrap();
        assert_eq!(version.to_string(), "1.2.3");

        let pre: PreRelease = parse_versionable("0.1.2", NumberMode::Strict).unwrap();
        assert_eq!(pre, PreRelease::Versionable(Versionable::new(0, 1, 2)));
    }

    #[test]
    fn test_requires_exactly_two_separators() {
        for input in ["1.2", "1.2.3.4", "1", ""] {
            assert_eq!(
                parse_versionable::<Versionable>(input, NumberMode::Lenient),
                Err(Error::InvalidVersionable(input.to_string()))
            );
        }
    }

    #[test]
    fn test_strict_rejects_non_numeric_fields() {
        assert_eq!(
            parse_versionable::<Versionable>("0.foo.1", NumberMode::Strict),
            Err(Error::invalid_number("0.foo.1", "foo"))
        );
        assert_eq!(
            parse_versionable::<Versionable>("1..2", NumberMode::Strict),
            Err(Error::invalid_number("1..2", ""))
        );
        assert_eq!(
            parse_versionable::<Versionable>("99999999999999999999.0.0", NumberMode::Strict),
            Err(Error::invalid_number(
                "99999999999999999999.0.0",
                "99999999999999999999"
            ))
        );
    }

    #[test]
    fn test_lenient_coerces_like_a_loose_cast() {
        assert_eq!(
            parse_versionable::<Versionable>("0.foo.1", NumberMode::Lenient),
            Ok(Versionable::new(0, 0, 1))
        );
        assert_eq!(
            parse_versionable::<Versionable>("12abc.0.7", NumberMode::Lenient),
            Ok(Versionable::new(12, 0, 7))
        );
        assert_eq!(lenient_number("99999999999999999999"), u64::MAX);
        assert_eq!(lenient_number(""), 0);
    }
}
