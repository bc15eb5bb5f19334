//! Build tail parsing.

use crate::error::Result;
use crate::logging::trace;
use crate::version::Build;

use super::NumberMode;
use super::versionable::{coerce_number, is_numeric};

/// Parse a build tail (without the leading `+`), e.g. `build.11.e0f985a`.
///
/// A leading literal `build` is dropped, a following numeric token becomes
/// the build number and every remaining token is a part.
pub(crate) fn parse_build(tail: &str, numbers: NumberMode) -> Result<Build> {
    let mut tokens = tail.split('.').peekable();

    if tokens.peek() == Some(&"build") {
        tokens.next();
    }

    let number = match tokens.peek().copied() {
        Some(token) if is_numeric(token) => {
            tokens.next();
            Some(coerce_number(tail, token, numbers)?)
        }
        _ => None,
    };

    trace!(tail = tail, number = ?number, "parsed build number");

    Build::new(number, tokens)
}
