use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Parse a duration literal such as `5s`, `250ms` or `1h30m`.
///
/// A literal is one or more `<number><unit>` pairs with no whitespace, where
/// the unit is one of `ns`, `us` (or `µs`), `ms`, `s`, `m`, `h` and the number
/// may carry a fraction (`1.5h`). A leading `+` is allowed, a bare `0` means
/// zero. Anything else, including humantime's wider unit set (`1d`, `1M`,
/// `5 seconds`), is rejected.
pub fn parse(literal: &str) -> Result<Duration> {
    let invalid = |reason: String| ConfigError::InvalidDurationFormat {
        value: literal.to_string(),
        reason,
    };

    let body = literal.strip_prefix('+').unwrap_or(literal);
    if body == "0" {
        return Ok(Duration::ZERO);
    }
    if body.is_empty() {
        return Err(invalid("empty duration".to_string()));
    }

    // humantime does the arithmetic once the literal is known to be well formed
    let mut normalized = String::with_capacity(body.len() + 2);
    let mut rest = body;
    while !rest.is_empty() {
        let num_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let number = &rest[..num_len];
        if !number.bytes().any(|b| b.is_ascii_digit()) || number.matches('.').count() > 1 {
            return Err(invalid(format!("expected a number at {:?}", rest)));
        }
        rest = &rest[num_len..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let unit = match &rest[..unit_len] {
            "" => return Err(invalid(format!("missing unit after {:?}", number))),
            "µs" | "μs" => "us",
            u @ ("ns" | "us" | "ms" | "s" | "m" | "h") => u,
            u => return Err(invalid(format!("unknown unit {:?}", u))),
        };
        rest = &rest[unit_len..];

        if number.starts_with('.') {
            normalized.push('0');
        }
        normalized.push_str(number.strip_suffix('.').unwrap_or(number));
        normalized.push_str(unit);
    }

    humantime::parse_duration(&normalized).map_err(|e| invalid(e.to_string()))
}
