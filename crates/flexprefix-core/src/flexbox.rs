// crates/flexprefix-core/src/flexbox.rs
// Conversions from standard flexbox values to the legacy box and IE models.

/// Convert `flex-start` / `flex-end` to `start` / `end`.
pub fn to_box_value(value: &str) -> &str {
    match value {
        "flex-start" => "start",
        "flex-end" => "end",
        other => other,
    }
}

/// Convert an `align-content` value to its `-ms-flex-line-pack` equivalent.
pub fn to_align_content_value(value: &str) -> &str {
    match value {
        "space-between" => "justify",
        "space-around" => "distribute",
        other => to_box_value(other),
    }
}

/// Convert a flex direction to a box orientation.
pub fn to_box_orient(flex_direction: &str) -> &'static str {
    if flex_direction.contains("column") {
        "vertical"
    } else {
        "horizontal"
    }
}

/// Convert a flex direction to a box direction.
pub fn to_box_direction(flex_direction: &str) -> &'static str {
    if flex_direction.contains("reverse") {
        "reverse"
    } else {
        "normal"
    }
}

/// Convert a flex order to a box ordinal group.
///
/// Box ordinal groups start at 1, so the leading integer of `order` is
/// incremented. An empty or non-integer order maps to `"1"`; an integer too
/// large to increment maps to `"0"`.
pub fn to_box_ordinal(order: &str) -> String {
    if order.is_empty() {
        return "1".to_string();
    }

    match parse_int_prefix(order) {
        None => "1".to_string(),
        Some(n) => match n.and_then(|n| n.checked_add(1)) {
            Some(next) => next.to_string(),
            None => "0".to_string(),
        },
    }
}

/// Leading integer of `value`: optional whitespace and sign, then decimal
/// digits (or hex after `0x`). Anything after the digits is ignored.
///
/// `None` when there are no digits, `Some(None)` when the digits do not fit
/// in an `i64`.
pub(crate) fn parse_int_prefix(value: &str) -> Option<Option<i64>> {
    let s = value.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = if s.starts_with("0x") || s.starts_with("0X") {
        (16, &s[2..])
    } else {
        (10, s)
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let parsed = i128::from_str_radix(&digits[..end], radix)
        .ok()
        .map(|magnitude| if negative { -magnitude } else { magnitude })
        .and_then(|n| i64::try_from(n).ok());
    Some(parsed)
}

/// Whether `value` coerces to a number rather than NaN under the usual
/// string-to-number rules of style objects.
///
/// Surrounding whitespace is ignored and an empty string counts as zero.
pub fn is_numeric(value: &str) -> bool {
    let s = value.trim();
    if s.is_empty() {
        return true;
    }

    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    if unsigned == "Infinity" {
        return true;
    }

    // Radix literals take no sign.
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
        }
    }

    // `f64::from_str` also accepts "inf" and "nan", which are not numbers here.
    unsigned
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
        && s.parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_value() {
        assert_eq!(to_box_value("flex-start"), "start");
        assert_eq!(to_box_value("flex-end"), "end");
        assert_eq!(to_box_value("center"), "center");
        assert_eq!(to_box_value(""), "");
    }

    #[test]
    fn test_align_content_value() {
        assert_eq!(to_align_content_value("space-between"), "justify");
        assert_eq!(to_align_content_value("space-around"), "distribute");
        assert_eq!(to_align_content_value("flex-end"), "end");
        assert_eq!(to_align_content_value("stretch"), "stretch");
    }

    #[test]
    fn test_box_orient_and_direction() {
        assert_eq!(to_box_orient("row"), "horizontal");
        assert_eq!(to_box_orient(""), "horizontal");
        assert_eq!(to_box_orient("column-reverse"), "vertical");
        assert_eq!(to_box_orient("column wrap"), "vertical");

        assert_eq!(to_box_direction("row"), "normal");
        assert_eq!(to_box_direction("row-reverse"), "reverse");
        assert_eq!(to_box_direction("column-reverse wrap"), "reverse");
    }

    #[test]
    fn test_box_ordinal() {
        assert_eq!(to_box_ordinal("0"), "1");
        assert_eq!(to_box_ordinal("2"), "3");
        assert_eq!(to_box_ordinal("-1"), "0");
        assert_eq!(to_box_ordinal(" 4"), "5");
        assert_eq!(to_box_ordinal("3abc"), "4");
        assert_eq!(to_box_ordinal("1.9"), "2");
        assert_eq!(to_box_ordinal("0x10"), "17");
        assert_eq!(to_box_ordinal(""), "1");
        assert_eq!(to_box_ordinal("abc"), "1");
        assert_eq!(to_box_ordinal("-"), "1");
        assert_eq!(to_box_ordinal("-9223372036854775808"), "-9223372036854775807");
    }

    #[test]
    fn test_box_ordinal_past_integer_range() {
        assert_eq!(to_box_ordinal("9223372036854775807"), "0");
        assert_eq!(to_box_ordinal("99999999999999999999"), "0");
        assert_eq!(to_box_ordinal("-99999999999999999999"), "0");
        assert_eq!(to_box_ordinal("999999999999999999999999999999999999999999"), "0");
    }

    #[test]
    fn test_is_numeric() {
        for value in ["0", "12", "-3", "+4", " 5 ", "1.5", ".5", "1e3", "", "   ", "0x1F", "0b101", "Infinity", "-Infinity"] {
            assert!(is_numeric(value), "{:?} should be numeric", value);
        }
        for value in ["abc", "3abc", "NaN", "inf", "infinity", "1 2", "0x", "-0x10", "1_000", "e"] {
            assert!(!is_numeric(value), "{:?} should not be numeric", value);
        }
    }
}
