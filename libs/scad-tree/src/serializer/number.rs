//! Numeric and string literals in OpenSCAD syntax.

/// Format a number for output.
///
/// `None` prints the shortest text that parses back to the same `f64`, so
/// `5.0` becomes `5` and `1.375` stays `1.375`. `Some(places)` rounds to that
/// many decimals and drops trailing zeros. Negative zero prints as `0`.
pub fn format_number(value: f64, decimal_places: Option<usize>) -> String {
    let text = match decimal_places {
        None => format!("{value}"),
        Some(places) => trim_zeros(format!("{value:.places$}")),
    };
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}

fn trim_zeros(text: String) -> String {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// `[x, y, z]`
pub fn format_vector(values: &[f64], decimal_places: Option<usize>) -> String {
    let parts: Vec<String> = values
        .iter()
        .map(|v| format_number(*v, decimal_places))
        .collect();
    format!("[{}]", parts.join(", "))
}

/// Double-quoted string with OpenSCAD escapes.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortest_form() {
        assert_eq!(format_number(5.0, None), "5");
        assert_eq!(format_number(1.375, None), "1.375");
        assert_eq!(format_number(-2.5, None), "-2.5");
        assert_eq!(format_number(-0.0, None), "0");
        assert_eq!(format_number(0.1 + 0.2, None), "0.30000000000000004");
    }

    #[test]
    fn shortest_form_round_trips() {
        for value in [6.35, 0.03125, 304.8 / 160.0, 1.0e-7, 12345.678901] {
            let parsed: f64 = format_number(value, None).parse().unwrap();
            assert_eq!(parsed, value);
        }
    }

    #[test]
    fn fixed_places() {
        assert_eq!(format_number(5.0, Some(6)), "5");
        assert_eq!(format_number(1.0 / 3.0, Some(6)), "0.333333");
        assert_eq!(format_number(-1.0e-9, Some(6)), "0");
        assert_eq!(format_number(2.54, Some(8)), "2.54");
    }

    #[test]
    fn vectors() {
        assert_eq!(format_vector(&[1.0, 0.0, -3.5], None), "[1, 0, -3.5]");
    }

    #[test]
    fn quoting() {
        assert_eq!(quote("abc"), "\"abc\"");
        assert_eq!(quote(""), "\"\"");
        assert_eq!(quote("say \"hi\"\\\n"), "\"say \\\"hi\\\"\\\\\\n\"");
    }
}
