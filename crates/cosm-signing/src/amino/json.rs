//! Canonical JSON for amino sign docs.
//!
//! Object keys are sorted lexicographically (by UTF-16 code unit, matching
//! the node's sort) at every level, there is no insignificant whitespace, and
//! `&`, `<` and `>` are written as `\u0026`, `\u003c` and `\u003e` as the
//! node's JSON encoder does. Only integers are accepted as numbers.

use std::fmt::Write;

use serde_json::Value;

use crate::TxError;

/// Serialize `value` as canonical sorted-key JSON.
///
/// # Returns
/// The JSON text, or `TxError::AminoJson` if the tree contains a
/// floating point number.
pub fn sorted_json(value: &Value) -> Result<String, TxError> {
    let mut out = String::new();
    write_value(&mut out, value)?;
    Ok(out)
}

fn write_value(out: &mut String, value: &Value) -> Result<(), TxError> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => {
            if n.is_f64() {
                return Err(TxError::AminoJson(format!(
                    "floating point number {} is not allowed in sign docs",
                    n
                )));
            }
            out.push_str(&n.to_string());
        }
        Value::String(s) => write_string(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item)?;
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.encode_utf16().cmp(b.0.encode_utf16()));
            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(out, key);
                out.push(':');
                write_value(out, item)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '&' | '<' | '>' => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keys_sorted_at_every_level() {
        let v = json!({
            "z": 1,
            "a": {"y": [], "b": ""},
            "m": [{"d": true, "c": null}],
        });
        assert_eq!(
            sorted_json(&v).unwrap(),
            r#"{"a":{"b":"","y":[]},"m":[{"c":null,"d":true}],"z":1}"#
        );
    }

    #[test]
    fn test_html_safe_escaping() {
        let v = json!({"memo": "a&b <c> \"q\" \\ \n\u{01}é"});
        assert_eq!(
            sorted_json(&v).unwrap(),
            r#"{"memo":"a\u0026b \u003cc\u003e \"q\" \\ \n\u0001é"}"#
        );
    }

    #[test]
    fn test_floats_rejected() {
        assert!(matches!(
            sorted_json(&json!({"gas": 1.5})),
            Err(TxError::AminoJson(_))
        ));
        assert_eq!(sorted_json(&json!([-3, 18446744073709551615u64])).unwrap(), "[-3,18446744073709551615]");
    }
}
