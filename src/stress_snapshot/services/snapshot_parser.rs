use crate::shared::Result;
use crate::stress_snapshot::domain::{BreachCount, BreachFlag, IndicatorReading, Reading, Snapshot};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Bare tokens the producer's JSON encoder writes for non-finite floats.
/// `-Infinity` must be tried before `Infinity`.
const NON_FINITE_TOKENS: [&str; 3] = ["-Infinity", "Infinity", "NaN"];

/// Prefix marking a string that started life as a bare non-finite token.
/// Written as the `\u0000` escape so it cannot collide with ordinary text.
const NON_FINITE_MARKER: char = '\u{0}';

/// Tolerant parser for stored snapshot documents.
///
/// Accepts strict JSON plus the `NaN`/`Infinity`/`-Infinity` literals, keeps
/// mapping order, and degrades missing or malformed fields to empty values
/// instead of failing the whole document.
pub struct SnapshotParser;

impl SnapshotParser {
    /// Parses a snapshot document
    ///
    /// # Errors
    /// Returns an error if the text is not JSON or its top level is not an object
    pub fn parse(text: &str) -> Result<Snapshot> {
        let normalized = Self::quote_non_finite_literals(text);
        let value: Value = serde_json::from_str(&normalized)
            .map_err(|e| anyhow::anyhow!("Invalid snapshot JSON: {}", e))?;

        let Value::Object(root) = value else {
            anyhow::bail!("Snapshot is not a JSON object");
        };

        Ok(Snapshot {
            generated_utc: Self::text_of(root.get("generated_utc")),
            values: Self::entries(&root, "values")
                .map(|(name, v)| IndicatorReading::new(name.as_str(), Self::reading_of(v)))
                .collect(),
            breaches: Self::entries(&root, "breaches")
                .map(|(rule, v)| BreachFlag::new(rule.as_str(), Self::is_truthy(v)))
                .collect(),
            breach_count: root.get("breach_count").and_then(Self::count_of),
        })
    }

    /// Returns true when `parse` would accept the text
    pub fn is_parseable(text: &str) -> bool {
        Self::parse(text).is_ok()
    }

    /// Rewrites bare non-finite tokens outside string literals into marked strings
    fn quote_non_finite_literals(text: &str) -> Cow<'_, str> {
        if !text.contains("NaN") && !text.contains("Infinity") {
            return Cow::Borrowed(text);
        }

        let mut out = String::with_capacity(text.len() + 16);
        let mut in_string = false;
        let mut escaped = false;
        let mut rest = text;

        while let Some(c) = rest.chars().next() {
            if in_string {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == '"' {
                    in_string = false;
                }
            } else if c == '"' {
                in_string = true;
            } else if let Some(token) = NON_FINITE_TOKENS.iter().find(|t| rest.starts_with(*t)) {
                out.push_str("\"\\u0000");
                out.push_str(token);
                out.push('"');
                rest = &rest[token.len()..];
                continue;
            }
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }

        Cow::Owned(out)
    }

    /// Iterates a nested mapping; anything but an object yields no entries
    fn entries<'a>(
        root: &'a Map<String, Value>,
        field: &str,
    ) -> impl Iterator<Item = (&'a String, &'a Value)> {
        root.get(field)
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|map| map.iter())
    }

    fn non_finite_of(s: &str) -> Option<f64> {
        match s.strip_prefix(NON_FINITE_MARKER)? {
            "NaN" => Some(f64::NAN),
            "Infinity" => Some(f64::INFINITY),
            "-Infinity" => Some(f64::NEG_INFINITY),
            _ => None,
        }
    }

    fn reading_of(value: &Value) -> Reading {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(v) => Reading::Number(v),
                None => Reading::Raw(n.to_string()),
            },
            Value::String(s) => match Self::non_finite_of(s) {
                Some(v) => Reading::Number(v),
                None => Reading::Raw(s.clone()),
            },
            other => Reading::Raw(other.to_string()),
        }
    }

    /// Truthiness as the producer's consumers have always judged it:
    /// false, null, 0, NaN and "" are false, everything else is true
    fn is_truthy(value: &Value) -> bool {
        match value {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Value::String(s) => match Self::non_finite_of(s) {
                Some(v) => !v.is_nan(),
                None => !s.is_empty(),
            },
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    fn text_of(value: Option<&Value>) -> String {
        match value {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => match Self::non_finite_of(s) {
                Some(_) => s.trim_start_matches(NON_FINITE_MARKER).to_string(),
                None => s.clone(),
            },
            Some(other) => other.to_string(),
        }
    }

    /// Whole counts become `Count`; other values keep the text a browser
    /// would show for them. Null and booleans render as nothing.
    fn count_of(value: &Value) -> Option<BreachCount> {
        match value {
            Value::Null | Value::Bool(_) => None,
            Value::Number(n) => {
                let whole = n.as_u64().or_else(|| {
                    // Some encoders write integral counts as 1.0
                    n.as_f64()
                        .filter(|v| v.fract() == 0.0 && *v >= 0.0 && *v <= u64::MAX as f64)
                        .map(|v| v as u64)
                });
                Some(match whole {
                    Some(count) => BreachCount::Count(count),
                    None => BreachCount::Raw(n.to_string()),
                })
            }
            other => Some(BreachCount::Raw(Self::text_of(Some(other)))),
        }
    }
}
