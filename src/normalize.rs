//! Lenient field coercion applied once at the model boundary.
//!
//! The upstream API hands back records whose numeric fields may arrive as
//! numbers, numeric strings, null, or be missing entirely. Every helper here
//! is total: malformed input degrades to the zero/empty value for the field
//! instead of failing the whole record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::model::EmployeeRef;

/// Coerce a count field to `u64`. Accepts numbers and numeric strings,
/// truncating fractions the way `parseInt` would; anything else is 0.
pub fn count_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_f64(&value).map(|f| if f > 0.0 { f as u64 } else { 0 }).unwrap_or(0))
}

/// Coerce a currency/ratio field to `f64`; non-numeric input is 0.0.
pub fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_f64(&value).unwrap_or(0.0))
}

/// Coerce to `Some(f64)` when a usable number was supplied, `None` otherwise.
/// Used for fields where "absent" has its own meaning (e.g. a revenue figure
/// that falls back to a computed value).
pub fn number_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_f64(&value))
}

/// Coerce a display field to `String`; numbers are stringified, everything
/// else becomes the empty string.
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Status strings: trimmed and defaulted to "unknown" when blank or absent.
pub fn status_or_unknown<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => unknown_status(),
    })
}

pub fn unknown_status() -> String {
    "unknown".to_string()
}

/// Embedded employee reference. The API usually populates it inline as an
/// object, but an unpopulated Mongo-style reference arrives as a bare id
/// string; anything else (null, missing, garbage) reads as no reference,
/// which downstream displays as "Unknown".
pub fn employee_ref_opt<'de, D>(deserializer: D) -> Result<Option<EmployeeRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(_) => serde_json::from_value(value).ok(),
        Value::String(s) if !s.trim().is_empty() => Some(EmployeeRef {
            id: s.trim().to_string(),
            name: String::new(),
            profile_picture: None,
        }),
        _ => None,
    })
}

/// RFC 3339 timestamp or `None`; a malformed timestamp never rejects the
/// record, it just loses its date (and then fails any active date filter).
pub fn datetime_opt<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|t| t.with_timezone(&Utc)),
        _ => None,
    })
}

fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::count_or_zero")]
        count: u64,
        #[serde(default, deserialize_with = "super::number_or_zero")]
        amount: f64,
        #[serde(default, deserialize_with = "super::number_opt")]
        maybe: Option<f64>,
        #[serde(default, deserialize_with = "super::string_or_empty")]
        name: String,
        #[serde(
            default = "super::unknown_status",
            deserialize_with = "super::status_or_unknown"
        )]
        status: String,
    }

    #[test]
    fn numeric_strings_parse() {
        let p: Probe =
            serde_json::from_value(json!({"count": "10", "amount": "5.5", "maybe": "3"})).unwrap();
        assert_eq!(p.count, 10);
        assert_eq!(p.amount, 5.5);
        assert_eq!(p.maybe, Some(3.0));
    }

    #[test]
    fn garbage_degrades_to_defaults() {
        let p: Probe = serde_json::from_value(json!({
            "count": null,
            "amount": "lots",
            "maybe": {"nested": true},
            "name": 42,
            "status": "  "
        }))
        .unwrap();
        assert_eq!(p.count, 0);
        assert_eq!(p.amount, 0.0);
        assert_eq!(p.maybe, None);
        assert_eq!(p.name, "42");
        assert_eq!(p.status, "unknown");
    }

    #[test]
    fn missing_fields_use_defaults() {
        let p: Probe = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p.count, 0);
        assert_eq!(p.amount, 0.0);
        assert_eq!(p.maybe, None);
        assert_eq!(p.name, "");
        assert_eq!(p.status, "unknown");
    }

    #[test]
    fn fractional_counts_truncate() {
        let p: Probe = serde_json::from_value(json!({"count": "10.9"})).unwrap();
        assert_eq!(p.count, 10);
    }

    #[test]
    fn negative_counts_clamp_to_zero() {
        let p: Probe = serde_json::from_value(json!({"count": -4})).unwrap();
        assert_eq!(p.count, 0);
    }
}
