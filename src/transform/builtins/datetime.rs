//! Date and time parsing.
//!
//! `parse_datetime` turns text into an object holding only the parts the
//! format actually set (`year`, `month`, `day`, `hour`, `minute`,
//! `second`). `combine_datetime` merges several such objects, so a date
//! scraped from one node and a time from another give one timestamp.

use crate::error::{TransformError, TransformResult};
use crate::transform::curry::arg;
use crate::transform::Transformation;
use crate::Value;
use chrono::format::{parse, Parsed, StrftimeItems};
use chrono::NaiveDate;
use std::collections::BTreeMap;

const PARTS: [&str; 6] = ["year", "month", "day", "hour", "minute", "second"];

fn parse_with(format: &str, text: &str) -> Option<Vec<(&'static str, f64)>> {
    let mut parsed = Parsed::new();
    parse(&mut parsed, text, StrftimeItems::new(format)).ok()?;

    let year = parsed.year().or_else(|| {
        let rem = parsed.year_mod_100()?;
        Some(match parsed.year_div_100() {
            Some(century) => century * 100 + rem,
            None if rem >= 70 => 1900 + rem,
            None => 2000 + rem,
        })
    });
    // %H sets both halves, %I without %p only the remainder
    let hour = match (parsed.hour_div_12(), parsed.hour_mod_12()) {
        (Some(half), Some(rem)) => Some(half * 12 + rem),
        (None, Some(rem)) => Some(rem),
        _ => None,
    };

    let parts: Vec<(&'static str, f64)> = [
        ("year", year.map(f64::from)),
        ("month", parsed.month().map(f64::from)),
        ("day", parsed.day().map(f64::from)),
        ("hour", hour.map(f64::from)),
        ("minute", parsed.minute().map(f64::from)),
        ("second", parsed.second().map(f64::from)),
    ]
    .into_iter()
    .filter_map(|(name, value)| value.map(|v| (name, v)))
    .collect();
    (!parts.is_empty()).then_some(parts)
}

/// `parse_datetime(formats)`: `formats` is one chrono format string or an
/// array of them, tried in order.
pub fn parse_datetime() -> Transformation {
    Transformation::new("parse_datetime", 2, |_, args| {
        let formats: Vec<&str> = match arg(args, 0, "parse_datetime")? {
            Value::String(f) => vec![f.as_str()],
            Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
            other => return Err(TransformError::type_mismatch("format string or array", other)),
        };
        let text = arg(args, 1, "parse_datetime")?;
        let text = text
            .as_str()
            .ok_or_else(|| TransformError::type_mismatch("string", text))?
            .trim();

        let parts = formats
            .iter()
            .find_map(|format| parse_with(format, text))
            .ok_or_else(|| {
                TransformError::Failed(format!("'{}' matches none of {:?}", text, formats))
            })?;
        Ok(Value::Object(
            parts
                .into_iter()
                .map(|(k, v)| (k.to_string(), Value::Number(v)))
                .collect(),
        ))
    })
    .with_body("parse_datetime(formats, x) -> parsed date parts of x")
}

fn parts_of(value: &Value) -> TransformResult<&BTreeMap<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(TransformError::type_mismatch("parsed date parts", other)),
    }
}

/// Merges parsed parts, repeatedly taking from whichever input adds the most
/// parts not yet covered, and renders the result as `YYYY-MM-DDTHH:MM:SS`.
pub fn combine_datetime() -> Transformation {
    Transformation::new("combine_datetime", 1, |_, args| {
        let inputs = arg(args, 0, "combine_datetime")?;
        let inputs = inputs
            .as_array()
            .ok_or_else(|| TransformError::type_mismatch("array", inputs))?
            .iter()
            .map(parts_of)
            .collect::<TransformResult<Vec<_>>>()?;

        let mut combined: BTreeMap<&str, f64> = BTreeMap::new();
        loop {
            let best = inputs
                .iter()
                .map(|parts| {
                    let new: Vec<(&'static str, f64)> = PARTS
                        .iter()
                        .filter(|p| !combined.contains_key(**p))
                        .filter_map(|p| parts.get(*p).and_then(Value::as_f64).map(|v| (*p, v)))
                        .collect();
                    new
                })
                .max_by_key(|new| new.len());
            match best {
                Some(new) if !new.is_empty() => combined.extend(new),
                _ => break,
            }
        }

        let part = |name: &str| combined.get(name).copied();
        let (year, month, day) = match (part("year"), part("month"), part("day")) {
            (Some(y), Some(m), Some(d)) => (y as i32, m as u32, d as u32),
            _ => return Err(TransformError::Failed("no complete date to combine".to_string())),
        };
        let datetime = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| {
                date.and_hms_opt(
                    part("hour").unwrap_or(0.0) as u32,
                    part("minute").unwrap_or(0.0) as u32,
                    part("second").unwrap_or(0.0) as u32,
                )
            })
            .ok_or_else(|| TransformError::Failed("combined parts are not a valid date".to_string()))?;
        Ok(Value::String(datetime.format("%Y-%m-%dT%H:%M:%S").to_string()))
    })
    .many_to_one()
    .with_body("combine_datetime(xs) -> one timestamp from several partial dates")
}
