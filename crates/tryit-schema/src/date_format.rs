//! Date/time reformatting for `date`, `time` and `datetimeLocal` fields.
//!
//! Browser date inputs always produce ISO-like text (`2024-03-01`,
//! `09:30`, `2024-03-01T09:30`). A field's `dateFormat` turns that into
//! whatever the remote API expects. Formats are either chrono strftime
//! strings (`%d/%m/%Y`) or token strings (`DD/MM/YYYY`).

use std::borrow::Cow;
use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::field::FieldKind;

const DATE_INPUT: &str = "%Y-%m-%d";
const TIME_INPUTS: &[&str] = &["%H:%M:%S", "%H:%M"];
const DATETIME_INPUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Token → strftime specifier, longest tokens first.
const TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MM", "%m"),
    ("M", "%-m"),
    ("DD", "%d"),
    ("D", "%-d"),
    ("HH", "%H"),
    ("H", "%-H"),
    ("hh", "%I"),
    ("h", "%-I"),
    ("mm", "%M"),
    ("ss", "%S"),
    ("A", "%p"),
    ("a", "%P"),
];

/// Translate a token format into strftime.
///
/// Strings that already contain `%` are treated as strftime and returned
/// unchanged. Text inside `[...]` is copied literally.
pub(crate) fn to_strftime(format: &str) -> Cow<'_, str> {
    if format.contains('%') {
        return Cow::Borrowed(format);
    }

    let mut out = String::with_capacity(format.len() * 2);
    let mut rest = format;
    'outer: while !rest.is_empty() {
        if let Some(escaped) = rest.strip_prefix('[') {
            if let Some(end) = escaped.find(']') {
                out.push_str(&escaped[..end]);
                rest = &escaped[end + 1..];
                continue;
            }
        }
        for (token, spec) in TOKENS {
            if let Some(after) = rest.strip_prefix(token) {
                out.push_str(spec);
                rest = after;
                continue 'outer;
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }
    Cow::Owned(out)
}

/// Whether `format` can be used to format dates.
pub(crate) fn is_valid(format: &str) -> bool {
    let strftime = to_strftime(format);
    !StrftimeItems::new(&strftime).any(|item| matches!(item, Item::Error))
}

/// Reformat browser input of the given kind.
///
/// Returns `None` when the input does not parse or the format asks for
/// components the kind does not have (e.g., hours on a plain date).
pub(crate) fn reformat(kind: FieldKind, input: &str, format: &str) -> Option<String> {
    let strftime = to_strftime(format);
    let input = input.trim();
    let mut out = String::new();

    match kind {
        FieldKind::Date => {
            let date = NaiveDate::parse_from_str(input, DATE_INPUT).ok()?;
            write!(out, "{}", date.format(&strftime)).ok()?;
        }
        FieldKind::Time => {
            let time = TIME_INPUTS
                .iter()
                .find_map(|f| NaiveTime::parse_from_str(input, f).ok())?;
            write!(out, "{}", time.format(&strftime)).ok()?;
        }
        FieldKind::DatetimeLocal => {
            let datetime = DATETIME_INPUTS
                .iter()
                .find_map(|f| NaiveDateTime::parse_from_str(input, f).ok())?;
            write!(out, "{}", datetime.format(&strftime)).ok()?;
        }
        _ => return None,
    }

    Some(out)
}
