// src/utils/form.rs

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, de};

/// Query strings carry every value as text, JSON bodies carry native values.
#[derive(Deserialize)]
#[serde(untagged)]
enum Raw<T> {
    Text(String),
    Native(T),
}

/// Reads an optional field where a blank value means "not set".
///
/// Admin forms submit untouched inputs as `categoryId=`; those become `None`
/// instead of a parse error. Non-blank text must still parse as `T`.
pub fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de>,
    T::Err: fmt::Display,
{
    match Option::<Raw<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Native(value)) => Ok(Some(value)),
        Some(Raw::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Raw::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| de::Error::custom(format!("cannot parse {:?}: {}", text, e))),
    }
}

/// Like [`blank_as_none`], falling back to the zero value.
pub fn blank_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de> + Default,
    T::Err: fmt::Display,
{
    blank_as_none(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Filter {
        #[serde(deserialize_with = "blank_as_none")]
        category: Option<i64>,
        #[serde(deserialize_with = "blank_as_none")]
        since: Option<DateTime<Utc>>,
        #[serde(deserialize_with = "blank_as_default")]
        page: i64,
    }

    fn parse(json: &str) -> Result<Filter, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn blank_text_means_not_set() {
        let filter = parse(r#"{"category": "", "since": "  ", "page": ""}"#).unwrap();

        assert_eq!(filter.category, None);
        assert_eq!(filter.since, None);
        assert_eq!(filter.page, 0);
    }

    #[test]
    fn native_and_textual_values_both_parse() {
        let native = parse(r#"{"category": 7, "page": 2}"#).unwrap();
        assert_eq!(native.category, Some(7));
        assert_eq!(native.page, 2);

        let text = parse(r#"{"category": "7", "since": "2024-05-01T08:00:00Z"}"#).unwrap();
        assert_eq!(text.category, Some(7));
        assert_eq!(
            text.since,
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap())
        );
    }

    #[test]
    fn null_and_missing_fall_back() {
        let filter = parse(r#"{"category": null}"#).unwrap();

        assert_eq!(filter.category, None);
        assert_eq!(filter.since, None);
        assert_eq!(filter.page, 0);
    }

    #[test]
    fn garbage_text_is_still_an_error() {
        let err = parse(r#"{"category": "abc"}"#).unwrap_err();
        assert!(err.to_string().contains("abc"), "{}", err);

        assert!(parse(r#"{"since": "yesterday"}"#).is_err());
    }
}
