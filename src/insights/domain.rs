use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Fixed vocabulary of flavor descriptors, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flavor {
    Spicy,
    Creamy,
    Sweet,
    Savory,
    Tangy,
    Fresh,
    Aromatic,
}

impl Flavor {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Spicy,
            Self::Creamy,
            Self::Sweet,
            Self::Savory,
            Self::Tangy,
            Self::Fresh,
            Self::Aromatic,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Spicy => "spicy",
            Self::Creamy => "creamy",
            Self::Sweet => "sweet",
            Self::Savory => "savory",
            Self::Tangy => "tangy",
            Self::Fresh => "fresh",
            Self::Aromatic => "aromatic",
        }
    }

    /// Exact match of an already case-folded tag against the vocabulary.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|flavor| flavor.label() == tag)
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scale the caller's ratings are expressed on. Scoring always runs on the five-point scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingScale {
    #[default]
    Five,
    Ten,
}

impl RatingScale {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Five => "five",
            Self::Ten => "ten",
        }
    }

    /// Maps a raw rating onto the canonical five-point scale.
    pub fn normalize(self, rating: f64) -> f64 {
        if !rating.is_finite() {
            return 0.0;
        }

        match self {
            Self::Five => rating,
            Self::Ten => rating / 2.0,
        }
    }
}

impl FromStr for RatingScale {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "five" | "5" | "five_point" => Ok(Self::Five),
            "ten" | "10" | "ten_point" => Ok(Self::Ten),
            other => Err(format!(
                "unknown rating scale '{other}' (expected 'five' or 'ten')"
            )),
        }
    }
}

/// One logged meal.
///
/// Every field is optional on the wire and a field of the wrong shape is dropped rather than
/// failing the whole record: a record without a usable rating scores as 0, and a bare string
/// in `tags` counts as a single tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_title")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_rating")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub photo_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl Entry {
    pub fn new<T, I, S>(title: T, rating: f64, tags: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            rating: Some(rating),
            tags: tags.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }
}

/// Accepts RFC 3339 timestamps or bare `YYYY-MM-DD` dates (read as midnight UTC).
pub(crate) fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    None
}

fn text_value(value: Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(text_value))
}

fn lenient_title<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|value| value.is_finite()))
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(tag) => Some(tag),
                _ => None,
            })
            .collect(),
        Some(Value::String(tag)) if !tag.trim().is_empty() => vec![tag],
        _ => Vec::new(),
    })
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(text)) => parse_timestamp(&text),
        _ => None,
    })
}
