use crate::insights::domain::{parse_timestamp, Entry};
use serde::{Deserialize, Deserializer};
use std::io::Read;

const TAG_SEPARATORS: [char; 2] = [';', '|'];

pub(crate) fn parse_entries<R: Read>(reader: R) -> Result<Vec<Entry>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut entries = Vec::new();

    for record in csv_reader.deserialize::<DiaryRow>() {
        let row = record?;
        entries.push(row.into_entry());
    }

    Ok(entries)
}

#[derive(Debug, Deserialize)]
struct DiaryRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    user_id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    title: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    rating: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    tags: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    location: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    photo_url: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    created_at: Option<String>,
}

impl DiaryRow {
    fn into_entry(self) -> Entry {
        let rating = self
            .rating
            .as_deref()
            .and_then(|raw| raw.parse::<f64>().ok())
            .filter(|value| value.is_finite());
        let tags = self.tags.as_deref().map(split_tags).unwrap_or_default();
        let created_at = self.created_at.as_deref().and_then(parse_timestamp);

        Entry {
            id: self.id,
            user_id: self.user_id,
            title: self.title.unwrap_or_default(),
            rating,
            tags,
            location: self.location,
            photo_url: self.photo_url,
            created_at,
        }
    }
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(TAG_SEPARATORS)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
pub(crate) fn parse_timestamp_for_tests(value: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    parse_timestamp(value)
}

#[cfg(test)]
pub(crate) fn split_tags_for_tests(value: &str) -> Vec<String> {
    split_tags(value)
}
