// Helper functions for case-insensitive matching and tolerant deserialization

use serde::{Deserialize, Deserializer};

/// Case-insensitive substring containment.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True when an optional string field actually carries a value.
pub fn has_value(field: &Option<String>) -> bool {
    field.as_deref().map_or(false, |value| !value.trim().is_empty())
}

/// Deserializes experience years from either a JSON number or a numeric
/// string. Unparsable or missing values collapse to 0.0 so one bad record
/// cannot abort a whole filter pass.
pub fn deserialize_experience<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    let value = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(match value {
        Some(NumberOrText::Number(years)) => years,
        Some(NumberOrText::Text(raw)) => raw.trim().parse().unwrap_or(0.0),
        None => 0.0,
    })
}
