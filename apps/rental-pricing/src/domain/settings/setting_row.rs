//! Stored business setting row.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::{SettingColumn, SettingKey};

/// One row of the `business_settings` table.
///
/// Every setting has both value columns; which one is meaningful depends on
/// the key. Unknown keys are carried through and ignored when resolving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessSettingRow {
    /// Row identifier. The store may hand it out as a number or a string.
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    /// Storage key, e.g. `investor_profit_rate`. A missing or null key
    /// decodes as empty and the row is ignored.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub setting_key: String,
    /// Display name shown on the settings screen.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub setting_name: String,
    /// Percent-style value (0-100).
    #[serde(default)]
    pub value_percent: Option<f64>,
    /// Currency-style value.
    #[serde(default)]
    pub value_aed: Option<f64>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Last edit time. Unparsable timestamps decode as `None`.
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BusinessSettingRow {
    /// Row for a known key with only the relevant column filled.
    #[must_use]
    pub fn for_key(key: SettingKey, value: f64) -> Self {
        let (value_percent, value_aed) = match key.column() {
            SettingColumn::Percent => (Some(value), None),
            SettingColumn::Aed => (None, Some(value)),
        };
        Self {
            id: String::new(),
            setting_key: key.as_str().to_string(),
            setting_name: key.display_name().to_string(),
            value_percent,
            value_aed,
            description: None,
            updated_at: None,
        }
    }

    /// Parsed key, `None` for keys the calculator does not read.
    #[must_use]
    pub fn key(&self) -> Option<SettingKey> {
        self.setting_key.parse().ok()
    }

    /// Value of the given column.
    #[must_use]
    pub const fn value(&self, column: SettingColumn) -> Option<f64> {
        match column {
            SettingColumn::Percent => self.value_percent,
            SettingColumn::Aed => self.value_aed,
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    })
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// Accepts `timestamptz` (RFC 3339) and `timestamp` (no offset, read as UTC).
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(serde_json::Value::String(text)) = value else {
        return Ok(None);
    };
    Ok(DateTime::parse_from_rfc3339(&text)
        .map(|ts| ts.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(&text, "%Y-%m-%dT%H:%M:%S%.f")
                .or_else(|_| NaiveDateTime::parse_from_str(&text, "%Y-%m-%d %H:%M:%S%.f"))
                .ok()
                .map(|naive| naive.and_utc())
        }))
}
