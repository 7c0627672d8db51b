use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::status::StatusLabel;

/// A customer's flight reservation as returned by the bookings API.
///
/// Only the identifier is required on the wire. A field whose value has the
/// wrong shape decodes as absent rather than failing the record. Fields this
/// struct does not name are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id", deserialize_with = "required_text")]
    pub id: String,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub travel_class: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub adults: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub children: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub infants: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub checked_bags: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub cabin_bags: Option<u32>,
    #[serde(default, deserialize_with = "lenient_price", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_status")]
    pub payment_status: StatusLabel,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// The detail endpoint returns the same document, possibly with more fields.
pub type BookingDetail = Booking;

impl Booking {
    pub fn new(id: impl Into<String>, payment_status: impl Into<StatusLabel>) -> Self {
        Self {
            id: id.into(),
            full_name: None,
            email: None,
            phone_number: None,
            country_code: None,
            from: None,
            to: None,
            travel_class: None,
            duration: None,
            adults: None,
            children: None,
            infants: None,
            checked_bags: None,
            cabin_bags: None,
            price: None,
            payment_status: payment_status.into(),
            order_id: None,
            created_at: None,
            extra: BTreeMap::new(),
        }
    }

    /// Every field value that takes part in search, stringified.
    ///
    /// Absent values, empty strings, zeros and `false` are skipped: the admin
    /// search has always ignored falsy fields.
    pub fn search_values(&self) -> Vec<String> {
        let mut values = Vec::new();

        let texts = [
            Some(&self.id),
            self.full_name.as_ref(),
            self.email.as_ref(),
            self.phone_number.as_ref(),
            self.country_code.as_ref(),
            self.from.as_ref(),
            self.to.as_ref(),
            self.travel_class.as_ref(),
            self.duration.as_ref(),
            self.order_id.as_ref(),
        ];
        values.extend(texts.into_iter().flatten().filter(|s| !s.is_empty()).cloned());

        let counts = [
            self.adults,
            self.children,
            self.infants,
            self.checked_bags,
            self.cabin_bags,
        ];
        values.extend(
            counts
                .into_iter()
                .flatten()
                .filter(|n| *n != 0)
                .map(|n| n.to_string()),
        );

        if let Some(price) = self.price.filter(|p| *p != 0.0 && !p.is_nan()) {
            values.push(price.to_string());
        }

        let status = self.payment_status.raw();
        if !status.is_empty() {
            values.push(status.to_string());
        }

        if let Some(created_at) = self.created_at {
            values.push(created_at.to_rfc3339_opts(SecondsFormat::Millis, true));
        }

        values.extend(self.extra.values().filter_map(value_text));
        values
    }

    /// Case-insensitive substring match against any searchable value.
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        self.search_values()
            .iter()
            .any(|value| value.to_lowercase().contains(&needle))
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Accepts a string or a number and yields its text.
fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Timestamps without an offset are read as UTC.
const NAIVE_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

pub(crate) fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|naive| naive.and_utc())
}

/// RFC 3339, a naive `YYYY-MM-DD HH:MM:SS` or epoch milliseconds.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => parse_timestamp(&s),
        Some(Value::Number(n)) => n.as_i64().and_then(DateTime::<Utc>::from_timestamp_millis),
        _ => None,
    })
}

/// Non-negative whole numbers, also when sent as text.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|p| p.is_finite()),
        _ => None,
    })
}

fn lenient_status<'de, D>(deserializer: D) -> Result<StatusLabel, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.map(StatusLabel::new).unwrap_or_default())
}

fn required_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    optional_text(deserializer)?.ok_or_else(|| serde::de::Error::custom("booking id is null"))
}
