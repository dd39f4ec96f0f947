//! Wire records returned by the marketplace backend.
//!
//! The backend is loosely typed: identifiers arrive as `_id` or `id`, rates
//! as numbers or numeric strings, and `images`/`features` as an array, a
//! JSON-encoded array inside a string, or a comma-separated string. All of
//! that is resolved here, once, so the domain only sees [`Vehicle`] and
//! [`OccupiedRange`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use super::client::RemoteError;
use crate::domain::availability::OccupiedRange;
use crate::domain::entities::Vehicle;
use crate::domain::pricing::{MAX_RATE, Offer, RateSchedule};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    #[default]
    #[serde(alias = "rental")]
    Rent,
    Sale,
}

/// A vehicle document as served by `GET /vehicles/{id}`.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    #[serde(alias = "_id")]
    pub id: String,

    #[serde(default, alias = "title")]
    pub name: String,

    #[serde(default)]
    pub listing_type: ListingType,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    pub daily_rate: Option<f64>,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    pub weekly_rate: Option<f64>,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default, alias = "salePrice")]
    pub price: Option<f64>,

    #[serde(default, deserialize_with = "string_list")]
    pub images: Vec<String>,

    #[serde(default, deserialize_with = "string_list")]
    pub features: Vec<String>,
}

impl TryFrom<VehicleRecord> for Vehicle {
    type Error = RemoteError;

    fn try_from(record: VehicleRecord) -> Result<Self, Self::Error> {
        let invalid = |message: &str| RemoteError::InvalidRecord {
            id: record.id.clone(),
            message: message.to_string(),
        };
        let amount = |value: Option<f64>, field: &str, max: f64| match value {
            Some(v) if !v.is_finite() || v < 0.0 || v > max => {
                Err(invalid(&format!("{field} must be a number between 0 and {max}")))
            }
            other => Ok(other),
        };

        let offer = match record.listing_type {
            ListingType::Rent => {
                // A missing daily rate prices as zero, i.e. "not priceable yet"
                let daily_rate = amount(record.daily_rate, "dailyRate", MAX_RATE)?.unwrap_or(0.0);
                let weekly_rate = amount(record.weekly_rate, "weeklyRate", MAX_RATE)?;
                Offer::Rental {
                    rates: RateSchedule::new(daily_rate, weekly_rate),
                }
            }
            ListingType::Sale => {
                let price = amount(record.price, "price", f64::MAX)?
                    .ok_or_else(|| invalid("sale listing has no price"))?;
                Offer::Sale { price }
            }
        };

        Ok(Vehicle::new(
            record.id,
            record.name,
            offer,
            record.images,
            record.features,
        ))
    }
}

/// A booking document as served by `GET /vehicles/{id}/bookings`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    #[serde(alias = "_id")]
    pub id: String,

    #[serde(deserialize_with = "calendar_day")]
    pub start_date: NaiveDate,

    #[serde(deserialize_with = "calendar_day")]
    pub end_date: NaiveDate,
}

impl From<BookingRecord> for OccupiedRange {
    fn from(record: BookingRecord) -> Self {
        OccupiedRange::new(record.id, record.start_date, record.end_date)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    List(Vec<String>),
    Text(String),
}

/// Normalises an array, a JSON-encoded array string, or a comma-separated
/// string into a list of trimmed, non-empty entries.
fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<StringOrList>::deserialize(deserializer)?;

    Ok(match raw {
        None => Vec::new(),
        Some(StringOrList::List(items)) => clean(items),
        Some(StringOrList::Text(text)) => parse_list_text(&text),
    })
}

fn parse_list_text(text: &str) -> Vec<String> {
    let trimmed = text.trim();

    if trimmed.starts_with('[')
        && let Ok(items) = serde_json::from_str::<Vec<String>>(trimmed)
    {
        return clean(items);
    }

    clean(trimmed.split(',').map(str::to_owned))
}

fn clean(items: impl IntoIterator<Item = String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_owned())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Accepts RFC 3339 timestamps (reduced to their UTC day) or `YYYY-MM-DD`.
fn calendar_day<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_day(&raw).map_err(serde::de::Error::custom)
}

fn parse_calendar_day(raw: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.with_timezone(&Utc).date_naive());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| format!("expected an RFC 3339 timestamp or YYYY-MM-DD date, got '{raw}'"))
}
