//! Canonical order intake and the mapping from legacy request shapes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{BrandMix, Coordinates};

/// Raw order request as submitted by the organizer.
///
/// Every field is optional at the type level so the validator can name the
/// one that is missing. Numbers are kept signed so out-of-range input reaches
/// the range checks instead of failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderIntake {
    #[serde(default)]
    pub guests: Option<i64>,

    #[serde(default)]
    pub event_duration_hours: Option<i64>,

    #[serde(default)]
    pub crates: Option<i64>,

    #[serde(default)]
    pub mix: Option<BrandMix>,

    #[serde(default)]
    pub delivery_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl OrderIntake {
    /// Creates a fully populated intake.
    pub fn new(
        guests: i64,
        event_duration_hours: i64,
        crates: i64,
        mix: BrandMix,
        delivery_address: impl Into<String>,
    ) -> Self {
        Self {
            guests: Some(guests),
            event_duration_hours: Some(event_duration_hours),
            crates: Some(crates),
            mix: Some(mix),
            delivery_address: Some(delivery_address.into()),
            coordinates: None,
        }
    }

    /// Attaches geocoded coordinates.
    pub fn with_coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.coordinates = Some(Coordinates { lat, lng });
        self
    }

    /// Maps any known request shape onto the canonical intake.
    ///
    /// Accepted aliases:
    /// - duration: `eventDurationHours`, `hours`
    /// - mix: `mix`, `smartMix`
    /// - address: `deliveryAddress`, `delivery.address`, or `delivery` as a string
    /// - coordinates: `coordinates.{lat,lng}`, `delivery.{lat,lng}`
    ///
    /// Numbers may arrive as JSON numbers or numeric strings (form inputs).
    /// Values that cannot be read become `None`; a mix that is not an object of
    /// non-negative integer counts also becomes `None`.
    pub fn from_json(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        let delivery = obj.get("delivery");

        let delivery_address = first_present(obj, &["deliveryAddress"])
            .and_then(Value::as_str)
            .or_else(|| match delivery {
                Some(Value::String(s)) => Some(s.as_str()),
                Some(Value::Object(d)) => d.get("address").and_then(Value::as_str),
                _ => None,
            })
            .map(str::to_string);

        let coordinates = first_present(obj, &["coordinates"])
            .and_then(read_coordinates)
            .or_else(|| delivery.and_then(read_coordinates));

        Self {
            guests: first_present(obj, &["guests"]).and_then(read_int),
            event_duration_hours: first_present(obj, &["eventDurationHours", "hours"])
                .and_then(read_int),
            crates: first_present(obj, &["crates"]).and_then(read_int),
            mix: first_present(obj, &["mix", "smartMix"]).and_then(read_mix),
            delivery_address,
            coordinates,
        }
    }
}

fn first_present<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .find(|v| !v.is_null())
}

fn read_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < 9.0e15)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn read_mix(value: &Value) -> Option<BrandMix> {
    let obj = value.as_object()?;
    obj.iter()
        .map(|(brand, count)| {
            let count = read_int(count).and_then(|c| u32::try_from(c).ok())?;
            Some((brand.clone(), count))
        })
        .collect()
}

fn read_coordinates(value: &Value) -> Option<Coordinates> {
    let obj = value.as_object()?;
    let lat = obj.get("lat").and_then(Value::as_f64)?;
    let lng = obj.get("lng").and_then(Value::as_f64)?;
    Some(Coordinates { lat, lng })
}
