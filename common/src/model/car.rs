use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};

/// Represents a single record of the car catalog as returned by the remote API.
///
/// `id` and `created_at` are assigned by the server and are never set or
/// mutated on the client. The specification fields (`engine` through
/// `emission_standard`) are free-form strings that the server may omit; they
/// are displayed only when present and never validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    /// Opaque, server-assigned identifier.
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Drivetrain category, `automatic` or `manual` in any casing.
    pub car_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// May be empty on display; views fall back to a placeholder image.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    /// Server timestamp, kept as the raw text so an unexpected format never
    /// prevents a list from decoding.
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub displacement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_speed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_power: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emission_standard: Option<String>,
}

/// Reads an explicit `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A labelled specification value ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Specification<'a> {
    pub label: &'static str,
    pub value: &'a str,
}

impl Car {
    /// Returns the specification fields that carry a value, in display order.
    ///
    /// An empty string counts as absent.
    pub fn specifications(&self) -> Vec<Specification<'_>> {
        [
            ("Engine", &self.engine),
            ("Displacement", &self.displacement),
            ("Fuel Type", &self.fuel_type),
            ("Mileage (ARAI)", &self.mileage),
            ("Top Speed", &self.top_speed),
            ("Max Power", &self.max_power),
            ("Emission Standard", &self.emission_standard),
        ]
        .into_iter()
        .filter_map(|(label, value)| match value.as_deref() {
            Some(value) if !value.is_empty() => Some(Specification { label, value }),
            _ => None,
        })
        .collect()
    }

    /// The image to show for this car, or `placeholder` when none is set.
    pub fn image_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if self.image_url.is_empty() {
            placeholder
        } else {
            &self.image_url
        }
    }

    pub fn is_automatic(&self) -> bool {
        self.car_type.eq_ignore_ascii_case("automatic")
    }

    /// Parses `created_at` as an RFC 3339 timestamp.
    pub fn created_at_time(&self) -> Option<DateTime<chrono::FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.created_at).ok()
    }

    /// Human readable creation time in the local zone, or the raw server text
    /// if it cannot be parsed.
    pub fn created_at_display(&self) -> String {
        match self.created_at_time() {
            Some(time) => time
                .with_timezone(&Local)
                .format("%-m/%-d/%Y, %-I:%M:%S %p")
                .to_string(),
            None => self.created_at.clone(),
        }
    }
}
