//! Station record as stored in the catalog.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A railway station.
///
/// Only `id`, `name` and `avg_stop_times` take part in lookup and ranking.
/// Every other field of the stored document is kept in `extra` so that a
/// station can be handed back exactly as it was loaded.
///
/// # Examples
///
/// ```
/// use station_server::domain::Station;
///
/// let station = Station::new(
///     "http://irail.be/stations/NMBS/008892007",
///     "Gent-Sint-Pieters",
///     80.0,
/// );
/// assert_eq!(station.name, "Gent-Sint-Pieters");
/// assert!(station.extra.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Absolute URI, unique within a catalog.
    #[serde(rename = "@id")]
    pub id: String,

    /// Display name, also the text matched against queries.
    pub name: String,

    /// Average number of stopping vehicles. Higher means busier.
    #[serde(
        rename = "avgStopTimes",
        default,
        deserialize_with = "deserialize_stop_times"
    )]
    pub avg_stop_times: f64,

    /// Fields the lookup engine does not use (`alternative`, `country`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Station {
    /// Create a station with no extra fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>, avg_stop_times: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avg_stop_times,
            extra: Map::new(),
        }
    }
}

/// Accept `avgStopTimes` as a JSON number or a numeric string.
///
/// Catalog exports generated from CSV sometimes quote the number. Anything
/// unparseable counts as zero service.
fn deserialize_stop_times<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(parsed.filter(|v| v.is_finite() && *v >= 0.0).unwrap_or(0.0))
}
