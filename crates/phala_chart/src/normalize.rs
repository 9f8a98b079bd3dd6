//! Tolerant conversion of loosely-shaped chart JSON into a [`Chart`].
//!
//! Upstream sources disagree on field names and on whether signs arrive as
//! longitudes, names or 1-based ids. Each field is resolved in order:
//! longitude-derived value, then name/id lookup, then `None`.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use phala_vedic_base::{
    Graha, Nakshatra, Rashi, nakshatra_from_longitude, normalize_360, rashi_from_longitude,
};

use crate::chart::Chart;
use crate::error::ChartError;

const WRAPPER_KEYS: &[&str] = &["chart", "kundali", "data"];

const ROLE_KEYS: &[&str] = &["role", "playerRole", "player_role"];

const ASCENDANT_LONGITUDE_KEYS: &[&str] = &[
    "ascendant_longitude",
    "ascendantLongitude",
    "ascendant",
    "asc",
    "lagna",
    "lagna_longitude",
    "lagnaLongitude",
    "ascendant_degree",
];

const ASCENDANT_RASHI_KEYS: &[&str] = &[
    "ascendant_rashi",
    "ascendantRashi",
    "ascendant_sign",
    "ascendantSign",
    "lagna_rashi",
    "lagnaRashi",
    "lagna_sign",
];

const PLANET_KEYS: &[&str] = &[
    "planet_longitudes",
    "planetLongitudes",
    "planets",
    "grahas",
    "positions",
];

const PLANET_NAME_KEYS: &[&str] = &["name", "planet", "graha", "body"];

const PLANET_LONGITUDE_KEYS: &[&str] = &["longitude", "lon", "degree", "deg", "fullDegree"];

const MOON_RASHI_KEYS: &[&str] = &[
    "moon_rashi",
    "moonRashi",
    "moon_sign",
    "moonSign",
    "rashi",
    "sign",
];

const MOON_NAKSHATRA_KEYS: &[&str] = &[
    "moon_nakshatra",
    "moonNakshatra",
    "nakshatra",
    "birth_star",
    "star",
];

const MOON_PADA_KEYS: &[&str] = &["moon_pada", "moonPada", "pada", "charan"];

const BATTING_LONGITUDE_KEYS: &[&str] = &[
    "batting_ascendant_longitude",
    "battingAscendantLongitude",
    "batting_ascendant",
    "battingAscendant",
];

const BATTING_RASHI_KEYS: &[&str] = &[
    "batting_ascendant_rashi",
    "battingAscendantRashi",
    "batting_lagna",
    "battingLagna",
];

const BOWLING_LONGITUDE_KEYS: &[&str] = &[
    "bowling_ascendant_longitude",
    "bowlingAscendantLongitude",
    "bowling_ascendant",
    "bowlingAscendant",
];

const BOWLING_RASHI_KEYS: &[&str] = &[
    "bowling_ascendant_rashi",
    "bowlingAscendantRashi",
    "bowling_lagna",
    "bowlingLagna",
];

/// First present, non-null value among `keys`.
fn first_present<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .find(|v| !v.is_null())
}

/// Finite number, or a string that parses as one.
fn as_longitude(value: &Value) -> Option<f64> {
    let lon = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Object(o) => first_present(o, PLANET_LONGITUDE_KEYS).and_then(as_longitude),
        _ => None,
    }?;
    lon.is_finite().then(|| normalize_360(lon))
}

fn as_index(value: &Value) -> Option<u8> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|i| u8::try_from(i).ok()),
        Value::String(s) => s.trim().parse::<u8>().ok(),
        _ => None,
    }
}

/// Sign from a name or 1-based id.
fn as_rashi(value: &Value) -> Option<Rashi> {
    match value {
        Value::String(s) => Rashi::from_name(s).or_else(|| as_index(value).and_then(Rashi::from_id)),
        _ => as_index(value).and_then(Rashi::from_id),
    }
}

fn as_nakshatra(value: &Value) -> Option<Nakshatra> {
    match value {
        Value::String(s) => {
            Nakshatra::from_name(s).or_else(|| as_index(value).and_then(Nakshatra::from_id))
        }
        _ => as_index(value).and_then(Nakshatra::from_id),
    }
}

/// Sign from a longitude-style key, falling back to a sign-style key.
/// A longitude-style key holding a sign name is also accepted.
fn resolve_rashi(
    obj: &Map<String, Value>,
    longitude_keys: &[&str],
    rashi_keys: &[&str],
) -> (Option<f64>, Option<Rashi>) {
    let lon_value = first_present(obj, longitude_keys);
    if let Some(lon) = lon_value.and_then(as_longitude) {
        return (Some(lon), Some(rashi_from_longitude(lon).rashi));
    }
    let named = lon_value
        .and_then(|v| v.as_str())
        .and_then(Rashi::from_name)
        .or_else(|| first_present(obj, rashi_keys).and_then(as_rashi));
    (None, named)
}

fn parse_planets(value: &Value) -> BTreeMap<Graha, f64> {
    let mut planets = BTreeMap::new();
    match value {
        Value::Object(map) => {
            for (name, v) in map {
                match (Graha::from_name(name), as_longitude(v)) {
                    (Some(g), Some(lon)) => {
                        planets.insert(g, lon);
                    }
                    _ => debug!(name = name.as_str(), "skipping unrecognized planet entry"),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                let Some(obj) = item.as_object() else {
                    debug!("skipping non-object planet entry");
                    continue;
                };
                let graha = first_present(obj, PLANET_NAME_KEYS)
                    .and_then(Value::as_str)
                    .and_then(Graha::from_name);
                let lon = first_present(obj, PLANET_LONGITUDE_KEYS).and_then(as_longitude);
                match (graha, lon) {
                    (Some(g), Some(lon)) => {
                        planets.insert(g, lon);
                    }
                    _ => debug!(?item, "skipping unrecognized planet entry"),
                }
            }
        }
        _ => warn!("planet list is neither an object nor an array"),
    }
    if !planets.contains_key(&Graha::Ketu) {
        if let Some(&rahu) = planets.get(&Graha::Rahu) {
            planets.insert(Graha::Ketu, normalize_360(rahu + 180.0));
        }
    }
    planets
}

/// The object holding chart fields: the input itself, or a wrapper's inner object.
fn chart_object(value: &Value) -> Option<&Map<String, Value>> {
    let obj = value.as_object()?;
    if first_present(obj, PLANET_KEYS).is_some() {
        return Some(obj);
    }
    WRAPPER_KEYS
        .iter()
        .filter_map(|k| obj.get(*k).and_then(Value::as_object))
        .find(|inner| first_present(inner, PLANET_KEYS).is_some())
        .or(Some(obj))
}

/// Build a chart from loosely-shaped JSON. Never fails; anything that
/// cannot be resolved is left Unknown.
pub fn normalize_chart(value: &Value) -> Chart {
    let Some(obj) = chart_object(value) else {
        warn!("chart input is not a JSON object; every field is Unknown");
        return Chart::default();
    };

    let planet_longitudes = first_present(obj, PLANET_KEYS)
        .map(parse_planets)
        .unwrap_or_default();

    let (ascendant_longitude, ascendant_rashi) =
        resolve_rashi(obj, ASCENDANT_LONGITUDE_KEYS, ASCENDANT_RASHI_KEYS);
    let (_, batting_ascendant_rashi) =
        resolve_rashi(obj, BATTING_LONGITUDE_KEYS, BATTING_RASHI_KEYS);
    let (_, bowling_ascendant_rashi) =
        resolve_rashi(obj, BOWLING_LONGITUDE_KEYS, BOWLING_RASHI_KEYS);

    let moon_lon = planet_longitudes.get(&Graha::Chandra).copied();
    let moon_info = moon_lon.map(nakshatra_from_longitude);

    let moon_rashi = moon_lon
        .map(|lon| rashi_from_longitude(lon).rashi)
        .or_else(|| first_present(obj, MOON_RASHI_KEYS).and_then(as_rashi));
    let moon_nakshatra = moon_info
        .map(|info| info.nakshatra)
        .or_else(|| first_present(obj, MOON_NAKSHATRA_KEYS).and_then(as_nakshatra));
    let moon_pada = moon_info.map(|info| info.pada).or_else(|| {
        first_present(obj, MOON_PADA_KEYS)
            .and_then(as_index)
            .filter(|p| (1..=4).contains(p))
    });

    if moon_rashi.is_none() {
        warn!("moon rashi unresolved; treating as Unknown");
    }
    if moon_nakshatra.is_none() {
        warn!("moon nakshatra unresolved; treating as Unknown");
    }
    if ascendant_rashi.is_none() {
        warn!("ascendant unresolved; treating as Unknown");
    }

    Chart {
        ascendant_longitude,
        planet_longitudes,
        moon_rashi,
        moon_nakshatra,
        moon_pada,
        ascendant_rashi,
        batting_ascendant_rashi,
        bowling_ascendant_rashi,
    }
}

/// Parse chart JSON text and normalize it. Fails only on malformed JSON.
pub fn normalize_chart_str(text: &str) -> Result<Chart, ChartError> {
    let value: Value = serde_json::from_str(text)?;
    Ok(normalize_chart(&value))
}

/// Player role tag carried next to the chart (`"role": "BAT"`), looked up on
/// the outer object first and then inside a chart wrapper.
pub fn role_tag(value: &Value) -> Option<&str> {
    let outer = value.as_object()?;
    first_present(outer, ROLE_KEYS)
        .or_else(|| chart_object(value).and_then(|obj| first_present(obj, ROLE_KEYS)))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
}
