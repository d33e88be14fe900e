#![allow(dead_code)]

use std::collections::BTreeMap;

use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use super::station::Station;

const DEFAULT_LEVEL: &str = "0";

/// Per-station filter levels picked in the filter bar.
///
/// Levels are kept as the strings the dropdowns produce and are persisted
/// verbatim. Every station always has a value.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct FilterState {
    levels: BTreeMap<Station, String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            levels: Station::ALL
                .into_iter()
                .map(|station| (station, DEFAULT_LEVEL.to_string()))
                .collect(),
        }
    }
}

impl FilterState {
    /// Raw selected value for a station.
    pub fn raw(&self, station: Station) -> &str {
        self.levels
            .get(&station)
            .map(String::as_str)
            .unwrap_or(DEFAULT_LEVEL)
    }

    /// Numeric level for a station, or `None` when the stored value does not
    /// start with a number.
    pub fn level(&self, station: Station) -> Option<i64> {
        parse_level(self.raw(station))
    }

    pub fn set(&mut self, station: Station, value: impl Into<String>) {
        self.levels.insert(station, value.into());
    }

    pub fn with(mut self, station: Station, value: impl Into<String>) -> Self {
        self.set(station, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Station, &str)> {
        Station::ALL
            .into_iter()
            .map(move |station| (station, self.raw(station)))
    }

    /// Stations whose stored value is not a number.
    pub fn unparsable(&self) -> Vec<Station> {
        self.iter()
            .filter(|(_, raw)| parse_level(raw).is_none())
            .map(|(station, _)| station)
            .collect()
    }
}

impl From<Map<String, Value>> for FilterState {
    fn from(map: Map<String, Value>) -> Self {
        let mut state = FilterState::default();
        for (key, value) in map {
            let Some(station) = Station::from_filter_key(&key) else {
                continue;
            };
            let raw = match value {
                Value::String(text) => text,
                Value::Number(number) => number.to_string(),
                other => other.to_string(),
            };
            state.set(station, raw);
        }
        state
    }
}

impl Serialize for FilterState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Station::ALL.len()))?;
        for (station, raw) in self.iter() {
            map.serialize_entry(station.filter_key(), raw)?;
        }
        map.end()
    }
}

/// Parses a level the way the dropdown values have always been read: skip
/// leading whitespace, accept an optional sign, then take the longest run of
/// leading decimal digits. Trailing text is ignored.
pub fn parse_level(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = rest
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let magnitude = rest[..end].parse::<i64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
