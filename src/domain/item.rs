use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Rank given to rarity labels outside the known five.
pub const UNRANKED: u16 = 999;

/// Rarity labels in the catalog, best first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rarity {
    Legendary,
    Epic,
    Rare,
    Uncommon,
    Common,
}

impl Rarity {
    /// Exact, case-sensitive match against the catalog labels.
    pub fn from_label(label: &str) -> Option<Rarity> {
        match label {
            "Legendary" => Some(Rarity::Legendary),
            "Epic" => Some(Rarity::Epic),
            "Rare" => Some(Rarity::Rare),
            "Uncommon" => Some(Rarity::Uncommon),
            "Common" => Some(Rarity::Common),
            _ => None,
        }
    }

    pub fn rank(&self) -> u16 {
        match self {
            Rarity::Legendary => 0,
            Rarity::Epic => 1,
            Rarity::Rare => 2,
            Rarity::Uncommon => 3,
            Rarity::Common => 4,
        }
    }
}

/// A station level an item is needed for.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HideoutRequirement {
    /// Catalog station id, e.g. `weapon_bench`.
    pub id: String,
    /// Numeric strings and fractions are accepted. Anything that does not read
    /// as a number becomes NaN, which never compares above a filter level.
    #[serde(default = "unreadable_level", deserialize_with = "lenient_level")]
    pub level: f64,
}

/// Reference to another item produced by crafting, salvaging or recycling.
///
/// Only the name is interpreted; everything else the catalog carries is kept
/// as-is.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct ItemRef {
    pub name: String,
    pub extra: Map<String, Value>,
}

impl From<Value> for ItemRef {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => {
                let name = match fields.remove("name") {
                    Some(Value::String(name)) => name,
                    _ => String::new(),
                };
                ItemRef {
                    name,
                    extra: fields,
                }
            }
            Value::String(name) => ItemRef {
                name,
                extra: Map::new(),
            },
            _ => ItemRef {
                name: String::new(),
                extra: Map::new(),
            },
        }
    }
}

/// One catalog entry.
///
/// Decoding never fails on a single malformed field: missing or mistyped
/// fields fall back to empty values so the item simply does not qualify for
/// the tiers that depend on them.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rarity: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub value: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient_entries")]
    pub hideout_upgrade: Vec<HideoutRequirement>,
    #[serde(default, deserialize_with = "lenient_entries")]
    pub crafts_into: Vec<ItemRef>,
    #[serde(default, deserialize_with = "lenient_entries")]
    pub salvages_into: Vec<ItemRef>,
    #[serde(default, deserialize_with = "lenient_entries")]
    pub recycles_into: Vec<ItemRef>,
}

impl Item {
    pub fn rarity(&self) -> Option<Rarity> {
        Rarity::from_label(&self.rarity)
    }

    /// Sort key for tier ordering; unknown labels sort last.
    pub fn rarity_rank(&self) -> u16 {
        self.rarity().map(|r| r.rank()).unwrap_or(UNRANKED)
    }

    pub fn is_craftable(&self) -> bool {
        !self.crafts_into.is_empty()
    }

    pub fn is_recyclable(&self) -> bool {
        !self.salvages_into.is_empty() || !self.recycles_into.is_empty()
    }
}

fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(id)) => id,
        Some(Value::Number(id)) => id.to_string(),
        _ => String::new(),
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => text,
        _ => String::new(),
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(number)) => number.as_f64().unwrap_or_default(),
        _ => 0.0,
    })
}

fn unreadable_level() -> f64 {
    f64::NAN
}

/// Numeric coercion for requirement levels: numbers pass through, strings are
/// read after trimming (blank reads as 0), `null` and booleans become 0 and 1.
fn lenient_level<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::String(text) => level_from_text(&text),
        Value::Bool(flag) => f64::from(u8::from(flag)),
        Value::Null => 0.0,
        _ => f64::NAN,
    })
}

fn level_from_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ => trimmed
            .parse::<f64>()
            .ok()
            .filter(|level| level.is_finite())
            .unwrap_or(f64::NAN),
    }
}

/// Anything that is not an array decodes as empty; array entries that do not
/// fit `T` are dropped.
fn lenient_entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(entries)) => entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect(),
        _ => Vec::new(),
    })
}
