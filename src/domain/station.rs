use std::ops::RangeInclusive;

/// One of the seven hideout stations a player can upgrade.
///
/// Each station has two names: the camelCase key used in the persisted filter
/// object and the snake_case id used by `hideoutUpgrade` entries in the item
/// catalog. The pair forms a fixed bijection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Station {
    GearBench,
    ExplosivesStation,
    MedStation,
    Refiner,
    Scrappy,
    UtilityBench,
    Gunsmith,
}

impl Station {
    /// All stations in filter bar order.
    pub const ALL: [Station; 7] = [
        Station::GearBench,
        Station::ExplosivesStation,
        Station::MedStation,
        Station::Refiner,
        Station::Scrappy,
        Station::UtilityBench,
        Station::Gunsmith,
    ];

    /// Key of this station in the persisted filter object.
    pub fn filter_key(&self) -> &'static str {
        match self {
            Station::GearBench => "gearBench",
            Station::ExplosivesStation => "explosivesStation",
            Station::MedStation => "medStation",
            Station::Refiner => "refiner",
            Station::Scrappy => "scrappy",
            Station::UtilityBench => "utilityBench",
            Station::Gunsmith => "gunsmith",
        }
    }

    /// Station identifier as it appears in catalog `hideoutUpgrade` entries.
    pub fn hideout_id(&self) -> &'static str {
        match self {
            Station::GearBench => "equipment_bench",
            Station::ExplosivesStation => "explosives_bench",
            Station::MedStation => "med_station",
            Station::Refiner => "refiner",
            Station::Scrappy => "scrappy",
            Station::UtilityBench => "utility_bench",
            Station::Gunsmith => "weapon_bench",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Station::GearBench => "Gear Bench",
            Station::ExplosivesStation => "Explosives Station",
            Station::MedStation => "Med Station",
            Station::Refiner => "Refiner",
            Station::Scrappy => "Scrappy",
            Station::UtilityBench => "Utility Bench",
            Station::Gunsmith => "Gunsmith",
        }
    }

    /// Highest upgrade level the filter dropdown offers.
    pub fn max_level(&self) -> u8 {
        match self {
            Station::Scrappy => 5,
            _ => 3,
        }
    }

    pub fn levels(&self) -> RangeInclusive<u8> {
        0..=self.max_level()
    }

    pub fn from_filter_key(key: &str) -> Option<Station> {
        Self::ALL.into_iter().find(|station| station.filter_key() == key)
    }

    /// Reverse lookup from a catalog station id. Unknown ids map to `None`.
    pub fn from_hideout_id(id: &str) -> Option<Station> {
        Self::ALL.into_iter().find(|station| station.hideout_id() == id)
    }
}
