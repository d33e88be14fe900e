//! Partitioning of the item catalog into display tiers.
//!
//! Items are claimed in priority order: hideout upgrades first, then crafting
//! materials, then recyclables. Whatever is left goes to the sell pile. Each
//! group is sorted by rarity with catalog order as the tie breaker.

#![allow(dead_code)]

use std::cmp::Ordering;

use super::{
    filters::FilterState,
    item::{Item, ItemRef},
    station::Station,
};

/// The four display groups, in claim order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TierKind {
    UpgradeHideout,
    Crafting,
    RecycleSell,
    Sell,
}

impl TierKind {
    /// Ranked tiers shown as rows; `Sell` is rendered separately.
    pub const RANKED: [TierKind; 3] = [
        TierKind::UpgradeHideout,
        TierKind::Crafting,
        TierKind::RecycleSell,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            TierKind::UpgradeHideout => "upgrade-hideout",
            TierKind::Crafting => "crafting",
            TierKind::RecycleSell => "recycle-sell",
            TierKind::Sell => "sell",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TierKind::UpgradeHideout => "Upgrade Hideout",
            TierKind::Crafting => "Crafting Item",
            TierKind::RecycleSell => "Recycle / Sell",
            TierKind::Sell => "Sell",
        }
    }

    /// Label background for ranked tiers.
    pub fn color(&self) -> Option<&'static str> {
        match self {
            TierKind::UpgradeHideout => Some("#ff7f7f"),
            TierKind::Crafting => Some("#ffbf7f"),
            TierKind::RecycleSell => Some("#ffff7f"),
            TierKind::Sell => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tier<'a> {
    pub kind: TierKind,
    pub items: Vec<&'a Item>,
    /// Catalog index of each entry in `items`. Unique across a
    /// classification, unlike item ids.
    pub positions: Vec<usize>,
}

impl<'a> Tier<'a> {
    fn sorted(kind: TierKind, mut entries: Vec<(usize, &'a Item)>) -> Self {
        sort_by_rarity(&mut entries);
        let (positions, items) = entries.into_iter().unzip();
        Self {
            kind,
            items,
            positions,
        }
    }

    /// `(catalog index, item)` pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &'a Item)> + '_ {
        self.positions
            .iter()
            .copied()
            .zip(self.items.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Result of [`classify`]: three ranked tiers plus the unassigned sell pile.
#[derive(Clone, Debug, PartialEq)]
pub struct Classification<'a> {
    pub tiers: [Tier<'a>; 3],
    pub sell: Tier<'a>,
}

impl<'a> Classification<'a> {
    /// All four groups in display order.
    pub fn groups(&self) -> impl Iterator<Item = &Tier<'a>> {
        self.tiers.iter().chain(std::iter::once(&self.sell))
    }

    pub fn tier(&self, kind: TierKind) -> &Tier<'a> {
        match kind {
            TierKind::Sell => &self.sell,
            ranked => self
                .tiers
                .iter()
                .find(|tier| tier.kind == ranked)
                .unwrap_or(&self.sell),
        }
    }

    pub fn kind_of(&self, item: &Item) -> Option<TierKind> {
        self.groups()
            .find(|tier| tier.items.iter().any(|candidate| std::ptr::eq(*candidate, item)))
            .map(|tier| tier.kind)
    }
}

/// Partitions `items` into tiers for the given station levels.
///
/// Every item lands in exactly one group. Claims are tracked by catalog
/// position, so repeated ids cannot drop or duplicate items.
pub fn classify<'a>(items: &'a [Item], filters: &FilterState) -> Classification<'a> {
    let mut upgrade = Vec::new();
    let mut crafting = Vec::new();
    let mut recycle = Vec::new();
    let mut sell = Vec::new();

    for (position, item) in items.iter().enumerate() {
        let bucket = if needs_hideout_upgrade(item, filters) {
            &mut upgrade
        } else if item.is_craftable() {
            &mut crafting
        } else if item.is_recyclable() {
            &mut recycle
        } else {
            &mut sell
        };
        bucket.push((position, item));
    }

    Classification {
        tiers: [
            Tier::sorted(TierKind::UpgradeHideout, upgrade),
            Tier::sorted(TierKind::Crafting, crafting),
            Tier::sorted(TierKind::RecycleSell, recycle),
        ],
        sell: Tier::sorted(TierKind::Sell, sell),
    }
}

/// True when some requirement targets a known station above its selected
/// level. Unknown station ids, unparsable filter values and NaN requirement
/// levels never match.
pub fn needs_hideout_upgrade(item: &Item, filters: &FilterState) -> bool {
    item.hideout_upgrade.iter().any(|requirement| {
        let Some(station) = Station::from_hideout_id(&requirement.id) else {
            return false;
        };
        filters
            .level(station)
            .is_some_and(|current| requirement.level > current as f64)
    })
}

/// Stable sort by rarity rank; equal ranks keep their input order.
pub fn sort_by_rarity(entries: &mut [(usize, &Item)]) {
    entries.sort_by_key(|(_, item)| item.rarity_rank());
}

/// Crafting outputs in tooltip order: alphabetical by name, ignoring case.
pub fn crafting_outputs(item: &Item) -> Vec<&ItemRef> {
    let mut outputs: Vec<&ItemRef> = item.crafts_into.iter().collect();
    outputs.sort_by(|a, b| compare_names(&a.name, &b.name));
    outputs
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::domain::item::HideoutRequirement;

    fn item(value: serde_json::Value) -> Item {
        serde_json::from_value(value).expect("test item should decode")
    }

    fn ids(tier: &Tier<'_>) -> Vec<String> {
        tier.items.iter().map(|item| item.id.clone()).collect()
    }

    #[test]
    fn requirement_above_filter_goes_to_upgrade_tier() {
        let items = vec![item(json!({"id": 1, "hideoutUpgrade": [{"id": "refiner", "level": 2}]}))];

        let filters = FilterState::default().with(Station::Refiner, "1");
        let result = classify(&items, &filters);
        assert_eq!(ids(result.tier(TierKind::UpgradeHideout)), vec!["1"]);

        let filters = FilterState::default().with(Station::Refiner, "2");
        let result = classify(&items, &filters);
        assert!(result.tier(TierKind::UpgradeHideout).is_empty());
        assert_eq!(ids(&result.sell), vec!["1"]);
    }

    #[test]
    fn satisfied_requirement_falls_through_to_crafting() {
        let items = vec![item(json!({
            "id": "gear",
            "hideoutUpgrade": [{"id": "weapon_bench", "level": 1}],
            "craftsInto": [{"name": "X"}]
        }))];
        let filters = FilterState::default().with(Station::Gunsmith, "3");
        let result = classify(&items, &filters);
        assert_eq!(result.kind_of(&items[0]), Some(TierKind::Crafting));
    }

    #[test]
    fn upgrade_tier_wins_over_crafting() {
        let items = vec![item(json!({
            "id": "both",
            "hideoutUpgrade": [{"id": "med_station", "level": 1}],
            "craftsInto": [{"name": "Bandage"}],
            "recyclesInto": [{"name": "Fabric"}]
        }))];
        let result = classify(&items, &FilterState::default());
        assert_eq!(result.kind_of(&items[0]), Some(TierKind::UpgradeHideout));
        assert!(result.tier(TierKind::Crafting).is_empty());
        assert!(result.tier(TierKind::RecycleSell).is_empty());
    }

    #[test]
    fn unmapped_station_never_qualifies() {
        let items = vec![item(json!({
            "id": "odd",
            "hideoutUpgrade": [{"id": "workbench", "level": 9}]
        }))];
        let result = classify(&items, &FilterState::default());
        assert_eq!(result.kind_of(&items[0]), Some(TierKind::Sell));
    }

    #[test]
    fn any_unmet_requirement_is_enough() {
        let items = vec![item(json!({
            "id": "multi",
            "hideoutUpgrade": [
                {"id": "scrappy", "level": 2},
                {"id": "utility_bench", "level": 3}
            ]
        }))];
        let filters = FilterState::default()
            .with(Station::Scrappy, "5")
            .with(Station::UtilityBench, "2");
        assert!(needs_hideout_upgrade(&items[0], &filters));

        let filters = filters.with(Station::UtilityBench, "3");
        assert!(!needs_hideout_upgrade(&items[0], &filters));
    }

    #[test]
    fn corrupted_filter_value_disables_that_station() {
        let items = vec![item(json!({
            "id": "x",
            "hideoutUpgrade": [{"id": "refiner", "level": 3}]
        }))];
        let filters = FilterState::default().with(Station::Refiner, "garbage");
        assert!(!needs_hideout_upgrade(&items[0], &filters));

        let filters = FilterState::default().with(Station::Refiner, "1 level");
        assert!(needs_hideout_upgrade(&items[0], &filters));
    }

    #[test]
    fn recyclers_and_salvagers_share_a_tier() {
        let items = vec![
            item(json!({"id": "a", "salvagesInto": [{"name": "Plastic Parts"}]})),
            item(json!({"id": "b", "recyclesInto": [{"name": "Metal Parts"}]})),
            item(json!({"id": "c", "salvagesInto": [], "recyclesInto": null})),
        ];
        let result = classify(&items, &FilterState::default());
        assert_eq!(ids(result.tier(TierKind::RecycleSell)), vec!["a", "b"]);
        assert_eq!(ids(&result.sell), vec!["c"]);
    }

    #[test]
    fn tiers_sort_by_rarity_then_catalog_order() {
        let items = vec![
            item(json!({"id": "c1", "rarity": "Common"})),
            item(json!({"id": "u", "rarity": "mystery"})),
            item(json!({"id": "l", "rarity": "Legendary"})),
            item(json!({"id": "c2", "rarity": "Common"})),
            item(json!({"id": "e", "rarity": "Epic"})),
            item(json!({"id": "n"})),
            item(json!({"id": "r", "rarity": "Rare"})),
        ];
        let result = classify(&items, &FilterState::default());
        assert_eq!(ids(&result.sell), vec!["l", "e", "r", "c1", "c2", "u", "n"]);
    }

    #[test]
    fn repeated_ids_are_still_partitioned() {
        let items = vec![
            item(json!({"id": "dup", "hideoutUpgrade": [{"id": "refiner", "level": 1}]})),
            item(json!({"id": "dup", "craftsInto": [{"name": "X"}]})),
        ];
        let result = classify(&items, &FilterState::default());
        assert_eq!(result.tier(TierKind::UpgradeHideout).len(), 1);
        assert_eq!(result.tier(TierKind::Crafting).len(), 1);
    }

    #[test]
    fn positions_tell_apart_items_sharing_an_id() {
        let items = vec![
            item(json!({"name": "A", "rarity": "Common"})),
            item(json!({"name": "B", "rarity": "Legendary"})),
            item(json!({"id": "dup", "name": "C", "rarity": "Common"})),
            item(json!({"id": "dup", "name": "D", "rarity": "Common"})),
        ];
        let result = classify(&items, &FilterState::default());
        assert_eq!(result.sell.positions, vec![1, 0, 2, 3]);
        let names: Vec<_> = result
            .sell
            .entries()
            .map(|(position, item)| (position, item.name.as_str()))
            .collect();
        assert_eq!(names, vec![(1, "B"), (0, "A"), (2, "C"), (3, "D")]);
    }

    #[test]
    fn string_and_fractional_requirement_levels_compare_numerically() {
        let items = vec![
            item(json!({"id": "s", "hideoutUpgrade": [{"id": "refiner", "level": "3"}]})),
            item(json!({"id": "f", "hideoutUpgrade": [{"id": "scrappy", "level": 2.5}]})),
            item(json!({"id": "n", "hideoutUpgrade": [{"id": "scrappy", "level": "soon"}]})),
        ];
        let filters = FilterState::default()
            .with(Station::Refiner, "1")
            .with(Station::Scrappy, "2");
        let result = classify(&items, &filters);
        assert_eq!(ids(result.tier(TierKind::UpgradeHideout)), vec!["s", "f"]);
        assert_eq!(ids(&result.sell), vec!["n"]);

        let filters = filters.with(Station::Refiner, "3").with(Station::Scrappy, "3");
        let result = classify(&items, &filters);
        assert!(result.tier(TierKind::UpgradeHideout).is_empty());
    }

    #[test]
    fn crafting_outputs_are_alphabetical() {
        let source = item(json!({
            "id": "x",
            "craftsInto": [{"name": "shotgun"}, {"name": "Anvil"}, {"name": "Bettina"}, {"name": "anvil"}]
        }));
        let names: Vec<_> = crafting_outputs(&source)
            .into_iter()
            .map(|output| output.name.as_str())
            .collect();
        assert_eq!(names, vec!["Anvil", "anvil", "Bettina", "shotgun"]);
        assert_eq!(source.crafts_into[0].name, "shotgun");
    }

    #[test]
    fn tier_metadata_matches_display() {
        assert_eq!(TierKind::UpgradeHideout.id(), "upgrade-hideout");
        assert_eq!(TierKind::Crafting.name(), "Crafting Item");
        assert_eq!(TierKind::RecycleSell.color(), Some("#ffff7f"));
        assert_eq!(TierKind::Sell.color(), None);
    }

    const RARITIES: [&str; 7] = ["Legendary", "Epic", "Rare", "Uncommon", "Common", "common", ""];
    const STATION_IDS: [&str; 8] = [
        "equipment_bench",
        "explosives_bench",
        "med_station",
        "refiner",
        "scrappy",
        "utility_bench",
        "weapon_bench",
        "workbench",
    ];

    fn arb_item() -> impl Strategy<Value = Item> {
        (
            0..RARITIES.len(),
            prop::collection::vec((0..STATION_IDS.len(), 0u8..=12), 0..3),
            0usize..3,
            0usize..2,
            0usize..2,
        )
            .prop_map(|(rarity, reqs, crafts, salvages, recycles)| Item {
                id: String::new(),
                name: String::new(),
                rarity: RARITIES[rarity].to_string(),
                value: 0.0,
                image: String::new(),
                hideout_upgrade: reqs
                    .into_iter()
                    .map(|(station, level)| HideoutRequirement {
                        id: STATION_IDS[station].to_string(),
                        level: f64::from(level) / 2.0,
                    })
                    .collect(),
                crafts_into: (0..crafts).map(|n| ItemRef::from(json!({"name": format!("c{n}")}))).collect(),
                salvages_into: (0..salvages).map(|_| ItemRef::from(json!({"name": "s"}))).collect(),
                recycles_into: (0..recycles).map(|_| ItemRef::from(json!({"name": "r"}))).collect(),
            })
    }

    fn arb_catalog() -> impl Strategy<Value = Vec<Item>> {
        prop::collection::vec(arb_item(), 0..24).prop_map(|mut items| {
            for (index, item) in items.iter_mut().enumerate() {
                item.id = format!("item-{index}");
                item.name = format!("Item {index}");
            }
            items
        })
    }

    fn arb_filters() -> impl Strategy<Value = FilterState> {
        prop::collection::vec(0u8..=5, Station::ALL.len()).prop_map(|levels| {
            Station::ALL
                .into_iter()
                .zip(levels)
                .fold(FilterState::default(), |filters, (station, level)| {
                    filters.with(station, level.to_string())
                })
        })
    }

    proptest! {
        #[test]
        fn partition_is_total_and_disjoint(items in arb_catalog(), filters in arb_filters()) {
            let result = classify(&items, &filters);
            let total: usize = result.groups().map(Tier::len).sum();
            prop_assert_eq!(total, items.len());
            let mut positions: Vec<usize> = result
                .groups()
                .flat_map(|tier| tier.positions.iter().copied())
                .collect();
            positions.sort_unstable();
            prop_assert_eq!(positions, (0..items.len()).collect::<Vec<_>>());
            for tier in result.groups() {
                for (position, item) in tier.entries() {
                    prop_assert!(std::ptr::eq(&items[position], item));
                }
            }
            for item in &items {
                let hits = result
                    .groups()
                    .flat_map(|tier| tier.items.iter())
                    .filter(|candidate| std::ptr::eq(**candidate, item))
                    .count();
                prop_assert_eq!(hits, 1);
            }
        }

        #[test]
        fn groups_are_rarity_ordered_and_stable(items in arb_catalog(), filters in arb_filters()) {
            let position = |item: &Item| items.iter().position(|c| std::ptr::eq(c, item)).unwrap();
            let result = classify(&items, &filters);
            for tier in result.groups() {
                for pair in tier.items.windows(2) {
                    let (a, b) = (pair[0], pair[1]);
                    prop_assert!(a.rarity_rank() <= b.rarity_rank());
                    if a.rarity_rank() == b.rarity_rank() {
                        prop_assert!(position(a) < position(b));
                    }
                }
            }
        }

        #[test]
        fn raising_a_level_never_adds_upgrade_items(
            items in arb_catalog(),
            filters in arb_filters(),
            station in 0..Station::ALL.len(),
            bump in 1u8..=3,
        ) {
            let station = Station::ALL[station];
            let current = filters.level(station).unwrap_or_default();
            let raised = filters.clone().with(station, (current + i64::from(bump)).to_string());

            let before = classify(&items, &filters);
            let after = classify(&items, &raised);
            for item in after.tier(TierKind::UpgradeHideout).items.iter() {
                prop_assert_eq!(before.kind_of(item), Some(TierKind::UpgradeHideout));
            }
        }
    }
}
