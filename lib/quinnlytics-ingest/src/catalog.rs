//! Derivation of the item catalog from Data Dragon's item data.
//!
//! Only final-tier items are tracked: anything that upgrades further is a
//! component. `exceptions` re-admits items that technically upgrade further
//! but should still count (e.g. boots with an enchant path), and `excluded`
//! removes consumables, trinkets and the like regardless of upgrade status.

use crate::build::ItemCatalog;
use crate::error::Error;
use crate::raw::RawItemData;
use quinnlytics_db::{model::Item, DbHandler};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

#[derive(Debug, Clone, Deserialize)]
pub struct ItemPolicy {
    /// Items kept even though they upgrade into something else
    #[serde(default = "default_exceptions")]
    pub exceptions: HashSet<i64>,
    /// Items never kept
    #[serde(default)]
    pub excluded: HashSet<i64>,
}

// Berserker's Greaves and Mercury's Treads upgrade further but are usually final
fn default_exceptions() -> HashSet<i64> {
    HashSet::from([3006, 3010])
}

impl Default for ItemPolicy {
    fn default() -> Self {
        Self {
            exceptions: default_exceptions(),
            excluded: HashSet::new(),
        }
    }
}

impl ItemPolicy {
    pub fn keeps(&self, id: i64, upgrades_further: bool) -> bool {
        (!upgrades_further || self.exceptions.contains(&id)) && !self.excluded.contains(&id)
    }
}

/// Outcome of writing a freshly derived catalog to the database.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CatalogRefresh {
    pub inserted: usize,
    pub renamed: usize,
    pub unchanged: usize,
}

/// Items of `data` that belong in the catalog under `policy`, ordered by ID.
pub fn select_catalog_items(data: &RawItemData, policy: &ItemPolicy) -> Vec<Item> {
    let mut items: Vec<Item> = data
        .data
        .iter()
        .filter_map(|(id, item)| match id.parse::<i64>() {
            Ok(id) => Some((id, item)),
            Err(e) => {
                warn!("Skipping item with non-numeric ID {id:?}: {e}");
                None
            }
        })
        .filter(|(id, item)| policy.keeps(*id, !item.into.is_empty()))
        .map(|(id, item)| Item {
            id,
            name: item.name.clone(),
        })
        .collect();
    items.sort_by_key(|item| item.id);
    items
}

/// Write `items` to the catalog: known IDs are renamed in place, new IDs are
/// inserted together once every item has been checked.
///
/// Existing IDs are read once up front, so the pass never compares against
/// its own pending inserts.
pub async fn refresh_catalog(db: &DbHandler, items: Vec<Item>) -> Result<CatalogRefresh, Error> {
    let existing: HashMap<i64, String> = db
        .get_items()
        .await?
        .into_iter()
        .map(|item| (item.id, item.name))
        .collect();

    let mut refresh = CatalogRefresh::default();
    let mut new_items = Vec::new();
    for item in items {
        match existing.get(&item.id) {
            Some(name) if *name == item.name => refresh.unchanged += 1,
            Some(_) => {
                db.update_item_name(item.id, &item.name).await?;
                refresh.renamed += 1;
            }
            None => new_items.push(item),
        }
    }

    db.insert_items(&new_items).await?;
    refresh.inserted = new_items.len();
    debug!("Catalog refresh: {refresh:?}");
    Ok(refresh)
}

/// Load the whole catalog as a lookup table.
pub async fn load_catalog(db: &DbHandler) -> Result<ItemCatalog, Error> {
    Ok(db
        .get_items()
        .await?
        .into_iter()
        .map(|item| (item.id, item.name))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item_data() -> RawItemData {
        serde_json::from_value(json!({
            "data": {
                "1001": { "name": "Boots", "into": ["3006", "3009"] },
                "3006": { "name": "Berserker's Greaves", "into": ["3172"] },
                "3009": { "name": "Boots of Swiftness", "into": [] },
                "3157": { "name": "Zhonya's Hourglass" },
                "2003": { "name": "Health Potion" },
                "3340": { "name": "Stealth Ward", "into": ["3363"] },
            }
        }))
        .unwrap()
    }

    fn policy() -> ItemPolicy {
        ItemPolicy {
            exceptions: HashSet::from([3006, 3340]),
            excluded: HashSet::from([2003, 3340]),
        }
    }

    #[test]
    fn final_tier_items_and_exceptions_kept() {
        let ids: Vec<i64> = select_catalog_items(&item_data(), &policy())
            .into_iter()
            .map(|item| item.id)
            .collect();
        assert_eq!(ids, [3006, 3009, 3157]);
    }

    #[test]
    fn exclusion_wins_over_exception() {
        assert!(!policy().keeps(3340, true));
        assert!(!policy().keeps(2003, false));
        assert!(policy().keeps(3006, true));
        assert!(!policy().keeps(1001, true));
    }

    #[test]
    fn partial_policy_keeps_default_exceptions() {
        let policy: ItemPolicy = serde_json::from_value(json!({ "excluded": [2003] })).unwrap();
        assert_eq!(policy.exceptions, HashSet::from([3006, 3010]));
        assert!(policy.excluded.contains(&2003));

        let policy: ItemPolicy = serde_json::from_value(json!({ "exceptions": [] })).unwrap();
        assert!(policy.exceptions.is_empty());
    }

    #[test]
    fn non_numeric_ids_skipped() {
        let data: RawItemData = serde_json::from_value(json!({
            "data": { "abc": { "name": "Broken" }, "3157": { "name": "Zhonya's Hourglass" } }
        }))
        .unwrap();
        let items = select_catalog_items(&data, &ItemPolicy::default());
        assert_eq!(items, [Item { id: 3157, name: "Zhonya's Hourglass".into() }]);
    }

    #[tokio::test]
    async fn refresh_renames_and_inserts() {
        let db = DbHandler::connect("sqlite::memory:").await.unwrap();
        db.insert_items(&[
            Item { id: 3006, name: "Berserker's Greaves".into() },
            Item { id: 3009, name: "Boots of Speed".into() },
        ])
        .await
        .unwrap();

        let refresh = refresh_catalog(&db, select_catalog_items(&item_data(), &policy()))
            .await
            .unwrap();
        assert_eq!(
            refresh,
            CatalogRefresh {
                inserted: 1,
                renamed: 1,
                unchanged: 1
            }
        );

        let catalog = load_catalog(&db).await.unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog[&3009], "Boots of Swiftness");
        assert_eq!(catalog[&3157], "Zhonya's Hourglass");
    }
}
