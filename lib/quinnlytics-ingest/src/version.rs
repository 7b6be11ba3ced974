use crate::catalog::{refresh_catalog, select_catalog_items, CatalogRefresh, ItemPolicy};
use crate::error::Error;
use crate::raw::RuneTable;
use crate::source::ReferenceSource;
use quinnlytics_db::DbHandler;
use tracing::{debug, error, info};

/// Reference data a run ingests and reports against.
#[derive(Debug, Default)]
pub struct ReferenceData {
    /// Full game version: the provider's current one, or the one last stored
    /// when the provider cannot be reached
    pub version: Option<String>,
    pub runes: RuneTable,
}

/// Whether the item catalog must be rebuilt. Compares full version strings,
/// so a new build of the same patch also triggers a refresh.
pub fn should_refresh(current_version: &str, stored_version: Option<&str>) -> bool {
    stored_version != Some(current_version)
}

/// Rebuild the item catalog if `current_version` differs from the version it
/// was last built for. Returns `None` when no refresh was needed.
///
/// The stored version is only written once the catalog has been refreshed,
/// so a failed refresh is retried on the next run.
#[tracing::instrument(skip(db, source, policy))]
pub async fn refresh_items_if_version_changed<R: ReferenceSource>(
    db: &DbHandler,
    source: &R,
    current_version: &str,
    policy: &ItemPolicy,
) -> Result<Option<CatalogRefresh>, Error> {
    let stored = db.get_game_version().await?;
    let stored_version = stored.as_ref().map(|v| v.version.as_str());
    if !should_refresh(current_version, stored_version) {
        debug!("Item catalog is up to date for {current_version}");
        return Ok(None);
    }

    info!("Refreshing item catalog: {stored_version:?} -> {current_version}");
    let data = source.items(current_version).await?;
    let refresh = refresh_catalog(db, select_catalog_items(&data, policy)).await?;

    match stored {
        None => db.insert_game_version(current_version).await?,
        Some(_) => db.update_game_version(current_version).await?,
    }
    Ok(Some(refresh))
}

/// Fetch the current game version, refresh the item catalog if it changed and
/// load the rune table.
///
/// Provider failures are logged and leave gaps in the result instead of
/// failing it: ingestion still runs, with stored item names and numeric rune
/// fallbacks. Only reading the stored version can fail.
pub async fn prepare_reference_data<R: ReferenceSource>(
    db: &DbHandler,
    source: &R,
    policy: &ItemPolicy,
) -> Result<ReferenceData, Error> {
    let current_version = match source.current_version().await {
        Ok(version) => Some(version),
        Err(e) => {
            error!("Failed to fetch current game version: {e}");
            None
        }
    };

    let version = match current_version {
        Some(version) => {
            if let Err(e) = refresh_items_if_version_changed(db, source, &version, policy).await {
                error!("Failed to refresh item catalog: {e}");
            }
            Some(version)
        }
        None => db.get_game_version().await?.map(|stored| stored.version),
    };

    let runes = match &version {
        Some(version) => source.runes(version).await.unwrap_or_else(|e| {
            error!("Failed to fetch runes for {version}: {e}");
            RuneTable::new()
        }),
        None => RuneTable::new(),
    };

    Ok(ReferenceData { version, runes })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_when_nothing_stored() {
        assert!(should_refresh("14.14.1", None));
    }

    #[test]
    fn refresh_on_any_difference() {
        assert!(should_refresh("14.14.1", Some("14.13.1")));
        assert!(should_refresh("14.14.2", Some("14.14.1")));
    }

    #[test]
    fn no_refresh_on_same_version() {
        assert!(!should_refresh("14.14.1", Some("14.14.1")));
    }
}
