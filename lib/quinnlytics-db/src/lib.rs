use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, QueryBuilder, Sqlite};
use std::str::FromStr;
use tracing::debug;

pub mod error;
pub mod model;
pub mod role;

pub use error::Error;
pub use role::Role;
// Re-export so that clients can avoid having sqlx as a dependency
pub use sqlx::types::Json;

/// Singleton row id of the [`model::GameVersion`] record.
const GAME_VERSION_ID: i64 = 1;

/// Wrapper around common database operations — by using this wrapper, clients
/// of [`DbHandler`] can remain database agnostic.
#[derive(Debug)]
pub struct DbHandler {
    pool: Pool<Sqlite>,
}

impl DbHandler {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `url` and bring its schema
    /// up to date.
    ///
    /// The pool holds a single connection: ingestion is the only writer, and
    /// `sqlite::memory:` databases only live as long as their connection.
    pub async fn connect(url: &str) -> Result<Self, Error> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        debug!("Database ready at {url}");
        Ok(Self::new(pool))
    }

    /// Check whether a match has already been stored.
    pub async fn match_exists(&self, match_id: &str) -> Result<bool, Error> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM matches WHERE match_id = ?")
            .bind(match_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }

    /// Queue of a match previously skipped for being outside the tracked
    /// queues.
    pub async fn get_skipped_queue(&self, match_id: &str) -> Result<Option<i64>, Error> {
        let queue_id = sqlx::query_scalar("SELECT queue_id FROM skipped_match WHERE match_id = ?")
            .bind(match_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(queue_id)
    }

    /// Remember a match that will never be stored. Recording it twice is a
    /// no-op.
    pub async fn insert_skipped_match(&self, match_id: &str, queue_id: i64) -> Result<(), Error> {
        sqlx::query(
            "INSERT INTO skipped_match (match_id, queue_id) VALUES (?, ?)
            ON CONFLICT (match_id) DO NOTHING",
        )
        .bind(match_id)
        .bind(queue_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Insert match data. Returns `false` if a match with the same ID was
    /// already present, in which case nothing is written.
    pub async fn insert_match(&self, data: &model::Match) -> Result<bool, Error> {
        let result = sqlx::query(
            "INSERT INTO matches (match_id, match_date, role, win, champion, opponent_champion,
                game_version, game_duration, kills, deaths, assists, total_minions_killed,
                minions_per_minute, summoner_spells, rune_details, q_casts, w_casts, e_casts,
                r_casts, all_in_pings, assist_me_pings, command_pings, enemy_missing_pings,
                enemy_vision_pings, get_back_pings, need_vision_pings, on_my_way_pings,
                push_pings, gold_earned, gold_spent, build)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT (match_id) DO NOTHING",
        )
        .bind(&data.match_id)
        .bind(data.match_date)
        .bind(&data.role)
        .bind(data.win)
        .bind(&data.champion)
        .bind(&data.opponent_champion)
        .bind(&data.game_version)
        .bind(data.game_duration)
        .bind(data.kills)
        .bind(data.deaths)
        .bind(data.assists)
        .bind(data.total_minions_killed)
        .bind(data.minions_per_minute)
        .bind(&data.summoner_spells)
        .bind(&data.rune_details)
        .bind(data.q_casts)
        .bind(data.w_casts)
        .bind(data.e_casts)
        .bind(data.r_casts)
        .bind(data.all_in_pings)
        .bind(data.assist_me_pings)
        .bind(data.command_pings)
        .bind(data.enemy_missing_pings)
        .bind(data.enemy_vision_pings)
        .bind(data.get_back_pings)
        .bind(data.need_vision_pings)
        .bind(data.on_my_way_pings)
        .bind(data.push_pings)
        .bind(data.gold_earned)
        .bind(data.gold_spent)
        .bind(&data.build)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    /// Get all matches played on `version`, in the order they were stored.
    ///
    /// `version` matches whole dotted components only, so `"14.1"` selects
    /// `14.1` but not `14.14`, and `"14"` selects every `14.x`.
    pub async fn get_matches_by_version(&self, version: &str) -> Result<Vec<model::Match>, Error> {
        let matches = sqlx::query_as::<_, model::Match>(
            "SELECT * FROM matches WHERE game_version = ? OR game_version LIKE ? ORDER BY rowid",
        )
        .bind(version)
        .bind(format!("{version}.%"))
        .fetch_all(&self.pool)
        .await?;
        Ok(matches)
    }

    /// Get every item in the catalog.
    pub async fn get_items(&self) -> Result<Vec<model::Item>, Error> {
        let items = sqlx::query_as::<_, model::Item>("SELECT * FROM items ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    pub async fn get_item(&self, id: i64) -> Result<Option<model::Item>, Error> {
        let item = sqlx::query_as::<_, model::Item>("SELECT * FROM items WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(item)
    }

    /// Rename an existing catalog item.
    pub async fn update_item_name(&self, id: i64, name: &str) -> Result<(), Error> {
        let result = sqlx::query("UPDATE items SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::MissingData(format!("item {id}")));
        }
        Ok(())
    }

    /// Insert new catalog items in a single transaction.
    pub async fn insert_items(&self, items: &[model::Item]) -> Result<(), Error> {
        if items.is_empty() {
            return Ok(());
        }

        let mut query = QueryBuilder::<Sqlite>::new("INSERT INTO items (id, name) ");
        query.push_values(items, |mut row, item| {
            row.push_bind(item.id).push_bind(&item.name);
        });

        let mut tx = self.pool.begin().await?;
        query.build().execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Get the game version the item catalog was last refreshed for.
    pub async fn get_game_version(&self) -> Result<Option<model::GameVersion>, Error> {
        let version = sqlx::query_as::<_, model::GameVersion>(
            "SELECT * FROM game_version WHERE id = ?",
        )
        .bind(GAME_VERSION_ID)
        .fetch_optional(&self.pool)
        .await?;
        Ok(version)
    }

    /// Create the game version record. Fails if it already exists.
    pub async fn insert_game_version(&self, version: &str) -> Result<(), Error> {
        sqlx::query("INSERT INTO game_version (id, version) VALUES (?, ?)")
            .bind(GAME_VERSION_ID)
            .bind(version)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Overwrite the game version record in place.
    pub async fn update_game_version(&self, version: &str) -> Result<(), Error> {
        let result = sqlx::query("UPDATE game_version SET version = ? WHERE id = ?")
            .bind(version)
            .bind(GAME_VERSION_ID)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::MissingData("game version".into()));
        }
        Ok(())
    }
}
