use crate::build::ItemCatalog;
use crate::error::Error;
use crate::normalize::MatchNormalizer;
use crate::raw::RuneTable;
use crate::source::MatchSource;
use crate::QUEUE_IDS;
use quinnlytics_db::DbHandler;
use tracing::{debug, error, info, warn};

/// What happened to a single match ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    Inserted,
    AlreadyStored,
    /// Not a tracked queue; inner value is the queue ID
    OtherQueue(u16),
}

/// Tally of a batch of match IDs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestSummary {
    pub inserted: usize,
    pub already_stored: usize,
    pub other_queue: usize,
    pub failed: usize,
}

/// Stores matches of one tracked player, skipping those already stored.
///
/// Matches are processed one at a time so two inserts never race for the
/// same ID.
#[derive(Debug)]
pub struct Ingestor<'a, S: MatchSource> {
    db: &'a DbHandler,
    source: &'a S,
    puuid: String,
    normalizer: MatchNormalizer<'a>,
}

impl<'a, S: MatchSource> Ingestor<'a, S> {
    pub fn new(
        db: &'a DbHandler,
        source: &'a S,
        puuid: impl Into<String>,
        runes: &'a RuneTable,
        catalog: &'a ItemCatalog,
    ) -> Self {
        Self {
            db,
            source,
            puuid: puuid.into(),
            normalizer: MatchNormalizer::new(runes, catalog),
        }
    }

    /// Fetch, normalize and store a single match. Does nothing if the match
    /// is already stored or was already skipped.
    ///
    /// The timeline is only requested for matches of a tracked queue.
    pub async fn ingest(&self, match_id: &str) -> Result<IngestOutcome, Error> {
        if self.db.match_exists(match_id).await? {
            debug!("Match {match_id} already in database");
            return Ok(IngestOutcome::AlreadyStored);
        }
        if let Some(queue_id) = self.db.get_skipped_queue(match_id).await? {
            debug!("Match {match_id} already skipped (queue {queue_id})");
            return Ok(IngestOutcome::OtherQueue(queue_id as u16));
        }

        let raw = self.source.get_match(match_id).await?.ok_or_else(|| {
            Error::UpstreamUnavailable(format!("match {match_id} not available"))
        })?;
        let queue_id = raw.info.queue_id;
        if !QUEUE_IDS.contains(&queue_id) {
            debug!("Match {match_id} is in untracked queue {queue_id}");
            self.db
                .insert_skipped_match(match_id, i64::from(queue_id))
                .await?;
            return Ok(IngestOutcome::OtherQueue(queue_id));
        }

        let timeline = self.source.get_timeline(match_id).await?;
        if timeline.is_none() {
            warn!("No timeline for match {match_id}, storing it without a build");
        }

        let data = self
            .normalizer
            .normalize(&raw, timeline.as_ref(), &self.puuid)?;
        if self.db.insert_match(&data).await? {
            Ok(IngestOutcome::Inserted)
        } else {
            Ok(IngestOutcome::AlreadyStored)
        }
    }

    /// Ingest every match ID in order. A failure only abandons its own match.
    #[tracing::instrument(skip_all, fields(count = match_ids.len()))]
    pub async fn ingest_all(&self, match_ids: &[String]) -> IngestSummary {
        let mut summary = IngestSummary::default();
        for match_id in match_ids {
            match self.ingest(match_id).await {
                Ok(IngestOutcome::Inserted) => {
                    debug!("Inserted match {match_id}");
                    summary.inserted += 1;
                }
                Ok(IngestOutcome::AlreadyStored) => summary.already_stored += 1,
                Ok(IngestOutcome::OtherQueue(_)) => summary.other_queue += 1,
                Err(e) => {
                    error!("Failed to ingest match {match_id}: {e}");
                    summary.failed += 1;
                }
            }
        }
        info!("Ingestion finished: {summary:?}");
        summary
    }
}
