use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("player {puuid} not found in match {match_id}")]
    NotFound { match_id: String, puuid: String },
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),
    #[error("data anomaly in match {match_id}: {anomaly}")]
    DataAnomaly { match_id: String, anomaly: Anomaly },
    #[error(transparent)]
    Db(#[from] quinnlytics_db::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Anomaly {
    #[error("game duration is zero")]
    ZeroDuration,
    #[error("unknown team position {0:?}")]
    UnknownPosition(String),
}
