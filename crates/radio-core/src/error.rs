use thiserror::Error;

#[derive(Error, Debug)]
pub enum RadioError {
    #[error("station directory parse error: {0}")]
    StationParse(#[from] serde_json::Error),
}
