//! Station directory types shared with the sidebar UI.

use serde::Deserialize;

use crate::constants::{AUDIO_STREAM_PATH, AUDIO_STREAM_PORT};
use crate::error::RadioError;

/// One discoverable station: display name plus its PATCH tune endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Station {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct StationDirectory {
    stations: Vec<Station>,
}

/// Parse the JSON body returned by the device's `stations.json` / `scan.json`
/// endpoints.
pub fn parse_directory(body: &str) -> Result<Vec<Station>, RadioError> {
    let dir: StationDirectory = serde_json::from_str(body)?;
    Ok(dir.stations)
}

/// Sidebar scan-button state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanStatus {
    Idle,
    Scanning,
    Failed,
}

impl ScanStatus {
    pub fn label(self) -> &'static str {
        match self {
            ScanStatus::Idle => "Scan",
            ScanStatus::Scanning => "Scanning...",
            ScanStatus::Failed => "Scan failed!",
        }
    }

    /// Inline style applied to the scan button for this state.
    pub fn style(self) -> &'static str {
        match self {
            ScanStatus::Idle => "background-color: gray; border-radius: 10px;",
            ScanStatus::Scanning => "background-color: green; border-radius: 10px;",
            ScanStatus::Failed => "background-color: red; border-radius: 10px;",
        }
    }
}

/// Endpoint of the device's live audio stream, served on a dedicated port
/// next to the page origin.
pub fn audio_stream_url(protocol: &str, hostname: &str) -> String {
    format!("{protocol}//{hostname}:{AUDIO_STREAM_PORT}/{AUDIO_STREAM_PATH}")
}
