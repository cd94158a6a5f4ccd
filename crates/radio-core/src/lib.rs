pub mod constants;
pub mod error;
pub mod layout;
pub mod lifecycle;
pub mod stations;

pub use constants::*;
pub use error::RadioError;
pub use layout::*;
pub use lifecycle::{Generation, RenderLoop};
pub use stations::{audio_stream_url, parse_directory, ScanStatus, Station};
