// Shared tuning constants used by the wasm frontend and the host-side tests.

// Analysis
pub const FFT_SIZE: u32 = 128; // yields 64 frequency bins
pub const ANALYSIS_SAMPLE_RATE: f32 = 30_000.0; // matches the device WAV stream

// Loop lifecycle
pub const FADE_DELAY_MS: i32 = 100; // lets in-flight motion settle before idle repaint

// Bar geometry: each bin slot is 60% bar, 40% gap across the surface width
pub const BAR_FILL_RATIO: f32 = 0.6;
pub const GAP_FILL_RATIO: f32 = 0.4;

// Palette
pub const BACKGROUND_FILL: &str = "black";
pub const GLYPH_FILL: &str = "white";
pub const LIVE_DOT_FILL: &str = "red";
pub const LIVE_FONT: &str = "16px Consolas";
pub const GRADIENT_TOP: &str = "green";
pub const GRADIENT_BOTTOM: &str = "blue";

// Device endpoints
pub const AUDIO_STREAM_PORT: u16 = 1234;
pub const AUDIO_STREAM_PATH: &str = "audio.wav";
pub const STATIONS_PATH: &str = "stations.json";
pub const SCAN_PATH: &str = "scan.json";

// Station sidebar
pub const SCAN_FAILED_RESET_MS: i32 = 2_000;
