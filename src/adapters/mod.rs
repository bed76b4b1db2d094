// Adapters layer: concrete implementations for the external systems the
// service talks to (spreadsheet values API, audio host).

pub mod audio;
pub mod sheets;

pub use audio::AudioProxy;
pub use sheets::SheetsClient;
