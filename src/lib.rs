pub mod analysis;
pub mod app;
pub mod auth;
pub mod client;
pub mod config;
pub mod display;
pub mod errors;
pub mod handlers;
pub mod history;
pub mod models;
pub mod recommend;
pub mod render;
pub mod state;
pub mod ui;

pub use analysis::{AnalysisOrchestrator, ConfidencePolicy};
pub use app::router;
pub use config::Config;
pub use errors::MoodError;
pub use history::{Confirmation, HistoryStore};
pub use recommend::recommend;
pub use state::{AppState, SessionState};
