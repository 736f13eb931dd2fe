pub mod player;
pub mod reports;
pub mod runner;
pub mod seeds;

pub use player::PlayerKind;
pub use reports::{RunSummary, write_console_report, write_json_report};
pub use runner::{RunConfig, RunRecord, SessionRunner};
pub use seeds::{resolve_seed_inputs, split_csv};
