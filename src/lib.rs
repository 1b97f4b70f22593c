pub mod app;
pub mod charts;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod record;
pub mod report;
pub mod utils;
pub mod worker;

pub use classifier::{classify, compare, Influence, Standing};
pub use config::FetcherConfig;
pub use error::{Error, Result};
pub use fetcher::{FetchError, ScoreFetcher};
pub use record::ScoreRecord;
