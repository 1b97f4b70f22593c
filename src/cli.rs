use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::{
    config::{AppConfig, FetcherConfig, DEFAULT_ENDPOINT, DEFAULT_LOGO, DEFAULT_TIMEOUT_SECS},
    error::Result,
};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Yaps score endpoint, queried as `<endpoint>?username=<name>`
    #[clap(long, env = "YAPS_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[clap(long, env = "YAPS_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Immediate re-attempts after a connection failure
    #[clap(long, env = "YAPS_RETRIES", default_value_t = 0)]
    pub retries: u32,

    #[clap(long, env = "YAPS_LOGO", default_value = DEFAULT_LOGO)]
    pub logo: PathBuf,
}

impl Args {
    pub fn into_config(self) -> Result<AppConfig> {
        let fetcher = FetcherConfig::new(
            self.endpoint,
            Duration::from_secs(self.timeout_secs),
            self.retries,
        )?;

        Ok(AppConfig {
            fetcher,
            logo: self.logo,
        })
    }
}

pub fn get_args() -> Args {
    Args::parse()
}
