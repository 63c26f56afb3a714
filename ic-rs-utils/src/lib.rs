#![forbid(unsafe_code)]

use fs_err as fs;
use ic_rs_errors::{IcError, Result};
use if_chain::if_chain;

use crate::config::Config;

pub mod config;

/// Install a global `tracing` subscriber, as described by the `log_level` and
/// `log_file` settings of the passed [`Config`]. Nothing is installed if
/// either one is missing.
pub fn init_tracing_subscriber(config: &Config) -> Result<()> {
    if_chain! {
        if let Some(level) = config.log_level;
        if let Some(file) = &config.log_file;
        then {
            let result = match file.as_str() {
                "STDOUT" => tracing::subscriber::set_global_default(
                    tracing_subscriber::fmt()
                        .with_max_level(level)
                        .with_writer(std::io::stdout)
                        .finish(),
                ),
                "STDERR" => tracing::subscriber::set_global_default(
                    tracing_subscriber::fmt()
                        .with_max_level(level)
                        .with_writer(std::io::stderr)
                        .finish(),
                ),
                s => {
                    let log = fs::File::create(s).map_err(IcError::from)?;

                    tracing::subscriber::set_global_default(
                        tracing_subscriber::fmt()
                            .with_max_level(level)
                            .with_ansi(false)
                            .with_writer(std::sync::Mutex::new(log))
                            .finish(),
                    )
                }
            };

            result.map_err(|e| {
                Box::new(IcError::new(format!("setting tracing default failed: {e}")))
            })?;
        }
    }

    Ok(())
}
