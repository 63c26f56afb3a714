use std::{collections::HashMap, path::Path};

use derive_builder::Builder;
use ic_rs_core::RegisterSize;
use tracing::{info, warn};
use ustr::{ustr, Ustr};

/// The main struct that handles user configuration of the compiler.
#[derive(Debug, Builder)]
#[builder(build_fn(error = "ic_rs_errors::IcError"))]
#[readonly::make]
pub struct Config {
    /// The number of registers available on the target. Methods needing more
    /// than this will spill, and are reported.
    #[builder(setter(strip_option), default = "None")]
    pub max_registers: Option<RegisterSize>,

    /// Treat methods that would spill as errors, rather than warnings.
    #[builder(default = "false")]
    pub deny_spills: bool,

    /// Where the log goes. Either `STDOUT`, `STDERR`, or a file path.
    #[builder(setter(into, strip_option), default = "Some(ustr(\"STDOUT\"))")]
    pub log_file: Option<Ustr>,

    #[builder(setter(strip_option), default = "None")]
    pub log_level: Option<tracing::Level>,
}

impl ConfigBuilder {
    /// Set config values from a `dotenv` file. If `env_path` is `None`, the default `.env` is used.
    pub fn load_env<P>(&mut self, env_path: Option<P>) -> &mut Self
    where
        P: AsRef<Path>,
    {
        let _ = match env_path {
            Some(p) => {
                dotenvy::from_filename(p).map_err(|e| info!(".env not loaded: {}", e.to_string()))
            }
            None => dotenvy::dotenv().map_err(|e| info!(".env not loaded: {}", e.to_string())),
        };

        let env = std::env::vars()
            .map(|(k, v)| (k.to_uppercase(), v))
            .collect::<HashMap<_, _>>();

        if let Some(x) = lookup(&env, "MAX_REGISTERS") {
            match x.parse::<RegisterSize>() {
                Ok(n) => self.max_registers = Some(Some(n)),
                Err(e) => warn!("ignoring invalid MAX_REGISTERS `{x}`: {e}"),
            }
        }

        if let Some(x) = lookup(&env, "DENY_SPILLS") {
            match x.parse::<bool>() {
                Ok(b) => self.deny_spills = Some(b),
                Err(e) => warn!("ignoring invalid DENY_SPILLS `{x}`: {e}"),
            }
        }

        if let Some(x) = lookup(&env, "LOG_FILE") {
            self.log_file = Some(Some(ustr(x)));
        }

        if let Some(x) = lookup(&env, "LOG_LEVEL") {
            match x.parse::<tracing::Level>() {
                Ok(level) => self.log_level = Some(Some(level)),
                Err(e) => warn!("ignoring invalid LOG_LEVEL `{x}`: {e}"),
            }
        }

        self
    }
}

/// Find an env value, preferring the `IC_`-prefixed key.
fn lookup<'a>(env: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    env.get(&format!("IC_{key}"))
        .or_else(|| env.get(key))
        .map(String::as_str)
}

impl Config {
    /// Would a method needing `required` registers spill on the configured target?
    #[inline]
    pub fn spills(&self, required: RegisterSize) -> bool {
        matches!(self.max_registers, Some(max) if required > max)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_registers: None,
            deny_spills: false,
            log_file: Some(ustr("STDOUT")),
            log_level: None,
        }
    }
}
