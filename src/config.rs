use crate::*;
use confique::Config as _;
use std::sync::OnceLock;

/// Hard ceiling on the number of completions returned by one call.
pub const MAX_RESULTS: usize = 50;

#[derive(Debug, Clone, confique::Config)]
pub struct Config {
    /// Cap on ranked results. Values above [`MAX_RESULTS`] are clamped.
    #[config(env = "SQLCOMPLETE_MAX_RESULTS", default = 50)]
    pub max_results: usize,
    #[config(env = "SQLCOMPLETE_INCLUDE_KEYWORDS", default = true)]
    pub include_keywords: bool,
    #[config(env = "SQLCOMPLETE_INCLUDE_FUNCTIONS", default = true)]
    pub include_functions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_results: MAX_RESULTS,
            include_keywords: true,
            include_functions: true,
        }
    }
}

impl Config {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self> {
        Ok(Config::builder().env().load()?)
    }

    /// The effective result cap, never above [`MAX_RESULTS`].
    pub fn result_cap(&self) -> usize {
        self.max_results.min(MAX_RESULTS)
    }
}

pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        Config::from_env().unwrap_or_else(|e| {
            warn!("Falling back to default completion config: {e}");
            Config::default()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cap_is_the_hard_limit() {
        assert_eq!(Config::default().result_cap(), MAX_RESULTS);
    }

    #[test]
    fn oversized_cap_is_clamped() {
        let cfg = Config {
            max_results: 500,
            ..Config::default()
        };
        assert_eq!(cfg.result_cap(), MAX_RESULTS);
    }

    #[test]
    fn smaller_cap_is_kept() {
        let cfg = Config {
            max_results: 5,
            ..Config::default()
        };
        assert_eq!(cfg.result_cap(), 5);
    }
}
