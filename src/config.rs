use anyhow::{ensure, Context, Result};

/// Similarity above which two same-company titles are judged the same role.
/// Product policy, not algorithmic necessity — tune with care, this decides
/// which postings users never see.
pub const TITLE_SIMILARITY_THRESHOLD: f64 = 0.85;

const THRESHOLD_ENV_VAR: &str = "JOBSIFT_TITLE_SIMILARITY_THRESHOLD";

/// Engine tuning knobs. `Default` gives the shipped policy; [`EngineConfig::from_env`]
/// lets a host override it without recompiling.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub title_similarity_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title_similarity_threshold: TITLE_SIMILARITY_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Loads the config, honoring `JOBSIFT_TITLE_SIMILARITY_THRESHOLD` when
    /// set. Errors on an unparseable or out-of-range override.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(THRESHOLD_ENV_VAR) {
            let threshold: f64 = raw
                .parse()
                .with_context(|| format!("{THRESHOLD_ENV_VAR} must be a number, got '{raw}'"))?;
            ensure!(
                (0.0..=1.0).contains(&threshold),
                "{THRESHOLD_ENV_VAR} must be within 0.0..=1.0, got {threshold}"
            );
            config.title_similarity_threshold = threshold;
        }
        Ok(config)
    }
}
