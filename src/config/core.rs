use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::metrics::AnalysisOptions;
use crate::naming::{NamingRule, LOWER_CAMEL_CASE_PATTERN};
use crate::ranking::DEFAULT_TOP_K;

/// Root configuration structure, read from `.methodmetrics.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MetricsConfig {
    /// Naming convention applied to method names
    #[serde(default)]
    pub naming: Option<NamingConfig>,

    /// Complexity ranking configuration
    #[serde(default)]
    pub ranking: Option<RankingConfig>,

    /// Driver configuration
    #[serde(default)]
    pub analysis: Option<AnalysisConfig>,

    /// Ignore patterns
    #[serde(default)]
    pub ignore: Option<IgnoreConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl MetricsConfig {
    /// Naming pattern, the lower-camel-case rule when unset.
    pub fn naming_pattern(&self) -> &str {
        self.naming
            .as_ref()
            .map(|n| n.pattern.as_str())
            .unwrap_or(LOWER_CAMEL_CASE_PATTERN)
    }

    /// Number of ranked methods per file, 3 when unset.
    pub fn top_k(&self) -> usize {
        self.ranking
            .as_ref()
            .map(|r| r.top_k)
            .unwrap_or(DEFAULT_TOP_K)
    }

    pub fn parallel(&self) -> bool {
        self.analysis.as_ref().map(|a| a.parallel).unwrap_or(true)
    }

    pub fn get_ignore_patterns(&self) -> Vec<String> {
        self.ignore
            .as_ref()
            .map(|ig| ig.patterns.clone())
            .unwrap_or_default()
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|o| o.default_format.as_deref())
    }

    pub fn use_color(&self) -> Option<bool> {
        self.output.as_ref().and_then(|o| o.use_color)
    }

    pub fn with_naming_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.naming = Some(NamingConfig {
            pattern: pattern.into(),
        });
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.ranking = Some(RankingConfig { top_k });
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.analysis = Some(AnalysisConfig { parallel });
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_k() == 0 {
            return Err(Error::Configuration(
                "ranking.top_k must be at least 1".to_string(),
            ));
        }
        NamingRule::new(self.naming_pattern()).map_err(|e| {
            Error::Configuration(format!(
                "invalid naming pattern '{}': {}",
                self.naming_pattern(),
                e
            ))
        })?;
        for pattern in self.get_ignore_patterns() {
            glob::Pattern::new(&pattern)?;
        }
        Ok(())
    }

    /// Builds the options consumed by per-file analysis.
    pub fn analysis_options(&self) -> Result<AnalysisOptions> {
        self.validate()?;
        Ok(AnalysisOptions {
            naming_rule: NamingRule::new(self.naming_pattern())?,
            top_k: self.top_k(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamingConfig {
    #[serde(default = "default_naming_pattern")]
    pub pattern: String,
}

fn default_naming_pattern() -> String {
    LOWER_CAMEL_CASE_PATTERN.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankingConfig {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisConfig {
    /// Analyze files on the rayon thread pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_parallel() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IgnoreConfig {
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    pub default_format: Option<String>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}
