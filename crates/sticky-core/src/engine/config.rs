use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },
}

/// Which ends may be reassigned by the mutation operator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EndSelection {
    #[default]
    All,
    List {
        include: Vec<String>,
        exclude: Vec<String>,
    },
}

/// Parameters of the Metropolis annealing loop.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealConfig {
    pub t_hot: f64,
    pub t_cold: f64,
    pub steps: usize,
    pub report_every: usize,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReorderConfig {
    pub anneal: AnnealConfig,
    pub mutable_ends: EndSelection,
}

#[derive(Default)]
pub struct ReorderConfigBuilder {
    t_hot: Option<f64>,
    t_cold: Option<f64>,
    steps: Option<usize>,
    report_every: Option<usize>,
    seed: Option<u64>,
    mutable_ends: Option<EndSelection>,
}

impl ReorderConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn t_hot(mut self, t: f64) -> Self {
        self.t_hot = Some(t);
        self
    }
    pub fn t_cold(mut self, t: f64) -> Self {
        self.t_cold = Some(t);
        self
    }
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = Some(steps);
        self
    }
    pub fn report_every(mut self, interval: usize) -> Self {
        self.report_every = Some(interval);
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn mutable_ends(mut self, selection: EndSelection) -> Self {
        self.mutable_ends = Some(selection);
        self
    }

    pub fn build(self) -> Result<ReorderConfig, ConfigError> {
        let t_hot = self.t_hot.ok_or(ConfigError::MissingParameter("t_hot"))?;
        let t_cold = self.t_cold.ok_or(ConfigError::MissingParameter("t_cold"))?;
        let steps = self.steps.ok_or(ConfigError::MissingParameter("steps"))?;

        if !(t_hot > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "t_hot",
                reason: format!("must be positive, got {t_hot}"),
            });
        }
        if !(t_cold > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "t_cold",
                reason: format!("must be positive, got {t_cold}"),
            });
        }
        if t_cold > t_hot {
            return Err(ConfigError::InvalidParameter {
                name: "t_cold",
                reason: format!("must not exceed t_hot ({t_cold} > {t_hot})"),
            });
        }
        if steps == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "steps",
                reason: "must be at least 1".to_string(),
            });
        }

        if self.report_every == Some(0) {
            return Err(ConfigError::InvalidParameter {
                name: "report_every",
                reason: "must be at least 1".to_string(),
            });
        }
        let report_every = self.report_every.unwrap_or_else(|| (steps / 100).max(1));

        Ok(ReorderConfig {
            anneal: AnnealConfig {
                t_hot,
                t_cold,
                steps,
                report_every,
                seed: self.seed,
            },
            mutable_ends: self.mutable_ends.unwrap_or_default(),
        })
    }
}
