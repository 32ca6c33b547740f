use crate::cli::ReorderArgs;
use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use stickyreorder::engine::config::{EndSelection, ReorderConfig, ReorderConfigBuilder};
use tracing::debug;

const DEFAULT_T_HOT: f64 = 0.1;
const DEFAULT_T_COLD: f64 = 1e-7;
const DEFAULT_STEPS: usize = 50_000;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub anneal: FileAnnealConfig,
    #[serde(default)]
    pub mutable: Option<FileMutableConfig>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileAnnealConfig {
    #[serde(rename = "t-hot")]
    pub t_hot: Option<f64>,
    #[serde(rename = "t-cold")]
    pub t_cold: Option<f64>,
    pub steps: Option<usize>,
    #[serde(rename = "report-every")]
    pub report_every: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileMutableConfig {
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FileConfig = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        debug!("Loaded configuration file: {:?}", config);
        Ok(config)
    }

    /// CLI flags win over file values; hard-coded defaults fill the rest.
    pub fn merge_with_cli(self, args: &ReorderArgs) -> Result<ReorderConfig> {
        let mut builder = ReorderConfigBuilder::new()
            .t_hot(args.t_hot.or(self.anneal.t_hot).unwrap_or(DEFAULT_T_HOT))
            .t_cold(
                args.t_cold
                    .or(self.anneal.t_cold)
                    .unwrap_or(DEFAULT_T_COLD),
            )
            .steps(args.steps.or(self.anneal.steps).unwrap_or(DEFAULT_STEPS));

        if let Some(interval) = self.anneal.report_every {
            builder = builder.report_every(interval);
        }
        if let Some(seed) = args.seed.or(self.anneal.seed) {
            builder = builder.seed(seed);
        }
        if let Some(mutable) = self.mutable {
            builder = builder.mutable_ends(EndSelection::List {
                include: mutable.include,
                exclude: mutable.exclude,
            });
        }

        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args() -> ReorderArgs {
        ReorderArgs {
            input: "in.json".into(),
            output: "out.json".into(),
            config: None,
            steps: None,
            t_hot: None,
            t_cold: None,
            seed: None,
        }
    }

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let config = FileConfig::default().merge_with_cli(&args()).unwrap();
        assert_eq!(config.anneal.steps, DEFAULT_STEPS);
        assert_eq!(config.anneal.t_hot, DEFAULT_T_HOT);
        assert_eq!(config.mutable_ends, EndSelection::All);
    }

    #[test]
    fn cli_flags_override_file_values() {
        let file = FileConfig {
            anneal: FileAnnealConfig {
                steps: Some(1_000),
                seed: Some(3),
                ..Default::default()
            },
            mutable: None,
        };
        let mut a = args();
        a.steps = Some(9_999);
        let config = file.merge_with_cli(&a).unwrap();
        assert_eq!(config.anneal.steps, 9_999);
        assert_eq!(config.anneal.seed, Some(3));
    }

    #[test]
    fn toml_file_parses_with_kebab_case_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        write!(
            f,
            r#"
[anneal]
t-hot = 0.2
t-cold = 1e-6
steps = 2000
seed = 11

[mutable]
exclude = ["origin"]
"#
        )
        .unwrap();

        let file = FileConfig::from_file(&path).unwrap();
        let config = file.merge_with_cli(&args()).unwrap();
        assert_eq!(config.anneal.t_hot, 0.2);
        assert_eq!(config.anneal.steps, 2000);
        assert_eq!(config.anneal.seed, Some(11));
        assert_eq!(
            config.mutable_ends,
            EndSelection::List {
                include: vec![],
                exclude: vec!["origin".to_string()],
            }
        );
    }

    #[test]
    fn zero_report_interval_in_the_file_is_a_config_error() {
        let file = FileConfig {
            anneal: FileAnnealConfig {
                report_every: Some(0),
                ..Default::default()
            },
            mutable: None,
        };
        let result = file.merge_with_cli(&args());
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn unknown_keys_in_the_file_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[anneal]\nbogus = 1\n").unwrap();
        let result = FileConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }
}
