use crate::error::ConfigError;
use ::config::{Config, Environment, File as ConfigFile};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "jobmatch";
pub const ENV_PREFIX: &str = "JOBMATCH";

/// Everything one run needs to know. Passed explicitly into each stage.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    pub dataset: PathBuf,
    pub output_dir: PathBuf,
    /// Base name of the artifacts, without extension.
    pub output_name: String,
    pub description_column: String,
    pub location_column: String,
    pub remote_flag_column: String,
    /// Matched literally and case-insensitively against the location text.
    pub city: String,
    /// Case-insensitive regular expression used when the remote flag column is absent.
    pub remote_pattern: String,
    /// Drop rows already matched as local from the remote subset.
    pub exclusive_subsets: bool,
    pub compiler: String,
    pub compile: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from("engenheiro_de_dados_6k.csv"),
            output_dir: PathBuf::from("."),
            output_name: "relatorio_analise_query".to_string(),
            description_column: "job_description".to_string(),
            location_column: "formatted_location".to_string(),
            remote_flag_column: "work_remote_allowed".to_string(),
            city: "São Paulo".to_string(),
            remote_pattern: "Remoto|Remote".to_string(),
            exclusive_subsets: false,
            compiler: "pdflatex".to_string(),
            compile: true,
        }
    }
}

impl AnalysisConfig {
    /// Layers: defaults, then `jobmatch.toml` (or the explicit file), then `JOBMATCH_*` variables.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match explicit {
            Some(path) => ConfigFile::from(path).required(true),
            None => ConfigFile::with_name(DEFAULT_CONFIG_NAME).required(false),
        };
        let layered = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;
        let cfg: AnalysisConfig = layered.try_deserialize()?;
        tracing::debug!(?cfg, "configuration loaded");
        Ok(cfg)
    }

    pub fn tex_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.tex", self.output_name))
    }

    pub fn pdf_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.pdf", self.output_name))
    }
}
