use anyhow::Result;
use analyzer::{default_renderer, prompt_query, run};
use clap::Parser;
use jobmatch_core::AnalysisConfig;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "analyzer")]
#[command(about = "Rank local and remote job postings against an ideal-profile query and write a LaTeX report", long_about = None)]
struct Args {
    /// Configuration file (defaults to ./jobmatch.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Input CSV with the postings
    #[arg(long)]
    dataset: Option<PathBuf>,
    /// Directory for the report artifacts
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Base name of the report artifacts, without extension
    #[arg(long)]
    output_name: Option<String>,
    /// City matched against the location column
    #[arg(long)]
    city: Option<String>,
    /// Query text; prompts on stdin when omitted
    #[arg(long)]
    query: Option<String>,
    /// Keep local postings out of the remote subset
    #[arg(long, default_value_t = false)]
    exclusive: bool,
    /// Only write the LaTeX source
    #[arg(long, default_value_t = false)]
    no_compile: bool,
}

impl Args {
    fn apply(self, mut cfg: AnalysisConfig) -> (AnalysisConfig, Option<String>) {
        if let Some(v) = self.dataset { cfg.dataset = v; }
        if let Some(v) = self.output_dir { cfg.output_dir = v; }
        if let Some(v) = self.output_name { cfg.output_name = v; }
        if let Some(v) = self.city { cfg.city = v; }
        if self.exclusive { cfg.exclusive_subsets = true; }
        if self.no_compile { cfg.compile = false; }
        (cfg, self.query)
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_writer(io::stdout).init();

    let args = Args::parse();
    let cfg = AnalysisConfig::load(args.config.as_deref())?;
    let (cfg, query) = args.apply(cfg);
    tracing::info!(dataset = %cfg.dataset.display(), output = %cfg.output_dir.display(), "starting analysis");

    let renderer = default_renderer(&cfg);
    let summary = run(&cfg, &renderer, || match query {
        Some(q) => Ok(q),
        None => prompt_query(&mut io::stdin().lock(), &mut io::stdout()),
    })?;

    tracing::info!(
        local = summary.local.is_ok(),
        remote = summary.remote.is_ok(),
        pdf = summary.artifact.document.is_some(),
        "analysis complete"
    );
    Ok(())
}
