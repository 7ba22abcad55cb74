//! The `compare` command: embed, align, score, report.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::info;

use construct_sim_core::{run, Config, PipelineReport};
use construct_sim_embeddings::{embed_checked, EmbeddingProvider, StubEmbedder};

use crate::input;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Items CSV with construct,text rows
    #[arg(long)]
    pub items: PathBuf,

    /// Reference correlation CSV with construct_1,construct_2,correlation rows
    #[arg(long)]
    pub reference: PathBuf,

    /// Configuration file (TOML); defaults are used when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the embedding dimension from the configuration
    #[arg(long)]
    pub dimension: Option<usize>,

    /// Emit the report as JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

pub async fn handle(args: CompareArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load configuration")?,
    };
    if let Some(dimension) = args.dimension {
        config.embedding.dimension = dimension;
        config.validate().context("Invalid dimension override")?;
    }

    let items = input::load_items(&args.items)?;
    let triples = input::load_reference(&args.reference)?;
    info!(
        items = items.len(),
        reference_rows = triples.len(),
        "loaded input files"
    );

    let embedder = build_provider(&config)?;
    let texts: Vec<&str> = items.iter().map(|item| item.text.as_str()).collect();
    let embeddings = embed_checked(embedder.as_ref(), &texts)
        .await
        .context("Embedding failed")?;

    let labeled: Vec<(String, Vec<f32>)> = items
        .iter()
        .map(|item| item.construct.clone())
        .zip(embeddings)
        .collect();

    let report = run(&labeled, &triples, &config.pipeline).context("Pipeline failed")?;
    print_report(&report, args.json)?;

    Ok(())
}

fn build_provider(config: &Config) -> Result<Box<dyn EmbeddingProvider>> {
    match config.embedding.model.as_str() {
        "stub" => Ok(Box::new(StubEmbedder::new(
            config.embedding.dimension,
            config.embedding.max_input_length,
        ))),
        other => bail!("Unknown embedding model: {other}"),
    }
}

fn print_report(report: &PipelineReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("constructs compared: {}", report.labels.len());
    println!("off-diagonal pairs:  {}", report.pairs);
    if !report.dropped.is_empty() {
        println!("dropped labels:      {}", report.dropped.join(", "));
    }
    println!("raw correlation:      {:.4}", report.score.raw);
    println!("absolute correlation: {:.4}", report.score.absolute);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    fn fixture_files() -> (tempfile::NamedTempFile, tempfile::NamedTempFile) {
        let items = write_file(
            "construct,text\n\
             Extraversion,I am the life of the party.\n\
             Extraversion,I feel comfortable around people.\n\
             Neuroticism,I get stressed out easily.\n\
             Neuroticism,I worry about things.\n\
             Openness,I have a vivid imagination.\n",
        );
        let reference = write_file(
            "construct_1,construct_2,correlation\n\
             Extraversion,Neuroticism,-0.3\n\
             Extraversion,Openness,0.25\n\
             Neuroticism,Openness,-0.1\n",
        );
        (items, reference)
    }

    fn compare_args(
        items: &tempfile::NamedTempFile,
        reference: &tempfile::NamedTempFile,
    ) -> CompareArgs {
        CompareArgs {
            items: items.path().to_path_buf(),
            reference: reference.path().to_path_buf(),
            config: None,
            dimension: None,
            json: false,
        }
    }

    #[tokio::test]
    async fn test_compare_runs_end_to_end() {
        let (items, reference) = fixture_files();
        let args = compare_args(&items, &reference);
        handle(args).await.unwrap();
    }

    #[tokio::test]
    async fn test_compare_json_output() {
        let (items, reference) = fixture_files();
        let mut args = compare_args(&items, &reference);
        args.json = true;
        args.dimension = Some(64);
        handle(args).await.unwrap();
    }

    #[tokio::test]
    async fn test_zero_dimension_override_is_rejected() {
        let (items, reference) = fixture_files();
        let mut args = compare_args(&items, &reference);
        args.dimension = Some(0);
        assert!(handle(args).await.is_err());
    }

    #[tokio::test]
    async fn test_unknown_model_is_rejected() {
        let config = write_file(
            "[embedding]\nmodel = \"onnx\"\ndimension = 384\nmax_input_length = 512\n",
        );
        let (items, reference) = fixture_files();
        let mut args = compare_args(&items, &reference);
        args.config = Some(config.path().to_path_buf());

        let err = handle(args).await.unwrap_err();
        assert!(err.to_string().contains("onnx"));
    }

    #[tokio::test]
    async fn test_missing_reference_pair_surfaces_core_error() {
        let (items, _) = fixture_files();
        // Openness appears but the (Neuroticism, Openness) pair is missing.
        let reference = write_file(
            "construct_1,construct_2,correlation\n\
             Extraversion,Neuroticism,-0.3\n\
             Extraversion,Openness,0.25\n",
        );
        let args = compare_args(&items, &reference);

        let err = handle(args).await.unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("Neuroticism"), "chain = {chain}");
        assert!(chain.contains("Openness"), "chain = {chain}");
    }

    #[test]
    fn test_build_provider_defaults_to_stub() {
        let provider = build_provider(&Config::default()).unwrap();
        assert_eq!(provider.model_name(), "stub");
        assert_eq!(provider.dimension(), 384);
    }
}
