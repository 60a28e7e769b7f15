//! `textrank-compress` command-line interface
//!
//! ```text
//! textrank-compress <INPUT> <OUTPUT> <PERCENTAGE> [--format-prompts] [--json] ...
//! ```

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use textrank_compress::io::{
    load_config, read_document, render_formatted_summary, render_summary, write_output,
};
use textrank_compress::pipeline::LoggingObserver;
use textrank_compress::{
    PromptFormatter, Result, StopwordSource, Summarizer, Summary, SummaryLength, TextRankConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "textrank-compress",
    version,
    about = "Text summarization using the TextRank algorithm",
    allow_negative_numbers = true
)]
struct Cli {
    /// Path to the input text file
    input: PathBuf,

    /// Path to the output summary file (`-` for stdout)
    output: PathBuf,

    /// Percentage of sentences to include in the summary, in (0, 100]
    #[arg(value_parser = parse_percentage)]
    percentage: f64,

    /// Rewrite each selected sentence as an imperative prompt
    #[arg(long)]
    format_prompts: bool,

    /// Seed for prompt formatting randomness
    #[arg(long, requires = "format_prompts")]
    seed: Option<u64>,

    /// JSON file with ranking configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Damping factor, overrides the configuration file
    #[arg(long)]
    damping: Option<f64>,

    /// Iteration cap, overrides the configuration file
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Convergence threshold (0 disables early exit), overrides the configuration file
    #[arg(long)]
    threshold: Option<f64>,

    /// Stopword list: `default`, `none`, or a language code such as `en` or `de`
    #[arg(long)]
    stopwords: Option<String>,

    /// Write the summary and ranking diagnostics as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    summary: &'a Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    prompts: Option<&'a [String]>,
}

fn parse_percentage(value: &str) -> std::result::Result<f64, String> {
    let percentage: f64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if !percentage.is_finite() || percentage <= 0.0 || percentage > 100.0 {
        return Err("summary percentage must be greater than 0 and at most 100".to_string());
    }
    Ok(percentage)
}

fn parse_stopwords(value: &str) -> StopwordSource {
    match value {
        "default" => StopwordSource::Default,
        "none" => StopwordSource::None,
        language => StopwordSource::Language(language.to_string()),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("textrank_compress={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn build_config(cli: &Cli) -> Result<TextRankConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => TextRankConfig::default(),
    };

    if let Some(damping) = cli.damping {
        config.damping = damping;
    }
    if let Some(max_iterations) = cli.max_iterations {
        config.max_iterations = max_iterations;
    }
    if let Some(threshold) = cli.threshold {
        config.convergence_threshold = threshold;
    }
    if let Some(stopwords) = &cli.stopwords {
        config.stopwords = parse_stopwords(stopwords);
    }

    Ok(config)
}

fn run(cli: &Cli) -> Result<()> {
    let config = build_config(cli)?;
    let summarizer = Summarizer::from_config(&config)?;

    let text = read_document(&cli.input)?;
    tracing::debug!(input = %cli.input.display(), bytes = text.len(), "document loaded");

    let summary = summarizer.run(
        &text,
        SummaryLength::Percentage(cli.percentage),
        &mut LoggingObserver,
    )?;

    let prompts = cli.format_prompts.then(|| {
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        PromptFormatter::new().format_all(&summary.texts(), &mut rng)
    });

    let contents = if cli.json {
        let report = JsonReport {
            summary: &summary,
            prompts: prompts.as_deref(),
        };
        format!("{}\n", serde_json::to_string_pretty(&report)?)
    } else {
        match &prompts {
            Some(prompts) => render_formatted_summary(prompts),
            None => render_summary(&summary.texts()),
        }
    };

    let destination = (cli.output != Path::new("-")).then_some(cli.output.as_path());
    write_output(destination, &contents)?;

    tracing::info!(
        "Summary written to {}",
        destination.map_or("stdout".into(), |p| p.display().to_string())
    );
    tracing::info!(
        total = summary.total_sentences,
        iterations = summary.rank.iterations,
        converged = summary.rank.converged(),
        "Total sentences in summary: {}",
        summary.len()
    );

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;
    use tempfile::{tempdir, TempDir};
    use textrank_compress::TextRankError;

    const PETS: &str =
        "Cats are small. Dogs are loyal animals. Cats like naps. Dogs need walks daily.";

    fn workspace() -> (TempDir, PathBuf, PathBuf) {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("summary.txt");
        fs::write(&input, PETS).unwrap();
        (dir, input, output)
    }

    fn cli(input: &Path, output: &Path, extra: &[&str]) -> Cli {
        let mut args = vec![
            "textrank-compress",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "50",
        ];
        args.extend_from_slice(extra);
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_percentage() {
        assert_eq!(parse_percentage("50").unwrap(), 50.0);
        assert_eq!(parse_percentage("100").unwrap(), 100.0);
        assert!(parse_percentage("0").is_err());
        assert!(parse_percentage("-10").is_err());
        assert!(parse_percentage("100.1").is_err());
        assert!(parse_percentage("half").is_err());
    }

    #[test]
    fn test_positional_arguments() {
        let cli = Cli::try_parse_from(["textrank-compress", "in.txt", "out.txt", "25"]).unwrap();

        assert_eq!(cli.input, PathBuf::from("in.txt"));
        assert_eq!(cli.output, PathBuf::from("out.txt"));
        assert_eq!(cli.percentage, 25.0);
        assert!(!cli.format_prompts);
    }

    #[test]
    fn test_out_of_range_percentage_rejected_by_parser() {
        assert!(Cli::try_parse_from(["textrank-compress", "in.txt", "out.txt", "0"]).is_err());
        assert!(Cli::try_parse_from(["textrank-compress", "in.txt", "out.txt", "-5"]).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "textrank-compress",
            "in.txt",
            "-",
            "50",
            "--damping",
            "0.6",
            "--threshold",
            "0",
            "--stopwords",
            "none",
        ])
        .unwrap();
        let config = build_config(&cli).unwrap();

        assert_eq!(config.damping, 0.6);
        assert_eq!(config.convergence_threshold, 0.0);
        assert_eq!(config.stopwords, StopwordSource::None);
        assert_eq!(config.max_iterations, 30);
    }

    #[test]
    fn test_parse_stopwords() {
        assert_eq!(parse_stopwords("default"), StopwordSource::Default);
        assert_eq!(parse_stopwords("none"), StopwordSource::None);
        assert_eq!(
            parse_stopwords("fr"),
            StopwordSource::Language("fr".to_string())
        );
    }

    #[test]
    fn test_run_writes_plain_summary() {
        let (_dir, input, output) = workspace();

        run(&cli(&input, &output, &[])).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "Summary:\n\nCats are small.\nDogs are loyal animals.\n"
        );
    }

    #[test]
    fn test_run_writes_formatted_prompts() {
        let (_dir, input, output) = workspace();

        run(&cli(&input, &output, &["--format-prompts", "--seed", "11"])).unwrap();
        let first = fs::read_to_string(&output).unwrap();

        let body = first
            .strip_prefix("Compressed and Formatted Summary:\n\n")
            .unwrap();
        let blocks: Vec<&str> = body.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| b.starts_with("```")));
        assert!(blocks[0].contains("Cats are small."));
        assert!(blocks[1].contains("Dogs are loyal animals."));
        assert!(!first.ends_with('\n'));

        run(&cli(&input, &output, &["--format-prompts", "--seed", "11"])).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), first);
    }

    #[test]
    fn test_run_writes_json_report() {
        let (_dir, input, output) = workspace();

        run(&cli(&input, &output, &["--json", "--format-prompts", "--seed", "3"])).unwrap();
        let report: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();

        assert_eq!(report["total_sentences"], 4);
        assert_eq!(report["sentences"].as_array().unwrap().len(), 2);
        assert_eq!(report["sentences"][1]["content"], "Dogs are loyal animals.");
        assert_eq!(report["rank"]["termination"], "converged");
        assert_eq!(report["prompts"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_run_json_omits_prompts_when_not_formatting() {
        let (_dir, input, output) = workspace();

        run(&cli(&input, &output, &["--json"])).unwrap();
        let report: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();

        assert!(report.get("prompts").is_none());
    }

    #[test]
    fn test_run_reports_unwritable_output() {
        let (dir, input, _output) = workspace();
        let output = dir.path().join("missing").join("summary.txt");

        let err = run(&cli(&input, &output, &[])).unwrap_err();
        assert!(matches!(err, TextRankError::Io { ref path, .. } if *path == output));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_run_reports_empty_document() {
        let (_dir, input, output) = workspace();
        fs::write(&input, "   \n").unwrap();

        let err = run(&cli(&input, &output, &[])).unwrap_err();
        assert!(matches!(err, TextRankError::EmptyDocument));
        assert!(!output.exists());
    }
}
