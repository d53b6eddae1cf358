use clap::{Parser, Subcommand};
use tracing::{error, info, warn};

use contact_cleaner::app::clean_use_case::CleanContactsUseCase;
use contact_cleaner::app::output_filter::OutputFilter;
use contact_cleaner::config::{Config, DEFAULT_CONFIG_PATH};
use contact_cleaner::infra::{source_for_path, CsvRecordSink};
use contact_cleaner::logging;
use contact_cleaner::pipeline::processing::address::{self, AddressTokenizer, RuleTokenizer};
use contact_cleaner::pipeline::RecordPipeline;

#[derive(Parser)]
#[command(name = "contact_cleaner")]
#[command(about = "Normalize names, emails, phones and addresses in a headerless contact table")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean the configured input table and write the output table
    Run,
    /// Tokenize and classify a single address, printing the result as JSON
    Address {
        /// Free-form address text
        text: String,
    },
}

fn run(config: &Config) -> anyhow::Result<()> {
    let input = config.io.input_path();
    let output = config.io.output_path();

    let source = source_for_path(&input, config.io.has_headers)?;
    let use_case = CleanContactsUseCase::new(
        source,
        RecordPipeline::with_default_tokenizer(&config.pipeline),
        OutputFilter::from(&config.output),
        Box::new(CsvRecordSink::new(&output)),
    );

    let summary = use_case.run()?;
    info!(
        total = summary.total_rows,
        valid_emails = summary.valid_emails,
        valid_phones = summary.valid_phones,
        address_failures = summary.address_failures,
        written = summary.rows_written,
        "Cleaning run finished"
    );

    println!("\n📊 Results for {}:", input.display());
    println!("   Total rows: {}", summary.total_rows);
    println!("   Valid emails: {}", summary.valid_emails);
    println!("   Valid phones: {}", summary.valid_phones);
    println!("   Address failures: {}", summary.address_failures);
    println!("   Rows written: {}", summary.rows_written);
    println!("   Output file: {}", output.display());
    Ok(())
}

fn inspect_address(text: &str) -> anyhow::Result<()> {
    let tokens = RuleTokenizer::new().tokenize(text)?;
    let fields = address::classify(&tokens);

    let report = serde_json::json!({
        "tokens": tokens
            .iter()
            .map(|t| serde_json::json!({ "text": t.text, "tag": t.tag.label() }))
            .collect::<Vec<_>>(),
        "fields": fields,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let loaded = Config::load(&cli.config)?;
    let from_file = loaded.is_some();
    let config = loaded.unwrap_or_default();

    if let Err(e) = logging::init_logging(&config.io.log_dir) {
        eprintln!("❌ Could not set up logging in '{}': {}", config.io.log_dir, e);
        return Err(e.into());
    }
    if !from_file {
        warn!("Config file '{}' not found, using defaults", cli.config);
    }

    match cli.command {
        Commands::Run => {
            println!("🧹 Cleaning contacts...");
            if let Err(e) = run(&config) {
                error!("Cleaning run failed: {}", e);
                println!("❌ Cleaning run failed: {}", e);
                return Err(e);
            }
            println!("✅ Cleaning run completed successfully");
        }
        Commands::Address { text } => inspect_address(&text)?,
    }
    Ok(())
}
