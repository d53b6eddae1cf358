use anyhow::Result;
use std::fs;
use tempfile::tempdir;

use contact_cleaner::app::clean_use_case::CleanContactsUseCase;
use contact_cleaner::app::output_filter::OutputFilter;
use contact_cleaner::config::Config;
use contact_cleaner::infra::{source_for_path, CsvRecordSink};
use contact_cleaner::pipeline::RecordPipeline;
use contact_cleaner::Record;

const INPUT: &str = "\
John Q Public,john.public@example.com,(555) 123-4567x9,100 Main St,Apt 4B,,
Grace Hopper,grace@navy.mil,555.867.5309,1 Navy Way,,\"Arlington, VA 22202\",
Cher,not-an-email,,,,,
,,,,,,
";

fn config_for(dir: &std::path::Path, extra: &str) -> Result<Config> {
    let toml = format!(
        "[io]\nbase_path = {:?}\ninput = \"contacts.csv\"\noutput = \"clean/contacts.csv\"\n{extra}",
        dir.display().to_string()
    );
    Ok(Config::from_toml(&toml)?)
}

fn run(config: &Config) -> Result<(contact_cleaner::PipelineSummary, Vec<Vec<String>>)> {
    let use_case = CleanContactsUseCase::new(
        source_for_path(&config.io.input_path(), config.io.has_headers)?,
        RecordPipeline::with_default_tokenizer(&config.pipeline),
        OutputFilter::from(&config.output),
        Box::new(CsvRecordSink::new(config.io.output_path())),
    );
    let summary = use_case.run()?;

    let mut reader = csv::Reader::from_path(config.io.output_path())?;
    let rows = reader
        .records()
        .map(|r| r.map(|row| row.iter().map(str::to_string).collect()))
        .collect::<std::result::Result<Vec<Vec<String>>, _>>()?;
    Ok((summary, rows))
}

#[test]
fn test_csv_round_trip_through_pipeline() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("contacts.csv"), INPUT)?;
    let config = config_for(dir.path(), "")?;

    let (summary, rows) = run(&config)?;
    assert_eq!(summary.total_rows, 4);
    assert_eq!(summary.rows_written, 4);
    assert_eq!(summary.valid_emails, 2);
    assert_eq!(summary.valid_phones, 1);

    assert_eq!(
        rows[0],
        vec![
            "John", "Q", "Public", "john.public@example.com", "true", "55512345679", "false",
            "100 Main St", "Apt 4B", "", "", ""
        ]
    );
    assert_eq!(
        rows[1],
        vec![
            "Grace", "", "Hopper", "grace@navy.mil", "true", "(555) 867-5309", "true",
            "1 Navy Way", "", "Arlington", "VA", "22202"
        ]
    );
    assert_eq!(&rows[2][..7], &["", "", "Cher", "not-an-email", "false", "", "false"]);
    assert!(rows[3].iter().all(|c| c.is_empty() || c == "false"));
    Ok(())
}

#[test]
fn test_output_filter_only_keeps_valid_contacts() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("contacts.csv"), INPUT)?;
    let config = config_for(dir.path(), "[output]\nonly_valid_contacts = true\n")?;

    let (summary, rows) = run(&config)?;
    assert_eq!(summary.total_rows, 4);
    assert_eq!(summary.rows_written, 1);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "Grace");
    Ok(())
}

#[test]
fn test_parallel_run_writes_same_table() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("contacts.csv"), INPUT)?;

    let (_, sequential) = run(&config_for(dir.path(), "")?)?;
    let (_, parallel) = run(&config_for(dir.path(), "[pipeline]\nparallel = true\n")?)?;
    assert_eq!(sequential, parallel);
    Ok(())
}

#[test]
fn test_end_to_end_record() {
    let pipeline = RecordPipeline::with_default_tokenizer(&Default::default());
    let record = Record {
        name: Some("John Q Public".to_string()),
        email: None,
        phone: Some("(555) 123-4567x9".to_string()),
        address_lines: [
            Some("100 Main St".to_string()),
            Some("Apt 4B".to_string()),
            None,
            None,
        ],
    };

    let enriched = pipeline.enrich(&record);
    assert_eq!(
        (
            enriched.name.first.as_str(),
            enriched.name.middle.as_str(),
            enriched.name.last.as_str()
        ),
        ("John", "Q", "Public")
    );
    assert!(!enriched.phone.valid);
    assert_eq!(enriched.address.address_1, "100 Main St");
    assert_eq!(enriched.address.address_2, "Apt 4B");
}
