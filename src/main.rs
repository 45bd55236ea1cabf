use chrono::Utc;
use clap::Parser;
use log::warn;
use serde_json::to_string_pretty;
use std::error::Error;
use std::fs::{self, File};
use std::io::Write;

use sponsorcheck::cli::Cli;
use sponsorcheck::models::{Header, Output, REPORT_FORMAT_VERSION};
use sponsorcheck::page_text::{employer_from_text, text_sample};
use sponsorcheck::phrases::scan_phrases;
use sponsorcheck::sponsor_matching::models::NO_COMPANY_SUMMARY;
use sponsorcheck::sponsor_matching::{SponsorIndexCache, SponsorMatchEngine};

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let start_time = Utc::now();

    let page_text = match &cli.page_text {
        Some(path) => fs::read_to_string(path)?,
        None => String::new(),
    };

    let company = cli
        .company
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .or_else(|| employer_from_text(&page_text));

    let cache = SponsorIndexCache::new(&cli.index);
    let engine = SponsorMatchEngine::from_cache(&cache)?;

    let sponsor = company.as_deref().map(|name| engine.match_company(name));
    let sponsor_summary = match &sponsor {
        Some(result) => result.to_string(),
        None => {
            warn!("No company name given or found in page text");
            NO_COMPANY_SUMMARY.to_string()
        }
    };

    let phrases = scan_phrases(text_sample(&page_text));
    let phrase_summary = phrases.to_string();

    println!("Company: {}", company.as_deref().unwrap_or("Not detected"));
    println!("Sponsor: {}", sponsor_summary);
    println!("CoS: {}", phrase_summary);

    if let Some(output_file) = &cli.output_file {
        let end_time = Utc::now();
        let duration =
            (end_time - start_time).num_nanoseconds().unwrap_or(0) as f64 / 1_000_000_000.0;
        let output = Output {
            headers: vec![Header {
                start_timestamp: start_time.to_rfc3339(),
                end_timestamp: end_time.to_rfc3339(),
                duration,
                index_path: cli.index.clone(),
                index_entries: engine.index().len(),
                errors: Vec::new(),
                output_format_version: REPORT_FORMAT_VERSION.to_string(),
            }],
            company,
            sponsor,
            sponsor_summary,
            phrases,
            phrase_summary,
        };
        write_output(output_file, &output)?;
        println!("JSON output written to {}", output_file);
    }

    Ok(())
}

fn write_output(output_file: &str, output: &Output) -> std::io::Result<()> {
    let json_output = match to_string_pretty(output) {
        Ok(json) => json,
        Err(err) => return Err(std::io::Error::other(err)),
    };
    let mut file = File::create(output_file)?;
    file.write_all(json_output.as_bytes())?;
    Ok(())
}
