use clap::Parser;

/// Check whether an employer holds a UK sponsor licence.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Company name to look up (read from the page text when omitted)
    pub company: Option<String>,

    /// Saved job page text to scan for sponsorship refusal phrases
    #[arg(short, long)]
    pub page_text: Option<String>,

    /// Sponsor index document built by `build-sponsor-index`
    #[arg(short, long, default_value = "data/sponsors/sponsors_index.json")]
    pub index: String,

    /// Write the JSON report to this file
    #[arg(short, long)]
    pub output_file: Option<String>,
}
