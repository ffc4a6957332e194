//! internote - convert editor JSON documents

use std::io::Read;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use internote_core::{parse_document, DocumentError, HeadingLevel, NumberedListStyle};
use internote_export::{ExportFormat, ExportOptions, ExportService, Result};

#[derive(Parser)]
#[command(name = "internote")]
#[command(version, about = "Convert Internote documents to HTML or Markdown", long_about = None)]
#[command(after_help = "EXAMPLES:
    internote note.json                   Print note as HTML
    internote -f markdown note.json       Print note as Markdown
    internote --payload note.json         Print the save payload as JSON
    cat note.json | internote --outline -")]
struct Cli {
    /// Editor JSON document, or `-` for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output format: html, markdown or md
    #[arg(short, long, default_value = "html")]
    format: String,

    /// Print the heading outline instead of the document
    #[arg(long, conflicts_with = "payload")]
    outline: bool,

    /// Print the save payload ({content, title, tags}) as JSON
    #[arg(long)]
    payload: bool,

    /// Number items of numbered lists in Markdown output
    #[arg(long)]
    number_lists: bool,

    /// Remove duplicate tags from the save payload
    #[arg(long)]
    dedupe_tags: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli, std::io::stdin().lock()) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn read_input<R: Read>(path: &str, mut stdin: R) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        stdin.read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

fn run<R: Read>(cli: &Cli, stdin: R) -> Result<String> {
    let format: ExportFormat = cli.format.parse()?;

    let mut options = ExportOptions {
        dedupe_tags: cli.dedupe_tags,
        ..Default::default()
    };
    if cli.number_lists {
        options.markdown.numbered_list_style = NumberedListStyle::Numerals;
    }
    let service = ExportService::with_options(options);

    let json = read_input(&cli.input, stdin)?;
    let document = parse_document(&json)?;
    tracing::debug!(input = %cli.input, blocks = document.len(), "parsed document");

    if cli.outline {
        let mut out = String::new();
        for entry in service.outline(&document) {
            let indent = match entry.level {
                HeadingLevel::One => "",
                HeadingLevel::Two => "  ",
            };
            out.push_str(&format!("{indent}{}\n", entry.text));
        }
        return Ok(out);
    }

    if cli.payload {
        let payload = service.save_payload(&document);
        let json = serde_json::to_string_pretty(&payload).map_err(DocumentError::from)?;
        return Ok(format!("{json}\n"));
    }

    Ok(service.serialize(&document, format))
}
