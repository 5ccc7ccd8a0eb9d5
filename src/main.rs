//! spanweave - inspect annotation overlays for an article document

use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use spanweave::markup::render_html;
use spanweave::source::article::Article;
use spanweave::util::read_document;
use spanweave::{OffsetUnit, Overlay, OverlayOptions, Palette, SourceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Json,
    Text,
}

#[derive(Parser)]
#[command(name = "spanweave")]
#[command(version, about = "Composite NLP annotation spans over an article", long_about = None)]
#[command(after_help = "EXAMPLES:
    spanweave article.json                   All annotations as HTML
    spanweave -e entity -e citation a.json   Only entities and citations
    spanweave -f json -u utf16 a.json        Render tree, UTF-16 offsets
    spanweave --spans article.json           List collected spans")]
struct Cli {
    /// Article document (JSON)
    #[arg(value_name = "ARTICLE")]
    input: String,

    /// Source kind to enable (entity, adjective, sentiment, citation); all when omitted
    #[arg(short, long = "enable", value_name = "KIND")]
    enable: Vec<SourceKind>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Unit the annotators counted offsets in (char, utf16, byte)
    #[arg(short, long, default_value = "char")]
    unit: OffsetUnit,

    /// Display classes as JSON
    #[arg(long, value_name = "PALETTE")]
    palette: Option<String>,

    /// Print the collected spans instead of rendering
    #[arg(long)]
    spans: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let json = read_document(&cli.input).map_err(|e| format!("{}: {e}", cli.input))?;
    let article = Article::from_json(&json).map_err(|e| format!("{}: {e}", cli.input))?;

    let palette = match &cli.palette {
        Some(path) => {
            let json = read_document(path).map_err(|e| format!("{path}: {e}"))?;
            Palette::from_json(&json).map_err(|e| format!("{path}: {e}"))?
        }
        None => Palette::default(),
    };

    let mut options = OverlayOptions::new()
        .with_unit(cli.unit)
        .with_palette(palette);
    if !cli.enable.is_empty() {
        options = options.with_enabled(cli.enable.iter().copied());
    }

    let sources = article.sources();
    let overlay = Overlay::build(&article.body, &sources, &options);
    log::info!(
        "article {}: {} spans over {} {} units",
        article.id.as_deref().unwrap_or("<unnamed>"),
        overlay.spans().len(),
        overlay.text().len(),
        overlay.text().unit()
    );

    if cli.spans {
        let json = serde_json::to_string_pretty(overlay.spans()).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    let paragraphs = overlay.paragraphs();
    match cli.format {
        Format::Html => print!("{}", render_html(&paragraphs)),
        Format::Json => {
            let json = serde_json::to_string_pretty(&paragraphs).map_err(|e| e.to_string())?;
            println!("{json}");
        }
        Format::Text => {
            let texts: Vec<String> = paragraphs.iter().map(|p| p.text()).collect();
            println!("{}", texts.join("\n\n"));
        }
    }

    Ok(())
}
