//! Generates a Markdown reference page from a JSON Schema document.
use std::{error::Error, path::PathBuf};

use clap::Parser;
use schemadoc::{
    config::{ConfigPaths, DocsConfig},
    pages::PageGenerator,
    tracing_config,
};

#[derive(Parser)]
#[command(name = "generate-docs")]
#[command(about = "Generate Markdown documentation from a JSON Schema document")]
struct Cli {
    /// JSON Schema document to document.
    schema: PathBuf,

    /// Configuration file. Defaults to schemadoc/config.toml in the XDG
    /// config directory, when it exists.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the page to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Page heading.
    #[arg(short, long)]
    title: Option<String>,

    /// Maximum schema nesting depth.
    #[arg(long)]
    max_depth: Option<usize>,

    /// Also document definitions the root schema never refers to.
    #[arg(long)]
    all_definitions: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let mut config = load_config(&cli)?;
    tracing_config::init(config.general.log_level)?;

    if cli.max_depth.is_some() {
        config.docgen.max_depth = cli.max_depth;
    }

    let mut generator = PageGenerator::new(config).with_all_definitions(cli.all_definitions);
    if let Some(title) = cli.title {
        generator = generator.with_title(title);
    }

    match cli.output {
        Some(output) => {
            let path = generator.generate_file(&cli.schema, &output).await?;
            eprintln!("Generated {}", path.display());
        }
        None => print!("{}", generator.render_file(&cli.schema).await?),
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<DocsConfig, Box<dyn Error>> {
    let path = cli
        .config
        .clone()
        .or_else(|| ConfigPaths::main_config().filter(|path| path.exists()));

    Ok(match path {
        Some(path) => DocsConfig::load(&path)?,
        None => DocsConfig::default(),
    })
}
