//! Flatcast CLI - convert delimited flat files to JSON, XML or YAML
//!
//! # Main Commands
//!
//! ```bash
//! flatcast convert input.txt --schema schema.json    # Full conversion
//! flatcast convert input.txt -s schema.json -f yaml  # Override format
//! ```
//!
//! # Debug Commands (for development)
//!
//! ```bash
//! flatcast split input.txt           # Just split lines into fields
//! flatcast normalize input.txt -s schema.json   # Normalized tree as JSON
//! flatcast example-schema            # Show a sample schema document
//! flatcast formats                   # List registered output formats
//! ```

use clap::{Parser, Subcommand};
use flatcast::{
    convert, example_schema, normalize, ConvertOptions, LineSplitter, RendererRegistry, Schema,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "flatcast")]
#[command(about = "Convert delimited flat files to JSON, XML or YAML", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full conversion: flat file + schema → rendered output
    Convert {
        /// Input flat file
        input: PathBuf,

        /// Schema document (JSON)
        #[arg(short, long)]
        schema: PathBuf,

        /// Output format (default: the schema's outputFormat)
        #[arg(short, long)]
        format: Option<String>,

        /// Delimiter pattern (default: a single pipe)
        #[arg(short, long)]
        delimiter: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Split a flat file into indexed field arrays, as JSON
    Split {
        /// Input flat file
        input: PathBuf,

        /// Delimiter pattern (default: a single pipe)
        #[arg(short, long)]
        delimiter: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Normalize a flat file and print the tree as JSON
    Normalize {
        /// Input flat file
        input: PathBuf,

        /// Schema document (JSON)
        #[arg(short, long)]
        schema: PathBuf,

        /// Delimiter pattern (default: a single pipe)
        #[arg(short, long)]
        delimiter: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show a sample schema document
    ExampleSchema,

    /// List registered output formats
    Formats,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = RendererRegistry::with_defaults();

    let result = match cli.command {
        Commands::Convert {
            input,
            schema,
            format,
            delimiter,
            output,
        } => cmd_convert(
            &input,
            &schema,
            format,
            delimiter,
            output.as_deref(),
            &registry,
        ),

        Commands::Split {
            input,
            delimiter,
            output,
        } => cmd_split(&input, delimiter.as_deref(), output.as_deref()),

        Commands::Normalize {
            input,
            schema,
            delimiter,
            output,
        } => cmd_normalize(&input, &schema, delimiter.as_deref(), output.as_deref()),

        Commands::ExampleSchema => cmd_example_schema(),

        Commands::Formats => cmd_formats(&registry),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_convert(
    input: &Path,
    schema: &Path,
    format: Option<String>,
    delimiter: Option<String>,
    output: Option<&Path>,
    registry: &RendererRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Converting: {}", input.display());

    let content = fs::read_to_string(input)?;
    let schema_document = fs::read_to_string(schema)?;

    let options = ConvertOptions { delimiter, format };
    let result = convert(content.lines(), &schema_document, registry, &options)?;

    eprintln!("   Lines: {}", result.line_count);
    eprintln!("   Containers: {}", result.container_count);
    eprintln!("✅ Rendered {} output", result.format);

    write_output(&result.output, output)?;
    Ok(())
}

fn cmd_split(
    input: &Path,
    delimiter: Option<&str>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Splitting: {}", input.display());

    let content = fs::read_to_string(input)?;
    let splitter = match delimiter {
        Some(pattern) => LineSplitter::new(pattern)?,
        None => LineSplitter::default(),
    };
    let record = splitter.split_lines(content.lines());

    eprintln!("✅ Split {} lines", record.len());

    let json = serde_json::to_string_pretty(&record)?;
    write_output(&json, output)?;
    Ok(())
}

fn cmd_normalize(
    input: &Path,
    schema: &Path,
    delimiter: Option<&str>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Normalizing: {}", input.display());

    let content = fs::read_to_string(input)?;
    let schema = Schema::from_file(schema)?;

    let splitter = match delimiter {
        Some(pattern) => LineSplitter::new(pattern)?,
        None => LineSplitter::default(),
    };
    let record = splitter.split_lines(content.lines());
    let tree = normalize(&record, &schema);

    eprintln!("   Lines: {}", record.len());
    eprintln!("✅ Normalized {} containers", tree.len());

    let json = serde_json::to_string_pretty(&tree)?;
    write_output(&json, output)?;
    Ok(())
}

fn cmd_example_schema() -> Result<(), Box<dyn std::error::Error>> {
    let schema = example_schema();
    println!("{}", schema.to_json()?);
    Ok(())
}

fn cmd_formats(registry: &RendererRegistry) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📋 Registered formats:");
    for format in registry.formats() {
        println!("  {}", format);
    }
    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
