//! Exhibit CLI - render CSV data as formatted Excel exhibits

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use exhibit::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "exhibit")]
#[command(author, version, about = "Render CSV data as formatted Excel exhibits")]
struct Cli {
    /// Log progress (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out one or more CSV files and save them as an XLSX workbook
    Render {
        /// Input CSV files, one table each
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output XLSX file
        #[arg(short, long)]
        output: PathBuf,

        /// How the tables are arranged
        #[arg(short, long, value_enum, default_value_t = Arrange::Column)]
        arrange: Arrange,

        /// Title line over the whole exhibit (repeatable)
        #[arg(short, long)]
        title: Vec<String>,

        /// Number format applied to every data column
        #[arg(long, conflicts_with = "formats")]
        num_format: Option<String>,

        /// Column formats as JSON: a format code, a list, a single format
        /// object or an object keyed by column name
        #[arg(long)]
        formats: Option<String>,

        /// Format merged under every cell, as a JSON object
        #[arg(long)]
        default_format: Option<String>,

        /// Write column number markers below the header
        #[arg(long)]
        col_nums: bool,

        /// Omit the index column
        #[arg(long)]
        no_index: bool,

        /// Omit the header row
        #[arg(long)]
        no_header: bool,

        /// Empty cells around each table
        #[arg(short, long, default_value = "0")]
        margin: u32,

        #[command(flatten)]
        csv: CsvArgs,
    },

    /// Show how a CSV file would be laid out
    Inspect {
        /// Input CSV file
        input: PathBuf,

        #[command(flatten)]
        csv: CsvArgs,
    },
}

#[derive(clap::Args)]
struct CsvArgs {
    /// Column holding the row labels (0-based)
    #[arg(short, long)]
    index_col: Option<usize>,

    /// Field delimiter
    #[arg(short, long, default_value = ",")]
    delimiter: char,
}

impl CsvArgs {
    fn options(&self) -> Result<CsvReadOptions> {
        if !self.delimiter.is_ascii() {
            bail!("Delimiter must be a single ASCII character");
        }
        Ok(CsvReadOptions::default()
            .with_delimiter(self.delimiter as u8)
            .with_index_col(self.index_col))
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Arrange {
    /// Side by side
    Row,
    /// Stacked
    Column,
    /// One sheet per input, named after the file
    Tabs,
}

/// Per-table settings shared by every input
struct TableArgs<'a> {
    num_format: Option<&'a str>,
    formats: Option<serde_json::Value>,
    col_nums: bool,
    index: bool,
    header: bool,
    margin: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Render {
            inputs,
            output,
            arrange,
            title,
            num_format,
            formats,
            default_format,
            col_nums,
            no_index,
            no_header,
            margin,
            csv,
        } => {
            let formats = formats
                .map(|json| serde_json::from_str(&json))
                .transpose()
                .context("Invalid --formats JSON")?;
            let default_format = default_format
                .map(|json| serde_json::from_str::<FormatSpec>(&json))
                .transpose()
                .context("Invalid --default-format JSON")?;
            let table_args = TableArgs {
                num_format: num_format.as_deref(),
                formats,
                col_nums,
                index: !no_index,
                header: !no_header,
                margin,
            };
            render(
                &inputs,
                &output,
                arrange,
                &title,
                &table_args,
                default_format,
                &csv.options()?,
            )
        }
        Commands::Inspect { input, csv } => inspect(&input, &csv.options()?),
    }
}

fn load_table(path: &Path, args: &TableArgs<'_>, options: &CsvReadOptions) -> Result<Table> {
    let frame = exhibit::read_csv(path, options)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;

    let formats = match (&args.formats, args.num_format) {
        (Some(json), _) => Formats::from_json(json, &frame)
            .with_context(|| format!("Invalid formats for '{}'", path.display()))?,
        (None, Some(code)) => Formats::NumFormat(code.to_string()),
        (None, None) => Formats::Inherit,
    };

    Table::builder(frame)
        .formats(formats)
        .col_nums(args.col_nums)
        .index(args.index)
        .header(args.header)
        .margin(args.margin)
        .build()
        .with_context(|| format!("Cannot lay out '{}'", path.display()))
}

fn sheet_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| exhibit::DEFAULT_SHEET_NAME.to_string())
}

fn render(
    inputs: &[PathBuf],
    output: &Path,
    arrange: Arrange,
    title: &[String],
    table_args: &TableArgs<'_>,
    default_format: Option<FormatSpec>,
    csv_options: &CsvReadOptions,
) -> Result<()> {
    let mut options = RenderOptions::default();
    if let Some(spec) = default_format {
        options = options.with_default_format(spec);
    }

    let tables = inputs
        .iter()
        .map(|path| load_table(path, table_args, csv_options))
        .collect::<Result<Vec<_>>>()?;

    let placed = match arrange {
        Arrange::Tabs => {
            if !title.is_empty() {
                log::warn!("--title is ignored with --arrange tabs");
            }
            let tabs: Tabs = inputs.iter().map(|p| sheet_name(p)).zip(tables).collect();
            tabs.to_excel_with(output, &options)?;
            tabs.len()
        }
        Arrange::Row | Arrange::Column => {
            let builder = match arrange {
                Arrange::Row => Container::row(tables),
                _ => Container::column(tables),
            };
            let container = builder.title(title.iter().cloned()).build()?;
            eprintln!(
                "Exhibit is {} rows x {} columns",
                container.height(),
                container.width()
            );
            container.to_excel_with(output, &options)?;
            inputs.len()
        }
    };

    eprintln!("Wrote {} tables to '{}'", placed, output.display());
    Ok(())
}

fn inspect(input: &Path, csv_options: &CsvReadOptions) -> Result<()> {
    let frame = exhibit::read_csv(input, csv_options)
        .with_context(|| format!("Failed to read '{}'", input.display()))?;
    let table = Table::new(frame).context("Cannot lay out table")?;

    println!("File: {}", input.display());
    println!("Rows: {}", table.frame().n_rows());
    if let Some(name) = table.frame().index_name() {
        println!("Index: {}", name);
    }
    println!();
    println!("  {:<24} {:<9} {:>7}", "Column", "Type", "Width");
    for (series, width) in table.frame().columns().iter().zip(table.column_widths()) {
        println!("  {:<24} {:<9} {:>7.2}", series.name(), series.dtype().name(), width);
    }
    println!();
    println!(
        "Table size: {} rows x {} columns",
        table.height(),
        table.width()
    );

    Ok(())
}
