mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "packmatch",
    version,
    about = "Match price list PDFs against order sheets by product code"
)]
struct Cli {
    /// Increase log detail (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct LayoutArgs {
    /// Predefined layout: aah (default), aah-layout
    #[arg(short, long = "layout", value_name = "NAME")]
    layout: Option<String>,

    /// Custom JSON layout file (takes precedence over --layout)
    #[arg(long = "layout-file", value_name = "FILE")]
    layout_file: Option<PathBuf>,

    /// Run pdftotext with -layout regardless of the layout's setting
    #[arg(long)]
    preserve_layout: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract product codes, pack sizes and prices from a price list
    Extract {
        /// Path to price list PDF or extracted text (.txt)
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write extracted products to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Join an order sheet against a price list and export SKU Code, Quantity, Price
    Match {
        /// Path to price list PDF or extracted text (.txt)
        price_list: PathBuf,

        /// Path to the order workbook (xlsx, xls, ods)
        order_sheet: PathBuf,

        /// Output format: table (default), csv or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the export to a file (Excel for .xlsx, CSV for .csv, JSON otherwise)
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Worksheet name (overrides the layout's sheet)
        #[arg(long, value_name = "NAME")]
        sheet: Option<String>,

        /// List order rows without a price list entry
        #[arg(long)]
        show_unmatched: bool,

        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Manage and inspect price list layouts
    Layouts {
        #[command(subcommand)]
        action: LayoutsAction,
    },
}

#[derive(Subcommand)]
enum LayoutsAction {
    /// List predefined layouts
    List,
    /// Print a predefined layout as JSON
    Show {
        /// Preset name (e.g., "aah")
        preset: String,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom layout file
    Validate {
        /// Path to JSON layout file
        file: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Extract {
            input_file,
            output,
            out,
            layout,
        } => commands::extract::run(input_file, &output, out, &layout),
        Commands::Match {
            price_list,
            order_sheet,
            output,
            out,
            sheet,
            show_unmatched,
            layout,
        } => commands::matching::run(commands::matching::MatchArgs {
            price_list,
            order_sheet,
            output_format: output,
            output_file: out,
            sheet,
            show_unmatched,
            layout,
        }),
        Commands::Layouts { action } => match action {
            LayoutsAction::List => commands::layouts::list(),
            LayoutsAction::Show { preset } => commands::layouts::show(&preset),
            LayoutsAction::Schema => commands::layouts::schema(),
            LayoutsAction::Validate { file } => commands::layouts::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
