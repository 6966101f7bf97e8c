use std::error::Error;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use ez_pdf::fonts::{FontFamily, FontStyle, DEFAULT_FONT_FAMILY_NAME, DEFAULT_FONT_SIZE};
use ez_pdf::page::{Orientation, PageFormat};
use ez_pdf::style::{Alignment, Border, Rgb};
use ez_pdf::units::Unit;
use ez_pdf::{samples, CellSpec, DocumentOptions, EzPdf, RowOptions};
use log::info;
use tracing_subscriber::EnvFilter;

/// Builds row-and-cell PDF documents from the command line.
///
/// Logging honours `RUST_LOG`; `--verbose` switches the default level to `debug`.
#[derive(Parser)]
#[command(author, version, about = "Row and cell PDF layout helpers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    document: DocumentArgs,

    /// Log layout decisions at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct DocumentArgs {
    /// Standard font family: courier, helvetica (arial), times, symbol, zapfdingbats.
    #[arg(long, global = true, env = "EZ_PDF_FONT", default_value = DEFAULT_FONT_FAMILY_NAME)]
    font: FontFamily,

    /// Font style letters (B, I, U).
    #[arg(long, global = true, env = "EZ_PDF_FONT_STYLE")]
    font_style: Option<FontStyle>,

    /// Font size in points.
    #[arg(long, global = true, env = "EZ_PDF_FONT_SIZE", default_value_t = DEFAULT_FONT_SIZE)]
    font_size: u8,

    /// Page format: a3, a4, a5, letter or legal.
    #[arg(long, global = true, env = "EZ_PDF_FORMAT", default_value = "legal")]
    format: PageFormat,

    /// Page orientation: portrait or landscape.
    #[arg(long, global = true, default_value = "portrait")]
    orientation: Orientation,

    /// User unit for sizes: pt, mm, cm or in.
    #[arg(long, global = true, env = "EZ_PDF_UNIT", default_value = "in")]
    unit: Unit,
}

impl DocumentArgs {
    fn options(&self) -> DocumentOptions {
        DocumentOptions::new()
            .with_unit(self.unit)
            .with_format(self.format)
            .with_orientation(self.orientation)
            .with_font(self.font)
            .with_font_style(self.font_style.unwrap_or_default())
            .with_font_size(self.font_size)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render the showcase sheet with every row helper.
    Showcase {
        /// Output path.
        #[arg(short, long, default_value = "ez_pdf.pdf")]
        output: PathBuf,
    },

    /// Render a single row of one to five cells.
    Row(RowArgs),
}

#[derive(Args)]
struct RowArgs {
    /// Cell text; repeat for every cell (1 to 5).
    #[arg(short, long = "text", required = true, num_args = 1..=5)]
    texts: Vec<String>,

    /// Alignment applied to every cell: L, C or R.
    #[arg(short, long, default_value = "C")]
    align: Alignment,

    /// Width fractions, comma separated; they must add up to 1.
    #[arg(short, long, value_delimiter = ',')]
    widths: Vec<f64>,

    /// Border sides: 0, 1 or any of L, R, T, B.
    #[arg(short, long, default_value = "1")]
    border: Border,

    /// Fill every cell with this color, given as R,G,B.
    #[arg(long)]
    fill: Option<Rgb>,

    /// Height of each line of the row, in user units.
    #[arg(long, default_value_t = 0.5)]
    cell_height: f64,

    /// Output path.
    #[arg(short, long, default_value = "row.pdf")]
    output: PathBuf,
}

/// Largest number of cells the row helpers lay out.
const MAX_ROW_CELLS: usize = 5;

fn row_cells(args: &RowArgs) -> Result<Vec<CellSpec>, String> {
    if args.texts.len() > MAX_ROW_CELLS {
        return Err(format!(
            "{} cells given; a row holds 1 to {} cells",
            args.texts.len(),
            MAX_ROW_CELLS
        ));
    }
    if !args.widths.is_empty() && args.widths.len() != args.texts.len() {
        return Err(format!(
            "{} widths given for {} cells",
            args.widths.len(),
            args.texts.len()
        ));
    }

    let cells = args
        .texts
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let mut cell = CellSpec::new(text.as_str())
                .with_align(args.align)
                .with_fill(args.fill.is_some());
            if let Some(width) = args.widths.get(index) {
                cell = cell.with_width(*width);
            }
            cell
        })
        .collect();
    Ok(cells)
}

fn run_row(args: &RowArgs, options: DocumentOptions) -> Result<(), Box<dyn Error>> {
    let cells = row_cells(args)?;

    let mut row = RowOptions::new()
        .with_border(args.border)
        .with_cell_height(args.cell_height);
    if let Some(color) = args.fill {
        row = row.with_fill_color(color);
    }

    let mut pdf = EzPdf::new(options);
    pdf.add_page(None);
    let layout = if let [cell] = cells.as_slice() {
        pdf.add_one_cell_row(cell.clone(), &row)?
    } else {
        pdf.add_row(&cells, &row)?
    };
    info!("Row widths: {:?}", layout.widths);

    pdf.export(&args.output)?;
    println!("Generated {}", args.output.display());
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let options = cli.document.options();
    match cli.command {
        Commands::Showcase { output } => {
            let pages = samples::run(&output, options)?;
            println!("Generated {} ({} pages)", output.display(), pages);
            Ok(())
        }
        Commands::Row(args) => run_row(&args, options),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        print_error_sources(err.as_ref());
        std::process::exit(1);
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
