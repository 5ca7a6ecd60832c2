use clap::{Parser, ValueEnum};

use ttgen_rs::parser::parse;
use ttgen_rs::table::{render_table, Format, RenderOptions};

#[derive(Debug, Copy, Clone, ValueEnum)]
enum OutputFormat {
    Latex,
    Text,
}

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Formula, e.g. "(p_0 -> (p_1 -> p_2)) -> ((p_0 -> p_1) -> (p_0 -> p_2))".
    #[arg(value_name = "FORMULA")]
    formula: String,

    /// Output format.
    #[clap(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Let the first symbol column change slowest.
    #[clap(long)]
    reverse_columns: bool,

    /// Start from the all-true row.
    #[clap(long)]
    reverse_rows: bool,

    /// Text for true cells.
    #[clap(long, value_name = "STR", default_value = "1")]
    true_symbol: String,

    /// Text for false cells.
    #[clap(long, value_name = "STR", default_value = "0")]
    false_symbol: String,

    /// Refuse formulas with more symbols than this.
    #[clap(long, value_name = "INT", default_value = "16")]
    max_symbols: usize,

    /// Enable debug logging.
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let options = RenderOptions {
        reverse_columns: args.reverse_columns,
        reverse_rows: args.reverse_rows,
        true_symbol: args.true_symbol,
        false_symbol: args.false_symbol,
        format: match args.format {
            OutputFormat::Latex => Format::Latex,
            OutputFormat::Text => Format::Text,
        },
        max_symbols: args.max_symbols,
    };

    match parse(&args.formula) {
        // Blank input: nothing to show.
        Ok(None) => {}
        Ok(Some(expr)) => {
            let table = render_table(&expr, &options)?;
            print!("{}", table);
        }
        Err(e) => {
            // Point at the offending column; the implicit `(` sits before the input.
            let column = e.position.max(0) as usize;
            eprintln!("{}", args.formula);
            eprintln!("{}^", " ".repeat(column));
            eprintln!("error: {}", e.description);
            std::process::exit(1);
        }
    }

    Ok(())
}
