use anyhow::Context;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use perfdash::report::{currency_cell, percent_cell, FormattedCell, Tone, MONTH_LABELS};
use perfdash::{analyze, Decimal, GridMode, MonthlyGrid, PortfolioConfig, Report};
use std::path::PathBuf;

/// Portfolio performance analytics over trade report CSVs.
///
/// Merges the given reports, allocates charges, derives the equity and
/// drawdown curves, and prints summary metrics plus a monthly/yearly P/L
/// table.
#[derive(Parser)]
#[command(name = "perfdash", version, about)]
struct Cli {
    /// Trade report CSV files. Each needs "Entry Date" and "P/L" columns.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Total portfolio capital.
    #[arg(long, default_value = "300000")]
    capital: Decimal,

    /// Total portfolio charges, amortized equally across all trades.
    #[arg(long, default_value = "0")]
    charges: Decimal,

    /// Show the monthly table as percent of capital instead of currency.
    #[arg(long)]
    percent: bool,

    /// Emit the full report and grid as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = PortfolioConfig::new(cli.capital, cli.charges);

    let mut datasets = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        let trades = perfdash::read_trades_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?;
        datasets.push(trades);
    }

    let report = analyze(&config, datasets)?;
    let mode = if cli.percent {
        GridMode::PercentOfCapital
    } else {
        GridMode::Absolute
    };
    let grid = MonthlyGrid::build(&report, mode);

    if cli.json {
        let bundle = serde_json::json!({ "report": report, "grid": grid });
        println!("{}", serde_json::to_string_pretty(&bundle)?);
        return Ok(());
    }

    print_summary(&report);
    print_grid(&grid, mode);
    Ok(())
}

fn print_summary(report: &Report) {
    let s = &report.summary;
    println!("Trades:               {}", report.trades.len());
    println!("Total Capital:        {}", currency_cell(s.total_capital).text);
    println!("Total Profit:         {}", currency_cell(s.total_profit).text);
    println!("Total Return:         {}", percent_cell(s.total_return_pct).text);
    println!(
        "Avg Monthly Profit:   {} ({})",
        currency_cell(s.avg_monthly_profit).text,
        percent_cell(s.avg_monthly_profit_pct).text
    );
    println!(
        "Max Drawdown:         {} ({})",
        currency_cell(s.max_drawdown.abs()).text,
        percent_cell(s.max_drawdown_pct).text
    );
    println!();
}

fn print_grid(grid: &MonthlyGrid, mode: GridMode) {
    if grid.rows.is_empty() {
        println!("No trades.");
        return;
    }

    let cell = |value: Decimal| -> FormattedCell {
        match mode {
            GridMode::Absolute => currency_cell(value),
            GridMode::PercentOfCapital => percent_cell(value),
        }
    };

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    let mut header = vec!["Year".to_string()];
    header.extend(MONTH_LABELS.iter().map(|m| m.to_string()));
    header.push("Total".to_string());
    header.push("Max Drawdown".to_string());
    table.set_header(header);

    for row in &grid.rows {
        let mut cells = vec![Cell::new(row.year)];
        for &month in &row.months {
            cells.push(toned(cell(month)));
        }
        cells.push(toned(cell(row.total)));
        cells.push(toned(cell(row.max_drawdown)));
        table.add_row(cells);
    }

    println!("{table}");
}

fn toned(formatted: FormattedCell) -> Cell {
    let cell = Cell::new(&formatted.text);
    match formatted.tone {
        Tone::Profit => cell.fg(Color::Green),
        Tone::Loss => cell.fg(Color::Red),
        Tone::Flat => cell,
    }
}
