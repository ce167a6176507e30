use analytics::{GroupStats, StatsEngine, SummaryStats, sort_by_pnl_desc};
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::{Table, presets::UTF8_FULL};
use core_types::Trade;
use rust_decimal::Decimal;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// The main entry point for the journal statistics tool.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report(args) => handle_report(args),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Performance statistics for a trading journal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a journal file and print performance statistics.
    Report(ReportArgs),
}

#[derive(Parser)]
struct ReportArgs {
    /// Path to a JSON file containing an array of trades.
    file: PathBuf,

    /// Also print a per-key breakdown.
    #[arg(long, value_enum)]
    group_by: Option<GroupKey>,

    /// Rank the breakdown by descending total P&L instead of first-seen order.
    #[arg(long, requires = "group_by")]
    rank: bool,

    /// Emit raw JSON instead of tables.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum GroupKey {
    Strategy,
    Pair,
}

// ==============================================================================
// Report Command Logic
// ==============================================================================

/// Handles the orchestration of the report command.
fn handle_report(args: ReportArgs) -> anyhow::Result<()> {
    let raw = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read journal file {}", args.file.display()))?;
    let trades: Vec<Trade> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse trades from {}", args.file.display()))?;

    // Surface malformed rows without refusing the whole journal.
    for trade in &trades {
        if let Err(e) = trade.validate() {
            tracing::warn!(id = trade.id, error = %e, "journal row failed validation");
        }
    }

    let engine = StatsEngine::new();
    let summary = engine.summarize(&trades);

    let groups = args.group_by.map(|key| {
        let mut groups = match key {
            GroupKey::Strategy => engine.group_by_strategy(&trades),
            GroupKey::Pair => engine.group_by_pair(&trades),
        };
        if args.rank {
            sort_by_pnl_desc(&mut groups);
        }
        groups
    });

    if args.json {
        print_json(&summary, groups.as_deref())?;
    } else {
        print_summary_table(&summary);
        if let Some(groups) = &groups {
            print_group_table(groups);
        }
    }

    Ok(())
}

fn print_json(summary: &SummaryStats, groups: Option<&[(String, GroupStats)]>) -> anyhow::Result<()> {
    let payload = serde_json::json!({
        "summary": summary,
        "groups": groups,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn print_summary_table(summary: &SummaryStats) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Metric", "Value"]);

    table.add_row(vec!["Total trades".to_string(), summary.total_trades.to_string()]);
    table.add_row(vec![
        "Wins / losses / breakeven".to_string(),
        format!(
            "{} / {} / {}",
            summary.win_count, summary.loss_count, summary.breakeven_count
        ),
    ]);
    table.add_row(vec![
        "Win rate".to_string(),
        format!("{}%", summary.win_rate_pct.round_dp(1)),
    ]);
    table.add_row(vec!["Total P&L".to_string(), money(summary.total_pnl)]);
    table.add_row(vec!["Average win".to_string(), money(summary.average_win)]);
    table.add_row(vec!["Average loss".to_string(), money(summary.average_loss)]);
    table.add_row(vec![
        "Profit factor".to_string(),
        match summary.profit_factor {
            Some(pf) => pf.round_dp(2).to_string(),
            None => "inf (no losses)".to_string(),
        },
    ]);
    table.add_row(vec![
        "Largest win".to_string(),
        summary.largest_win.map_or_else(|| "-".to_string(), money),
    ]);
    table.add_row(vec![
        "Largest loss".to_string(),
        summary.largest_loss.map_or_else(|| "-".to_string(), money),
    ]);
    if summary.excluded_trades > 0 {
        table.add_row(vec![
            "Excluded (no P&L)".to_string(),
            summary.excluded_trades.to_string(),
        ]);
    }

    println!("{table}");
}

fn print_group_table(groups: &[(String, GroupStats)]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Key", "Trades", "Win rate", "Total P&L", "Avg P&L"]);

    for (key, stats) in groups {
        table.add_row(vec![
            key.clone(),
            stats.trades.to_string(),
            format!("{}%", stats.win_rate_pct.round_dp(0)),
            money(stats.total_pnl),
            money(stats.avg_pnl),
        ]);
    }

    println!("{table}");
}

fn money(value: Decimal) -> String {
    format!("${}", value.round_dp(2))
}
