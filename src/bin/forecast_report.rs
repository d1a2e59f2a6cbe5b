//! Headless run of the dashboard pipeline: prints the page's tables or a JSON summary.
use std::process::ExitCode;

use admission_forecast::{
    Category, Horizon, RenderParams, SeedSource, Variant, ViewModel, render_default,
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use tabled::{
    Table, Tabled,
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Print the admission forecast without the GUI", long_about = None)]
struct ReportArgs {
    #[arg(long, value_enum, default_value_t = Variant::Aggregate)]
    variant: Variant,

    /// Category to forecast (defaults to the dashboard's first category)
    #[arg(long, value_enum)]
    category: Option<Category>,

    /// Years of prediction, 1..=4
    #[arg(long, default_value_t = 1)]
    years: u8,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Override "today" (YYYY-MM-DD); defaults to the local date
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Emit a JSON summary instead of tables
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Tabled)]
struct ForecastTableRow {
    ds: String,
    trend: String,
    yhat_lower: String,
    yhat_upper: String,
    weekly: String,
    yearly: String,
    yhat: String,
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "")]
    key: &'static str,
    #[tabled(rename = "")]
    value: String,
}

fn params_from(args: &ReportArgs) -> Result<RenderParams> {
    let today = args
        .today
        .unwrap_or_else(admission_forecast::utils::today_local);
    let horizon = Horizon::new(args.years).context("--years")?;
    let mut params = RenderParams::new(args.variant, today)
        .with_horizon(horizon)
        .with_seed(SeedSource::from(args.seed));
    if let Some(category) = args.category {
        params = params.with_category(category);
    }
    if let Some(start) = args.start_date {
        params = params.with_start_date(start);
    }
    Ok(params)
}

fn print_tables(vm: &ViewModel) {
    let summary = vm.summary();
    println!("{}\n", vm.title);

    let overview = vec![
        SummaryRow {
            key: "Dashboard",
            value: vm.variant.to_string(),
        },
        SummaryRow {
            key: "Category",
            value: vm.category.to_string(),
        },
        SummaryRow {
            key: "History",
            value: format!(
                "{} .. {} ({} days)",
                summary.history_start.map(|d| d.to_string()).unwrap_or_default(),
                summary.history_end.map(|d| d.to_string()).unwrap_or_default(),
                summary.history_days
            ),
        },
        SummaryRow {
            key: "Mean per day",
            value: format!("{:.2} ± {:.2}", summary.history_mean, summary.history_stddev),
        },
        SummaryRow {
            key: "Predicted rows",
            value: summary.forecast_days.to_string(),
        },
        SummaryRow {
            key: "Seasonality",
            value: format!(
                "weekly: {}, yearly: {}",
                summary.has_weekly, summary.has_yearly
            ),
        },
    ];
    println!("{}\n", Table::new(overview).with(Style::rounded()));

    println!("{}", vm.data_heading);
    let mut raw = Builder::default();
    raw.push_record(vm.raw_columns.iter().cloned());
    for row in &vm.raw_tail {
        raw.push_record(
            std::iter::once(row.date.to_string()).chain(row.counts.iter().map(|c| c.to_string())),
        );
    }
    let mut raw = raw.build();
    raw.with(Style::rounded());
    println!("{}\n", raw);

    println!("{}", vm.forecast_heading);
    let rows = vm.forecast_tail.iter().map(|r| ForecastTableRow {
        ds: r.ds.to_string(),
        trend: format!("{:.3}", r.trend),
        yhat_lower: format!("{:.3}", r.yhat_lower),
        yhat_upper: format!("{:.3}", r.yhat_upper),
        weekly: format!("{:+.3}", r.weekly),
        yearly: format!("{:+.3}", r.yearly),
        yhat: format!("{:.3}", r.yhat),
    });
    let mut forecast = Table::new(rows);
    forecast
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()));
    println!("{}\n", forecast);

    println!("{}", vm.forecast_caption);
    println!("{}", vm.components_heading);
}

fn run(args: ReportArgs) -> Result<()> {
    let params = params_from(&args)?;
    log::info!("Report for {:?}", params);
    let vm = render_default(&params)?;

    if args.json {
        let json = serde_json::to_string_pretty(&vm.summary()).context("serialising summary")?;
        println!("{}", json);
    } else {
        print_tables(&vm);
    }
    Ok(())
}

fn main() -> ExitCode {
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter(None, log::LevelFilter::Warn)
        .filter(Some("admission_forecast"), level)
        .filter(Some("forecast_report"), level)
        .init();

    match run(ReportArgs::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
