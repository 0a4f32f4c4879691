use clap::{Parser, Subcommand, ValueEnum};
use costcompare::application::estimator::FeeEstimator;
use costcompare::domain::policy::PricingPolicy;
use costcompare::domain::result::CalculationResult;
use costcompare::interfaces::csv::result_writer::{AmountStyle, ResultRow, ResultWriter, write_json};
use costcompare::interfaces::csv::scenario_reader::{Scenario, ScenarioReader, ScenarioRecord};
use costcompare::interfaces::report::render_summary;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing::{Level, info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Fee schedule used to price the platform
    #[arg(long, value_enum, env = "COSTCOMPARE_POLICY", default_value_t = PricingPolicy::HeadcountTiered, global = true)]
    policy: PricingPolicy,

    /// Output format (defaults to text for `estimate` and csv for `batch`)
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Render csv/json amounts as BRL currency (R$ 1.234,56)
    #[arg(long, global = true)]
    display: bool,

    /// Log each priced scenario
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Price a single scenario given on the command line
    Estimate {
        /// Monthly transaction volume, e.g. "100.000,00"
        #[arg(long, default_value = "")]
        gmv: String,
        /// Total employees
        #[arg(long, default_value = "")]
        headcount: String,
        /// Employees who travel (volume-tiered policy only)
        #[arg(long, default_value = "")]
        travelers: String,
        /// Competitor's flat monthly subscription
        #[arg(long, default_value = "")]
        monthly_fee: String,
        /// Competitor's fee per travel need
        #[arg(long, default_value = "")]
        per_need_fee: String,
        /// Ignore competitor fees and use industry averages
        #[arg(long)]
        use_defaults: bool,
    },
    /// Price every scenario in a CSV file
    Batch {
        /// Input scenarios CSV file
        input: PathBuf,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Csv,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let estimator = FeeEstimator::for_policy(cli.policy);
    let style = if cli.display {
        AmountStyle::Currency
    } else {
        AmountStyle::Plain
    };

    let format = cli.format.unwrap_or(match cli.command {
        Command::Estimate { .. } => OutputFormat::Text,
        Command::Batch { .. } => OutputFormat::Csv,
    });

    let priced = match cli.command {
        Command::Estimate {
            gmv,
            headcount,
            travelers,
            monthly_fee,
            per_need_fee,
            use_defaults,
        } => {
            let record = ScenarioRecord {
                scenario: "estimate".to_string(),
                gmv,
                headcount,
                travelers,
                monthly_fee,
                per_need_fee,
                use_defaults: use_defaults.to_string(),
            };
            let scenario = Scenario::try_from(record).into_diagnostic()?;
            let result = estimator.compute(&scenario.inputs);
            vec![(scenario.name, result)]
        }
        Command::Batch { input } => {
            info!(input = %input.display(), policy = %cli.policy, "pricing scenarios");
            let file = File::open(&input).into_diagnostic()?;
            let reader = ScenarioReader::new(file);

            let scenarios: Vec<Scenario> = reader
                .scenarios()
                .filter_map(|scenario| match scenario {
                    Ok(scenario) => Some(scenario),
                    Err(e) => {
                        warn!("Error reading scenario: {}", e);
                        None
                    }
                })
                .collect();

            let results = estimator.compute_all(scenarios.iter().map(|scenario| &scenario.inputs));
            let priced: Vec<(String, CalculationResult)> = scenarios
                .iter()
                .map(|scenario| scenario.name.clone())
                .zip(results)
                .collect();
            info!(count = priced.len(), "priced scenarios");
            priced
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => {
            for (name, result) in &priced {
                write!(out, "{}", render_summary(name, cli.policy, result)).into_diagnostic()?;
            }
        }
        OutputFormat::Csv => {
            let rows = to_rows(&priced, cli.policy, style);
            let mut writer = ResultWriter::new(out);
            writer.write_rows(&rows).into_diagnostic()?;
        }
        OutputFormat::Json => {
            let rows = to_rows(&priced, cli.policy, style);
            write_json(out, &rows).into_diagnostic()?;
        }
    }

    Ok(())
}

fn to_rows(
    priced: &[(String, CalculationResult)],
    policy: PricingPolicy,
    style: AmountStyle,
) -> Vec<ResultRow> {
    priced
        .iter()
        .map(|(name, result)| ResultRow::new(name.as_str(), policy, result, style))
        .collect()
}
