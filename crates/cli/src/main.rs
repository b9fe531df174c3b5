use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use nexus_core::{
    Clock, CoreConfig, FixedClock, InMemoryCaseStore, LetterType, MatchResult, MinSimilarity,
    PrecedentLetterService, ReportParameters, SystemClock,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "nexus")]
#[command(about = "Precedent matching and outreach letter CLI")]
struct Cli {
    /// Historical case dataset (YAML or JSON); the built-in dataset when omitted
    #[arg(long, global = true)]
    cases: Option<PathBuf>,
    /// Minimum similarity as a fraction between 0 and 1
    #[arg(long, global = true)]
    threshold: Option<f64>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the historical cases in the dataset
    Cases,
    /// Rank precedents for a scenario
    Match {
        #[command(flatten)]
        params: ParamArgs,
    },
    /// Generate an outreach letter for a scenario
    Letter {
        #[command(flatten)]
        params: ParamArgs,
        /// Letter style: formal, precedent_based or strategic
        #[arg(long = "type", default_value = "precedent_based")]
        letter_type: LetterType,
        /// Letter date (YYYY-MM-DD); today when omitted
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

/// Scenario parameters: an optional file, with individual fields overridable by flag.
#[derive(Args, Debug, Default)]
struct ParamArgs {
    /// Report parameters file (YAML or JSON, camelCase keys)
    file: Option<PathBuf>,
    #[arg(long)]
    organization: Option<String>,
    #[arg(long)]
    country: Option<String>,
    #[arg(long)]
    intent: Option<String>,
    #[arg(long)]
    revenue_band: Option<String>,
    #[arg(long)]
    timeline: Option<String>,
}

impl ParamArgs {
    fn resolve(self) -> Result<ReportParameters, Box<dyn std::error::Error>> {
        let mut params = match &self.file {
            Some(path) => read_parameters(path)?,
            None => ReportParameters::default(),
        };
        if self.organization.is_some() {
            params.organization_name = self.organization;
        }
        if self.country.is_some() {
            params.country = self.country;
        }
        if self.intent.is_some() {
            params.strategic_intent = self.intent;
        }
        if self.revenue_band.is_some() {
            params.revenue_band = self.revenue_band;
        }
        if self.timeline.is_some() {
            params.expansion_timeline = self.timeline;
        }
        Ok(params)
    }
}

/// JSON is valid YAML, so one parser covers both formats.
fn read_parameters(path: &Path) -> Result<ReportParameters, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let params = serde_yaml::from_str(&raw)
        .map_err(|e| format!("Invalid parameters in {}: {}", path.display(), e))?;
    Ok(params)
}

fn core_config(cli: &Cli) -> Result<CoreConfig, Box<dyn std::error::Error>> {
    let min_similarity = match cli.threshold {
        Some(fraction) => MinSimilarity::from_fraction(fraction)?,
        None => MinSimilarity::default(),
    };
    Ok(CoreConfig::new(min_similarity, cli.cases.clone()))
}

fn print_matches(matches: &[MatchResult]) {
    if matches.is_empty() {
        println!("No precedents found.");
        return;
    }
    for m in matches {
        let case = &m.historical_case;
        println!(
            "{:>5.1}%  {:<6}  {} ({}, {}) - {}",
            m.similarity.overall.value(),
            m.confidence_level.as_str(),
            case.id,
            case.country,
            case.year,
            case.outcomes.result.as_str()
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("nexus_core=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = core_config(&cli)?;

    match cli.command {
        Some(Commands::Cases) => {
            let store = cfg.open_case_store()?;
            if store.is_empty() {
                println!("No cases found.");
            }
            for case in nexus_core::CaseStore::historical_cases(&store)? {
                println!(
                    "{}: {} ({}), {}",
                    case.id,
                    case.country,
                    case.year,
                    case.outcomes.result.as_str()
                );
            }
        }
        Some(Commands::Match { params }) => {
            let params = params.resolve()?;
            let service = open_service(&cfg, Arc::new(SystemClock))?;
            print_matches(&service.find_matches(&params)?);
        }
        Some(Commands::Letter {
            params,
            letter_type,
            date,
        }) => {
            let params = params.resolve()?;
            let clock: Arc<dyn Clock> = match date {
                Some(date) => Arc::new(FixedClock(date)),
                None => Arc::new(SystemClock),
            };
            let letter = open_service(&cfg, clock)?.generate_letter(&params, letter_type)?;
            if letter.is_fallback() {
                eprintln!(
                    "No precedent met the threshold; rendered a {} letter instead.",
                    letter.rendered.label()
                );
            }
            println!("{}", letter.body);
        }
        None => {
            println!("Use 'nexus --help' for commands");
        }
    }

    Ok(())
}

fn open_service(
    cfg: &CoreConfig,
    clock: Arc<dyn Clock>,
) -> Result<PrecedentLetterService<InMemoryCaseStore, Arc<dyn Clock>>, Box<dyn std::error::Error>>
{
    let store = cfg.open_case_store()?;
    Ok(PrecedentLetterService::new(store, clock, cfg))
}
