use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use vending_machine::application::service::MachineService;
use vending_machine::config::{DEFAULT_FLOAT, MachineConfig};
use vending_machine::domain::denomination::{AcceptedSet, Denomination};
use vending_machine::domain::ports::ProductStoreBox;
use vending_machine::domain::product::default_catalog;
use vending_machine::infrastructure::in_memory::InMemoryProductStore;
use vending_machine::interfaces::csv::action_reader::ActionReader;
use vending_machine::interfaces::csv::outcome_writer::OutcomeWriter;
use vending_machine::interfaces::csv::product_reader::ProductReader;
use vending_machine::logging;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Action script CSV file (action, argument)
    input: PathBuf,

    /// Product catalog CSV file (code, name, cost, quantity). Uses the built-in catalog if omitted.
    #[arg(long)]
    products: Option<PathBuf>,

    /// Denominations accepted as payment, comma separated (e.g. TEN_PENCE,ONE_POUND)
    #[arg(long, value_delimiter = ',')]
    accept: Vec<Denomination>,

    /// Coins of each accepted denomination loaded as change
    #[arg(long, default_value_t = DEFAULT_FLOAT)]
    float: u32,

    /// Start with the power off
    #[arg(long)]
    start_off: bool,

    /// Send paid coins to the cash box instead of the change stock
    #[arg(long)]
    no_absorb: bool,

    /// Write the final machine status as JSON to this path
    #[arg(long)]
    status_out: Option<PathBuf>,

    /// Log filter (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref());

    let accepted = if cli.accept.is_empty() {
        AcceptedSet::default()
    } else {
        AcceptedSet::new(cli.accept).into_diagnostic()?
    };
    let config = MachineConfig::new(accepted, cli.float)
        .powered_on(!cli.start_off)
        .absorb_payments(!cli.no_absorb);

    let products: ProductStoreBox = if let Some(path) = cli.products {
        let file = File::open(path).into_diagnostic()?;
        let catalog = ProductReader::new(file)
            .products()
            .collect::<vending_machine::error::Result<Vec<_>>>()
            .into_diagnostic()?;
        Box::new(InMemoryProductStore::with_products(catalog))
    } else {
        let catalog = default_catalog().into_diagnostic()?;
        Box::new(InMemoryProductStore::with_products(catalog))
    };

    let service = MachineService::new(config, products);

    // Run the script
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = ActionReader::new(file);
    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock());
    for (index, action_result) in reader.actions().enumerate() {
        let step = index + 1;
        match action_result {
            Ok(action) => {
                let result = service.execute(action.clone()).await;
                if let Err(e) = &result
                    && !e.is_recoverable()
                {
                    eprintln!("Error processing action {}: {}", step, e);
                }
                let balance = service.balance().await;
                writer
                    .write(step, &action, &result, balance)
                    .into_diagnostic()?;
            }
            Err(e) => {
                eprintln!("Error reading action {}: {}", step, e);
            }
        }
    }
    writer.flush().into_diagnostic()?;

    if let Some(path) = cli.status_out {
        let report = service.report().await.into_diagnostic()?;
        let file = File::create(path).into_diagnostic()?;
        serde_json::to_writer_pretty(file, &report).into_diagnostic()?;
    }

    Ok(())
}
