//! Voyage CLI - Command line storefront for tours and vehicle rentals.
//!
//! Commands:
//! - `voyage tours` - Browse and inspect tours
//! - `voyage vehicles` - Browse and inspect rental vehicles
//! - `voyage cart` - Show and change the cart
//! - `voyage checkout` - Book everything in the cart
//! - `voyage contact` - Send an inquiry
//! - `voyage admin` - Review and delete bookings and inquiries

mod commands;
mod config;
mod context;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::{AdminArgs, CartArgs, CheckoutArgs, ContactArgs, ToursArgs, VehiclesArgs};
use config::LoggingConfig;

/// Voyage CLI - Book tours and vehicle rentals from the terminal
#[derive(Parser)]
#[command(name = "voyage")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Directory holding the cart, bookings and inquiries
    #[arg(long, global = true)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse tours
    Tours(ToursArgs),

    /// Browse rental vehicles
    Vehicles(VehiclesArgs),

    /// Show and change the cart
    Cart(CartArgs),

    /// Book everything in the cart
    Checkout(CheckoutArgs),

    /// Send an inquiry
    Contact(ContactArgs),

    /// Review and delete bookings and inquiries
    Admin(AdminArgs),
}

fn main() {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = match context::Context::load(
        cli.config.as_deref(),
        cli.data_dir.as_deref(),
        output.clone(),
    ) {
        Ok(ctx) => ctx,
        Err(e) => fail(&output, e),
    };
    init_tracing(&ctx.config.logging, cli.verbose);

    // Execute command
    let result = match cli.command {
        Commands::Tours(args) => commands::tours::run(args, &ctx),
        Commands::Vehicles(args) => commands::vehicles::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
        Commands::Contact(args) => commands::contact::run(args, &ctx),
        Commands::Admin(args) => commands::admin::run(args, &ctx),
    };

    if let Err(e) = result {
        fail(&ctx.output, e);
    }
}

/// Print the full error chain and exit with status 1.
fn fail(output: &output::Output, err: anyhow::Error) -> ! {
    output.error(&format!("{:#}", err));
    std::process::exit(1);
}

/// Log to stderr. `RUST_LOG` wins over the configured level.
fn init_tracing(logging: &LoggingConfig, verbose: bool) {
    let default_level = if verbose { "debug" } else { logging.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "voyage_commerce={default_level},voyage_store={default_level}"
        ))
    });

    let json = logging.json;
    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| fmt::layer().with_target(false).with_writer(std::io::stderr)))
        .init();
}
