use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use cattle_application::AppContext;
use cattle_infrastructure::CattlePaths;

mod commands;

#[derive(Parser)]
#[command(name = "cattle")]
#[command(about = "Cattle Sense CLI - cattle and buffalo breed identification", long_about = None)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding config.toml and persisted state
    #[arg(long, global = true, env = "CATTLE_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request an OTP for a mobile number
    Login { mobile: String },
    /// Verify the OTP and log in
    Verify { mobile: String, otp: String },
    /// Clear the stored login
    Logout,
    /// Show the current login
    Whoami,
    /// Classify a cattle or buffalo image
    Scan {
        image: PathBuf,
        /// Breed to record when confidence is low
        #[arg(long)]
        manual: Option<String>,
        /// Show the result without accepting it
        #[arg(long)]
        dry_run: bool,
    },
    /// List saved scans
    Records {
        /// Match breed, location or record id
        #[arg(short, long, default_value = "")]
        search: String,
        /// Only scans from the current month
        #[arg(long)]
        this_month: bool,
    },
    /// Dashboard summary: profile, stats and recent scans
    Home,
    /// Show or edit the profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Show or change preferences
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// Search the manual breed list
    Breeds {
        #[arg(default_value = "")]
        query: String,
        /// Search the breed library by name or origin instead
        #[arg(long)]
        details: bool,
    },
    /// Show the library page for a breed
    Breed { name: String },
    /// Inspect or create config.toml
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    Show,
    /// Update profile fields; omitted fields keep their current value
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        role: Option<String>,
    },
    /// Upload a new profile picture
    Picture { image: PathBuf },
}

#[derive(Subcommand)]
enum SettingsAction {
    Show,
    /// Set the interface language (en, hi, gu)
    Language { code: String },
    /// Flip one preference
    Toggle { setting: commands::settings::Toggle },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write a config.toml with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = CattlePaths::new(cli.config_dir);

    // Commands that must work without a usable backend configuration.
    match &cli.command {
        Commands::Breeds { query, details } => return commands::breeds::search(query, *details),
        Commands::Breed { name } => return commands::breeds::show(name),
        Commands::Config { action } => {
            return match action {
                ConfigAction::Show => commands::config::show(&paths),
                ConfigAction::Init { force } => commands::config::init(&paths, *force),
            };
        }
        _ => {}
    }

    let context = AppContext::bootstrap(&paths)?;

    match cli.command {
        Commands::Login { mobile } => commands::auth::login(&context, &mobile).await?,
        Commands::Verify { mobile, otp } => commands::auth::verify(&context, &mobile, &otp).await?,
        Commands::Logout => commands::auth::logout(&context),
        Commands::Whoami => commands::auth::whoami(&context),
        Commands::Scan {
            image,
            manual,
            dry_run,
        } => commands::scan::run(&context, image, manual.as_deref(), dry_run).await?,
        Commands::Records { search, this_month } => {
            commands::records::list(&context, &search, this_month).await?
        }
        Commands::Home => commands::home::show(&context).await?,
        Commands::Profile { action } => match action {
            ProfileAction::Show => commands::profile::show(&context).await?,
            ProfileAction::Update {
                name,
                email,
                location,
                role,
            } => {
                let edits = commands::profile::ProfileEdits {
                    full_name: name,
                    email,
                    location,
                    role,
                };
                commands::profile::update(&context, edits).await?
            }
            ProfileAction::Picture { image } => commands::profile::picture(&context, image).await?,
        },
        Commands::Settings { action } => match action {
            SettingsAction::Show => commands::settings::show(&context),
            SettingsAction::Language { code } => commands::settings::language(&context, &code)?,
            SettingsAction::Toggle { setting } => commands::settings::toggle(&context, setting),
        },
        Commands::Breeds { .. } | Commands::Breed { .. } | Commands::Config { .. } => {}
    }

    Ok(())
}
