use clap::Parser;
use foodscan::{cli, commands, config, error, store};
use cli::{Cli, Commands, ConfigCommand, LogCommand, ProfileCommand};
use commands::App;
use config::Config;
use error::Result;
use store::FileStore;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "foodscan=info,foodscan_common=info";
const VERBOSE_LOG_FILTER: &str = "foodscan=debug,foodscan_common=debug";

fn init_tracing(verbose: bool) {
    let fallback = if verbose { VERBOSE_LOG_FILTER } else { DEFAULT_LOG_FILTER };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    let store_path = config.resolve_store_path(cli.store.as_deref())?;
    tracing::debug!(store = %store_path.display(), "using store");

    let app = App::new(config, FileStore::open(&store_path));
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Profile { action } => match action {
            ProfileCommand::Set { name, allergies, goal, diet } => {
                let form = match name {
                    Some(name) => commands::form_from_args(name, allergies, goal, diet),
                    None => {
                        let initial = commands::seed_form(
                            commands::current_form(&app),
                            allergies,
                            goal,
                            diet,
                        );
                        commands::prompt_profile(initial)?
                    }
                };
                commands::profile_set(&app, form, &mut out).await?;
            }
            ProfileCommand::Show => commands::profile_show(&app, &mut out)?,
        },

        Commands::Scan { barcode } => {
            commands::scan(&app, &barcode, &mut out).await?;
        }

        Commands::Results => commands::results(&app, &mut out)?,

        Commands::Log { action } => match action {
            LogCommand::Save => {
                commands::log_save(&app, &mut out)?;
            }
            LogCommand::List => commands::log_list(&app, &mut out)?,
        },

        Commands::Config { action } => {
            let mut config = app.config;
            match action {
                ConfigCommand::Show => commands::config_show(&config, &store_path, &mut out)?,
                ConfigCommand::SetDelay { ms } => {
                    config.lookup_delay_ms = ms;
                    config.save()?;
                    tracing::info!(ms, "lookup delay updated");
                    commands::config_show(&config, &store_path, &mut out)?;
                }
            }
        }
    }

    Ok(())
}
