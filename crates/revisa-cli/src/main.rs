use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod check;
mod run;
mod screen;

#[derive(Debug, Parser)]
#[command(name = "revisa")]
#[command(about = "Consulta CPFs em lote no portal e-SAJ")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Consulta todos os CPFs válidos de um CSV e exporta os resultados.
    Run {
        /// CSV com colunas Nome e CPF.
        input: PathBuf,
        /// Segundos entre consultas (0 a 5).
        #[arg(long)]
        delay: Option<u64>,
        /// Diretório de saída dos CSVs exportados.
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Valida os CPFs de um CSV sem consultar o portal.
    Screen {
        /// CSV com colunas Nome e CPF.
        input: PathBuf,
    },
    /// Consulta um único CPF.
    Check {
        /// CPF em qualquer formato.
        document: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = revisa_core::load_app_config_from_env()?;

    // RUST_LOG takes precedence; the configured level is the fallback.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            input,
            delay,
            out_dir,
        } => run::run_roster(&config, &input, delay, out_dir).await,
        Commands::Screen { input } => screen::screen_roster(&input),
        Commands::Check { document } => check::check_document(&config, &document).await,
    }
}
