mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use rapport_core::AppConfig;
use rapport_persistence::StateStore;
use rapport_tui::App;
use tracing_subscriber::EnvFilter;

fn init_tracing(interactive: bool) -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("RAPPORT_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else if interactive {
        // stderr would draw over the alternate screen
        tracing_subscriber::fmt().with_writer(std::io::sink).init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.command.is_none())?;

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    let path = config.state_file_path(cli.file.as_deref());
    let store =
        StateStore::open(&path).with_default_author(config.effective_default_author());

    let Some(cmd) = cli.command else {
        tracing::info!("Opening report {}", path.display());
        let mut app = App::load(store).await;
        app.run().await?;
        return Ok(());
    };

    if let Commands::Completions { shell } = cmd {
        clap_complete::generate(shell, &mut Cli::command(), "rapport", &mut std::io::stdout());
        return Ok(());
    }

    if let Err(err) = run_command(store, cmd).await {
        output::output_error(&err.to_string());
    }
    Ok(())
}

async fn run_command(store: StateStore, cmd: Commands) -> anyhow::Result<()> {
    let mut ctx = CliContext::load(store).await?;

    match cmd {
        Commands::Show => handlers::report::handle_show(&ctx)?,
        Commands::Meta(args) => handlers::meta::handle(&mut ctx, args).await?,
        Commands::Task(task_cmd) => handlers::task::handle(&mut ctx, task_cmd.action).await?,
        Commands::Render(args) => handlers::report::handle_render(&ctx, args).await?,
        Commands::Copy => handlers::report::handle_copy(&ctx)?,
        Commands::Reset => handlers::report::handle_reset(&mut ctx).await?,
        Commands::Completions { .. } => {}
    }
    Ok(())
}
