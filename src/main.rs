use bfhl_console::adapters::health_handler::HealthHandler;
use bfhl_console::adapters::ReqwestTransport;
use bfhl_console::application::{Action, Controller};
use bfhl_console::cli::{load_payload, Cli, Command};
use bfhl_console::config::Settings;
use bfhl_console::domain::{FieldSelection, ResponseField};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::new_with_cli(&cli)?;

    // Initialize tracing; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command() {
        Command::Serve => serve(&settings).await,
        Command::Status => status(&settings).await,
        Command::Submit {
            input,
            fields,
            file,
        } => submit(&settings, &input, fields, file).await,
    }
}

async fn serve(settings: &Settings) -> anyhow::Result<ExitCode> {
    let host = &settings.server.host;
    let port = settings.server.port;
    info!(
        "Starting BFHL Console on {}:{} (API: {})",
        host, port, settings.api.base_url
    );

    let app = bfhl_console::create_app(Arc::new(HealthHandler::new()));

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(ExitCode::SUCCESS)
}

async fn status(settings: &Settings) -> anyhow::Result<ExitCode> {
    let controller = Controller::new(ReqwestTransport::from_settings(&settings.api)?);
    let status = controller.check_status().await;
    println!("{}", status);

    Ok(if status.is_running() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn submit(
    settings: &Settings,
    input: &str,
    fields: Vec<ResponseField>,
    file: Option<PathBuf>,
) -> anyhow::Result<ExitCode> {
    let controller = Controller::new(ReqwestTransport::from_settings(&settings.api)?);
    let selection = if fields.is_empty() {
        FieldSelection::all()
    } else {
        fields.into_iter().collect()
    };
    controller.dispatch(Action::SelectionReplaced(selection.iter().collect()));

    let result = match load_payload(input, file.as_deref()).await? {
        Ok(payload) => controller.submit_payload(&payload).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(_) => {
            if let Some(projection) = controller.projection() {
                println!("{}", projection.to_pretty_json());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}", err);
            Ok(ExitCode::FAILURE)
        }
    }
}
