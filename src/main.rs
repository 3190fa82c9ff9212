use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use owo_colors::OwoColorize;
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use trust_lens::adapters::inbound::rest::{self, AppState};
use trust_lens::adapters::outbound::console::{StderrProgressReporter, TracingProgressReporter};
use trust_lens::adapters::outbound::marketplaces::sample_sources;
use trust_lens::adapters::outbound::persistence::SqliteStore;
use trust_lens::application::dto::{AnalysisReport, AnalyzeProductRequest, OutputFormat};
use trust_lens::application::factories::{
    EngineFactory, FormatterFactory, PresenterFactory, PresenterType,
};
use trust_lens::application::use_cases::{
    AnalyzeProductUseCase, DashboardAnalyticsUseCase, ProductQueriesUseCase,
};
use trust_lens::cli::{Args, Command};
use trust_lens::config::{
    discover_config, load_config_from_path, CliOverrides, ConfigFile, EngineConfig,
    EngineProvider, EnvOverrides, ServiceConfig, CONFIG_FILENAME,
};
use trust_lens::ports::inbound::ProductAnalysisPort;
use trust_lens::shared::error::{ExitCode, TrustLensError};
use trust_lens::shared::Result;
use trust_lens::trust_scoring::policies::ScoreBand;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    match args.command {
        Command::Serve {
            bind,
            database,
            config,
            engine,
        } => serve(bind, database, config, engine).await,
        Command::Analyze {
            name,
            url,
            description,
            format,
            output,
            engine,
        } => analyze(name, url, description, format, output, engine).await,
    }
}

async fn serve(
    bind: Option<SocketAddr>,
    database: Option<PathBuf>,
    config_path: Option<PathBuf>,
    engine: Option<EngineProvider>,
) -> Result<()> {
    init_tracing();

    // Resolve configuration from flags, environment and file
    let file = match config_path {
        Some(path) => Some(load_config_from_path(&path)?),
        None => discover_config_with_notice(Path::new("."))?,
    };
    let cli = CliOverrides {
        bind,
        database,
        engine,
    };
    let config = ServiceConfig::resolve(cli, EnvOverrides::from_env(), file)?;

    // Open the database and wire the use cases behind the REST routes
    let store = SqliteStore::connect(&config.database).await?;
    let state = build_state(store, &config.engine)?;
    let app = rest::router(state);

    let listener = TcpListener::bind(config.bind).await?;
    tracing::info!(
        addr = %config.bind,
        database = %config.database.display(),
        engine = %config.engine.provider,
        "trust-lens listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Builds the shared application state for the REST router
fn build_state(store: SqliteStore, engine_config: &EngineConfig) -> Result<AppState> {
    let engine = EngineFactory::create(engine_config)?;

    let analyze = AnalyzeProductUseCase::new(
        sample_sources(),
        engine,
        Arc::new(store.clone()),
        Arc::new(TracingProgressReporter::new()),
    );
    let queries = ProductQueriesUseCase::new(Arc::new(store.clone()), Arc::new(store.clone()));
    let dashboard = DashboardAnalyticsUseCase::new(Arc::new(store));

    Ok(AppState::new(
        Arc::new(analyze),
        Arc::new(queries),
        Arc::new(dashboard),
    ))
}

async fn analyze(
    name: Option<String>,
    url: Option<String>,
    description: Option<String>,
    format: OutputFormat,
    output: Option<PathBuf>,
    engine: Option<EngineProvider>,
) -> Result<()> {
    let request = AnalyzeProductRequest::new(url, name, description);
    if request.is_empty() {
        return Err(TrustLensError::Validation {
            message: "provide at least one of --name, --url or --description".to_string(),
        }
        .into());
    }

    // Engine selection follows the same precedence rules as the server
    let cli = CliOverrides {
        engine,
        ..CliOverrides::default()
    };
    let config = ServiceConfig::resolve(
        cli,
        EnvOverrides::from_env(),
        discover_config_with_notice(Path::new("."))?,
    )?;

    // One-shot runs score against a throwaway in-memory database
    let store = SqliteStore::in_memory().await?;
    let analysis_engine = EngineFactory::create(&config.engine)?;

    eprintln!("{}", EngineFactory::progress_message(config.engine.provider));

    let use_case = AnalyzeProductUseCase::new(
        sample_sources(),
        analysis_engine,
        Arc::new(store),
        Arc::new(StderrProgressReporter::new()),
    );
    let report = use_case.analyze(request).await?;

    print_verdict(&report);

    // Display progress message
    eprintln!("{}", FormatterFactory::progress_message(format));

    let formatter = FormatterFactory::create(format);
    let formatted_output = formatter.format(&report)?;

    let presenter = PresenterFactory::create(PresenterType::from_output_flag(output));
    presenter.present(&formatted_output)?;

    Ok(())
}

/// Prints a colored verdict line on stderr, keeping stdout clean for the report
fn print_verdict(report: &AnalysisReport) {
    let Some(score) = report.product.trust_score.as_ref() else {
        return;
    };

    let headline = format!(
        "🔎 Trust score: {:.1}/100 - {}",
        score.overall_score, score.recommendation
    );
    match ScoreBand::for_score(score.overall_score) {
        ScoreBand::High => eprintln!("{}", headline.green()),
        ScoreBand::Moderate => eprintln!("{}", headline.yellow()),
        ScoreBand::Low => eprintln!("{}", headline.red()),
    }
}

fn discover_config_with_notice(dir: &Path) -> Result<Option<ConfigFile>> {
    let discovered = discover_config(dir)?;
    if discovered.is_some() {
        eprintln!("📋 Auto-discovered config file: {}", CONFIG_FILENAME);
    }
    Ok(discovered)
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trust_lens=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    // If the Ctrl-C handler cannot be installed the server simply runs
    // until killed.
    let _ = tokio::signal::ctrl_c().await;
}
