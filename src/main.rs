use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prep_score::db::{self, try_lock, LogOnError};
use prep_score::{cli, config, handlers};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Run the HTTP API
  Serve,
  /// Print the readiness breakdown for a user (uid or part of their name)
  Report { user: String },
  /// Load users, problems and submissions from a JSON fixture
  Import { file: PathBuf },
}

#[tokio::main]
async fn main() -> ExitCode {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "prep_score=debug,tower_http=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let args = Args::parse();

  let db_path = config::load_database_path();
  let pool = match db::init_db(&db_path) {
    Ok(pool) => pool,
    Err(e) => {
      tracing::error!("Failed to initialize database at {}: {}", db_path.display(), e);
      return ExitCode::FAILURE;
    }
  };

  match args.command {
    Command::Serve => serve(pool).await,
    Command::Report { user } => report(&pool, &user),
    Command::Import { file } => import(&pool, &file),
  }
}

async fn serve(pool: db::DbPool) -> ExitCode {
  if let Ok(conn) = try_lock(&pool) {
    let problems = db::get_problem_count(&conn).log_warn_default("Failed to count problems");
    let submissions =
      db::get_submission_count(&conn).log_warn_default("Failed to count submissions");
    tracing::info!("Loaded {} problems and {} submissions", problems, submissions);
  }

  let app = handlers::router(pool);

  let bind_addr = config::server_bind_addr();
  let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
    Ok(listener) => listener,
    Err(e) => {
      tracing::error!("Failed to bind to {}: {}", bind_addr, e);
      return ExitCode::FAILURE;
    }
  };

  tracing::info!("Server running on http://localhost:{}", config::server_port());

  if let Err(e) = axum::serve(listener, app).await {
    tracing::error!("Server error: {}", e);
    return ExitCode::FAILURE;
  }
  ExitCode::SUCCESS
}

fn report(pool: &db::DbPool, query: &str) -> ExitCode {
  let Ok(conn) = try_lock(pool) else {
    return ExitCode::FAILURE;
  };

  match cli::report_for(&*conn, query, Utc::now()) {
    Ok(text) => {
      print!("{}", text);
      ExitCode::SUCCESS
    }
    Err(e) => {
      eprintln!("{}", e);
      ExitCode::FAILURE
    }
  }
}

fn import(pool: &db::DbPool, file: &Path) -> ExitCode {
  let Ok(mut conn) = try_lock(pool) else {
    return ExitCode::FAILURE;
  };

  match cli::import_file(&mut conn, file) {
    Ok(summary) => {
      println!("{}", cli::format_import_summary(&summary));
      ExitCode::SUCCESS
    }
    Err(e) => {
      eprintln!("{}", e);
      ExitCode::FAILURE
    }
  }
}
