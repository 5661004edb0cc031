use anyhow::Result;
use clap::{Parser, Subcommand};
use courtside_application::prelude as flows;
use courtside_db_sqlite::Connections;
use std::path::PathBuf;

mod config;
mod gateways;
mod recurring_tasks;

/// Booking marketplace for sports venues
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Create an admin account with a confirmed email address
    CreateAdmin {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let mut cfg = config::Config::try_load_from_file_or_default(args.config.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size)?;
    courtside_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    if let Some(Command::CreateAdmin {
        name,
        email,
        password,
    }) = args.command
    {
        let admin = flows::create_admin(&connections, &name, &email, &password)?;
        log::info!("Created admin {} <{}>", admin.id, admin.email.as_str());
        return Ok(());
    }

    let fixed = flows::recompute_all_venue_ratings(&connections)?;
    if fixed > 0 {
        log::warn!("Fixed {fixed} stale venue rating(s)");
    }

    tokio::spawn(recurring_tasks::run(
        connections.clone(),
        cfg.tasks.reconciliation_interval,
    ));

    let web_cfg = courtside_webserver::Cfg {
        tax_rate: cfg.bookings.tax_rate,
        jwt_token_lifetime: cfg.auth.jwt_token_lifetime,
    };
    courtside_webserver::run(
        connections,
        cfg.webserver.enable_cors,
        web_cfg,
        Box::new(gateways::LogNotificationGateway),
    )
    .await;
    Ok(())
}
