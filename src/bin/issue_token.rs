use clap::Parser;
use domain::error::Error;
use domain::facade::{Facade, Hash, Token};
use domain::jwt::{CustomClaims, Jwt, JwtConfig, TokenIssuer};
use domain::hasher_from_config;
use domain::registry::ServiceRegistry;
use domain::user::{self, Credentials};
use log::{error, info};
use service::{config::Config, logging::Logger, AppState};
use std::sync::Arc;

/// Verifies a user's credentials and prints a freshly issued bearer token.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    config: Config,

    /// Email address of the user to authenticate
    #[arg(long)]
    email: String,

    /// Plaintext password of the user
    #[arg(long)]
    password: String,

    /// Token lifetime in minutes, overriding JWT_EXP
    #[arg(long)]
    exp: Option<i64>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    Logger::init_logger(&cli.config);

    info!(
        "Starting up with runtime environment: {}",
        cli.config.runtime_env()
    );

    let db = match service::init_database(&cli.config).await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    let registry = match build_registry(&cli.config) {
        Ok(registry) => registry,
        Err(e) => {
            error!("Failed to build service registry: {e}");
            std::process::exit(1);
        }
    };

    let creds = Credentials {
        email: cli.email,
        password: cli.password,
    };
    let custom = cli.exp.map(CustomClaims::with_exp).unwrap_or_default();
    let app_state = AppState::new(cli.config, &db);

    match run(&app_state, &registry, &creds, &custom).await {
        Ok(jwt) => match serde_json::to_string(&jwt) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("Failed to serialize token: {e}");
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to issue token for {}: {e}", creds.email);
            std::process::exit(1);
        }
    }
}

fn build_registry(config: &Config) -> Result<ServiceRegistry, Error> {
    let hasher = hasher_from_config(config)?;
    let issuer = TokenIssuer::new(&JwtConfig::from(config))?;

    Ok(ServiceRegistry::builder()
        .with_facade::<Hash>(hasher)
        .with_facade::<Token>(Arc::new(issuer))
        .build())
}

async fn run(
    app_state: &AppState,
    registry: &ServiceRegistry,
    creds: &Credentials,
    custom: &CustomClaims,
) -> Result<Jwt, Error> {
    let hasher = Hash::resolve(registry)?;
    let mut user = user::authenticate(app_state.db_conn_ref(), hasher.as_ref(), creds).await?;
    info!("Authenticated user {}", user.id);

    Token::issue_token(registry, &mut user, custom)
}
