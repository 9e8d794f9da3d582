//! Front-end entry-point: loads configuration, wires the API client and
//! session cookie, then serves the pages.

mod server;

use std::ffi::OsString;

use color_eyre::eyre::{Context, Result, eyre};
use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use frontend::inbound::http::session_config::{BuildMode, session_settings_from_env};
use frontend::outbound::hbnb_api::HbnbApiClient;
use frontend::settings::{DataSourceKind, FrontendSettings};
use ortho_config::OrthoConfig;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = server_config(std::env::args_os())?;
    info!(bind_addr = %config.bind_addr, "starting HBnB front-end");
    create_server(config)?
        .await
        .wrap_err("HTTP server terminated with an error")
}

fn server_config(args: impl IntoIterator<Item = OsString>) -> Result<ServerConfig> {
    let settings = FrontendSettings::load_from_iter(args)
        .map_err(|e| eyre!("failed to load front-end settings: {e}"))?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .wrap_err("invalid session configuration")?;

    let config = ServerConfig::new(
        session.key,
        session.cookie_secure,
        session.same_site,
        settings.bind_addr()?,
    )
    .with_session_ttl(settings.session_ttl()?);

    match settings.data_source()? {
        DataSourceKind::Fixture => Ok(config),
        DataSourceKind::Remote => {
            let base_url = settings.api_base_url()?;
            info!(%base_url, "using HBnB API");
            let client = HbnbApiClient::new(base_url, settings.request_timeout()?)
                .wrap_err("failed to build HTTP client")?
                .with_review_endpoint(settings.review_endpoint()?);
            Ok(config.with_api(client, settings.fixture_fallback()))
        }
    }
}
