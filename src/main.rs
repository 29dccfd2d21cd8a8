use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use oauth_exchange::{
    config::Config,
    routes,
    services::{
        exchange::TokenExchangeService,
        firebase::custom_token::ServiceAccountTokenIssuer,
        oauth::{github::client::GitHubOAuthClient, google::client::GoogleOAuthClient},
    },
    AppState,
};
use reqwest::Client;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (json_layer, text_layer) = if json {
        (Some(fmt::layer().json().flatten_event(true)), None)
    } else {
        (None, Some(fmt::layer()))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .with(sentry_tracing::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_json);

    let _sentry = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    let http = Client::new();
    let oauth = config.oauth;
    let google = GoogleOAuthClient::new(http.clone(), oauth.google, oauth.google_certs_url);
    let github = GitHubOAuthClient {
        client: http,
        config: oauth.github,
        user_url: oauth.github_user_url,
    };
    let issuer = ServiceAccountTokenIssuer::new(&config.service_account)
        .context("failed to load service account key")?;
    info!(client_email = %issuer.client_email(), "Loaded service account");

    let state = AppState {
        exchange: Arc::new(TokenExchangeService::new(
            Arc::new(google),
            Arc::new(github),
            Arc::new(issuer),
        )),
    };

    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            routes::cors_layer(config.cors_allowed_origin.as_deref())
                .context("CORS_ALLOWED_ORIGIN is not a valid origin")?,
        );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
