use color_eyre::eyre::Result;
use phone_auth_adapters::{
    backend::{
        GoTrueIdentityAdmin, GoTrueIdentityResolver, GoTrueSessionClient,
        PostgrestCredentialVerifier,
    },
    config::BridgeSettings,
};
use phone_auth_service::PhoneAuthService;
use reqwest::Client as HttpClient;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");

    // Load configuration once; a missing backend secret aborts the boot.
    dotenvy::dotenv().ok();
    let settings = BridgeSettings::load()?;

    // One outbound client shared by all four gateways.
    let http_client = HttpClient::builder()
        .timeout(settings.backend.timeout)
        .build()?;

    let credential_verifier = PostgrestCredentialVerifier::new(
        settings.backend.url.clone(),
        settings.backend.service_key.clone(),
        http_client.clone(),
    );
    let session_issuer = GoTrueSessionClient::new(
        settings.backend.url.clone(),
        settings.backend.anon_key.clone(),
        http_client.clone(),
    );
    let identity_resolver = GoTrueIdentityResolver::new(
        settings.backend.url.clone(),
        settings.backend.anon_key.clone(),
        http_client.clone(),
    );
    let identity_admin = GoTrueIdentityAdmin::new(
        settings.backend.url.clone(),
        settings.backend.service_key.clone(),
        http_client,
    );

    let service = PhoneAuthService::new(
        credential_verifier,
        session_issuer,
        identity_resolver,
        identity_admin,
        settings.internal_email.domain.clone(),
    );

    let listener = tokio::net::TcpListener::bind(&settings.app_address).await?;
    service.run_standalone(listener).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
