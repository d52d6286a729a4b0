use axum::{
    Router,
    http::{HeaderName, Method, header},
    routing::post,
};
use phone_auth_adapters::http::routes::{bind_email, method_not_allowed, phone_login, preflight};
use phone_auth_core::{CredentialVerifier, IdentityAdmin, IdentityResolver, SessionIssuer};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// HTTP front for the phone-to-email credential bridge.
///
/// Holds no state of its own; every request is a fresh pass through the
/// injected backend gateways.
pub struct PhoneAuthService {
    router: Router,
}

impl PhoneAuthService {
    /// Create a new PhoneAuthService from the four backend gateways.
    ///
    /// # Arguments
    /// * `credential_verifier` - Validates phone+password pairs (must be Clone)
    /// * `session_issuer` - Password-grant session exchange (must be Clone)
    /// * `identity_resolver` - Bearer-token-to-user lookup (must be Clone)
    /// * `identity_admin` - Privileged credential overwrite (must be Clone)
    /// * `reserved_domain` - Domain suffix for derived internal emails
    ///
    /// Each route is given only the state it needs: login never touches the
    /// privileged gateways, binding never touches the verifier.
    pub fn new<V, S, R, A>(
        credential_verifier: V,
        session_issuer: S,
        identity_resolver: R,
        identity_admin: A,
        reserved_domain: String,
    ) -> Self
    where
        V: CredentialVerifier + Clone + 'static,
        S: SessionIssuer + Clone + 'static,
        R: IdentityResolver + Clone + 'static,
        A: IdentityAdmin + Clone + 'static,
    {
        let router = Router::new()
            .route(
                "/login-phone-password",
                post(phone_login::<V, S>)
                    .options(preflight)
                    .fallback(method_not_allowed),
            )
            .with_state((credential_verifier, session_issuer, reserved_domain.clone()))
            .route(
                "/set-auth-email-password",
                post(bind_email::<R, A>)
                    .options(preflight)
                    .fallback(method_not_allowed),
            )
            .with_state((identity_resolver, identity_admin, reserved_domain));

        Self { router }
    }

    fn with_cors_layer(mut self) -> Self {
        // The permissive header list the phone clients already send.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::POST, Method::OPTIONS])
            .allow_headers([
                header::AUTHORIZATION,
                HeaderName::from_static("x-client-info"),
                HeaderName::from_static("apikey"),
                header::CONTENT_TYPE,
            ]);

        self.router = self.router.layer(cors);
        self
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a router for embedding or tests.
    pub fn as_router(self) -> Router {
        self.with_cors_layer().with_trace_layer().router
    }

    /// Run the bridge as a standalone server.
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.as_router();

        tracing::info!("Phone auth bridge listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
