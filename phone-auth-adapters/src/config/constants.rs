pub mod env {
    /// Prefix and nesting separator for settings supplied via environment
    /// variables, e.g. `PHONE_AUTH__BACKEND__URL`.
    pub const SETTINGS_PREFIX: &str = "PHONE_AUTH";
    pub const SETTINGS_SEPARATOR: &str = "__";

    pub const BACKEND_URL_VAR: &str = "PHONE_AUTH__BACKEND__URL";
    pub const BACKEND_SERVICE_KEY_VAR: &str = "PHONE_AUTH__BACKEND__SERVICE_KEY";
    pub const BACKEND_ANON_KEY_VAR: &str = "PHONE_AUTH__BACKEND__ANON_KEY";
    pub const INTERNAL_EMAIL_DOMAIN_VAR: &str = "PHONE_AUTH__INTERNAL_EMAIL__DOMAIN";
    pub const APP_ADDRESS_VAR: &str = "PHONE_AUTH__APP_ADDRESS";
}

/// Optional settings file, overridden by environment variables.
pub const SETTINGS_FILE: &str = "config/phone-auth";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";

    pub mod backend {
        use std::time::Duration;

        pub const TIMEOUT: Duration = Duration::from_secs(10);
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";

    pub mod backend {
        use std::time::Duration;

        pub const TIMEOUT: Duration = Duration::from_millis(200);
    }
}
