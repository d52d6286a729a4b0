pub mod use_cases;

// Re-export for convenience
pub use use_cases::{
    bind_email::{BindEmailError, BindEmailUseCase},
    phone_login::{PhoneLoginError, PhoneLoginUseCase},
};
