pub mod bind_email;
pub mod phone_login;

// Re-export for convenience
pub use bind_email::{BindEmailError, BindEmailUseCase};
pub use phone_login::{PhoneLoginError, PhoneLoginUseCase};
