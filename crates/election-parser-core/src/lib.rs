//! Domain core for the election parser form: request types, validation,
//! the wire payload, the form controller, and environment configuration.

pub mod app_config;
pub mod config;
pub mod form;
pub mod transport;
pub mod types;
pub mod validate;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, normalize_api_path, DEFAULT_API_PATH};
pub use form::{
    CopyAck, FormController, FormError, FormState, COPIED_LABEL, COPY_ACK_DURATION, COPY_LABEL,
};
pub use transport::{Clipboard, ClipboardError, ParseTransport, TransportError};
pub use types::{FormInput, ParseMethod, ParsePayload, ParseRequest, ResultType, UnknownOption};
pub use validate::{validate_link, ValidationError};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
