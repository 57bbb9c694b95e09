use thiserror::Error;

/// Startup configuration failures. These abort the process before the server binds.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable such as `DATABASE_URL` or `JWT_SECRET` is unset.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A variable is set but its value does not parse, e.g. a non-numeric `PORT`
    /// or a malformed Google endpoint URL.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        name: String,
        value: String,
        reason: String,
    },
}
