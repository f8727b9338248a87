use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] ktp_config::ConfigError),

    #[error("Database error: {0}")]
    Db(#[from] ktp_db::DbError),

    #[error("Auth error: {0}")]
    Auth(#[from] ktp_auth::AuthError),

    #[error("Failed to read JWT key file {path}: {source}")]
    JwtKeyFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
