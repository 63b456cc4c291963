use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Request to the stats API failed: {0}")]
    StatsRequestFailed(String),
    #[error("Stats API answered with status `{0}`")]
    StatsStatus(u16),
    #[error("Unexpected stats API payload: {0}")]
    StatsPayload(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn code(&self) -> String {
        match self {
            AppError::StatsRequestFailed(_) => String::from("StatsRequestFailed"),
            AppError::StatsStatus(_) => String::from("StatsStatus"),
            AppError::StatsPayload(_) => String::from("StatsPayload"),
            AppError::InvalidConfig(_) => String::from("InvalidConfig"),
            AppError::Database(_) => String::from("DatabaseError"),
            AppError::Migration(_) => String::from("MigrationError"),
            AppError::Io(_) => String::from("IoError"),
        }
    }
}
