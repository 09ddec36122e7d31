use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} not found")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Constraint violated: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    pub fn bag_not_found(id: i64) -> Self {
        Self::NotFound {
            entity: "Bag",
            field: "id",
            value: id.to_string(),
        }
    }

    pub fn tag_not_found(tag_code: &str) -> Self {
        Self::NotFound {
            entity: "Tag",
            field: "tag_code",
            value: tag_code.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => Self::Constraint(msg),
            Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(msg)) => Self::Constraint(msg),
            _ => Self::Database(e.to_string()),
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {name}: {value}")]
    InvalidEnv { name: &'static str, value: String },

    #[error("DATABASE_URL environment variable is not set")]
    MissingDatabaseUrl,

    #[error("MEMORY_STORE_LIMIT must be at least 1")]
    ZeroMemoryLimit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_entity() {
        assert_eq!(DomainError::bag_not_found(7).to_string(), "Bag not found");
        assert_eq!(DomainError::tag_not_found("t1").to_string(), "Tag not found");
        assert!(DomainError::tag_not_found("t1").is_not_found());
    }

    #[test]
    fn plain_db_errors_map_to_database() {
        let err: DomainError = sea_orm::DbErr::Custom("boom".into()).into();
        assert!(matches!(err, DomainError::Database(_)));
    }
}
