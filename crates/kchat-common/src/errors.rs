use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum KchatError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");
    }

    #[test]
    fn kchat_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: KchatError = config_err.into();
        assert!(matches!(err, KchatError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn kchat_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: KchatError = io_err.into();
        assert!(matches!(err, KchatError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn kchat_error_other_variants() {
        let err = KchatError::Transport("connection refused".into());
        assert_eq!(err.to_string(), "transport error: connection refused");

        let err = KchatError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
