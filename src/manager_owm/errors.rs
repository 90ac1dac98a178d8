use thiserror::Error;

/// Reasons why weather data could not be acquired
#[derive(Error, Debug, PartialEq)]
pub enum OwmError {
    #[error("OwmError::PermissionDenied: the API key was refused")]
    PermissionDenied,
    #[error("OwmError::Network: {0}")]
    Network(String),
    #[error("OwmError::Timeout: no answer within the configured timeout")]
    Timeout,
    #[error("OwmError::Provider: http status {0}")]
    Provider(u16),
    #[error("OwmError::Document: {0}")]
    Document(String),
}
impl From<serde_json::Error> for OwmError {
    fn from(e: serde_json::Error) -> Self {
        OwmError::Document(e.to_string())
    }
}
impl From<std::io::Error> for OwmError {
    fn from(e: std::io::Error) -> Self {
        OwmError::Document(e.to_string())
    }
}
impl From<ureq::Error> for OwmError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::StatusCode(401) | ureq::Error::StatusCode(403) => OwmError::PermissionDenied,
            ureq::Error::StatusCode(status) => OwmError::Provider(status),
            ureq::Error::Timeout(_) => OwmError::Timeout,
            other => OwmError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refused_key_is_permission_denied() {
        assert_eq!(OwmError::from(ureq::Error::StatusCode(401)), OwmError::PermissionDenied);
        assert_eq!(OwmError::from(ureq::Error::StatusCode(403)), OwmError::PermissionDenied);
    }

    #[test]
    fn other_status_is_provider_error() {
        assert_eq!(OwmError::from(ureq::Error::StatusCode(502)), OwmError::Provider(502));
    }

    #[test]
    fn bad_json_is_document_error() {
        let e = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(OwmError::from(e), OwmError::Document(_)));
    }
}
