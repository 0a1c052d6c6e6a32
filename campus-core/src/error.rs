/// Errors produced by the `campus-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A client status string was neither a known marker nor an HTTP status code.
    #[error("invalid client status '{value}': expected \"network_error\", \"unknown\" or a status code")]
    InvalidClientStatus { value: String },

    /// An error label did not match any of the known response labels.
    #[error("unknown error label '{value}'")]
    UnknownLabel { value: String },
}
