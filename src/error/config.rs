use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required credential was not provided.
    ///
    /// Credentials are read from a command-line flag or the equivalently named
    /// environment variable (a `.env` file is loaded first). A blank value counts
    /// as missing.
    #[error("No {name} provided (use --{flag} or set {env})")]
    MissingCredential {
        /// Human readable name of the credential
        name: &'static str,
        /// Command-line flag that supplies it
        flag: &'static str,
        /// Environment variable that supplies it
        env: &'static str,
    },

    /// A notice channel name was configured as an empty string.
    #[error("Channel name for {0} notifications must not be empty")]
    EmptyChannelName(&'static str),
}
