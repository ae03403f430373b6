//! Session configuration
//!
//! Connection target and game constants, supplied once when a session is
//! built and overridable from the command line.

/// Host running the public hangman server
pub const DEFAULT_HOST: &str = "erdos.dsm.fordham.edu";

/// Port the hangman server listens on
pub const DEFAULT_PORT: u16 = 9999;

/// Misses allowed per round
pub const DEFAULT_GUESS_BUDGET: u32 = 10;

/// Banner lines the server sends before the first round of a connection
pub const DEFAULT_PREAMBLE_LINES: usize = 2;

/// Configuration for a hangman session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub host: String,
    pub port: u16,
    pub guess_budget: u32,
    pub preamble_lines: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            guess_budget: DEFAULT_GUESS_BUDGET,
            preamble_lines: DEFAULT_PREAMBLE_LINES,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_guess_budget(mut self, guess_budget: u32) -> Self {
        self.guess_budget = guess_budget;
        self
    }

    /// `host:port` string suitable for `TcpStream::connect`
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check the values make a playable session
    ///
    /// # Errors
    /// Returns a message naming the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("host must not be empty".to_string());
        }
        if self.port == 0 {
            return Err("port must be > 0".to_string());
        }
        if self.guess_budget == 0 {
            return Err("guess budget must be > 0".to_string());
        }
        Ok(())
    }
}
