//! Hangman Client - CLI
//!
//! Connects to a hangman server and plays rounds in the terminal.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use hangman_client::{
    interaction::{InteractionPort, TextConsole},
    interactive::TuiPort,
    output::print_session_summary,
    protocol::TcpLineChannel,
    session::{DEFAULT_GUESS_BUDGET, DEFAULT_HOST, DEFAULT_PORT, RoundController, SessionConfig},
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Play hangman against a remote word server",
    version,
    author
)]
struct Cli {
    /// Print protocol lines and debugging info
    #[arg(short = 'd', long)]
    debug: bool,

    /// Hangman server host
    #[arg(default_value = DEFAULT_HOST)]
    server: String,

    /// Server port
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Misses allowed per round
    #[arg(short, long, default_value_t = DEFAULT_GUESS_BUDGET)]
    guesses: u32,

    /// Full-screen terminal interface instead of line prompts
    #[arg(long, conflicts_with = "debug")]
    tui: bool,
}

/// Initialize tracing to stderr
///
/// `RUST_LOG` wins if set; otherwise `-d` turns on protocol tracing. The
/// full-screen interface owns the terminal, so no output layer is installed
/// while it runs.
fn init_logging(cli: &Cli) {
    let default = if cli.debug { "hangman_client=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let output = (!cli.tui).then(|| fmt::layer().with_writer(std::io::stderr).compact());

    tracing_subscriber::registry()
        .with(filter)
        .with(output)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = SessionConfig::default()
        .with_host(cli.server)
        .with_port(cli.port)
        .with_guess_budget(cli.guesses);
    config.validate().map_err(|e| anyhow!(e))?;

    let address = config.address();
    let channel = TcpLineChannel::connect(&address)
        .with_context(|| format!("failed to reach hangman server at {address}"))?;

    if cli.tui {
        let port = TuiPort::enter(config.guess_budget).context("failed to set up terminal")?;
        play(channel, port, config)
    } else {
        play(channel, TextConsole::stdio(config.guess_budget), config)
    }
}

fn play<P: InteractionPort>(
    channel: TcpLineChannel,
    port: P,
    config: SessionConfig,
) -> Result<()> {
    let stats = RoundController::new(channel, port, config)
        .run()
        .context("hangman session ended")?;
    print_session_summary(&stats);
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tui_refuses_debug_tracing() {
        let err = Cli::try_parse_from(["hangman", "--tui", "-d"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn debug_and_tui_parse_on_their_own() {
        let cli = Cli::try_parse_from(["hangman", "-d", "localhost"]).unwrap();
        assert!(cli.debug && !cli.tui);
        assert_eq!(cli.server, "localhost");

        let cli = Cli::try_parse_from(["hangman", "--tui"]).unwrap();
        assert!(cli.tui && !cli.debug);
        assert_eq!(cli.port, DEFAULT_PORT);
    }
}
