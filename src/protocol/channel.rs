//! Line transport between client and server
//!
//! `LineChannel` is the seam between the game logic and the network. The
//! session only ever sends one line and blocks for the lines it expects.

use super::{Command, HangmanError};
use std::io::{BufRead, BufReader, Write};
use std::net::{Shutdown, TcpStream};
use tracing::debug;

/// Blocking, ordered, line-at-a-time transport
pub trait LineChannel {
    /// Send one line; the newline is added by the channel
    ///
    /// # Errors
    /// Returns `HangmanError::Transport` if the write fails.
    fn send_line(&mut self, line: &str) -> Result<(), HangmanError>;

    /// Receive one line without its terminator
    ///
    /// Returns `Ok(None)` once the peer has closed the stream.
    ///
    /// # Errors
    /// Returns `HangmanError::Transport` if the read fails.
    fn recv_line(&mut self) -> Result<Option<String>, HangmanError>;

    /// Send a protocol command
    ///
    /// # Errors
    /// Same as [`LineChannel::send_line`].
    fn send(&mut self, command: Command) -> Result<(), HangmanError> {
        self.send_line(&command.to_string())
    }

    /// Receive a line that the protocol requires
    ///
    /// # Errors
    /// Returns `HangmanError::ChannelClosed` naming `expected` if the stream
    /// ends first.
    fn expect_line(&mut self, expected: &'static str) -> Result<String, HangmanError> {
        self.recv_line()?
            .ok_or(HangmanError::ChannelClosed { expected })
    }
}

impl<C: LineChannel + ?Sized> LineChannel for &mut C {
    fn send_line(&mut self, line: &str) -> Result<(), HangmanError> {
        (**self).send_line(line)
    }

    fn recv_line(&mut self) -> Result<Option<String>, HangmanError> {
        (**self).recv_line()
    }
}

/// `LineChannel` over a TCP connection
///
/// The socket is shut down when the channel is dropped.
pub struct TcpLineChannel {
    peer: String,
    reader: BufReader<TcpStream>,
    writer: TcpStream,
}

impl TcpLineChannel {
    /// Connect to `addr` (`host:port`)
    ///
    /// # Errors
    /// Returns `HangmanError::Connection` if the connection cannot be opened.
    pub fn connect(addr: &str) -> Result<Self, HangmanError> {
        let connection_error = |source| HangmanError::Connection {
            addr: addr.to_string(),
            source,
        };
        let stream = TcpStream::connect(addr).map_err(connection_error)?;
        let reader = stream.try_clone().map_err(connection_error)?;
        debug!(peer = addr, "connected");

        Ok(Self {
            peer: addr.to_string(),
            reader: BufReader::new(reader),
            writer: stream,
        })
    }

    #[must_use]
    pub fn peer(&self) -> &str {
        &self.peer
    }
}

impl LineChannel for TcpLineChannel {
    fn send_line(&mut self, line: &str) -> Result<(), HangmanError> {
        debug!(">> {line}");
        self.writer.write_all(format!("{line}\n").as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn recv_line(&mut self) -> Result<Option<String>, HangmanError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            debug!("<< (closed)");
            return Ok(None);
        }
        let line = line.trim_end_matches(['\r', '\n']).to_string();
        debug!("<< {line}");
        Ok(Some(line))
    }
}

impl Drop for TcpLineChannel {
    fn drop(&mut self) {
        // The peer may already be gone; nothing left to report.
        let _ = self.writer.shutdown(Shutdown::Both);
        debug!(peer = %self.peer, "connection closed");
    }
}

/// In-memory channel for tests: serves canned replies and records sends
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedChannel {
    replies: std::collections::VecDeque<String>,
    pub sent: Vec<String>,
}

#[cfg(test)]
impl ScriptedChannel {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            sent: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.replies.len()
    }
}

#[cfg(test)]
impl LineChannel for ScriptedChannel {
    fn send_line(&mut self, line: &str) -> Result<(), HangmanError> {
        self.sent.push(line.to_string());
        Ok(())
    }

    fn recv_line(&mut self) -> Result<Option<String>, HangmanError> {
        Ok(self.replies.pop_front())
    }
}
