use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

use hangman_client::interaction::{PortEvent, ScriptedPort};
use hangman_client::protocol::{ErrorKind, TcpLineChannel};
use hangman_client::session::{RoundController, SessionConfig};

/// Minimal hangman server: serves `words` in order on a single connection
/// and returns every command line it received.
fn spawn_server(words: Vec<&'static str>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        serve(stream, &words)
    });

    (format!("127.0.0.1:{}", addr.port()), handle)
}

fn serve(stream: TcpStream, words: &[&str]) -> Vec<String> {
    let mut writer = stream.try_clone().unwrap();
    let reader = BufReader::new(stream);
    let mut received = Vec::new();
    let mut words = words.iter();
    let mut current = "";
    let mut greeted = false;

    for line in reader.lines() {
        let Ok(line) = line else { break };
        received.push(line.clone());

        if line == "NEW" {
            if !greeted {
                writeln!(writer, "Hangman server ready").unwrap();
                writeln!(writer, "Type NEW to begin").unwrap();
                greeted = true;
            }
            current = words.next().copied().unwrap_or("");
            writeln!(writer, "{}", current.len()).unwrap();
        } else if let Some(guess) = line.strip_prefix("GUESS ") {
            for c in current.chars() {
                writeln!(writer, "{}", guess.starts_with(c)).unwrap();
            }
        } else if line == "QUIT" {
            writeln!(writer, "{current}").unwrap();
        }
    }
    received
}

fn config_for(addr: &str) -> SessionConfig {
    let (host, port) = addr.rsplit_once(':').unwrap();
    SessionConfig::default()
        .with_host(host)
        .with_port(port.parse().unwrap())
}

#[test]
fn win_then_lose_over_one_connection() {
    let (addr, server) = spawn_server(vec!["RUST", "GO"]);
    let config = config_for(&addr);
    let channel = TcpLineChannel::connect(&config.address()).unwrap();
    // Round one: R U S T. Round two: ten letters missing from GO.
    let mut port = ScriptedPort::new("RUST ABCDEFHIJK", &[true, false]);

    let stats = RoundController::new(channel, &mut port, config)
        .run()
        .unwrap();

    assert_eq!(stats.rounds_played, 2);
    assert_eq!(stats.rounds_won, 1);
    assert_eq!(stats.rounds_lost, 1);
    assert!(port.events().contains(&PortEvent::Win));
    assert_eq!(
        port.events().last(),
        Some(&PortEvent::Loss(Some("GO".to_string())))
    );

    let received = server.join().unwrap();
    assert_eq!(received.iter().filter(|l| *l == "NEW").count(), 2);
    assert_eq!(received.last().map(String::as_str), Some("QUIT"));
    assert_eq!(received[1], "GUESS R");
}

#[test]
fn server_hanging_up_mid_round_aborts_session() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    let server = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut writer = stream.try_clone().unwrap();
        let mut lines = BufReader::new(stream).lines();

        assert_eq!(lines.next().unwrap().unwrap(), "NEW");
        writer.write_all(b"banner\nbanner\n3\n").unwrap();
        assert_eq!(lines.next().unwrap().unwrap(), "GUESS A");
        // One answer line out of three, then hang up.
        writer.write_all(b"true\n").unwrap();
    });

    let channel = TcpLineChannel::connect(&addr).unwrap();
    let mut port = ScriptedPort::new("A", &[true]);

    let err = RoundController::new(channel, &mut port, config_for(&addr))
        .run()
        .unwrap_err();

    server.join().unwrap();
    assert_eq!(err.kind(), ErrorKind::Protocol);
    assert_eq!(port.last_render(), Some(("___", 10)));
}
