//! Shared utilities for integration tests.

use std::io::{self, BufRead, BufReader};
use std::net::{Shutdown, SocketAddr, TcpStream};

use mock_response::{DisruptionPolicy, ScriptedResponse};
use tokio::net::TcpListener;

/// Start a backend that plays `responses` in order, one per connection.
///
/// Each accepted socket is handed to a blocking task, since rendering
/// blocks the calling thread while throttling.
pub async fn start_scripted_backend(responses: Vec<Box<dyn ScriptedResponse>>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        for mut response in responses {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let socket = socket.into_std().unwrap();
                    socket.set_nonblocking(false).unwrap();
                    tokio::task::spawn_blocking(move || serve_one(socket, response.as_mut()));
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Apply the response's disruption policy and render it.
fn serve_one(mut socket: TcpStream, response: &mut dyn ScriptedResponse) {
    let policy = response.disruption_policy();
    if policy == DisruptionPolicy::DisconnectAtStart {
        return;
    }

    read_request_head(&socket);

    if !policy.renders_response() {
        // hold the connection until the client gives up
        let _ = io::copy(&mut socket, &mut io::sink());
        return;
    }

    let _ = response.render(&mut socket);
    let _ = socket.shutdown(Shutdown::Both);
}

fn read_request_head(socket: &TcpStream) {
    let mut reader = BufReader::new(socket);
    let mut line = String::new();
    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) if line == "\r\n" => return,
            Ok(_) => {}
        }
    }
}

/// HTTP client that never reuses connections.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
