//! Local HTTP stub shared by the unit and integration suites
//!
//! Each call starts a tiny_http server on an ephemeral port that answers
//! every request with the same status and body until the test process exits.

use std::net::TcpListener;
use std::thread;

use tiny_http::{Response, Server, StatusCode};

/// Serve `body` with `status` on a local port, returning the base URL
/// (`http://127.0.0.1:PORT/`)
pub fn serve(status: u16, body: &str) -> String {
    let server = Server::http("127.0.0.1:0").expect("failed to bind stub server");
    let addr = server.server_addr().to_ip().expect("stub server listens on TCP");
    let body = body.to_string();

    thread::spawn(move || {
        for request in server.incoming_requests() {
            let response = Response::from_string(body.as_str()).with_status_code(StatusCode(status));
            if let Err(err) = request.respond(response) {
                eprintln!("stub server failed to respond: {err}");
            }
        }
    });

    format!("http://{addr}/")
}

/// A local URL nothing is listening on
pub fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}
