//! Minimal scripted HTTP/1.1 server for fetch integration tests.
//!
//! Each accepted connection consumes the next `Reply` in the script; once the
//! script runs out the last reply repeats. Every connection is closed after
//! one response.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone)]
pub enum Reply {
    /// Status line + Content-Length + body.
    Status(u16, Vec<u8>),
    /// 302 to the given path on the same server.
    Redirect(&'static str),
    /// Close the connection without sending anything.
    Hangup,
}

impl Reply {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Reply::Status(200, body.into())
    }

    pub fn status(code: u16) -> Self {
        Reply::Status(code, format!("error page {}", code).into_bytes())
    }
}

pub struct SheetServer {
    pub url: String,
    base: String,
    hits: Arc<AtomicUsize>,
}

impl SheetServer {
    /// Number of requests served so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base, path.trim_start_matches('/'))
    }
}

/// Starts a server in a background thread. Runs until the process exits.
pub fn start(script: Vec<Reply>) -> SheetServer {
    assert!(!script.is_empty(), "script needs at least one reply");
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let base = format!("http://127.0.0.1:{}/", port);
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_srv = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let n = hits_srv.fetch_add(1, Ordering::SeqCst);
            let reply = script.get(n).unwrap_or_else(|| script.last().unwrap()).clone();
            handle(stream, reply);
        }
    });
    SheetServer {
        url: format!("{}sheet.csv", base),
        base,
        hits,
    }
}

/// A URL on localhost where nothing is listening.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/sheet.csv", port)
}

fn read_request(stream: &mut TcpStream) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let mut seen = Vec::new();
    while !seen.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => seen.extend_from_slice(&buf[..n]),
        }
    }
}

fn handle(mut stream: TcpStream, reply: Reply) {
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    read_request(&mut stream);
    match reply {
        Reply::Hangup => {}
        Reply::Redirect(path) => {
            let response = format!(
                "HTTP/1.1 302 Found\r\nLocation: /{}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                path.trim_start_matches('/')
            );
            let _ = stream.write_all(response.as_bytes());
        }
        Reply::Status(code, body) => {
            let head = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                code,
                reason(code),
                body.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(&body);
        }
    }
}

fn reason(code: u16) -> &'static str {
    match code {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "Status",
    }
}
