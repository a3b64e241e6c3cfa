#![allow(dead_code)]
// tests/common/fake_api.rs
//! A local stand-in for the results API.

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
};

use tiny_http::{Header, Response, Server, StatusCode};

pub struct FakeApi {
    base_url: String,
    hits: Arc<AtomicUsize>,
}

impl FakeApi {
    /// Serves `routes` keyed by path and query below `/api/f1/`; anything else is a 404.
    pub fn start(routes: HashMap<String, (u16, String)>) -> Self {
        let server = Server::http("127.0.0.1:0").unwrap();
        let port = server.server_addr().to_ip().unwrap().port();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        thread::spawn(move || {
            for request in server.incoming_requests() {
                counter.fetch_add(1, Ordering::SeqCst);
                let key = request.url().trim_start_matches("/api/f1/").to_string();
                let (status, body) = routes.get(&key).cloned().unwrap_or((404, "not found".to_string()));
                let header = Header::from_bytes("Content-Type", "application/json").unwrap();
                let _ = request.respond(Response::from_string(body).with_status_code(StatusCode(status)).with_header(header));
            }
        });

        Self { base_url: format!("http://127.0.0.1:{port}/api/f1"), hits }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}
