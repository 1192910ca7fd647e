/*
 * Copyright (c) 2025 the immich-hub Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use immich_hub::{DiagnosticSink, Hub};
use serde_json::{Value, json};
use std::sync::Mutex;
use wiremock::MockServer;

pub const API_KEY: &str = "test-api-key";

pub fn hub_for(server: &MockServer) -> Hub {
    Hub::new(&server.uri(), API_KEY, true).unwrap()
}

/// A hub pointed at a port nothing listens on.
#[allow(dead_code)]
pub fn unreachable_hub() -> Hub {
    Hub::new("http://127.0.0.1:9", API_KEY, true).unwrap()
}

#[allow(dead_code)]
pub fn asset_json(id: &str, kind: &str) -> Value {
    json!({
        "id": id,
        "type": kind,
        "originalFileName": format!("{id}.jpg"),
        "localDateTime": "2024-05-17T10:32:00.000Z",
        "isFavorite": false,
    })
}

/// Collects diagnostic lines so tests can assert on failure-path logging.
#[allow(dead_code)]
#[derive(Default)]
pub struct CaptureSink {
    lines: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl CaptureSink {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl DiagnosticSink for CaptureSink {
    fn error(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_owned());
    }
}
