/*
 * Copyright (c) 2025 the immich-hub Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use log::error;

/// Destination for the diagnostic line every failure path emits.
///
/// The hub takes the sink at construction instead of writing to a
/// module-level logger, so tests can capture output deterministically.
pub trait DiagnosticSink: Send + Sync {
    /// Record one failure-path diagnostic line.
    fn error(&self, message: &str);
}

/// Default sink; forwards to the `log` facade at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn error(&self, message: &str) {
        error!("{message}");
    }
}
