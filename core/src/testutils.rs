// Shelter
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Logging utilities for tests.
//!
//! Tests must call `setup_logging` instead of initializing `env_logger` themselves.  The installed
//! logger forwards every record to `env_logger` and also keeps a copy of it in the thread that
//! emitted it, so that a test can inspect what the code under test logged.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;

thread_local! {
    /// Records logged by the current thread since the last call to `take_log_records`.
    static RECORDS: RefCell<Vec<LogRecord>> = const { RefCell::new(vec![]) };
}

/// A log record as captured during a test.
#[derive(Debug, PartialEq)]
pub struct LogRecord {
    /// Severity of the record.
    pub level: Level,

    /// Formatted message of the record.
    pub message: String,
}

/// Logger that captures records before handing them to `env_logger`.
struct CapturingLogger {
    /// Logger that prints records as configured by `RUST_LOG`.
    inner: env_logger::Logger,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records.borrow_mut().push(LogRecord {
                level: record.level(),
                message: record.args().to_string(),
            })
        });
        self.inner.log(record);
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

/// Installs the capturing logger for the whole test program.  Can be called multiple times.
pub fn setup_logging() {
    let inner = env_logger::builder().is_test(true).build();
    if log::set_boxed_logger(Box::new(CapturingLogger { inner })).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
}

/// Returns the records logged by the current thread and forgets about them.
///
/// Async tests must run on a single-threaded runtime, which is what `#[tokio::test]` uses by
/// default, for all records of the test to land in the same thread.
pub fn take_log_records() -> Vec<LogRecord> {
    RECORDS.with(|records| records.take())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{info, warn};

    #[test]
    fn test_take_log_records() {
        setup_logging();
        take_log_records();

        info!("First {}", 1);
        warn!("Second");
        assert_eq!(
            vec![
                LogRecord { level: Level::Info, message: "First 1".to_owned() },
                LogRecord { level: Level::Warn, message: "Second".to_owned() },
            ],
            take_log_records()
        );
        assert!(take_log_records().is_empty());
    }
}
