use std::sync::{Mutex, Once};
use std::thread::ThreadId;

use log::{Level, LevelFilter, Log, Metadata, Record};

static CAPTURE: TraceCapture = TraceCapture {
    records: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

/// A single log record as seen by [`TraceCapture`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    pub thread: ThreadId,
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// In-memory `log` backend for asserting on emitted traces.
pub struct TraceCapture {
    records: Mutex<Vec<CapturedRecord>>,
}

impl TraceCapture {
    /// Installs the capture as the global logger (once per process) and returns it.
    ///
    /// If some other logger was installed first, records will not reach the capture and
    /// every query returns an empty list.
    pub fn install() -> &'static TraceCapture {
        INIT.call_once(|| {
            if log::set_logger(&CAPTURE).is_ok() {
                log::set_max_level(LevelFilter::Trace);
            }
        });
        &CAPTURE
    }

    /// Records emitted by the current thread, oldest first.
    pub fn records(&self) -> Vec<CapturedRecord> {
        let current = std::thread::current().id();
        self.lock()
            .iter()
            .filter(|r| r.thread == current)
            .cloned()
            .collect()
    }

    /// Messages emitted by the current thread at `level`, oldest first.
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|r| r.level == level)
            .map(|r| r.message)
            .collect()
    }

    /// Drops the records emitted by the current thread.
    pub fn clear(&self) {
        let current = std::thread::current().id();
        self.lock().retain(|r| r.thread != current);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<CapturedRecord>> {
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Log for TraceCapture {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let captured = CapturedRecord {
            thread: std::thread::current().id(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        self.lock().push(captured);
    }

    fn flush(&self) {}
}
