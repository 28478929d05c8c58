use log::Level;
use serde_json::Value;

/// Receives structured facts, one per stage of a read.
pub trait FactsEmitter {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value);
}

/// Receives human-readable audit lines.
pub trait AuditSink {
    fn log(&self, level: Level, msg: &str);
}

/// Discards everything. Default sink when the caller does not care about facts.
#[derive(Default)]
pub struct JsonlSink;

impl FactsEmitter for JsonlSink {
    fn emit(&self, _subsystem: &str, _event: &str, _decision: &str, _fields: Value) {}
}

impl AuditSink for JsonlSink {
    fn log(&self, _level: Level, _msg: &str) {}
}

/// Forwards audit lines to the `log` facade under the `dirread` target.
#[derive(Default, Clone, Copy)]
pub struct LogSink;

impl AuditSink for LogSink {
    fn log(&self, level: Level, msg: &str) {
        log::log!(target: crate::constants::SUBSYSTEM, level, "{msg}");
    }
}

impl FactsEmitter for LogSink {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value) {
        log::debug!(target: crate::constants::SUBSYSTEM, "{subsystem} {event} {decision} {fields}");
    }
}
