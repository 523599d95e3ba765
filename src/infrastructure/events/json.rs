//! JSON Event Sink
//!
//! Outputs compile events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{CompileEvent, CompileEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// NDJSON representation of one event
pub fn event_json(event: &CompileEvent) -> serde_json::Value {
    match event {
        CompileEvent::Started {
            source,
            unit_count,
            targets,
        } => serde_json::json!({
            "event": "start",
            "command": "compile",
            "source": source.display().to_string(),
            "unit_count": unit_count,
            "targets": targets,
        }),

        CompileEvent::FileWritten {
            target,
            path,
            units,
            status,
        } => serde_json::json!({
            "event": "unit",
            "command": "compile",
            "target": target,
            "path": path.display().to_string(),
            "units": units,
            "status": status.as_str(),
        }),

        CompileEvent::TargetCompleted {
            target,
            format,
            file_count,
            error: None,
        } => serde_json::json!({
            "event": "target",
            "command": "compile",
            "target": target,
            "format": format,
            "success": true,
            "file_count": file_count,
        }),

        CompileEvent::TargetCompleted {
            target,
            format,
            error: Some((code, message)),
            ..
        } => serde_json::json!({
            "event": "error",
            "command": "compile",
            "target": target,
            "format": format,
            "code": code,
            "message": message,
        }),

        CompileEvent::Completed {
            written,
            unchanged,
            failed_targets,
        } => serde_json::json!({
            "event": "complete",
            "command": "compile",
            "success": *failed_targets == 0,
            "written": written,
            "unchanged": unchanged,
            "failed_targets": failed_targets,
        }),
    }
}

impl CompileEventSink for JsonEventSink {
    fn on_event(&self, event: CompileEvent) {
        self.write_event(event_json(&event));
    }
}
