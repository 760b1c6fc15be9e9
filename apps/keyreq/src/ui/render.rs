use client_core::{AlertState, Severity};

pub const COPY_HINT: &str = "press Enter to copy";

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "info",
        Severity::Success => "success",
        Severity::Warning => "warning",
        Severity::Error => "error",
    }
}

/// One line for the current notice. Neutral notices carry no tag.
pub fn render_alert(alert: &AlertState, acknowledgeable: bool) -> String {
    let mut line = match alert.severity {
        Some(severity) => format!("[{}] {}", severity_label(severity), alert.message),
        None => alert.message.clone(),
    };
    if acknowledgeable {
        line.push_str(&format!(" ({COPY_HINT})"));
    }
    line
}
