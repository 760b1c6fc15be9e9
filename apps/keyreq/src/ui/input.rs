//! Host-side handling of a typed line, standing in for a form control.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Submit(String),
    /// Failed the control's own validation; never reaches the network.
    Rejected,
    Acknowledge,
    Dismiss,
    Docs,
    Help,
    Quit,
}

pub fn parse_input(line: &str, acknowledgeable: bool) -> InputAction {
    let line = line.trim();
    match line {
        "" if acknowledgeable => InputAction::Acknowledge,
        ":copy" | ":c" => InputAction::Acknowledge,
        ":dismiss" | ":d" => InputAction::Dismiss,
        ":docs" => InputAction::Docs,
        ":help" | ":h" | "?" => InputAction::Help,
        ":quit" | ":q" => InputAction::Quit,
        email if is_plausible_email(email) => InputAction::Submit(email.to_string()),
        _ => InputAction::Rejected,
    }
}

/// Required field, one `@` with something on both sides, no whitespace.
pub fn is_plausible_email(input: &str) -> bool {
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !input.chars().any(char::is_whitespace)
}
