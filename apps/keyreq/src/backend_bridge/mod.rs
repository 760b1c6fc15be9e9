//! Backend worker: runs issuance requests off the UI thread.

pub mod commands;
pub mod runtime;
