use std::{
    io::{self, BufRead},
    path::PathBuf,
    sync::Arc,
    thread,
};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::IssuanceClient;
use crossbeam_channel::{bounded, unbounded, Sender};
use tracing_subscriber::EnvFilter;

mod backend_bridge;
mod clipboard;
mod config;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use clipboard::SystemClipboard;
use config::{load_settings, Settings};
use controller::events::UiEvent;
use ui::KeyRequestApp;

#[derive(Parser, Debug)]
#[command(name = "keyreq", about = "Request an API key for an email address")]
struct Args {
    /// Server root, e.g. https://keys.example.com
    #[arg(long)]
    server_url: Option<String>,
    /// Config file (defaults to ./keyreq.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Submit this address as soon as the session starts
    #[arg(long)]
    email: Option<String>,
    /// Print the API documentation link and exit
    #[arg(long)]
    docs: bool,
}

fn build_client(settings: &Settings) -> Result<IssuanceClient> {
    let client = match settings.request_timeout() {
        Some(timeout) => IssuanceClient::with_timeout(&settings.server_url, timeout),
        None => IssuanceClient::new(&settings.server_url),
    };
    client.with_context(|| format!("cannot use server url '{}'", settings.server_url))
}

fn spawn_stdin_reader(input_tx: Sender<String>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if input_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    tracing::warn!("stdin read failed: {err}");
                    break;
                }
            }
        }
    });
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let client = build_client(&settings)?;
    if args.docs {
        println!("{}", client.docs_url());
        return Ok(());
    }
    tracing::info!(endpoint = %client.endpoint(), "keyreq starting");

    let docs_url = client.docs_url().clone();
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    let worker = backend_bridge::runtime::launch(Arc::new(client), cmd_rx, ui_tx);

    let (input_tx, input_rx) = unbounded::<String>();
    spawn_stdin_reader(input_tx);

    let mut app = KeyRequestApp::new(
        cmd_tx,
        ui_rx,
        Box::new(SystemClipboard::default()),
        docs_url,
        io::stdout(),
    );
    if let Some(email) = args.email {
        app.handle_input(&email)?;
    }
    app.run(input_rx)?;
    drop(app);

    if worker.join().is_err() {
        tracing::error!("backend worker panicked");
    }
    Ok(())
}
