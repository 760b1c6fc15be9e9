//! Runtime bridge between UI command queue and backend event intake.

use std::{
    sync::Arc,
    thread::{self, JoinHandle},
};

use client_core::KeyIssuer;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Starts the backend worker thread. It owns a tokio runtime and runs every
/// request as its own task, so overlapping submissions proceed independently.
/// The worker exits once every command sender is dropped.
pub fn launch(
    issuer: Arc<dyn KeyIssuer>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            tracing::debug!("backend worker ready");
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::RequestApiKey { email } => {
                        let issuer = Arc::clone(&issuer);
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            let outcome = issuer.request(&email).await;
                            if ui_tx
                                .send(UiEvent::IssuanceCompleted { email, outcome })
                                .is_err()
                            {
                                tracing::debug!("ui loop gone; dropping issuance outcome");
                            }
                        });
                    }
                }
            }
            tracing::debug!("backend command queue closed");
        });
    })
}
