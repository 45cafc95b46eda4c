use tokio::sync::watch;

#[cfg(unix)]
use tokio::signal::unix::{Signal, SignalKind, signal};

pub(crate) type StopSender = watch::Sender<bool>;

/// What the call loop races each `execute` against: `true` sent on the
/// paired [`StopSender`], Ctrl+C, or SIGTERM on unix.
///
/// Signal handlers are registered up front so a signal arriving between two
/// calls is still seen by the next [`stopped`](Self::stopped).
#[derive(Debug)]
pub(crate) struct StopSignal {
    requested: watch::Receiver<bool>,
    #[cfg(unix)]
    interrupt: Option<Signal>,
    #[cfg(unix)]
    terminate: Option<Signal>,
}

/// Must be called inside a tokio runtime.
pub(crate) fn stop_channel() -> (StopSender, StopSignal) {
    let (stop_tx, requested) = watch::channel(false);
    let stop = StopSignal {
        requested,
        #[cfg(unix)]
        interrupt: register(SignalKind::interrupt()),
        #[cfg(unix)]
        terminate: register(SignalKind::terminate()),
    };
    (stop_tx, stop)
}

#[cfg(unix)]
fn register(kind: SignalKind) -> Option<Signal> {
    signal(kind)
        .inspect_err(|err| tracing::warn!("Failed to register {:?} handler: {}", kind, err))
        .ok()
}

impl StopSignal {
    /// Resolves once a stop is requested. Dropping the sender without
    /// requesting one leaves only the OS signals.
    pub(crate) async fn stopped(&mut self) {
        #[cfg(unix)]
        tokio::select! {
            () = requested(&mut self.requested) => {}
            () = next_signal(self.interrupt.as_mut()) => {}
            () = next_signal(self.terminate.as_mut()) => {}
        }

        #[cfg(not(unix))]
        tokio::select! {
            () = requested(&mut self.requested) => {}
            _ = tokio::signal::ctrl_c() => {}
        }
    }
}

async fn requested(rx: &mut watch::Receiver<bool>) {
    if rx.wait_for(|stop| *stop).await.is_err() {
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn next_signal(signal: Option<&mut Signal>) {
    match signal {
        Some(signal) => {
            signal.recv().await;
        }
        None => std::future::pending::<()>().await,
    }
}
