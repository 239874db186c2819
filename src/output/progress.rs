//! Spinner shown while a request is in flight

use std::future::Future;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Create a spinner for an API call, or `None` when output is not interactive.
pub fn spinner(message: &str, enabled: bool) -> Option<ProgressBar> {
    if !enabled {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    Some(pb)
}

/// Clear a spinner created by [`spinner`].
pub fn finish(pb: Option<ProgressBar>) {
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
}

/// Await `future` with a spinner running when `enabled`.
pub async fn track<F: Future>(message: &str, enabled: bool, future: F) -> F::Output {
    let pb = spinner(message, enabled);
    let output = future.await;
    finish(pb);
    output
}
