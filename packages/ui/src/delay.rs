//! Platform-aware sleep for the simulated processing delay.

use std::time::Duration;

/// Sleep on the browser event loop (wasm) or the tokio timer (native).
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{Completion, FormController};
    use store::{MemoryStore, UserDirectory};

    #[tokio::test]
    async fn test_submission_completes_after_delay() {
        let mut controller = FormController::new(
            UserDirectory::new(MemoryStore::new()),
            Duration::from_millis(10),
        );
        controller.set_name("Alice".to_string());
        controller.set_age("20".to_string());
        controller.set_password("secret1".to_string());

        let submission = controller.submit().unwrap();
        let started = std::time::Instant::now();
        sleep(controller.latency()).await;
        assert!(started.elapsed() >= Duration::from_millis(10));

        let completion = controller.complete(submission);
        assert!(matches!(completion, Completion::Registered(_)));
    }
}
