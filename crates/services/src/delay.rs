use std::time::Duration;

/// Simulated network latency for the mock backend.
///
/// Mock API round-trips pause for a fixed duration before resolving
/// successfully. Injecting the pause as a value keeps tests
/// synchronous-fast (`NetworkDelay::None`) while the app configures the
/// usual 1.5 s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NetworkDelay {
    /// Resolve immediately.
    #[default]
    None,
    /// Pause for the given duration before resolving.
    Fixed(Duration),
}

impl NetworkDelay {
    /// No pause; the choice for tests.
    #[must_use]
    pub fn none() -> Self {
        Self::None
    }

    /// Pause for the given duration on every simulated call.
    #[must_use]
    pub fn fixed(duration: Duration) -> Self {
        Self::Fixed(duration)
    }

    /// The standard 1.5 s fake round-trip used by the app.
    #[must_use]
    pub fn simulated() -> Self {
        Self::Fixed(Duration::from_millis(1_500))
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, NetworkDelay::None)
    }

    /// Wait out the simulated latency. Always resolves; never fails.
    pub async fn wait(&self) {
        if let NetworkDelay::Fixed(duration) = self {
            tokio::time::sleep(*duration).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn none_resolves_immediately() {
        let delay = NetworkDelay::none();
        assert!(delay.is_none());
        delay.wait().await;
    }

    #[tokio::test(start_paused = true)]
    async fn fixed_waits_the_configured_duration() {
        let delay = NetworkDelay::fixed(Duration::from_millis(1_500));
        let before = tokio::time::Instant::now();
        delay.wait().await;
        assert_eq!(before.elapsed(), Duration::from_millis(1_500));
    }

    #[test]
    fn simulated_is_the_standard_pause() {
        assert_eq!(
            NetworkDelay::simulated(),
            NetworkDelay::Fixed(Duration::from_millis(1_500))
        );
    }
}
