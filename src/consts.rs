pub mod dashboard {
    //! Dashboard Configuration Constants
    //!
    //! Defaults for the refresh lifecycle and the UI loop. Config file values
    //! and CLI flags override the refresh settings.

    use std::time::Duration;

    // =============================================================================
    // REFRESH CONFIGURATION
    // =============================================================================

    /// Interval between scheduled acquisitions (seconds)
    pub const REFRESH_PERIOD_SECS: u64 = 30;

    /// Simulated latency of the fixture quote source (milliseconds)
    pub const SIMULATED_LATENCY_MS: u64 = 1000;

    /// Helper function to get the default refresh period
    pub const fn refresh_period() -> Duration {
        Duration::from_secs(REFRESH_PERIOD_SECS)
    }

    /// Helper function to get the default simulated latency
    pub const fn simulated_latency() -> Duration {
        Duration::from_millis(SIMULATED_LATENCY_MS)
    }

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// Capacity of the channel between the refresh task and the view.
    pub const REFRESH_QUEUE_SIZE: usize = 16;

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// How long the splash screen stays up unless a key is pressed
    pub const SPLASH_DURATION: Duration = Duration::from_secs(2);

    /// Key polling timeout for the UI loop (milliseconds)
    pub const UI_POLL_INTERVAL_MS: u64 = 100;
}
