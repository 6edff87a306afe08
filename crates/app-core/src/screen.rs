//! Screen data state
//!
//! Screens fetch their numbers before building page sections. This module
//! holds the fetch-then-set cycle: a [`DataSource`] produces data, and a
//! [`ScreenState`] tracks loading, pull-to-refresh, the last good data and
//! the last failure. Nothing here renders; the UI layer reads the state and
//! rebuilds its sections on every pass.

use crate::error::{CoreError, Result};
use async_trait::async_trait;

/// Source of a screen's data (an API call, a store selector, a fixture)
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Data produced by a successful fetch
    type Data: Clone + Send + Sync;

    /// Fetch fresh data
    async fn fetch(&self) -> Result<Self::Data>;

    /// Name used in log output
    fn name(&self) -> String {
        "screen".to_string()
    }
}

/// Loading and refresh state of one screen
#[derive(Debug, Clone)]
pub struct ScreenState<T> {
    data: Option<T>,
    is_loading: bool,
    refreshing: bool,
    last_error: Option<String>,
}

impl<T> Default for ScreenState<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: true,
            refreshing: false,
            last_error: None,
        }
    }
}

impl<T: Clone + Send + Sync> ScreenState<T> {
    /// Create a state that has not loaded yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch from `source` and store the result
    ///
    /// A failed fetch keeps whatever data was there before.
    pub async fn load<S>(&mut self, source: &S) -> Result<()>
    where
        S: DataSource<Data = T> + ?Sized,
    {
        let outcome = source.fetch().await;
        self.is_loading = false;

        match outcome {
            Ok(data) => {
                self.data = Some(data);
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", source.name(), e);
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Pull-to-refresh: reload while `refreshing` is set
    pub async fn refresh<S>(&mut self, source: &S) -> Result<()>
    where
        S: DataSource<Data = T> + ?Sized,
    {
        self.refreshing = true;
        let result = self.load(source).await;
        self.refreshing = false;
        result
    }

    /// True until the first load finishes
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// True while a refresh is in flight
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Last loaded data, if any
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Last loaded data, or [`CoreError::NotLoaded`]
    pub fn require(&self) -> Result<&T> {
        self.data.as_ref().ok_or(CoreError::NotLoaded)
    }

    /// Message of the most recent failed load
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use std::sync::atomic::{AtomicU32, Ordering};

    mock! {
        pub WeeklySource {}

        #[async_trait]
        impl DataSource for WeeklySource {
            type Data = u32;
            async fn fetch(&self) -> Result<u32>;
            fn name(&self) -> String;
        }
    }

    struct CountingSource {
        calls: AtomicU32,
    }

    #[async_trait]
    impl DataSource for CountingSource {
        type Data = u32;

        async fn fetch(&self) -> Result<u32> {
            Ok(self.calls.fetch_add(1, Ordering::SeqCst) + 1)
        }
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_new_state_is_loading() {
        let state: ScreenState<u32> = ScreenState::new();
        assert!(state.is_loading());
        assert!(!state.is_refreshing());
        assert!(state.data().is_none());
        assert!(matches!(state.require(), Err(CoreError::NotLoaded)));
    }

    #[tokio::test]
    async fn test_load_sets_data() {
        let source = CountingSource {
            calls: AtomicU32::new(0),
        };
        let mut state = ScreenState::new();

        state.load(&source).await.unwrap();

        assert!(!state.is_loading());
        assert_eq!(state.data(), Some(&1));
        assert_eq!(*state.require().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_refresh_reloads() {
        let source = CountingSource {
            calls: AtomicU32::new(0),
        };
        let mut state = ScreenState::new();

        state.load(&source).await.unwrap();
        state.refresh(&source).await.unwrap();

        assert_eq!(state.data(), Some(&2));
        assert!(!state.is_refreshing());
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_data() {
        init_tracing();
        let mut source = MockWeeklySource::new();
        let mut seq = mockall::Sequence::new();
        source
            .expect_fetch()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(1800));
        source
            .expect_fetch()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Err(CoreError::Source("offline".to_string())));
        source.expect_name().return_const("statistics".to_string());

        let mut state = ScreenState::new();
        state.load(&source).await.unwrap();
        let result = state.refresh(&source).await;

        assert!(result.is_err());
        assert_eq!(state.data(), Some(&1800));
        assert!(!state.is_refreshing());
        assert_eq!(state.last_error(), Some("Data source error: offline"));
    }

    #[tokio::test]
    async fn test_failed_first_load_clears_loading() {
        let mut source = MockWeeklySource::new();
        source
            .expect_fetch()
            .returning(|| Err(CoreError::Source("timeout".to_string())));
        source.expect_name().return_const("home".to_string());

        let mut state: ScreenState<u32> = ScreenState::new();
        assert!(state.load(&source).await.is_err());

        assert!(!state.is_loading());
        assert!(state.data().is_none());
    }
}
