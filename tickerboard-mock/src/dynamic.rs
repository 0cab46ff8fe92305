use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use tickerboard_core::connector::{BoardConnector, HistoryProvider, ProfileProvider};
use tickerboard_core::{
    BoardError, Capability, HistoryRequest, PriceSeries, ProfileSnapshot, Symbol,
};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(BoardError),
    /// Hang indefinitely (simulate a stalled provider).
    Hang,
}

/// One recorded provider call, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    /// Which capability was invoked.
    pub capability: Capability,
    /// Symbol passed to the call.
    pub symbol: Symbol,
}

#[derive(Default)]
struct InternalState {
    history_rules: HashMap<Symbol, MockBehavior<PriceSeries>>,
    profile_rules: HashMap<Symbol, MockBehavior<ProfileSnapshot>>,
    calls: Vec<MockCall>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `history` calls for a specific symbol.
    pub async fn set_history_behavior(&self, symbol: Symbol, behavior: MockBehavior<PriceSeries>) {
        let mut guard = self.state.lock().await;
        guard.history_rules.insert(symbol, behavior);
    }

    /// Set the behavior for `profile` calls for a specific symbol.
    pub async fn set_profile_behavior(
        &self,
        symbol: Symbol,
        behavior: MockBehavior<ProfileSnapshot>,
    ) {
        let mut guard = self.state.lock().await;
        guard.profile_rules.insert(symbol, behavior);
    }

    /// Return a copy of the call log.
    pub async fn calls(&self) -> Vec<MockCall> {
        self.state.lock().await.calls.clone()
    }

    /// Clear all configured behaviors and the call log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.history_rules.clear();
        guard.profile_rules.clear();
        guard.calls.clear();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Symbols without a configured rule fail with `NotFound`.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn BoardConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn BoardConnector>, controller)
    }

    async fn resolve<T: Clone>(
        &self,
        capability: Capability,
        symbol: &Symbol,
        pick: impl FnOnce(&InternalState) -> Option<MockBehavior<T>>,
    ) -> Result<T, BoardError> {
        // Snapshot the rule so the lock is not held across the hang.
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.calls.push(MockCall {
                capability,
                symbol: symbol.clone(),
            });
            pick(&*guard)
        };

        match behavior {
            Some(MockBehavior::Return(v)) => Ok(v),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(BoardError::not_found(format!("{capability} for {symbol}"))),
        }
    }
}

#[async_trait]
impl BoardConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }

    fn as_profile_provider(&self) -> Option<&dyn ProfileProvider> {
        Some(self as &dyn ProfileProvider)
    }
}

#[async_trait]
impl HistoryProvider for DynamicMockConnector {
    async fn history(
        &self,
        symbol: &Symbol,
        _req: HistoryRequest,
    ) -> Result<PriceSeries, BoardError> {
        self.resolve(Capability::History, symbol, |s| {
            s.history_rules.get(symbol).cloned()
        })
        .await
    }
}

#[async_trait]
impl ProfileProvider for DynamicMockConnector {
    async fn profile(&self, symbol: &Symbol) -> Result<ProfileSnapshot, BoardError> {
        self.resolve(Capability::Profile, symbol, |s| {
            s.profile_rules.get(symbol).cloned()
        })
        .await
    }
}
