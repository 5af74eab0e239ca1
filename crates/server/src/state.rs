//! State threaded through every handler.

use std::sync::Arc;

use loan_advisor_agent::ConversationEngine;
use loan_advisor_config::Settings;
use loan_advisor_core::ProductCatalog;

/// Handler state, cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    /// Resolved service settings
    pub settings: Arc<Settings>,
    /// Conversation engine shared by all requests
    pub engine: Arc<ConversationEngine>,
    /// Loan product catalog backing the listing endpoint
    pub catalog: Arc<ProductCatalog>,
}

impl AppState {
    pub fn new(settings: Settings, engine: ConversationEngine, catalog: Arc<ProductCatalog>) -> Self {
        Self {
            settings: Arc::new(settings),
            engine: Arc::new(engine),
            catalog,
        }
    }
}
