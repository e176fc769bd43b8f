use std::sync::Arc;

use crate::model::Scorer;
use crate::scoring::MatchEngine;

#[derive(Debug, Clone)]
pub struct HandlerState {
    pub engine: Arc<MatchEngine>,
}

impl HandlerState {
    pub fn new(engine: MatchEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    pub fn with_scorer(scorer: Arc<dyn Scorer>) -> Self {
        Self::new(MatchEngine::new(scorer))
    }

    /// `"model"` or `"heuristic"`.
    pub fn scorer_name(&self) -> &'static str {
        self.engine.scorer().name()
    }
}
