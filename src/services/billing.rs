//! Credit Gate
//!
//! Authorization boundary for billable actions. The agent consults the
//! gate before spending external generation credits; the backing
//! implementation (billing service, quota store) lives with the caller
//! and is injected as a trait object.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use nebula_core::CoreResult;

/// Billable actions a user can be charged for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    GenerateGherkin,
    RunTest,
    AnalyzeScreen,
    CreateScenario,
    ExportReport,
}

/// Outcome of an authorization check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateDecision {
    /// Whether the action may proceed
    pub allowed: bool,
    /// Human-readable reason when denied
    pub reason: Option<String>,
    /// Credits left on the account after the check
    pub credits_remaining: i64,
}

impl GateDecision {
    /// An allowing decision with the given balance.
    pub fn allow(credits_remaining: i64) -> Self {
        Self {
            allowed: true,
            reason: None,
            credits_remaining,
        }
    }

    /// A denying decision with a reason and the current balance.
    pub fn deny(reason: impl Into<String>, credits_remaining: i64) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
            credits_remaining,
        }
    }
}

/// Authorizes billable actions against a user's credit balance.
#[async_trait]
pub trait CreditGate: Send + Sync {
    /// Check whether `user_id` may perform `action`, debiting as the
    /// implementation sees fit.
    async fn authorize(&self, user_id: &str, action: ActionKind) -> CoreResult<GateDecision>;
}
