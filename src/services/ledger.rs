//! Task Ledger
//!
//! Interface to an external task board. The chat layer mirrors each
//! handled request onto a board entry and advances its status as the
//! request progresses; the backing board (kanban service, issue tracker)
//! is injected as a trait object.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use nebula_core::CoreResult;

/// Lifecycle states of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerStatus {
    Todo,
    Blocked,
    InProgress,
    Done,
}

/// A task-board entry mirroring one handled request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: Uuid,
    pub title: String,
    pub status: LedgerStatus,
    pub created_at: DateTime<Utc>,
}

impl LedgerEntry {
    /// A fresh entry in `Todo` with a generated id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            status: LedgerStatus::Todo,
            created_at: Utc::now(),
        }
    }
}

/// Records handled requests on an external task board.
#[async_trait]
pub trait TaskLedger: Send + Sync {
    /// Record `message` as a new entry on `board_id`.
    async fn record(&self, board_id: &str, message: &str) -> CoreResult<LedgerEntry>;

    /// Move the entry `id` on `board_id` to `status`.
    async fn set_status(&self, board_id: &str, id: Uuid, status: LedgerStatus) -> CoreResult<()>;
}
