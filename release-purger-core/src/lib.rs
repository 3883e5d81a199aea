use serde::{Deserialize, Serialize};

pub mod client;
pub mod error;
pub mod purger;
pub mod release;

pub use client::{ClientConfig, GitHubClient, ReleaseApi};
pub use error::PurgeError;
pub use purger::{DraftPurger, PurgeConfig, PurgeEvent};
pub use release::Release;

/// 清理结果统计
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurgeResult {
    pub deleted: Vec<u64>,
    pub failed: Vec<u64>,
    pub skipped: usize,
    /// dry run 时本应删除的草稿
    pub would_delete: Vec<u64>,
    pub duration_ms: u64,
}

impl Default for PurgeResult {
    fn default() -> Self {
        Self::new()
    }
}

impl PurgeResult {
    pub fn new() -> Self {
        Self {
            deleted: Vec::new(),
            failed: Vec::new(),
            skipped: 0,
            would_delete: Vec::new(),
            duration_ms: 0,
        }
    }

    pub fn add_deleted(&mut self, id: u64) {
        self.deleted.push(id);
    }

    pub fn add_failure(&mut self, id: u64) {
        self.failed.push(id);
    }

    pub fn add_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn add_would_delete(&mut self, id: u64) {
        self.would_delete.push(id);
    }

    /// 有删除失败的 release
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}
