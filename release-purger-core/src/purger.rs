use std::time::Instant;
use tracing::{debug, info, warn};

use crate::PurgeResult;
use crate::client::ReleaseApi;
use crate::error::Result;
use crate::release::Release;

/// 删除成功时 GitHub 返回的状态码
pub const DELETED_STATUS: u16 = 204;

/// 清理器配置
#[derive(Debug, Clone, Default)]
pub struct PurgeConfig {
    /// 只报告将要删除的 release，不发出删除请求
    pub dry_run: bool,
}

/// 扫描过程中逐条上报的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurgeEvent {
    /// 列表为空
    NoReleases,
    /// 即将删除某个草稿
    Deleting { id: u64 },
    Deleted { id: u64 },
    /// 删除请求返回了 204 以外的状态码
    DeleteFailed { id: u64, status: u16 },
    /// 删除请求没有拿到响应
    DeleteErrored { id: u64, message: String },
    /// dry run 模式下本应删除的草稿
    DryRun { id: u64 },
    /// 非草稿，跳过
    Skipped { id: u64, name: String },
}

/// 草稿 release 清理器
pub struct DraftPurger<A> {
    api: A,
    config: PurgeConfig,
}

impl<A: ReleaseApi> DraftPurger<A> {
    pub fn new(api: A, config: PurgeConfig) -> Self {
        Self { api, config }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// 列出并删除全部草稿
    pub async fn purge(&self) -> Result<PurgeResult> {
        self.purge_with_progress(|_| {}).await
    }

    /// 列出并删除全部草稿（带进度回调）
    ///
    /// 列表请求失败时直接返回错误，不会发出任何删除请求。单个删除失败只上报，
    /// 扫描继续处理后面的 release。
    pub async fn purge_with_progress<F>(&self, mut progress_callback: F) -> Result<PurgeResult>
    where
        F: FnMut(PurgeEvent),
    {
        let start_time = Instant::now();
        let releases = self.api.list_releases().await?;

        info!("获取到 {} 个 release", releases.len());
        if releases.is_empty() {
            progress_callback(PurgeEvent::NoReleases);
        }

        let mut result = PurgeResult::new();
        for release in &releases {
            self.process_release(release, &mut progress_callback, &mut result)
                .await;
        }

        result.duration_ms = start_time.elapsed().as_millis() as u64;

        info!(
            "清理完成: 删除 {} 个，失败 {} 个，跳过 {} 个，待删除 {} 个，耗时 {}ms",
            result.deleted.len(),
            result.failed.len(),
            result.skipped,
            result.would_delete.len(),
            result.duration_ms
        );

        Ok(result)
    }

    async fn process_release<F>(
        &self,
        release: &Release,
        progress_callback: &mut F,
        result: &mut PurgeResult,
    ) where
        F: FnMut(PurgeEvent),
    {
        if !release.is_draft() {
            debug!("release {} 不是草稿，跳过", release.id);
            result.add_skipped();
            progress_callback(PurgeEvent::Skipped {
                id: release.id,
                name: release.display_name().to_string(),
            });
            return;
        }

        if self.config.dry_run {
            info!("DRY RUN: 将删除草稿 release {}", release.id);
            result.add_would_delete(release.id);
            progress_callback(PurgeEvent::DryRun { id: release.id });
            return;
        }

        progress_callback(PurgeEvent::Deleting { id: release.id });

        match self.api.delete_release(release.id).await {
            Ok(DELETED_STATUS) => {
                result.add_deleted(release.id);
                progress_callback(PurgeEvent::Deleted { id: release.id });
            }
            Ok(status) => {
                warn!("删除 release {} 失败，状态码 {}", release.id, status);
                result.add_failure(release.id);
                progress_callback(PurgeEvent::DeleteFailed {
                    id: release.id,
                    status,
                });
            }
            Err(e) => {
                let message = e.chain_message();
                warn!("删除 release {} 失败: {}", release.id, message);
                result.add_failure(release.id);
                progress_callback(PurgeEvent::DeleteErrored {
                    id: release.id,
                    message,
                });
            }
        }
    }
}
