use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::debug;

use crate::error::{PurgeError, Result};
use crate::release::Release;

/// 默认的 GitHub API 地址
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const GITHUB_JSON: &str = "application/vnd.github+json";

/// GitHub 客户端配置
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    /// 单次请求超时（秒），0 表示不限制
    pub timeout_seconds: u64,
    pub user_agent: String,
    /// 是否使用系统代理（`HTTPS_PROXY` 等环境变量）
    pub use_system_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: 30,
            user_agent: concat!("release-purger/", env!("CARGO_PKG_VERSION")).to_string(),
            use_system_proxy: true,
        }
    }
}

/// releases 接口的抽象
#[async_trait]
pub trait ReleaseApi {
    /// 读取 releases 列表（只取第一页）
    async fn list_releases(&self) -> Result<Vec<Release>>;

    /// 删除指定 release，返回 HTTP 状态码
    async fn delete_release(&self, id: u64) -> Result<u16>;
}

/// 基于 reqwest 的 GitHub releases 客户端
#[derive(Debug)]
pub struct GitHubClient {
    http: reqwest::Client,
    releases_url: String,
    authorization: HeaderValue,
}

impl GitHubClient {
    /// 为 `owner/name` 仓库创建客户端
    ///
    /// slug 不做格式校验，格式错误只会表现为 API 返回的状态码。
    pub fn new(slug: &str, token: &SecretString, config: &ClientConfig) -> Result<Self> {
        let mut authorization = HeaderValue::from_str(&format!("token {}", token.expose_secret()))
            .map_err(|_| PurgeError::InvalidToken)?;
        authorization.set_sensitive(true);

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if config.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_seconds));
        }
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let http = builder
            .build()
            .map_err(|source| PurgeError::ClientBuild { source })?;

        let releases_url = format!(
            "{}/repos/{}/releases",
            config.api_url.trim_end_matches('/'),
            slug
        );

        Ok(Self {
            http,
            releases_url,
            authorization,
        })
    }

    pub fn releases_url(&self) -> &str {
        &self.releases_url
    }

    pub fn release_url(&self, id: u64) -> String {
        format!("{}/{}", self.releases_url, id)
    }

    async fn send(&self, request: reqwest::RequestBuilder, url: &str) -> Result<reqwest::Response> {
        request
            .header(AUTHORIZATION, self.authorization.clone())
            .header(ACCEPT, GITHUB_JSON)
            .send()
            .await
            .map_err(|source| PurgeError::Transport {
                url: url.to_string(),
                source,
            })
    }
}

#[async_trait]
impl ReleaseApi for GitHubClient {
    async fn list_releases(&self) -> Result<Vec<Release>> {
        debug!("GET {}", self.releases_url);
        let response = self
            .send(self.http.get(&self.releases_url), &self.releases_url)
            .await?;

        let status = response.status();
        debug!("releases listing returned {}", status);
        if status != StatusCode::OK {
            return Err(PurgeError::ListingFailed {
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<Release>>()
            .await
            .map_err(|source| PurgeError::Decode { source })
    }

    async fn delete_release(&self, id: u64) -> Result<u16> {
        let url = self.release_url(id);
        debug!("DELETE {}", url);
        let response = self.send(self.http.delete(&url), &url).await?;

        let status = response.status().as_u16();
        debug!("delete of release {} returned {}", id, status);
        Ok(status)
    }
}
