use thiserror::Error;

/// 清理过程中的致命错误
///
/// 单个 release 删除失败不属于这里，它通过 `PurgeEvent` 上报且不会中断扫描。
#[derive(Debug, Error)]
pub enum PurgeError {
    /// 列出 releases 时返回了非 200 状态码
    #[error("Getting releases data failed, HTTP status code: {status}")]
    ListingFailed { status: u16 },

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decode releases listing")]
    Decode {
        #[source]
        source: reqwest::Error,
    },

    /// token 含有不能放进 HTTP 头的字符
    #[error("OAuth token is not a valid header value")]
    InvalidToken,

    #[error("failed to build HTTP client")]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },
}

impl PurgeError {
    /// 错误信息连同全部 source，用 `: ` 连接
    pub fn chain_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }

    #[cfg(test)]
    pub(crate) fn transport_for_test(id: u64) -> Self {
        let source = reqwest::Client::new()
            .get("not a url")
            .build()
            .expect_err("relative URL must be rejected");
        PurgeError::Transport {
            url: format!("unreachable/{id}"),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PurgeError>;
