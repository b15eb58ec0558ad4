//! 错误类型
//!
//! 组装层是纯函数不产生错误，文件加载直接走 anyhow；
//! 这里只定义投递层的错误类型。它也不会穿出投递边界：
//! 剪贴板失败对调用方只表现为布尔结果，远程提交失败只记日志。

/// 导出投递错误
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// 无法访问系统剪贴板
    #[error("无法访问剪贴板: {0}")]
    ClipboardUnavailable(String),
    /// 写入剪贴板失败
    #[error("写入剪贴板失败: {0}")]
    ClipboardWriteFailed(String),
    /// 远程提交请求失败
    #[error("远程提交失败 ({url}): {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
