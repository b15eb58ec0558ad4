//! 远程编辑器提交
//!
//! 向 Overleaf 的文档导入端点 POST 一个表单。一次性、不可撤销、
//! 没有回执：响应体不读取（浏览器场景下由新标签页接管），
//! 请求失败只记日志，引擎感知不到远程侧的成败。

use tracing::{debug, info, warn};

use crate::error::DeliveryError;

/// 提交表单字段到远程编辑器
///
/// 发出即完成，不读响应体，失败在这里吞掉
pub async fn submit_form(client: &reqwest::Client, url: &str, fields: &[(String, String)]) {
    match try_submit(client, url, fields).await {
        Ok(status) => {
            info!("✓ 远程提交已发出 (HTTP {})", status);
        }
        Err(e) => {
            warn!("⚠️ 远程提交失败: {}", e);
        }
    }
}

async fn try_submit(
    client: &reqwest::Client,
    url: &str,
    fields: &[(String, String)],
) -> Result<u16, DeliveryError> {
    let field_names: Vec<&str> = fields.iter().map(|(name, _)| name.as_str()).collect();
    debug!(
        "提交表单字段: {}",
        serde_json::to_string(&field_names).unwrap_or_default()
    );

    let response = client
        .post(url)
        .form(fields)
        .send()
        .await
        .map_err(|source| DeliveryError::RequestFailed {
            url: url.to_string(),
            source,
        })?;

    // 响应内容不属于本引擎的协议，只留状态码做日志
    Ok(response.status().as_u16())
}
