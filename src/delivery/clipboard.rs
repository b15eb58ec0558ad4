//! 剪贴板投递
//!
//! 一次尝试、无重试，成功与否只以布尔值告知调用方；
//! 底层平台错误在这里记日志并吞掉，不往外抛。

use arboard::Clipboard;
use tracing::{debug, warn};

use crate::error::DeliveryError;

/// 把组装好的文档写入系统剪贴板
///
/// # 返回
/// 写入是否成功
pub fn copy_to_clipboard(text: &str) -> bool {
    match try_copy(text) {
        Ok(()) => {
            debug!("剪贴板写入成功 ({} 字节)", text.len());
            true
        }
        Err(e) => {
            warn!("剪贴板写入失败: {}", e);
            false
        }
    }
}

fn try_copy(text: &str) -> Result<(), DeliveryError> {
    let mut clipboard =
        Clipboard::new().map_err(|e| DeliveryError::ClipboardUnavailable(e.to_string()))?;

    clipboard
        .set_text(text)
        .map_err(|e| DeliveryError::ClipboardWriteFailed(e.to_string()))?;

    Ok(())
}
