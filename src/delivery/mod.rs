//! 投递通道
//!
//! 纯的载荷构造（可脱离网络/剪贴板单测）和两个副作用实现分开：
//! `clipboard` 写系统剪贴板，`overleaf` 向远程编辑器提交表单。

pub mod clipboard;
pub mod overleaf;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

pub use clipboard::copy_to_clipboard;
pub use overleaf::submit_form;

/// 一个待投递的输出文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub name: String,
    pub content: String,
}

/// 组装结果：单文档或多文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssembledOutput {
    Single(String),
    MultiFile(Vec<ExportFile>),
}

/// 构造远程提交的表单字段
///
/// 字段形制是和接收服务的兼容性约定，两种模式不同：
/// - 多文件：每个文件一对 `snip_uri[]`（base64 data-URI）+
///   `snip_name[]`（文件名），最后一个 `engine` 字段选编译引擎
/// - 单文档：一个 `snip` 字段装原始文本 + `engine` 字段
pub fn build_form_fields(output: &AssembledOutput, engine: &str) -> Vec<(String, String)> {
    let mut fields = Vec::new();

    match output {
        AssembledOutput::Single(document) => {
            fields.push(("snip".to_string(), document.clone()));
        }
        AssembledOutput::MultiFile(files) => {
            for file in files {
                fields.push(("snip_uri[]".to_string(), data_uri(&file.content)));
                fields.push(("snip_name[]".to_string(), file.name.clone()));
            }
        }
    }

    fields.push(("engine".to_string(), engine.to_string()));
    fields
}

/// 文件内容编码为 base64 data-URI
fn data_uri(content: &str) -> String {
    format!(
        "data:application/x-tex;base64,{}",
        BASE64.encode(content.as_bytes())
    )
}
