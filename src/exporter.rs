//! 导出服务
//!
//! 把纯组装结果接到具体的投递通道上。组装永远成功；
//! 只有剪贴板写入会产生可观察的失败（布尔值），远程提交发出即完成。

use tracing::info;

use crate::config::{Config, CopyConfig, CopyMethod, CopyMode};
use crate::delivery::{build_form_fields, copy_to_clipboard, submit_form, AssembledOutput};
use crate::latex::{assemble, assemble_multi_file};
use crate::models::paper::Paper;
use crate::utils::logging::truncate_text;

/// 单文档渲染（对外主入口之一）
pub fn convert_paper_to_latex(paper: &Paper, config: &CopyConfig) -> String {
    assemble(paper, config)
}

/// 触发远程编辑器提交（对外主入口之一）
///
/// 内部自建 HTTP 客户端，适合一次性调用；批量导出用 [`ExportService`]
pub async fn open_in_remote_editor(paper: &Paper, config: &CopyConfig, app_config: &Config) {
    let client = reqwest::Client::new();
    submit_remote(&client, paper, config, app_config).await;
}

/// 导出服务（批处理复用同一个 HTTP 客户端）
pub struct ExportService {
    client: reqwest::Client,
    config: Config,
}

impl ExportService {
    /// 创建新的导出服务
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: config.clone(),
        }
    }

    /// 导出单份试卷
    ///
    /// # 参数
    /// - `paper`: 试卷数据
    /// - `copy_config`: 导出配置
    /// - `paper_index`: 试卷索引（用于日志）
    ///
    /// # 返回
    /// 返回是否成功投递（远程提交发出即视为成功）
    pub async fn export_paper(
        &self,
        paper: &Paper,
        copy_config: &CopyConfig,
        paper_index: usize,
    ) -> bool {
        info!("[试卷 {}] 开始导出", paper_index);
        info!("[试卷 {}] 名称: {}", paper_index, truncate_text(&paper.name, 60));
        info!("[试卷 {}] 题目总数: {}", paper_index, paper.question_count());

        match copy_config.copy_method {
            CopyMethod::Clipboard => {
                let document = assemble(paper, copy_config);
                info!(
                    "[试卷 {}] 📋 写入剪贴板 ({} 字符)...",
                    paper_index,
                    document.chars().count()
                );
                let ok = copy_to_clipboard(&document);
                if ok {
                    info!("[试卷 {}] ✅ 剪贴板导出完成\n", paper_index);
                }
                ok
            }
            CopyMethod::RemoteSubmit => {
                info!("[试卷 {}] 📤 提交到远程编辑器...", paper_index);
                submit_remote(&self.client, paper, copy_config, &self.config).await;
                info!("[试卷 {}] ✅ 远程提交已发出\n", paper_index);
                true
            }
        }
    }
}

/// 远程提交的公共路径
///
/// 完整模板拆成多文件（data-URI 字段），朴素模板单文档走原始文本字段
async fn submit_remote(
    client: &reqwest::Client,
    paper: &Paper,
    copy_config: &CopyConfig,
    app_config: &Config,
) {
    let output = match copy_config.mode {
        CopyMode::Rich => AssembledOutput::MultiFile(assemble_multi_file(paper, copy_config)),
        CopyMode::Minimal => AssembledOutput::Single(assemble(paper, copy_config)),
    };

    let fields = build_form_fields(&output, &app_config.overleaf_engine);
    submit_form(client, &app_config.overleaf_url, &fields).await;
}
