//! 应用编排
//!
//! 负责批量导出流程：加载试卷 → 逐份导出 → 统计

use anyhow::Result;
use tracing::{error, info};

use crate::config::{Config, CopyConfig};
use crate::exporter::ExportService;
use crate::models::load_all_toml_files;
use crate::utils::logging;

/// 应用程序
pub struct App {
    config: Config,
    copy_config: CopyConfig,
    export_service: ExportService,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        let export_service = ExportService::new(&config);
        Self {
            config,
            copy_config: CopyConfig::from_env(),
            export_service,
        }
    }

    /// 运行批量导出
    pub async fn run(&self) -> Result<()> {
        logging::init_log_file(&self.config.output_log_file)?;

        let papers = load_all_toml_files(&self.config.toml_folder).await?;
        logging::log_startup(papers.len());

        if papers.is_empty() {
            info!("⚠️ 没有找到待导出的试卷");
            return Ok(());
        }

        let mut success = 0;
        let mut failed = 0;

        for (i, paper) in papers.iter().enumerate() {
            let paper_index = i + 1;
            // 单份失败不影响其余试卷
            if self
                .export_service
                .export_paper(paper, &self.copy_config, paper_index)
                .await
            {
                success += 1;
            } else {
                error!("[试卷 {}] ❌ 导出失败", paper_index);
                failed += 1;
            }
        }

        logging::print_final_stats(success, failed, papers.len());

        Ok(())
    }
}
