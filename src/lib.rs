//! # Paper LaTeX Export
//!
//! 把结构化试卷（小节 → 题目 → 分类型内容 → 媒体）确定性地渲染为
//! LaTeX 文档并投递出去的导出引擎。
//!
//! ## 架构设计
//!
//! 纯函数 + 单一副作用边界：
//!
//! ### ① 数据模型（Models）
//! - `models/` - 试卷、题目、媒体的 serde 模型和 TOML 加载器
//!
//! ### ② 导出引擎（Latex）
//! - `latex/fragment` - 按题型改写题干，生成题目片段
//! - `latex/nested` - `\subp`/`\subsubp` 的显式栈重写
//! - `latex/media` - 图片/TikZ 阈值排版（1 / 2-3 / >3 档）
//! - `latex/annotate` - 难度标记 + 答案兜底链
//! - `latex/assembler` - 完整/朴素两种文档模板的组装
//!
//! ### ③ 投递通道（Delivery）
//! - `delivery/` - 纯载荷构造 + 剪贴板写入 / 远程表单提交
//!
//! ### ④ 编排（Exporter / App）
//! - `exporter` - 组装结果接投递通道
//! - `app` - CLI 批量导出流程
//!
//! 引擎部分全是纯函数，同样的输入永远产出同样的文档；
//! 副作用只发生在投递层，剪贴板失败表现为布尔值，远程提交发出即完成。

pub mod app;
pub mod config;
pub mod delivery;
pub mod error;
pub mod exporter;
pub mod latex;
pub mod models;
pub mod utils;

// 重新导出常用类型
pub use config::{Config, CopyConfig, CopyMethod, CopyMode, NormalConfig, PaperSize, VspaceAmount};
pub use error::DeliveryError;
pub use exporter::{convert_paper_to_latex, open_in_remote_editor, ExportService};
pub use latex::{generate_selective_copy_markup, SelectiveCopyOptions};
pub use models::{Paper, PaperItem, PaperSection, Question, QuestionContent, QuestionType};
