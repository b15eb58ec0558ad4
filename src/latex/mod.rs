//! 文档导出引擎（纯函数部分）
//!
//! 片段生成、媒体排版、难度/答案标注、文档组装都在这里，
//! 全部无副作用，可独立单测；投递副作用见 `delivery` 模块。

pub mod annotate;
pub mod assembler;
pub mod fragment;
pub mod media;
pub mod nested;
pub mod templates;

pub use annotate::{derive_answer, difficulty_marker};
pub use assembler::{assemble, assemble_multi_file};
pub use fragment::{generate_selective_copy_markup, render_question, SelectiveCopyOptions};
pub use media::layout_media;
pub use nested::{rewrite_nested, NestedTokenError};
