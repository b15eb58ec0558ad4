//! 文档组装
//!
//! 遍历试卷的小节和题目，调用片段生成，套上完整或朴素两种模板之一。
//! 空小节整个跳过（不输出空标题），空试卷输出只有模板骨架的合法文档。

use crate::config::{CopyConfig, CopyMode, PaperSize};
use crate::delivery::ExportFile;
use crate::latex::fragment::render_question;
use crate::latex::templates::{
    GEOMETRY_A4, GEOMETRY_B5, MAIN_FILE_NAME, RICH_STYLE, STYLE_FILE_NAME,
};
use crate::models::paper::Paper;

/// 组装单文档输出（剪贴板路径）
pub fn assemble(paper: &Paper, config: &CopyConfig) -> String {
    let config = config.effective();
    match config.mode {
        CopyMode::Rich => assemble_rich(paper, &config, StylePlacement::Inline),
        CopyMode::Minimal => assemble_minimal(paper, &config),
    }
}

/// 组装多文件输出（远程提交路径）
///
/// 完整模板拆成主文档 + 样式文件两份；朴素模板始终是单文件
pub fn assemble_multi_file(paper: &Paper, config: &CopyConfig) -> Vec<ExportFile> {
    let config = config.effective();
    match config.mode {
        CopyMode::Rich => vec![
            ExportFile {
                name: MAIN_FILE_NAME.to_string(),
                content: assemble_rich(paper, &config, StylePlacement::Input),
            },
            ExportFile {
                name: STYLE_FILE_NAME.to_string(),
                content: RICH_STYLE.to_string(),
            },
        ],
        CopyMode::Minimal => vec![ExportFile {
            name: MAIN_FILE_NAME.to_string(),
            content: assemble_minimal(paper, &config),
        }],
    }
}

/// 样式定义放在文档内还是 `\input` 外部文件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StylePlacement {
    Inline,
    Input,
}

fn assemble_rich(paper: &Paper, config: &CopyConfig, style: StylePlacement) -> String {
    let mut doc = String::from("\\documentclass{ctexart}\n");

    match style {
        StylePlacement::Inline => doc.push_str(RICH_STYLE),
        StylePlacement::Input => {
            doc.push_str(&format!("\\input{{{}}}\n", STYLE_FILE_NAME));
        }
    }

    if config.show_answers {
        doc.push_str("\\showanswerstrue\n");
    }

    doc.push_str(&format!(
        "\\title{{{}}}\n\\author{{}}\n\\date{{}}\n\\begin{{document}}\n\\maketitle\n",
        paper.name
    ));

    for section in &paper.sections {
        if section.items.is_empty() {
            continue;
        }

        doc.push_str(&format!("\\section*{{{}}}\n\\begin{{problemlist}}\n", section.title));
        for item in &section.items {
            doc.push_str("\\item ");
            doc.push_str(&render_question(&item.question, config));
            doc.push('\n');
        }
        doc.push_str("\\end{problemlist}\n");
    }

    doc.push_str("\\end{document}\n");
    doc
}

fn assemble_minimal(paper: &Paper, config: &CopyConfig) -> String {
    let mut doc = String::new();
    let with_document = config.normal.add_document_environment;

    // 环境的开与关必须成对出现
    if with_document {
        doc.push_str("\\documentclass{ctexart}\n");
        doc.push_str(&format!("\\usepackage[{}]{{geometry}}\n", resolve_geometry(config)));
        doc.push_str("\\begin{document}\n");
    }

    for section in &paper.sections {
        if section.items.is_empty() {
            continue;
        }

        doc.push_str(&format!("\\section*{{{}}}\n\\begin{{enumerate}}\n", section.title));
        for item in &section.items {
            doc.push_str("\\item ");
            doc.push_str(&render_question(&item.question, config));
            doc.push('\n');
        }
        doc.push_str("\\end{enumerate}\n");
    }

    if with_document {
        doc.push_str("\\end{document}\n");
    }
    doc
}

fn resolve_geometry(config: &CopyConfig) -> &str {
    match config.normal.paper_size {
        PaperSize::A4 => GEOMETRY_A4,
        PaperSize::B5 => GEOMETRY_B5,
        PaperSize::Custom => {
            if config.normal.custom_geometry.is_empty() {
                // 自定义规格留空时退回 A4 边距
                GEOMETRY_A4
            } else {
                &config.normal.custom_geometry
            }
        }
    }
}
