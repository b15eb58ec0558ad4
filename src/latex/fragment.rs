//! 题目片段生成
//!
//! 把一道题的内容按题型规则改写成 LaTeX 片段。纯函数，不抛错：
//! 题干里的异常标记一律尽力透传。条目编号由上层模板负责，这里
//! 不输出题号。

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::{CopyConfig, CopyMode};
use crate::latex::annotate::{derive_answer, difficulty_marker};
use crate::latex::media::layout_media;
use crate::latex::nested::rewrite_nested;
use crate::models::question::{Question, QuestionType};

/// `\choice` 标记替换成的留空占位（dotfill + 括号空位）
const CHOICE_BLANK: &str = "\\dotfill（\\quad）";
/// `\fill` 标记替换成的下划线空位
const FILL_BLANK: &str = "\\underline{\\hspace{3cm}}";

/// 生成一道题的 LaTeX 片段
///
/// 流程：题型改写 → 媒体排版 → （完整模板）答案块 → 竖直间距
pub fn render_question(question: &Question, config: &CopyConfig) -> String {
    let mut parts: Vec<String> = vec![rewrite_stem(question, config.mode)];

    let media = layout_media(question);
    if !media.is_empty() {
        parts.push(media);
    }

    if config.mode == CopyMode::Rich {
        if let Some(answer) = derive_answer(question) {
            parts.push(format!("\\begin{{answer}}\n{}\n\\end{{answer}}", answer));
        }
    }

    if config.add_vspace {
        parts.push(format!("\\vspace{{{}}}", vspace_for(question.qtype, config)));
    }

    parts.join("\n")
}

/// 题型相关的题干改写（含选项列表），不含媒体/答案/间距
fn rewrite_stem(question: &Question, mode: CopyMode) -> String {
    let content = &question.content;

    match question.qtype {
        QuestionType::Choice | QuestionType::MultipleChoice => {
            let mut body = replace_command(&content.stem, "choice", CHOICE_BLANK);

            if mode == CopyMode::Rich {
                let marker =
                    difficulty_marker(question.difficulty, question.source.as_deref());
                body = format!("{} {}", marker, body);
            }

            if !content.options.is_empty() {
                body.push('\n');
                body.push_str(&options_block(question));
            }
            body
        }
        QuestionType::Fill => replace_command(&content.stem, "fill", FILL_BLANK),
        QuestionType::Solution => match rewrite_nested(&content.stem) {
            Ok(rewritten) => rewritten,
            Err(e) => {
                warn!("题干嵌套标记异常，原样保留 (题目 {}): {}", question.id, e);
                content.stem.clone()
            }
        },
        QuestionType::Other => content.stem.clone(),
    }
}

/// 替换题干中的域命令 `\<command>`
///
/// 后面紧跟字母的匹配是更长命令（如 \choicebox、\fillin）的前缀，
/// 原样保留不替换
fn replace_command(text: &str, command: &str, replacement: &str) -> String {
    let re = match Regex::new(&format!(r"\\{}", command)) {
        Ok(re) => re,
        Err(_) => return text.to_string(),
    };

    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;

    for m in re.find_iter(text) {
        output.push_str(&text[cursor..m.start()]);
        if text[m.end()..]
            .chars()
            .next()
            .map_or(false, |c| c.is_ascii_alphabetic())
        {
            output.push_str(m.as_str());
        } else {
            output.push_str(replacement);
        }
        cursor = m.end();
    }

    output.push_str(&text[cursor..]);
    output
}

/// 四栏选项列表，按选项原始顺序一项一个 `\task`
fn options_block(question: &Question) -> String {
    let mut block = String::from("\\begin{tasks}(4)\n");
    for option in &question.content.options {
        block.push_str(&format!("\\task {}\n", option.text));
    }
    block.push_str("\\end{tasks}");
    block
}

/// 各题型的间距量，不在三类里的题型用 default
fn vspace_for(qtype: QuestionType, config: &CopyConfig) -> &str {
    match qtype {
        QuestionType::Choice | QuestionType::MultipleChoice => &config.vspace.choice,
        QuestionType::Fill => &config.vspace.fill,
        QuestionType::Solution => &config.vspace.solution,
        QuestionType::Other => &config.vspace.default,
    }
}

// ========== 选择性复制 ==========

/// 选择性复制的开关项
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SelectiveCopyOptions {
    pub show_difficulty: bool,
    pub show_source: bool,
    pub show_answer: bool,
}

/// 生成选中题目的裸列表
///
/// 只输出一个 enumerate，没有小节和文档包装；三个开关分别控制
/// 难度标记、标记上的来源、答案块。间距配置在这里不生效。
pub fn generate_selective_copy_markup(
    questions: &[Question],
    opts: &SelectiveCopyOptions,
) -> String {
    let mut output = String::from("\\begin{enumerate}\n");

    for question in questions {
        let minimal = CopyConfig {
            mode: CopyMode::Minimal,
            add_vspace: false,
            ..Default::default()
        };
        let mut fragment = render_question(question, &minimal);

        if opts.show_difficulty {
            let source = if opts.show_source {
                question.source.as_deref()
            } else {
                None
            };
            fragment = format!("{} {}", difficulty_marker(question.difficulty, source), fragment);
        }

        if opts.show_answer {
            if let Some(answer) = derive_answer(question) {
                fragment.push_str(&format!("\n\\begin{{answer}}\n{}\n\\end{{answer}}", answer));
            }
        }

        output.push_str("\\item ");
        output.push_str(&fragment);
        output.push('\n');
    }

    output.push_str("\\end{enumerate}");
    output
}
