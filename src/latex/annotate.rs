//! 难度标记与答案推导
//!
//! 难度 1-5 映射到五档标记宏，缺省或越界一律按中等处理；
//! 答案按题型走各自的兜底链，完整解答永远优先。

use tracing::warn;

use crate::latex::nested::rewrite_nested;
use crate::models::question::{Question, QuestionType};

/// 答案前缀
const ANSWER_PREFIX: &str = "答案：";

/// 生成难度标记
///
/// # 参数
/// - `difficulty`: 难度 1-5，缺省/越界按 3（中等）
/// - `source`: 来源，存在时以方括号形式附在标记上
pub fn difficulty_marker(difficulty: Option<u8>, source: Option<&str>) -> String {
    let macro_name = match difficulty {
        Some(1) => "\\veryeasy",
        Some(2) => "\\easy",
        Some(3) => "\\medium",
        Some(4) => "\\hard",
        Some(5) => "\\veryhard",
        // 0、6 以及未设置都按中等
        _ => "\\medium",
    };

    match source {
        Some(s) if !s.is_empty() => format!("{}[{}]", macro_name, s),
        _ => macro_name.to_string(),
    }
}

/// 推导答案文本
///
/// 兜底链从上到下，第一个非空者胜出；全部为空返回 None
/// （调用方不输出答案块，而不是输出空块）：
/// - 选择类：solution → 正确选项字母（A、B…顿号连接）→ answer
/// - 填空：solution → fill_answers（分号连接）→ answer
/// - 解答：solution → solution_answers（逐条重写嵌套标记，空行连接）→ answer
/// - 其他：solution → answer
pub fn derive_answer(question: &Question) -> Option<String> {
    let content = &question.content;

    if let Some(solution) = content.solution.as_deref() {
        if !solution.is_empty() {
            return Some(solution.to_string());
        }
    }

    match question.qtype {
        QuestionType::Choice | QuestionType::MultipleChoice => {
            let letters: Vec<String> = content
                .options
                .iter()
                .enumerate()
                .filter(|(_, opt)| opt.is_correct)
                .filter_map(|(idx, _)| option_letter(idx))
                .collect();

            if !letters.is_empty() {
                return Some(format!("{}{}", ANSWER_PREFIX, letters.join("、")));
            }
            prefixed_raw_answer(content.answer.as_str())
        }
        QuestionType::Fill => {
            let answers: Vec<&str> = content
                .fill_answers
                .iter()
                .map(String::as_str)
                .filter(|s| !s.is_empty())
                .collect();

            if !answers.is_empty() {
                return Some(format!("{}{}", ANSWER_PREFIX, answers.join("；")));
            }
            prefixed_raw_answer(content.answer.as_str())
        }
        QuestionType::Solution => {
            let entries: Vec<String> = content
                .solution_answers
                .iter()
                .filter(|s| !s.is_empty())
                .map(|entry| rewrite_answer_entry(entry))
                .collect();

            if !entries.is_empty() {
                return Some(entries.join("\n\n"));
            }
            prefixed_raw_answer(content.answer.as_str())
        }
        QuestionType::Other => prefixed_raw_answer(content.answer.as_str()),
    }
}

/// 每条分步答案独立重写 `\subp`/`\subsubp` 标记，失败时原样透传
fn rewrite_answer_entry(entry: &str) -> String {
    match rewrite_nested(entry) {
        Ok(rewritten) => rewritten,
        Err(e) => {
            warn!("分步答案嵌套标记异常，原样保留: {}", e);
            entry.to_string()
        }
    }
}

fn prefixed_raw_answer(answer: &str) -> Option<String> {
    if answer.is_empty() {
        None
    } else {
        Some(format!("{}{}", ANSWER_PREFIX, answer))
    }
}

/// 选项序号转字母标号（A、B、C…）
///
/// 选项不会超过 26 个，超出的忽略
fn option_letter(idx: usize) -> Option<String> {
    if idx < 26 {
        Some(((b'A' + idx as u8) as char).to_string())
    } else {
        None
    }
}
