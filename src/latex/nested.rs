//! 小问嵌套标记重写
//!
//! 把题干中的 `\subp`（小问）和 `\subsubp`（小小问）标记改写为显式的
//! 嵌套环境。关闭规则：一个块在遇到下一个同级或更高级标记处关闭，
//! 输入结束时关闭所有未闭合的块。
//!
//! 用显式栈实现而不是正则前瞻，保证输出一定配平；
//! `\subsubp` 出现在任何 `\subp` 之前视为输入错误。

use regex::Regex;
use std::fmt;

/// 嵌套层级：`\subp` 为 1，`\subsubp` 为 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Level {
    Sub = 1,
    SubSub = 2,
}

impl Level {
    fn env_name(self) -> &'static str {
        match self {
            Level::Sub => "subp",
            Level::SubSub => "subsubp",
        }
    }
}

/// 嵌套标记错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NestedTokenError {
    /// `\subsubp` 出现时没有任何已打开的 `\subp`
    OrphanSubSub { position: usize },
}

impl fmt::Display for NestedTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NestedTokenError::OrphanSubSub { position } => {
                write!(f, "\\subsubp 出现在任何 \\subp 之前 (位置: {})", position)
            }
        }
    }
}

impl std::error::Error for NestedTokenError {}

/// 重写嵌套标记
///
/// `\subp` / `\subsubp` 变为对应环境的 `\begin`，并在下一个同级或更
/// 高级标记之前（或文本末尾）插入配对的 `\end`。标记之外的文本原样
/// 保留。无标记的输入原样返回。
pub fn rewrite_nested(text: &str) -> Result<String, NestedTokenError> {
    // 交替分支里 subsubp 必须在前，regex 在同一位置按书写顺序取分支
    let re = match Regex::new(r"\\(subsubp|subp)") {
        Ok(re) => re,
        Err(_) => return Ok(text.to_string()),
    };

    let mut output = String::with_capacity(text.len() + 64);
    let mut stack: Vec<Level> = Vec::new();
    let mut cursor = 0;

    for m in re.find_iter(text) {
        // 后面紧跟字母说明是更长命令（如 \subparagraph）的前缀，不是标记
        if text[m.end()..]
            .chars()
            .next()
            .map_or(false, |c| c.is_ascii_alphabetic())
        {
            continue;
        }

        let level = if m.as_str() == "\\subsubp" {
            Level::SubSub
        } else {
            Level::Sub
        };

        if level == Level::SubSub && !stack.contains(&Level::Sub) {
            return Err(NestedTokenError::OrphanSubSub { position: m.start() });
        }

        output.push_str(&text[cursor..m.start()]);

        // 同级或更高级的块在这里关闭
        while let Some(&top) = stack.last() {
            if top < level {
                break;
            }
            stack.pop();
            output.push_str(&format!("\\end{{{}}}", top.env_name()));
        }

        stack.push(level);
        output.push_str(&format!("\\begin{{{}}}", level.env_name()));
        cursor = m.end();
    }

    output.push_str(&text[cursor..]);

    while let Some(closed) = stack.pop() {
        output.push_str(&format!("\\end{{{}}}", closed.env_name()));
    }

    Ok(output)
}
