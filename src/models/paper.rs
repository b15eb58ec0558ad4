use serde::{Deserialize, Serialize};

use crate::models::question::Question;

/// 试卷条目（一个小节内的一道题）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperItem {
    pub question: Question,
}

/// 试卷小节
///
/// 空小节（items 为空）不会对导出结果产生任何内容
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperSection {
    pub title: String,
    #[serde(default)]
    pub items: Vec<PaperItem>,
}

/// 试卷
///
/// 对导出引擎来说是只读输入，每次导出都是一个全新构造的对象
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paper {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sections: Vec<PaperSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// 所属题库
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// 来源文件路径（仅 CLI 批处理使用）
    #[serde(skip_serializing, skip_deserializing)]
    pub file_path: Option<String>,
}

impl Paper {
    pub fn with_file_path(mut self, file_path: String) -> Self {
        self.file_path = Some(file_path);
        self
    }

    /// 题目总数（跨所有小节）
    pub fn question_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}
