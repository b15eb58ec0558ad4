use serde::{Deserialize, Serialize};

/// 题目类型
///
/// 封闭枚举，新增题型时由编译器保证所有分支都被处理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    /// 单选题
    Choice,
    /// 多选题
    MultipleChoice,
    /// 填空题
    Fill,
    /// 解答题
    Solution,
    /// 其他题型
    Other,
}

impl QuestionType {
    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            QuestionType::Choice => "单选题",
            QuestionType::MultipleChoice => "多选题",
            QuestionType::Fill => "填空题",
            QuestionType::Solution => "解答题",
            QuestionType::Other => "其他",
        }
    }

    /// 是否是选择类题型（单选/多选共用处理逻辑）
    pub fn is_choice(self) -> bool {
        matches!(self, QuestionType::Choice | QuestionType::MultipleChoice)
    }
}

impl Default for QuestionType {
    fn default() -> Self {
        QuestionType::Other
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 选项
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// 媒体类型（图片 / TikZ 代码）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaKind {
    Image,
    Tikz,
}

/// 媒体项
///
/// `payload` 对图片是 URL，对 TikZ 是完整的 tikzpicture 代码。
/// `origin` 只是来源元信息，排版逻辑不使用。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItem {
    /// 排序序号（图片和 TikZ 交错排序用）
    #[serde(default)]
    pub order: i64,
    pub kind: MediaKind,
    pub payload: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

/// 题目内容
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionContent {
    /// 题干（LaTeX 标记文本）
    pub stem: String,
    /// 选项列表（仅选择类题型非空）
    #[serde(default)]
    pub options: Vec<ChoiceOption>,
    /// 原始答案字符串（兜底）
    #[serde(default)]
    pub answer: String,
    /// 填空题答案列表（参考性兜底）
    #[serde(default)]
    pub fill_answers: Vec<String>,
    /// 解答题分步答案列表（参考性兜底）
    #[serde(default)]
    pub solution_answers: Vec<String>,
    /// 完整解答（存在时永远优先于各种兜底答案）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
}

/// 一道题目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    #[serde(rename = "type", default)]
    pub qtype: QuestionType,
    pub content: QuestionContent,
    /// 难度 1-5，缺省按 3（中等）处理
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<u8>,
    /// 来源（如"2023全国卷"）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub images: Vec<MediaItem>,
    #[serde(default)]
    pub tikz_codes: Vec<MediaItem>,
}

impl Question {
    /// 合并图片和 TikZ 为一个按 order 升序的序列（稳定排序，同序号保持原相对顺序）
    pub fn merged_media(&self) -> Vec<&MediaItem> {
        let mut media: Vec<&MediaItem> = self.images.iter().chain(self.tikz_codes.iter()).collect();
        media.sort_by_key(|m| m.order);
        media
    }
}

impl Default for Question {
    fn default() -> Self {
        Self {
            id: String::new(),
            qtype: QuestionType::Other,
            content: QuestionContent::default(),
            difficulty: None,
            source: None,
            images: Vec::new(),
            tikz_codes: Vec::new(),
        }
    }
}
