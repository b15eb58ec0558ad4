use serde::{Deserialize, Serialize};

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 试卷 TOML 文件存放目录
    pub toml_folder: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    // --- Overleaf 配置 ---
    /// Overleaf 文档导入端点
    pub overleaf_url: String,
    /// 编译引擎（ctexart 中文文档需要 xelatex）
    pub overleaf_engine: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            toml_folder: "papers_toml".to_string(),
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            overleaf_url: "https://www.overleaf.com/docs".to_string(),
            overleaf_engine: "xelatex".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            toml_folder: std::env::var("TOML_FOLDER").unwrap_or(default.toml_folder),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            overleaf_url: std::env::var("OVERLEAF_URL").unwrap_or(default.overleaf_url),
            overleaf_engine: std::env::var("OVERLEAF_ENGINE").unwrap_or(default.overleaf_engine),
        }
    }
}

// ========== 导出配置 ==========

/// 文档模板模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CopyMode {
    /// 完整模板：自定义计数器、难度标记、可隐藏的答案块
    Rich,
    /// 朴素模板：标准 section + enumerate，无自定义宏
    Minimal,
}

/// 导出方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CopyMethod {
    /// 复制到系统剪贴板
    Clipboard,
    /// 提交到远程编辑器（Overleaf）
    RemoteSubmit,
}

/// 纸张规格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaperSize {
    A4,
    B5,
    Custom,
}

impl Default for PaperSize {
    fn default() -> Self {
        PaperSize::A4
    }
}

/// 各题型追加的竖直间距（LaTeX 长度字符串）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VspaceAmount {
    pub choice: String,
    pub fill: String,
    pub solution: String,
    /// 其余题型使用的间距
    pub default: String,
}

impl Default for VspaceAmount {
    fn default() -> Self {
        Self {
            choice: "0.5cm".to_string(),
            fill: "1cm".to_string(),
            solution: "5cm".to_string(),
            default: "1cm".to_string(),
        }
    }
}

/// 朴素模式专用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalConfig {
    /// 是否生成完整的 document 环境
    #[serde(default)]
    pub add_document_environment: bool,
    #[serde(default)]
    pub paper_size: PaperSize,
    /// paper_size = custom 时的 geometry 参数，原样透传
    #[serde(default)]
    pub custom_geometry: String,
}

/// 导出引擎配置
///
/// 每次导出单独构造，不做持久化
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyConfig {
    pub mode: CopyMode,
    #[serde(default)]
    pub add_vspace: bool,
    #[serde(default)]
    pub vspace: VspaceAmount,
    pub copy_method: CopyMethod,
    /// 完整模板下是否显示答案块（显式参数，不用全局开关）
    #[serde(default)]
    pub show_answers: bool,
    /// 仅朴素模式下有意义
    #[serde(default)]
    pub normal: NormalConfig,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            mode: CopyMode::Rich,
            add_vspace: false,
            vspace: VspaceAmount::default(),
            copy_method: CopyMethod::Clipboard,
            show_answers: false,
            normal: NormalConfig::default(),
        }
    }
}

impl CopyConfig {
    /// 应用跨字段自洽规则后的有效配置
    ///
    /// 远程提交必须是完整文档，所以 remote-submit 强制
    /// add_document_environment = true（纸张规格保持默认值）。
    /// 矛盾配置静默修正，从不报错。
    pub fn effective(&self) -> CopyConfig {
        let mut config = self.clone();
        if config.copy_method == CopyMethod::RemoteSubmit {
            config.normal.add_document_environment = true;
        }
        config
    }

    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            mode: match std::env::var("COPY_MODE").as_deref() {
                Ok("minimal") => CopyMode::Minimal,
                Ok("rich") => CopyMode::Rich,
                _ => default.mode,
            },
            add_vspace: std::env::var("ADD_VSPACE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.add_vspace),
            vspace: default.vspace,
            copy_method: match std::env::var("COPY_METHOD").as_deref() {
                Ok("clipboard") => CopyMethod::Clipboard,
                Ok("remote-submit") => CopyMethod::RemoteSubmit,
                _ => default.copy_method,
            },
            show_answers: std::env::var("SHOW_ANSWERS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.show_answers),
            normal: NormalConfig {
                add_document_environment: std::env::var("ADD_DOCUMENT_ENVIRONMENT").ok().and_then(|v| v.parse().ok()).unwrap_or(false),
                paper_size: match std::env::var("PAPER_SIZE").as_deref() {
                    Ok("B5") | Ok("b5") => PaperSize::B5,
                    Ok("custom") => PaperSize::Custom,
                    _ => PaperSize::A4,
                },
                custom_geometry: std::env::var("CUSTOM_GEOMETRY").unwrap_or_default(),
            },
        }
    }
}
