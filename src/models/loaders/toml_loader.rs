use crate::models::paper::Paper;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 从 TOML 文件加载数据并转换为 Paper 对象
pub async fn load_toml_to_paper(toml_file_path: &Path) -> Result<Paper> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取TOML文件: {}", toml_file_path.display()))?;

    let paper: Paper = toml::from_str(&content)
        .with_context(|| format!("无法解析TOML文件: {}", toml_file_path.display()))?;

    // 设置文件路径
    Ok(paper.with_file_path(toml_file_path.to_string_lossy().to_string()))
}

/// 从文件夹中加载所有 TOML 文件并转换为 Paper 对象列表
pub async fn load_all_toml_files(folder_path: &str) -> Result<Vec<Paper>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        anyhow::bail!("文件夹不存在: {}", folder_path);
    }

    let mut papers = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            tracing::info!(
                "正在加载: {}",
                path.file_name().unwrap_or_default().to_string_lossy()
            );

            match load_toml_to_paper(&path).await {
                Ok(paper) => {
                    tracing::info!("成功加载 {} 个题目", paper.question_count());
                    papers.push(paper);
                }
                Err(e) => {
                    tracing::warn!("加载文件失败 {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(papers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::QuestionType;
    use std::io::Write;

    const SAMPLE: &str = r#"
id = "p-001"
name = "期中测试卷"

[[sections]]
title = "选择题"

[[sections.items]]
[sections.items.question]
id = "q-1"
type = "choice"
difficulty = 2

[sections.items.question.content]
stem = '1+1=\choice'
answer = "2"

[[sections.items.question.content.options]]
text = "2"
is_correct = true

[[sections.items.question.content.options]]
text = "3"
"#;

    #[test]
    fn test_load_toml_to_paper() {
        let path = std::env::temp_dir().join("paper_latex_export_loader_test.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{}", SAMPLE).unwrap();
        drop(file);

        let paper = tokio_test::block_on(load_toml_to_paper(&path)).unwrap();
        assert_eq!(paper.name, "期中测试卷");
        assert_eq!(paper.question_count(), 1);
        assert!(paper.file_path.is_some());

        let q = &paper.sections[0].items[0].question;
        assert_eq!(q.qtype, QuestionType::Choice);
        assert_eq!(q.content.stem, "1+1=\\choice");
        assert_eq!(q.content.options.len(), 2);
        assert!(q.content.options[0].is_correct);
        assert!(!q.content.options[1].is_correct);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_folder_fails() {
        let result = tokio_test::block_on(load_all_toml_files("/nonexistent/paper_folder"));
        assert!(result.is_err());
    }
}
