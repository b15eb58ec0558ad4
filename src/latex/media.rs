//! 媒体排版规划
//!
//! 根据一道题的图片和 TikZ 数量决定摆放方式。阈值和宽度比例是
//! 兼容性约定，不要改动：
//!
//! | 数量  | 摆放                      | 宽度 |
//! |-------|---------------------------|------|
//! | 0     | 无输出                    | -    |
//! | 1     | 右对齐                    | 0.4  |
//! | 2-3   | 居中单行，项间 `\quad`    | 0.3  |
//! | >3    | 逐个居中竖排              | 0.8  |

use crate::models::question::{MediaItem, MediaKind, Question};

/// 生成一道题的媒体排版片段
///
/// 图片和 TikZ 合并后按 order 升序（稳定）排列再分档处理
pub fn layout_media(question: &Question) -> String {
    let media = question.merged_media();

    match media.len() {
        0 => String::new(),
        1 => format!(
            "\\begin{{flushright}}\n{}\n\\end{{flushright}}",
            media_body(media[0], "0.4")
        ),
        2..=3 => {
            let row: Vec<String> = media.iter().map(|m| media_body(m, "0.3")).collect();
            format!("\\begin{{center}}\n{}\n\\end{{center}}", row.join("\\quad\n"))
        }
        _ => {
            let blocks: Vec<String> = media
                .iter()
                .map(|m| format!("\\begin{{center}}\n{}\n\\end{{center}}", media_body(m, "0.8")))
                .collect();
            blocks.join("\n")
        }
    }
}

/// 单个媒体项的 LaTeX 体
///
/// 图片用 includegraphics，TikZ 代码整体塞进 resizebox 缩放
fn media_body(item: &MediaItem, width: &str) -> String {
    match item.kind {
        MediaKind::Image => format!(
            "\\includegraphics[width={}\\textwidth]{{{}}}",
            width, item.payload
        ),
        MediaKind::Tikz => format!(
            "\\resizebox{{{}\\textwidth}}{{!}}{{{}}}",
            width, item.payload
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question_with_images(n: usize) -> Question {
        Question {
            images: (0..n)
                .map(|i| MediaItem {
                    order: i as i64,
                    kind: MediaKind::Image,
                    payload: format!("img{}.png", i),
                    origin: None,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_media_empty_output() {
        assert_eq!(layout_media(&question_with_images(0)), "");
    }

    #[test]
    fn test_single_media_right_aligned_at_40_percent() {
        let out = layout_media(&question_with_images(1));
        assert!(out.starts_with("\\begin{flushright}"));
        assert!(out.contains("width=0.4\\textwidth"));
        assert_eq!(out.matches("includegraphics").count(), 1);
    }

    #[test]
    fn test_two_media_centered_row_at_30_percent() {
        let out = layout_media(&question_with_images(2));
        assert_eq!(out.matches("\\begin{center}").count(), 1);
        assert_eq!(out.matches("width=0.3\\textwidth").count(), 2);
        // 间隔只出现在相邻项之间，没有尾部间隔
        assert_eq!(out.matches("\\quad").count(), 1);
    }

    #[test]
    fn test_three_media_single_row() {
        let out = layout_media(&question_with_images(3));
        assert_eq!(out.matches("\\begin{center}").count(), 1);
        assert_eq!(out.matches("width=0.3\\textwidth").count(), 3);
        assert_eq!(out.matches("\\quad").count(), 2);
    }

    #[test]
    fn test_four_media_stacked_at_80_percent() {
        let out = layout_media(&question_with_images(4));
        assert_eq!(out.matches("\\begin{center}").count(), 4);
        assert_eq!(out.matches("width=0.8\\textwidth").count(), 4);
    }

    #[test]
    fn test_ten_media_stacked() {
        let out = layout_media(&question_with_images(10));
        assert_eq!(out.matches("\\begin{center}").count(), 10);
        assert_eq!(out.matches("width=0.8\\textwidth").count(), 10);
    }

    #[test]
    fn test_tikz_uses_resizebox() {
        let q = Question {
            tikz_codes: vec![MediaItem {
                order: 0,
                kind: MediaKind::Tikz,
                payload: "\\begin{tikzpicture}\\draw (0,0)--(1,1);\\end{tikzpicture}".to_string(),
                origin: None,
            }],
            ..Default::default()
        };
        let out = layout_media(&q);
        assert!(out.contains("\\resizebox{0.4\\textwidth}{!}{"));
        assert!(out.contains("tikzpicture"));
    }

    #[test]
    fn test_mixed_media_follows_order_field() {
        let q = Question {
            images: vec![MediaItem {
                order: 2,
                kind: MediaKind::Image,
                payload: "late.png".to_string(),
                origin: None,
            }],
            tikz_codes: vec![MediaItem {
                order: 1,
                kind: MediaKind::Tikz,
                payload: "early-tikz".to_string(),
                origin: None,
            }],
            ..Default::default()
        };
        let out = layout_media(&q);
        let tikz_pos = out.find("early-tikz").unwrap();
        let img_pos = out.find("late.png").unwrap();
        assert!(tikz_pos < img_pos);
    }
}
