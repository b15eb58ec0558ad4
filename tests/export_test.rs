use paper_latex_export::config::{CopyConfig, CopyMethod, CopyMode, NormalConfig};
use paper_latex_export::models::paper::{Paper, PaperItem, PaperSection};
use paper_latex_export::models::question::{
    ChoiceOption, MediaItem, MediaKind, Question, QuestionContent, QuestionType,
};
use paper_latex_export::{convert_paper_to_latex, generate_selective_copy_markup, SelectiveCopyOptions};

fn choice_question(stem: &str, difficulty: Option<u8>) -> Question {
    Question {
        id: "q-choice".to_string(),
        qtype: QuestionType::Choice,
        content: QuestionContent {
            stem: stem.to_string(),
            options: vec![
                ChoiceOption {
                    text: "2".to_string(),
                    is_correct: true,
                },
                ChoiceOption {
                    text: "3".to_string(),
                    is_correct: false,
                },
            ],
            ..Default::default()
        },
        difficulty,
        ..Default::default()
    }
}

fn paper_with(sections: Vec<PaperSection>) -> Paper {
    Paper {
        id: "p-1".to_string(),
        name: "Quiz".to_string(),
        sections,
        owner: None,
        bank_id: None,
        created_at: None,
        updated_at: None,
        file_path: None,
    }
}

fn section(title: &str, questions: Vec<Question>) -> PaperSection {
    PaperSection {
        title: title.to_string(),
        items: questions
            .into_iter()
            .map(|question| PaperItem { question })
            .collect(),
    }
}

#[test]
fn test_example_scenario_full_document() {
    // 一个小节"Quiz"，一道选择题，难度 1，无来源，rich 模式，不加间距
    let paper = paper_with(vec![section("Quiz", vec![choice_question("1+1=\\choice", Some(1))])]);
    let config = CopyConfig {
        mode: CopyMode::Rich,
        add_vspace: false,
        ..Default::default()
    };

    let doc = convert_paper_to_latex(&paper, &config);

    // 很容易标记紧跟题干和留空占位
    assert!(doc.contains("\\veryeasy 1+1=\\dotfill（\\quad）"));
    // 两项选项列表
    assert!(doc.contains("\\begin{tasks}(4)\n\\task 2\n\\task 3\n\\end{tasks}"));
    // 没有间距指令
    assert!(!doc.contains("\\vspace"));
    // 文档完整
    assert!(doc.starts_with("\\documentclass{ctexart}"));
    assert!(doc.trim_end().ends_with("\\end{document}"));
}

#[test]
fn test_empty_section_contributes_nothing() {
    let paper = paper_with(vec![
        section("空小节", vec![]),
        section("有题的小节", vec![choice_question("1+1=\\choice", None)]),
    ]);
    let config = CopyConfig::default();

    let doc = convert_paper_to_latex(&paper, &config);

    assert_eq!(doc.matches("\\section*").count(), 1);
    assert!(doc.contains("有题的小节"));
    assert!(!doc.contains("空小节"));
}

#[test]
fn test_difficulty_defaults_render_medium() {
    for difficulty in [None, Some(0), Some(6)] {
        let paper = paper_with(vec![section(
            "选择题",
            vec![choice_question("\\choice", difficulty)],
        )]);
        let doc = convert_paper_to_latex(&paper, &CopyConfig::default());
        assert!(doc.contains("\\medium"), "难度 {:?} 应渲染中等标记", difficulty);
    }
}

#[test]
fn test_conversion_is_deterministic() {
    let paper = paper_with(vec![section(
        "混合",
        vec![
            choice_question("1+1=\\choice", Some(2)),
            Question {
                id: "q-solution".to_string(),
                qtype: QuestionType::Solution,
                content: QuestionContent {
                    stem: "已知函数。\\subp 求导\\subsubp 求极值\\subp 作图".to_string(),
                    solution_answers: vec!["\\subp 略".to_string()],
                    ..Default::default()
                },
                images: vec![MediaItem {
                    order: 1,
                    kind: MediaKind::Image,
                    payload: "fn.png".to_string(),
                    origin: None,
                }],
                ..Default::default()
            },
        ],
    )]);
    let config = CopyConfig {
        mode: CopyMode::Rich,
        add_vspace: true,
        show_answers: true,
        ..Default::default()
    };

    let first = convert_paper_to_latex(&paper, &config);
    let second = convert_paper_to_latex(&paper, &config);
    assert_eq!(first, second);

    // 嵌套重写配平
    assert_eq!(
        first.matches("\\begin{subp}").count(),
        first.matches("\\end{subp}").count()
    );
    assert_eq!(
        first.matches("\\begin{subsubp}").count(),
        first.matches("\\end{subsubp}").count()
    );
}

#[test]
fn test_minimal_remote_submit_equals_full_document() {
    // 自洽规则：remote-submit + add_document_environment=false
    // 的行为等于 add_document_environment=true + 默认纸张
    let paper = paper_with(vec![section("选择题", vec![choice_question("\\choice", None)])]);

    let contradictory = CopyConfig {
        mode: CopyMode::Minimal,
        copy_method: CopyMethod::RemoteSubmit,
        normal: NormalConfig {
            add_document_environment: false,
            ..Default::default()
        },
        ..Default::default()
    };
    let explicit = CopyConfig {
        normal: NormalConfig {
            add_document_environment: true,
            ..Default::default()
        },
        ..contradictory.clone()
    };

    assert_eq!(
        convert_paper_to_latex(&paper, &contradictory),
        convert_paper_to_latex(&paper, &explicit)
    );
}

#[test]
fn test_selective_copy_is_bare_list() {
    let questions = vec![
        choice_question("1+1=\\choice", Some(5)),
        Question {
            id: "q-fill".to_string(),
            qtype: QuestionType::Fill,
            content: QuestionContent {
                stem: "结果是\\fill".to_string(),
                fill_answers: vec!["42".to_string()],
                ..Default::default()
            },
            ..Default::default()
        },
    ];

    let markup = generate_selective_copy_markup(
        &questions,
        &SelectiveCopyOptions {
            show_difficulty: true,
            show_source: false,
            show_answer: true,
        },
    );

    // 裸列表：没有文档和小节包装
    assert!(!markup.contains("\\documentclass"));
    assert!(!markup.contains("\\section"));
    assert_eq!(markup.matches("\\item").count(), 2);
    assert!(markup.contains("\\veryhard"));
    assert!(markup.contains("\\underline{\\hspace{3cm}}"));
    assert!(markup.contains("答案：42"));
}
