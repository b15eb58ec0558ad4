//! LaTeX 模板常量
//!
//! 完整模板的样式定义单独成文件：远程编辑器的表单字段对单个载荷
//! 大小有实际限制，而且宏库可以在多次导出之间复用。

/// 远程提交时主文档的文件名
pub const MAIN_FILE_NAME: &str = "main.tex";
/// 远程提交时样式文件的文件名
pub const STYLE_FILE_NAME: &str = "paper-style.tex";

/// 完整模板的样式定义（计数器、难度标记、答案块）
pub const RICH_STYLE: &str = r"% 试卷导出样式定义
\usepackage{xcolor}
\usepackage{graphicx}
\usepackage{tasks}
\usepackage{tikz}
\settasks{label=\Alph*.}

% 题号计数器：题 / 小问 / 小小问
\newcounter{prob}
\newcounter{subprob}[prob]
\newcounter{subsubprob}[subprob]

% 题目列表环境，题号由 prob 计数器生成
\newenvironment{problemlist}
  {\begin{list}{\stepcounter{prob}\arabic{prob}.}{\setlength{\itemsep}{0.8em}}}
  {\end{list}}

% 小问：（1）（2）…
\newenvironment{subp}
  {\par\stepcounter{subprob}（\arabic{subprob}）}
  {\par}
% 小小问：①②…
\newenvironment{subsubp}
  {\par\stepcounter{subsubprob}\quad\textcircled{\scriptsize\arabic{subsubprob}}}
  {\par}

% 难度标记（五档），可选参数附来源
\newcommand{\veryeasy}[1][]{\textcolor{green!60!black}{\scriptsize【很容易#1】}}
\newcommand{\easy}[1][]{\textcolor{teal}{\scriptsize【容易#1】}}
\newcommand{\medium}[1][]{\textcolor{orange}{\scriptsize【中等#1】}}
\newcommand{\hard}[1][]{\textcolor{red!80!black}{\scriptsize【困难#1】}}
\newcommand{\veryhard}[1][]{\textcolor{purple}{\scriptsize【很难#1】}}

% 答案块：开启 showanswers 开关时才显示
\newif\ifshowanswers
\newenvironment{answer}
  {\ifshowanswers\par\textbf{〔答案〕}\else\setbox0\vbox\bgroup\fi}
  {\ifshowanswers\par\else\egroup\fi}
";

/// A4 纵向固定尺寸与页边距
pub const GEOMETRY_A4: &str = "paperwidth=21cm,paperheight=29.7cm,margin=2.54cm";
/// B5 小开本
pub const GEOMETRY_B5: &str = "paperwidth=17.6cm,paperheight=25cm,margin=2cm";
