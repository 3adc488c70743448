//! # 美化输出工具
//!
//! 提供统一的终端输出样式，以及输出包的文本呈现。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `binding/graph.rs` 的 Emission
//! - 使用 `colored` crate

use fluidboard::binding::Emission;
use fluidboard::models::{ChartDescription, OutputValue};

use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印跳过消息
pub fn print_skip(msg: &str) {
    println!("{} {}", "[SKIP]".dimmed(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}

/// 打印一次交付的全部槽位
pub fn print_emission(emission: &Emission) {
    println!("{} {}", "»".cyan().bold(), emission.unit.bold());

    let width = emission
        .bundle
        .slot_ids()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0);

    for (slot, value) in emission.bundle.iter() {
        let name = format!("{:<width$}", slot, width = width);
        match value {
            OutputValue::Text(text) => println!("  {}  {}", name.dimmed(), text),
            OutputValue::Rich(lines) => {
                let mut first = true;
                for line in lines {
                    let label = if first {
                        name.dimmed().to_string()
                    } else {
                        " ".repeat(width)
                    };
                    first = false;
                    if line.emphasis {
                        println!("  {}  {}", label, line.text.bold());
                    } else {
                        println!("  {}  {}", label, line.text);
                    }
                }
            }
            OutputValue::Chart(chart) => {
                println!("  {}  {}", name.dimmed(), chart_summary(chart).italic())
            }
        }
    }
}

/// 图表的单行摘要
pub fn chart_summary(chart: &ChartDescription) -> String {
    let kinds: Vec<&str> = chart.traces.iter().map(|t| t.kind()).collect();
    match &chart.title {
        Some(title) => format!("[chart: {}] {}", kinds.join("+"), title),
        None => format!("[chart: {}]", kinds.join("+")),
    }
}
