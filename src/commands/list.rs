//! # list 命令实现
//!
//! 以表格列出计算单元、它们依赖的参数以及参数的区间和默认值。
//!
//! ## 依赖关系
//! - 使用 `cli/list.rs` 定义的参数
//! - 使用 `dashboard.rs` 构建会话
//! - 使用 `tabled` 渲染表格

use fluidboard::binding::BindingGraph;
use crate::cli::list::ListArgs;
use fluidboard::dashboard;
use fluidboard::error::Result;
use fluidboard::models::{EntryFallback, ParameterKind};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 参数表中的一行
#[derive(Debug, Clone, Tabled)]
struct ParamRow {
    #[tabled(rename = "Unit")]
    unit: String,
    #[tabled(rename = "Parameter")]
    param: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Range")]
    range: String,
    #[tabled(rename = "Step")]
    step: String,
    #[tabled(rename = "Default")]
    default: String,
}

/// 执行 list 命令
pub fn execute(args: ListArgs) -> Result<()> {
    let graph = dashboard::new_session()?;
    if let Some(unit) = &args.unit {
        super::require_unit(&graph, unit)?;
    }

    let rows = collect_rows(&graph, args.unit.as_deref());
    let units: Vec<_> = graph
        .units()
        .filter(|u| args.unit.as_deref().map_or(true, |id| id == u.id()))
        .collect();

    output::print_header(&format!("{} Calculation Unit(s)", units.len()));
    for unit in &units {
        output::print_info(&format!("{:<12} {}", unit.id(), unit.title()));
    }
    println!();
    println!("{}", Table::new(&rows));

    Ok(())
}

/// 生成参数表（按单元注册顺序，再按单元声明的输入顺序）
fn collect_rows(graph: &BindingGraph, unit_filter: Option<&str>) -> Vec<ParamRow> {
    let mut rows = Vec::new();

    for unit in graph.units() {
        if unit_filter.is_some_and(|id| id != unit.id()) {
            continue;
        }
        for input in unit.inputs() {
            let Some(param) = graph.store().get(input) else {
                continue;
            };
            let (range, step) = match param.kind {
                ParameterKind::Slider { min, max, step } => {
                    (format!("[{}, {}]", min, max), format!("{}", step))
                }
                ParameterKind::Entry { fallback } => {
                    let rule = match fallback {
                        EntryFallback::WhenMissing(v) => format!("free (empty -> {})", v),
                        EntryFallback::WhenNotPositive(v) => format!("free (<= 0 -> {})", v),
                    };
                    (rule, "-".to_string())
                }
            };
            rows.push(ParamRow {
                unit: unit.id().to_string(),
                param: param.id.clone(),
                label: format!("{} [{}]", param.label, param.unit),
                range,
                step,
                default: param
                    .value()
                    .map(|v| format!("{}", v))
                    .unwrap_or_else(|| "-".to_string()),
            });
        }
    }

    rows
}
