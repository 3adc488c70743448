//! # eval 命令实现
//!
//! 新建会话，应用 `--set` 覆盖后对单个单元求值并打印输出包。
//!
//! ## 依赖关系
//! - 使用 `cli/eval.rs` 定义的参数
//! - 使用 `dashboard.rs`, `render/export.rs`
//! - 使用 `utils/output.rs`

use fluidboard::binding::Emission;
use crate::cli::eval::EvalArgs;
use fluidboard::dashboard;
use fluidboard::error::Result;
use fluidboard::render::export;
use crate::utils::output;

use tracing::warn;

/// 执行 eval 命令
pub fn execute(args: EvalArgs) -> Result<()> {
    let mut graph = dashboard::new_session()?;
    super::require_unit(&graph, &args.unit)?;

    let reports = super::apply_overrides(&mut graph, &args.overrides)?;
    for notice in reports.iter().filter_map(super::clamp_notice) {
        if args.json {
            warn!("{}", notice);
        } else {
            output::print_warning(&notice);
        }
    }

    let emission = Emission {
        unit: args.unit.clone(),
        bundle: graph.evaluate(&args.unit)?,
    };

    if args.json {
        println!("{}", export::emission_to_json(&emission)?);
    } else {
        let title = graph
            .units()
            .find(|u| u.id() == args.unit)
            .map(|u| u.title())
            .unwrap_or_default();
        output::print_header(title);
        output::print_emission(&emission);
    }

    Ok(())
}
