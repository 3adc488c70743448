//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。每个命令都新建自己的会话，命令之间不共享状态。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `dashboard.rs`, `binding/`, `render/`, `utils/`
//! - 子模块: list, eval, session, export

pub mod eval;
pub mod export;
pub mod list;
pub mod session;

use fluidboard::binding::{BindingGraph, ChangeReport, Emission};
use crate::cli::Commands;
use fluidboard::error::{FluidError, Result};

use tracing::debug;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::List(args) => list::execute(args),
        Commands::Eval(args) => eval::execute(args),
        Commands::Session(args) => session::execute(args),
        Commands::Export(args) => export::execute(args),
    }
}

/// 按顺序把 `--set` 覆盖送入绑定图
///
/// 覆盖时产生的中间交付被丢弃，调用方随后自行求值。
pub(crate) fn apply_overrides(
    graph: &mut BindingGraph,
    overrides: &[(String, f64)],
) -> Result<Vec<ChangeReport>> {
    let mut discarded: Vec<Emission> = Vec::new();
    let mut reports = Vec::with_capacity(overrides.len());

    for (param, value) in overrides {
        let report = graph.on_input_changed(param, *value, &mut discarded)?;
        debug!(param = %param, applied = ?report.applied, "override applied");
        reports.push(report);
        discarded.clear();
    }

    Ok(reports)
}

/// 校验单元标识
pub(crate) fn require_unit(graph: &BindingGraph, unit_id: &str) -> Result<()> {
    if graph.inputs_of(unit_id).is_none() {
        return Err(FluidError::UnknownUnit {
            id: unit_id.to_string(),
        });
    }
    Ok(())
}

/// 被截断的覆盖值说明
pub(crate) fn clamp_notice(report: &ChangeReport) -> Option<String> {
    match (report.clamped, report.requested, report.applied) {
        (true, Some(requested), Some(applied)) => Some(format!(
            "'{}' = {} is outside the slider range, clamped to {}",
            report.param, requested, applied
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluidboard::dashboard;
    use fluidboard::units::{hydrostatic, pressure};

    #[test]
    fn test_apply_overrides_in_order() {
        let mut graph = dashboard::new_session().unwrap();
        let overrides = vec![
            (pressure::FORCE.to_string(), 300.0),
            (pressure::FORCE.to_string(), 5000.0),
        ];

        let reports = apply_overrides(&mut graph, &overrides).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].evaluated, vec![pressure::ID]);
        assert!(clamp_notice(&reports[0]).is_none());
        assert_eq!(
            clamp_notice(&reports[1]).unwrap(),
            "'pressure-force' = 5000 is outside the slider range, clamped to 1000"
        );
        assert_eq!(
            graph.store().get(pressure::FORCE).unwrap().value(),
            Some(1000.0)
        );
    }

    #[test]
    fn test_apply_overrides_unknown_parameter() {
        let mut graph = dashboard::new_session().unwrap();
        let err = apply_overrides(&mut graph, &[("nope".to_string(), 1.0)]).unwrap_err();
        assert!(matches!(err, FluidError::UnknownParameter { .. }));
    }

    #[test]
    fn test_require_unit() {
        let graph = dashboard::new_session().unwrap();
        assert!(require_unit(&graph, hydrostatic::ID).is_ok());
        assert!(matches!(
            require_unit(&graph, "bernoulli"),
            Err(FluidError::UnknownUnit { .. })
        ));
    }
}
