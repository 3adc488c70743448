//! # 响应式绑定图
//!
//! 维护"输入参数 → 计算单元"的依赖边，并在输入变化时驱动重新求值。
//!
//! ## 求值流程
//! 1. 校验新值（非有限值拒绝，滑块值截断到区间）
//! 2. 写入会话参数存储
//! 3. 查找依赖该参数的全部单元（按注册顺序）
//! 4. 对每个单元收集其 *全部* 输入的当前值并求值
//! 5. 将完整输出包交付给 `OutputSink`
//!
//! ## 依赖关系
//! - 持有 `models/parameter.rs` 的 ParameterStore
//! - 调用 `binding/unit.rs` 的 CalculationUnit
//! - 被 `dashboard.rs` 构建，被 `commands/` 驱动

use crate::binding::unit::{CalculationUnit, UnitInputs};
use crate::error::{FluidError, Result};
use crate::models::{OutputBundle, ParameterStore};

use std::collections::HashMap;
use tracing::{debug, trace};

/// 一次单元求值的交付物
#[derive(Debug, Clone, PartialEq)]
pub struct Emission {
    /// 单元标识
    pub unit: String,
    /// 完整输出包
    pub bundle: OutputBundle,
}

/// 输出层
///
/// 每次交付都是一个完整的输出包。
pub trait OutputSink {
    fn deliver(&mut self, emission: Emission);
}

impl OutputSink for Vec<Emission> {
    fn deliver(&mut self, emission: Emission) {
        self.push(emission);
    }
}

/// 一次输入变化的处理结果
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeReport {
    pub param: String,
    /// 请求写入的值（`None` 表示清空）
    pub requested: Option<f64>,
    /// 实际写入的值
    pub applied: Option<f64>,
    /// 是否被截断到滑块区间
    pub clamped: bool,
    /// 被重新求值的单元
    pub evaluated: Vec<String>,
}

/// 响应式绑定图
pub struct BindingGraph {
    store: ParameterStore,
    units: Vec<Box<dyn CalculationUnit>>,
    /// 单元标识 → 下标
    unit_index: HashMap<&'static str, usize>,
    /// 参数标识 → 依赖它的单元下标（注册顺序）
    edges: HashMap<String, Vec<usize>>,
}

impl BindingGraph {
    /// 以会话参数存储构建空图
    pub fn new(store: ParameterStore) -> Self {
        BindingGraph {
            store,
            units: Vec::new(),
            unit_index: HashMap::new(),
            edges: HashMap::new(),
        }
    }

    /// 注册计算单元并记录其依赖边
    pub fn register(&mut self, unit: Box<dyn CalculationUnit>) -> Result<()> {
        let id = unit.id();
        if self.unit_index.contains_key(id) {
            return Err(FluidError::DuplicateUnit { id: id.to_string() });
        }

        if let Some(missing) = unit.inputs().iter().find(|p| !self.store.contains(p)) {
            return Err(FluidError::UnknownParameter {
                id: missing.to_string(),
            });
        }

        let index = self.units.len();
        for param in unit.inputs() {
            let dependents = self.edges.entry(param.to_string()).or_default();
            if !dependents.contains(&index) {
                dependents.push(index);
            }
        }

        debug!(unit = id, inputs = ?unit.inputs(), "registered calculation unit");
        self.unit_index.insert(id, index);
        self.units.push(unit);
        Ok(())
    }

    /// 输入变化：校验、写入，并重新求值所有依赖单元
    ///
    /// 非有限值被拒绝，参数保持原值且不产生任何交付。
    pub fn on_input_changed<S: OutputSink + ?Sized>(
        &mut self,
        param_id: &str,
        new_value: f64,
        sink: &mut S,
    ) -> Result<ChangeReport> {
        let param = self
            .store
            .get_mut(param_id)
            .ok_or_else(|| FluidError::UnknownParameter {
                id: param_id.to_string(),
            })?;

        let admitted = param.admit(new_value)?;
        if admitted.clamped {
            debug!(
                param = param_id,
                requested = new_value,
                applied = admitted.value,
                "input clamped to slider range"
            );
        }
        param.set(Some(admitted.value));

        let evaluated = self.propagate(param_id, sink);

        Ok(ChangeReport {
            param: param_id.to_string(),
            requested: Some(new_value),
            applied: Some(admitted.value),
            clamped: admitted.clamped,
            evaluated,
        })
    }

    /// 清空输入框参数（用户删掉了输入框中的数字）
    pub fn clear_input<S: OutputSink + ?Sized>(
        &mut self,
        param_id: &str,
        sink: &mut S,
    ) -> Result<ChangeReport> {
        let param = self
            .store
            .get_mut(param_id)
            .ok_or_else(|| FluidError::UnknownParameter {
                id: param_id.to_string(),
            })?;

        if !param.is_entry() {
            return Err(FluidError::InvalidArgument(format!(
                "slider parameter '{}' cannot be cleared",
                param_id
            )));
        }
        param.set(None);

        let evaluated = self.propagate(param_id, sink);

        Ok(ChangeReport {
            param: param_id.to_string(),
            requested: None,
            applied: None,
            clamped: false,
            evaluated,
        })
    }

    /// 按注册顺序对所有单元求值一次（初始渲染）
    pub fn refresh_all<S: OutputSink + ?Sized>(&self, sink: &mut S) -> usize {
        for unit in &self.units {
            self.emit(unit.as_ref(), sink);
        }
        self.units.len()
    }

    /// 对单个单元求值但不交付
    pub fn evaluate(&self, unit_id: &str) -> Result<OutputBundle> {
        let unit = self.unit(unit_id)?;
        Ok(unit.evaluate(&self.gather(unit)))
    }

    /// 依赖某参数的单元标识（注册顺序）
    pub fn dependents(&self, param_id: &str) -> Vec<&'static str> {
        self.edges
            .get(param_id)
            .map(|idx| idx.iter().map(|&i| self.units[i].id()).collect())
            .unwrap_or_default()
    }

    /// 单元声明的输入
    pub fn inputs_of(&self, unit_id: &str) -> Option<&'static [&'static str]> {
        self.unit(unit_id).ok().map(|u| u.inputs())
    }

    /// 已注册单元（注册顺序）
    pub fn units(&self) -> impl Iterator<Item = &dyn CalculationUnit> {
        self.units.iter().map(|u| u.as_ref())
    }

    pub fn store(&self) -> &ParameterStore {
        &self.store
    }

    fn unit(&self, unit_id: &str) -> Result<&dyn CalculationUnit> {
        self.unit_index
            .get(unit_id)
            .map(|&i| self.units[i].as_ref())
            .ok_or_else(|| FluidError::UnknownUnit {
                id: unit_id.to_string(),
            })
    }

    fn propagate<S: OutputSink + ?Sized>(&self, param_id: &str, sink: &mut S) -> Vec<String> {
        let dependents = self.edges.get(param_id).cloned().unwrap_or_default();

        dependents
            .into_iter()
            .map(|i| {
                let unit = self.units[i].as_ref();
                self.emit(unit, sink);
                unit.id().to_string()
            })
            .collect()
    }

    fn emit<S: OutputSink + ?Sized>(&self, unit: &dyn CalculationUnit, sink: &mut S) {
        let bundle = unit.evaluate(&self.gather(unit));
        trace!(unit = unit.id(), slots = bundle.len(), "emitting output bundle");
        sink.deliver(Emission {
            unit: unit.id().to_string(),
            bundle,
        });
    }

    /// 收集单元全部输入的当前值（输入框按回退策略解析）
    fn gather(&self, unit: &dyn CalculationUnit) -> UnitInputs {
        UnitInputs::new(
            unit.inputs()
                .iter()
                .map(|id| self.store.get(id).and_then(|p| p.resolved()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryFallback, InputParameter};

    /// 把两个输入相加的测试单元
    struct Sum;

    impl CalculationUnit for Sum {
        fn id(&self) -> &'static str {
            "sum"
        }
        fn title(&self) -> &'static str {
            "Sum"
        }
        fn inputs(&self) -> &'static [&'static str] {
            &["x", "y"]
        }
        fn evaluate(&self, inputs: &UnitInputs) -> OutputBundle {
            let total = inputs.get(0).unwrap_or(0.0) + inputs.get(1).unwrap_or(0.0);
            OutputBundle::new().text("sum-out", format!("{}", total))
        }
    }

    /// 只依赖 z 的测试单元
    struct Echo;

    impl CalculationUnit for Echo {
        fn id(&self) -> &'static str {
            "echo"
        }
        fn title(&self) -> &'static str {
            "Echo"
        }
        fn inputs(&self) -> &'static [&'static str] {
            &["z"]
        }
        fn evaluate(&self, inputs: &UnitInputs) -> OutputBundle {
            OutputBundle::new().text("echo-out", format!("{:?}", inputs.get(0)))
        }
    }

    fn store() -> ParameterStore {
        ParameterStore::with_parameters(vec![
            InputParameter::slider("x", "X", "", (0.0, 10.0, 1.0), 1.0),
            InputParameter::slider("y", "Y", "", (0.0, 10.0, 1.0), 2.0),
            InputParameter::entry("z", "Z", "", EntryFallback::WhenNotPositive(5.0), Some(3.0)),
        ])
        .unwrap()
    }

    fn graph() -> BindingGraph {
        let mut graph = BindingGraph::new(store());
        graph.register(Box::new(Sum)).unwrap();
        graph.register(Box::new(Echo)).unwrap();
        graph
    }

    #[test]
    fn test_duplicate_unit_rejected() {
        let mut graph = graph();
        let err = graph.register(Box::new(Sum)).unwrap_err();
        assert!(matches!(err, FluidError::DuplicateUnit { id } if id == "sum"));
    }

    #[test]
    fn test_unknown_input_rejected_at_registration() {
        let mut graph = BindingGraph::new(ParameterStore::new());
        assert!(matches!(
            graph.register(Box::new(Sum)),
            Err(FluidError::UnknownParameter { .. })
        ));
        assert_eq!(graph.units().count(), 0);
    }

    #[test]
    fn test_change_reevaluates_only_dependents_with_all_inputs() {
        let mut graph = graph();
        let mut sink: Vec<Emission> = Vec::new();

        let report = graph.on_input_changed("y", 7.0, &mut sink).unwrap();

        assert_eq!(report.evaluated, vec!["sum".to_string()]);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].unit, "sum");
        // x 未变化，但仍参与求值
        assert_eq!(sink[0].bundle.get_text("sum-out"), Some("8"));
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let mut graph = graph();
        let mut sink: Vec<Emission> = Vec::new();

        let report = graph.on_input_changed("x", 42.0, &mut sink).unwrap();
        assert!(report.clamped);
        assert_eq!(report.applied, Some(10.0));
        assert_eq!(graph.store().get("x").unwrap().value(), Some(10.0));
        assert_eq!(sink[0].bundle.get_text("sum-out"), Some("12"));
    }

    #[test]
    fn test_non_finite_keeps_prior_value_and_emits_nothing() {
        let mut graph = graph();
        let mut sink: Vec<Emission> = Vec::new();

        assert!(graph.on_input_changed("x", f64::NAN, &mut sink).is_err());
        assert!(sink.is_empty());
        assert_eq!(graph.store().get("x").unwrap().value(), Some(1.0));
    }

    #[test]
    fn test_unknown_parameter() {
        let mut graph = graph();
        let mut sink: Vec<Emission> = Vec::new();
        assert!(matches!(
            graph.on_input_changed("nope", 1.0, &mut sink),
            Err(FluidError::UnknownParameter { .. })
        ));
    }

    #[test]
    fn test_entry_fallback_resolved_at_gather() {
        let mut graph = graph();
        let mut sink: Vec<Emission> = Vec::new();

        graph.on_input_changed("z", -1.0, &mut sink).unwrap();
        assert_eq!(sink[0].bundle.get_text("echo-out"), Some("Some(5.0)"));

        graph.clear_input("z", &mut sink).unwrap();
        assert_eq!(sink[1].bundle.get_text("echo-out"), Some("Some(5.0)"));
        assert_eq!(graph.store().get("z").unwrap().value(), None);
    }

    #[test]
    fn test_slider_cannot_be_cleared() {
        let mut graph = graph();
        let mut sink: Vec<Emission> = Vec::new();
        assert!(graph.clear_input("x", &mut sink).is_err());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_refresh_all_and_introspection() {
        let graph = graph();
        let mut sink: Vec<Emission> = Vec::new();

        assert_eq!(graph.refresh_all(&mut sink), 2);
        let units: Vec<_> = sink.iter().map(|e| e.unit.as_str()).collect();
        assert_eq!(units, vec!["sum", "echo"]);

        assert_eq!(graph.dependents("x"), vec!["sum"]);
        assert!(graph.dependents("missing").is_empty());
        assert_eq!(graph.inputs_of("echo"), Some(&["z"][..]));
        assert!(graph.evaluate("nope").is_err());
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let graph = graph();
        assert_eq!(graph.evaluate("sum").unwrap(), graph.evaluate("sum").unwrap());
    }
}
