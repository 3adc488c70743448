//! # 计算单元接口
//!
//! 计算单元是无状态的纯函数：按声明顺序接收输入值，返回完整输出包。
//!
//! ## 依赖关系
//! - 被 `binding/graph.rs` 注册和调用
//! - 由 `units/` 下的六个单元实现

use crate::models::OutputBundle;

/// 按声明顺序排列的单元输入值
///
/// 输入框参数在构造前已按回退策略解析；滑块参数总是有值。
#[derive(Debug, Clone, PartialEq)]
pub struct UnitInputs {
    values: Vec<Option<f64>>,
}

impl UnitInputs {
    pub fn new(values: Vec<Option<f64>>) -> Self {
        UnitInputs { values }
    }

    /// 第 `index` 个输入，缺失时为 `None`
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<f64>> for UnitInputs {
    fn from(values: Vec<f64>) -> Self {
        UnitInputs::new(values.into_iter().map(Some).collect())
    }
}

/// 计算单元
pub trait CalculationUnit: Send + Sync {
    /// 单元标识
    fn id(&self) -> &'static str;

    /// 显示名称
    fn title(&self) -> &'static str;

    /// 依赖的输入参数标识（有序）
    fn inputs(&self) -> &'static [&'static str];

    /// 纯函数求值
    fn evaluate(&self, inputs: &UnitInputs) -> OutputBundle;
}
