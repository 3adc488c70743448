//! # 输入参数数据模型
//!
//! 定义会话内的输入参数（滑块 / 自由数值输入）及其存储容器。
//!
//! ## 取值策略
//! - 滑块参数：超出 `[min, max]` 的值在写入前被截断到区间内
//! - 输入框参数：没有区间，缺失或不合理的值在求值时按回退策略解析
//!
//! ## 依赖关系
//! - 被 `binding/graph.rs` 持有和修改
//! - 被 `dashboard.rs` 构建
//! - 被 `commands/list.rs` 读取

use crate::error::{FluidError, Result};

use serde::Serialize;
use std::collections::HashMap;

/// 输入框参数的回退策略
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum EntryFallback {
    /// 仅在值缺失时使用默认值
    WhenMissing(f64),
    /// 值缺失或 ≤ 0 时使用默认值
    WhenNotPositive(f64),
}

impl EntryFallback {
    /// 默认值
    pub fn default_value(&self) -> f64 {
        match self {
            EntryFallback::WhenMissing(v) | EntryFallback::WhenNotPositive(v) => *v,
        }
    }

    /// 按策略解析当前值
    pub fn resolve(&self, value: Option<f64>) -> f64 {
        match (self, value) {
            (EntryFallback::WhenMissing(_), Some(v)) => v,
            (EntryFallback::WhenNotPositive(_), Some(v)) if v > 0.0 => v,
            _ => self.default_value(),
        }
    }
}

/// 参数类型
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ParameterKind {
    /// 有界滑块
    Slider { min: f64, max: f64, step: f64 },
    /// 自由数值输入
    Entry { fallback: EntryFallback },
}

/// 一次写入被接受后的实际值
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Admitted {
    pub value: f64,
    pub clamped: bool,
}

/// 输入参数
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputParameter {
    /// 参数标识
    pub id: String,
    /// 显示名称
    pub label: String,
    /// 物理单位符号
    pub unit: String,
    /// 参数类型
    pub kind: ParameterKind,
    /// 当前值（仅输入框参数可能为空）
    value: Option<f64>,
}

impl InputParameter {
    /// 创建滑块参数，初始值会被截断到区间内
    pub fn slider(
        id: impl Into<String>,
        label: impl Into<String>,
        unit: impl Into<String>,
        (min, max, step): (f64, f64, f64),
        value: f64,
    ) -> Self {
        InputParameter {
            id: id.into(),
            label: label.into(),
            unit: unit.into(),
            kind: ParameterKind::Slider { min, max, step },
            value: Some(value.clamp(min, max)),
        }
    }

    /// 创建输入框参数
    pub fn entry(
        id: impl Into<String>,
        label: impl Into<String>,
        unit: impl Into<String>,
        fallback: EntryFallback,
        value: Option<f64>,
    ) -> Self {
        InputParameter {
            id: id.into(),
            label: label.into(),
            unit: unit.into(),
            kind: ParameterKind::Entry { fallback },
            value,
        }
    }

    /// 当前原始值
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// 求值时使用的值（输入框参数应用回退策略）
    pub fn resolved(&self) -> Option<f64> {
        match self.kind {
            ParameterKind::Slider { .. } => self.value,
            ParameterKind::Entry { fallback } => Some(fallback.resolve(self.value)),
        }
    }

    /// 滑块区间
    pub fn range(&self) -> Option<(f64, f64)> {
        match self.kind {
            ParameterKind::Slider { min, max, .. } => Some((min, max)),
            ParameterKind::Entry { .. } => None,
        }
    }

    pub fn is_entry(&self) -> bool {
        matches!(self.kind, ParameterKind::Entry { .. })
    }

    /// 校验一个新值：非有限值被拒绝，滑块值被截断
    pub fn admit(&self, value: f64) -> Result<Admitted> {
        if !value.is_finite() {
            return Err(FluidError::NonFiniteInput {
                id: self.id.clone(),
                value,
            });
        }

        match self.kind {
            ParameterKind::Slider { min, max, .. } => {
                let clamped = value.clamp(min, max);
                Ok(Admitted {
                    value: clamped,
                    clamped: clamped != value,
                })
            }
            ParameterKind::Entry { .. } => Ok(Admitted {
                value,
                clamped: false,
            }),
        }
    }

    pub(crate) fn set(&mut self, value: Option<f64>) {
        self.value = value;
    }
}

/// 会话参数存储
///
/// 每个会话持有独立的一份，构造绑定图时注入。
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
    params: HashMap<String, InputParameter>,
    order: Vec<String>,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从参数列表构建
    pub fn with_parameters(params: impl IntoIterator<Item = InputParameter>) -> Result<Self> {
        let mut store = Self::new();
        for param in params {
            store.insert(param)?;
        }
        Ok(store)
    }

    /// 添加参数，标识重复时报错
    pub fn insert(&mut self, param: InputParameter) -> Result<()> {
        if self.params.contains_key(&param.id) {
            return Err(FluidError::InvalidArgument(format!(
                "parameter '{}' declared twice",
                param.id
            )));
        }
        self.order.push(param.id.clone());
        self.params.insert(param.id.clone(), param);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&InputParameter> {
        self.params.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut InputParameter> {
        self.params.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.params.contains_key(id)
    }

    /// 按声明顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = &InputParameter> {
        self.order.iter().filter_map(|id| self.params.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
