//! # 响应式绑定模块
//!
//! 输入参数与计算单元之间的依赖图，以及计算单元接口。
//!
//! ## 子模块
//! - `unit`: 计算单元 trait 与输入值
//! - `graph`: 绑定图、输出层接口
//!
//! ## 依赖关系
//! - 使用 `models/`
//! - 被 `dashboard.rs` 和 `commands/` 使用

pub mod graph;
pub mod unit;

pub use graph::{BindingGraph, ChangeReport, Emission, OutputSink};
pub use unit::{CalculationUnit, UnitInputs};
