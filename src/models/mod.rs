//! # 数据模型模块
//!
//! 定义输入参数、输出包和图表描述。
//!
//! ## 依赖关系
//! - 被 `binding/`, `units/`, `render/` 和 `commands/` 使用
//! - 子模块: parameter, bundle, chart

pub mod bundle;
pub mod chart;
pub mod parameter;

pub use bundle::{OutputBundle, OutputValue, RichLine};
pub use chart::{ChartDescription, Color, Trace};
pub use parameter::{EntryFallback, InputParameter, ParameterKind, ParameterStore};
