//! # 渲染与导出模块
//!
//! 图表描述的外部消费方：绘制图像或导出数据文件。
//!
//! ## 子模块
//! - `plot`: PNG / SVG 图表渲染
//! - `export`: CSV / JSON 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/export.rs` 和 `commands/eval.rs` 使用
//! - 使用 `models/chart.rs`

pub mod export;
pub mod plot;

pub use plot::render_chart;
