//! # fluidboard 核心库
//!
//! 响应式绑定图与六个流体力学计算单元。命令行前端只是其中一个消费方，
//! 任何实现了 `OutputSink` 的界面层都可以驱动同一套会话。
//!
//! ## 模块
//! - `binding`   - 参数 → 单元的依赖图，输出层接口
//! - `units`     - 压强、液压机、浮力、静水压强、连续性方程、托里拆利
//! - `models`    - 输入参数、输出包、图表描述
//! - `dashboard` - 标准参数表与会话装配
//! - `render`    - 图表渲染与数据导出
//! - `error`     - 统一错误类型
//!
//! ## 示例
//! ```
//! use fluidboard::binding::Emission;
//! use fluidboard::dashboard;
//! use fluidboard::units::pressure;
//!
//! let mut graph = dashboard::new_session().unwrap();
//! let mut sink: Vec<Emission> = Vec::new();
//! graph.on_input_changed(pressure::AREA, 0.02, &mut sink).unwrap();
//!
//! assert_eq!(graph.dependents(pressure::AREA), vec![pressure::ID]);
//! assert_eq!(sink[0].bundle.get_text(pressure::AREA_DISPLAY), Some("0.020 m²"));
//! ```

pub mod binding;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod render;
pub mod units;
