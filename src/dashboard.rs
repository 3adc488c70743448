//! # 仪表盘装配
//!
//! 声明标准参数表（区间、步长、默认值），并为每个会话构建独立的
//! 参数存储 + 绑定图。会话之间不共享任何状态。
//!
//! ## 依赖关系
//! - 使用 `models/parameter.rs`, `binding/`, `units/`
//! - 被 `commands/` 使用

use crate::binding::BindingGraph;
use crate::error::Result;
use crate::models::{EntryFallback, InputParameter, ParameterStore};
use crate::units::{
    self, archimedes, continuity, hydraulic, hydrostatic, pressure, torricelli, GRAVITY,
    WATER_DENSITY,
};

use tracing::debug;

/// 标准参数表
pub fn standard_parameters() -> Vec<InputParameter> {
    vec![
        // 压强
        InputParameter::slider(pressure::FORCE, "Force (F)", "N", (0.0, 1000.0, 10.0), 120.0),
        InputParameter::slider(pressure::AREA, "Area (A)", "m²", (0.01, 1.0, 0.01), 0.04),
        // 液压机
        InputParameter::slider(
            hydraulic::INPUT_FORCE,
            "Applied force (f)",
            "N",
            (10.0, 500.0, 10.0),
            125.0,
        ),
        InputParameter::slider(
            hydraulic::SMALL_DIAMETER,
            "Small piston diameter (d)",
            "cm",
            (1.0, 10.0, 0.5),
            2.1,
        ),
        InputParameter::slider(
            hydraulic::LARGE_DIAMETER,
            "Large piston diameter (D)",
            "cm",
            (5.0, 50.0, 1.0),
            42.0,
        ),
        // 浮力
        InputParameter::slider(
            archimedes::OBJECT_DENSITY,
            "Object density (ρ_obj)",
            "kg/m³",
            (100.0, 12000.0, 100.0),
            700.0,
        ),
        InputParameter::slider(
            archimedes::OBJECT_VOLUME,
            "Object volume (V_obj)",
            "m³",
            (0.001, 0.1, 0.001),
            0.027,
        ),
        InputParameter::slider(
            archimedes::FLUID_DENSITY,
            "Fluid density (ρ_fluid)",
            "kg/m³",
            (500.0, 1500.0, 50.0),
            WATER_DENSITY,
        ),
        // 静水压强
        InputParameter::slider(hydrostatic::DEPTH, "Depth (h)", "m", (0.0, 100.0, 1.0), 10.0),
        InputParameter::slider(
            hydrostatic::DENSITY,
            "Fluid density (ρ)",
            "kg/m³",
            (500.0, 1500.0, 50.0),
            WATER_DENSITY,
        ),
        // 连续性方程
        InputParameter::slider(
            continuity::DIAMETER_1,
            "Pipe diameter 1 (D₁)",
            "cm",
            (1.0, 10.0, 0.5),
            8.0,
        ),
        InputParameter::slider(
            continuity::VELOCITY_1,
            "Fluid velocity 1 (v₁)",
            "m/s",
            (0.1, 10.0, 0.1),
            2.0,
        ),
        InputParameter::slider(
            continuity::DIAMETER_2,
            "Pipe diameter 2 (D₂)",
            "cm",
            (1.0, 10.0, 0.5),
            2.0,
        ),
        // 托里拆利
        InputParameter::slider(torricelli::HEIGHT, "Height (h)", "m", (0.1, 10.0, 0.1), 1.25),
        InputParameter::entry(
            torricelli::GRAVITY_INPUT,
            "Gravity (g)",
            "m/s²",
            EntryFallback::WhenNotPositive(GRAVITY),
            Some(GRAVITY),
        ),
    ]
}

/// 新建一个会话：独立的参数存储与注册好六个单元的绑定图
pub fn new_session() -> Result<BindingGraph> {
    let store = ParameterStore::with_parameters(standard_parameters())?;
    let mut graph = BindingGraph::new(store);

    for unit in units::standard_units() {
        graph.register(unit)?;
    }

    debug!(
        units = graph.units().count(),
        parameters = graph.store().len(),
        "session created"
    );
    Ok(graph)
}
