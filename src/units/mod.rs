//! # 计算单元模块
//!
//! 六个相互独立的流体力学计算单元，每个单元都是无状态纯函数，
//! 一次求值同时给出数值、格式化文本和图表描述。
//!
//! ## 子模块
//! - `pressure`: 压强 P = F/A
//! - `hydraulic`: 液压机（帕斯卡原理）
//! - `archimedes`: 浮力（阿基米德原理）
//! - `hydrostatic`: 静水压强 Ph = ρgh
//! - `continuity`: 连续性方程 A₁v₁ = A₂v₂
//! - `torricelli`: 托里拆利定理 v = √(2gh)
//! - `format`: 千分位数值格式
//!
//! ## 依赖关系
//! - 实现 `binding/unit.rs` 的 CalculationUnit
//! - 使用 `models/` 构建输出包
//! - 被 `dashboard.rs` 注册

pub mod archimedes;
pub mod continuity;
pub mod format;
pub mod hydraulic;
pub mod hydrostatic;
pub mod pressure;
pub mod torricelli;

use crate::binding::CalculationUnit;

use std::f64::consts::PI;

/// 标准重力加速度 (m/s²)
pub const GRAVITY: f64 = 9.81;

/// 水的密度 (kg/m³)
pub const WATER_DENSITY: f64 = 1000.0;

/// 曲线扫描点数
pub const SWEEP_POINTS: usize = 50;

/// 直径（cm）对应的圆面积（m²）；直径 ≤ 0 时为 0
pub fn circle_area_cm(diameter_cm: f64) -> f64 {
    if diameter_cm <= 0.0 {
        return 0.0;
    }
    let radius_m = diameter_cm / 100.0 / 2.0;
    PI * radius_m.powi(2)
}

/// 全部标准单元（注册顺序即仪表盘标签页顺序）
pub fn standard_units() -> Vec<Box<dyn CalculationUnit>> {
    vec![
        Box::new(pressure::Pressure),
        Box::new(hydraulic::HydraulicPress),
        Box::new(archimedes::Archimedes),
        Box::new(hydrostatic::Hydrostatic),
        Box::new(continuity::Continuity),
        Box::new(torricelli::Torricelli),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_area() {
        assert!((circle_area_cm(2.0) - PI * 0.01 * 0.01).abs() < 1e-15);
        assert_eq!(circle_area_cm(0.0), 0.0);
        assert_eq!(circle_area_cm(-3.0), 0.0);
    }

    #[test]
    fn test_standard_units_have_unique_ids() {
        let units = standard_units();
        let mut ids: Vec<_> = units.iter().map(|u| u.id()).collect();
        assert_eq!(ids.len(), 6);
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }
}
