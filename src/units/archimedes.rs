//! # 阿基米德原理单元（浮力）
//!
//! 浸在流体中的物体受到竖直向上的浮力，大小等于排开流体的重量。
//!
//! - 重力 W = ρ_obj · g · V
//! - 完全浸没时的最大浮力 E_max = ρ_fluid · g · V
//!
//! | 情况 | 状态 | 浮力 | 浸没比例 |
//! |---|---|---|---|
//! | W > E_max | 下沉 | E_max | 100% |
//! | W = E_max | 悬浮 | W | 100% |
//! | W < E_max | 漂浮 | W | ρ_obj / ρ_fluid |

use crate::binding::{CalculationUnit, UnitInputs};
use crate::models::chart::{ChartDescription, Color, Trace};
use crate::models::{OutputBundle, RichLine};
use crate::units::format::grouped;
use crate::units::GRAVITY;

pub const ID: &str = "archimedes";

pub const OBJECT_DENSITY: &str = "archimedes-rho-obj";
pub const OBJECT_VOLUME: &str = "archimedes-vol-obj";
pub const FLUID_DENSITY: &str = "archimedes-rho-fluid";

pub const OUTPUT_TEXT: &str = "archimedes-output-text";
pub const GRAPH: &str = "archimedes-graph";
pub const OBJECT_DENSITY_DISPLAY: &str = "archimedes-rho-obj-display";
pub const OBJECT_VOLUME_DISPLAY: &str = "archimedes-vol-obj-display";
pub const FLUID_DENSITY_DISPLAY: &str = "archimedes-rho-fluid-display";

const INPUTS: &[&str] = &[OBJECT_DENSITY, OBJECT_VOLUME, FLUID_DENSITY];

/// 物体在流体中的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Buoyancy {
    Sinks,
    Neutral,
    Floats,
}

impl Buoyancy {
    pub fn describe(&self) -> &'static str {
        match self {
            Buoyancy::Sinks => "The object sinks.",
            Buoyancy::Neutral => "The object is suspended (neutral buoyancy).",
            Buoyancy::Floats => "The object floats.",
        }
    }
}

/// 浮力计算结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchimedesResult {
    /// 重力 W (N)
    pub weight: f64,
    /// 完全浸没时的浮力 (N)
    pub max_buoyancy: f64,
    /// 实际浮力 E (N)
    pub buoyancy: f64,
    /// 浸没体积 (m³)
    pub submerged_volume: f64,
    /// 浸没百分比 (0-100)
    pub submerged_percent: f64,
    pub state: Buoyancy,
}

pub fn compute(object_density: f64, volume: f64, fluid_density: f64) -> ArchimedesResult {
    let weight = object_density * GRAVITY * volume;
    let max_buoyancy = fluid_density * GRAVITY * volume;

    if weight > max_buoyancy {
        ArchimedesResult {
            weight,
            max_buoyancy,
            buoyancy: max_buoyancy,
            submerged_volume: volume,
            submerged_percent: 100.0,
            state: Buoyancy::Sinks,
        }
    } else if weight == max_buoyancy {
        ArchimedesResult {
            weight,
            max_buoyancy,
            buoyancy: weight,
            submerged_volume: volume,
            submerged_percent: 100.0,
            state: Buoyancy::Neutral,
        }
    } else {
        // E = W  =>  ρ_fluid · V_sub = ρ_obj · V
        let fraction = if fluid_density > 0.0 {
            (object_density / fluid_density).clamp(0.0, 1.0)
        } else {
            1.0
        };
        ArchimedesResult {
            weight,
            max_buoyancy,
            buoyancy: weight,
            submerged_volume: fraction * volume,
            submerged_percent: fraction * 100.0,
            state: Buoyancy::Floats,
        }
    }
}

/// 浮力单元
pub struct Archimedes;

impl CalculationUnit for Archimedes {
    fn id(&self) -> &'static str {
        ID
    }

    fn title(&self) -> &'static str {
        "Archimedes' Principle"
    }

    fn inputs(&self) -> &'static [&'static str] {
        INPUTS
    }

    fn evaluate(&self, inputs: &UnitInputs) -> OutputBundle {
        let rho_obj = inputs.get(0).unwrap_or(0.0);
        let volume = inputs.get(1).unwrap_or(0.0);
        let rho_fluid = inputs.get(2).unwrap_or(0.0);
        let r = compute(rho_obj, volume, rho_fluid);

        let lines = vec![
            RichLine::plain(format!("Weight (W): {} N", grouped(r.weight, 2))),
            RichLine::plain(format!("Buoyancy (E): {} N", grouped(r.buoyancy, 2))),
            RichLine::plain(format!(
                "Submerged volume: {:.4} m³ ({:.1}%)",
                r.submerged_volume, r.submerged_percent
            )),
            RichLine::bold(r.state.describe()),
        ];

        let chart = ChartDescription::new(300)
            .title("Weight vs. Buoyancy")
            .y_title("Force (N)")
            .trace(Trace::Bar {
                categories: vec!["Weight (W)".to_string(), "Buoyancy (E)".to_string()],
                values: vec![r.weight, r.buoyancy],
                colors: vec![Color::RED, Color::BLUE],
                labels: vec![
                    format!("{:.1} N", r.weight),
                    format!("{:.1} N", r.buoyancy),
                ],
            });

        OutputBundle::new()
            .rich(OUTPUT_TEXT, lines)
            .chart(GRAPH, chart)
            .text(OBJECT_DENSITY_DISPLAY, format!("{} kg/m³", rho_obj))
            .text(OBJECT_VOLUME_DISPLAY, format!("{:.4} m³", volume))
            .text(FLUID_DENSITY_DISPLAY, format!("{} kg/m³", rho_fluid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wooden_block_floats() {
        let r = compute(700.0, 0.027, 1000.0);
        assert_eq!(r.state, Buoyancy::Floats);
        assert!((r.submerged_percent - 70.0).abs() < 1e-9);
        assert_eq!(r.buoyancy, r.weight);
        assert!((r.weight - 700.0 * 9.81 * 0.027).abs() < 1e-12);
        assert!((r.buoyancy - 185.39).abs() < 0.05);
    }

    #[test]
    fn test_equal_densities_are_neutral() {
        for rho in [500.0, 1000.0, 1025.0, 1500.0] {
            let r = compute(rho, 0.05, rho);
            assert_eq!(r.state, Buoyancy::Neutral);
            assert_eq!(r.submerged_percent, 100.0);
            assert_eq!(r.buoyancy, r.weight);
        }
    }

    #[test]
    fn test_iron_sinks() {
        let r = compute(7850.0, 0.027, 1000.0);
        assert_eq!(r.state, Buoyancy::Sinks);
        assert_eq!(r.buoyancy, r.max_buoyancy);
        assert_eq!(r.submerged_percent, 100.0);
        assert!(r.weight > r.buoyancy);
    }

    #[test]
    fn test_bundle_lines() {
        let bundle = Archimedes.evaluate(&vec![700.0, 0.027, 1000.0].into());
        let lines = bundle.get_rich(OUTPUT_TEXT).unwrap();
        let texts: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Weight (W): 185.41 N",
                "Buoyancy (E): 185.41 N",
                "Submerged volume: 0.0189 m³ (70.0%)",
                "The object floats.",
            ]
        );
        assert!(lines[3].emphasis);
        assert_eq!(bundle.get_text(OBJECT_DENSITY_DISPLAY), Some("700 kg/m³"));
        assert_eq!(bundle.get_text(OBJECT_VOLUME_DISPLAY), Some("0.0270 m³"));
        assert_eq!(bundle.get_chart(GRAPH).unwrap().layout.height, 300);
    }

    #[test]
    fn test_idempotent() {
        let inputs: UnitInputs = vec![2700.0, 0.01, 1025.0].into();
        assert_eq!(Archimedes.evaluate(&inputs), Archimedes.evaluate(&inputs));
    }
}
