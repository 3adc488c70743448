//! # 连续性方程单元 (A₁v₁ = A₂v₂)
//!
//! 不可压缩定常流中，管道各截面的流量 G = A·v 保持不变。
//! 直径输入单位为 cm；截面 2 面积 ≤ 0 时 v₂ 与流量记为 0。

use crate::binding::{CalculationUnit, UnitInputs};
use crate::models::chart::{ChartDescription, Color, Trace};
use crate::models::OutputBundle;
use crate::units::circle_area_cm;

pub const ID: &str = "continuity";

pub const DIAMETER_1: &str = "continuity-D1";
pub const VELOCITY_1: &str = "continuity-v1";
pub const DIAMETER_2: &str = "continuity-D2";

pub const OUTPUT_V2: &str = "continuity-output-v2";
pub const GRAPH: &str = "continuity-graph";
pub const FLOW_DISPLAY: &str = "continuity-gasto-display";
pub const DIAMETER_1_DISPLAY: &str = "continuity-D1-display";
pub const AREA_1_DISPLAY: &str = "continuity-A1-display";
pub const VELOCITY_1_DISPLAY: &str = "continuity-v1-display";
pub const DIAMETER_2_DISPLAY: &str = "continuity-D2-display";
pub const AREA_2_DISPLAY: &str = "continuity-A2-display";

const INPUTS: &[&str] = &[DIAMETER_1, VELOCITY_1, DIAMETER_2];

/// 连续性方程计算结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuityResult {
    /// 截面 1 面积 (m²)
    pub area_1: f64,
    /// 截面 2 面积 (m²)
    pub area_2: f64,
    pub velocity_1: f64,
    /// 截面 2 流速 (m/s)
    pub velocity_2: f64,
    /// 流量 G (m³/s)
    pub flow_rate: f64,
    pub valid: bool,
}

pub fn compute(diameter_1_cm: f64, velocity_1: f64, diameter_2_cm: f64) -> ContinuityResult {
    let area_1 = circle_area_cm(diameter_1_cm);
    let area_2 = circle_area_cm(diameter_2_cm);

    if area_2 <= 0.0 {
        return ContinuityResult {
            area_1,
            area_2,
            velocity_1,
            velocity_2: 0.0,
            flow_rate: 0.0,
            valid: false,
        };
    }

    ContinuityResult {
        area_1,
        area_2,
        velocity_1,
        velocity_2: area_1 * velocity_1 / area_2,
        flow_rate: area_1 * velocity_1,
        valid: true,
    }
}

/// 连续性方程单元
pub struct Continuity;

impl CalculationUnit for Continuity {
    fn id(&self) -> &'static str {
        ID
    }

    fn title(&self) -> &'static str {
        "Continuity Equation"
    }

    fn inputs(&self) -> &'static [&'static str] {
        INPUTS
    }

    fn evaluate(&self, inputs: &UnitInputs) -> OutputBundle {
        let d1 = inputs.get(0).unwrap_or(0.0);
        let v1 = inputs.get(1).unwrap_or(0.0);
        let d2 = inputs.get(2).unwrap_or(0.0);
        let r = compute(d1, v1, d2);

        let v2_text = if r.valid {
            format!("{:.2} m/s", r.velocity_2)
        } else {
            "Invalid diameter D₂.".to_string()
        };

        let flow_1 = r.area_1 * r.velocity_1;
        let flow_2 = r.area_2 * r.velocity_2;

        let chart = ChartDescription::new(250)
            .title("Constant Flow Rate")
            .y_title("Flow rate (G) [m³/s]")
            .y_range(0.0, flow_1.max(flow_2) * 1.2)
            .trace(Trace::Bar {
                categories: vec![
                    "Section 1 (A₁v₁)".to_string(),
                    "Section 2 (A₂v₂)".to_string(),
                ],
                values: vec![flow_1, flow_2],
                colors: vec![Color::MEDIUM_SEA_GREEN, Color::LIGHT_CORAL],
                labels: vec![format!("{:.4} m³/s", flow_1), format!("{:.4} m³/s", flow_2)],
            });

        OutputBundle::new()
            .text(OUTPUT_V2, v2_text)
            .chart(GRAPH, chart)
            .text(FLOW_DISPLAY, format!("Flow rate (G): {:.4} m³/s", r.flow_rate))
            .text(DIAMETER_1_DISPLAY, format!("{:.1} cm", d1))
            .text(AREA_1_DISPLAY, format!("Area (A₁): {:.5} m²", r.area_1))
            .text(VELOCITY_1_DISPLAY, format!("{:.2} m/s", v1))
            .text(DIAMETER_2_DISPLAY, format!("{:.1} cm", d2))
            .text(AREA_2_DISPLAY, format!("Area (A₂): {:.5} m²", r.area_2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrowing_pipe() {
        let r = compute(8.0, 2.0, 2.0);
        assert!(r.valid);
        assert!((r.velocity_2 - 32.0).abs() < 1e-9);
    }

    #[test]
    fn test_flow_is_conserved() {
        for d1 in [1.0, 2.5, 8.0, 10.0] {
            for v1 in [0.1, 2.0, 9.9] {
                for d2 in [1.0, 4.5, 10.0] {
                    let r = compute(d1, v1, d2);
                    let lhs = r.area_1 * r.velocity_1;
                    let rhs = r.area_2 * r.velocity_2;
                    assert!((lhs - rhs).abs() <= 1e-12 * lhs.max(1e-12));
                    assert_eq!(r.flow_rate, lhs);
                }
            }
        }
    }

    #[test]
    fn test_invalid_second_section() {
        let r = compute(8.0, 2.0, 0.0);
        assert!(!r.valid);
        assert_eq!(r.velocity_2, 0.0);
        assert_eq!(r.flow_rate, 0.0);

        let bundle = Continuity.evaluate(&vec![8.0, 2.0, -1.0].into());
        assert_eq!(bundle.get_text(OUTPUT_V2), Some("Invalid diameter D₂."));
        assert_eq!(
            bundle.get_text(FLOW_DISPLAY),
            Some("Flow rate (G): 0.0000 m³/s")
        );
        assert!(bundle.get_chart(GRAPH).is_some());
    }

    #[test]
    fn test_bundle_text() {
        let bundle = Continuity.evaluate(&vec![8.0, 2.0, 2.0].into());
        assert_eq!(bundle.get_text(OUTPUT_V2), Some("32.00 m/s"));
        assert_eq!(
            bundle.get_text(FLOW_DISPLAY),
            Some("Flow rate (G): 0.0101 m³/s")
        );
        assert_eq!(bundle.get_text(AREA_1_DISPLAY), Some("Area (A₁): 0.00503 m²"));
        assert_eq!(bundle.get_text(VELOCITY_1_DISPLAY), Some("2.00 m/s"));
        assert_eq!(bundle.len(), 8);

        let chart = bundle.get_chart(GRAPH).unwrap();
        let (lo, hi) = chart.y_axis.range.unwrap();
        assert_eq!(lo, 0.0);
        assert!((hi - 0.010053096491487338 * 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_idempotent() {
        let inputs: UnitInputs = vec![6.5, 3.3, 1.5].into();
        assert_eq!(Continuity.evaluate(&inputs), Continuity.evaluate(&inputs));
    }
}
