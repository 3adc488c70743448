//! # 液压机单元（帕斯卡原理）
//!
//! 小活塞上施加的压强 f/a 完整传递到大活塞：F = (f/a)·A。
//! 直径输入单位为 cm，计算面积前换算为 m。
//!
//! 小活塞面积 ≤ 0 时全部结果记为 0，文字面板显示 "N/A"；
//! 输入力为 0 时机械增益记为 0。

use crate::binding::{CalculationUnit, UnitInputs};
use crate::models::chart::{ChartDescription, Color, Trace};
use crate::models::OutputBundle;
use crate::units::circle_area_cm;
use crate::units::format::grouped;

pub const ID: &str = "hydraulic";

pub const INPUT_FORCE: &str = "hydraulic-f";
pub const SMALL_DIAMETER: &str = "hydraulic-d";
pub const LARGE_DIAMETER: &str = "hydraulic-D";

pub const OUTPUT_FORCE: &str = "hydraulic-output-F";
pub const PRESS_GRAPH: &str = "hydraulic-press-graph";
pub const PRESSURE_DISPLAY: &str = "hydraulic-pressure-display";
pub const ADVANTAGE_DISPLAY: &str = "hydraulic-advantage-display";
pub const FORCE_DISPLAY: &str = "hydraulic-f-display";
pub const SMALL_DIAMETER_DISPLAY: &str = "hydraulic-d-display";
pub const LARGE_DIAMETER_DISPLAY: &str = "hydraulic-D-display";
pub const SMALL_AREA_DISPLAY: &str = "hydraulic-area-a-display";
pub const LARGE_AREA_DISPLAY: &str = "hydraulic-area-A-display";

const INPUTS: &[&str] = &[INPUT_FORCE, SMALL_DIAMETER, LARGE_DIAMETER];

/// 液压机计算结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HydraulicResult {
    pub input_force: f64,
    /// 小活塞面积 a (m²)
    pub small_area: f64,
    /// 大活塞面积 A (m²)
    pub large_area: f64,
    /// 系统压强 P = f/a (Pa)
    pub pressure: f64,
    /// 输出力 F = P·A (N)
    pub output_force: f64,
    /// 机械增益 F/f
    pub advantage: f64,
    pub valid: bool,
}

/// 由输入力和两个活塞直径（cm）计算
pub fn compute(input_force: f64, small_diameter_cm: f64, large_diameter_cm: f64) -> HydraulicResult {
    let small_area = circle_area_cm(small_diameter_cm);
    let large_area = circle_area_cm(large_diameter_cm);

    if small_area <= 0.0 {
        return HydraulicResult {
            input_force,
            small_area,
            large_area,
            pressure: 0.0,
            output_force: 0.0,
            advantage: 0.0,
            valid: false,
        };
    }

    let pressure = input_force / small_area;
    let output_force = pressure * large_area;
    let advantage = if input_force > 0.0 {
        output_force / input_force
    } else {
        0.0
    };

    HydraulicResult {
        input_force,
        small_area,
        large_area,
        pressure,
        output_force,
        advantage,
        valid: true,
    }
}

/// 液压机单元
pub struct HydraulicPress;

impl CalculationUnit for HydraulicPress {
    fn id(&self) -> &'static str {
        ID
    }

    fn title(&self) -> &'static str {
        "Hydraulic Press"
    }

    fn inputs(&self) -> &'static [&'static str] {
        INPUTS
    }

    fn evaluate(&self, inputs: &UnitInputs) -> OutputBundle {
        let f = inputs.get(0).unwrap_or(0.0);
        let d = inputs.get(1).unwrap_or(0.0);
        let big_d = inputs.get(2).unwrap_or(0.0);
        let r = compute(f, d, big_d);

        let (force_text, pressure_text, advantage_text) = if r.valid {
            (
                format!("{} N", grouped(r.output_force, 2)),
                format!(
                    "{} Pa ({} kPa)",
                    grouped(r.pressure, 2),
                    grouped(r.pressure / 1000.0, 2)
                ),
                format!("{:.2}", r.advantage),
            )
        } else {
            (
                "Invalid area 'a'.".to_string(),
                "N/A".to_string(),
                "N/A".to_string(),
            )
        };

        let chart = ChartDescription::new(250)
            .title("Force Comparison")
            .y_title("Force (N)")
            .trace(Trace::Bar {
                categories: vec!["Input (f)".to_string(), "Output (F)".to_string()],
                values: vec![r.input_force, r.output_force],
                colors: vec![Color::rgb(55, 83, 109), Color::rgb(26, 118, 255)],
                labels: vec![
                    format!("{:.1} N", r.input_force),
                    format!("{} N", grouped(r.output_force, 1)),
                ],
            });

        OutputBundle::new()
            .text(OUTPUT_FORCE, force_text)
            .chart(PRESS_GRAPH, chart)
            .text(PRESSURE_DISPLAY, pressure_text)
            .text(ADVANTAGE_DISPLAY, advantage_text)
            .text(FORCE_DISPLAY, format!("{:.1} N", f))
            .text(SMALL_DIAMETER_DISPLAY, format!("{:.1} cm", d))
            .text(LARGE_DIAMETER_DISPLAY, format!("{:.1} cm", big_d))
            .text(SMALL_AREA_DISPLAY, format!("Area (a): {:.4} m²", r.small_area))
            .text(LARGE_AREA_DISPLAY, format!("Area (A): {:.4} m²", r.large_area))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advantage_equals_area_ratio() {
        let r = compute(125.0, 2.1, 42.0);
        assert!(r.valid);
        assert!((r.advantage - 400.0).abs() < 1e-9);
        assert!((r.advantage - (42.0_f64 / 2.1).powi(2)).abs() < 1e-9);
        assert!((r.output_force - 50_000.0).abs() < 1e-6);

        for (d, big_d) in [(1.0, 5.0), (3.5, 27.0), (10.0, 50.0)] {
            let r = compute(80.0, d, big_d);
            assert!((r.advantage - (big_d / d).powi(2)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_input_force_has_zero_advantage() {
        let r = compute(0.0, 2.0, 20.0);
        assert!(r.valid);
        assert_eq!(r.output_force, 0.0);
        assert_eq!(r.advantage, 0.0);
    }

    #[test]
    fn test_invalid_small_piston() {
        let r = compute(100.0, 0.0, 20.0);
        assert!(!r.valid);
        assert_eq!((r.pressure, r.output_force, r.advantage), (0.0, 0.0, 0.0));

        let bundle = HydraulicPress.evaluate(&vec![100.0, 0.0, 20.0].into());
        assert_eq!(bundle.get_text(OUTPUT_FORCE), Some("Invalid area 'a'."));
        assert_eq!(bundle.get_text(PRESSURE_DISPLAY), Some("N/A"));
        assert_eq!(bundle.get_text(ADVANTAGE_DISPLAY), Some("N/A"));
        assert!(bundle.get_chart(PRESS_GRAPH).is_some());
    }

    #[test]
    fn test_bundle_text() {
        let bundle = HydraulicPress.evaluate(&vec![125.0, 2.1, 42.0].into());
        assert_eq!(bundle.get_text(OUTPUT_FORCE), Some("50,000.00 N"));
        assert_eq!(
            bundle.get_text(PRESSURE_DISPLAY),
            Some("360,895.56 Pa (360.90 kPa)")
        );
        assert_eq!(bundle.get_text(ADVANTAGE_DISPLAY), Some("400.00"));
        assert_eq!(bundle.get_text(SMALL_DIAMETER_DISPLAY), Some("2.1 cm"));
        assert_eq!(bundle.get_text(LARGE_AREA_DISPLAY), Some("Area (A): 0.1385 m²"));
        assert_eq!(bundle.len(), 9);

        match &bundle.get_chart(PRESS_GRAPH).unwrap().traces[0] {
            Trace::Bar { labels, .. } => {
                assert_eq!(labels, &vec!["125.0 N".to_string(), "50,000.0 N".to_string()])
            }
            other => panic!("unexpected trace {:?}", other),
        }
    }

    #[test]
    fn test_idempotent() {
        let inputs: UnitInputs = vec![300.0, 4.5, 33.0].into();
        assert_eq!(HydraulicPress.evaluate(&inputs), HydraulicPress.evaluate(&inputs));
    }
}
