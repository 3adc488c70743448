//! # 静水压强单元 (Ph = ρ · g · h)
//!
//! 图表在 [0, 1.1h] 上扫描深度得到压强曲线，并在 h 处加一个标记点。

use crate::binding::{CalculationUnit, UnitInputs};
use crate::models::chart::{linspace, ChartDescription, Color, MarkerSymbol, Trace};
use crate::models::{OutputBundle, RichLine};
use crate::units::format::grouped;
use crate::units::{GRAVITY, SWEEP_POINTS};

pub const ID: &str = "hydrostatic";

pub const DEPTH: &str = "hydrostatic-h";
pub const DENSITY: &str = "hydrostatic-rho";

pub const OUTPUT_TEXT: &str = "hydrostatic-output-text";
pub const PRESSURE_GRAPH: &str = "hydrostatic-pressure-graph";
pub const DEPTH_DISPLAY: &str = "hydrostatic-h-display";
pub const DENSITY_DISPLAY: &str = "hydrostatic-rho-display";

const INPUTS: &[&str] = &[DEPTH, DENSITY];

/// Ph = ρ · g · h (Pa)
pub fn compute(depth: f64, density: f64) -> f64 {
    density * GRAVITY * depth
}

/// 静水压强单元
pub struct Hydrostatic;

impl CalculationUnit for Hydrostatic {
    fn id(&self) -> &'static str {
        ID
    }

    fn title(&self) -> &'static str {
        "Hydrostatic Pressure"
    }

    fn inputs(&self) -> &'static [&'static str] {
        INPUTS
    }

    fn evaluate(&self, inputs: &UnitInputs) -> OutputBundle {
        let h = inputs.get(0).unwrap_or(0.0);
        let rho = inputs.get(1).unwrap_or(0.0);
        let pressure = compute(h, rho);

        let lines = vec![
            RichLine::plain(format!(
                "Ph = {} kg/m³ * {:.2} m/s² * {} m",
                rho, GRAVITY, h
            )),
            RichLine::bold(format!(
                "Ph = {} Pa ({} kPa)",
                grouped(pressure, 2),
                grouped(pressure / 1000.0, 2)
            )),
        ];

        let depths = linspace(0.0, h * 1.1, SWEEP_POINTS);
        let pressures = depths.iter().map(|d| compute(*d, rho)).collect();

        let chart = ChartDescription::new(300)
            .title("Hydrostatic Pressure vs. Depth")
            .x_title("Depth (h) [m]")
            .y_title("Pressure (Ph) [Pa]")
            .legend(true)
            .trace(Trace::Line {
                name: "Ph vs h".to_string(),
                x: depths,
                y: pressures,
                color: Color::ROYAL_BLUE,
                width: 3,
            })
            .trace(Trace::Markers {
                name: format!("Ph at h={}m", h),
                x: vec![h],
                y: vec![pressure],
                color: Color::RED,
                size: 10,
                symbol: MarkerSymbol::X,
            });

        OutputBundle::new()
            .rich(OUTPUT_TEXT, lines)
            .chart(PRESSURE_GRAPH, chart)
            .text(DEPTH_DISPLAY, format!("{} m", h))
            .text(DENSITY_DISPLAY, format!("{} kg/m³", rho))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_metres_of_water() {
        assert_eq!(compute(10.0, 1000.0), 98_100.0);
    }

    #[test]
    fn test_linear_in_depth() {
        for h in [0.5, 3.0, 12.0, 47.0] {
            for rho in [800.0, 1000.0, 1025.0] {
                let single = compute(h, rho);
                let double = compute(2.0 * h, rho);
                assert!((double - 2.0 * single).abs() < 1e-9 * double.max(1.0));
            }
        }
    }

    #[test]
    fn test_bundle_text_and_sweep() {
        let bundle = Hydrostatic.evaluate(&vec![10.0, 1000.0].into());

        let lines = bundle.get_rich(OUTPUT_TEXT).unwrap();
        assert_eq!(lines[0].text, "Ph = 1000 kg/m³ * 9.81 m/s² * 10 m");
        assert_eq!(lines[1].text, "Ph = 98,100.00 Pa (98.10 kPa)");
        assert!(lines[1].emphasis);
        assert_eq!(bundle.get_text(DEPTH_DISPLAY), Some("10 m"));

        let chart = bundle.get_chart(PRESSURE_GRAPH).unwrap();
        assert!(chart.layout.show_legend);
        match &chart.traces[0] {
            Trace::Line { x, y, .. } => {
                assert_eq!(x.len(), 50);
                assert!((x[49] - 11.0).abs() < 1e-12);
                assert_eq!(y[0], 0.0);
            }
            other => panic!("unexpected trace {:?}", other),
        }
        match &chart.traces[1] {
            Trace::Markers { x, y, symbol, .. } => {
                assert_eq!(x, &vec![10.0]);
                assert_eq!(y, &vec![98_100.0]);
                assert_eq!(*symbol, MarkerSymbol::X);
            }
            other => panic!("unexpected trace {:?}", other),
        }
    }

    #[test]
    fn test_surface_depth() {
        let bundle = Hydrostatic.evaluate(&vec![0.0, 1000.0].into());
        assert_eq!(
            bundle.get_rich(OUTPUT_TEXT).unwrap()[1].text,
            "Ph = 0.00 Pa (0.00 kPa)"
        );
    }

    #[test]
    fn test_idempotent() {
        let inputs: UnitInputs = vec![37.0, 1025.0].into();
        assert_eq!(Hydrostatic.evaluate(&inputs), Hydrostatic.evaluate(&inputs));
    }
}
