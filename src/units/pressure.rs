//! # 压强单元 (P = F / A)
//!
//! 输入：力 F [N]，面积 A [m²]
//! 输出：结果文本、压强仪表盘、F 与 A 的显示值
//!
//! 面积缺失或 ≤ 0 时压强记为 0，并给出提示文字；仪表盘仍以 0 绘制。

use crate::binding::{CalculationUnit, UnitInputs};
use crate::models::chart::{ChartDescription, Color, GaugeStep, GaugeThreshold, Trace};
use crate::models::OutputBundle;
use crate::units::format::grouped;

pub const ID: &str = "pressure";

pub const FORCE: &str = "pressure-force";
pub const AREA: &str = "pressure-area";

pub const OUTPUT_TEXT: &str = "pressure-output-text";
pub const GAUGE_GRAPH: &str = "pressure-gauge-graph";
pub const FORCE_DISPLAY: &str = "pressure-force-display";
pub const AREA_DISPLAY: &str = "pressure-area-display";

const INPUTS: &[&str] = &[FORCE, AREA];

/// 仪表盘最小量程 (Pa)
const GAUGE_MIN_SPAN: f64 = 50_000.0;

/// 压强计算结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureResult {
    pub force: f64,
    /// 有效面积（无效时为 0）
    pub area: f64,
    pub pressure: f64,
    pub valid: bool,
}

/// P = F / A
pub fn compute(force: f64, area: Option<f64>) -> PressureResult {
    match area {
        Some(a) if a > 0.0 => PressureResult {
            force,
            area: a,
            pressure: force / a,
            valid: true,
        },
        _ => PressureResult {
            force,
            area: 0.0,
            pressure: 0.0,
            valid: false,
        },
    }
}

/// 压强单元
pub struct Pressure;

impl CalculationUnit for Pressure {
    fn id(&self) -> &'static str {
        ID
    }

    fn title(&self) -> &'static str {
        "Pressure (P = F/A)"
    }

    fn inputs(&self) -> &'static [&'static str] {
        INPUTS
    }

    fn evaluate(&self, inputs: &UnitInputs) -> OutputBundle {
        let r = compute(inputs.get(0).unwrap_or(0.0), inputs.get(1));

        let text = if r.valid {
            format!(
                "P = {:.0} N / {:.3} m² = {} Pa ({} kPa)",
                r.force,
                r.area,
                grouped(r.pressure, 2),
                grouped(r.pressure / 1000.0, 2)
            )
        } else {
            "Invalid area (must be > 0).".to_string()
        };

        OutputBundle::new()
            .text(OUTPUT_TEXT, text)
            .chart(GAUGE_GRAPH, gauge(r.pressure))
            .text(FORCE_DISPLAY, format!("{:.0} N", r.force))
            .text(AREA_DISPLAY, format!("{:.3} m²", r.area))
    }
}

fn gauge(pressure: f64) -> ChartDescription {
    ChartDescription::new(250).trace(Trace::Gauge {
        title: "Pressure (Pa)".to_string(),
        value: pressure,
        axis_range: (0.0, GAUGE_MIN_SPAN.max(pressure * 1.2)),
        bar_color: Color::DARK_BLUE,
        steps: vec![
            GaugeStep {
                range: (0.0, 10_000.0),
                color: Color::LIGHT_GREEN,
            },
            GaugeStep {
                range: (10_000.0, 30_000.0),
                color: Color::YELLOW,
            },
            GaugeStep {
                range: (30_000.0, 50_000.0),
                color: Color::ORANGE,
            },
        ],
        threshold: Some(GaugeThreshold {
            value: 45_000.0,
            color: Color::RED,
            width: 4,
            thickness: 0.75,
        }),
    })
}
