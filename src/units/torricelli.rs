//! # 托里拆利定理单元 (v = √(2gh))
//!
//! 孔口流出速度等于物体从液面高度 h 自由下落获得的速度。
//! 重力加速度 g 是自由输入项，缺失或 ≤ 0 时由参数存储回退到 9.81 m/s²。
//! 图表在 [0.1, max(1.1h, 1)] 上扫描高度。

use crate::binding::{CalculationUnit, UnitInputs};
use crate::models::chart::{linspace, ChartDescription, Color, MarkerSymbol, Trace};
use crate::models::OutputBundle;
use crate::units::{GRAVITY, SWEEP_POINTS};

pub const ID: &str = "torricelli";

pub const HEIGHT: &str = "torricelli-h";
pub const GRAVITY_INPUT: &str = "torricelli-g";

pub const OUTPUT_V: &str = "torricelli-output-v";
pub const GRAPH: &str = "torricelli-graph";
pub const HEIGHT_DISPLAY: &str = "torricelli-h-display";

const INPUTS: &[&str] = &[HEIGHT, GRAVITY_INPUT];

/// 扫描起点 (m)
const SWEEP_START: f64 = 0.1;

/// 出流速度计算结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorricelliResult {
    pub height: f64,
    pub gravity: f64,
    /// 出流速度 (m/s)
    pub velocity: f64,
    pub valid: bool,
}

/// 重力加速度回退：g ≤ 0（或非有限值）时取标准重力
pub fn resolve_gravity(gravity: f64) -> f64 {
    if gravity.is_finite() && gravity > 0.0 {
        gravity
    } else {
        GRAVITY
    }
}

/// v = √(2gh)；h ≤ 0 时 v = 0
pub fn compute(height: f64, gravity: f64) -> TorricelliResult {
    let gravity = resolve_gravity(gravity);
    if height > 0.0 {
        TorricelliResult {
            height,
            gravity,
            velocity: exit_velocity(height, gravity),
            valid: true,
        }
    } else {
        TorricelliResult {
            height,
            gravity,
            velocity: 0.0,
            valid: false,
        }
    }
}

fn exit_velocity(height: f64, gravity: f64) -> f64 {
    (2.0 * gravity * height).sqrt()
}

/// 托里拆利单元
pub struct Torricelli;

impl CalculationUnit for Torricelli {
    fn id(&self) -> &'static str {
        ID
    }

    fn title(&self) -> &'static str {
        "Torricelli's Theorem"
    }

    fn inputs(&self) -> &'static [&'static str] {
        INPUTS
    }

    fn evaluate(&self, inputs: &UnitInputs) -> OutputBundle {
        let h = inputs.get(0).unwrap_or(0.0);
        let g = resolve_gravity(inputs.get(1).unwrap_or(GRAVITY));
        let r = compute(h, g);

        let v_text = if r.valid {
            format!("{:.2} m/s", r.velocity)
        } else {
            "Invalid height h.".to_string()
        };

        let heights = linspace(SWEEP_START, (h * 1.1).max(1.0), SWEEP_POINTS);
        let velocities = heights.iter().map(|x| exit_velocity(*x, g)).collect();

        let chart = ChartDescription::new(300)
            .title("Exit Velocity (Torricelli) vs. Height")
            .x_title("Height (h) [m]")
            .y_title("Velocity (v) [m/s]")
            .legend(true)
            .trace(Trace::Line {
                name: "v vs h".to_string(),
                x: heights,
                y: velocities,
                color: Color::DARK_ORANGE,
                width: 3,
            })
            .trace(Trace::Markers {
                name: format!("v at h={}m", h),
                x: vec![h],
                y: vec![r.velocity],
                color: Color::PURPLE,
                size: 10,
                symbol: MarkerSymbol::Star,
            });

        OutputBundle::new()
            .text(OUTPUT_V, v_text)
            .chart(GRAPH, chart)
            .text(HEIGHT_DISPLAY, format!("{:.2} m", h))
    }
}
