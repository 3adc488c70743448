//! # 图表描述数据模型
//!
//! 声明式、不可变的图表描述：曲线/柱状/标记/仪表盘轨迹、坐标轴、配色与布局。
//! 本模块只描述"画什么"，不包含任何绘制逻辑。
//!
//! ## 依赖关系
//! - 被 `units/` 构建
//! - 被 `render/plot.rs` 和 `render/export.rs` 消费

use serde::Serialize;

/// RGB 颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub const DARK_BLUE: Color = Color::rgb(0, 0, 139);
    pub const LIGHT_GREEN: Color = Color::rgb(144, 238, 144);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const ROYAL_BLUE: Color = Color::rgb(65, 105, 225);
    pub const DARK_ORANGE: Color = Color::rgb(255, 140, 0);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    pub const MEDIUM_SEA_GREEN: Color = Color::rgb(60, 179, 113);
    pub const LIGHT_CORAL: Color = Color::rgb(240, 128, 128);

    /// CSS 形式 `rgb(r, g, b)`
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// 标记形状
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerSymbol {
    Circle,
    X,
    Star,
}

/// 仪表盘色带
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeStep {
    pub range: (f64, f64),
    pub color: Color,
}

/// 仪表盘阈值线
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeThreshold {
    pub value: f64,
    pub color: Color,
    pub width: u32,
    /// 阈值线占指针宽度的比例 (0-1)
    pub thickness: f64,
}

/// 图表轨迹
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    /// 分类柱状图
    Bar {
        categories: Vec<String>,
        values: Vec<f64>,
        colors: Vec<Color>,
        /// 柱上标签
        labels: Vec<String>,
    },
    /// 折线
    Line {
        name: String,
        x: Vec<f64>,
        y: Vec<f64>,
        color: Color,
        width: u32,
    },
    /// 离散标记
    Markers {
        name: String,
        x: Vec<f64>,
        y: Vec<f64>,
        color: Color,
        size: u32,
        symbol: MarkerSymbol,
    },
    /// 仪表盘（带数值）
    Gauge {
        title: String,
        value: f64,
        axis_range: (f64, f64),
        bar_color: Color,
        steps: Vec<GaugeStep>,
        threshold: Option<GaugeThreshold>,
    },
}

impl Trace {
    /// 轨迹类型名
    pub fn kind(&self) -> &'static str {
        match self {
            Trace::Bar { .. } => "bar",
            Trace::Line { .. } => "line",
            Trace::Markers { .. } => "markers",
            Trace::Gauge { .. } => "gauge",
        }
    }
}

/// 坐标轴
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Axis {
    pub title: Option<String>,
    /// 固定显示范围；为空时由渲染器根据数据决定
    pub range: Option<(f64, f64)>,
}

/// 边距（像素）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Margin {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Default for Margin {
    fn default() -> Self {
        Margin {
            left: 20,
            right: 20,
            top: 50,
            bottom: 20,
        }
    }
}

/// 布局提示
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub height: u32,
    pub margin: Margin,
    pub show_legend: bool,
}

/// 图表描述
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDescription {
    pub title: Option<String>,
    pub traces: Vec<Trace>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub layout: Layout,
}

impl ChartDescription {
    /// 创建指定高度的空图表
    pub fn new(height: u32) -> Self {
        ChartDescription {
            title: None,
            traces: Vec::new(),
            x_axis: Axis::default(),
            y_axis: Axis::default(),
            layout: Layout {
                height,
                margin: Margin::default(),
                show_legend: false,
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn x_title(mut self, title: impl Into<String>) -> Self {
        self.x_axis.title = Some(title.into());
        self
    }

    pub fn y_title(mut self, title: impl Into<String>) -> Self {
        self.y_axis.title = Some(title.into());
        self
    }

    pub fn y_range(mut self, min: f64, max: f64) -> Self {
        self.y_axis.range = Some((min, max));
        self
    }

    pub fn legend(mut self, show: bool) -> Self {
        self.layout.show_legend = show;
        self
    }

    pub fn trace(mut self, trace: Trace) -> Self {
        self.traces.push(trace);
        self
    }
}

/// 在 `[start, end]` 上生成 `n` 个等距点（含两端）
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let xs = linspace(0.0, 11.0, 50);
        assert_eq!(xs.len(), 50);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[49], 11.0);
        assert!(xs.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_linspace_degenerate() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
        assert!(linspace(0.0, 0.0, 5).iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_builder_and_serialization() {
        let chart = ChartDescription::new(250)
            .title("Force Comparison")
            .y_title("Force (N)")
            .trace(Trace::Bar {
                categories: vec!["a".into(), "b".into()],
                values: vec![1.0, 2.0],
                colors: vec![Color::RED, Color::BLUE],
                labels: vec!["1".into(), "2".into()],
            });

        assert_eq!(chart.layout.height, 250);
        assert_eq!(chart.layout.margin, Margin::default());
        assert_eq!(chart.traces[0].kind(), "bar");

        let json = serde_json::to_string(&chart).unwrap();
        assert!(json.contains("\"type\":\"bar\""));
        assert!(json.contains("Force Comparison"));
    }

    #[test]
    fn test_color_css() {
        assert_eq!(Color::rgb(55, 83, 109).css(), "rgb(55, 83, 109)");
    }
}
