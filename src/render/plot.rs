//! # 图表渲染
//!
//! 使用 `plotters` 将声明式 `ChartDescription` 绘制为 PNG / SVG。
//! 渲染器每次都根据完整描述重绘，不做增量修改。
//!
//! ## 支持的轨迹
//! - 柱状图（分类坐标）
//! - 折线 + 标记点（圆点、叉号、五角星；五角星由十顶点多边形近似）
//! - 仪表盘（水平色带 + 指针条 + 阈值线）
//!
//! ## 依赖关系
//! - 被 `commands/export.rs` 调用
//! - 使用 `models/chart.rs`
//! - 使用 `plotters` 渲染图表

use crate::error::{FluidError, Result};
use crate::models::chart::{ChartDescription, Color as ChartColor, MarkerSymbol, Trace};

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// 渲染图表到文件
pub fn render_chart(
    chart: &ChartDescription,
    output_path: &Path,
    width: u32,
    height: u32,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_chart(&root, chart)?;
        root.present().map_err(render_error)?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_chart(&root, chart)?;
        root.present().map_err(render_error)?;
    }
    Ok(())
}

fn render_error<E: std::fmt::Debug>(e: E) -> FluidError {
    FluidError::RenderError(format!("{:?}", e))
}

fn rgb(c: ChartColor) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

/// 根据轨迹类型选择绘制方式
fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &ChartDescription,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(render_error)?;

    let gauge = chart.traces.iter().find(|t| matches!(t, Trace::Gauge { .. }));
    let bar = chart.traces.iter().find(|t| matches!(t, Trace::Bar { .. }));

    match (gauge, bar) {
        (Some(g), _) => draw_gauge(root, chart, g),
        (None, Some(b)) => draw_bars(root, chart, b),
        (None, None) => draw_xy(root, chart),
    }
}

/// 绘制分类柱状图
fn draw_bars<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &ChartDescription,
    trace: &Trace,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let Trace::Bar {
        categories,
        values,
        colors,
        labels,
    } = trace
    else {
        return Err(FluidError::RenderError("expected a bar trace".to_string()));
    };

    let n = categories.len().max(1) as i32;
    let (y_min, y_max) = chart.y_axis.range.unwrap_or_else(|| {
        let top = values.iter().copied().fold(0.0_f64, f64::max);
        (0.0, top * 1.15)
    });
    let y_max = if y_max > y_min { y_max } else { y_min + 1.0 };

    let margin = chart.layout.margin;
    let mut builder = ChartBuilder::on(root);
    builder
        .margin_left(margin.left)
        .margin_right(margin.right)
        .margin_top(margin.top / 2)
        .margin_bottom(margin.bottom)
        .x_label_area_size(40)
        .y_label_area_size(70);
    if let Some(title) = &chart.title {
        builder.caption(title, ("sans-serif", 24).into_font());
    }

    let mut ctx = builder
        .build_cartesian_2d((0..n).into_segmented(), y_min..y_max)
        .map_err(render_error)?;

    let label_of = |v: &SegmentValue<i32>| match v {
        SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
            categories.get(*i as usize).cloned().unwrap_or_default()
        }
        SegmentValue::Last => String::new(),
    };

    let mut mesh = ctx.configure_mesh();
    mesh.disable_x_mesh()
        .x_labels(categories.len())
        .x_label_formatter(&label_of)
        .label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16));
    if let Some(y_title) = &chart.y_axis.title {
        mesh.y_desc(y_title.as_str());
    }
    mesh.draw().map_err(render_error)?;

    ctx.draw_series(values.iter().enumerate().map(|(i, v)| {
        let i = i as i32;
        let color = colors.get(i as usize).copied().map(rgb).unwrap_or(BLUE);
        let mut bar = Rectangle::new(
            [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), *v)],
            color.filled(),
        );
        bar.set_margin(0, 0, 20, 20);
        bar
    }))
    .map_err(render_error)?;

    ctx.draw_series(labels.iter().zip(values).enumerate().map(|(i, (label, v))| {
        Text::new(
            label.clone(),
            (SegmentValue::CenterOf(i as i32), *v),
            ("sans-serif", 14).into_font().color(&BLACK),
        )
    }))
    .map_err(render_error)?;

    Ok(())
}

/// 绘制折线与标记点
fn draw_xy<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, chart: &ChartDescription) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let points: Vec<(f64, f64)> = chart
        .traces
        .iter()
        .flat_map(|t| match t {
            Trace::Line { x, y, .. } | Trace::Markers { x, y, .. } => {
                x.iter().copied().zip(y.iter().copied()).collect::<Vec<_>>()
            }
            _ => Vec::new(),
        })
        .collect();

    let (x_min, x_max) = chart.x_axis.range.unwrap_or_else(|| span(points.iter().map(|p| p.0)));
    let (y_min, y_max) = chart.y_axis.range.unwrap_or_else(|| {
        let (lo, hi) = span(points.iter().map(|p| p.1));
        (lo.min(0.0), hi * 1.05)
    });
    let x_max = if x_max > x_min { x_max } else { x_min + 1.0 };
    let y_max = if y_max > y_min { y_max } else { y_min + 1.0 };

    let margin = chart.layout.margin;
    let mut builder = ChartBuilder::on(root);
    builder
        .margin_left(margin.left)
        .margin_right(margin.right)
        .margin_top(margin.top / 2)
        .margin_bottom(margin.bottom)
        .x_label_area_size(50)
        .y_label_area_size(80);
    if let Some(title) = &chart.title {
        builder.caption(title, ("sans-serif", 24).into_font());
    }

    let mut ctx = builder
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(render_error)?;

    let mut mesh = ctx.configure_mesh();
    mesh.label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16));
    if let Some(x_title) = &chart.x_axis.title {
        mesh.x_desc(x_title.as_str());
    }
    if let Some(y_title) = &chart.y_axis.title {
        mesh.y_desc(y_title.as_str());
    }
    mesh.draw().map_err(render_error)?;

    for trace in &chart.traces {
        match trace {
            Trace::Line {
                name,
                x,
                y,
                color,
                width,
            } => {
                let style = rgb(*color).stroke_width(*width);
                ctx.draw_series(LineSeries::new(
                    x.iter().copied().zip(y.iter().copied()),
                    style,
                ))
                .map_err(render_error)?
                .label(name.as_str())
                .legend(move |(lx, ly)| PathElement::new(vec![(lx, ly), (lx + 20, ly)], style));
            }
            Trace::Markers {
                name,
                x,
                y,
                color,
                size,
                symbol,
            } => {
                let style = rgb(*color).filled();
                let size = *size as i32;
                let coords = x.iter().copied().zip(y.iter().copied());
                let anno = match symbol {
                    MarkerSymbol::X => ctx
                        .draw_series(coords.map(|p| Cross::new(p, size, rgb(*color).stroke_width(3))))
                        .map_err(render_error)?,
                    MarkerSymbol::Circle => ctx
                        .draw_series(coords.map(|p| Circle::new(p, size, style)))
                        .map_err(render_error)?,
                    MarkerSymbol::Star => ctx
                        .draw_series(
                            coords.map(|p| EmptyElement::at(p) + Polygon::new(star_points(size), style)),
                        )
                        .map_err(render_error)?,
                };
                anno.label(name.as_str())
                    .legend(move |(lx, ly)| Circle::new((lx + 10, ly), 5, style));
            }
            _ => {}
        }
    }

    if chart.layout.show_legend {
        ctx.configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", 14))
            .draw()
            .map_err(render_error)?;
    }

    Ok(())
}

/// 绘制仪表盘：横向色带、数值指针条、阈值线
fn draw_gauge<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &ChartDescription,
    trace: &Trace,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let Trace::Gauge {
        title,
        value,
        axis_range,
        bar_color,
        steps,
        threshold,
    } = trace
    else {
        return Err(FluidError::RenderError("expected a gauge trace".to_string()));
    };

    let (lo, hi) = *axis_range;
    let hi = if hi > lo { hi } else { lo + 1.0 };

    let margin = chart.layout.margin;
    let mut ctx = ChartBuilder::on(root)
        .margin_left(margin.left * 2)
        .margin_right(margin.right * 2)
        .margin_top(margin.top / 2)
        .margin_bottom(margin.bottom)
        .caption(title, ("sans-serif", 24).into_font())
        .x_label_area_size(40)
        .build_cartesian_2d(lo..hi, 0.0..1.0)
        .map_err(render_error)?;

    ctx.configure_mesh()
        .disable_y_mesh()
        .disable_y_axis()
        .label_style(("sans-serif", 14))
        .draw()
        .map_err(render_error)?;

    ctx.draw_series(steps.iter().map(|s| {
        Rectangle::new(
            [(s.range.0.max(lo), 0.1), (s.range.1.min(hi), 0.6)],
            rgb(s.color).mix(0.6).filled(),
        )
    }))
    .map_err(render_error)?;

    let shown = value.clamp(lo, hi);
    ctx.draw_series(std::iter::once(Rectangle::new(
        [(lo, 0.25), (shown, 0.45)],
        rgb(*bar_color).filled(),
    )))
    .map_err(render_error)?;

    if let Some(t) = threshold {
        let half = 0.25 * t.thickness;
        ctx.draw_series(std::iter::once(PathElement::new(
            vec![(t.value, 0.35 - half), (t.value, 0.35 + half)],
            rgb(t.color).stroke_width(t.width),
        )))
        .map_err(render_error)?;
    }

    ctx.draw_series(std::iter::once(Text::new(
        format!("{:.2}", value),
        (lo + (hi - lo) * 0.4, 0.85),
        ("sans-serif", 32).into_font().color(&BLACK),
    )))
    .map_err(render_error)?;

    Ok(())
}

/// 以原点为中心的五角星顶点（像素偏移，尖角朝上）
fn star_points(size: i32) -> Vec<(i32, i32)> {
    let outer = size as f64;
    let inner = outer * 0.45;
    (0..10)
        .map(|k| {
            let r = if k % 2 == 0 { outer } else { inner };
            let angle = -std::f64::consts::FRAC_PI_2 + k as f64 * std::f64::consts::PI / 5.0;
            (
                (r * angle.cos()).round() as i32,
                (r * angle.sin()).round() as i32,
            )
        })
        .collect()
}

/// 数据范围（空集合时为 0..1）
fn span(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if lo.is_finite() && hi.is_finite() {
        (lo, hi)
    } else {
        (0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::CalculationUnit;
    use crate::units::archimedes::{self, Archimedes};
    use crate::units::hydrostatic::{self, Hydrostatic};
    use crate::units::pressure::{self, Pressure};
    use crate::units::torricelli::{self, Torricelli};

    #[test]
    fn test_span() {
        assert_eq!(span([3.0, -1.0, 2.0].into_iter()), (-1.0, 3.0));
        assert_eq!(span(std::iter::empty()), (0.0, 1.0));
    }

    #[test]
    fn test_star_points() {
        let points = star_points(10);
        assert_eq!(points.len(), 10);
        assert_eq!(points[0], (0, -10));
        assert!(points.iter().all(|(x, y)| x * x + y * y <= 100 + 2));
    }

    fn render_to_temp(chart: &ChartDescription, name: &str) -> String {
        let path = std::env::temp_dir().join(format!(
            "fluidboard_plot_{}_{}.svg",
            std::process::id(),
            name
        ));
        render_chart(chart, &path, 640, 400, true).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        svg
    }

    #[test]
    fn test_render_gauge_svg() {
        let bundle = Pressure.evaluate(&vec![120.0, 0.04].into());
        let svg = render_to_temp(bundle.get_chart(pressure::GAUGE_GRAPH).unwrap(), "gauge");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("3000.00"));
    }

    #[test]
    fn test_render_bar_svg() {
        let bundle = Archimedes.evaluate(&vec![700.0, 0.027, 1000.0].into());
        let svg = render_to_temp(bundle.get_chart(archimedes::GRAPH).unwrap(), "bar");
        assert!(svg.contains("<rect"));
    }

    #[test]
    fn test_render_line_with_markers_svg() {
        let bundle = Hydrostatic.evaluate(&vec![10.0, 1000.0].into());
        let svg = render_to_temp(bundle.get_chart(hydrostatic::PRESSURE_GRAPH).unwrap(), "cross");
        assert!(svg.contains("<polyline"));

        let bundle = Torricelli.evaluate(&vec![1.25, 9.81].into());
        let svg = render_to_temp(bundle.get_chart(torricelli::GRAPH).unwrap(), "star");
        assert!(svg.contains("<polygon"));

        let chart = ChartDescription::new(300).legend(true).trace(Trace::Markers {
            name: "points".to_string(),
            x: vec![0.0, 1.0, 2.0],
            y: vec![1.0, 4.0, 2.0],
            color: ChartColor::BLUE,
            size: 6,
            symbol: MarkerSymbol::Circle,
        });
        let svg = render_to_temp(&chart, "circle");
        assert!(svg.contains("<circle"));
    }

    #[test]
    fn test_rgb_conversion() {
        let c = rgb(ChartColor::ROYAL_BLUE);
        assert_eq!((c.0, c.1, c.2), (65, 105, 225));
    }
}
