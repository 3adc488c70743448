//! # 数据导出
//!
//! 导出图表数据与完整输出包。
//!
//! ## 支持格式
//! - CSV: 图表中每条轨迹的数据点（trace, name, x, y, label）
//! - JSON: 单元的完整输出包（文本槽位 + 图表描述），供外部渲染器消费
//!
//! ## 依赖关系
//! - 被 `commands/export.rs` 和 `commands/eval.rs` 调用
//! - 使用 `models/chart.rs`, `binding/graph.rs` 的 Emission
//! - 使用 `csv` 和 `serde_json`

use crate::binding::Emission;
use crate::error::{FluidError, Result};
use crate::models::chart::{ChartDescription, Trace};
use crate::models::OutputBundle;

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// CSV 中的一行
#[derive(Debug, Serialize)]
struct SeriesRow<'a> {
    trace: &'static str,
    name: &'a str,
    x: String,
    y: f64,
    label: &'a str,
}

/// 导出图表数据点为 CSV
pub fn chart_to_csv(chart: &ChartDescription, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for trace in &chart.traces {
        match trace {
            Trace::Bar {
                categories,
                values,
                labels,
                ..
            } => {
                for (i, (category, value)) in categories.iter().zip(values).enumerate() {
                    wtr.serialize(SeriesRow {
                        trace: trace.kind(),
                        name: "",
                        x: category.clone(),
                        y: *value,
                        label: labels.get(i).map(|s| s.as_str()).unwrap_or(""),
                    })?;
                }
            }
            Trace::Line { name, x, y, .. } | Trace::Markers { name, x, y, .. } => {
                for (xv, yv) in x.iter().zip(y) {
                    wtr.serialize(SeriesRow {
                        trace: trace.kind(),
                        name,
                        x: format!("{}", xv),
                        y: *yv,
                        label: "",
                    })?;
                }
            }
            Trace::Gauge { title, value, .. } => {
                wtr.serialize(SeriesRow {
                    trace: trace.kind(),
                    name: title,
                    x: String::new(),
                    y: *value,
                    label: "",
                })?;
            }
        }
    }

    wtr.flush().map_err(|e| FluidError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// JSON 中的一次交付
#[derive(Debug, Serialize)]
struct EmissionDocument<'a> {
    unit: &'a str,
    slots: &'a OutputBundle,
}

/// 输出包序列化为 JSON 字符串
pub fn emission_to_json(emission: &Emission) -> Result<String> {
    let doc = EmissionDocument {
        unit: &emission.unit,
        slots: &emission.bundle,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// 导出输出包为 JSON 文件
pub fn emission_to_json_file(emission: &Emission, output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(|e| FluidError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    let doc = EmissionDocument {
        unit: &emission.unit,
        slots: &emission.bundle,
    };
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &doc)?;
    writer.flush().map_err(|e| FluidError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::CalculationUnit;
    use crate::units::hydrostatic::{self, Hydrostatic};
    use crate::units::pressure::{self, Pressure};

    use std::fs;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("fluidboard_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_line_chart_to_csv() {
        let bundle = Hydrostatic.evaluate(&vec![10.0, 1000.0].into());
        let chart = bundle.get_chart(hydrostatic::PRESSURE_GRAPH).unwrap();
        let path = temp_path("hydrostatic.csv");

        chart_to_csv(chart, &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines[0], "trace,name,x,y,label");
        // 50 个扫描点 + 1 个标记点
        assert_eq!(lines.len(), 1 + 50 + 1);
        assert!(lines[1].starts_with("line,Ph vs h,0,0"));
        assert!(lines[51].starts_with("markers,"));
    }

    #[test]
    fn test_gauge_to_csv() {
        let bundle = Pressure.evaluate(&vec![120.0, 0.04].into());
        let chart = bundle.get_chart(pressure::GAUGE_GRAPH).unwrap();
        let path = temp_path("pressure.csv");

        chart_to_csv(chart, &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(content.lines().count(), 2);
        assert!(content.contains("gauge,Pressure (Pa)"));
    }

    #[test]
    fn test_emission_json() {
        let emission = Emission {
            unit: pressure::ID.to_string(),
            bundle: Pressure.evaluate(&vec![120.0, 0.04].into()),
        };
        let json = emission_to_json(&emission).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["unit"], "pressure");
        assert_eq!(value["slots"]["pressure-force-display"]["kind"], "text");
        assert_eq!(value["slots"]["pressure-force-display"]["value"], "120 N");
        assert_eq!(
            value["slots"]["pressure-gauge-graph"]["value"]["traces"][0]["type"],
            "gauge"
        );

        let path = temp_path("pressure.json");
        emission_to_json_file(&emission, &path).unwrap();
        let from_file: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(from_file, value);
    }

    #[test]
    fn test_json_file_write_error_is_reported() {
        let emission = Emission {
            unit: pressure::ID.to_string(),
            bundle: Pressure.evaluate(&vec![120.0, 0.04].into()),
        };
        let path = temp_path("missing_dir").join("pressure.json");

        let err = emission_to_json_file(&emission, &path).unwrap_err();
        assert!(matches!(err, FluidError::FileWriteError { .. }));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_json_flush_failure_is_reported() {
        // /dev/full 接受 open，但任何写入都返回 ENOSPC
        let emission = Emission {
            unit: pressure::ID.to_string(),
            bundle: Pressure.evaluate(&vec![120.0, 0.04].into()),
        };
        let path = std::path::Path::new("/dev/full");
        if !path.exists() {
            return;
        }

        assert!(emission_to_json_file(&emission, path).is_err());
    }
}
