//! # export 命令实现
//!
//! 对一个或全部单元求值，把图表渲染为 PNG/SVG，或导出 CSV / JSON。
//!
//! ## 功能
//! - 求值在会话内串行完成，得到不可变的输出包
//! - 渲染 / 写文件交给 `batch::BatchRunner` 并行执行
//! - 已存在的输出文件默认跳过（`--overwrite` 覆盖）
//!
//! ## 依赖关系
//! - 使用 `cli/export.rs` 定义的参数
//! - 使用 `dashboard.rs`, `render/`, `batch/`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchRunner, ProcessResult};
use fluidboard::binding::Emission;
use crate::cli::export::{ExportArgs, ExportFormat};
use fluidboard::dashboard;
use fluidboard::error::{FluidError, Result};
use fluidboard::models::ChartDescription;
use fluidboard::render::{self, export};
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 导出全部单元时使用的名称
pub const ALL_UNITS: &str = "all";

/// 一个导出任务
#[derive(Debug)]
struct ExportJob<'a> {
    path: PathBuf,
    target: JobTarget<'a>,
}

#[derive(Debug)]
enum JobTarget<'a> {
    Chart(&'a ChartDescription),
    Bundle(&'a Emission),
}

/// 图像尺寸
#[derive(Debug, Clone, Copy)]
struct ImageSize {
    width: u32,
    height: Option<u32>,
}

/// 执行 export 命令
pub fn execute(args: ExportArgs) -> Result<()> {
    output::print_header(&format!("Exporting '{}' as {}", args.unit, args.format));

    let mut graph = dashboard::new_session()?;
    let unit_ids: Vec<String> = if args.unit == ALL_UNITS {
        graph.units().map(|u| u.id().to_string()).collect()
    } else {
        super::require_unit(&graph, &args.unit)?;
        vec![args.unit.clone()]
    };

    let reports = super::apply_overrides(&mut graph, &args.overrides)?;
    for notice in reports.iter().filter_map(super::clamp_notice) {
        output::print_warning(&notice);
    }

    let emissions = unit_ids
        .into_iter()
        .map(|unit| {
            let bundle = graph.evaluate(&unit)?;
            Ok(Emission { unit, bundle })
        })
        .collect::<Result<Vec<_>>>()?;

    fs::create_dir_all(&args.output).map_err(|e| FluidError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let jobs = plan_jobs(&emissions, &args.output, args.format);
    if jobs.is_empty() {
        output::print_warning("Nothing to export");
        return Ok(());
    }
    output::print_info(&format!("{} file(s) to write", jobs.len()));

    let size = ImageSize {
        width: args.width,
        height: args.height,
    };
    let runner = BatchRunner::new(args.jobs);
    debug!(jobs = runner.jobs(), "starting export");

    let result = runner.run(jobs, |job| run_job(job, args.format, size, args.overwrite))?;

    for msg in &result.messages {
        output::print_success(msg);
    }
    for msg in &result.skips {
        output::print_skip(msg);
    }
    for (name, err) in &result.failures {
        output::print_error(&format!("{}: {}", name, err));
    }

    output::print_done(&format!(
        "Exported {} file(s) to '{}' ({} skipped, {} failed)",
        result.success,
        args.output.display(),
        result.skipped,
        result.failed
    ));

    if result.failed > 0 {
        return Err(FluidError::Other(format!(
            "{} of {} export(s) failed",
            result.failed,
            result.total()
        )));
    }
    Ok(())
}

/// 为每个输出生成任务：图像 / CSV 按图表槽位，JSON 按单元
fn plan_jobs<'a>(emissions: &'a [Emission], dir: &Path, format: ExportFormat) -> Vec<ExportJob<'a>> {
    let ext = format.extension();

    match format {
        ExportFormat::Json => emissions
            .iter()
            .map(|e| ExportJob {
                path: dir.join(format!("{}.{}", e.unit, ext)),
                target: JobTarget::Bundle(e),
            })
            .collect(),
        ExportFormat::Png | ExportFormat::Svg | ExportFormat::Csv => emissions
            .iter()
            .flat_map(|e| e.bundle.charts())
            .map(|(slot, chart)| ExportJob {
                path: dir.join(format!("{}.{}", slot, ext)),
                target: JobTarget::Chart(chart),
            })
            .collect(),
    }
}

/// 执行单个导出任务
fn run_job(job: &ExportJob<'_>, format: ExportFormat, size: ImageSize, overwrite: bool) -> ProcessResult {
    let name = job.path.display().to_string();

    if job.path.exists() && !overwrite {
        return ProcessResult::Skipped(format!("{} (exists)", name));
    }

    let written = match (&job.target, format) {
        (JobTarget::Bundle(emission), _) => export::emission_to_json_file(emission, &job.path),
        (JobTarget::Chart(chart), ExportFormat::Csv) => export::chart_to_csv(chart, &job.path),
        (JobTarget::Chart(chart), _) => {
            let height = size.height.unwrap_or(chart.layout.height * 2);
            render::render_chart(
                chart,
                &job.path,
                size.width,
                height,
                format == ExportFormat::Svg,
            )
        }
    };

    match written {
        Ok(()) => ProcessResult::Success(name),
        Err(e) => ProcessResult::Failed(name, e.to_string()),
    }
}
