//! # session 命令实现
//!
//! 响应式会话：逐行读取输入变化事件，经绑定图重新求值受影响的单元，
//! 每个交付的输出包立即打印到终端。
//!
//! ## 事件语法
//! ```text
//! <param> <value>     设置参数
//! <param>=<value>     同上
//! clear <param>       清空输入框参数
//! show <unit>         打印单元当前输出
//! # ...               注释
//! ```
//!
//! ## 依赖关系
//! - 使用 `cli/session.rs` 定义的参数
//! - 使用 `dashboard.rs`, `binding/`
//! - 使用 `regex` 解析事件行

use fluidboard::binding::{BindingGraph, Emission, OutputSink};
use crate::cli::session::SessionArgs;
use fluidboard::dashboard;
use fluidboard::error::{FluidError, Result};
use crate::utils::output;

use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use tracing::info;

/// 一行事件
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Set { param: String, value: f64 },
    Clear { param: String },
    Show { unit: String },
    /// 空行或注释
    Blank,
}

/// 事件行解析器
pub struct EventParser {
    keyword: Regex,
    assignment: Regex,
}

impl EventParser {
    pub fn new() -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| FluidError::Other(format!("bad pattern: {}", e)))
        };
        Ok(Self {
            keyword: compile(r"^(clear|show)\s+(\S+)$")?,
            assignment: compile(r"^([A-Za-z][\w-]*)\s*(?:=|\s)\s*(\S+)$")?,
        })
    }

    pub fn parse(&self, line: &str) -> Result<SessionEvent> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(SessionEvent::Blank);
        }

        if let Some(caps) = self.keyword.captures(line) {
            let target = caps[2].to_string();
            return Ok(match &caps[1] {
                "clear" => SessionEvent::Clear { param: target },
                _ => SessionEvent::Show { unit: target },
            });
        }

        let caps = self.assignment.captures(line).ok_or_else(|| {
            FluidError::InvalidArgument(format!("cannot parse '{}'", line))
        })?;
        let value = caps[2].parse::<f64>().map_err(|_| {
            FluidError::InvalidArgument(format!("'{}' is not a number", &caps[2]))
        })?;

        Ok(SessionEvent::Set {
            param: caps[1].to_string(),
            value,
        })
    }
}

/// 把交付打印到终端的输出层
#[derive(Debug, Default)]
struct TerminalSink {
    delivered: usize,
}

impl OutputSink for TerminalSink {
    fn deliver(&mut self, emission: Emission) {
        self.delivered += 1;
        output::print_emission(&emission);
    }
}

/// 会话统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub events: usize,
    pub errors: usize,
}

/// 执行 session 命令
pub fn execute(args: SessionArgs) -> Result<()> {
    let mut graph = dashboard::new_session()?;
    let parser = EventParser::new()?;
    let mut sink = TerminalSink::default();

    let reader: Box<dyn BufRead> = match &args.script {
        Some(path) => {
            let file = File::open(path).map_err(|e| FluidError::FileReadError {
                path: path.display().to_string(),
                source: e,
            })?;
            info!(script = %path.display(), "session started");
            Box::new(BufReader::new(file))
        }
        None => {
            info!("session started on stdin");
            output::print_info("Reading change events from stdin (Ctrl-D to finish)");
            Box::new(BufReader::new(io::stdin()))
        }
    };

    if !args.quiet {
        output::print_header("Initial State");
        graph.refresh_all(&mut sink);
        output::print_separator();
    }

    let stats = run_events(&mut graph, &parser, reader, &mut sink)?;

    output::print_done(&format!(
        "Processed {} event(s), {} bundle(s) delivered, {} error(s)",
        stats.events, sink.delivered, stats.errors
    ));
    Ok(())
}

/// 逐行处理事件；单行出错只打印并计数，不中断会话
pub fn run_events<R: BufRead, S: OutputSink + ?Sized>(
    graph: &mut BindingGraph,
    parser: &EventParser,
    reader: R,
    sink: &mut S,
) -> Result<SessionStats> {
    let mut stats = SessionStats::default();

    for (n, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| FluidError::FileReadError {
            path: "<session input>".to_string(),
            source: e,
        })?;

        let event = match parser.parse(&line) {
            Ok(SessionEvent::Blank) => continue,
            Ok(event) => event,
            Err(e) => {
                stats.errors += 1;
                output::print_error(&format!("line {}: {}", n + 1, e));
                continue;
            }
        };

        stats.events += 1;
        if let Err(e) = apply_event(graph, event, sink) {
            stats.errors += 1;
            output::print_error(&format!("line {}: {}", n + 1, e));
        }
    }

    Ok(stats)
}

/// 把一个事件送入绑定图
fn apply_event<S: OutputSink + ?Sized>(
    graph: &mut BindingGraph,
    event: SessionEvent,
    sink: &mut S,
) -> Result<()> {
    match event {
        SessionEvent::Set { param, value } => {
            let report = graph.on_input_changed(&param, value, sink)?;
            if let Some(notice) = super::clamp_notice(&report) {
                output::print_warning(&notice);
            }
        }
        SessionEvent::Clear { param } => {
            graph.clear_input(&param, sink)?;
        }
        SessionEvent::Show { unit } => {
            let bundle = graph.evaluate(&unit)?;
            sink.deliver(Emission { unit, bundle });
        }
        SessionEvent::Blank => {}
    }
    Ok(())
}
