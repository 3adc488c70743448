//! # eval 子命令 CLI 定义
//!
//! 新建会话，按顺序应用参数覆盖，打印单元输出。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/eval.rs`

use clap::Args;

/// eval 子命令参数
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Calculation unit to evaluate (see `fluidboard list`)
    pub unit: String,

    /// Override a parameter before evaluating, e.g. --set pressure-force=250
    #[arg(short = 's', long = "set", value_name = "PARAM=VALUE", value_parser = super::assignment_parser)]
    pub overrides: Vec<(String, f64)>,

    /// Print the output bundle as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
