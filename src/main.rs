//! # fluidboard - 流体力学教学仪表盘
//!
//! 用户调整物理参数（力、面积、密度、深度、管径、流速），
//! 绑定图立即重新求值受影响的计算单元，给出文本面板与图表描述。
//!
//! ## 子命令
//! - `list`    - 列出计算单元与参数
//! - `eval`    - 对单个单元求值
//! - `session` - 响应式会话
//! - `export`  - 渲染图表 / 导出数据
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── batch/   (并行导出)
//!   ├── utils/      (输出、进度条、日志)
//!   └── fluidboard (lib.rs)
//!         ├── dashboard.rs (会话装配)
//!         ├── binding/     (响应式绑定图)
//!         ├── units/       (六个计算单元)
//!         ├── models/      (参数、输出包、图表描述)
//!         ├── render/      (绘图与数据导出)
//!         └── error.rs     (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = utils::logging::init(cli.log_level) {
        utils::output::print_warning(&format!("logging disabled: {}", e));
    }

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
