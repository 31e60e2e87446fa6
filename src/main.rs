use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use lsb_terminus::{
    cli::{Cli, Commands},
    handler::{handle_capacity, handle_hide, handle_psnr, handle_recover},
};

/// 程序的主入口点
///
/// 负责解析命令行参数、初始化日志，并根据指定的子命令
/// 将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    SimpleLogger::new().with_level(level).init()?;

    // 根据子命令调用相应的处理函数
    match cli.command {
        Commands::Hide(args) => handle_hide(args),
        Commands::Recover(args) => handle_recover(args),
        Commands::Psnr(args) => handle_psnr(args),
        Commands::Capacity(args) => handle_capacity(args),
    }
}
