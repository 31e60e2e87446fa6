//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，以结束标记界定消息，
/// 可在 PNG、BMP、PPM/PGM 等无损图像中隐藏或恢复 ASCII 文本，并评估图像失真 (PSNR)。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，以 `####END####` 结束标记界定消息，可在无损格式图像 (如 PNG, BMP, PPM, PGM) 中隐藏或恢复 ASCII 文本，并以 PSNR/MSE 评估隐写带来的失真。"
)]
pub struct Cli {
    /// 提高日志详细程度 (-v: info, -vv: debug, -vvv: trace)。
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 在无损格式图像中隐藏文本文件内容 (非 ASCII 字符会被丢弃)。
    Hide(HideArgs),

    /// 从经过隐写的图像中恢复隐藏的文本。
    Recover(RecoverArgs),

    /// 计算两幅图像之间的 MSE 与 PSNR。
    Psnr(PsnrArgs),

    /// 显示图像可容纳的比特数与字符数。
    Capacity(CapacityArgs),
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// 用于隐写的输入图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的文本内容的文件路径。
    #[arg(short, long)]
    pub text: PathBuf,

    /// 结果图像的输出路径，格式由扩展名决定。
    /// 省略时在输入图像旁生成 `doctored_<原文件名>`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 目标文件已存在时直接覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'recover' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct RecoverArgs {
    /// 已隐藏文本数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 恢复文本的保存路径。
    /// 省略时在图像旁生成 `recovered_<图像名>.txt`。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 目标文件已存在时直接覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'psnr' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct PsnrArgs {
    /// 原始图像。
    #[arg(short, long)]
    pub original: PathBuf,

    /// 隐写后的图像。
    #[arg(short, long)]
    pub modified: PathBuf,
}

/// 'capacity' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct CapacityArgs {
    #[arg(short, long)]
    pub image: PathBuf,
}
