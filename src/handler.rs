//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover`、`psnr` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::cli::{CapacityArgs, HideArgs, PsnrArgs, RecoverArgs};
use crate::files::{load_grid, read_payload, save_grid, write_message};
use crate::metric::{mse, psnr};
use crate::serializer::serialize;
use crate::steganography::{capacity_bits, capacity_chars, decode, encode};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// 处理 'Hide' 命令的执行逻辑。
///
/// 读取图像和文本文件，将文本序列化为以结束标记收尾的比特流并写入像素的最低有效位，
/// 最后将结果保存为图像。灰度图像会先扩展为 RGB 再写入。
/// 非 ASCII 字符与超出图像容量的比特都会被静默丢弃。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像，或无法读取文本文件。
/// * 目标文件已存在且未指定 `--force`。
/// * 无法写入目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let dest = args
        .dest
        .clone()
        .unwrap_or_else(|| sibling_path(&args.image, "doctored_", None));
    ensure_writable(&dest, args.force)?;

    // 灰度图像先扩展为 RGB，使每个像素写满 3 位，恢复时才能逐位对齐
    let mut grid = load_grid(&args.image)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                args.image.to_string_lossy().red().bold()
            )
        })?
        .into_rgb();

    let text = read_payload(&args.text).with_context(|| {
        format!(
            "Unable to read text file: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    let bits = serialize(&text);
    let embedding = encode(&mut grid, &bits);
    log::info!(
        "{} bits placed into {} pixels",
        embedding.bits_written,
        embedding.pixels_touched
    );

    save_grid(&grid, &dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 读取经过隐写的图像，逐字符恢复文本直到遇到结束标记；
/// 若整幅图像读完仍未出现标记，则原样保存读到的全部字符。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `RecoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像文件。
/// * 目标文件已存在且未指定 `--force`。
/// * 无法写入目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let dest = args
        .text
        .clone()
        .unwrap_or_else(|| sibling_path(&args.image, "recovered_", Some("txt")));
    ensure_writable(&dest, args.force)?;

    let grid = load_grid(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let recovered = decode(&grid);

    write_message(&dest, &recovered.message).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully recovered and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    log::info!("end marker found: {}", recovered.terminated);
    Ok(())
}

/// 处理 'Psnr' 命令的执行逻辑。
///
/// # Errors
///
/// 任一图像无法读取，或两幅图像的宽、高、通道数不一致时返回错误。
pub fn handle_psnr(args: PsnrArgs) -> Result<()> {
    let original = load_grid(&args.original).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.original.to_string_lossy().red().bold()
        )
    })?;
    let modified = load_grid(&args.modified).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.modified.to_string_lossy().red().bold()
        )
    })?;

    let mse = mse(&original, &modified).context("Unable to compare the images")?;
    let psnr = psnr(&original, &modified)?;

    println!("MSE: {}", format!("{mse:.6}").green().bold());
    println!("PSNR: {} dB", format!("{psnr:.2}").green().bold());
    Ok(())
}

/// 处理 'Capacity' 命令的执行逻辑。
///
/// # Errors
///
/// 图像无法读取时返回错误。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let grid = load_grid(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "{}x{} {:?}: {} bits, up to {} ASCII characters",
        grid.width(),
        grid.height(),
        grid.layout(),
        capacity_bits(&grid).to_string().green().bold(),
        capacity_chars(&grid).to_string().green().bold()
    );
    Ok(())
}

/// 在 `source` 所在目录生成带前缀的默认输出路径。
/// `extension` 为 `None` 时沿用原文件名 (含扩展名)。
pub fn sibling_path(source: &Path, prefix: &str, extension: Option<&str>) -> PathBuf {
    let name = match extension {
        Some(ext) => {
            let stem = source.file_stem().unwrap_or_default().to_string_lossy();
            format!("{prefix}{stem}.{ext}")
        }
        None => {
            let file_name = source.file_name().unwrap_or_default().to_string_lossy();
            format!("{prefix}{file_name}")
        }
    };
    source.with_file_name(name)
}

fn ensure_writable(dest: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !dest.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        dest.to_string_lossy().red().bold()
    );
    Ok(())
}
