//! # 错误类型模块
//!
//! 库层使用结构化的 [`StegoError`]，命令处理层再用 `anyhow` 附加上下文。

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 隐写、恢复与质量评估过程中可能出现的错误。
#[derive(Error, Debug)]
pub enum StegoError {
    /// 像素通道数既不是 1、3 也不是 4。
    #[error("Unsupported channel arity: {0} (expected 1, 3 or 4)")]
    UnsupportedChannelArity(usize),

    /// 像素缓冲区长度与 `width * height * channels` 不符。
    #[error("Pixel buffer has {actual} samples, expected {expected}")]
    InvalidGridLength { expected: usize, actual: usize },

    /// 参与 MSE/PSNR 计算的两幅图像形状不同。
    #[error("Dimension mismatch: {left:?} vs {right:?} (width, height, channels)")]
    DimensionMismatch {
        left: (u32, u32, usize),
        right: (u32, u32, usize),
    },

    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Unable to read file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unable to write file {path}: {source}")]
    Unwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unable to decode image {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unable to save image {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
