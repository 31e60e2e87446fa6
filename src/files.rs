//! # 文件读写模块
//!
//! 图像与 [`PixelGrid`] 之间的转换由 `image` crate 完成；
//! 文本载荷按 UTF-8 整体读入并去除开头的 BOM。

use crate::channel::ChannelLayout;
use crate::constants::BYTE_ORDER_MARK;
use crate::error::StegoError;
use crate::grid::PixelGrid;
use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// 读取图像并转换为像素网格。
///
/// 8 位灰度、RGB、RGBA 保持原布局；更高位深或浮点图像降为同类 8 位布局；
/// 带 alpha 的灰度图扩展为 RGBA，使 alpha 通道保持不变。
///
/// # Errors
///
/// * 路径不存在时返回 [`StegoError::InputNotFound`]。
/// * 无法读取或解码时返回 [`StegoError::ImageLoad`]。
pub fn load_grid(path: &Path) -> Result<PixelGrid, StegoError> {
    ensure_exists(path)?;
    let image = image::open(path).map_err(|source| StegoError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "loaded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    grid_from_image(image)
}

/// 将像素网格保存为图像，格式由扩展名决定。
///
/// # Errors
///
/// 扩展名无法识别或写入失败时返回 [`StegoError::ImageSave`]。
pub fn save_grid(grid: &PixelGrid, path: &Path) -> Result<(), StegoError> {
    image_from_grid(grid)?
        .save(path)
        .map_err(|source| StegoError::ImageSave {
            path: path.to_path_buf(),
            source,
        })
}

/// 读取文本载荷，去除开头的字节顺序标记。
///
/// # Errors
///
/// * 路径不存在时返回 [`StegoError::InputNotFound`]。
/// * 读取失败或内容不是 UTF-8 时返回 [`StegoError::Unreadable`]。
pub fn read_payload(path: &Path) -> Result<String, StegoError> {
    ensure_exists(path)?;
    let text = fs::read_to_string(path).map_err(|source| StegoError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(strip_bom(&text).to_owned())
}

/// 将恢复出的文本按 UTF-8 写入文件。
///
/// # Errors
///
/// 写入失败时返回 [`StegoError::Unwritable`]。
pub fn write_message(path: &Path, message: &str) -> Result<(), StegoError> {
    fs::write(path, message).map_err(|source| StegoError::Unwritable {
        path: path.to_path_buf(),
        source,
    })
}

/// 去除开头的 BOM (若存在)。
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text)
}

pub fn grid_from_image(image: DynamicImage) -> Result<PixelGrid, StegoError> {
    let (width, height) = (image.width(), image.height());
    let (layout, data) = match image {
        DynamicImage::ImageLuma8(buf) => (ChannelLayout::Grayscale, buf.into_raw()),
        DynamicImage::ImageRgb8(buf) => (ChannelLayout::Rgb, buf.into_raw()),
        DynamicImage::ImageRgba8(buf) => (ChannelLayout::Rgba, buf.into_raw()),
        luma16 @ DynamicImage::ImageLuma16(_) => {
            (ChannelLayout::Grayscale, luma16.into_luma8().into_raw())
        }
        other if other.color().has_alpha() => (ChannelLayout::Rgba, other.into_rgba8().into_raw()),
        other => (ChannelLayout::Rgb, other.into_rgb8().into_raw()),
    };
    PixelGrid::with_layout(width, height, layout, data)
}

pub fn image_from_grid(grid: &PixelGrid) -> Result<DynamicImage, StegoError> {
    let (width, height) = (grid.width(), grid.height());
    let raw = grid.as_raw().to_vec();
    let actual = raw.len();

    let image = match grid.layout() {
        ChannelLayout::Grayscale => {
            GrayImage::from_raw(width, height, raw).map(DynamicImage::ImageLuma8)
        }
        ChannelLayout::Rgb => RgbImage::from_raw(width, height, raw).map(DynamicImage::ImageRgb8),
        ChannelLayout::Rgba => {
            RgbaImage::from_raw(width, height, raw).map(DynamicImage::ImageRgba8)
        }
    };

    image.ok_or(StegoError::InvalidGridLength {
        expected: grid.pixel_count() * grid.layout().arity(),
        actual,
    })
}

fn ensure_exists(path: &Path) -> Result<(), StegoError> {
    match fs::metadata(path) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(StegoError::InputNotFound(path.to_path_buf()))
        }
        Err(source) => Err(StegoError::Unreadable {
            path: path.to_path_buf(),
            source,
        }),
    }
}
