//! # LSB 隐写核心
//!
//! 按栅格顺序逐像素写入/读取比特。编码端每个像素固定消耗 3 位，
//! 解码端逐字符重建文本并在出现结束标记时停止。两端只通过
//! [`ChannelLayout`](crate::channel::ChannelLayout) 的判定保持一致，
//! 图像中不保存长度或容量信息。

use crate::constants::{BITS_PER_CHAR, BITS_PER_PIXEL, TERMINATOR};
use crate::grid::PixelGrid;
use crate::serializer::Bitstream;

/// 一次编码的结果摘要。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Embedding {
    /// 比特流中被分配到像素的位数 (不含补齐位)。
    pub bits_written: usize,
    /// 比特流总长度。
    pub bits_total: usize,
    /// 被改写的像素数。
    pub pixels_touched: usize,
}

impl Embedding {
    /// 图像容量不足，比特流尾部被丢弃。
    pub fn truncated(&self) -> bool {
        self.bits_written < self.bits_total
    }
}

/// 一次解码的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovered {
    /// 已去除结束标记的文本；未找到标记时为读到的全部字符。
    pub message: String,
    /// 是否找到了结束标记。
    pub terminated: bool,
}

/// 图像按固定速率可容纳的比特数。
pub fn capacity_bits(grid: &PixelGrid) -> usize {
    grid.pixel_count() * BITS_PER_PIXEL
}

/// 在保证结束标记完整写入的前提下，可嵌入的最大字符数。
pub fn capacity_chars(grid: &PixelGrid) -> usize {
    (capacity_bits(grid) / BITS_PER_CHAR).saturating_sub(TERMINATOR.len())
}

/// 将比特流写入 `grid` 的最低有效位。
///
/// 像素按栅格顺序处理，每个像素取 3 位 (不足时右侧补 0)，
/// 依次写入可写通道；灰度像素只用第一位，其余两位丢弃。
/// 比特流耗尽后的像素保持不变。容量不足时多出的比特被静默截断，
/// 可通过 [`Embedding::truncated`] 查询。
pub fn encode(grid: &mut PixelGrid, bits: &Bitstream) -> Embedding {
    let channels = grid.layout().eligible_channels();
    let bits_total = bits.len();
    let mut pixels_touched = 0;

    for (pixel, chunk) in grid.pixels_mut().zip(bits.padded_chunks::<BITS_PER_PIXEL>()) {
        for &k in channels {
            pixel[k] = (pixel[k] & 0xFE) | chunk[k];
        }
        pixels_touched += 1;
    }

    let bits_written = (pixels_touched * BITS_PER_PIXEL).min(bits_total);
    log::debug!(
        "embedded {bits_written}/{bits_total} bits into {pixels_touched} of {} pixels",
        grid.pixel_count()
    );

    Embedding {
        bits_written,
        bits_total,
        pixels_touched,
    }
}

/// 从 `grid` 的最低有效位中恢复文本。
///
/// 每凑满 8 位即按大端解释为一个码点并追加到文本中，随后检查文本末尾
/// 是否为结束标记。解码严格向前进行并在首次匹配时停止，因此只需比较
/// 最后 11 个字符。遍历完整幅图像仍未找到标记时，原样返回所有字符。
pub fn decode(grid: &PixelGrid) -> Recovered {
    let channels = grid.layout().eligible_channels();
    let terminator = TERMINATOR.as_bytes();

    let mut decoded: Vec<u8> = Vec::new();
    let mut current: u8 = 0;
    let mut filled = 0;

    for pixel in grid.pixels() {
        for &k in channels {
            current = (current << 1) | (pixel[k] & 1);
            filled += 1;

            if filled < BITS_PER_CHAR {
                continue;
            }

            decoded.push(current);
            log::trace!("char {} = {current:#04x}", decoded.len() - 1);
            current = 0;
            filled = 0;

            if decoded.ends_with(terminator) {
                decoded.truncate(decoded.len() - terminator.len());
                log::debug!("terminator found after {} characters", decoded.len());
                return Recovered {
                    message: latin1(&decoded),
                    terminated: true,
                };
            }
        }
    }

    log::debug!(
        "reached end of image after {} characters without terminator",
        decoded.len()
    );
    Recovered {
        message: latin1(&decoded),
        terminated: false,
    }
}

// 码点 0..=255 一一映射为字符
fn latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
