//! # 通道模型
//!
//! 根据像素的通道数确定哪些通道参与 LSB 读写。Alpha 通道从不参与。

use crate::error::StegoError;

/// 像素的通道布局。整幅图像只解析一次，编码与解码共用同一份判定。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    /// 单通道灰度 (PGM 等)。
    Grayscale,
    /// 三通道 RGB。
    Rgb,
    /// 四通道 RGBA，alpha 位于索引 3。
    Rgba,
}

impl ChannelLayout {
    /// 由通道数构造布局。
    ///
    /// # Errors
    ///
    /// 通道数不是 1、3、4 时返回 [`StegoError::UnsupportedChannelArity`]。
    pub fn from_arity(arity: usize) -> Result<Self, StegoError> {
        match arity {
            1 => Ok(Self::Grayscale),
            3 => Ok(Self::Rgb),
            4 => Ok(Self::Rgba),
            other => Err(StegoError::UnsupportedChannelArity(other)),
        }
    }

    /// 每个像素的通道数。
    pub fn arity(self) -> usize {
        match self {
            Self::Grayscale => 1,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// 可写入/读取 LSB 的通道索引，按索引升序排列。
    pub fn eligible_channels(self) -> &'static [usize] {
        match self {
            Self::Grayscale => &[0],
            Self::Rgb | Self::Rgba => &[0, 1, 2],
        }
    }

    /// 单个像素实际承载的比特数。
    pub fn capacity(self) -> usize {
        self.eligible_channels().len()
    }
}
