//! # 比特序列化
//!
//! 将文本转换为以结束标记收尾的比特流。只有编码方向：
//! 解码时字符在隐写核心中逐个重建，不经过本模块。

use crate::constants::{BITS_PER_CHAR, MAX_ASCII, TERMINATOR};

/// 有序的比特序列，每个元素取值 0 或 1。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bitstream {
    bits: Vec<u8>,
}

impl Bitstream {
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    /// 按 `N` 位分块，最后一块不足时在右侧补 0。
    pub fn padded_chunks<const N: usize>(&self) -> impl Iterator<Item = [u8; N]> + '_ {
        self.bits.chunks(N).map(|chunk| {
            let mut padded = [0u8; N];
            padded[..chunk.len()].copy_from_slice(chunk);
            padded
        })
    }

    fn push_byte(&mut self, byte: u8) {
        self.bits
            .extend((0..BITS_PER_CHAR).rev().map(|shift| (byte >> shift) & 1));
    }
}

/// 丢弃所有码点大于 127 的字符。
pub fn strip_non_ascii(text: &str) -> String {
    text.chars().filter(|&c| c as u32 <= MAX_ASCII).collect()
}

/// 将文本序列化为比特流。
///
/// 非 ASCII 字符被静默丢弃，其余每个字符按高位在前写成 8 位，
/// 最后附加同样序列化的 [`TERMINATOR`]。
/// 结果长度恒为 `8 * (过滤后字符数 + 11)`。
pub fn serialize(text: &str) -> Bitstream {
    let ascii = strip_non_ascii(text);
    let mut stream = Bitstream {
        bits: Vec::with_capacity((ascii.len() + TERMINATOR.len()) * BITS_PER_CHAR),
    };

    // 过滤之后每个字符都是单字节
    for byte in ascii.bytes().chain(TERMINATOR.bytes()) {
        stream.push_byte(byte);
    }

    stream
}
