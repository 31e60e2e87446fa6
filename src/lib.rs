//! # lsb_terminus 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：通道模型、比特序列化、
//! 以结束标记界定消息的 LSB 编解码，以及 MSE/PSNR 质量评估。

// 声明库包含的所有模块。

pub mod channel;
pub mod cli;
pub mod constants;
pub mod error;
pub mod files;
pub mod grid;
pub mod handler;
pub mod metric;
pub mod serializer;
pub mod steganography;

pub use channel::ChannelLayout;
pub use error::StegoError;
pub use grid::PixelGrid;
pub use serializer::{Bitstream, serialize};
pub use steganography::{Embedding, Recovered, decode, encode};
