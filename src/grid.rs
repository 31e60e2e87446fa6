//! # 像素网格
//!
//! 以行优先顺序保存的 8 位像素数据，所有像素共享同一种通道布局。

use crate::channel::ChannelLayout;
use crate::error::StegoError;

/// `width × height` 的像素栅格。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    layout: ChannelLayout,
    data: Vec<u8>,
}

impl PixelGrid {
    /// 由通道数和原始样本构造网格。
    ///
    /// # Errors
    ///
    /// * 通道数不受支持时返回 [`StegoError::UnsupportedChannelArity`]。
    /// * `data` 长度不等于 `width * height * channels` 时返回
    ///   [`StegoError::InvalidGridLength`]。
    pub fn new(
        width: u32,
        height: u32,
        channels: usize,
        data: Vec<u8>,
    ) -> Result<Self, StegoError> {
        let layout = ChannelLayout::from_arity(channels)?;
        Self::with_layout(width, height, layout, data)
    }

    /// 与 [`PixelGrid::new`] 相同，但布局已确定。
    pub fn with_layout(
        width: u32,
        height: u32,
        layout: ChannelLayout,
        data: Vec<u8>,
    ) -> Result<Self, StegoError> {
        let expected = width as usize * height as usize * layout.arity();
        if data.len() != expected {
            return Err(StegoError::InvalidGridLength {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            layout,
            data,
        })
    }

    /// 以同一个值填充所有通道。
    pub fn filled(width: u32, height: u32, layout: ChannelLayout, value: u8) -> Self {
        let len = width as usize * height as usize * layout.arity();
        Self {
            width,
            height,
            layout,
            data: vec![value; len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// 像素总数。
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// 将灰度网格扩展为 RGB (灰度值复制到三个通道)，RGB/RGBA 原样返回。
    pub fn into_rgb(self) -> Self {
        match self.layout {
            ChannelLayout::Grayscale => Self {
                width: self.width,
                height: self.height,
                layout: ChannelLayout::Rgb,
                data: self.data.iter().flat_map(|&v| [v, v, v]).collect(),
            },
            ChannelLayout::Rgb | ChannelLayout::Rgba => self,
        }
    }

    /// `(width, height, channels)`，用于形状比较。
    pub fn shape(&self) -> (u32, u32, usize) {
        (self.width, self.height, self.layout.arity())
    }

    /// 所有样本的扁平视图。
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// 位于 `(x, y)` 的像素。
    ///
    /// # Panics
    ///
    /// 坐标越界时 panic。
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let start = self.offset(x, y);
        &self.data[start..start + self.layout.arity()]
    }

    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut [u8] {
        let start = self.offset(x, y);
        let arity = self.layout.arity();
        &mut self.data[start..start + arity]
    }

    /// 按栅格顺序 (自上而下、从左到右) 遍历像素。
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.layout.arity())
    }

    /// 按栅格顺序可变地遍历像素。
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        let arity = self.layout.arity();
        self.data.chunks_exact_mut(arity)
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} grid",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * self.layout.arity()
    }
}
