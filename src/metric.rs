//! # 图像质量评估
//!
//! 逐样本比较两幅同形状图像，计算均方误差 (MSE) 与峰值信噪比 (PSNR)。

use crate::constants::PEAK_SIGNAL;
use crate::error::StegoError;
use crate::grid::PixelGrid;

/// 两幅图像所有通道样本差值平方的平均值。
///
/// 差值以浮点数计算，不会发生 8 位回绕。空图像的 MSE 为 0。
///
/// # Errors
///
/// 宽、高或通道数不一致时返回 [`StegoError::DimensionMismatch`]。
pub fn mse(a: &PixelGrid, b: &PixelGrid) -> Result<f64, StegoError> {
    if a.shape() != b.shape() {
        return Err(StegoError::DimensionMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }

    let samples = a.as_raw().len();
    if samples == 0 {
        return Ok(0.0);
    }

    let sum: f64 = a
        .as_raw()
        .iter()
        .zip(b.as_raw())
        .map(|(&x, &y)| {
            let diff = f64::from(x) - f64::from(y);
            diff * diff
        })
        .sum();

    Ok(sum / samples as f64)
}

/// 峰值信噪比，单位 dB。
///
/// 两幅图像完全相同时返回正无穷，否则为 `10 * log10(255² / MSE)`。
///
/// # Errors
///
/// 同 [`mse`]。
pub fn psnr(a: &PixelGrid, b: &PixelGrid) -> Result<f64, StegoError> {
    let mse = mse(a, b)?;
    if mse == 0.0 {
        return Ok(f64::INFINITY);
    }
    Ok(10.0 * (PEAK_SIGNAL * PEAK_SIGNAL / mse).log10())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::ChannelLayout;

    #[test]
    fn identical_grids_have_infinite_psnr() {
        let grid = PixelGrid::new(2, 1, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(mse(&grid, &grid).unwrap(), 0.0);
        assert_eq!(psnr(&grid, &grid).unwrap(), f64::INFINITY);
    }

    #[test]
    fn single_lsb_flip_is_finite() {
        let a = PixelGrid::filled(4, 4, ChannelLayout::Rgb, 100);
        let mut b = a.clone();
        b.pixel_mut(0, 0)[0] ^= 1;

        let value = psnr(&a, &b).unwrap();
        assert!(value.is_finite());
        // MSE = 1/48
        let expected = 10.0 * (255.0f64 * 255.0 * 48.0).log10();
        assert!((value - expected).abs() < 1e-9);
    }

    #[test]
    fn more_flips_never_lower_mse() {
        let a = PixelGrid::filled(3, 3, ChannelLayout::Rgba, 8);
        let mut b = a.clone();
        let mut previous = 0.0;

        for x in 0..3 {
            for c in 0..3 {
                b.pixel_mut(x, 1)[c] ^= 1;
                let current = mse(&a, &b).unwrap();
                assert!(current >= previous);
                previous = current;
            }
        }
        assert!(psnr(&a, &b).unwrap() < f64::INFINITY);
    }

    #[test]
    fn differences_do_not_wrap() {
        let a = PixelGrid::new(1, 1, 1, vec![0]).unwrap();
        let b = PixelGrid::new(1, 1, 1, vec![255]).unwrap();
        assert_eq!(mse(&a, &b).unwrap(), 65025.0);
        assert_eq!(psnr(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn empty_grids_are_identical() {
        for grid in [
            PixelGrid::filled(0, 0, ChannelLayout::Rgb, 0),
            PixelGrid::filled(0, 5, ChannelLayout::Grayscale, 0),
        ] {
            assert_eq!(mse(&grid, &grid).unwrap(), 0.0);
            assert_eq!(psnr(&grid, &grid).unwrap(), f64::INFINITY);
        }

        let no_columns = PixelGrid::filled(0, 5, ChannelLayout::Rgb, 0);
        let no_rows = PixelGrid::filled(5, 0, ChannelLayout::Rgb, 0);
        assert!(matches!(
            mse(&no_columns, &no_rows),
            Err(StegoError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            psnr(&no_rows, &no_columns),
            Err(StegoError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn mismatched_shapes_are_rejected() {
        let a = PixelGrid::filled(4, 4, ChannelLayout::Rgb, 0);
        let wider = PixelGrid::filled(5, 4, ChannelLayout::Rgb, 0);
        let taller = PixelGrid::filled(4, 5, ChannelLayout::Rgb, 0);
        let rgba = PixelGrid::filled(4, 4, ChannelLayout::Rgba, 0);

        for other in [&wider, &taller, &rgba] {
            assert!(matches!(
                mse(&a, other),
                Err(StegoError::DimensionMismatch { .. })
            ));
            assert!(matches!(
                psnr(other, &a),
                Err(StegoError::DimensionMismatch { .. })
            ));
        }
    }
}
