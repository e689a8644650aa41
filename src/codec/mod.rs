//! # 编解码能力模块
//!
//! 批处理核心只依赖这里定义的能力接口：
//! - `RasterDecoder::decode(bytes) -> DynamicImage`（RGB 或 RGBA 栅格）
//! - `encode_jpeg(raster, quality) -> JPEG bytes`
//!
//! HEIC 解码由 `heif.rs` 中基于 libheif 的实现提供（`heif` feature）。
//!
//! ## 依赖关系
//! - 被 `batch/converter.rs`, `commands/convert.rs` 使用
//! - 使用 `image` crate 进行 JPEG 编码
//! - 子模块: heif（可选）

#[cfg(feature = "heif")]
pub mod heif;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ExtendedColorType, RgbImage};
use thiserror::Error;

use crate::error::{HeicError, Result};

/// 编解码错误
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("decode failed: {0}")]
    Decode(String),

    #[error("encode failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// 图像解码能力
pub trait RasterDecoder {
    /// 解码器名称（用于输出）
    fn name(&self) -> &str;

    /// 将源文件字节解码为栅格图像
    fn decode(&self, bytes: &[u8]) -> std::result::Result<DynamicImage, CodecError>;
}

/// 获取默认的 HEIC 解码器
///
/// 未启用 `heif` feature 时返回 [`HeicError::CodecUnavailable`]。
pub fn default_decoder() -> Result<Box<dyn RasterDecoder>> {
    #[cfg(feature = "heif")]
    {
        Ok(Box::new(heif::LibHeifDecoder::new()))
    }

    #[cfg(not(feature = "heif"))]
    {
        Err(HeicError::CodecUnavailable {
            codec: "libheif",
            feature: "heif",
        })
    }
}

/// 压平为不透明 RGB（JPEG 无 alpha 通道，透明信息直接丢弃）
pub fn flatten_to_rgb(image: DynamicImage) -> RgbImage {
    match image {
        DynamicImage::ImageRgb8(rgb) => rgb,
        other => other.into_rgb8(),
    }
}

/// 以给定质量编码为 JPEG
pub fn encode_jpeg(image: &RgbImage, quality: u8) -> std::result::Result<Vec<u8>, CodecError> {
    let mut buf = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    encoder.encode(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(buf)
}

/// 检查编码质量是否在 1-100 范围内
pub fn check_quality(quality: u8) -> Result<u8> {
    if (1..=100).contains(&quality) {
        Ok(quality)
    } else {
        Err(HeicError::InvalidQuality(quality))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{ColorType, Rgba, RgbaImage};
    use std::io::Cursor;

    /// 测试用解码器：把 PNG 字节当作 HEIC 源文件解码
    pub(crate) struct PngDecoder;

    impl RasterDecoder for PngDecoder {
        fn name(&self) -> &str {
            "png (test)"
        }

        fn decode(&self, bytes: &[u8]) -> std::result::Result<DynamicImage, CodecError> {
            image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
                .map_err(|e| CodecError::Decode(e.to_string()))
        }
    }

    /// 生成 PNG 字节，`alpha` 为真时带透明通道
    pub(crate) fn png_bytes(width: u32, height: u32, alpha: bool) -> Vec<u8> {
        let img = if alpha {
            let mut img = RgbaImage::new(width, height);
            for pixel in img.pixels_mut() {
                *pixel = Rgba([200, 30, 30, 64]);
            }
            DynamicImage::ImageRgba8(img)
        } else {
            let mut img = RgbImage::new(width, height);
            for pixel in img.pixels_mut() {
                *pixel = image::Rgb([30, 200, 30]);
            }
            DynamicImage::ImageRgb8(img)
        };
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_flatten_drops_alpha() {
        let decoded = PngDecoder.decode(&png_bytes(3, 2, true)).unwrap();
        assert!(decoded.color().has_alpha());

        let rgb = flatten_to_rgb(decoded);
        assert_eq!(rgb.dimensions(), (3, 2));
        assert_eq!(rgb.get_pixel(0, 0).0, [200, 30, 30]);
    }

    #[test]
    fn test_encode_jpeg_is_valid_rgb_jpeg() {
        let rgb = flatten_to_rgb(PngDecoder.decode(&png_bytes(8, 8, false)).unwrap());
        let jpeg = encode_jpeg(&rgb, 95).unwrap();

        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
        let back =
            image::load_from_memory_with_format(&jpeg, image::ImageFormat::Jpeg).unwrap();
        assert_eq!(back.color(), ColorType::Rgb8);
        assert_eq!((back.width(), back.height()), (8, 8));
    }

    #[test]
    fn test_lower_quality_gives_smaller_output() {
        let mut img = RgbImage::new(64, 64);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = image::Rgb([(x * 4) as u8, (y * 4) as u8, ((x ^ y) * 4) as u8]);
        }
        let high = encode_jpeg(&img, 100).unwrap();
        let low = encode_jpeg(&img, 10).unwrap();
        assert!(low.len() < high.len());
    }

    #[test]
    fn test_check_quality_bounds() {
        assert_eq!(check_quality(1).unwrap(), 1);
        assert_eq!(check_quality(100).unwrap(), 100);
        assert!(matches!(check_quality(0), Err(HeicError::InvalidQuality(0))));
        assert!(matches!(
            check_quality(101),
            Err(HeicError::InvalidQuality(101))
        ));
    }

    #[test]
    fn test_png_decoder_rejects_garbage() {
        let err = PngDecoder.decode(b"not an image").unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
    }

    #[cfg(not(feature = "heif"))]
    #[test]
    fn test_default_decoder_unavailable_without_heif() {
        assert!(matches!(
            default_decoder(),
            Err(HeicError::CodecUnavailable { .. })
        ));
    }
}
