//! # libheif 解码器
//!
//! 通过 `libheif-rs` 解码 HEIC 容器中的主图像。
//! 带 alpha 的图像解码为 RGBA，其余解码为 RGB；按平面 stride 逐行拷贝。
//!
//! ## 依赖关系
//! - 被 `codec/mod.rs` 的 `default_decoder()` 使用
//! - 需要系统安装 libheif

use super::{CodecError, RasterDecoder};

use image::{DynamicImage, RgbImage, RgbaImage};
use libheif_rs::{ColorSpace, HeifContext, LibHeif, RgbChroma};

/// 基于 libheif 的 HEIC 解码器
pub struct LibHeifDecoder {
    lib: LibHeif,
}

impl LibHeifDecoder {
    pub fn new() -> Self {
        Self {
            lib: LibHeif::new(),
        }
    }
}

impl Default for LibHeifDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl RasterDecoder for LibHeifDecoder {
    fn name(&self) -> &str {
        "libheif"
    }

    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, CodecError> {
        let ctx = HeifContext::read_from_bytes(bytes).map_err(decode_err)?;
        let handle = ctx.primary_image_handle().map_err(decode_err)?;

        let has_alpha = handle.has_alpha_channel();
        let (chroma, channels) = if has_alpha {
            (RgbChroma::Rgba, 4)
        } else {
            (RgbChroma::Rgb, 3)
        };

        let decoded = self
            .lib
            .decode(&handle, ColorSpace::Rgb(chroma), None)
            .map_err(decode_err)?;

        let planes = decoded.planes();
        let plane = planes
            .interleaved
            .ok_or_else(|| CodecError::Decode("no interleaved plane in decoded image".into()))?;

        let (width, height) = (plane.width, plane.height);
        let pixels = pack_rows(plane.data, plane.stride, width as usize * channels, height)?;

        let image = if has_alpha {
            RgbaImage::from_raw(width, height, pixels).map(DynamicImage::ImageRgba8)
        } else {
            RgbImage::from_raw(width, height, pixels).map(DynamicImage::ImageRgb8)
        };

        image.ok_or_else(|| {
            CodecError::Decode(format!("pixel buffer does not match {}x{}", width, height))
        })
    }
}

fn decode_err(e: libheif_rs::HeifError) -> CodecError {
    CodecError::Decode(e.to_string())
}

/// 去掉每行末尾的 stride 填充
fn pack_rows(data: &[u8], stride: usize, row_len: usize, height: u32) -> Result<Vec<u8>, CodecError> {
    if stride < row_len {
        return Err(CodecError::Decode(format!(
            "plane stride {} shorter than row length {}",
            stride, row_len
        )));
    }

    let mut pixels = Vec::with_capacity(row_len * height as usize);
    for y in 0..height as usize {
        let start = y * stride;
        let row = data
            .get(start..start + row_len)
            .ok_or_else(|| CodecError::Decode(format!("plane truncated at row {}", y)))?;
        pixels.extend_from_slice(row);
    }
    Ok(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_rows_strips_padding() {
        // 2x2 RGB，stride = 8（每行 2 字节填充）
        let data = [
            1, 2, 3, 4, 5, 6, 0, 0, //
            7, 8, 9, 10, 11, 12, 0, 0,
        ];
        let packed = pack_rows(&data, 8, 6, 2).unwrap();
        assert_eq!(packed, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_pack_rows_truncated_plane() {
        let data = [0u8; 10];
        assert!(pack_rows(&data, 8, 6, 2).is_err());
    }

    #[test]
    fn test_decode_rejects_non_heif_bytes() {
        let decoder = LibHeifDecoder::new();
        assert!(decoder.decode(b"definitely not a heic file").is_err());
    }
}
