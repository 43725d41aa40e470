//! CPU color conversion using the standard BT.601 coefficients.
//!
//! Expands an NV21 frame (full-resolution luma plane followed by an
//! interleaved VU chroma plane at quarter resolution) to full RGBA, and
//! reduces RGBA to a single perceptually-weighted intensity channel.

use tracing::debug;

use crate::frame_pipeline::common::error::{FrameError, Result};
use crate::frame_pipeline::convert::converter::ColorConverter;
use crate::frame_pipeline::convert::types::{GrayImageData, RgbaImageData};
use crate::frame_pipeline::frame::types::FrameDescriptor;

/// Color converter using ITU-R BT.601 video-range coefficients, the
/// conversion Android camera stacks apply to NV21 preview frames.
pub struct Bt601Converter;

/// Perceptual luma weights for grayscale reduction, fixed-point:
/// Y = (77*R + 150*G + 29*B) >> 8, approximating 0.299/0.587/0.114.
const GRAY_COEF_R: u32 = 77;
const GRAY_COEF_G: u32 = 150;
const GRAY_COEF_B: u32 = 29;

#[inline]
fn clamp_u8(value: f32) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

impl ColorConverter for Bt601Converter {
    /// Expands one NV21 frame to full RGBA.
    ///
    /// Each 2x2 pixel block shares one VU chroma pair; the alpha channel is
    /// always fully opaque for this input format.
    fn nv21_to_rgba(&self, source: &[u8], descriptor: FrameDescriptor) -> Result<RgbaImageData> {
        let width = descriptor.width;
        let height = descriptor.height;
        let expected = descriptor.nv21_len();

        // The conversion indexes both planes, so the length is checked here
        // even when the pipeline-level size check is disabled.
        if source.len() < expected {
            return Err(FrameError::SourceTooSmall {
                expected,
                actual: source.len(),
            });
        }

        debug!("Converting NV21 frame to RGBA: {}x{}", width, height);

        let luma_plane_len = descriptor.pixel_count();
        let mut data = vec![0u8; luma_plane_len * 4];

        // Odd dimensions truncate the chroma plane: `height / 2` rows of
        // `width / 2` VU pairs. The last luma row/column has no stored pair
        // of its own and reuses the nearest one; a frame too small to carry
        // any chroma is treated as achromatic.
        let chroma_rows = height / 2;
        let chroma_pairs = width / 2;

        for y in 0..height {
            let chroma_row =
                luma_plane_len + (y / 2).min(chroma_rows.saturating_sub(1)) * width;
            for x in 0..width {
                let luma = source[y * width + x] as f32;
                let (v, u) = if chroma_rows == 0 || chroma_pairs == 0 {
                    (0.0, 0.0)
                } else {
                    // VU pairs, V first in NV21
                    let chroma_idx = chroma_row + (x / 2).min(chroma_pairs - 1) * 2;
                    (
                        source[chroma_idx] as f32 - 128.0,
                        source[chroma_idx + 1] as f32 - 128.0,
                    )
                };

                let yy = 1.164 * (luma - 16.0).max(0.0);
                let r = yy + 1.596 * v;
                let g = yy - 0.391 * u - 0.813 * v;
                let b = yy + 2.018 * u;

                let out = (y * width + x) * 4;
                data[out] = clamp_u8(r);
                data[out + 1] = clamp_u8(g);
                data[out + 2] = clamp_u8(b);
                data[out + 3] = 255;
            }
        }

        Ok(RgbaImageData {
            width,
            height,
            data,
        })
    }

    /// Reduces an RGBA frame to one intensity byte per pixel, ignoring alpha.
    fn rgba_to_gray(&self, image: &RgbaImageData) -> Result<GrayImageData> {
        debug!("Converting RGBA to grayscale: {}x{}", image.width, image.height);

        let expected = image.width * image.height * 4;
        if image.data.len() < expected {
            return Err(FrameError::ConvertError(format!(
                "RGBA data holds {} bytes, need {}",
                image.data.len(),
                expected
            )));
        }

        let data: Vec<u8> = image.data[..expected]
            .chunks_exact(4)
            .map(|px| {
                let r = px[0] as u32;
                let g = px[1] as u32;
                let b = px[2] as u32;
                ((GRAY_COEF_R * r + GRAY_COEF_G * g + GRAY_COEF_B * b) >> 8) as u8
            })
            .collect();

        Ok(GrayImageData {
            width: image.width,
            height: image.height,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_nv21(descriptor: FrameDescriptor, luma: u8, v: u8, u: u8) -> Vec<u8> {
        let mut frame = vec![luma; descriptor.pixel_count()];
        let chroma_len = descriptor.nv21_len() - descriptor.pixel_count();
        for i in 0..chroma_len {
            frame.push(if i % 2 == 0 { v } else { u });
        }
        frame
    }

    #[test]
    fn test_rgba_shape_and_alpha() {
        let descriptor = FrameDescriptor::new(8, 6);
        let frame = flat_nv21(descriptor, 90, 128, 128);

        let rgba = Bt601Converter.nv21_to_rgba(&frame, descriptor).unwrap();

        assert_eq!(rgba.width, 8);
        assert_eq!(rgba.height, 6);
        assert_eq!(rgba.data.len(), 8 * 6 * 4);
        assert!(rgba.data.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_neutral_chroma_is_achromatic() {
        // With U = V = 128 the chroma terms vanish and R = G = B.
        let descriptor = FrameDescriptor::new(4, 4);
        let frame = flat_nv21(descriptor, 120, 128, 128);

        let rgba = Bt601Converter.nv21_to_rgba(&frame, descriptor).unwrap();

        for px in rgba.data.chunks_exact(4) {
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
        }
    }

    #[test]
    fn test_source_too_small() {
        let descriptor = FrameDescriptor::new(8, 8);
        let frame = vec![0u8; descriptor.nv21_len() - 1];

        let result = Bt601Converter.nv21_to_rgba(&frame, descriptor);

        assert!(matches!(
            result.unwrap_err(),
            FrameError::SourceTooSmall { expected, actual }
                if expected == descriptor.nv21_len() && actual == descriptor.nv21_len() - 1
        ));
    }

    #[test]
    fn test_odd_height_uses_last_chroma_row() {
        // 3 luma rows but only one stored chroma row; the bottom row must
        // reuse it instead of reading past the plane.
        let descriptor = FrameDescriptor::new(2, 3);
        let frame = flat_nv21(descriptor, 100, 200, 60);
        assert_eq!(frame.len(), descriptor.nv21_len());

        let rgba = Bt601Converter.nv21_to_rgba(&frame, descriptor).unwrap();

        assert_eq!(rgba.data.len(), 2 * 3 * 4);
        let first: Vec<u8> = rgba.data[..4].to_vec();
        for px in rgba.data.chunks_exact(4) {
            assert_eq!(px, &first[..]);
        }
    }

    #[test]
    fn test_odd_width_uses_last_chroma_pair() {
        // 3 luma columns but only one stored VU pair per chroma row; the
        // rightmost column must reuse it.
        let descriptor = FrameDescriptor::new(3, 2);
        let frame = flat_nv21(descriptor, 100, 200, 60);
        assert_eq!(frame.len(), descriptor.nv21_len());

        let rgba = Bt601Converter.nv21_to_rgba(&frame, descriptor).unwrap();

        assert_eq!(rgba.data.len(), 3 * 2 * 4);
        let first: Vec<u8> = rgba.data[..4].to_vec();
        for px in rgba.data.chunks_exact(4) {
            assert_eq!(px, &first[..]);
        }
    }

    #[test]
    fn test_frame_without_chroma_plane_is_achromatic() {
        // A 2x1 frame has no chroma rows at all (height / 2 == 0), so the
        // conversion falls back to neutral chroma.
        let descriptor = FrameDescriptor::new(2, 1);
        let frame = vec![120u8; descriptor.nv21_len()];
        assert_eq!(frame.len(), 2);

        let rgba = Bt601Converter.nv21_to_rgba(&frame, descriptor).unwrap();

        assert_eq!(rgba.data.len(), 2 * 4);
        for px in rgba.data.chunks_exact(4) {
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
            assert_eq!(px[3], 255);
        }
    }

    #[test]
    fn test_chroma_shared_across_block() {
        // One 2x2 block, single VU pair; all four pixels get the same color.
        let descriptor = FrameDescriptor::new(2, 2);
        let mut frame = vec![100u8; 4];
        frame.push(200); // V
        frame.push(60); // U

        let rgba = Bt601Converter.nv21_to_rgba(&frame, descriptor).unwrap();

        let first: Vec<u8> = rgba.data[..4].to_vec();
        for px in rgba.data.chunks_exact(4) {
            assert_eq!(px, &first[..]);
        }
        // V > 128 pushes red up, U < 128 pushes blue down
        assert!(rgba.data[0] > rgba.data[2]);
    }

    #[test]
    fn test_gray_weights() {
        let image = RgbaImageData {
            width: 3,
            height: 1,
            data: vec![
                255, 255, 255, 255, // white
                0, 0, 0, 255, // black
                255, 0, 0, 255, // pure red
            ],
        };

        let gray = Bt601Converter.rgba_to_gray(&image).unwrap();

        assert_eq!(gray.data, vec![255, 0, (77 * 255 >> 8) as u8]);
    }

    #[test]
    fn test_gray_ignores_alpha() {
        let opaque = RgbaImageData {
            width: 1,
            height: 1,
            data: vec![10, 20, 30, 255],
        };
        let transparent = RgbaImageData {
            width: 1,
            height: 1,
            data: vec![10, 20, 30, 0],
        };

        let a = Bt601Converter.rgba_to_gray(&opaque).unwrap();
        let b = Bt601Converter.rgba_to_gray(&transparent).unwrap();

        assert_eq!(a.data, b.data);
    }
}
