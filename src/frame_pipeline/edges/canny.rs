//! Canny-style edge detection on a flat grayscale buffer.
//!
//! Three passes over the frame: 3x3 Sobel gradients, non-maximum
//! suppression along the quantized gradient direction, then
//! double-threshold hysteresis with 8-connected candidate promotion.
//! The outermost 1-pixel border is never classified as an edge, which
//! avoids out-of-bounds checks in the neighbor lookups.

use tracing::debug;

use crate::frame_pipeline::common::error::{FrameError, Result};
use crate::frame_pipeline::convert::types::GrayImageData;
use crate::frame_pipeline::edges::detector::EdgeDetector;
use crate::frame_pipeline::edges::types::{EdgeMapData, EdgeThresholds, EDGE, NON_EDGE};

/// Gradient-magnitude edge detector with hysteresis thresholding.
pub struct CannyDetector;

/// tan(22.5 degrees), the boundary between the horizontal/vertical and
/// diagonal direction sectors.
const TAN_22_5_DEG: f32 = 0.41421356;

struct Gradients {
    gx: Vec<f32>,
    gy: Vec<f32>,
    mag: Vec<f32>,
}

fn sobel_gradients(data: &[u8], width: usize, height: usize) -> Gradients {
    let mut gx = vec![0.0f32; width * height];
    let mut gy = vec![0.0f32; width * height];
    let mut mag = vec![0.0f32; width * height];

    for y in 1..height - 1 {
        let above = (y - 1) * width;
        let row = y * width;
        let below = (y + 1) * width;
        for x in 1..width - 1 {
            let tl = data[above + x - 1] as f32;
            let tc = data[above + x] as f32;
            let tr = data[above + x + 1] as f32;
            let ml = data[row + x - 1] as f32;
            let mr = data[row + x + 1] as f32;
            let bl = data[below + x - 1] as f32;
            let bc = data[below + x] as f32;
            let br = data[below + x + 1] as f32;

            let sum_x = (tr + 2.0 * mr + br) - (tl + 2.0 * ml + bl);
            let sum_y = (bl + 2.0 * bc + br) - (tl + 2.0 * tc + tr);

            gx[row + x] = sum_x;
            gy[row + x] = sum_y;
            mag[row + x] = (sum_x * sum_x + sum_y * sum_y).sqrt();
        }
    }

    Gradients { gx, gy, mag }
}

/// Zeroes every pixel that is not a local maximum along its gradient
/// direction, thinning ridges to single-pixel width. Ties are kept so a
/// symmetric two-sided step survives on both flanks.
fn non_maximum_suppression(grad: &Gradients, width: usize, height: usize) -> Vec<f32> {
    let mut thinned = vec![0.0f32; width * height];

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let idx = y * width + x;
            let mag = grad.mag[idx];
            if mag == 0.0 {
                continue;
            }

            let gx = grad.gx[idx];
            let gy = grad.gy[idx];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let same_sign = (gx >= 0.0 && gy >= 0.0) || (gx <= 0.0 && gy <= 0.0);

            // Quantize the gradient direction into one of four sectors and
            // pick the two neighbors perpendicular to the edge.
            let (neighbor1, neighbor2) = if abs_gx >= abs_gy {
                if abs_gy <= abs_gx * TAN_22_5_DEG {
                    (grad.mag[idx - 1], grad.mag[idx + 1])
                } else if same_sign {
                    (grad.mag[idx - width - 1], grad.mag[idx + width + 1])
                } else {
                    (grad.mag[idx - width + 1], grad.mag[idx + width - 1])
                }
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                (grad.mag[idx - width], grad.mag[idx + width])
            } else if same_sign {
                (grad.mag[idx - width - 1], grad.mag[idx + width + 1])
            } else {
                (grad.mag[idx - width + 1], grad.mag[idx + width - 1])
            };

            if mag >= neighbor1 && mag >= neighbor2 {
                thinned[idx] = mag;
            }
        }
    }

    thinned
}

/// Classifies thinned ridge pixels against the double threshold and grows
/// strong edges through 8-connected candidates with a breadth-first walk.
fn hysteresis(
    thinned: &[f32],
    width: usize,
    height: usize,
    thresholds: EdgeThresholds,
) -> Vec<u8> {
    let mut out = vec![NON_EDGE; width * height];
    let mut stack = Vec::with_capacity(width * height / 2);

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let idx = y * width + x;
            if thinned[idx] < thresholds.high || out[idx] != NON_EDGE {
                continue;
            }
            out[idx] = EDGE;
            stack.push((x, y));

            while let Some((nx, ny)) = stack.pop() {
                let neighbors = [
                    (nx.wrapping_sub(1), ny.wrapping_sub(1)),
                    (nx, ny.wrapping_sub(1)),
                    (nx + 1, ny.wrapping_sub(1)),
                    (nx.wrapping_sub(1), ny),
                    (nx + 1, ny),
                    (nx.wrapping_sub(1), ny + 1),
                    (nx, ny + 1),
                    (nx + 1, ny + 1),
                ];
                for &(cx, cy) in &neighbors {
                    // Candidates on the border frame stay suppressed; their
                    // gradients were never computed.
                    if cx == 0 || cy == 0 || cx >= width - 1 || cy >= height - 1 {
                        continue;
                    }
                    let cidx = cy * width + cx;
                    if thinned[cidx] >= thresholds.low && out[cidx] == NON_EDGE {
                        out[cidx] = EDGE;
                        stack.push((cx, cy));
                    }
                }
            }
        }
    }

    out
}

impl EdgeDetector for CannyDetector {
    fn detect(&self, image: &GrayImageData, thresholds: EdgeThresholds) -> Result<EdgeMapData> {
        let width = image.width;
        let height = image.height;
        let pixel_count = width * height;

        if image.data.len() < pixel_count {
            return Err(FrameError::DetectError(format!(
                "grayscale data holds {} bytes, need {}",
                image.data.len(),
                pixel_count
            )));
        }

        debug!(
            "Extracting edges: {}x{}, thresholds {}..{}",
            width, height, thresholds.low, thresholds.high
        );

        // Too small for a 3x3 neighborhood, nothing can be classified.
        if width < 3 || height < 3 {
            return Ok(EdgeMapData {
                width,
                height,
                data: vec![NON_EDGE; pixel_count],
            });
        }

        let grad = sobel_gradients(&image.data[..pixel_count], width, height);
        let thinned = non_maximum_suppression(&grad, width, height);
        let data = hysteresis(&thinned, width, height, thresholds);

        Ok(EdgeMapData {
            width,
            height,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(width: usize, height: usize, data: Vec<u8>) -> GrayImageData {
        GrayImageData {
            width,
            height,
            data,
        }
    }

    fn detect(image: &GrayImageData) -> EdgeMapData {
        CannyDetector
            .detect(image, EdgeThresholds::default())
            .unwrap()
    }

    #[test]
    fn test_flat_image_has_no_edges() {
        let image = gray(16, 12, vec![140; 16 * 12]);

        let edges = detect(&image);

        assert_eq!(edges.data.len(), 16 * 12);
        assert!(edges.data.iter().all(|&px| px == NON_EDGE));
    }

    #[test]
    fn test_vertical_step_edges_hug_the_step() {
        let width = 16;
        let height = 12;
        let step = width / 2;
        let mut data = vec![0u8; width * height];
        for y in 0..height {
            for x in step..width {
                data[y * width + x] = 255;
            }
        }

        let edges = detect(&gray(width, height, data));

        let mut edge_count = 0;
        for y in 0..height {
            for x in 0..width {
                let px = edges.data[y * width + x];
                assert!(px == EDGE || px == NON_EDGE);
                if px == EDGE {
                    // Only the two columns flanking the step may respond.
                    assert!(x == step - 1 || x == step, "edge at unexpected column {x}");
                    edge_count += 1;
                }
            }
        }
        assert!(edge_count > 0, "expected edges along the step");
    }

    #[test]
    fn test_weak_step_below_low_threshold_is_suppressed() {
        // A 10-level step gives a Sobel magnitude of 40, below low=80.
        let width = 16;
        let height = 12;
        let mut data = vec![100u8; width * height];
        for y in 0..height {
            for x in width / 2..width {
                data[y * width + x] = 110;
            }
        }

        let edges = detect(&gray(width, height, data));

        assert!(edges.data.iter().all(|&px| px == NON_EDGE));
    }

    #[test]
    fn test_candidate_promoted_through_strong_neighbor() {
        // A ramp whose contrast fades along y: strong at the top, weak
        // further down. The weak section sits between the thresholds and
        // must be kept only because it touches the strong section.
        let width = 12;
        let height = 12;
        let mut data = vec![0u8; width * height];
        for y in 0..height {
            let right = if y < 6 { 200u8 } else { 30u8 };
            for x in width / 2..width {
                data[y * width + x] = right;
            }
        }

        let thresholds = EdgeThresholds::default();
        let edges = CannyDetector
            .detect(&gray(width, height, data), thresholds)
            .unwrap();

        // 30-level step: magnitude 120, between low=80 and high=150.
        let weak_idx = 8 * width + width / 2;
        assert_eq!(edges.data[weak_idx], EDGE);
    }

    #[test]
    fn test_isolated_candidate_is_suppressed() {
        // Same weak step everywhere, no strong pixel to promote from.
        let width = 16;
        let height = 12;
        let mut data = vec![0u8; width * height];
        for y in 0..height {
            for x in width / 2..width {
                data[y * width + x] = 30;
            }
        }

        let edges = detect(&gray(width, height, data));

        assert!(edges.data.iter().all(|&px| px == NON_EDGE));
    }

    #[test]
    fn test_deterministic() {
        let width = 20;
        let height = 16;
        let data: Vec<u8> = (0..width * height)
            .map(|i| ((i * 37) % 251) as u8)
            .collect();
        let image = gray(width, height, data);

        let first = detect(&image);
        let second = detect(&image);

        assert_eq!(first.data, second.data);
    }

    #[test]
    fn test_tiny_image_is_all_non_edge() {
        let image = gray(2, 2, vec![0, 255, 255, 0]);

        let edges = detect(&image);

        assert_eq!(edges.data, vec![NON_EDGE; 4]);
    }
}
