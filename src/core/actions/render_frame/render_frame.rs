use std::error::Error;
use std::fmt;

use rayon::prelude::*;

use crate::core::actions::render_frame::shade::{ShadeOptions, shade_pixel};
use crate::core::view::uniforms::ViewUniforms;

const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFrameError {
    FrameSizeMismatch {
        width: u32,
        height: u32,
        frame_len: usize,
    },
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrameSizeMismatch {
                width,
                height,
                frame_len,
            } => {
                write!(
                    f,
                    "frame of {} bytes cannot hold {}x{} RGBA pixels",
                    frame_len, width, height
                )
            }
        }
    }
}

impl Error for RenderFrameError {}

fn check_frame_len(frame: &[u8], uniforms: &ViewUniforms) -> Result<usize, RenderFrameError> {
    let width = uniforms.width();
    let height = uniforms.height();
    let row_len = width as usize * BYTES_PER_PIXEL;

    if frame.len() != row_len * height as usize || row_len == 0 {
        return Err(RenderFrameError::FrameSizeMismatch {
            width,
            height,
            frame_len: frame.len(),
        });
    }

    Ok(row_len)
}

fn render_row(row_index: usize, row: &mut [u8], uniforms: &ViewUniforms, options: &ShadeOptions) {
    for (column, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        pixel.copy_from_slice(&shade_pixel(column as u32, row_index as u32, uniforms, options));
    }
}

/// Renders the whole view into a top-down RGBA frame on the calling thread.
pub fn render_frame(
    frame: &mut [u8],
    uniforms: &ViewUniforms,
    options: &ShadeOptions,
) -> Result<(), RenderFrameError> {
    let row_len = check_frame_len(frame, uniforms)?;

    for (row_index, row) in frame.chunks_exact_mut(row_len).enumerate() {
        render_row(row_index, row, uniforms, options);
    }

    Ok(())
}

/// Renders the whole view into a top-down RGBA frame, one rayon task per row.
///
/// Returns once every row is written.
pub fn render_frame_rayon(
    frame: &mut [u8],
    uniforms: &ViewUniforms,
    options: &ShadeOptions,
) -> Result<(), RenderFrameError> {
    let row_len = check_frame_len(frame, uniforms)?;

    frame
        .par_chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(row_index, row)| render_row(row_index, row, uniforms, options));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniforms(width: u32, height: u32) -> ViewUniforms {
        ViewUniforms {
            iterations: 100,
            zoom: 20.0,
            offset: [0.5, 0.0],
            screen_size: [f64::from(width), f64::from(height)],
        }
    }

    fn options() -> ShadeOptions {
        ShadeOptions {
            escape_radius_squared: 100.0,
            legend_strip_width: 0,
        }
    }

    #[test]
    fn test_rayon_matches_sequential() {
        let u = uniforms(64, 48);
        let mut sequential = vec![0u8; 64 * 48 * 4];
        let mut parallel = vec![0u8; 64 * 48 * 4];

        render_frame(&mut sequential, &u, &options()).unwrap();
        render_frame_rayon(&mut parallel, &u, &options()).unwrap();

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_every_pixel_is_opaque() {
        let u = uniforms(33, 17);
        let mut frame = vec![0u8; 33 * 17 * 4];

        render_frame_rayon(&mut frame, &u, &options()).unwrap();

        assert!(frame.chunks_exact(4).all(|pixel| pixel[3] == 255));
    }

    #[test]
    fn test_frame_matches_per_pixel_shading() {
        let u = uniforms(16, 12);
        let mut frame = vec![0u8; 16 * 12 * 4];

        render_frame_rayon(&mut frame, &u, &options()).unwrap();

        for (row, column) in [(0, 0), (5, 7), (11, 15)] {
            let start = (row * 16 + column) * 4;
            assert_eq!(
                frame[start..start + 4],
                shade_pixel(column as u32, row as u32, &u, &options())
            );
        }
    }

    #[test]
    fn test_legend_strip_covers_left_columns_only() {
        let u = uniforms(50, 4);
        let mut frame = vec![0u8; 50 * 4 * 4];
        let strip = ShadeOptions {
            legend_strip_width: 40,
            ..options()
        };

        render_frame_rayon(&mut frame, &u, &strip).unwrap();

        for row in frame.chunks_exact(50 * 4) {
            assert!(row[..40 * 4].iter().all(|&byte| byte == 255));
        }
    }

    #[test]
    fn test_mismatched_frame_is_rejected() {
        let u = uniforms(10, 10);
        let mut frame = vec![0u8; 10 * 9 * 4];

        let result = render_frame_rayon(&mut frame, &u, &options());

        assert_eq!(
            result,
            Err(RenderFrameError::FrameSizeMismatch {
                width: 10,
                height: 10,
                frame_len: 360
            })
        );
    }
}
