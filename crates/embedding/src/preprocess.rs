use image::imageops::FilterType;
use onnxruntime::ndarray::Array4;

use crate::error::EmbeddingError;

/// Canonical backbone input resolution.
pub const INPUT_WIDTH: u32 = 224;
pub const INPUT_HEIGHT: u32 = 224;

/// Decode raw image bytes and lay them out as the NHWC tensor the backbone
/// expects: shape `(1, 224, 224, 3)`, channels scaled to `[-1, 1]`.
///
/// Resize uses a fixed triangle filter so identical bytes always produce an
/// identical tensor.
pub(crate) fn decode_to_tensor(bytes: &[u8]) -> Result<Array4<f32>, EmbeddingError> {
    if bytes.is_empty() {
        return Err(EmbeddingError::Decode("empty image buffer".into()));
    }
    let decoded =
        image::load_from_memory(bytes).map_err(|e| EmbeddingError::Decode(e.to_string()))?;
    let rgb = decoded
        .resize_exact(INPUT_WIDTH, INPUT_HEIGHT, FilterType::Triangle)
        .to_rgb8();

    let mut tensor = Array4::<f32>::zeros((
        1,
        INPUT_HEIGHT as usize,
        INPUT_WIDTH as usize,
        3,
    ));
    for (x, y, pixel) in rgb.enumerate_pixels() {
        for channel in 0..3 {
            tensor[[0, y as usize, x as usize, channel]] =
                f32::from(pixel[channel]) / 127.5 - 1.0;
        }
    }
    Ok(tensor)
}
