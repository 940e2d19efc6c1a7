use crate::error::AppError;
use crate::models::classify_types::{Classification, Label};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use ndarray::Array4;
use ort::session::Session;
use ort::value::Value;
use std::path::Path;

/// The network was trained on 150x150 inputs.
pub const IMAGE_SIZE: u32 = 150;

pub fn preprocess_image(path: &Path) -> Result<Array4<f32>, AppError> {
    let img = ImageReader::open(path)
        .map_err(|e| AppError {
            message: format!("Failed to open image {}: {}", path.display(), e),
        })?
        .decode()
        .map_err(|e| AppError {
            message: format!("Failed to decode image {}: {}", path.display(), e),
        })?;

    Ok(tensor_from_image(&img))
}

/// Resize to the fixed input size and scale pixels to [0, 1].
///
/// The tensor is NHWC (1, 150, 150, 3): the network comes from a Keras
/// export, which keeps channels last, so the interleaved RGB bytes map
/// straight into the tensor without a transpose.
pub fn tensor_from_image(img: &DynamicImage) -> Array4<f32> {
    let resized = img.resize_exact(IMAGE_SIZE, IMAGE_SIZE, FilterType::Triangle);
    let rgb = resized.to_rgb8();

    let raw = rgb.into_raw();
    let data: Vec<f32> = raw.iter().map(|&p| p as f32 / 255.0).collect();

    let side = IMAGE_SIZE as usize;
    Array4::from_shape_vec((1, side, side, 3), data)
        .expect("raw RGB buffer matches the fixed input shape")
}

/// Run one forward pass and reduce the sigmoid output to a labeled result.
pub fn run_inference(model: &mut Session, input: Array4<f32>) -> Result<Classification, AppError> {
    // Get the input name from the model (assuming single input)
    let input_name = model.inputs()[0].name().to_string();

    let input_tensor = Value::from_array(input)
        .map_err(|e| AppError { message: format!("Failed to create tensor value: {}", e) })?;

    let outputs = model
        .run(ort::inputs![input_name.as_str() => input_tensor])
        .map_err(|e| AppError {
            message: format!("Inference failed: {}", e),
        })?;

    let output_value = outputs
        .values()
        .next()
        .ok_or_else(|| AppError {
            message: "Model produced no outputs".to_string(),
        })?;

    let (_, data) = output_value
        .try_extract_tensor::<f32>()
        .map_err(|e| AppError {
            message: format!("Failed to extract output tensor: {}", e),
        })?;

    // Single sigmoid unit: the first value is the dog probability.
    let score = data.first().copied().ok_or_else(|| AppError {
        message: "Model output is empty".to_string(),
    })?;

    Ok(decide(score))
}

/// The fixed decision boundary: a score above 0.5 is a dog, at or below is
/// a cat, and the displayed confidence is the winning side of the sigmoid.
pub fn decide(score: f32) -> Classification {
    let (label, confidence) = if score > 0.5 {
        (Label::Dog, score)
    } else {
        (Label::Cat, 1.0 - score)
    };

    Classification {
        label,
        confidence,
        text: format!("{} ({})", label.display_name(), format_confidence(confidence)),
    }
}

pub fn format_confidence(confidence: f32) -> String {
    format!("{:.2}%", confidence * 100.0)
}

pub fn classify_file(model: &mut Session, path: &Path) -> Result<Classification, AppError> {
    let tensor = preprocess_image(path)?;
    run_inference(model, tensor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn solid_image(width: u32, height: u32, rgb: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(rgb)))
    }

    #[test]
    fn tensor_has_fixed_shape_for_any_input_size() {
        for (w, h) in [(150, 150), (640, 480), (30, 400)] {
            let tensor = tensor_from_image(&solid_image(w, h, [10, 20, 30]));
            assert_eq!(tensor.shape(), &[1, 150, 150, 3]);
        }
    }

    #[test]
    fn tensor_values_are_scaled_to_unit_range() {
        let tensor = tensor_from_image(&solid_image(300, 200, [255, 128, 0]));

        for &value in tensor.iter() {
            assert!((0.0..=1.0).contains(&value));
        }

        // A solid image stays solid through resampling.
        let first = tensor[[0, 0, 0, 0]];
        let second = tensor[[0, 0, 0, 1]];
        let third = tensor[[0, 0, 0, 2]];
        assert!((first - 1.0).abs() < 1e-5);
        assert!((second - 128.0 / 255.0).abs() < 1e-5);
        assert!(third.abs() < 1e-5);
    }

    #[test]
    fn score_above_threshold_is_a_dog() {
        let result = decide(0.9327);
        assert_eq!(result.label, Label::Dog);
        assert!((result.confidence - 0.9327).abs() < 1e-6);
        assert_eq!(result.text, "Dog (93.27%)");
    }

    #[test]
    fn score_below_threshold_is_a_cat_with_flipped_confidence() {
        let result = decide(0.25);
        assert_eq!(result.label, Label::Cat);
        assert!((result.confidence - 0.75).abs() < 1e-6);
        assert_eq!(result.text, "Cat (75.00%)");
    }

    #[test]
    fn exact_threshold_counts_as_cat() {
        let result = decide(0.5);
        assert_eq!(result.label, Label::Cat);
        assert_eq!(result.text, "Cat (50.00%)");
    }

    #[test]
    fn confidence_is_formatted_to_two_decimals() {
        assert_eq!(format_confidence(0.5), "50.00%");
        assert_eq!(format_confidence(0.875), "87.50%");
        assert_eq!(format_confidence(1.0), "100.00%");
    }
}
