//! Pass-through options for the image backend.

use serde::{Deserialize, Serialize};

/// Configuration forwarded unchanged to the image-synthesis backend.
///
/// Defaults match the pipeline's tuning: a higher step count for finer
/// detail and a slightly lowered guidance scale for a more natural look.
///
/// # Examples
///
/// ```
/// use storyloom_core::ImageOptions;
///
/// let options = ImageOptions::default();
/// assert_eq!(options.image_size, "1024x1024");
/// assert_eq!(options.batch_size, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageOptions {
    /// Image dimensions, e.g. "1024x1024"
    pub image_size: String,
    /// Images per request; the pipeline always asks for one
    pub batch_size: u32,
    /// Diffusion inference steps
    pub num_inference_steps: u32,
    /// Classifier-free guidance scale
    pub guidance_scale: f32,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            image_size: "1024x1024".to_string(),
            batch_size: 1,
            num_inference_steps: 40,
            guidance_scale: 6.5,
        }
    }
}
