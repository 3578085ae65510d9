//! Google Imagen REST client.

mod client;
mod dto;

pub use client::{DEFAULT_ASPECT_RATIO, ImagenClient};
pub use dto::{
    OutputOptions, PredictInstance, PredictParameters, PredictRequest, PredictResponse,
    Prediction,
};
