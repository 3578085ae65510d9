//! Test utilities for delulu_narrative tests.

pub mod mock_cache;
pub mod mock_image;
pub mod mock_text;

#[allow(unused_imports)]
pub use mock_cache::{CacheBehavior, MockImageCache};
#[allow(unused_imports)]
pub use mock_image::{ImageBehavior, MockImageGenerator};
#[allow(unused_imports)]
pub use mock_text::{MockTextGenerator, TextBehavior};

/// A well-formed story segment as the text model would return it.
#[allow(dead_code)]
pub fn story_json(new_location: bool, location_description: &str) -> String {
    serde_json::json!({
        "text": "The door creaks open onto salt air.",
        "choices": [
            {"text": "Step inside", "impact": "Enter the lighthouse", "tension_level": 2},
            {"text": "Walk away", "impact": "Return to the village", "tension_level": -1}
        ],
        "current_tension": 4,
        "story_state": {
            "location": "Lighthouse",
            "new_location": new_location,
            "location_description": location_description,
            "active_plot_threads": ["the missing keeper"],
            "unresolved_elements": ["a broken lamp"],
            "story_phase": "introduction",
            "emotional_tone": "uneasy",
            "current_tension": 4
        },
        "story_images": [
            {"url": "https://model.invented/image.jpg", "description": "made up"}
        ],
        "story_over": false
    })
    .to_string()
}
