//! Story configuration, state and segment types.

use serde::{Deserialize, Serialize};

/// Story settings chosen by the player when a story begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryConfig {
    /// Overall theme
    pub theme: String,
    /// What the story centres on
    pub focus: String,
    /// Where the story takes place
    pub setting: String,
    /// When the story takes place
    pub time_period: String,
    /// Point of view
    pub pov: String,
    /// Trope to lean into
    pub trope: String,
    /// Genre
    pub genre: String,
    /// Extra player notes
    #[serde(default)]
    pub details: Option<String>,
    /// Target number of segments
    pub length: u32,
}

/// A choice offered to the player at the end of a segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryChoice {
    /// Choice text shown to the player
    pub text: String,
    /// What picking it will do to the story
    pub impact: String,
    /// Tension change caused by the choice
    pub tension_level: i32,
}

/// A scene illustration attached to a segment.
///
/// `description` is the location description the image was cached under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryImage {
    /// Public URL of the image
    pub url: String,
    /// Location description used as the cache key source
    pub description: String,
}

/// Server-authoritative state extracted from a generated segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryState {
    /// Current location name
    pub location: String,
    /// Whether this segment introduces the location
    pub new_location: bool,
    /// Scene description of the location
    pub location_description: String,
    /// Plot threads still in play
    #[serde(default)]
    pub active_plot_threads: Vec<String>,
    /// Story elements left unresolved
    #[serde(default)]
    pub unresolved_elements: Vec<String>,
    /// Narrative phase, e.g. "rising action"
    pub story_phase: String,
    /// Emotional tone of the segment
    pub emotional_tone: String,
    /// Tension at the end of the segment
    pub current_tension: i32,
}

impl StoryState {
    /// Description to illustrate, if this segment calls for a new scene image.
    ///
    /// # Examples
    ///
    /// ```
    /// use delulu_core::StoryState;
    ///
    /// let mut state = StoryState {
    ///     location: "Lighthouse".to_string(),
    ///     new_location: true,
    ///     location_description: "A storm-battered lighthouse at dusk".to_string(),
    ///     active_plot_threads: vec![],
    ///     unresolved_elements: vec![],
    ///     story_phase: "introduction".to_string(),
    ///     emotional_tone: "ominous".to_string(),
    ///     current_tension: 3,
    /// };
    /// assert_eq!(state.scene_to_illustrate(), Some("A storm-battered lighthouse at dusk"));
    ///
    /// state.new_location = false;
    /// assert_eq!(state.scene_to_illustrate(), None);
    /// ```
    pub fn scene_to_illustrate(&self) -> Option<&str> {
        let description = self.location_description.trim();
        (self.new_location && !description.is_empty()).then_some(self.location_description.as_str())
    }
}

/// One generated segment of the story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryResponse {
    /// Narrative text
    pub text: String,
    /// Choices offered to the player
    #[serde(default)]
    pub choices: Vec<StoryChoice>,
    /// Tension value after this segment
    pub current_tension: i32,
    /// State extracted from the segment
    pub story_state: StoryState,
    /// Zero or one scene images; only ever set by the server
    #[serde(default)]
    pub story_images: Vec<StoryImage>,
    /// Whether the story has ended
    pub story_over: bool,
}
