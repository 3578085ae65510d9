//! Prompt assembly.

use delulu_core::{Character, CharacterQuery, GenerationRequest, Input, MediaSource, StoryContext};
use std::fmt::Write;

/// Fixed part of every character lookup prompt.
const CHARACTER_FORMAT: &str = r#"Expected response format:
{
    "name": "Character's name",
    "age": "integer value representing age",
    "personality": array of strings, 1 word plus an emoji ie ["smart 🤓", "creative 🎨", "kind 🤗"],
    "occupation": "Character's job or role with an emoji after (return one job, the one they are best known for)",
    "gender": "Male, Female, or Non Binary"
}"#;

/// Prompt parts for a character lookup.
///
/// The model is told to answer `null` rather than invent someone it does not know.
///
/// # Examples
///
/// ```
/// use delulu_core::{CharacterQuery, Input};
/// use delulu_narrative::prompt::character_prompt;
///
/// let parts = character_prompt(&CharacterQuery::Name("Sherlock Holmes".to_string()));
/// assert_eq!(parts.len(), 2);
/// assert_eq!(parts[1], Input::Text("Character Name: Sherlock Holmes".to_string()));
/// ```
pub fn character_prompt(query: &CharacterQuery) -> Vec<Input> {
    let subject = match query {
        CharacterQuery::Name(_) => "character name",
        CharacterQuery::Photo { .. } => "image",
    };
    let instructions = format!(
        "Analyze the following {subject} and attempt to provide character details for a character. \
         DO NOT HALLUCINATE FAKE PEOPLE/CHARACTERS. ONLY GO OFF INFORMATION YOU ACTUALLY KNOW IS TRUE. \
         IF THE PERSON/CHARACTER ISN'T REAL, OR KNOWN FROM A REAL PIECE OF MEDIA, RETURN null.\n\n{CHARACTER_FORMAT}"
    );

    let subject_part = match query {
        CharacterQuery::Name(name) => Input::Text(format!("Character Name: {}", name)),
        CharacterQuery::Photo { bytes, mime } => Input::Image {
            mime: Some(mime.clone()),
            source: MediaSource::Binary(bytes.clone()),
        },
    };

    vec![Input::Text(instructions), subject_part]
}

/// Image prompt for a location description: a polaroid of the empty scene.
///
/// # Examples
///
/// ```
/// use delulu_narrative::prompt::scene_image_prompt;
///
/// assert_eq!(
///     scene_image_prompt("A rain-soaked alley"),
///     "Generate a polaroid style image: A rain-soaked alley. The scene should be empty with no people present."
/// );
/// ```
pub fn scene_image_prompt(location_description: &str) -> String {
    format!(
        "Generate a polaroid style image: {}. The scene should be empty with no people present.",
        location_description
    )
}

/// Prompt parts for a story request.
pub fn story_parts(request: &GenerationRequest) -> Vec<Input> {
    match request {
        GenerationRequest::Prompt { prompt } => vec![Input::Text(prompt.clone())],
        GenerationRequest::Context(context) => vec![Input::Text(story_prompt(context))],
    }
}

fn describe_character(character: &Character) -> String {
    let mut line = format!("- {}", character.name);
    if let Some(age) = character.age {
        let _ = write!(line, ", age {}", age);
    }
    if let Some(gender) = &character.gender {
        let _ = write!(line, ", {}", gender);
    }
    if let Some(occupation) = &character.occupation {
        let _ = write!(line, ", {}", occupation);
    }
    if let Some(traits) = character.personality.as_ref().filter(|t| !t.is_empty()) {
        let _ = write!(line, "; personality: {}", traits.join(", "));
    }
    if let Some(extra) = &character.custom_elements {
        let _ = write!(line, "; notes: {}", extra);
    }
    line
}

/// Render the structured story context into a single prompt.
///
/// # Examples
///
/// ```
/// use delulu_core::{Character, StoryConfig, StoryContext};
/// use delulu_narrative::prompt::story_prompt;
///
/// let context = StoryContext {
///     characters: vec![Character { name: "Ada".to_string(), ..Default::default() }],
///     story_config: StoryConfig {
///         theme: "discovery".to_string(),
///         focus: "mystery".to_string(),
///         setting: "coastal town".to_string(),
///         time_period: "1890s".to_string(),
///         pov: "second person".to_string(),
///         trope: "locked room".to_string(),
///         genre: "gothic".to_string(),
///         details: None,
///         length: 10,
///     },
///     plot_summary: vec![],
///     last_action: String::new(),
/// };
///
/// let prompt = story_prompt(&context);
/// assert!(prompt.contains("- Ada"));
/// assert!(prompt.contains("This is the opening segment"));
/// ```
pub fn story_prompt(context: &StoryContext) -> String {
    let config = &context.story_config;
    let mut prompt = String::from(
        "You are the narrator of an interactive story. Write the next segment and answer in JSON.\n\n",
    );

    let _ = writeln!(prompt, "Story settings:");
    let _ = writeln!(prompt, "- Genre: {}", config.genre);
    let _ = writeln!(prompt, "- Theme: {}", config.theme);
    let _ = writeln!(prompt, "- Focus: {}", config.focus);
    let _ = writeln!(prompt, "- Setting: {}", config.setting);
    let _ = writeln!(prompt, "- Time period: {}", config.time_period);
    let _ = writeln!(prompt, "- Point of view: {}", config.pov);
    let _ = writeln!(prompt, "- Trope: {}", config.trope);
    let _ = writeln!(prompt, "- Length: {} segments", config.length);
    if let Some(details) = config.details.as_deref().filter(|d| !d.trim().is_empty()) {
        let _ = writeln!(prompt, "- Details: {}", details);
    }

    let _ = writeln!(prompt, "\nCharacters:");
    for character in &context.characters {
        let _ = writeln!(prompt, "{}", describe_character(character));
    }

    if context.plot_summary.is_empty() {
        let _ = writeln!(prompt, "\nThis is the opening segment of the story.");
    } else {
        let _ = writeln!(prompt, "\nStory so far:");
        for (i, summary) in context.plot_summary.iter().enumerate() {
            let _ = writeln!(prompt, "{}. {}", i + 1, summary);
        }
        let segments_left = (config.length as usize).saturating_sub(context.plot_summary.len());
        if segments_left <= 1 {
            let _ = writeln!(prompt, "Bring the story to its conclusion and set story_over to true.");
        }
    }

    if !context.last_action.trim().is_empty() {
        let _ = writeln!(prompt, "\nThe player chose: {}", context.last_action);
    }

    prompt.push_str(
        "\nOffer 2 to 4 choices, each with its impact and a tension_level change. \
         Set story_state.new_location to true only when this segment moves to a location not \
         visited before, and describe that location in story_state.location_description as a \
         visual scene without people.",
    );
    prompt
}
