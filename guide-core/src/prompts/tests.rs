use super::selections::{Category, NONE};
use super::template::{image_prompt, negative_prompt, video_prompt};
use super::request::{PromptKind, PromptRequest};
use crate::error::GuideError;

const RED_BICYCLE: &str = "Create an image of a red bicycle, depicted as a None in None style, showcasing None attributes. Set the scene in a None environment, influenced by None and conveying a None mood. Capture the scene from a None perspective using a None, and render it with None. Combine all and give me a single None prompt.";

fn sample_request() -> PromptRequest {
    PromptRequest::new("a lighthouse in a storm")
        .with(Category::MediaType, "Landscape")
        .with(Category::MediaStyle, "Watercolor")
        .with(Category::Attribute, "High Contrast")
        .with(Category::Environment, "Beach")
        .with(Category::StyleInfluence, "Baroque")
        .with(Category::Mood, "Dramatic")
        .with(Category::Viewpoint, "Low Angle")
        .with(Category::CameraType, "Drone")
        .with(Category::RenderingDetail, "Film Grain")
        .with(Category::PromptType, "Creative")
}

/// Positions of each substituted value, in the order they appear in the text
fn substitution_order(text: &str, request: &PromptRequest) -> Vec<usize> {
    let mut values: Vec<&str> = vec![request.subject.as_str()];
    values.extend(Category::ALL.iter().map(|c| request.selection(*c)));
    values.iter().map(|v| text.find(v).expect("value present")).collect()
}

#[test]
fn test_image_prompt_all_none_example() {
    let prompt = image_prompt(&PromptRequest::new("a red bicycle"));
    assert_eq!(prompt, RED_BICYCLE);
}

#[test]
fn test_image_prompt_substitutes_every_selection() {
    let request = sample_request();
    let prompt = image_prompt(&request);

    assert!(prompt.starts_with("Create an image of a lighthouse in a storm, depicted as a Landscape in Watercolor style"));
    assert!(prompt.contains("showcasing High Contrast attributes"));
    assert!(prompt.contains("from a Low Angle perspective using a Drone"));
    assert!(prompt.ends_with("give me a single Creative prompt."));
    assert!(!prompt.contains('{') && !prompt.contains('}'), "leftover placeholder in: {}", prompt);
}

#[test]
fn test_video_prompt_wording() {
    let prompt = video_prompt(&sample_request());
    assert_eq!(
        prompt,
        "Create a captivating video featuring a lighthouse in a storm, presented as a Landscape in the Watercolor style. \
Highlight the High Contrast aspects of the subject within a Beach setting. Draw inspiration from Baroque and evoke a Dramatic atmosphere. \
Frame the scene from a Low Angle perspective using a Drone, and ensure the rendering detail is set to Film Grain. \
Combine all and give me a single Creative prompt."
    );
}

#[test]
fn test_image_and_video_share_substitution_order() {
    let request = sample_request();
    let image = substitution_order(&image_prompt(&request), &request);
    let video = substitution_order(&video_prompt(&request), &request);

    let mut sorted = image.clone();
    sorted.sort();
    assert_eq!(image, sorted, "image template out of order");
    let mut sorted = video.clone();
    sorted.sort();
    assert_eq!(video, sorted, "video template out of order");
}

#[test]
fn test_every_value_of_every_category_fills_cleanly() {
    for category in Category::ALL {
        for value in category.values() {
            let request = PromptRequest::new("a cat").with(category, *value);
            for prompt in [image_prompt(&request), video_prompt(&request)] {
                assert!(!prompt.contains('{') && !prompt.contains('}'), "leftover placeholder for {:?}={}", category, value);
                assert!(prompt.contains(value), "{} missing from: {}", value, prompt);
                assert_eq!(prompt.matches("a cat").count(), 1);
            }
        }
    }
}

#[test]
fn test_subject_is_inserted_verbatim() {
    let request = PromptRequest::new("a sign reading {mood} and 'quotes'");
    let prompt = image_prompt(&request);
    assert!(prompt.starts_with("Create an image of a sign reading {mood} and 'quotes', depicted"));
    assert_eq!(prompt.matches("a None mood").count(), 1);
}

#[test]
fn test_empty_subject_is_accepted() {
    let prompt = image_prompt(&PromptRequest::default());
    assert!(prompt.starts_with("Create an image of , depicted as a None"));
}

#[test]
fn test_negative_prompt_wraps_text() {
    assert_eq!(
        negative_prompt("A serene beach at dawn"),
        "Generate a negative image generation prompt based on the following prompt: 'A serene beach at dawn'"
    );
}

#[test]
fn test_selection_sets_start_with_none() {
    for category in Category::ALL {
        assert_eq!(category.values()[0], NONE, "{:?}", category);
        assert!(category.values().len() >= 3);
    }
    assert_eq!(Category::PromptType.values(), &["None", "Simple", "Creative"]);
}

#[test]
fn test_labels_switch_for_video() {
    assert_eq!(Category::MediaType.label(false), "Type of Image");
    assert_eq!(Category::MediaType.label(true), "Type of Video");
    assert_eq!(Category::Mood.label(true), Category::Mood.label(false));
}

#[test]
fn test_validate_rejects_unknown_selection() {
    assert!(sample_request().validate().is_ok());
    assert!(PromptRequest::default().validate().is_ok());

    let err = PromptRequest::new("x").with(Category::CameraType, "Pinhole").validate().unwrap_err();
    match err {
        GuideError::UnknownSelection { category, value } => {
            assert_eq!(category, "camera_type");
            assert_eq!(value, "Pinhole");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_request_deserializes_with_defaults_and_aliases() {
    let request: PromptRequest = serde_json::from_str(r#"{"subject": "a fox", "video_type": "Fantasy", "mood_emotion": "Eerie"}"#)
        .expect("valid request");
    assert_eq!(request.subject, "a fox");
    assert_eq!(request.media_type, "Fantasy");
    assert_eq!(request.mood, "Eerie");
    assert_eq!(request.camera_type, NONE);
}

#[test]
fn test_prompt_kind_paths() {
    assert_eq!(PromptKind::Image.path(), "/image");
    assert_eq!(PromptKind::Video.title(), "Video Generation Prompt");
    assert!(PromptKind::Image.supports_negative());
    assert!(!PromptKind::Video.supports_negative());
}

#[test]
fn test_selection_set_sizes() {
    let sizes: Vec<(Category, usize)> = Category::ALL.iter().map(|c| (*c, c.values().len())).collect();
    assert_eq!(
        sizes,
        vec![
            (Category::MediaType, 20),
            (Category::MediaStyle, 22),
            (Category::Attribute, 20),
            (Category::Environment, 20),
            (Category::StyleInfluence, 20),
            (Category::Mood, 20),
            (Category::Viewpoint, 17),
            (Category::CameraType, 17),
            (Category::RenderingDetail, 20),
            (Category::PromptType, 3),
        ]
    );
    assert_eq!(Category::Attribute.values().last(), Some(&"Vintage"));
    assert_eq!(Category::Viewpoint.values().last(), Some(&"Distant"));
    assert_eq!(Category::CameraType.values().last(), Some(&"Stereo Camera"));
    assert_eq!(Category::RenderingDetail.values().last(), Some(&"Texture Overlay"));
}
