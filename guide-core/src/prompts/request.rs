use serde::{Deserialize, Serialize};

use super::selections::{Category, NONE};
use crate::error::GuideError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptKind {
    Image,
    Video,
}

impl PromptKind {
    pub fn title(self) -> &'static str {
        match self {
            PromptKind::Image => "Image Generation Prompt",
            PromptKind::Video => "Video Generation Prompt",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            PromptKind::Image => "/image",
            PromptKind::Video => "/video",
        }
    }

    /// Only image prompts can be followed by a negative prompt.
    pub fn supports_negative(self) -> bool {
        matches!(self, PromptKind::Image)
    }
}

fn none() -> String {
    NONE.to_string()
}

/// One form submission: a free text subject and a value for every category.
///
/// Missing categories default to the "None" sentinel, mirroring the dropdown defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    #[serde(default)]
    pub subject: String,
    #[serde(default = "none", alias = "image_type", alias = "video_type")]
    pub media_type: String,
    #[serde(default = "none", alias = "image_style", alias = "video_style")]
    pub media_style: String,
    #[serde(default = "none")]
    pub attribute: String,
    #[serde(default = "none")]
    pub environment: String,
    #[serde(default = "none")]
    pub style_influence: String,
    #[serde(default = "none", alias = "mood_emotion")]
    pub mood: String,
    #[serde(default = "none")]
    pub viewpoint: String,
    #[serde(default = "none")]
    pub camera_type: String,
    #[serde(default = "none")]
    pub rendering_detail: String,
    #[serde(default = "none")]
    pub prompt_type: String,
}

impl Default for PromptRequest {
    fn default() -> Self {
        Self::new("")
    }
}

impl PromptRequest {
    /// Request for `subject` with every category left at "None".
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            media_type: none(),
            media_style: none(),
            attribute: none(),
            environment: none(),
            style_influence: none(),
            mood: none(),
            viewpoint: none(),
            camera_type: none(),
            rendering_detail: none(),
            prompt_type: none(),
        }
    }

    pub fn selection(&self, category: Category) -> &str {
        match category {
            Category::MediaType => &self.media_type,
            Category::MediaStyle => &self.media_style,
            Category::Attribute => &self.attribute,
            Category::Environment => &self.environment,
            Category::StyleInfluence => &self.style_influence,
            Category::Mood => &self.mood,
            Category::Viewpoint => &self.viewpoint,
            Category::CameraType => &self.camera_type,
            Category::RenderingDetail => &self.rendering_detail,
            Category::PromptType => &self.prompt_type,
        }
    }

    pub fn selection_mut(&mut self, category: Category) -> &mut String {
        match category {
            Category::MediaType => &mut self.media_type,
            Category::MediaStyle => &mut self.media_style,
            Category::Attribute => &mut self.attribute,
            Category::Environment => &mut self.environment,
            Category::StyleInfluence => &mut self.style_influence,
            Category::Mood => &mut self.mood,
            Category::Viewpoint => &mut self.viewpoint,
            Category::CameraType => &mut self.camera_type,
            Category::RenderingDetail => &mut self.rendering_detail,
            Category::PromptType => &mut self.prompt_type,
        }
    }

    /// Builder style setter, mostly for tests and the headless command.
    pub fn with(mut self, category: Category, value: impl Into<String>) -> Self {
        *self.selection_mut(category) = value.into();
        self
    }

    /// Every selection must come from its fixed set. The subject is free text and may be empty.
    pub fn validate(&self) -> Result<(), GuideError> {
        Category::ALL
            .iter()
            .try_for_each(|category| category.check(self.selection(*category)))
    }
}
