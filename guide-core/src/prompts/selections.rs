//! Fixed dropdown values offered for every prompt category.
//!
//! Every set starts with [`NONE`], which is also the default selection.

use crate::error::GuideError;

/// Sentinel meaning "no preference" for a category.
pub const NONE: &str = "None";

static MEDIA_TYPES: &[&str] = &[
    "None", "Portrait", "Landscape", "Abstract", "Surreal", "Macro", "Conceptual", "Architectural",
    "Fashion", "Still Life", "Sports", "Nature Close-Up", "Documentary", "Fantasy", "Sci-Fi",
    "Historical", "Editorial", "Experimental", "Architectural Detail", "Event",
];

static MEDIA_STYLES: &[&str] = &[
    "None", "Photorealistic", "Cartoon", "Vintage", "Minimalist", "Impressionist",
    "Abstract Expressionist", "Surrealist", "Art Deco", "Cubist", "Gothic Revival", "Retro",
    "Expressionist", "Geometric", "Pop Art", "Modernist", "Digital Art", "Hyper-Realistic",
    "Low Poly", "Pencil Sketch", "Watercolor", "Ink",
];

static ATTRIBUTES: &[&str] = &[
    "None", "High Contrast", "Soft Focus", "Vivid Colors", "Monochrome", "Sepia Tone",
    "High Dynamic Range (HDR)", "Low Saturation", "Warm Tones", "Cool Tones", "Grainy",
    "Muted Colors", "Neon", "Pastel", "Soft Light", "Sharp Detail", "Saturated", "Overexposed",
    "Underexposed", "Vintage",
];

static ENVIRONMENTS: &[&str] = &[
    "None", "Urban", "Nature", "Studio", "Underwater", "Outer Space", "Desert", "Forest", "Beach",
    "Mountain", "Futuristic City", "Countryside", "Industrial", "Historical", "Fantasy World",
    "Alien Landscape", "Suburban", "Rural", "Underworld", "Arctic",
];

static STYLE_INFLUENCES: &[&str] = &[
    "None", "Renaissance", "Pop Art", "Futuristic", "Gothic", "Art Nouveau", "Baroque",
    "Post-Impressionist", "Neo-Classicism", "Digital Art", "Modernist", "Classical", "Abstract",
    "Avant-Garde", "Constructivism", "Dada", "Rococo", "Symbolist", "Fauvism", "De Stijl",
];

static MOODS: &[&str] = &[
    "None", "Happy", "Sad", "Mystical", "Dramatic", "Serene", "Eerie", "Energetic", "Romantic",
    "Tense", "Melancholic", "Triumphant", "Whimsical", "Nostalgic", "Mysterious", "Playful",
    "Somber", "Reflective", "Intense", "Euphoric",
];

static VIEWPOINTS: &[&str] = &[
    "None", "Close-Up", "Wide Angle", "Bird's Eye", "Worm's Eye", "Over-the-Shoulder",
    "Dutch Angle", "Point of View (POV)", "Overhead", "Eye Level", "Tilted", "Fish Eye",
    "Panoramic", "High Angle", "Low Angle", "Extreme Close-Up", "Distant",
];

static CAMERA_TYPES: &[&str] = &[
    "None", "DSLR", "Smartphone", "Film Camera", "Drone", "Medium Format", "Action Camera",
    "Polaroid", "360-Degree Camera", "Film SLR", "Webcam", "Infrared Camera", "Underwater Camera",
    "Instant Camera", "Camcorder", "Virtual Reality Camera", "Stereo Camera",
];

static RENDERING_DETAILS: &[&str] = &[
    "None", "HDR", "Motion Blur", "Bokeh", "Tilt-Shift", "Soft Glow", "Lens Flare",
    "Depth of Field", "Color Grading", "Cross-Processing", "Vignette", "Halftone",
    "Chromatic Aberration", "Duotone", "Glitch Effect", "Film Grain", "Reflections", "Shadows",
    "Highlight Boost", "Texture Overlay",
];

static PROMPT_TYPES: &[&str] = &["None", "Simple", "Creative"];

/// One dropdown of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    MediaType,
    MediaStyle,
    Attribute,
    Environment,
    StyleInfluence,
    Mood,
    Viewpoint,
    CameraType,
    RenderingDetail,
    PromptType,
}

impl Category {
    /// Form order: first column then second column.
    pub const ALL: [Category; 10] = [
        Category::MediaType,
        Category::MediaStyle,
        Category::Attribute,
        Category::Environment,
        Category::StyleInfluence,
        Category::Mood,
        Category::Viewpoint,
        Category::CameraType,
        Category::RenderingDetail,
        Category::PromptType,
    ];

    pub fn values(self) -> &'static [&'static str] {
        match self {
            Category::MediaType => MEDIA_TYPES,
            Category::MediaStyle => MEDIA_STYLES,
            Category::Attribute => ATTRIBUTES,
            Category::Environment => ENVIRONMENTS,
            Category::StyleInfluence => STYLE_INFLUENCES,
            Category::Mood => MOODS,
            Category::Viewpoint => VIEWPOINTS,
            Category::CameraType => CAMERA_TYPES,
            Category::RenderingDetail => RENDERING_DETAILS,
            Category::PromptType => PROMPT_TYPES,
        }
    }

    /// Field name used by the html form and the json api.
    pub fn field(self) -> &'static str {
        match self {
            Category::MediaType => "media_type",
            Category::MediaStyle => "media_style",
            Category::Attribute => "attribute",
            Category::Environment => "environment",
            Category::StyleInfluence => "style_influence",
            Category::Mood => "mood",
            Category::Viewpoint => "viewpoint",
            Category::CameraType => "camera_type",
            Category::RenderingDetail => "rendering_detail",
            Category::PromptType => "prompt_type",
        }
    }

    /// Dropdown label; the first two read differently on the video page.
    pub fn label(self, video: bool) -> &'static str {
        match self {
            Category::MediaType if video => "Type of Video",
            Category::MediaType => "Type of Image",
            Category::MediaStyle if video => "Video Style",
            Category::MediaStyle => "Image Style",
            Category::Attribute => "Attributes/Details",
            Category::Environment => "Environment/Background",
            Category::StyleInfluence => "Style/Artistic Influence",
            Category::Mood => "Mood/Emotion",
            Category::Viewpoint => "Camera Viewpoint",
            Category::CameraType => "Camera Type",
            Category::RenderingDetail => "Additional Rendering Details",
            Category::PromptType => "Prompt Type",
        }
    }

    pub fn contains(self, value: &str) -> bool {
        self.values().contains(&value)
    }

    /// Checks that `value` is one of the fixed values of this category.
    pub fn check(self, value: &str) -> Result<(), GuideError> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(GuideError::UnknownSelection {
                category: self.field(),
                value: value.to_string(),
            })
        }
    }
}
