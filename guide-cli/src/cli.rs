use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use guide_core::prompts::NONE;
use guide_core::{Category, PromptKind, PromptRequest};

#[derive(Parser, Debug)]
#[command(name = "prompt-guide", version, about = "Prompt Generation Guide", long_about = None)]
pub struct Cli {
    /// Config file, `config.toml` in the working directory by default
    #[arg(long, global = true, env = "PROMPT_GUIDE_CONFIG")]
    pub config: Option<PathBuf>,

    // serve settings when no subcommand is given
    #[command(flatten)]
    pub serve: ServeArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the web interface (default)
    Serve(ServeArgs),
    /// Generate a single prompt and print it
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, env = "PROMPT_GUIDE_HOST", default_value = "127.0.0.1")]
    pub host: String,
    #[arg(long, env = "PROMPT_GUIDE_PORT", default_value_t = 8501)]
    pub port: u16,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    Image,
    Video,
}

impl From<KindArg> for PromptKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Image => PromptKind::Image,
            KindArg::Video => PromptKind::Video,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(value_enum)]
    pub kind: KindArg,

    /// Description of the subject
    #[arg(long, default_value = "")]
    pub subject: String,

    #[arg(long, alias = "image-type", alias = "video-type", default_value = NONE)]
    pub media_type: String,
    #[arg(long, alias = "image-style", alias = "video-style", default_value = NONE)]
    pub media_style: String,
    #[arg(long, default_value = NONE)]
    pub attribute: String,
    #[arg(long, default_value = NONE)]
    pub environment: String,
    #[arg(long, default_value = NONE)]
    pub style_influence: String,
    #[arg(long, default_value = NONE)]
    pub mood: String,
    #[arg(long, default_value = NONE)]
    pub viewpoint: String,
    #[arg(long, default_value = NONE)]
    pub camera_type: String,
    #[arg(long, default_value = NONE)]
    pub rendering_detail: String,
    #[arg(long, default_value = NONE)]
    pub prompt_type: String,

    /// Also derive a negative prompt (image only)
    #[arg(long)]
    pub negative: bool,

    /// Print the result as json
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    pub fn to_request(&self) -> PromptRequest {
        let values = [
            &self.media_type,
            &self.media_style,
            &self.attribute,
            &self.environment,
            &self.style_influence,
            &self.mood,
            &self.viewpoint,
            &self.camera_type,
            &self.rendering_detail,
            &self.prompt_type,
        ];
        Category::ALL
            .iter()
            .zip(values)
            .fold(PromptRequest::new(self.subject.clone()), |request, (category, value)| {
                request.with(*category, value.clone())
            })
    }
}
