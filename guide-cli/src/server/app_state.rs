use guide_core::PromptGenerator;
use minijinja::Environment;

use super::page;

#[derive(Clone, Debug)]
pub struct AppState {
    pub generator: PromptGenerator,
    pub templates: Environment<'static>,
}

impl AppState {
    pub fn new(generator: PromptGenerator) -> Result<Self, minijinja::Error> {
        Ok(AppState {
            generator,
            templates: page::environment()?,
        })
    }
}
