use std::io::Write;

use guide_core::{GeneratedPrompt, PromptGenerator, PromptKind};

use crate::cli::GenerateArgs;

/// One-shot generation for scripts: result on stdout, chatter on stderr.
pub struct AppHeadless {
    generator: PromptGenerator,
}

impl AppHeadless {
    pub fn new(generator: PromptGenerator) -> Self {
        Self { generator }
    }

    pub async fn run(&self, args: &GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
        let stdout = std::io::stdout();
        self.run_to(args, &mut stdout.lock()).await
    }

    pub async fn run_to<W: Write>(&self, args: &GenerateArgs, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
        let kind = PromptKind::from(args.kind);
        eprintln!(
            "\x1b[2m{} on {}\x1b[0m",
            self.generator.settings().model_name,
            self.generator.provider_name()
        );

        if args.negative && !kind.supports_negative() {
            eprintln!("\x1b[2m--negative is ignored for video prompts\x1b[0m");
        }

        let generated = self.generator.generate(kind, &args.to_request(), args.negative).await?;
        write!(out, "{}", format_output(kind, &generated, args.json)?)?;
        Ok(())
    }
}

pub fn format_output(kind: PromptKind, generated: &GeneratedPrompt, json: bool) -> Result<String, serde_json::Error> {
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(generated)?));
    }

    let mut text = format!("{}\n", generated.prompt);
    if let Some(negative) = &generated.negative_prompt {
        text.push_str(&format!("\nNegative - {}\n{}\n", kind.title(), negative));
    }
    Ok(text)
}
