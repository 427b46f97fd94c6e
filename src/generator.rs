use serde::Serialize;
use tracing::info;

use crate::environment::OutputFormat;
use crate::error::ServiceError;
use crate::llm::{SamplingParams, TextGenerator};
use crate::markdown::escape_markdown_v2;
use crate::news::{self, HeadlineSource};
use crate::prompts;
use crate::TARGET_LLM_REQUEST;

// Fixed sampling temperature for every generation call.
pub const TEMPERATURE: f32 = 0.5;

const TITLE_MAX_TOKENS: u32 = 60;
const META_DESCRIPTION_MAX_TOKENS: u32 = 120;
const POST_CONTENT_MAX_TOKENS: u32 = 1500;
const REPETITION_PENALTY: f32 = 0.6;

#[derive(Clone, Debug, Serialize)]
pub struct GenerationResult {
    pub title: String,
    pub meta_description: String,
    pub post_content: String,
}

/// Run the three-step generation pipeline for a topic: look up recent
/// headlines once, then generate title, meta description, and article body in
/// order. The meta description prompt needs the generated title, so the steps
/// stay strictly sequential. Any failure aborts the remaining steps; partial
/// results are never returned.
pub async fn generate_post(
    headlines: &dyn HeadlineSource,
    generator: &dyn TextGenerator,
    output_format: OutputFormat,
    topic: &str,
) -> Result<GenerationResult, ServiceError> {
    let recent_news = news::digest(&headlines.recent_headlines(topic).await?);

    info!(target: TARGET_LLM_REQUEST, "Generating post for topic '{}'", topic);

    let title = generator
        .generate(
            &prompts::title_prompt(topic, &recent_news),
            SamplingParams::bounded(TITLE_MAX_TOKENS, TEMPERATURE),
        )
        .await?;

    let meta_description = generator
        .generate(
            &prompts::meta_description_prompt(&title),
            SamplingParams::bounded(META_DESCRIPTION_MAX_TOKENS, TEMPERATURE),
        )
        .await?;

    let post_content = generator
        .generate(
            &prompts::post_content_prompt(topic, &recent_news),
            SamplingParams::bounded(POST_CONTENT_MAX_TOKENS, TEMPERATURE)
                .with_penalties(REPETITION_PENALTY, REPETITION_PENALTY),
        )
        .await?;

    let result = GenerationResult {
        title,
        meta_description,
        post_content,
    };

    Ok(render(result, output_format))
}

fn render(result: GenerationResult, output_format: OutputFormat) -> GenerationResult {
    match output_format {
        OutputFormat::Raw => result,
        OutputFormat::MarkdownV2 => GenerationResult {
            title: escape_markdown_v2(&result.title),
            meta_description: escape_markdown_v2(&result.meta_description),
            post_content: escape_markdown_v2(&result.post_content),
        },
    }
}
