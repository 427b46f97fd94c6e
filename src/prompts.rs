// prompts.rs

pub fn title_prompt(topic: &str, recent_news: &str) -> String {
    format!(
        "Write an attractive headline for an article about '{}', informed by these recent news items:\n{}

Return only the headline text, with no quotation marks around it.

Do not tell me what you're doing, do not explain that you're writing a headline.",
        topic, recent_news
    )
}

pub fn meta_description_prompt(title: &str) -> String {
    format!(
        "Write a meta description for an article titled '{}'. The description must be concise,
informative, and include the article's keywords.

Do not tell me what you're doing, do not explain that you're writing a meta description.",
        title
    )
}

pub fn post_content_prompt(topic: &str, recent_news: &str) -> String {
    format!(
        "Write an article about '{}', drawing on these recent news items:\n{}

Requirements:
1. At least 1500 characters
2. An introduction, a main part, and a conclusion
3. Subheadings throughout the main part
4. Analysis of current trends
5. Concrete examples taken from the news items
6. A clear and accessible style

Do not tell me what you're doing, do not explain that you're following the requirements.",
        topic, recent_news
    )
}
