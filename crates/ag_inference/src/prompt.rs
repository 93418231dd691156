use std::fmt::Write;

use ag_core::ArticleRequest;

/// Build the instruction prompt sent to the model for `request`.
pub fn build_prompt(request: &ArticleRequest, language: &str) -> String {
    let mut prompt = String::new();

    let _ = writeln!(prompt, "You are an expert SEO writer who produces exceptionally high quality content.");
    let _ = writeln!(
        prompt,
        "Your task is to write a complete, comprehensive, search engine optimized article in {}.",
        language
    );
    let _ = writeln!(prompt, "A reader should judge it first-rate content.");
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Article topic: \"{}\"", request.topic());

    match request.keyword() {
        Some(keyword) => {
            let _ = writeln!(prompt, "Primary keyword: \"{}\"", keyword);
            let _ = writeln!(
                prompt,
                "Build the article around the primary keyword (\"{}\") and cover it thoroughly. \
                 Use it naturally and at a sensible density throughout, especially in headings, \
                 the introduction and the conclusion. Where it fits, also use related terms and \
                 synonyms so search engines understand the subject better.",
                keyword
            );
        }
        None => {
            let _ = writeln!(prompt, "Cover the topic comprehensively and bring out its key points.");
        }
    }

    let _ = writeln!(prompt, "Tone: {}", request.tone());
    let _ = writeln!(
        prompt,
        "Length: approximately {} words. Aim for deep, complete content within that range.",
        request.word_count()
    );
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Quality and SEO rules:");
    let _ = writeln!(
        prompt,
        "1. Structure: an engaging introduction, a logically paragraphed body where each paragraph \
         focuses on one idea, and a complete, memorable conclusion."
    );
    let _ = writeln!(
        prompt,
        "2. Headings: mark the main title with \"# \", sections with \"## \" and subsections with \"### \" \
         at the start of the line. Headings should be descriptive and help readers scan the article."
    );
    let _ = writeln!(
        prompt,
        "3. Originality: no repeated, copied, meaningless, shallow or inaccurate content. \
         Give accurate, current and useful information."
    );
    let _ = writeln!(prompt, "4. Engagement: keep the reader interested until the end.");
    let _ = writeln!(
        prompt,
        "5. No keyword stuffing: keyword use must be natural and serve the content."
    );
    let _ = writeln!(
        prompt,
        "6. Clean output: plain flowing text with no formatting other than # for headings. No HTML, no other Markdown."
    );
    let _ = writeln!(prompt);
    prompt.push_str("The goal is an article that ranks well in search engines and fully satisfies its readers.\n");

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use ag_core::{ArticleLength, ArticleTone};

    #[test]
    fn test_prompt_with_keyword() {
        let request = ArticleRequest::new(
            "future of remote work",
            Some("remote work"),
            ArticleTone::Informative,
            ArticleLength::Short,
        )
        .unwrap();
        let prompt = build_prompt(&request, "English");

        assert!(prompt.contains("Article topic: \"future of remote work\""));
        assert!(prompt.contains("Primary keyword: \"remote work\""));
        assert!(prompt.contains("Tone: Informative"));
        assert!(prompt.contains("approximately 300 words"));
        assert!(prompt.contains("article in English"));
    }

    #[test]
    fn test_prompt_without_keyword() {
        let request = ArticleRequest::new("gardening", None, ArticleTone::Casual, ArticleLength::Long).unwrap();
        let prompt = build_prompt(&request, "Persian");

        assert!(!prompt.contains("Primary keyword"));
        assert!(prompt.contains("Cover the topic comprehensively"));
        assert!(prompt.contains("Tone: Casual"));
        assert!(prompt.contains("approximately 1000 words"));
        assert!(prompt.contains("article in Persian"));
    }
}
