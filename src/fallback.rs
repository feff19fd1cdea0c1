//! Fallback datasets substituted when a live source cannot be served.
//!
//! Each dataset has the same shape as pipeline output and is built fresh on
//! demand, so concurrent invocations never share mutable state.

use crate::record::{Difficulty, LearningModule, Recommended, Resource, Tool};

/// Hand-authored resource dataset served when the resources tab is
/// unreachable or malformed.
pub fn resources() -> Vec<Resource> {
    vec![
        resource(
            "ChatGPT Free",
            "AI Tool",
            "OpenAI",
            "Free conversational AI for writing, coding, and learning",
            "https://chat.openai.com",
            Difficulty::Beginner,
            "Natural conversations • Writing assistance • Code help • Problem solving",
        ),
        resource(
            "Claude AI Free",
            "AI Tool",
            "Anthropic",
            "Advanced AI assistant with long context windows",
            "https://claude.ai",
            Difficulty::Beginner,
            "Long document analysis • Safe AI responses • Code writing • Research help",
        ),
        resource(
            "Google Gemini",
            "AI Tool",
            "Google",
            "Multimodal AI integrated with Google services",
            "https://gemini.google.com",
            Difficulty::Beginner,
            "Image understanding • Google Workspace integration • Multimodal tasks • Research",
        ),
        resource(
            "Perplexity AI",
            "AI Tool",
            "Perplexity",
            "AI search engine with sources and citations",
            "https://www.perplexity.ai",
            Difficulty::Beginner,
            "Research with sources • Real-time information • Citation tracking • Academic search",
        ),
        resource(
            "Hugging Face Spaces",
            "Practice Platform",
            "Hugging Face",
            "Free access to thousands of AI models",
            "https://huggingface.co/spaces",
            Difficulty::Beginner,
            "Explore AI models • Hands-on testing • Model comparison • Demo apps",
        ),
        resource(
            "Google Colab",
            "Practice Platform",
            "Google",
            "Free Jupyter notebooks with GPU access",
            "https://colab.research.google.com",
            Difficulty::Intermediate,
            "Python coding • Machine learning • Free GPU • Collaborative notebooks",
        ),
        resource(
            "DeepLearning.AI Courses",
            "Free Course",
            "Coursera",
            "Andrew Ng's comprehensive AI courses",
            "https://www.deeplearning.ai",
            Difficulty::Beginner,
            "Machine learning basics • Neural networks • Deep learning • AI applications",
        ),
        resource(
            "Fast.ai Practical Deep Learning",
            "Free Course",
            "Fast.ai",
            "Practical deep learning for coders",
            "https://course.fast.ai",
            Difficulty::Intermediate,
            "PyTorch • Computer vision • NLP • Production AI",
        ),
        resource(
            "Learn Prompting",
            "Free Course",
            "Learn Prompting",
            "Complete guide to prompt engineering",
            "https://learnprompting.org",
            Difficulty::Beginner,
            "Prompt techniques • Best practices • Advanced strategies • Real examples",
        ),
        resource(
            "Ben's Bites",
            "AI Newsletter",
            "Newsletter",
            "Daily AI news and tool updates",
            "https://bensbites.beehiiv.com",
            Difficulty::Beginner,
            "Latest AI news • New tools • Industry updates • Quick reads",
        ),
    ]
}

/// Fallback dataset for the tools tab.
///
/// The tools catalog has no hand-authored substitute; callers render an
/// empty state when the live tab cannot be served.
pub fn tools() -> Vec<Tool> {
    Vec::new()
}

/// Fallback dataset for the learning-modules tab; empty, like [`tools`].
pub fn learning_modules() -> Vec<LearningModule> {
    Vec::new()
}

fn resource(
    name: &str,
    kind: &str,
    platform: &str,
    description: &str,
    url: &str,
    difficulty: Difficulty,
    what_you_learn: &str,
) -> Resource {
    Resource {
        resource_name: name.to_string(),
        kind: kind.to_string(),
        platform: platform.to_string(),
        description: description.to_string(),
        url: url.to_string(),
        difficulty,
        what_you_learn: what_you_learn.to_string(),
        date_added: "2024-01-01".to_string(),
        recommended: Recommended::Yes,
    }
}
