//! Prompt templates for the wall-bounce flow
//!
//! Each model in the chain receives the original query plus the outputs of
//! all prior successful steps, oldest first. The forwarded context may be
//! capped by a character budget as a resource guard; when over budget the
//! oldest outputs are dropped first.

use crate::core::model::Model;
use crate::core::task_type::TaskType;

/// Templates for generating prompts at each position in the chain
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt flavored by the task type
    pub fn system(task_type: TaskType) -> &'static str {
        match task_type {
            TaskType::General => {
                "You are an expert assistant in a multi-model verification chain. \
                 Provide a thoughtful, well-reasoned response. Where prior opinions \
                 are given, cross-check them and correct any mistakes you find."
            }
            TaskType::Coding => {
                "You are an expert software engineer in a multi-model verification \
                 chain. Provide correct, idiomatic code and reasoning. Where prior \
                 opinions are given, review the code critically and fix defects."
            }
            TaskType::Analysis => {
                "You are an expert analyst in a multi-model verification chain. \
                 Provide precise, evidence-based analysis. Where prior opinions are \
                 given, verify their claims and refine the conclusions."
            }
            TaskType::Architecture => {
                "You are an expert systems architect in a multi-model verification \
                 chain. Provide clear design guidance with trade-offs. Where prior \
                 opinions are given, stress-test the design decisions."
            }
        }
    }

    /// Prompt for the first model in the chain (no prior context)
    pub fn initial(query: &str) -> String {
        format!(
            "Please answer the following query:\n\n{}\n\nProvide a clear, well-structured response.",
            query
        )
    }

    /// Prompt for a later model, carrying forward prior successful outputs
    ///
    /// `context` is ordered oldest first. `budget_chars` of 0 means
    /// unlimited; otherwise the oldest outputs are dropped until the
    /// concatenated context fits.
    pub fn bounce(query: &str, context: &[(&Model, &str)], budget_chars: usize) -> String {
        let kept = Self::fit_to_budget(context, budget_chars);

        let mut prompt = format!("Original query: {}\n\nPrior responses from other models:\n", query);
        for (model, output) in kept {
            prompt.push_str(&format!("\n--- {} ---\n{}\n", model, output));
        }
        prompt.push_str(
            "\nCross-check the prior responses against the original query. \
             Correct any errors, fill any gaps, and provide your own improved, \
             verified answer.",
        );
        prompt
    }

    /// Drop oldest outputs until the total output length fits the budget
    fn fit_to_budget<'a>(
        context: &'a [(&'a Model, &'a str)],
        budget_chars: usize,
    ) -> &'a [(&'a Model, &'a str)] {
        if budget_chars == 0 {
            return context;
        }
        let mut start = 0;
        let mut total: usize = context.iter().map(|(_, o)| o.len()).sum();
        while total > budget_chars && start < context.len() {
            total -= context[start].1.len();
            start += 1;
        }
        &context[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_contains_query() {
        let prompt = PromptTemplate::initial("What is Rust?");
        assert!(prompt.contains("What is Rust?"));
    }

    #[test]
    fn test_bounce_contains_prior_outputs_in_order() {
        let gpt = Model::Gpt5;
        let gemini = Model::Gemini25Pro;
        let context = vec![(&gpt, "first opinion"), (&gemini, "second opinion")];
        let prompt = PromptTemplate::bounce("q", &context, 0);

        let first = prompt.find("first opinion").unwrap();
        let second = prompt.find("second opinion").unwrap();
        assert!(first < second);
        assert!(prompt.contains("gpt-5"));
        assert!(prompt.contains("gemini-2.5-pro"));
    }

    #[test]
    fn test_budget_drops_oldest_first() {
        let gpt = Model::Gpt5;
        let gemini = Model::Gemini25Pro;
        let old = "x".repeat(100);
        let recent = "y".repeat(50);
        let context = vec![(&gpt, old.as_str()), (&gemini, recent.as_str())];

        let prompt = PromptTemplate::bounce("q", &context, 60);
        assert!(!prompt.contains(&old));
        assert!(prompt.contains(&recent));
    }

    #[test]
    fn test_zero_budget_is_unlimited() {
        let gpt = Model::Gpt5;
        let big = "z".repeat(10_000);
        let context = vec![(&gpt, big.as_str())];
        let prompt = PromptTemplate::bounce("q", &context, 0);
        assert!(prompt.contains(&big));
    }

    #[test]
    fn test_system_prompt_varies_by_task_type() {
        assert_ne!(
            PromptTemplate::system(TaskType::Coding),
            PromptTemplate::system(TaskType::Analysis)
        );
    }
}
