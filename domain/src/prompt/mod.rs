//! Prompt construction for the wall-bounce chain

pub mod template;

pub use template::PromptTemplate;
