pub mod engine;
pub mod protocol;

pub mod allocator;
pub mod gemini_client;
pub mod line_parser;
pub mod prompt_builder;
