// Résumé analysis: upload validation, scoped storage, prompt assembly and
// the single model call. All LLM calls go through llm_client.

pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod upload;
