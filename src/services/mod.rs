pub mod ai_service;
pub mod eval_service;
pub mod grading_service;
pub mod model_client;
pub mod question_service;
