pub mod canned;
pub mod gemini;
pub mod traits;

pub use canned::CannedModel;
pub use gemini::GeminiClient;
pub use traits::GenerativeModel;
