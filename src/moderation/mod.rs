// Moderation core — blocklist, provider abstraction, answer normalization.
//
// The Provider trait hides which LLM answers the moderation question, so
// adding a backend means adding one implementation under `providers` and
// nothing here.

pub mod blocklist;
pub mod classifier;
pub mod normalize;
pub mod prompt;
pub mod response;
pub mod traits;

pub use blocklist::Blocklist;
pub use classifier::{
    ClassificationRequest, ClassificationVerdict, Classifier, Decision, DecisionPath,
};
pub use traits::{Provider, ProviderError};
