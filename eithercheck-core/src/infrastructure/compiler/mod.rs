pub mod embed;
pub mod script;

pub use embed::to_embeddable_json;
pub use script::{CLIENT_RUNTIME, ScriptRenderer};
