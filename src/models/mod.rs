//! BrawlAPI model types.

mod club;
mod leaderboard;
mod player;

pub use club::*;
pub use leaderboard::*;
pub use player::*;

use serde_json::Value;

fn str_field<'a>(raw: &'a Value, key: &str) -> Option<&'a str> {
    raw.get(key).and_then(Value::as_str)
}

fn u64_field(raw: &Value, key: &str) -> Option<u64> {
    raw.get(key).and_then(Value::as_u64)
}
