//! Identifier allocation: `<prefix>-<millis>`, bumped until unused.

use chrono::Local;

pub fn generate(prefix: &str, taken: impl Fn(&str) -> bool) -> String {
    let mut stamp = Local::now().timestamp_millis();
    loop {
        let candidate = format!("{}-{}", prefix, stamp);
        if !taken(&candidate) {
            return candidate;
        }
        stamp += 1;
    }
}
