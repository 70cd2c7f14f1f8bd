use std::collections::HashSet;

use azmx_domain::Subscription;

/// Derive the base matrix key from a display name or id.
///
/// Lowercase; any run of non-alphanumeric characters collapses to a single
/// hyphen; leading/trailing hyphens are trimmed.
fn base_key(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// Allocates unique, identifier-safe matrix keys within one invocation.
///
/// Keys are job/stage names downstream, so they must not start with a digit
/// and colliding base keys get `-2`, `-3`, … suffixes. Feed subscriptions in
/// id order and the assignment is deterministic run over run. Everything is
/// lowercased, so uniqueness holds under case-insensitive identifier systems
/// too.
#[derive(Debug, Default)]
pub struct KeyAllocator {
    used: HashSet<String>,
}

impl KeyAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, sub: &Subscription) -> String {
        let source = if sub.name.is_empty() { sub.id.as_str() } else { sub.name.as_str() };
        let mut base = base_key(source);
        if base.is_empty() {
            base = "sub".to_string();
        }
        if base.starts_with(|c: char| c.is_ascii_digit()) {
            base = format!("s-{}", base);
        }

        let key = if self.used.contains(&base) {
            let mut n = 2;
            loop {
                let candidate = format!("{}-{}", base, n);
                if !self.used.contains(&candidate) {
                    break candidate;
                }
                n += 1;
            }
        } else {
            base
        };

        self.used.insert(key.clone());
        key
    }
}
