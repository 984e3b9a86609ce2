use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x5f3c_a1e7_9d02_b468;

/// Stable content hash used for generated names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct ContentHash(pub(crate) u64);

impl ContentHash {
    /// Lowercase base-36 rendering, safe inside class and keyframe names.
    pub(crate) fn to_base36(self) -> String {
        const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
        let mut v = self.0;
        if v == 0 {
            return "0".to_string();
        }
        let mut out = Vec::with_capacity(13);
        while v > 0 {
            out.push(DIGITS[(v % 36) as usize]);
            v /= 36;
        }
        out.reverse();
        String::from_utf8(out).unwrap_or_default()
    }
}

pub(crate) struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    pub(crate) fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    pub(crate) fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    pub(crate) fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    pub(crate) fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
    }

    /// Hash a JSON value with object keys visited in sorted order, so insertion order never
    /// affects the result.
    pub(crate) fn write_json(&mut self, v: &serde_json::Value) {
        match v {
            serde_json::Value::Null => self.write_u8(0),
            serde_json::Value::Bool(x) => {
                self.write_u8(1);
                self.write_u8(u8::from(*x));
            }
            serde_json::Value::Number(n) => {
                self.write_u8(2);
                self.write_str(&n.to_string());
            }
            serde_json::Value::String(s) => {
                self.write_u8(3);
                self.write_str(s);
            }
            serde_json::Value::Array(items) => {
                self.write_u8(4);
                self.write_u64(items.len() as u64);
                for item in items {
                    self.write_json(item);
                }
            }
            serde_json::Value::Object(map) => {
                self.write_u8(5);
                let mut keys = map.keys().collect::<Vec<_>>();
                keys.sort();
                self.write_u64(keys.len() as u64);
                for k in keys {
                    self.write_str(k);
                    self.write_json(&map[k.as_str()]);
                }
            }
        }
    }

    pub(crate) fn finish(self) -> ContentHash {
        ContentHash(self.inner.digest())
    }
}

pub(crate) fn hash_str(s: &str) -> ContentHash {
    let mut h = StableHasher::new();
    h.write_str(s);
    h.finish()
}

/// Canonical JSON text with object keys sorted recursively.
///
/// Two structurally equal values always serialize identically, whatever order their keys were
/// inserted in.
pub(crate) fn canonical_json(v: &serde_json::Value) -> String {
    let mut out = String::new();
    write_canonical(&mut out, v);
    out
}

fn write_canonical(out: &mut String, v: &serde_json::Value) {
    match v {
        serde_json::Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(out, item);
            }
            out.push(']');
        }
        serde_json::Value::Object(map) => {
            let mut keys = map.keys().collect::<Vec<_>>();
            keys.sort();
            out.push('{');
            for (i, k) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&serde_json::Value::String(k.clone()).to_string());
                out.push(':');
                write_canonical(out, &map[k.as_str()]);
            }
            out.push('}');
        }
        other => out.push_str(&other.to_string()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/hash.rs"]
mod tests;
