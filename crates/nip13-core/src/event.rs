//! Nostr event (NIP-01) construction, id commitment and JSON form.

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::difficulty::difficulty;
use crate::error::PowError;
use crate::hash::sha256_hex;
use crate::record::Record;
use crate::tags::{Tag, Tags};

/// A Nostr event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// SHA256 of the canonical serialization, lowercase hex.
    #[serde(default)]
    pub id: String,
    /// Author public key, hex.
    #[serde(default)]
    pub pubkey: String,
    /// Creation time (Unix seconds).
    pub created_at: u64,
    /// Event kind.
    pub kind: u16,
    #[serde(default)]
    pub tags: Tags,
    #[serde(default)]
    pub content: String,
    /// Schnorr signature, hex. Never checked here.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sig: String,
}

impl Event {
    /// Create an unsigned event with an empty id.
    pub fn new(
        pubkey: impl Into<String>,
        created_at: u64,
        kind: u16,
        tags: Vec<Tag>,
        content: impl Into<String>,
    ) -> Self {
        Event {
            id: String::new(),
            pubkey: pubkey.into(),
            created_at,
            kind,
            tags: Tags(tags),
            content: content.into(),
            sig: String::new(),
        }
    }

    /// Parse an event from its JSON object form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// JSON object form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// The canonical id commitment: `[0,pubkey,created_at,kind,tags,content]`.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(128 + self.content.len());
        self.serialize_into(&mut out);
        out
    }

    /// Append the canonical serialization to `out`.
    ///
    /// Strings are escaped per NIP-01: only `\n`, `"`, `\\`, `\r`, `\t`,
    /// backspace and form feed; everything else is written verbatim.
    pub fn serialize_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(b"[0,");
        write_json_string(out, &self.pubkey);
        out.push(b',');
        write_decimal(out, self.created_at);
        out.push(b',');
        write_decimal(out, u64::from(self.kind));
        out.extend_from_slice(b",[");
        for (i, tag) in self.tags.iter().enumerate() {
            if i > 0 {
                out.push(b',');
            }
            out.push(b'[');
            for (j, field) in tag.0.iter().enumerate() {
                if j > 0 {
                    out.push(b',');
                }
                write_json_string(out, field);
            }
            out.push(b']');
        }
        out.extend_from_slice(b"],");
        write_json_string(out, &self.content);
        out.push(b']');
    }

    /// Compute the id from the current fields without storing it.
    pub fn compute_id(&self) -> String {
        sha256_hex(&self.serialize())
    }

    /// Whether the stored id matches the fields.
    pub fn check_id(&self) -> bool {
        self.id == self.compute_id()
    }

    /// Leading zero bits of the stored id.
    pub fn difficulty(&self) -> Result<u32, PowError> {
        difficulty(&self.id)
    }
}

impl Record for Event {
    fn pubkey(&self) -> &str {
        &self.pubkey
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn tags(&self) -> &Tags {
        &self.tags
    }

    fn tags_mut(&mut self) -> &mut Tags {
        &mut self.tags
    }

    fn set_created_at(&mut self, created_at: u64) {
        self.created_at = created_at;
    }

    fn recompute_id(&mut self) -> &str {
        self.id = self.compute_id();
        &self.id
    }
}

fn write_json_string(out: &mut Vec<u8>, s: &str) {
    out.push(b'"');
    for &b in s.as_bytes() {
        match b {
            b'\n' => out.extend_from_slice(b"\\n"),
            b'"' => out.extend_from_slice(b"\\\""),
            b'\\' => out.extend_from_slice(b"\\\\"),
            b'\r' => out.extend_from_slice(b"\\r"),
            b'\t' => out.extend_from_slice(b"\\t"),
            0x08 => out.extend_from_slice(b"\\b"),
            0x0c => out.extend_from_slice(b"\\f"),
            _ => out.push(b),
        }
    }
    out.push(b'"');
}

fn write_decimal(out: &mut Vec<u8>, mut n: u64) {
    let mut digits = [0u8; 20];
    let mut pos = digits.len();
    loop {
        pos -= 1;
        digits[pos] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    out.extend_from_slice(&digits[pos..]);
}
