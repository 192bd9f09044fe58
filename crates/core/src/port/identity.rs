// Identity Port - read-only view of a component identity record

use crate::domain::ComponentVersion;

/// Component identity interface
///
/// Call sites depend on this trait instead of the concrete record so tests
/// can hand in any identity they like.
pub trait ComponentIdentity {
    fn name(&self) -> &str;

    fn version(&self) -> Option<ComponentVersion>;

    /// Culture name; `None` means culture-neutral
    fn culture(&self) -> Option<&str>;

    fn public_key_token(&self) -> Option<&[u8]>;

    /// Display name, e.g. `Core, Version=1.2.0.0, Culture=neutral, PublicKeyToken=null`
    fn full_name(&self) -> String {
        let mut out = self.name().to_string();
        if let Some(version) = self.version() {
            out.push_str(&format!(", Version={}", version));
        }
        out.push_str(&format!(", Culture={}", self.culture().unwrap_or("neutral")));
        match self.public_key_token() {
            Some(token) => {
                out.push_str(", PublicKeyToken=");
                for byte in token {
                    out.push_str(&format!("{:02x}", byte));
                }
            }
            None => out.push_str(", PublicKeyToken=null"),
        }
        out
    }
}
