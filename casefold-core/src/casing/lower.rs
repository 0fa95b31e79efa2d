use super::Caser;

/// Unicode-aware lowercase mapping.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LowerCaser;

impl Caser for LowerCaser {
    fn transform(&self, path: &str) -> String {
        path.to_lowercase()
    }
}
