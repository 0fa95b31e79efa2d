use super::Caser;

/// Full Unicode default case folding (locale independent).
///
/// Folding may change the length of the path: `ß` becomes `ss`, `ﬁ` becomes `fi`.
/// Use it when routes must match regardless of case *and* of the alternate
/// spellings that lowercase alone leaves distinct.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FoldCaser;

impl Caser for FoldCaser {
    fn transform(&self, path: &str) -> String {
        // Fast path: ASCII folding is plain lowercase.
        if path.is_ascii() {
            return path.to_ascii_lowercase();
        }
        caseless::default_case_fold_str(path)
    }
}
