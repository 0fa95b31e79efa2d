/// Lexically cleans a `/`-separated path.
///
/// Follows the classic `Clean` rules for slash paths:
/// 1. Replace multiple slashes with a single slash.
/// 2. Eliminate each `.` segment.
/// 3. Eliminate each inner `..` segment along with the segment before it.
/// 4. Eliminate `..` segments that begin a rooted path.
///
/// Trailing slashes are dropped except for the root. An empty input, or one that
/// cleans down to nothing, yields `"."` when relative.
///
/// This is a general lexical helper. [`FilesystemCanonicalizer`] refuses any
/// `..` segment before cleaning, so the `..` rules only apply to other callers.
///
/// [`FilesystemCanonicalizer`]: crate::canonical::FilesystemCanonicalizer
pub fn clean_path(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let rooted = path.starts_with('/');
    let mut stack: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match stack.last() {
                Some(&top) if top != ".." => {
                    stack.pop();
                }
                // Cannot climb above the root.
                _ if rooted => {}
                _ => stack.push(".."),
            },
            _ => stack.push(segment),
        }
    }

    match (rooted, stack.is_empty()) {
        (true, _) => format!("/{}", stack.join("/")),
        (false, true) => ".".to_string(),
        (false, false) => stack.join("/"),
    }
}
