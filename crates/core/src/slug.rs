use std::collections::HashMap;

/// Converts text into a github-slugger style slug without deduplication.
///
/// Lowercases, drops punctuation and symbols, and turns each space into `-`.
///
/// ```
/// use folio_core::slug::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("Next.js & Rust"), "nextjs--rust");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.trim().chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == '-' {
            slug.extend(ch.to_lowercase());
        } else if ch == ' ' {
            slug.push('-');
        } else if is_combining_mark(ch) {
            slug.push(ch);
        }
    }
    slug
}

// Diacritics and Indic vowel signs are kept so non-Latin headings stay distinct.
fn is_combining_mark(ch: char) -> bool {
    matches!(
        ch as u32,
        0x0300..=0x036F | 0x0900..=0x0903 | 0x093A..=0x094F | 0x1AB0..=0x1AFF | 0x20D0..=0x20FF
    )
}

/// Stateful slug generator: repeated headings get `-1`, `-2`, ... suffixes.
#[derive(Debug, Default)]
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    /// Creates a new slugger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates the next unique slug for the given heading text.
    pub fn next_slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut candidate = base.clone();

        while self.seen.contains_key(&candidate) {
            let count = self.seen.entry(base.clone()).or_insert(0);
            *count += 1;
            candidate = format!("{}-{}", base, count);
        }

        self.seen.insert(candidate.clone(), 0);
        candidate
    }
}
