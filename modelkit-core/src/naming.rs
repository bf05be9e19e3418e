//! Property naming strategies.

/// A rule translating internal property names into external (wire) names.
///
/// Internal names may be in `snake_case` (Rust fields) or `camelCase` (bean-style
/// accessors); both are split into words before being re-joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenameRule {
    /// Keep the internal name.
    #[default]
    None,
    /// `lowercase`.
    LowerCase,
    /// `UPPERCASE`.
    UpperCase,
    /// `PascalCase`.
    PascalCase,
    /// `camelCase`.
    CamelCase,
    /// `snake_case`.
    SnakeCase,
    /// `SCREAMING_SNAKE_CASE`.
    ScreamingSnakeCase,
    /// `kebab-case`.
    KebabCase,
}

impl RenameRule {
    /// Parses the serde-style spelling of a rule (e.g. `"camelCase"`).
    pub fn from_name(name: &str) -> Option<Self> {
        let rule = match name {
            "lowercase" => RenameRule::LowerCase,
            "UPPERCASE" => RenameRule::UpperCase,
            "PascalCase" => RenameRule::PascalCase,
            "camelCase" => RenameRule::CamelCase,
            "snake_case" => RenameRule::SnakeCase,
            "SCREAMING_SNAKE_CASE" => RenameRule::ScreamingSnakeCase,
            "kebab-case" => RenameRule::KebabCase,
            _ => return None,
        };

        Some(rule)
    }

    /// Applies the rule to `name`.
    pub fn apply(self, name: &str) -> String {
        if self == RenameRule::None {
            return name.to_owned();
        }
        let words = words(name);

        match self {
            RenameRule::None => name.to_owned(),
            RenameRule::LowerCase => words.concat().to_lowercase(),
            RenameRule::UpperCase => words.concat().to_uppercase(),
            RenameRule::PascalCase => words.iter().map(|w| capitalize(w)).collect(),
            RenameRule::CamelCase => {
                let mut out = String::with_capacity(name.len());
                for (i, word) in words.iter().enumerate() {
                    if i == 0 {
                        out.push_str(&word.to_lowercase());
                    } else {
                        out.push_str(&capitalize(word));
                    }
                }
                out
            }
            RenameRule::SnakeCase => join_lower(&words, "_"),
            RenameRule::ScreamingSnakeCase => join_lower(&words, "_").to_uppercase(),
            RenameRule::KebabCase => join_lower(&words, "-"),
        }
    }
}

fn words(name: &str) -> Vec<&str> {
    let mut words = Vec::new();
    for chunk in name.split(['_', '-']).filter(|chunk| !chunk.is_empty()) {
        let mut start = 0;
        let mut prev_lower = false;
        for (i, c) in chunk.char_indices() {
            if c.is_uppercase() && prev_lower {
                words.push(&chunk[start..i]);
                start = i;
            }
            prev_lower = c.is_lowercase() || c.is_ascii_digit();
        }
        words.push(&chunk[start..]);
    }

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
}

fn join_lower(words: &[&str], separator: &str) -> String {
    words
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}
