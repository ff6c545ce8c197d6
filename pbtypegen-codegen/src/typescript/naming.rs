//! Identifier casing and sanitization helpers.

/// Words that are quoted when used as property names.
const RESERVED_WORDS: &[&str] = &[
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "new",
    "null",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
];

/// Converts a collection or field name to PascalCase.
///
/// Purely alphanumeric names only get their first character upper-cased,
/// so `myPosts` stays `MyPosts`. Anything else is split on
/// non-alphanumeric characters and each word is capitalized.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    if !s.is_empty() && s.chars().all(char::is_alphanumeric) {
        return capitalize(s, false);
    }

    s.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| capitalize(word, true))
        .collect()
}

fn capitalize(word: &str, lower_rest: bool) -> String {
    let mut chars = word.chars();
    let mut result = String::with_capacity(word.len());
    if let Some(first) = chars.next() {
        result.extend(first.to_uppercase());
    }
    if lower_rest {
        result.extend(chars.flat_map(char::to_lowercase));
    } else {
        result.extend(chars);
    }
    result
}

/// Returns true if `s` can be written as a bare property name.
#[must_use]
pub fn is_plain_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Makes a field name safe to use as a property name.
///
/// Names with a leading non-letter, characters outside the identifier set,
/// or clashing with a reserved word are emitted as quoted strings.
#[must_use]
pub fn sanitize_field_name(name: &str) -> String {
    if is_plain_identifier(name) && !RESERVED_WORDS.contains(&name) {
        name.to_string()
    } else {
        quote(name)
    }
}

/// Renders `s` as a double-quoted string literal.
#[must_use]
pub fn quote(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            _ => result.push(c),
        }
    }
    result.push('"');
    result
}

/// Returns the option enum name for a select field.
#[must_use]
pub fn option_enum_name(collection_name: &str, field_name: &str) -> String {
    format!(
        "{}{}Options",
        to_pascal_case(collection_name),
        to_pascal_case(field_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("posts"), "Posts");
        assert_eq!(to_pascal_case("myPosts"), "MyPosts");
        assert_eq!(to_pascal_case("user_profiles"), "UserProfiles");
        assert_eq!(to_pascal_case("order-ITEMS"), "OrderItems");
        assert_eq!(to_pascal_case("__weird__name"), "WeirdName");
        assert_eq!(to_pascal_case("v2"), "V2");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_sanitize_field_name() {
        assert_eq!(sanitize_field_name("title"), "title");
        assert_eq!(sanitize_field_name("_private"), "_private");
        assert_eq!(sanitize_field_name("2fa"), "\"2fa\"");
        assert_eq!(sanitize_field_name("has-dash"), "\"has-dash\"");
        assert_eq!(sanitize_field_name("delete"), "\"delete\"");
        assert_eq!(sanitize_field_name(""), "\"\"");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote("back\\slash"), "\"back\\\\slash\"");
    }

    #[test]
    fn test_option_enum_name() {
        assert_eq!(option_enum_name("posts", "tags"), "PostsTagsOptions");
        assert_eq!(
            option_enum_name("user_profiles", "account_type"),
            "UserProfilesAccountTypeOptions"
        );
    }
}
