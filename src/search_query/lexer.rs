use once_cell::sync::Lazy;
use regex::Regex;

/// Tokens past this count are dropped. Keeps the condition tree shallow
/// enough to evaluate, drop and serialize recursively.
pub const MAX_TOKENS: usize = 1024;

/// Whitespace-delimited `and`/`or` keywords, any case.
static OPERATOR_SPACING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+(or|and)\s+").expect("operator spacing regex"));

/// Raw token pattern, in priority order: quoted value with optional field
/// prefix, single paren, any other run of non-space non-paren chars.
static RAW_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"!?(?:\w+:)?(?:"[^"]*"|'[^']*')|[()]|[^\s()]+"#).expect("raw token regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Field-scoped or bare filter, kept verbatim (including `!` and quotes).
    Filter(String),
    And,
    Or,
    LParen,
    RParen,
}

/// Split a query into a flat token stream with shorthand filters expanded.
/// Never fails: any input produces some (possibly empty) token list of at
/// most [`MAX_TOKENS`] tokens.
pub fn tokenize(input: &str) -> Vec<Token> {
    let normalized = normalize_operators(input);

    let mut tokens: Vec<Token> = RAW_TOKEN
        .find_iter(&normalized)
        .flat_map(|m| expand_shorthand(classify(m.as_str())))
        .take(MAX_TOKENS + 1)
        .collect();

    if tokens.len() > MAX_TOKENS {
        log::warn!("query exceeds {MAX_TOKENS} tokens, ignoring the rest");
        tokens.truncate(MAX_TOKENS);
    }
    tokens
}

/// Collapse the whitespace around bare `and`/`or` to a single space
/// and lowercase the keyword.
fn normalize_operators(input: &str) -> String {
    OPERATOR_SPACING
        .replace_all(input, |caps: &regex::Captures| {
            format!(" {} ", caps[1].to_lowercase())
        })
        .into_owned()
}

fn classify(raw: &str) -> Token {
    match raw {
        "(" => Token::LParen,
        ")" => Token::RParen,
        "and" => Token::And,
        "or" => Token::Or,
        _ => Token::Filter(raw.to_string()),
    }
}

/// Rewrite `key:a,b` / `key:a&b` into an explicit parenthesized group.
///
/// Negated filters flip the joining operator:
/// `!key:a,b` becomes `( !key:a and !key:b )` and
/// `!key:a&b` becomes `( !key:a or !key:b )`.
/// Only the first separator kind found is expanded (comma wins).
pub fn expand_shorthand(token: Token) -> Vec<Token> {
    let raw = match &token {
        Token::Filter(raw) => raw,
        _ => return vec![token],
    };

    if !raw.contains(':') || raw.contains('"') || raw.contains('\'') {
        return vec![token];
    }

    let negated = raw.starts_with('!');
    let content = if negated { &raw[1..] } else { raw.as_str() };
    let Some((key, value)) = content.split_once(':') else {
        return vec![token];
    };

    let separators = [
        (',', if negated { Token::And } else { Token::Or }),
        ('&', if negated { Token::Or } else { Token::And }),
    ];

    for (sep, op) in separators {
        if !value.contains(sep) {
            continue;
        }

        let bang = if negated { "!" } else { "" };
        let mut expanded = vec![Token::LParen];
        for (i, part) in value.split(sep).enumerate() {
            if i > 0 {
                expanded.push(op.clone());
            }
            expanded.push(Token::Filter(format!("{bang}{key}:{}", part.trim())));
        }
        expanded.push(Token::RParen);

        log::trace!("expanded shorthand {raw:?} into {} tokens", expanded.len());
        return expanded;
    }

    vec![token]
}
