//! Tokenizer for calculator expressions.

use super::EvalError;

/// A lexical token with its byte offset in the source.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    /// `^` or `**`.
    Power,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
}

impl TokenKind {
    pub(crate) fn describe(&self) -> String {
        match self {
            TokenKind::Number(n) => format!("number {}", n),
            TokenKind::Ident(name) => format!("name '{}'", name),
            TokenKind::Plus => "'+'".to_string(),
            TokenKind::Minus => "'-'".to_string(),
            TokenKind::Star => "'*'".to_string(),
            TokenKind::Slash => "'/'".to_string(),
            TokenKind::Power => "'^'".to_string(),
            TokenKind::LParen => "'('".to_string(),
            TokenKind::RParen => "')'".to_string(),
            TokenKind::LBracket => "'['".to_string(),
            TokenKind::RBracket => "']'".to_string(),
            TokenKind::Comma => "','".to_string(),
        }
    }
}

/// Split an expression into tokens.
///
/// Only ASCII digits, identifiers, the operator set and brackets are
/// recognized. Anything else (quotes, dots outside numbers, `=`, unicode
/// operators such as `×` or `−`) is rejected here.
pub(crate) fn tokenize(source: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some(&(offset, ch)) = chars.peek() {
        let kind = match ch {
            c if c.is_ascii_whitespace() => {
                chars.next();
                continue;
            }
            c if c.is_ascii_digit() || c == '.' => {
                let end = scan_number(source, offset);
                let literal = &source[offset..end];
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| EvalError::InvalidNumber(literal.to_string()))?;
                while chars.peek().is_some_and(|&(i, _)| i < end) {
                    chars.next();
                }
                tokens.push(Token {
                    kind: TokenKind::Number(value),
                    offset,
                });
                continue;
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut end = offset;
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_ascii_alphanumeric() || c == '_' {
                        end = i + c.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token {
                    kind: TokenKind::Ident(source[offset..end].to_string()),
                    offset,
                });
                continue;
            }
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => {
                chars.next();
                if chars.peek().is_some_and(|&(_, c)| c == '*') {
                    chars.next();
                    tokens.push(Token {
                        kind: TokenKind::Power,
                        offset,
                    });
                } else {
                    tokens.push(Token {
                        kind: TokenKind::Star,
                        offset,
                    });
                }
                continue;
            }
            '/' => TokenKind::Slash,
            '^' => TokenKind::Power,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ',' => TokenKind::Comma,
            other => {
                return Err(EvalError::UnexpectedCharacter {
                    ch: other,
                    offset,
                })
            }
        };
        chars.next();
        tokens.push(Token { kind, offset });
    }

    Ok(tokens)
}

/// Find the end of a numeric literal starting at `start`:
/// `digits [. digits] [e [+-] digits]`, also `.5`.
fn scan_number(source: &str, start: usize) -> usize {
    let bytes = source.as_bytes();
    let mut i = start;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        if j < bytes.len() && bytes[j].is_ascii_digit() {
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_numbers_and_operators() {
        assert_eq!(
            kinds("2 + 3.5*4"),
            vec![
                TokenKind::Number(2.0),
                TokenKind::Plus,
                TokenKind::Number(3.5),
                TokenKind::Star,
                TokenKind::Number(4.0),
            ]
        );
    }

    #[test]
    fn test_exponent_and_leading_dot() {
        assert_eq!(
            kinds("1e3 .5 2E-2"),
            vec![
                TokenKind::Number(1000.0),
                TokenKind::Number(0.5),
                TokenKind::Number(0.02),
            ]
        );
    }

    #[test]
    fn test_double_star_is_power() {
        assert_eq!(
            kinds("2**8^1"),
            vec![
                TokenKind::Number(2.0),
                TokenKind::Power,
                TokenKind::Number(8.0),
                TokenKind::Power,
                TokenKind::Number(1.0),
            ]
        );
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(
            kinds("max(a_1)"),
            vec![
                TokenKind::Ident("max".to_string()),
                TokenKind::LParen,
                TokenKind::Ident("a_1".to_string()),
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn test_rejects_quotes_and_unicode() {
        assert!(matches!(
            tokenize("__import__('os')"),
            Err(EvalError::UnexpectedCharacter { ch: '\'', .. })
        ));
        assert!(matches!(
            tokenize("6 × 7"),
            Err(EvalError::UnexpectedCharacter { ch: '×', .. })
        ));
        assert!(matches!(
            tokenize("x.y"),
            Err(EvalError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_lone_dot_is_invalid_number() {
        assert!(matches!(tokenize("."), Err(EvalError::InvalidNumber(_))));
    }
}
