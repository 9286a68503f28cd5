//! Single-line method signature parser.
//!
//! Accepts the shape
//!
//! ```text
//! [accessModifier ' ']returnType ' ' methodName '(' [argType argName (', ' argType argName)*] ')'
//! ```
//!
//! and splits it in one linear pass: the text before `(` is split on single
//! spaces into two or three tokens, the text inside the parentheses is split
//! on `", "` into `type name` fragments. There is no recovery; the first
//! malformed piece is reported as a [`ParseError`].
//!
//! A three-token prefix always yields an access modifier. No keyword list is
//! consulted, so `static int count()` has modifier `static`.
//!
//! # Example
//!
//! ```rust
//! use sigparse::parser::parse;
//!
//! let sig = parse("private void log(String value)").unwrap();
//! assert_eq!(sig.access_modifier(), Some("private"));
//! assert_eq!(sig.method_name(), "log");
//! assert_eq!(sig.arguments()[0].arg_type(), "String");
//! ```

use crate::core::{Argument, MethodSignature};
use crate::errors::{ParseError, TokenPosition};

const OPEN_PAREN: char = '(';
const CLOSE_PAREN: char = ')';
const TOKEN_SEPARATOR: char = ' ';
const ARGUMENT_SEPARATOR: &str = ", ";

/// Parse a signature string into a [`MethodSignature`].
pub fn parse(signature: &str) -> Result<MethodSignature, ParseError> {
    let (prefix, args_and_close) =
        signature
            .split_once(OPEN_PAREN)
            .ok_or_else(|| ParseError::MissingOpenParen {
                signature: signature.to_string(),
            })?;

    let (access_modifier, return_type, method_name) = split_prefix(prefix)?;
    let arguments = parse_arguments(argument_body(args_and_close)?)?;

    log::trace!(
        "parsed '{}': modifier={:?} return={} name={} arity={}",
        signature,
        access_modifier,
        return_type,
        method_name,
        arguments.len()
    );

    Ok(MethodSignature::new(
        access_modifier.map(str::to_string),
        return_type,
        method_name,
        arguments,
    ))
}

/// Classify prefix tokens into (modifier, return type, method name).
fn split_prefix(prefix: &str) -> Result<(Option<&str>, &str, &str), ParseError> {
    let tokens: Vec<&str> = prefix.split(TOKEN_SEPARATOR).collect();
    let (access_modifier, return_type, method_name) = match tokens.as_slice() {
        [modifier, return_type, method_name] => (Some(*modifier), *return_type, *method_name),
        [return_type, method_name] => (None, *return_type, *method_name),
        _ => {
            return Err(ParseError::PrefixTokenCount {
                prefix: prefix.to_string(),
                count: tokens.len(),
            })
        }
    };

    let empty = |position| ParseError::EmptyToken {
        prefix: prefix.to_string(),
        position,
    };
    if access_modifier.is_some_and(str::is_empty) {
        return Err(empty(TokenPosition::AccessModifier));
    }
    if return_type.is_empty() {
        return Err(empty(TokenPosition::ReturnType));
    }
    if method_name.is_empty() {
        return Err(empty(TokenPosition::MethodName));
    }

    Ok((access_modifier, return_type, method_name))
}

/// Strip the terminating `)` and reject any other parenthesis.
fn argument_body(args_and_close: &str) -> Result<&str, ParseError> {
    if args_and_close.contains(OPEN_PAREN) {
        return Err(ParseError::UnexpectedOpenParen {
            arguments: args_and_close.to_string(),
        });
    }

    let body = args_and_close
        .strip_suffix(CLOSE_PAREN)
        .unwrap_or(args_and_close);

    if body.contains(CLOSE_PAREN) {
        return Err(ParseError::UnexpectedCloseParen {
            arguments: args_and_close.to_string(),
        });
    }

    Ok(body)
}

fn parse_arguments(body: &str) -> Result<Vec<Argument>, ParseError> {
    if body.is_empty() {
        return Ok(Vec::new());
    }

    body.split(ARGUMENT_SEPARATOR).map(parse_argument).collect()
}

fn parse_argument(fragment: &str) -> Result<Argument, ParseError> {
    match fragment.split_once(TOKEN_SEPARATOR) {
        Some((arg_type, name))
            if !arg_type.is_empty() && !name.is_empty() && !name.contains(TOKEN_SEPARATOR) =>
        {
            Ok(Argument::new(arg_type, name))
        }
        _ => Err(ParseError::MalformedArgument {
            fragment: fragment.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_prefix_two_tokens() {
        assert_eq!(split_prefix("int add").unwrap(), (None, "int", "add"));
    }

    #[test]
    fn test_split_prefix_three_tokens() {
        assert_eq!(
            split_prefix("public DateTime now").unwrap(),
            (Some("public"), "DateTime", "now")
        );
    }

    #[test]
    fn test_split_prefix_rejects_four_tokens() {
        let err = split_prefix("public static void main").unwrap_err();
        assert_eq!(
            err,
            ParseError::PrefixTokenCount {
                prefix: "public static void main".to_string(),
                count: 4,
            }
        );
    }

    #[test]
    fn test_split_prefix_rejects_doubled_space() {
        // "int  add" splits into ["int", "", "add"]
        let err = split_prefix("int  add").unwrap_err();
        assert_eq!(
            err,
            ParseError::EmptyToken {
                prefix: "int  add".to_string(),
                position: TokenPosition::ReturnType,
            }
        );
    }

    #[test]
    fn test_split_prefix_rejects_trailing_space() {
        let err = split_prefix("void ").unwrap_err();
        assert!(matches!(
            err,
            ParseError::EmptyToken {
                position: TokenPosition::MethodName,
                ..
            }
        ));
    }

    #[test]
    fn test_argument_body_strips_single_close_paren() {
        assert_eq!(argument_body("int a)").unwrap(), "int a");
        assert_eq!(argument_body(")").unwrap(), "");
    }

    #[test]
    fn test_argument_body_without_close_paren() {
        assert_eq!(argument_body("int a").unwrap(), "int a");
    }

    #[test]
    fn test_argument_body_rejects_stray_parens() {
        assert!(matches!(
            argument_body("int a)b)"),
            Err(ParseError::UnexpectedCloseParen { .. })
        ));
        assert!(matches!(
            argument_body("int a(b)"),
            Err(ParseError::UnexpectedOpenParen { .. })
        ));
    }

    #[test]
    fn test_parse_argument_requires_single_space() {
        assert_eq!(parse_argument("int x").unwrap(), Argument::new("int", "x"));
        for fragment in ["int", "int x y", " x", "int ", "int  x", ""] {
            assert_eq!(
                parse_argument(fragment).unwrap_err(),
                ParseError::MalformedArgument {
                    fragment: fragment.to_string()
                },
                "fragment {:?}",
                fragment
            );
        }
    }

    #[test]
    fn test_parse_arguments_empty_body() {
        assert!(parse_arguments("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_arguments_rejects_comma_without_space() {
        let err = parse_arguments("int a,int b").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedArgument {
                fragment: "int a,int b".to_string()
            }
        );
    }

    #[test]
    fn test_parse_keeps_duplicate_arguments() {
        let sig = parse("void f(int a, int a)").unwrap();
        assert_eq!(
            sig.arguments(),
            &[Argument::new("int", "a"), Argument::new("int", "a")]
        );
    }

    #[test]
    fn test_parse_non_keyword_modifier() {
        let sig = parse("static int count()").unwrap();
        assert_eq!(sig.access_modifier(), Some("static"));
        assert_eq!(sig.return_type(), "int");
    }

    #[test]
    fn test_parse_missing_open_paren() {
        assert_eq!(
            parse("void run").unwrap_err(),
            ParseError::MissingOpenParen {
                signature: "void run".to_string()
            }
        );
    }
}
