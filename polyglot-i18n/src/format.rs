//! Positional Formatting
//!
//! Substitutes `{}` and `{0}`-style placeholders with caller-supplied
//! arguments. `{{` and `}}` produce literal braces. Named fields and format
//! specs are errors, as is any placeholder without a matching argument.

use crate::FormatError;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Numbering {
    Automatic,
    Manual,
}

/// Format a template with positional arguments.
///
/// Surplus arguments are ignored.
///
/// # Example
///
/// ```
/// use polyglot_i18n::format_positional;
///
/// let out = format_positional("{0} hat {1} Punkte, {0}!", &[&"Sam", &12]).unwrap();
/// assert_eq!(out, "Sam hat 12 Punkte, Sam!");
///
/// assert!(format_positional("Hi {1}", &[&"Sam"]).is_err());
/// ```
pub fn format_positional(template: &str, args: &[&dyn Display]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();
    let mut numbering: Option<Numbering> = None;
    let mut next_auto = 0usize;

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    out.push('{');
                    continue;
                }

                let mut field = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    field.push(c);
                }
                if !closed {
                    return Err(FormatError::UnmatchedOpen(pos));
                }

                let (index, style) = if field.is_empty() {
                    let index = next_auto;
                    next_auto += 1;
                    (index, Numbering::Automatic)
                } else if field.bytes().all(|b| b.is_ascii_digit()) {
                    let index = field
                        .parse()
                        .map_err(|_| FormatError::InvalidPlaceholder(field.clone()))?;
                    (index, Numbering::Manual)
                } else {
                    return Err(FormatError::InvalidPlaceholder(field));
                };

                match numbering {
                    Some(current) if current != style => return Err(FormatError::MixedNumbering),
                    _ => numbering = Some(style),
                }

                let arg = args.get(index).ok_or(FormatError::MissingArgument {
                    index,
                    provided: args.len(),
                })?;
                out.push_str(&arg.to_string());
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(FormatError::UnmatchedClose(pos));
                }
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_indices() {
        assert_eq!(format_positional("Hi {0}", &[&"Sam"]).unwrap(), "Hi Sam");
        assert_eq!(
            format_positional("{1} before {0}", &[&"a", &"b"]).unwrap(),
            "b before a"
        );
    }

    #[test]
    fn test_automatic_numbering() {
        assert_eq!(
            format_positional("{} + {} = {}", &[&1, &2, &3]).unwrap(),
            "1 + 2 = 3"
        );
    }

    #[test]
    fn test_escaped_braces() {
        assert_eq!(
            format_positional("{{literal}} {0}", &[&"x"]).unwrap(),
            "{literal} x"
        );
        assert_eq!(format_positional("}}{{", &[]).unwrap(), "}{");
    }

    #[test]
    fn test_no_placeholders_ignores_args() {
        assert_eq!(format_positional("Bye!", &[&"unused"]).unwrap(), "Bye!");
    }

    #[test]
    fn test_missing_argument() {
        assert_eq!(
            format_positional("Hi {1}", &[&"Sam"]),
            Err(FormatError::MissingArgument { index: 1, provided: 1 })
        );
        assert_eq!(
            format_positional("{} and {}", &[&"one"]),
            Err(FormatError::MissingArgument { index: 1, provided: 1 })
        );
    }

    #[test]
    fn test_unmatched_braces() {
        assert_eq!(
            format_positional("oops {0", &[&1]),
            Err(FormatError::UnmatchedOpen(5))
        );
        assert_eq!(
            format_positional("oops }", &[]),
            Err(FormatError::UnmatchedClose(5))
        );
    }

    #[test]
    fn test_mixed_numbering() {
        assert_eq!(
            format_positional("{} {0}", &[&1]),
            Err(FormatError::MixedNumbering)
        );
    }

    #[test]
    fn test_named_field_rejected() {
        assert_eq!(
            format_positional("Hi {name}", &[&"Sam"]),
            Err(FormatError::InvalidPlaceholder("name".to_string()))
        );
        assert_eq!(
            format_positional("{0:>5}", &[&"Sam"]),
            Err(FormatError::InvalidPlaceholder("0:>5".to_string()))
        );
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(
            format_positional("こんにちは、{0}さん", &[&"サム"]).unwrap(),
            "こんにちは、サムさん"
        );
    }
}
