/// Returns the single-quoted fragments of `message`, in order.
fn quoted_names(message: &str) -> impl Iterator<Item = &str> {
    message.split('\'')
           .skip(1)
           .step_by(2)
           .filter(|name| !name.is_empty())
}

/// Formats an error message together with the source line it points at.
///
/// The output is the message, then the 1-indexed `line` of `source`
/// verbatim, then a caret under the first single-quoted name from the message
/// that occurs in that line. Without such a name the caret sits in column 0.
/// If `line` is `None` or past the end of the source, only the message is
/// returned.
///
/// Tabs before the caret are kept so it lines up with the source in a
/// terminal.
///
/// # Example
/// ```
/// use cinder::report::format_diagnostic;
///
/// let source = "int a = 1;\nprint(b);";
/// let diagnostic = format_diagnostic(source, "Error on line 2: Undeclared variable 'b'.", Some(2));
///
/// assert_eq!(diagnostic,
///            "Error on line 2: Undeclared variable 'b'.\nprint(b);\n      ^");
/// ```
#[must_use]
pub fn format_diagnostic(source: &str, message: &str, line: Option<usize>) -> String {
    let Some(source_line) = line.and_then(|n| n.checked_sub(1))
                                .and_then(|index| source.lines().nth(index))
    else {
        return message.to_string();
    };

    let column = quoted_names(message).find_map(|name| source_line.find(name))
                                      .unwrap_or(0);

    let padding: String = source_line[..column].chars()
                                               .map(|c| if c == '\t' { '\t' } else { ' ' })
                                               .collect();

    format!("{message}\n{source_line}\n{padding}^")
}

#[cfg(test)]
mod tests {
    use super::format_diagnostic;

    #[test]
    fn caret_falls_back_to_first_column() {
        let diagnostic = format_diagnostic("  x = 1;", "Error on line 1: Division by zero.", Some(1));
        assert_eq!(diagnostic, "Error on line 1: Division by zero.\n  x = 1;\n^");
    }

    #[test]
    fn caret_keeps_tabs() {
        let diagnostic = format_diagnostic("\tfoo(1);", "Error on line 1: Undefined function 'foo'.", Some(1));
        assert_eq!(diagnostic, "Error on line 1: Undefined function 'foo'.\n\tfoo(1);\n\t^");
    }

    #[test]
    fn skips_names_missing_from_the_line() {
        let source = "int f() { return 1; }\nint y = f(1);";
        let diagnostic = format_diagnostic(source,
                                           "Error on line 2: Function 'g' or 'f' was misused.",
                                           Some(2));
        assert!(diagnostic.ends_with("int y = f(1);\n        ^"));
    }

    #[test]
    fn message_only_without_a_line() {
        assert_eq!(format_diagnostic("int a = 1;", "oops", None), "oops");
        assert_eq!(format_diagnostic("int a = 1;", "oops", Some(7)), "oops");
        assert_eq!(format_diagnostic("int a = 1;", "oops", Some(0)), "oops");
    }
}
