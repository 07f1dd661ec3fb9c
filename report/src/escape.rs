use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WS: Regex = Regex::new(r"\s+").expect("valid regex");
}

/// Make free text safe to drop into a LaTeX body.
///
/// Reserved characters are replaced in a single pass, so the braces of an inserted
/// `\textbackslash{}` are never escaped again. Replacement characters from lossy decoding
/// become `?`. Whitespace runs collapse to one space and the ends are trimmed.
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{fffd}' => out.push('?'),
            '\\' => out.push_str(r"\textbackslash{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            '~' => out.push_str(r"\textasciitilde{}"),
            '{' | '}' | '_' | '%' | '$' | '#' | '&' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    WS.replace_all(&out, " ").trim().to_string()
}

/// First `max_chars` characters of `text`, escaped, followed by an ellipsis.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", escape_latex(&head))
}
