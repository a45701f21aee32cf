/// Escapes text for HTML element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escapes `text` and turns `*phrase*` into a highlighted span.
/// An unmatched trailing `*` is kept literally.
pub fn highlight(text: &str) -> String {
    let parts: Vec<&str> = text.split('*').collect();
    let closed = if parts.len() % 2 == 1 {
        parts.len()
    } else {
        parts.len() - 1
    };

    let mut out = String::with_capacity(text.len() + 32);
    for (i, part) in parts.iter().enumerate() {
        if i >= closed {
            out.push('*');
            out.push_str(&escape(part));
        } else if i % 2 == 1 {
            out.push_str("<span class=\"hl\">");
            out.push_str(&escape(part));
            out.push_str("</span>");
        } else {
            out.push_str(&escape(part));
        }
    }
    out
}

/// Renders a row of technology chips.
pub fn chips(items: &[&str], class: &str) -> String {
    let mut out = format!("<div class=\"{}\">", escape(class));
    for item in items {
        out.push_str(&format!("<span class=\"chip\">{}</span>", escape(item)));
    }
    out.push_str("</div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("GD&T <b> \"x\" 'y'"), "GD&amp;T &lt;b&gt; &quot;x&quot; &#39;y&#39;");
    }

    #[test]
    fn test_highlight_pairs() {
        assert_eq!(
            highlight("with *Rivian* and *Ford*."),
            "with <span class=\"hl\">Rivian</span> and <span class=\"hl\">Ford</span>."
        );
    }

    #[test]
    fn test_highlight_unmatched_star_is_literal() {
        assert_eq!(highlight("a *b* c *d"), "a <span class=\"hl\">b</span> c *d");
        assert_eq!(highlight("plain"), "plain");
    }

    #[test]
    fn test_highlight_escapes_inside_span() {
        assert_eq!(highlight("*R&D*"), "<span class=\"hl\">R&amp;D</span>");
    }
}
