//! HTML sanitization of user-generated post content.
//!
//! Post bodies are rich text and get injected as markup, so everything
//! executable is stripped first: `<script>`/`<style>` elements together with
//! their contents, `on*` event handler attributes and `javascript:` URLs.

/// Returns markup that is safe to inject into the page.
pub fn sanitize_html(input: &str) -> String {
    ammonia::clean(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_script_elements_and_their_body() {
        let out = sanitize_html("<p>hello</p><script>alert('x')</script>");
        assert_eq!(out, "<p>hello</p>");
    }

    #[test]
    fn strips_event_handlers() {
        let out = sanitize_html(r#"<img src="cat.png" onerror="alert(1)">"#);
        assert!(!out.contains("onerror"));
        assert!(out.contains("cat.png"));
    }

    #[test]
    fn strips_javascript_urls() {
        let out = sanitize_html(r#"<a href="javascript:alert(1)">click</a>"#);
        assert!(!out.contains("javascript:"));
        assert!(out.contains("click"));
    }

    #[test]
    fn nested_script_payloads_never_survive() {
        let inputs = [
            "<scr<script>ipt>alert(1)</script>",
            "<svg><script>alert(1)</script></svg>",
            "<SCRIPT SRC=//evil.example/x.js></SCRIPT>",
            "<div><iframe src=\"//evil.example\"></iframe>text</div>",
        ];
        for input in inputs {
            let out = sanitize_html(input).to_lowercase();
            assert!(!out.contains("<script"), "{input} -> {out}");
            assert!(!out.contains("<iframe"), "{input} -> {out}");
        }
    }

    #[test]
    fn sanitizing_twice_is_a_no_op() {
        let inputs = [
            "<p>plain <b>bold</b> <i>italic</i></p>",
            "<p>x</p><script>alert(1)</script><img src=\"a.png\" onload=\"x()\">",
            "<ul><li>one</li><li>two &amp; three</li></ul>",
            "just text with <unknown>tags</unknown>",
        ];
        for input in inputs {
            let once = sanitize_html(input);
            assert_eq!(sanitize_html(&once), once, "input: {input}");
        }
    }
}
