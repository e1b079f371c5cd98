//! Rendering of the gtag snippet text.

/// Render the two-`<script>` gtag block for `tag_id`.
///
/// An empty tag id means "nothing to inject" and renders as an empty string.
/// The output is byte-identical for identical tag ids. No HTML escaping is
/// applied: the gate's format rule constrains the tag id to a safe alphabet
/// before anything reaches this function.
pub fn render_snippet(tag_id: &str) -> String {
    if tag_id.is_empty() {
        return String::new();
    }
    format!(
        r#"<script async src="https://www.googletagmanager.com/gtag/js?id={tag_id}"></script>
<script>
  window.dataLayer = window.dataLayer || [];
  function gtag(){{dataLayer.push(arguments);}}
  gtag('js', new Date());

  gtag('config', '{tag_id}');
</script>"#
    )
}

#[cfg(test)]
mod tests {
    use super::render_snippet;

    #[test]
    fn empty_tag_id_renders_nothing() {
        assert_eq!(render_snippet(""), "");
    }

    #[test]
    fn snippet_references_the_tag_id_in_both_scripts() {
        let html = render_snippet("G-ABC123");
        assert_eq!(html.matches("gtag/js?id=G-ABC123").count(), 1);
        assert_eq!(html.matches("gtag('config', 'G-ABC123')").count(), 1);
    }

    #[test]
    fn snippet_is_deterministic() {
        assert_eq!(render_snippet("UA-12345-1"), render_snippet("UA-12345-1"));
    }

    #[test]
    fn snippet_shape() {
        let html = render_snippet("G-ABC123");
        assert!(html.starts_with(
            r#"<script async src="https://www.googletagmanager.com/gtag/js?id=G-ABC123"></script>"#
        ));
        assert!(html.ends_with("</script>"));
        assert_eq!(html.matches("<script").count(), 2);
        assert!(html.contains("window.dataLayer = window.dataLayer || [];"));
        assert!(html.contains("gtag('js', new Date());"));
    }
}
