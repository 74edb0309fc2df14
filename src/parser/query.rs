use scraper::{ElementRef, Html};

/// The three lookups company extraction needs from a parsed page. All of
/// them walk the document in order and return the raw (unnormalized) text.
pub trait DocumentQuery {
    /// Text of the first `tag` element whose class list contains `class`.
    fn first_text_by_class(&self, tag: &str, class: &str) -> Option<String>;

    /// Finds the first `label_tag` element whose text satisfies `matches`,
    /// then returns the text of the first `value_tag` element after it in
    /// document order.
    fn text_after_label(
        &self,
        label_tag: &str,
        matches: &dyn Fn(&str) -> bool,
        value_tag: &str,
    ) -> Option<String>;

    /// `href` of the first link that has both a target and visible text.
    fn first_link_with_text(&self) -> Option<String>;
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

fn elements(html: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    html.tree.root().descendants().filter_map(ElementRef::wrap)
}

impl DocumentQuery for Html {
    fn first_text_by_class(&self, tag: &str, class: &str) -> Option<String> {
        elements(self)
            .find(|el| el.value().name() == tag && el.value().classes().any(|c| c == class))
            .map(text_of)
    }

    fn text_after_label(
        &self,
        label_tag: &str,
        matches: &dyn Fn(&str) -> bool,
        value_tag: &str,
    ) -> Option<String> {
        let mut walker = elements(self);
        walker.find(|el| el.value().name() == label_tag && matches(&text_of(*el)))?;
        walker.find(|el| el.value().name() == value_tag).map(text_of)
    }

    fn first_link_with_text(&self) -> Option<String> {
        elements(self)
            .filter(|el| el.value().name() == "a")
            .find_map(|el| {
                let href = el.value().attr("href")?;
                if text_of(el).trim().is_empty() {
                    None
                } else {
                    Some(href.to_string())
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact(label: &'static str) -> impl Fn(&str) -> bool {
        move |text| text == label
    }

    #[test]
    fn test_first_text_by_class() {
        let html = Html::parse_document(
            r#"<ul>
                <li class="rank">#1</li>
                <li class="profile-stats amount">$2.5 T</li>
                <li class="amount">$1 B</li>
            </ul>"#,
        );

        assert_eq!(
            html.first_text_by_class("li", "amount").as_deref(),
            Some("$2.5 T")
        );
        assert_eq!(html.first_text_by_class("div", "amount"), None);
        assert_eq!(html.first_text_by_class("li", "amo"), None);
    }

    #[test]
    fn test_text_after_label_skips_to_next_value_element() {
        let html = Html::parse_document(
            r#"<dl>
                <dt>Founded</dt><dd>1976</dd>
                <dt>Industry</dt>
                <dd>Technology Hardware</dd>
            </dl>"#,
        );

        let industry = html.text_after_label("dt", &exact("Industry"), "dd");
        assert_eq!(industry.as_deref(), Some("Technology Hardware"));
    }

    #[test]
    fn test_text_after_label_crosses_containers() {
        let html = Html::parse_document(
            r#"<div><span><dt>Chief Executive Officer</dt></span></div>
               <section><dl><dd>Tim Cook</dd></dl></section>"#,
        );

        let ceo = html.text_after_label("dt", &exact("Chief Executive Officer"), "dd");
        assert_eq!(ceo.as_deref(), Some("Tim Cook"));
    }

    #[test]
    fn test_text_after_label_without_value() {
        let html = Html::parse_document("<dl><dd>Orphan</dd><dt>Industry</dt></dl>");
        assert_eq!(html.text_after_label("dt", &exact("Industry"), "dd"), None);
    }

    #[test]
    fn test_text_after_label_without_label() {
        let html = Html::parse_document("<dl><dt>Sector</dt><dd>Energy</dd></dl>");
        assert_eq!(html.text_after_label("dt", &exact("Industry"), "dd"), None);
    }

    #[test]
    fn test_first_link_with_text() {
        let html = Html::parse_document(
            r#"<a name="anchor">No target</a>
               <a href="/logo.png"><img src="logo.png"></a>
               <a href="   ">   </a>
               <a href="https://www.apple.com/">apple.com</a>
               <a href="https://other.example/">other</a>"#,
        );

        assert_eq!(
            html.first_link_with_text().as_deref(),
            Some("https://www.apple.com/")
        );
    }

    #[test]
    fn test_no_link_with_text() {
        let html = Html::parse_document(r#"<p>plain</p><a href="/x"></a>"#);
        assert_eq!(html.first_link_with_text(), None);
    }
}
