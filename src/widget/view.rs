use crate::foundation::error::SliderResult;
use crate::widget::settings::ContainerAttributes;

/// Page-level collaborator the widget renders into.
///
/// Ordering contract: blobs are emitted in registration order, so a table declaration
/// registered before an init statement also runs before it.
pub trait View {
    fn register_css(&mut self, css: &str) -> SliderResult<()>;
    fn register_js(&mut self, js: &str) -> SliderResult<()>;
    fn begin_tag(&mut self, name: &str, attributes: &ContainerAttributes) -> SliderResult<()>;
    fn end_tag(&mut self, name: &str) -> SliderResult<()>;
}

/// In-memory view for tests and the CLI.
///
/// Identical css or js blobs are kept once, as page views usually key blobs by content.
#[derive(Debug, Default)]
pub struct InMemoryView {
    css: Vec<String>,
    js: Vec<String>,
    body: String,
}

impl InMemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn css(&self) -> &[String] {
        &self.css
    }

    pub fn js(&self) -> &[String] {
        &self.js
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Styles, then body markup, then scripts.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        if !self.css.is_empty() {
            html.push_str("<style>\n");
            for css in &self.css {
                html.push_str(css);
                html.push('\n');
            }
            html.push_str("</style>\n");
        }
        html.push_str(&self.body);
        if !self.js.is_empty() {
            html.push_str("<script>\n");
            for js in &self.js {
                html.push_str(js);
                if !js.ends_with('\n') {
                    html.push('\n');
                }
            }
            html.push_str("</script>\n");
        }
        html
    }
}

impl View for InMemoryView {
    fn register_css(&mut self, css: &str) -> SliderResult<()> {
        if !self.css.iter().any(|c| c == css) {
            self.css.push(css.to_string());
        }
        Ok(())
    }

    fn register_js(&mut self, js: &str) -> SliderResult<()> {
        if !self.js.iter().any(|j| j == js) {
            self.js.push(js.to_string());
        }
        Ok(())
    }

    fn begin_tag(&mut self, name: &str, attributes: &ContainerAttributes) -> SliderResult<()> {
        self.body.push('<');
        self.body.push_str(name);
        for (k, v) in attributes.iter() {
            self.body.push_str(&format!(" {k}=\"{}\"", escape_attr(v)));
        }
        self.body.push('>');
        Ok(())
    }

    fn end_tag(&mut self, name: &str) -> SliderResult<()> {
        self.body.push_str(&format!("</{name}>\n"));
        Ok(())
    }
}

fn escape_attr(v: &str) -> String {
    let mut out = String::with_capacity(v.len());
    for c in v.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}
