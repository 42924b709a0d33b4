//! HTML document assembly.
//!
//! The document is accumulated through a single append-only buffer and
//! serialized once; section writers push blocks in document order. Same
//! input always yields identical bytes.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use xlsform_model::{FormMetadata, GroupKind, ParsedForm, Question};

/// Per-level indentation of question blocks, in pixels.
const INDENT_PX: usize = 20;

/// Render the data dictionary as one self-contained HTML document.
pub fn render(form: &ParsedForm, metadata: &FormMetadata) -> String {
    let mut w = Html::new();
    w.push("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>");
    w.push(&esc(&metadata.form_title));
    w.push("</title><style>");
    w.push(STYLE);
    w.push("</style></head>\n<body>\n");

    write_sidebar(&mut w, form);
    write_content(&mut w, form, metadata);

    w.push("<script>");
    w.push(SCRIPT);
    w.push("</script>\n</body></html>\n");
    w.finish()
}

/// Render and write the document, creating parent directories as needed.
pub fn write_report(path: &Path, form: &ParsedForm, metadata: &FormMetadata) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(path, render(form, metadata)).with_context(|| format!("write {}", path.display()))
}

// Append-only document buffer, serialized once.
struct Html {
    buf: String,
}

impl Html {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(16 * 1024),
        }
    }

    fn push(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    fn finish(self) -> String {
        self.buf
    }
}

fn write_sidebar(w: &mut Html, form: &ParsedForm) {
    w.push("<div class=\"sidebar\"><h2>Groups</h2><ul>\n");
    for group in form.distinct_groups() {
        w.push("<li><a href=\"#");
        w.push(&group_anchor(group));
        w.push("\">");
        w.push(&esc(group));
        w.push("</a></li>\n");
    }
    w.push("</ul></div>\n");
}

fn write_content(w: &mut Html, form: &ParsedForm, metadata: &FormMetadata) {
    w.push("<div class=\"content\">\n<h1>");
    w.push(&esc(&metadata.form_title));
    w.push("</h1>\n<h2>ID: ");
    w.push(&esc(&metadata.form_id));
    w.push("</h2>\n<h2>Version: ");
    w.push(&esc(&metadata.version));
    w.push("</h2>\n");

    // Group sections open and close as the walk crosses group boundaries.
    let mut current: Option<&str> = None;
    for question in &form.questions {
        let group = question.group.as_deref();
        if group != current {
            if current.is_some() {
                w.push("</div>\n");
            }
            if let Some(title) = group {
                write_group_header(w, form, title);
            }
            current = group;
        }
        write_question(w, question);
    }
    if current.is_some() {
        w.push("</div>\n");
    }
    w.push("</div>\n");
}

fn write_group_header(w: &mut Html, form: &ParsedForm, title: &str) {
    w.push("<div class=\"dropdown\">");
    w.push(&esc(title));
    if let Some(info) = form.group_info(title) {
        if info.kind == GroupKind::Repeat {
            w.push(" <span class=\"repeat-badge\">repeat</span>");
        }
        if let Some(relevant) = &info.relevant {
            w.push(" <span class=\"group-relevant\">if ");
            w.push(&esc(relevant));
            w.push("</span>");
        }
    }
    w.push("</div>\n<div class=\"dropdown-content\" id=\"");
    w.push(&group_anchor(title));
    w.push("\">\n");
}

fn write_question(w: &mut Html, question: &Question) {
    w.push("<div class=\"question-box\"");
    if question.group_level > 0 {
        w.push(&format!(
            " style=\"margin-left:{}px\"",
            question.group_level * INDENT_PX
        ));
    }
    w.push("><h4 class=\"question-label\">");
    w.push(&esc(&question.heading.text));
    if let Some(suffix) = &question.heading.suffix {
        w.push(" <span class=\"variable-name\">[");
        w.push(&esc(suffix));
        w.push("]</span>");
    }
    w.push("</h4>\n");

    write_detail(w, "hint", "Hint", question.hint.as_deref());
    write_detail(w, "relevant", "Relevant", question.relevant.as_deref());
    write_detail(w, "constraint", "Constraint", question.constraint.as_deref());
    if question.required {
        w.push("<p class=\"required\">Required</p>\n");
    }
    if !question.type_tag.is_empty() {
        w.push("<p class=\"type\"><em>Type:</em> ");
        w.push(&esc(&question.type_tag));
        w.push("</p>\n");
    }
    if !question.choices.is_empty() {
        w.push("<div class=\"choices-container\"><button class=\"choices-btn\" type=\"button\">Show Choices</button><ul class=\"choices\">");
        for choice in &question.choices {
            w.push("<li>");
            w.push(&esc(choice));
            w.push("</li>");
        }
        w.push("</ul></div>\n");
    }
    w.push("</div>\n");
}

fn write_detail(w: &mut Html, class: &str, label: &str, value: Option<&str>) {
    let Some(value) = value else {
        return;
    };
    w.push("<p class=\"");
    w.push(class);
    w.push("\"><strong>");
    w.push(label);
    w.push(":</strong> ");
    w.push(&esc(value));
    w.push("</p>\n");
}

fn esc(text: &str) -> String {
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

// Group titles may contain spaces, which are not valid in id attributes.
fn group_anchor(title: &str) -> String {
    let mut slug = String::with_capacity(title.len() + 6);
    slug.push_str("group-");
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else {
            slug.push('-');
        }
    }
    slug
}

const STYLE: &str = "\
body { font-family: 'Open Sans', sans-serif; background-color: #f9f9f9; color: #333; }\n\
.sidebar { width: 250px; float: left; position: fixed; height: 100%; padding: 15px; background-color: #2c3e50; color: white; border-right: 1px solid #ccc; }\n\
.sidebar h2 { font-size: 20px; color: #ecf0f1; text-align: center; margin-bottom: 20px; }\n\
.sidebar ul { padding-left: 0; list-style: none; }\n\
.sidebar ul li { padding: 10px; border-bottom: 1px solid #34495e; }\n\
.sidebar ul li a { color: #ecf0f1; text-decoration: none; }\n\
.sidebar ul li:hover { background-color: #34495e; }\n\
.content { margin-left: 270px; padding: 20px; }\n\
h1, h2, h3 { margin-bottom: 10px; }\n\
.dropdown { cursor: pointer; font-weight: bold; margin-bottom: 10px; background-color: #3498db; color: white; padding: 10px; border-radius: 5px; }\n\
.dropdown-content { display: block; margin-left: 20px; border-left: 2px solid #ccc; padding-left: 10px; }\n\
.repeat-badge { font-size: 12px; font-weight: normal; background-color: #2c3e50; padding: 2px 6px; border-radius: 3px; }\n\
.group-relevant { font-size: 12px; font-weight: normal; font-style: italic; }\n\
.question-box { margin-bottom: 20px; padding: 15px; border: 1px solid #ccc; border-radius: 5px; background-color: white; }\n\
.question-label { color: #c0392b; margin-bottom: 10px; }\n\
.variable-name { color: #7f8c8d; font-style: italic; font-weight: normal; }\n\
.hint { color: green; }\n\
.relevant { color: blue; }\n\
.constraint { color: red; }\n\
.required { color: orange; font-weight: bold; }\n\
.type { color: #555; }\n\
.choices-btn { cursor: pointer; border: none; background-color: #3498db; color: white; padding: 5px 10px; border-radius: 3px; }\n\
.choices { display: none; margin-left: 20px; list-style-type: none; }\n\
.choices li { padding: 5px; border-bottom: 1px solid #ddd; }\n\
.choices li:hover { background-color: #eee; }\n";

const SCRIPT: &str = "\n\
document.querySelectorAll('.choices-btn').forEach(function (button) {\n\
    button.addEventListener('click', function () {\n\
        var choices = this.nextElementSibling;\n\
        if (choices.style.display === 'none' || choices.style.display === '') {\n\
            choices.style.display = 'block';\n\
            this.textContent = 'Hide Choices';\n\
        } else {\n\
            choices.style.display = 'none';\n\
            this.textContent = 'Show Choices';\n\
        }\n\
    });\n\
});\n";

#[cfg(test)]
mod tests {
    use super::{esc, group_anchor};

    #[test]
    fn esc_covers_html_metacharacters() {
        assert_eq!(
            esc("<b>\"Tom & Jerry's\"</b>"),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
        assert_eq!(esc("plain"), "plain");
    }

    #[test]
    fn group_anchor_slugifies_titles() {
        assert_eq!(group_anchor("Demographics"), "group-demographics");
        assert_eq!(group_anchor("Household (A)"), "group-household--a-");
        assert_eq!(group_anchor(""), "group-");
    }
}
