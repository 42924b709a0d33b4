//! Tests for the rendered data-dictionary document.

use xlsform_model::{
    FormMetadata, GroupInfo, GroupKind, Heading, ParsedForm, Question,
};
use xlsform_report::{render, write_report};

fn metadata() -> FormMetadata {
    FormMetadata {
        form_title: "Household Survey".to_string(),
        form_id: "hh_survey".to_string(),
        version: "3".to_string(),
    }
}

fn question(label: &str, name: &str, group: Option<&str>, level: usize) -> Question {
    Question {
        heading: Heading::from_parts(Some(label), Some(name)),
        name: Some(name.to_string()),
        type_tag: "text".to_string(),
        hint: None,
        relevant: None,
        constraint: None,
        required: false,
        choices: Vec::new(),
        group_level: level,
        group: group.map(String::from),
    }
}

fn fixture() -> ParsedForm {
    let mut age = question("Age", "age", Some("Demographics"), 1);
    age.type_tag = "integer".to_string();
    age.hint = Some("In completed years".to_string());
    age.constraint = Some(". < 120".to_string());
    age.required = true;

    let mut consent = question("Consent given?", "consent", None, 0);
    consent.type_tag = "select_one yn".to_string();
    consent.relevant = Some("Age > 17".to_string());
    consent.choices = vec!["Yes".to_string(), "No".to_string()];

    ParsedForm {
        questions: vec![
            age,
            question("Full name", "name", Some("Demographics"), 1),
            consent,
        ],
        groups: vec![GroupInfo {
            kind: GroupKind::Group,
            title: "Demographics".to_string(),
            name: Some("demo".to_string()),
            label: Some("Demographics".to_string()),
            relevant: None,
            depth: 1,
        }],
    }
}

#[test]
fn empty_form_still_renders_the_shell() {
    let html = render(&ParsedForm::default(), &metadata());
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Household Survey</title>"));
    assert!(html.contains("<h1>Household Survey</h1>"));
    assert!(html.contains("<h2>ID: hh_survey</h2>"));
    assert!(html.contains("<h2>Version: 3</h2>"));
    assert!(html.contains("<div class=\"sidebar\"><h2>Groups</h2><ul>"));
    assert!(!html.contains("question-box"));
    assert!(html.ends_with("</body></html>\n"));
}

#[test]
fn question_blocks_carry_their_metadata() {
    let html = render(&fixture(), &metadata());
    assert!(html.contains("<p class=\"hint\"><strong>Hint:</strong> In completed years</p>"));
    assert!(html.contains("<p class=\"relevant\"><strong>Relevant:</strong> Age &gt; 17</p>"));
    assert!(html.contains("<p class=\"constraint\"><strong>Constraint:</strong> . &lt; 120</p>"));
    assert!(html.contains("<p class=\"required\">Required</p>"));
    assert!(html.contains("<p class=\"type\"><em>Type:</em> select_one yn</p>"));
    // Only one question is required, and absent fields render nothing.
    assert_eq!(html.matches("class=\"required\"").count(), 1);
    assert_eq!(html.matches("class=\"hint\"").count(), 1);
}

#[test]
fn heading_suffix_is_de_emphasized() {
    let html = render(&fixture(), &metadata());
    let start = html.find("<h4").expect("first heading");
    let end = html[start..].find("</h4>").expect("heading close") + start + "</h4>".len();
    insta::assert_snapshot!(
        &html[start..end],
        @r#"<h4 class="question-label">Age <span class="variable-name">[age]</span></h4>"#
    );
}

#[test]
fn indentation_tracks_group_level() {
    let mut form = fixture();
    form.questions[0].group_level = 2;
    let html = render(&form, &metadata());
    assert!(html.contains("style=\"margin-left:40px\""));
    assert!(html.contains("style=\"margin-left:20px\""));
    // Top-level questions get no margin style at all.
    assert!(!html.contains("margin-left:0px"));
}

#[test]
fn sidebar_lists_each_group_once_and_links_to_its_section() {
    let mut form = fixture();
    form.questions
        .push(question("Later", "later", Some("Demographics"), 1));
    let html = render(&form, &metadata());
    assert_eq!(
        html.matches("<li><a href=\"#group-demographics\">Demographics</a></li>").count(),
        1
    );
    assert!(html.contains("<div class=\"dropdown-content\" id=\"group-demographics\">"));
}

#[test]
fn group_sections_close_and_reopen_across_boundaries() {
    let html = render(&fixture(), &metadata());
    // Demographics section opens before its two questions, closes before the
    // ungrouped consent question.
    let section = html.find("<div class=\"dropdown\">Demographics</div>").expect("section header");
    let consent = html.find("Consent given?").expect("consent question");
    assert!(section < consent);
    let sections = html.matches("class=\"dropdown\"").count();
    assert_eq!(sections, 1);
}

#[test]
fn repeat_groups_are_badged() {
    let mut form = fixture();
    form.groups[0].kind = GroupKind::Repeat;
    form.groups[0].relevant = Some("${hh_size} > 1".to_string());
    let html = render(&form, &metadata());
    assert!(html.contains("<span class=\"repeat-badge\">repeat</span>"));
    assert!(html.contains("<span class=\"group-relevant\">if ${hh_size} &gt; 1</span>"));
}

#[test]
fn choices_are_listed_in_order_behind_a_toggle() {
    let html = render(&fixture(), &metadata());
    assert!(html.contains(
        "<button class=\"choices-btn\" type=\"button\">Show Choices</button><ul class=\"choices\"><li>Yes</li><li>No</li></ul>"
    ));
    // The toggle handler ships inline.
    assert!(html.contains("querySelectorAll('.choices-btn')"));
    assert!(html.contains(".choices { display: none;"));
}

#[test]
fn interpolated_text_is_escaped() {
    let mut form = fixture();
    form.questions[0].heading = Heading::from_parts(Some("<script>alert(1)</script>"), None);
    form.questions[0].hint = Some("use \"quotes\" & <tags>".to_string());
    let html = render(
        &form,
        &FormMetadata {
            form_title: "A & B".to_string(),
            form_id: String::new(),
            version: String::new(),
        },
    );
    assert!(html.contains("<title>A &amp; B</title>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("use &quot;quotes&quot; &amp; &lt;tags&gt;"));
    assert!(!html.contains("<script>alert(1)</script>"));
}

#[test]
fn write_report_creates_parent_directories() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join("nested/out/dictionary.html");
    write_report(&path, &fixture(), &metadata()).expect("write report");
    let written = std::fs::read_to_string(&path).expect("read back");
    assert!(written.contains("<h1>Household Survey</h1>"));
}
