// Integration tests for template rendering

use std::fs;

use spigot::render::{self, Template};

#[test]
fn test_markers_are_substituted_in_order() {
    let template = Template::from_text("*_*\nab*\n");
    assert_eq!(template.capacity(), 3);
    assert_eq!(template.render("123"), "1 2\nab3");
}

#[test]
fn test_literal_text_is_kept_verbatim() {
    let template = Template::from_text("pi=*.*_!\n");
    assert_eq!(template.render("31"), "pi=3.1 !");
}

#[test]
fn test_leftover_digits_are_appended() {
    let template = Template::from_text("**\n_*\n");
    assert_eq!(template.render("123456"), "12\n 3\n456");
}

#[test]
fn test_exhausted_digits_leave_markers() {
    let template = Template::from_text("****\n");
    assert_eq!(template.render("12"), "12**");
}

#[test]
fn test_blank_lines_are_skipped() {
    let template = Template::from_text("  *_*  \n\n   \n*\n");
    assert_eq!(template.lines(), ["*_*", "*"]);
    assert_eq!(template.render("123"), "1 2\n3");
}

#[test]
fn test_each_token_renders_on_its_own_line() {
    let template = Template::from_text("*_* ab\t*\n");
    assert_eq!(template.lines(), ["*_*", "ab", "*"]);
    assert_eq!(template.render("123"), "1 2\nab\n3");
}

#[test]
fn test_missing_template_falls_back() {
    assert_eq!(render::render(None, "123"), "3.123");
    assert_eq!(
        render::render_from_path("definitely/not/here/pi.txt", "123"),
        "3.123"
    );
}

#[test]
fn test_render_from_file() {
    let dir = std::env::temp_dir().join(format!("spigot-render-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("pi.txt");
    fs::write(&path, "_**\n*_\n").unwrap();

    assert_eq!(render::render_from_path(&path, "1234"), " 12\n3 \n4");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_bundled_template_has_room_for_digits() {
    let template = Template::load(concat!(env!("CARGO_MANIFEST_DIR"), "/../pi.txt")).unwrap();
    assert!(template.capacity() > 100);
    let digits = "1".repeat(template.capacity());
    let rendered = template.render(&digits);
    assert!(!rendered.contains('*'));
    assert!(!rendered.contains('_'));
    assert_eq!(rendered.lines().count(), template.lines().len());
}
