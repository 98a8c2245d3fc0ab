//! Markup for dynamically loaded carousels
//!
//! Rendered from mustache templates so student names are HTML-escaped.

use serde::Serialize;

use crate::carousel::group_id;
use crate::config::PageConfig;
use crate::error::UiError;
use crate::models::StudentRecord;

/// Which template to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageTemplate {
    /// Carousel with cards and navigation arrows
    SchoolGroup,
    /// Placeholder for a school without students
    EmptySchool,
    /// Placeholder for a page without any school buttons
    NoSchools,
}

/// Get template content by type
pub fn get_template_content(template: StageTemplate) -> &'static str {
    match template {
        StageTemplate::SchoolGroup => include_str!("templates/school_group.html.mustache"),
        StageTemplate::EmptySchool => include_str!("templates/empty_school.html.mustache"),
        StageTemplate::NoSchools => include_str!("templates/no_schools.html.mustache"),
    }
}

#[derive(Debug, Clone, Serialize)]
struct CardContext {
    real_index: usize,
    student_id: u64,
    name: String,
    portrait_url: String,
}

#[derive(Debug, Clone, Serialize)]
struct GroupContext {
    group_id: String,
    cards: Vec<CardContext>,
}

fn render<T: Serialize>(template: StageTemplate, context: &T) -> Result<String, UiError> {
    let compiled = mustache::compile_str(get_template_content(template))?;
    Ok(compiled.render_to_string(context)?)
}

/// Build the container for one school's carousel.
///
/// The container starts with `opacity-0` so it can fade in once initialized.
pub fn render_school_group(
    school_id: &str,
    students: &[StudentRecord],
    config: &PageConfig,
) -> Result<String, UiError> {
    let group_id = group_id(school_id);
    if students.is_empty() {
        return render(
            StageTemplate::EmptySchool,
            &GroupContext { group_id, cards: Vec::new() },
        );
    }

    let cards = students
        .iter()
        .enumerate()
        .map(|(i, student)| CardContext {
            real_index: i,
            student_id: student.id,
            name: student.name.clone(),
            portrait_url: student
                .portrait_url
                .clone()
                .unwrap_or_else(|| config.portrait_url(student.id)),
        })
        .collect();

    render(StageTemplate::SchoolGroup, &GroupContext { group_id, cards })
}

/// Message shown when the page has no school to select
pub fn render_no_schools() -> Result<String, UiError> {
    render(
        StageTemplate::NoSchools,
        &GroupContext { group_id: String::new(), cards: Vec::new() },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn students() -> Vec<StudentRecord> {
        vec![StudentRecord::new(10, "Hina"), StudentRecord::new(11, "Iori")]
    }

    #[test]
    fn test_group_markup_has_cards_and_controls() {
        let html = render_school_group("4", &students(), &PageConfig::default()).unwrap();
        assert!(html.contains(r#"id="school-group-4""#));
        assert!(html.contains("opacity-0"));
        assert_eq!(html.matches("character-card ").count(), 2);
        assert!(html.contains(r#"data-real-index="0""#));
        assert!(html.contains(r#"data-real-index="1""#));
        assert!(html.contains("/image/student/11/portrait"));
        assert!(html.contains("nav-left"));
        assert!(html.contains("nav-right"));
    }

    #[test]
    fn test_explicit_portrait_url_wins() {
        let mut list = students();
        list[0].portrait_url = Some("https://cdn.example/hina.png".to_string());
        let html = render_school_group("4", &list, &PageConfig::default()).unwrap();
        assert!(html.contains("https://cdn.example/hina.png"));
        assert!(!html.contains("/image/student/10/portrait"));
    }

    #[test]
    fn test_empty_school_placeholder() {
        let html = render_school_group("9", &[], &PageConfig::default()).unwrap();
        assert!(html.contains("No students found for this school."));
        assert!(html.contains(r#"id="school-group-9""#));
        assert!(!html.contains("character-card"));
    }

    #[test]
    fn test_names_are_escaped() {
        let list = vec![StudentRecord::new(1, "<b>Aru</b>")];
        let html = render_school_group("1", &list, &PageConfig::default()).unwrap();
        assert!(!html.contains("<b>Aru</b>"));
        assert!(html.contains("&lt;b&gt;Aru&lt;/b&gt;"));
    }

    #[test]
    fn test_no_schools_message() {
        let html = render_no_schools().unwrap();
        assert!(html.contains("No schools available."));
    }
}
