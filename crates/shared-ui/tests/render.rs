use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use shared_ui::*;

fn render(element: Element) -> String {
    dioxus_ssr::render_element(element)
}

#[test]
fn page_title_is_a_plain_heading() {
    let html = render(rsx! {
        PageTitle { "Мои курсы" }
    });
    assert_eq!(html, r#"<h1 class="page-title">Мои курсы</h1>"#);
}

#[test]
fn badge_carries_variant() {
    let html = render(rsx! {
        Badge { variant: BadgeVariant::Success, "Active" }
    });
    assert!(html.contains(r#"data-style="success""#), "{html}");
    assert!(html.contains("Active"));
}

#[test]
fn status_badge_has_leading_dot() {
    let html = render(rsx! {
        Badge { variant: BadgeVariant::Warning, dot: true, "Ожидает" }
    });
    assert!(html.contains(r#"class="badge-dot""#), "{html}");

    let html = render(rsx! {
        Badge { "3" }
    });
    assert!(!html.contains("badge-dot"), "{html}");
}

#[test]
fn button_defaults_to_regular_non_submit() {
    let html = render(rsx! {
        Button { "Сохранить" }
    });
    assert!(html.contains(r#"type="button""#), "{html}");
    assert!(html.contains(r#"data-style="primary""#), "{html}");
    assert!(html.contains(r#"data-size="md""#), "{html}");
}

#[test]
fn submit_button_keeps_size_and_variant() {
    let html = render(rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            size: ButtonSize::Large,
            button_type: "submit",
            "Войти"
        }
    });
    assert!(html.contains(r#"type="submit""#), "{html}");
    assert!(html.contains(r#"data-style="ghost""#), "{html}");
    assert!(html.contains(r#"data-size="lg""#), "{html}");
}

#[test]
fn card_tone_defaults_to_plain() {
    let html = render(rsx! {
        Card { CardContent { "body" } }
    });
    assert!(html.contains(r#"data-tone="plain""#), "{html}");

    let html = render(rsx! {
        Card { tone: CardTone::Brand, "GPA" }
    });
    assert!(html.contains(r#"data-tone="brand""#), "{html}");
}

#[test]
fn input_shows_validation_message() {
    let html = render(rsx! {
        Input {
            label: "Email",
            value: "nope",
            error: Some("Введите корректный email".to_string()),
        }
    });
    assert!(html.contains(r#"aria-invalid="true""#), "{html}");
    assert!(html.contains("Введите корректный email"));
    assert!(html.contains("input-label"));
}

#[test]
fn input_without_error_is_valid() {
    let html = render(rsx! {
        Input { value: "student@iitu.edu.kz" }
    });
    assert!(html.contains(r#"aria-invalid="false""#), "{html}");
    assert!(!html.contains("input-error"));
}

#[test]
fn empty_table_row_spans_columns() {
    let html = render(rsx! {
        DataTable {
            DataTableBody {
                DataTableEmpty { colspan: 5, message: "Ничего не найдено" }
            }
        }
    });
    assert!(html.contains(r#"colspan="5""#), "{html}");
    assert!(html.contains("Ничего не найдено"));
}

#[test]
fn stat_card_hint_is_optional() {
    let with_hint = render(rsx! {
        StatCard { label: "GPA", value: "3.67", hint: Some("из 4.0".to_string()) }
    });
    assert!(with_hint.contains("stat-card-hint"));

    let without = render(rsx! {
        StatCard { label: "GPA", value: "3.67" }
    });
    assert!(without.contains("3.67"));
    assert!(!without.contains("stat-card-hint"));
}

#[test]
fn section_can_start_collapsed() {
    let open = render(rsx! {
        Section { title: "Дедлайны", p { "Лабораторная №4" } }
    });
    assert!(open.contains(r#"data-state="open""#), "{open}");
    assert!(open.contains("Лабораторная №4"));

    let closed = render(rsx! {
        Section { title: "Дедлайны", default_open: false, p { "Лабораторная №4" } }
    });
    assert!(closed.contains(r#"data-state="closed""#), "{closed}");
    assert!(!closed.contains("Лабораторная №4"));
}

#[test]
fn sidebar_marks_active_item() {
    let html = render(rsx! {
        SidebarProvider {
            Sidebar {
                SidebarMenu {
                    SidebarMenuItem { active: true, "Главная" }
                    SidebarMenuItem { "Курсы" }
                }
            }
        }
    });
    assert_eq!(html.matches(r#"data-active="true""#).count(), 1, "{html}");
    assert_eq!(html.matches(r#"data-active="false""#).count(), 1);
}

#[test]
fn brand_mark_uses_first_letter() {
    let html = render(rsx! {
        SidebarBrand { title: "IITU Digital", caption: "Student Portal" }
    });
    assert!(html.contains(r#"<div class="sidebar-logo">I</div>"#), "{html}");
}
