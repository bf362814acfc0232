use dioxus::prelude::*;
use shared_types::{
    courses, gpa, journal, journal_average, semester_grades, total_credits, Role, SEMESTERS,
};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, PageActions,
    PageHeader, PageSubtitle, PageTitle, StatCard, ToastOptions,
};

#[component]
pub fn Grades() -> Element {
    rsx! { GradeBook { role: Role::Student } }
}

#[component]
pub fn TeacherGrades() -> Element {
    rsx! { GradeBook { role: Role::Teacher } }
}

fn letter_variant(letter: &str) -> BadgeVariant {
    match letter.chars().next() {
        Some('A') => BadgeVariant::Success,
        Some('B') => BadgeVariant::Primary,
        Some('C') => BadgeVariant::Warning,
        _ => BadgeVariant::Destructive,
    }
}

/// Transcript for students, journal for teachers.
#[component]
fn GradeBook(role: Role) -> Element {
    let toast = use_toast();

    let (title, download_label, download_toast) = match role {
        Role::Student => ("Оценки", "Скачать транскрипт", "Транскрипт скачивается..."),
        Role::Teacher | Role::Admin => ("Журнал", "Скачать ведомость", "Ведомость скачивается..."),
    };

    let download = move |_: MouseEvent| {
        tracing::info!(%role, "grade export requested");
        toast.success(download_toast.to_string(), ToastOptions::new());
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./grades.css") }

        PageHeader {
            div {
                PageTitle { "{title}" }
                PageSubtitle { "Рубежный контроль, экзамен и итог" }
            }
            PageActions {
                Button { variant: ButtonVariant::Outline, onclick: download, "{download_label}" }
            }
        }

        match role {
            Role::Student => rsx! { Transcript {} },
            Role::Teacher | Role::Admin => rsx! { Journal {} },
        }
    }
}

#[component]
fn Transcript() -> Element {
    let mut semester = use_signal(|| SEMESTERS[0].to_string());
    let rows = semester_grades(&semester.read());
    let gpa_text = gpa(&rows).map_or_else(|| "—".to_string(), |g| format!("{g:.2}"));
    let credits = total_credits(&rows);

    rsx! {
        div { class: "grades-toolbar",
            select {
                class: "grades-select",
                value: semester(),
                onchange: move |e| semester.set(e.value()),
                for label in SEMESTERS.iter() {
                    option { key: "{label}", value: *label, "{label}" }
                }
            }
        }

        div { class: "metric-grid",
            StatCard { label: "Текущий GPA", value: gpa_text, hint: Some("по шкале 4.0".to_string()) }
            StatCard { label: "Накоплено кредитов", value: credits.to_string() }
        }

        Card {
            DataTable {
                DataTableHeader {
                    DataTableColumn { "Дисциплина" }
                    DataTableColumn { "Кредиты" }
                    DataTableColumn { "РК1" }
                    DataTableColumn { "РК2" }
                    DataTableColumn { "Экзамен" }
                    DataTableColumn { "Итог" }
                    DataTableColumn { "Оценка" }
                }
                DataTableBody {
                    if rows.is_empty() {
                        DataTableEmpty { colspan: 7, message: "Оценок за этот семестр пока нет" }
                    }
                    for row in rows.iter() {
                        DataTableRow { key: "{row.course}",
                            DataTableCell { "{row.course}" }
                            DataTableCell { "{row.credits}" }
                            DataTableCell { "{row.rk1}" }
                            DataTableCell { "{row.rk2}" }
                            DataTableCell { "{row.exam}" }
                            DataTableCell { strong { "{row.total}" } }
                            DataTableCell {
                                Badge { variant: letter_variant(&row.letter), "{row.letter}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Journal() -> Element {
    let titles: Vec<String> = use_hook(|| courses().into_iter().map(|c| c.title).collect());
    let first = titles.first().cloned().unwrap_or_default();
    let mut selected = use_signal(move || first);
    let rows = journal(&selected.read());
    let average = journal_average(&rows).map_or_else(|| "—".to_string(), |a| format!("{a:.1}"));

    rsx! {
        div { class: "grades-toolbar",
            select {
                class: "grades-select",
                value: selected(),
                onchange: move |e| selected.set(e.value()),
                for title in titles.iter() {
                    option { key: "{title}", value: "{title}", "{title}" }
                }
            }
        }

        div { class: "metric-grid",
            StatCard { label: "Средний балл группы", value: average }
            StatCard { label: "Студентов в группе", value: rows.len().to_string() }
        }

        Card {
            DataTable {
                DataTableHeader {
                    DataTableColumn { "Студент" }
                    DataTableColumn { "ID" }
                    DataTableColumn { "РК1" }
                    DataTableColumn { "РК2" }
                    DataTableColumn { "Экзамен" }
                    DataTableColumn { "Итог" }
                    DataTableColumn { "Оценка" }
                }
                DataTableBody {
                    for row in rows.iter() {
                        DataTableRow { key: "{row.student_id}",
                            DataTableCell { "{row.student}" }
                            DataTableCell { "{row.student_id}" }
                            DataTableCell { "{row.rk1}" }
                            DataTableCell { "{row.rk2}" }
                            DataTableCell { "{row.exam}" }
                            DataTableCell { strong { "{row.total}" } }
                            DataTableCell {
                                Badge { variant: letter_variant(&row.letter), "{row.letter}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
