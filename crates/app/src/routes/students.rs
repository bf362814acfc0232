use dioxus::prelude::*;
use shared_types::{filter_roster, roster, PerformanceTier, Role, StudentRecord, StudentStatus};
use shared_ui::{
    Badge, BadgeVariant, Card, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableEmpty, DataTableHeader, DataTableRow, PageHeader, PageSubtitle, PageTitle, SearchBar,
};

#[component]
pub fn TeacherStudents() -> Element {
    rsx! { Roster { role: Role::Teacher } }
}

#[component]
pub fn AdminStudents() -> Element {
    rsx! { Roster { role: Role::Admin } }
}

/// Status filter options; `None` shows everyone.
const STATUS_FILTERS: [(Option<StudentStatus>, &str); 3] = [
    (None, "Все"),
    (Some(StudentStatus::Active), "Active"),
    (Some(StudentStatus::AcademicLeave), "Academic Leave"),
];

fn tier_variant(tier: PerformanceTier) -> BadgeVariant {
    match tier {
        PerformanceTier::High => BadgeVariant::Success,
        PerformanceTier::Medium => BadgeVariant::Warning,
        PerformanceTier::Low => BadgeVariant::Destructive,
    }
}

#[component]
fn Roster(role: Role) -> Element {
    let students = use_hook(roster);
    let mut query = use_signal(String::new);
    let mut status = use_signal(|| Option::<StudentStatus>::None);
    let expanded = use_signal(|| Option::<String>::None);

    let visible = filter_roster(&students, &query.read(), status());

    let subtitle = match role {
        Role::Teacher => "Студенты ваших групп",
        Role::Admin => "Контингент факультета",
        Role::Student => "Одногруппники",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./students.css") }

        PageHeader {
            div {
                PageTitle { "Студенты" }
                PageSubtitle { "{subtitle}" }
            }
        }

        SearchBar {
            value: query(),
            placeholder: "Поиск по имени, группе или ID",
            on_input: move |value: String| query.set(value),
            div { class: "status-filter",
                for (value, label) in STATUS_FILTERS {
                    button {
                        key: "{label}",
                        r#type: "button",
                        class: "status-filter-option",
                        "aria-pressed": if status() == value { "true" } else { "false" },
                        onclick: move |_| status.set(value),
                        "{label}"
                    }
                }
            }
        }

        Card {
            DataTable {
                DataTableHeader {
                    DataTableColumn { "Студент" }
                    DataTableColumn { "Группа" }
                    DataTableColumn { "Успеваемость" }
                    DataTableColumn { "Статус" }
                }
                DataTableBody {
                    if visible.is_empty() {
                        DataTableEmpty { colspan: 4, message: "Студенты не найдены" }
                    }
                    for student in visible {
                        RosterRow { key: "{student.id}", student, expanded }
                    }
                }
            }
        }
    }
}

/// One roster entry; clicking it folds the score history in or out. At
/// most one row is open at a time.
#[component]
fn RosterRow(student: StudentRecord, expanded: Signal<Option<String>>) -> Element {
    let mut expanded = expanded;
    let tier = PerformanceTier::of(student.performance);
    let open = expanded.read().as_deref() == Some(student.id.as_str());
    let id = student.id.clone();
    let status_variant = match student.status {
        StudentStatus::Active => BadgeVariant::Success,
        StudentStatus::AcademicLeave => BadgeVariant::Warning,
    };

    rsx! {
        DataTableRow {
            selected: open,
            onclick: move |_| expanded.set(if open { None } else { Some(id.clone()) }),
            DataTableCell {
                div { class: "roster-name",
                    span { class: "roster-presence", "data-online": if student.online { "true" } else { "false" } }
                    span { "{student.name}" }
                }
            }
            DataTableCell { "{student.group}" }
            DataTableCell {
                Badge { variant: tier_variant(tier), "{student.performance}%" }
            }
            DataTableCell {
                Badge { variant: status_variant, dot: true, "{student.status.label()}" }
            }
        }
        if open {
            tr { class: "roster-details",
                td { colspan: "4",
                    div { class: "roster-details-body",
                        span { "ID: {student.id}" }
                        span { "Направление: {student.stream}" }
                        div { class: "roster-history", "data-tier": tier.key(),
                            for (index, score) in student.history.iter().enumerate() {
                                div {
                                    key: "{index}",
                                    class: "roster-history-bar",
                                    style: "height: {score}%",
                                    title: "{score}",
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
