use dioxus::prelude::*;
use shared_types::{
    applications, approve, classes_on, courses, credits_progress, metrics, week_schedule,
    ApplicationStatus, ClassSlot, Role, CREDITS_EARNED, CREDITS_REQUIRED, DEADLINES,
    PENDING_REVIEWS, TODAY,
};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardTone, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow,
    PageHeader, PageSubtitle, PageTitle, ProgressBar, Section, StatCard, ToastOptions,
};

use crate::routes::Route;

/// Row of headline figures for `role`.
#[component]
fn MetricGrid(role: Role) -> Element {
    rsx! {
        div { class: "metric-grid",
            for metric in metrics(role).iter() {
                StatCard {
                    key: "{metric.label}",
                    label: metric.label.to_string(),
                    value: metric.value.to_string(),
                    hint: Some(metric.hint.to_string()),
                }
            }
        }
    }
}

/// Today's classes as a timeline.
#[component]
fn TodayClasses(classes: Vec<ClassSlot>) -> Element {
    rsx! {
        if classes.is_empty() {
            p { class: "empty-note", "Сегодня занятий нет" }
        }
        ul { class: "class-timeline",
            for class in classes {
                li { key: "{class.time}", class: "class-timeline-item",
                    div { class: "class-time", "{class.time}" }
                    div { class: "class-info",
                        span { class: "class-title", "{class.title}" }
                        span { class: "class-meta", "{class.teacher} | {class.room}" }
                    }
                    span { class: "class-kind", "data-kind": class.kind.key(), "{class.kind.label()}" }
                }
            }
        }
    }
}

#[component]
pub fn StudentDashboard() -> Element {
    let today = classes_on(&week_schedule(), TODAY);
    let credits = credits_progress(CREDITS_EARNED, CREDITS_REQUIRED);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            div {
                PageTitle { "Добро пожаловать!" }
                PageSubtitle { "Ваша сводка за текущий семестр" }
            }
        }

        MetricGrid { role: Role::Student }

        Card { class: "credits-card",
            CardContent {
                ProgressBar {
                    value: f64::from(credits),
                    label: format!("Кредиты: {CREDITS_EARNED} из {CREDITS_REQUIRED}"),
                }
            }
        }

        div { class: "dashboard-columns",
            Section {
                title: "Расписание сегодня",
                trailing: rsx! {
                    Link { class: "section-link", to: Route::Schedule {}, "На неделю" }
                },
                TodayClasses { classes: today }
            }

            Section { title: "Ближайшие дедлайны",
                div { class: "deadline-grid",
                    for deadline in DEADLINES.iter() {
                        Card { key: "{deadline.work}", tone: CardTone::Muted,
                            CardContent {
                                span { class: "deadline-course", "{deadline.course}" }
                                h4 { class: "deadline-work", "{deadline.work}" }
                                span { class: "deadline-due", "{deadline.due}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TeacherDashboard() -> Element {
    let today = classes_on(&week_schedule(), TODAY);
    let class_count = today.len();
    let taught = courses();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            div {
                PageTitle { "Добрый день, Нурлан Болатович" }
                PageSubtitle { "Занятий сегодня: {class_count}" }
            }
        }

        MetricGrid { role: Role::Teacher }

        div { class: "dashboard-columns",
            Section {
                title: "Ближайшие занятия",
                trailing: rsx! {
                    Link { class: "section-link", to: Route::TeacherSchedule {}, "Всё расписание" }
                },
                TodayClasses { classes: today }
            }

            Section { title: "Успеваемость по курсам",
                div { class: "course-progress-list",
                    for course in taught {
                        ProgressBar {
                            key: "{course.id}",
                            value: f64::from(course.progress),
                            label: course.title.clone(),
                        }
                    }
                }
            }

            Section {
                title: "На проверку",
                trailing: rsx! {
                    Badge { variant: BadgeVariant::Warning, "{PENDING_REVIEWS.len()}" }
                },
                ul { class: "review-list",
                    for review in PENDING_REVIEWS.iter() {
                        li { key: "{review.student}", class: "review-item",
                            div {
                                span { class: "review-student", "{review.student}" }
                                span { class: "review-work", "{review.work}" }
                            }
                            span { class: "review-time", "{review.submitted}" }
                        }
                    }
                }
            }
        }
    }
}

fn status_variant(status: ApplicationStatus) -> BadgeVariant {
    match status {
        ApplicationStatus::Pending => BadgeVariant::Warning,
        ApplicationStatus::InProgress => BadgeVariant::Primary,
        ApplicationStatus::Approved => BadgeVariant::Success,
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    let toast = use_toast();
    let mut queue = use_signal(applications);

    let mut handle_approve = move |id: u32| {
        if approve(&mut queue.write(), id) {
            tracing::info!(application = id, "application approved");
            toast.success("Заявка одобрена".to_string(), ToastOptions::new());
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            div {
                PageTitle { "Панель администратора" }
                PageSubtitle { "Факультет информационных технологий" }
            }
        }

        MetricGrid { role: Role::Admin }

        Section { title: "Заявки студентов",
            Card {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Студент" }
                        DataTableColumn { "Тип заявки" }
                        DataTableColumn { "Дата" }
                        DataTableColumn { "Статус" }
                        DataTableColumn { "" }
                    }
                    DataTableBody {
                        if queue.read().is_empty() {
                            DataTableEmpty { colspan: 5, message: "Новых заявок нет" }
                        }
                        for app in queue.read().iter().cloned() {
                            DataTableRow { key: "{app.id}",
                                DataTableCell { "{app.student}" }
                                DataTableCell { "{app.kind}" }
                                DataTableCell { "{app.submitted}" }
                                DataTableCell {
                                    Badge { variant: status_variant(app.status), dot: true, "{app.status.label()}" }
                                }
                                DataTableCell {
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        disabled: app.status == ApplicationStatus::Approved,
                                        onclick: move |_| handle_approve(app.id),
                                        "Одобрить"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
