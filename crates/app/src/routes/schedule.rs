use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdCalendarPlus;
use dioxus_free_icons::Icon;
use shared_types::{
    class_at, classes_on, ical_export, month_grid, week_schedule, ClassSlot, Role, ViewMode,
    MONTH_LABEL, TIME_SLOTS, TODAY, WEEK_DAYS, WEEK_LABEL,
};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, PageActions, PageHeader, PageSubtitle,
    PageTitle, ToastOptions,
};

const EXPORT_FILE: &str = "iitu-schedule.ics";

/// Hand an `.ics` document to the browser as a download.
fn download_calendar(ics: String) {
    let eval = document::eval(&format!(
        r#"
        const text = await dioxus.recv();
        const url = URL.createObjectURL(new Blob([text], {{ type: "text/calendar" }}));
        const link = document.createElement("a");
        link.href = url;
        link.download = "{EXPORT_FILE}";
        link.click();
        URL.revokeObjectURL(url);
        "#
    ));
    if let Err(e) = eval.send(ics) {
        tracing::warn!(error = ?e, "calendar export failed");
    }
}

#[component]
pub fn Schedule() -> Element {
    rsx! { Timetable { role: Role::Student } }
}

#[component]
pub fn TeacherSchedule() -> Element {
    rsx! { Timetable { role: Role::Teacher } }
}

const VIEW_MODES: [ViewMode; 3] = [ViewMode::Day, ViewMode::Week, ViewMode::Month];

#[component]
fn Timetable(role: Role) -> Element {
    let mut mode = use_signal(ViewMode::default);
    let schedule = use_hook(week_schedule);
    let toast = use_toast();

    let export = {
        let schedule = schedule.clone();
        move |_: MouseEvent| {
            download_calendar(ical_export(&schedule));
            tracing::info!(classes = schedule.len(), "schedule exported");
            toast.success(
                "Расписание экспортировано в Google Calendar".to_string(),
                ToastOptions::new(),
            );
        }
    };

    let subtitle = match role {
        Role::Student => "Группа CS-2104K",
        Role::Teacher => "Ваши занятия",
        Role::Admin => "Все группы",
    };
    let period = match mode() {
        ViewMode::Day => WEEK_DAYS[TODAY],
        ViewMode::Week => WEEK_LABEL,
        ViewMode::Month => MONTH_LABEL,
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./schedule.css") }

        PageHeader {
            div {
                PageTitle { "Расписание" }
                PageSubtitle { "{subtitle} • {period}" }
            }
            PageActions {
                div { class: "view-switch", role: "tablist",
                    for candidate in VIEW_MODES {
                        button {
                            key: "{candidate.label()}",
                            r#type: "button",
                            class: "view-switch-option",
                            role: "tab",
                            "aria-selected": if mode() == candidate { "true" } else { "false" },
                            onclick: move |_| mode.set(candidate),
                            "{candidate.label()}"
                        }
                    }
                }
                Button { variant: ButtonVariant::Outline, onclick: export,
                    Icon::<LdCalendarPlus> { icon: LdCalendarPlus, width: 16, height: 16 }
                    "Экспорт в Google Calendar"
                }
            }
        }

        Card {
            CardContent {
                match mode() {
                    ViewMode::Day => rsx! { DayView { classes: classes_on(&schedule, TODAY) } },
                    ViewMode::Week => rsx! { WeekView { schedule: schedule.clone() } },
                    ViewMode::Month => rsx! { MonthView { schedule: schedule.clone() } },
                }
            }
        }
    }
}

#[component]
fn ClassTile(class: ClassSlot) -> Element {
    rsx! {
        div { class: "class-tile", "data-kind": class.kind.key(),
            span { class: "class-tile-kind", "{class.kind.label()}" }
            span { class: "class-tile-title", "{class.title}" }
            span { class: "class-tile-meta", "{class.room}" }
            span { class: "class-tile-meta", "{class.teacher}" }
        }
    }
}

#[component]
fn DayView(classes: Vec<ClassSlot>) -> Element {
    rsx! {
        if classes.is_empty() {
            p { class: "empty-note", "Сегодня занятий нет" }
        }
        div { class: "day-view",
            for class in classes {
                div { key: "{class.time}", class: "day-view-row",
                    span { class: "day-view-time", "{class.time}" }
                    ClassTile { class }
                }
            }
        }
    }
}

#[component]
fn WeekView(schedule: Vec<ClassSlot>) -> Element {
    rsx! {
        div { class: "week-grid",
            div { class: "week-grid-corner" }
            for (index, day) in WEEK_DAYS.iter().enumerate() {
                div {
                    key: "{day}",
                    class: "week-grid-day",
                    "data-today": if index == TODAY { "true" } else { "false" },
                    "{day}"
                }
            }
            for time in TIME_SLOTS.iter() {
                div { key: "{time}", class: "week-grid-time", "{time}" }
                for day in 0..WEEK_DAYS.len() {
                    div { key: "{time}-{day}", class: "week-grid-cell",
                        if let Some(class) = class_at(&schedule, day, time) {
                            ClassTile { class: class.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MonthView(schedule: Vec<ClassSlot>) -> Element {
    let cells = month_grid(&schedule);

    rsx! {
        div { class: "month-grid",
            for name in ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"] {
                div { key: "{name}", class: "month-grid-head", "{name}" }
            }
            for (index, cell) in cells.into_iter().enumerate() {
                match cell {
                    Some(day) => rsx! {
                        div {
                            key: "{index}",
                            class: "month-grid-cell",
                            "data-today": if day.today { "true" } else { "false" },
                            span { class: "month-grid-date", "{day.date}" }
                            if day.classes > 0 {
                                span { class: "month-grid-count", "{day.classes} зан." }
                            }
                        }
                    },
                    None => rsx! {
                        div { key: "{index}", class: "month-grid-cell", "data-empty": "true" }
                    },
                }
            }
        }
    }
}
