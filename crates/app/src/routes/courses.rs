use dioxus::prelude::*;
use shared_types::{
    course_modules, courses, filter_courses, find_course, AssignmentStatus, Course, LessonKind, Role,
};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, PageHeader, PageSubtitle, PageTitle, ProgressBar, SearchBar, Section,
};

use crate::routes::Route;

#[component]
pub fn Courses() -> Element {
    rsx! { CourseCatalogue { role: Role::Student } }
}

#[component]
pub fn TeacherCourses() -> Element {
    rsx! { CourseCatalogue { role: Role::Teacher } }
}

/// Searchable course grid. Students open a course; teachers manage theirs.
#[component]
fn CourseCatalogue(role: Role) -> Element {
    let mut query = use_signal(String::new);
    let all = use_hook(courses);
    let visible = filter_courses(&all, &query.read());

    let (title, subtitle) = match role {
        Role::Student => ("Мои курсы", "Текущий семестр"),
        Role::Teacher => ("Мои курсы", "Курсы, которые вы ведёте"),
        Role::Admin => ("Курсы", "Все курсы факультета"),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./courses.css") }

        PageHeader {
            div {
                PageTitle { "{title}" }
                PageSubtitle { "{subtitle}" }
            }
        }

        SearchBar {
            value: query(),
            placeholder: "Поиск по названию, преподавателю или кафедре",
            on_input: move |value: String| query.set(value),
        }

        if visible.is_empty() {
            p { class: "empty-note", "Курсы не найдены" }
        }

        div { class: "course-grid",
            for course in visible {
                CourseCard { key: "{course.id}", course, role }
            }
        }
    }
}

#[component]
fn CourseCard(course: Course, role: Role) -> Element {
    let course_id = course.id.to_string();
    let target = match role {
        Role::Student => Some(Route::CourseDetail { course_id }),
        Role::Teacher => Some(Route::TeacherCourseDetail { course_id }),
        Role::Admin => None,
    };
    let open = move |_: MouseEvent| {
        if let Some(route) = target.clone() {
            navigator().push(route);
        }
    };

    rsx! {
        Card { class: "course-card",
            CardHeader {
                Badge { variant: BadgeVariant::Secondary, "{course.department}" }
                CardTitle { "{course.title}" }
                CardDescription { "{course.teacher}" }
            }
            CardContent {
                match role {
                    Role::Student => rsx! {
                        ProgressBar { value: f64::from(course.progress), label: "Прогресс" }
                        div { class: "course-counters",
                            span { "Модулей: {course.modules}" }
                            span { "Заданий: {course.tasks}" }
                            if course.deadlines > 0 {
                                Badge { variant: BadgeVariant::Destructive, "Дедлайнов: {course.deadlines}" }
                            }
                        }
                        Button { variant: ButtonVariant::Outline, size: ButtonSize::Large, onclick: open, "Открыть курс" }
                    },
                    Role::Teacher => rsx! {
                        div { class: "course-counters",
                            span { "Студентов: {course.students}" }
                            span { "Модулей: {course.modules}" }
                            if course.deadlines > 0 {
                                Badge { variant: BadgeVariant::Warning, "На проверку: {course.deadlines}" }
                            }
                        }
                        Button { variant: ButtonVariant::Outline, size: ButtonSize::Large, onclick: open, "Управление курсом" }
                    },
                    Role::Admin => rsx! {
                        div { class: "course-counters",
                            span { "Студентов: {course.students}" }
                            span { "Модулей: {course.modules}" }
                            span { "Заданий: {course.tasks}" }
                        }
                    },
                }
            }
        }
    }
}

fn lesson_glyph(kind: LessonKind) -> &'static str {
    match kind {
        LessonKind::Video => "▶",
        LessonKind::Reading => "📄",
    }
}

fn assignment_badge(status: AssignmentStatus) -> Element {
    match status {
        AssignmentStatus::Graded(score) => rsx! {
            Badge { variant: BadgeVariant::Success, "{score}/100" }
        },
        AssignmentStatus::Submitted => rsx! {
            Badge { variant: BadgeVariant::Primary, "Отправлено" }
        },
        AssignmentStatus::Open => rsx! {
            Badge { variant: BadgeVariant::Warning, "Открыто" }
        },
    }
}

#[component]
pub fn CourseDetail(course_id: String) -> Element {
    rsx! { CourseSyllabus { course_id, role: Role::Student } }
}

#[component]
pub fn TeacherCourseDetail(course_id: String) -> Element {
    rsx! { CourseSyllabus { course_id, role: Role::Teacher } }
}

/// Course page with syllabus. Ids that do not name a course show a
/// not-found card instead.
#[component]
fn CourseSyllabus(course_id: String, role: Role) -> Element {
    let course = course_id.parse::<u32>().ok().and_then(find_course);
    let back = match role {
        Role::Teacher => Route::TeacherCourses {},
        Role::Student | Role::Admin => Route::Courses {},
    };

    let Some(course) = course else {
        tracing::debug!(%course_id, "unknown course");
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./courses.css") }
            Card { class: "not-found-card",
                CardHeader {
                    CardTitle { "Курс не найден" }
                    CardDescription { "Курса с идентификатором «{course_id}» нет в вашем списке." }
                }
                CardContent {
                    Link { class: "section-link", to: back, "← Ко всем курсам" }
                }
            }
        };
    };

    let modules = course_modules();
    let done = modules.iter().filter(|m| m.completed()).count();
    let total = modules.len();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./courses.css") }

        Link { class: "section-link back-link", to: back, "← Назад к курсам" }

        PageHeader {
            div {
                PageTitle { "{course.title}" }
                PageSubtitle { "{course.teacher} • {course.department}" }
            }
        }

        Card { class: "course-summary",
            CardContent {
                match role {
                    Role::Teacher => rsx! {
                        div { class: "course-counters",
                            span { "Студентов: {course.students}" }
                            span { "Заданий: {course.tasks}" }
                            span { "На проверку: {course.deadlines}" }
                        }
                    },
                    Role::Student | Role::Admin => rsx! {
                        ProgressBar { value: f64::from(course.progress), label: "Прогресс курса" }
                        span { class: "course-counters", "Модулей пройдено: {done} из {total}" }
                    },
                }
            }
        }

        for (index, module) in modules.into_iter().enumerate() {
            Section {
                key: "{module.title}",
                title: format!("Модуль {}: {}", index + 1, module.title),
                default_open: !module.completed(),
                trailing: rsx! {
                    if module.completed() {
                        Badge { variant: BadgeVariant::Success, "Завершён" }
                    }
                },
                ul { class: "lesson-list",
                    for lesson in module.lessons.iter() {
                        li { key: "{lesson.title}", class: "lesson-item",
                            "data-done": if lesson.completed { "true" } else { "false" },
                            span { class: "lesson-kind", "{lesson_glyph(lesson.kind)}" }
                            span { class: "lesson-title", "{lesson.title}" }
                            span { class: "lesson-duration", "{lesson.duration}" }
                        }
                    }
                }
                ul { class: "assignment-list",
                    for assignment in module.assignments.iter() {
                        li { key: "{assignment.title}", class: "assignment-item",
                            span { class: "assignment-title", "{assignment.title}" }
                            span { class: "assignment-deadline", "{assignment.deadline}" }
                            {assignment_badge(assignment.status)}
                        }
                    }
                }
            }
        }
    }
}
