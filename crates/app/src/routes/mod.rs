pub mod chat;
pub mod courses;
pub mod dashboard;
pub mod fallback;
pub mod grades;
pub mod login;
pub mod profile;
pub mod schedule;
pub mod students;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdAward, LdBell, LdBookOpen, LdCalendar, LdLayoutDashboard, LdLogOut, LdMessageSquare,
    LdSearch, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{evaluate, nav_links, viewer, Access, Landing, NavIcon, PortalSettings, Role};
use shared_ui::{
    AvatarSize, Sidebar, SidebarBrand, SidebarContent, SidebarFooter, SidebarInset, SidebarMenu,
    SidebarMenuItem, SidebarProvider, SidebarSeparator, SidebarTrigger, UserAvatar,
};

use crate::session::use_session;

use chat::{Chat, TeacherChat};
use courses::{CourseDetail, Courses, TeacherCourseDetail, TeacherCourses};
use dashboard::{AdminDashboard, StudentDashboard, TeacherDashboard};
use fallback::Fallback;
use grades::{Grades, TeacherGrades};
use login::Login;
use profile::TeacherProfile;
use schedule::{Schedule, TeacherSchedule};
use students::{AdminStudents, TeacherStudents};

/// Application routes. Each guarded layout admits exactly one role.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},

    #[layout(StudentArea)]
        #[route("/")]
        StudentDashboard {},
        #[route("/schedule")]
        Schedule {},
        #[route("/courses")]
        Courses {},
        #[route("/courses/:course_id")]
        CourseDetail { course_id: String },
        #[route("/grades")]
        Grades {},
        #[route("/chat")]
        Chat {},
    #[end_layout]

    #[layout(TeacherArea)]
        #[route("/teacher")]
        TeacherDashboard {},
        #[route("/teacher/courses")]
        TeacherCourses {},
        #[route("/teacher/courses/:course_id")]
        TeacherCourseDetail { course_id: String },
        #[route("/teacher/schedule")]
        TeacherSchedule {},
        #[route("/teacher/grades")]
        TeacherGrades {},
        #[route("/teacher/chat")]
        TeacherChat {},
        #[route("/teacher/students")]
        TeacherStudents {},
        #[route("/teacher/profile")]
        TeacherProfile {},
    #[end_layout]

    #[layout(AdminArea)]
        #[route("/admin")]
        AdminDashboard {},
        #[route("/admin/students")]
        AdminStudents {},
    #[end_layout]

    #[route("/:..segments")]
    Fallback { segments: Vec<String> },
}

/// The route a [`Landing`] points at.
pub fn landing_route(landing: Landing) -> Route {
    match landing {
        Landing::Login => Route::Login {},
        Landing::StudentHome => Route::StudentDashboard {},
        Landing::TeacherHome => Route::TeacherDashboard {},
        Landing::AdminHome => Route::AdminDashboard {},
    }
}

/// Renders `children` only when the session holds `required`; otherwise
/// replaces the history entry with the appropriate landing route.
#[component]
fn RouteGuard(required: Role, children: Element) -> Element {
    let session = use_session();
    let access = evaluate(session.current(), required);

    if let Access::Redirect(landing) = access {
        tracing::debug!(%required, to = landing.path(), "guard redirect");
        navigator().replace(landing_route(landing));
    }

    rsx! {
        GuardGate { access, {children} }
    }
}

/// Shows `children` for [`Access::Granted`] and a neutral placeholder
/// otherwise.
#[component]
fn GuardGate(access: Access, children: Element) -> Element {
    match access {
        Access::Granted => children,
        Access::Redirect(_) => rsx! {
            div { class: "guard-redirect",
                p { "Перенаправление..." }
            }
        },
    }
}

#[component]
fn StudentArea() -> Element {
    rsx! {
        RouteGuard { required: Role::Student,
            Shell { role: Role::Student }
        }
    }
}

#[component]
fn TeacherArea() -> Element {
    rsx! {
        RouteGuard { required: Role::Teacher,
            Shell { role: Role::Teacher }
        }
    }
}

#[component]
fn AdminArea() -> Element {
    rsx! {
        RouteGuard { required: Role::Admin,
            Shell { role: Role::Admin }
        }
    }
}

fn nav_icon(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Home => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        NavIcon::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
        NavIcon::Book => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 } },
        NavIcon::Award => rsx! { Icon::<LdAward> { icon: LdAward, width: 18, height: 18 } },
        NavIcon::Chat => rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 18, height: 18 } },
        NavIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        NavIcon::User => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
    }
}

/// Title shown in the header bar for the current route.
fn page_title(route: &Route) -> &'static str {
    match route {
        Route::StudentDashboard {} | Route::TeacherDashboard {} | Route::AdminDashboard {} => {
            "Дашборд"
        }
        Route::Schedule {} | Route::TeacherSchedule {} => "Расписание",
        Route::Courses {}
        | Route::TeacherCourses {}
        | Route::CourseDetail { .. }
        | Route::TeacherCourseDetail { .. } => "Курсы",
        Route::Grades {} => "Оценки",
        Route::TeacherGrades {} => "Журнал",
        Route::Chat {} | Route::TeacherChat {} => "Чат",
        Route::TeacherStudents {} | Route::AdminStudents {} => "Студенты",
        Route::TeacherProfile {} => "Мой профиль",
        Route::Login {} | Route::Fallback { .. } => "",
    }
}

/// Sidebar plus header around the routed page for one role.
#[component]
fn Shell(role: Role) -> Element {
    let route: Route = use_route();
    let settings: PortalSettings = use_context();
    let mut session = use_session();

    let current_path = route.to_string();
    let person = viewer(role);

    let logout = move |_: MouseEvent| {
        session.logout();
        navigator().replace(Route::Login {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider {
            Sidebar {
                SidebarBrand { title: settings.title.clone(), caption: role.portal_caption().to_string() }

                SidebarSeparator {}

                SidebarContent {
                    SidebarMenu {
                        for link in nav_links(role).iter() {
                            SidebarMenuItem { key: "{link.path}", active: link.is_active(&current_path),
                                Link { to: link.path,
                                    {nav_icon(link.icon)}
                                    span { "{link.label}" }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    match role {
                        Role::Student | Role::Teacher => rsx! {
                            div { class: "profile-card",
                                UserAvatar {
                                    src: Some(person.avatar_url()),
                                    initials: person.initials(),
                                    size: AvatarSize::Small,
                                }
                                div { class: "profile-card-text",
                                    span { class: "profile-card-name", "{person.short_name}" }
                                    span { class: "profile-card-subtitle", "{person.subtitle}" }
                                }
                            }
                        },
                        Role::Admin => rsx! {},
                    }
                    button { class: "logout-button", r#type: "button", onclick: logout,
                        Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                        span { "Выйти" }
                    }
                }
            }

            SidebarInset {
                Header { role, title: page_title(&route) }
                div { class: "page-body",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// Top bar: sidebar toggle, page title, search box and the viewer.
#[component]
fn Header(role: Role, title: &'static str) -> Element {
    let person = viewer(role);
    let mut query = use_signal(String::new);

    rsx! {
        header { class: "topbar",
            SidebarTrigger {
                span { class: "topbar-trigger-icon", "\u{2630}" }
            }
            span { class: "topbar-title", "{title}" }
            div { class: "topbar-search",
                Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                input {
                    r#type: "search",
                    placeholder: "Поиск...",
                    value: query(),
                    oninput: move |e| query.set(e.value()),
                }
            }
            div { class: "topbar-spacer" }
            button { class: "topbar-bell", r#type: "button", "aria-label": "Уведомления",
                Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
            }
            div { class: "topbar-viewer",
                div { class: "topbar-viewer-text",
                    span { class: "topbar-viewer-name", "{person.short_name}" }
                    span { class: "topbar-viewer-subtitle", "{person.subtitle}" }
                }
                UserAvatar {
                    src: Some(person.avatar_url()),
                    initials: person.initials(),
                    size: AvatarSize::Small,
                }
            }
        }
    }
}

#[cfg(test)]
mod render_tests;

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ALL_ROLES;
    use std::str::FromStr;

    #[test]
    fn landing_routes_render_their_paths() {
        for landing in [
            Landing::Login,
            Landing::StudentHome,
            Landing::TeacherHome,
            Landing::AdminHome,
        ] {
            assert_eq!(landing_route(landing).to_string(), landing.path());
        }
    }

    #[test]
    fn every_nav_link_is_routed() {
        for role in ALL_ROLES {
            for link in nav_links(*role) {
                let route = Route::from_str(link.path)
                    .unwrap_or_else(|e| panic!("{} does not parse: {e}", link.path));
                assert!(
                    !matches!(route, Route::Fallback { .. }),
                    "{} falls through to the fallback",
                    link.path
                );
                assert_eq!(route.to_string(), link.path);
            }
        }
    }

    #[test]
    fn unknown_paths_hit_the_fallback() {
        for path in ["/nope", "/teacher/nope/deeper", "/admin/teachers"] {
            let route = Route::from_str(path).unwrap_or_else(|e| panic!("{path}: {e}"));
            assert!(matches!(route, Route::Fallback { .. }), "{path}");
        }
    }

    #[test]
    fn course_detail_captures_id() {
        assert_eq!(
            Route::from_str("/courses/2").ok(),
            Some(Route::CourseDetail {
                course_id: "2".to_string()
            })
        );
    }

    #[test]
    fn teacher_course_detail_captures_id() {
        let route = Route::from_str("/teacher/courses/3").ok();
        assert_eq!(
            route,
            Some(Route::TeacherCourseDetail {
                course_id: "3".to_string()
            })
        );
        assert_eq!(page_title(&route.unwrap()), "Курсы");
    }

    #[test]
    fn titles_follow_role_pages() {
        assert_eq!(page_title(&Route::TeacherGrades {}), "Журнал");
        assert_eq!(page_title(&Route::Grades {}), "Оценки");
        assert_eq!(page_title(&Route::AdminStudents {}), "Студенты");
    }
}
