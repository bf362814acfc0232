use crate::Role;

/// Icon shown next to a shell navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Calendar,
    Book,
    Award,
    Chat,
    Users,
    User,
}

/// One entry of a role's sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
}

impl NavLink {
    /// Highlight rule: exact string equality with the current path.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }
}

const STUDENT_LINKS: &[NavLink] = &[
    NavLink { label: "Главная", path: "/", icon: NavIcon::Home },
    NavLink { label: "Расписание", path: "/schedule", icon: NavIcon::Calendar },
    NavLink { label: "Курсы", path: "/courses", icon: NavIcon::Book },
    NavLink { label: "Оценки", path: "/grades", icon: NavIcon::Award },
    NavLink { label: "Чат", path: "/chat", icon: NavIcon::Chat },
];

const TEACHER_LINKS: &[NavLink] = &[
    NavLink { label: "Дашборд", path: "/teacher", icon: NavIcon::Home },
    NavLink { label: "Мои курсы", path: "/teacher/courses", icon: NavIcon::Book },
    NavLink { label: "Расписание", path: "/teacher/schedule", icon: NavIcon::Calendar },
    NavLink { label: "Студенты", path: "/teacher/students", icon: NavIcon::Users },
    NavLink { label: "Журнал", path: "/teacher/grades", icon: NavIcon::Award },
    NavLink { label: "Чат", path: "/teacher/chat", icon: NavIcon::Chat },
    NavLink { label: "Мой профиль", path: "/teacher/profile", icon: NavIcon::User },
];

const ADMIN_LINKS: &[NavLink] = &[
    NavLink { label: "Дашборд", path: "/admin", icon: NavIcon::Home },
    NavLink { label: "Студенты", path: "/admin/students", icon: NavIcon::Users },
];

/// The static link set for a role's shell.
pub fn nav_links(role: Role) -> &'static [NavLink] {
    match role {
        Role::Student => STUDENT_LINKS,
        Role::Teacher => TEACHER_LINKS,
        Role::Admin => ADMIN_LINKS,
    }
}

/// Who is shown in the header bar and the sidebar profile card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer {
    pub name: &'static str,
    pub short_name: &'static str,
    pub subtitle: &'static str,
    pub avatar_seed: &'static str,
}

impl Viewer {
    pub fn avatar_url(&self) -> String {
        format!(
            "https://api.dicebear.com/7.x/avataaars/svg?seed={}",
            self.avatar_seed
        )
    }

    /// Initials for the avatar fallback.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect()
    }
}

pub fn viewer(role: Role) -> Viewer {
    match role {
        Role::Student => Viewer {
            name: "Иванов Алмат",
            short_name: "Иванов А. Б.",
            subtitle: "CS-2104K",
            avatar_seed: "Almat",
        },
        Role::Teacher => Viewer {
            name: "Абдикерим Нурлан",
            short_name: "Абдикерим Н. Б.",
            subtitle: "Преподаватель",
            avatar_seed: "Teacher1",
        },
        Role::Admin => Viewer {
            name: "Администратор",
            short_name: "Администратор",
            subtitle: "Деканат ФИТ",
            avatar_seed: "Admin",
        },
    }
}
