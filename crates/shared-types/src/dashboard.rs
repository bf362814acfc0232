use crate::Role;

/// A headline figure on a dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub hint: &'static str,
}

const STUDENT_METRICS: &[Metric] = &[
    Metric { label: "Текущий GPA", value: "3.75", hint: "+0.12 с прошлого семестра" },
    Metric { label: "Кредиты", value: "87 / 240", hint: "36% программы" },
    Metric { label: "Посещаемость", value: "92%", hint: "Пропусков: 4 занятия" },
    Metric { label: "Финансовый долг", value: "0 ₸", hint: "Оплачено до конца года" },
];

const TEACHER_METRICS: &[Metric] = &[
    Metric { label: "Всего студентов", value: "124", hint: "+5 в этом семестре" },
    Metric { label: "Активные курсы", value: "3", hint: "Все по графику" },
    Metric { label: "На проверку", value: "18", hint: "Дедлайн завтра" },
    Metric { label: "Средний балл", value: "84.5", hint: "+2.1% к прошлому году" },
];

const ADMIN_METRICS: &[Metric] = &[
    Metric { label: "Всего студентов", value: "4,250", hint: "+120 в этом году" },
    Metric { label: "Преподаватели", value: "342", hint: "Штат укомплектован на 98%" },
    Metric { label: "Активные курсы", value: "128", hint: "Осенний семестр 2025" },
    Metric { label: "Финансовые задолженности", value: "12.5M ₸", hint: "45 студентов" },
];

/// Headline figures for a role's dashboard, in display order.
pub fn metrics(role: Role) -> &'static [Metric] {
    match role {
        Role::Student => STUDENT_METRICS,
        Role::Teacher => TEACHER_METRICS,
        Role::Admin => ADMIN_METRICS,
    }
}

pub const CREDITS_EARNED: u32 = 87;
pub const CREDITS_REQUIRED: u32 = 240;

/// Share of the degree's credits already earned, as a whole percentage.
pub fn credits_progress(earned: u32, required: u32) -> u8 {
    if required == 0 {
        return 100;
    }
    let pct = (u64::from(earned) * 100 / u64::from(required)).min(100);
    pct as u8
}
