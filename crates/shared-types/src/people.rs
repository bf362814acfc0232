use serde::{Deserialize, Serialize};
#[cfg(feature = "validation")]
use validator::Validate;

#[cfg(feature = "validation")]
use crate::AppError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StudentStatus {
    Active,
    AcademicLeave,
}

impl StudentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StudentStatus::Active => "Active",
            StudentStatus::AcademicLeave => "Academic Leave",
        }
    }
}

/// Performance band used for roster colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceTier {
    High,
    Medium,
    Low,
}

impl PerformanceTier {
    pub fn of(score: u8) -> Self {
        match score {
            90.. => PerformanceTier::High,
            75..=89 => PerformanceTier::Medium,
            _ => PerformanceTier::Low,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            PerformanceTier::High => "high",
            PerformanceTier::Medium => "medium",
            PerformanceTier::Low => "low",
        }
    }
}

/// A row of the student roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub group: String,
    pub stream: String,
    pub performance: u8,
    pub status: StudentStatus,
    pub online: bool,
    /// Last five graded totals, oldest first.
    pub history: Vec<u8>,
}

pub fn roster() -> Vec<StudentRecord> {
    [
        ("1", "Александр Петров", "CS-2104K", "Computer Science", 92, StudentStatus::Active, true, [85, 88, 92, 90, 95]),
        ("2", "Мария Сидорова", "CS-2104K", "Computer Science", 78, StudentStatus::Active, false, [70, 75, 72, 80, 78]),
        ("3", "Дмитрий Иванов", "IS-2102B", "Information Systems", 85, StudentStatus::Active, true, [80, 82, 85, 84, 88]),
        ("4", "Елена Козлова", "CS-2104K", "Computer Science", 65, StudentStatus::AcademicLeave, false, [70, 68, 62, 60, 65]),
        ("5", "Артем Смирнов", "IS-2102B", "Information Systems", 98, StudentStatus::Active, true, [95, 97, 96, 99, 98]),
    ]
    .into_iter()
    .map(|(id, name, group, stream, performance, status, online, history)| StudentRecord {
        id: id.to_string(),
        name: name.to_string(),
        group: group.to_string(),
        stream: stream.to_string(),
        performance,
        status,
        online,
        history: history.to_vec(),
    })
    .collect()
}

/// Roster search on name, group or ID, optionally narrowed to one status.
pub fn filter_roster(
    students: &[StudentRecord],
    query: &str,
    status: Option<StudentStatus>,
) -> Vec<StudentRecord> {
    let needle = query.trim().to_lowercase();
    students
        .iter()
        .filter(|s| status.map_or(true, |wanted| s.status == wanted))
        .filter(|s| {
            needle.is_empty()
                || s.name.to_lowercase().contains(&needle)
                || s.group.to_lowercase().contains(&needle)
                || s.id == needle
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApplicationStatus {
    Pending,
    InProgress,
    Approved,
}

impl ApplicationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Ожидает",
            ApplicationStatus::InProgress => "В обработке",
            ApplicationStatus::Approved => "Одобрено",
        }
    }
}

/// A student request waiting in the dean's office queue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Application {
    pub id: u32,
    pub student: String,
    pub kind: String,
    pub submitted: String,
    pub status: ApplicationStatus,
}

pub fn applications() -> Vec<Application> {
    [
        (1, "Сыздыков А.М.", "Справка с места учебы", "Сегодня, 10:23", ApplicationStatus::Pending),
        (2, "Ким В.С.", "Академический отпуск", "Вчера, 15:45", ApplicationStatus::InProgress),
        (3, "Оспанов Д.К.", "Перевод на другой факультет", "12 Окт, 09:15", ApplicationStatus::Pending),
    ]
    .into_iter()
    .map(|(id, student, kind, submitted, status)| Application {
        id,
        student: student.to_string(),
        kind: kind.to_string(),
        submitted: submitted.to_string(),
        status,
    })
    .collect()
}

/// Mark application `id` approved. Returns `false` if it does not exist or
/// was already approved.
pub fn approve(applications: &mut [Application], id: u32) -> bool {
    match applications.iter_mut().find(|a| a.id == id) {
        Some(app) if app.status != ApplicationStatus::Approved => {
            app.status = ApplicationStatus::Approved;
            true
        }
        _ => false,
    }
}

/// Work awaiting review on the teacher dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReview {
    pub student: &'static str,
    pub work: &'static str,
    pub submitted: &'static str,
}

pub const PENDING_REVIEWS: &[PendingReview] = &[
    PendingReview { student: "Иванов А.", work: "Лаб. №5: Графы", submitted: "2 часа назад" },
    PendingReview { student: "Петров С.", work: "Лаб. №5: Графы", submitted: "5 часов назад" },
    PendingReview { student: "Ахметов М.", work: "Тест: SQL", submitted: "Вчера" },
];

/// A deadline on the student dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Deadline {
    pub course: &'static str,
    pub work: &'static str,
    pub due: &'static str,
}

pub const DEADLINES: &[Deadline] = &[
    Deadline { course: "Математический анализ", work: "Лабораторная №4", due: "Сегодня, до 23:59" },
    Deadline { course: "Философия", work: "Эссе по культурологии", due: "Завтра, до 18:00" },
];

/// Static content of the teacher profile screen.
#[derive(Debug, Clone, PartialEq)]
pub struct TeacherProfile {
    pub full_name: &'static str,
    pub headline: &'static str,
    pub email: &'static str,
    pub degree: &'static str,
    pub position: &'static str,
    pub skills: &'static [&'static str],
    pub publications: &'static [&'static str],
    pub citation_index: u32,
    pub teaching_hours: u32,
    pub rating: f32,
}

pub const TEACHER_PROFILE: TeacherProfile = TeacherProfile {
    full_name: "Абдикерим Нурлан Болатович",
    headline: "Кандидат технических наук • Кафедра Информационных Технологий",
    email: "teacher@iitu.edu.kz",
    degree: "Кандидат технических наук",
    position: "Ассоциированный профессор",
    skills: &["Алгоритмы", "Базы данных", "Машинное обучение", "Python", "Rust"],
    publications: &[
        "Оптимизация запросов в распределённых базах данных (2024)",
        "Графовые алгоритмы в задачах маршрутизации (2023)",
    ],
    citation_index: 12,
    teaching_hours: 1240,
    rating: 4.8,
};

/// The part of the teacher profile that can be edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ProfileContacts {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Введите корректный email"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Укажите должность"))
    )]
    pub position: String,
}

impl ProfileContacts {
    pub fn of(profile: &TeacherProfile) -> Self {
        Self {
            email: profile.email.to_string(),
            position: profile.position.to_string(),
        }
    }

    /// Trim both fields and validate them. Returns the cleaned contacts.
    #[cfg(feature = "validation")]
    pub fn check(&self) -> Result<Self, AppError> {
        let cleaned = Self {
            email: self.email.trim().to_string(),
            position: self.position.trim().to_string(),
        };
        cleaned.validate()?;
        Ok(cleaned)
    }
}
