use serde::{Deserialize, Serialize};

/// A course card on the courses screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: u32,
    pub title: String,
    pub department: String,
    pub teacher: String,
    pub students: u32,
    /// Completion percentage, 0..=100.
    pub progress: u8,
    pub modules: u32,
    pub tasks: u32,
    pub deadlines: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LessonKind {
    Video,
    Reading,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lesson {
    pub title: String,
    pub kind: LessonKind,
    pub duration: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AssignmentStatus {
    Graded(u8),
    Submitted,
    Open,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assignment {
    pub title: String,
    pub status: AssignmentStatus,
    pub deadline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseModule {
    pub title: String,
    pub lessons: Vec<Lesson>,
    pub assignments: Vec<Assignment>,
}

impl CourseModule {
    pub fn completed(&self) -> bool {
        self.lessons.iter().all(|l| l.completed)
    }
}

fn course(
    id: u32,
    title: &str,
    department: &str,
    teacher: &str,
    (students, progress): (u32, u8),
    (modules, tasks, deadlines): (u32, u32, u32),
) -> Course {
    Course {
        id,
        title: title.to_string(),
        department: department.to_string(),
        teacher: teacher.to_string(),
        students,
        progress,
        modules,
        tasks,
        deadlines,
    }
}

/// Mock course catalogue for the current semester.
pub fn courses() -> Vec<Course> {
    vec![
        course(1, "Алгоритмы и структуры данных", "ВТПО", "Абдикерим Н.Б.", (48, 65), (5, 12, 2)),
        course(2, "Базы данных", "ИС", "Мухамедиев Р.И.", (52, 82), (6, 10, 0)),
        course(3, "Мобильная разработка", "ВТПО", "Сарсенбай А.К.", (38, 45), (4, 8, 1)),
    ]
}

pub fn find_course(id: u32) -> Option<Course> {
    courses().into_iter().find(|c| c.id == id)
}

/// Case-insensitive match on title, teacher or department. An empty query
/// keeps all.
pub fn filter_courses(courses: &[Course], query: &str) -> Vec<Course> {
    let needle = query.trim().to_lowercase();
    courses
        .iter()
        .filter(|c| {
            needle.is_empty()
                || c.title.to_lowercase().contains(&needle)
                || c.teacher.to_lowercase().contains(&needle)
                || c.department.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

fn lesson(title: &str, kind: LessonKind, duration: &str, completed: bool) -> Lesson {
    Lesson {
        title: title.to_string(),
        kind,
        duration: duration.to_string(),
        completed,
    }
}

fn assignment(title: &str, status: AssignmentStatus, deadline: &str) -> Assignment {
    Assignment {
        title: title.to_string(),
        status,
        deadline: deadline.to_string(),
    }
}

/// Syllabus shown on the course detail screen. Every course shares it.
pub fn course_modules() -> Vec<CourseModule> {
    vec![
        CourseModule {
            title: "Введение в алгоритмы".into(),
            lessons: vec![
                lesson("Понятие алгоритма", LessonKind::Video, "15:00", true),
                lesson("Свойства алгоритмов", LessonKind::Reading, "10 min", true),
            ],
            assignments: vec![assignment("Тест: Основы", AssignmentStatus::Graded(95), "Passed")],
        },
        CourseModule {
            title: "Асимптотический анализ".into(),
            lessons: vec![
                lesson("Big O нотация", LessonKind::Video, "25:00", true),
                lesson("Примеры анализа сложности", LessonKind::Reading, "15 min", true),
            ],
            assignments: vec![assignment(
                "Лабораторная №1",
                AssignmentStatus::Graded(88),
                "Passed",
            )],
        },
        CourseModule {
            title: "Сортировки".into(),
            lessons: vec![
                lesson("Быстрая сортировка", LessonKind::Video, "30:00", true),
                lesson("Сортировка слиянием", LessonKind::Video, "28:00", false),
            ],
            assignments: vec![assignment(
                "Лабораторная №3",
                AssignmentStatus::Submitted,
                "Завтра, 23:59",
            )],
        },
        CourseModule {
            title: "Графы".into(),
            lessons: vec![
                lesson("Обход в ширину и глубину", LessonKind::Video, "35:00", false),
                lesson("Кратчайшие пути", LessonKind::Reading, "20 min", false),
            ],
            assignments: vec![assignment("Лабораторная №5", AssignmentStatus::Open, "28 фев")],
        },
    ]
}
