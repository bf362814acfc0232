use serde::{Deserialize, Serialize};

/// Semesters offered in the transcript selector, newest first.
pub const SEMESTERS: &[&str] = &[
    "2025-2026, Осенний семестр",
    "2024-2025, Весенний семестр",
];

/// A row of the student transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GradeRow {
    pub course: String,
    pub credits: u32,
    /// First midterm ("рубежный контроль").
    pub rk1: u8,
    pub rk2: u8,
    pub exam: u8,
    pub total: u8,
    pub letter: String,
}

/// A row of the teacher's journal for one course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalRow {
    pub student: String,
    pub student_id: String,
    pub rk1: u8,
    pub rk2: u8,
    pub exam: u8,
    pub total: u8,
    pub letter: String,
}

fn row(course: &str, credits: u32, scores: [u8; 4], letter: &str) -> GradeRow {
    GradeRow {
        course: course.to_string(),
        credits,
        rk1: scores[0],
        rk2: scores[1],
        exam: scores[2],
        total: scores[3],
        letter: letter.to_string(),
    }
}

/// Transcript rows for `semester`; unknown semesters have no grades yet.
pub fn semester_grades(semester: &str) -> Vec<GradeRow> {
    match semester {
        "2025-2026, Осенний семестр" => vec![
            row("Алгоритмы и структуры данных", 5, [95, 88, 90, 91], "A-"),
            row("Базы данных", 6, [82, 75, 80, 79], "B+"),
            row("Мобильная разработка", 4, [90, 92, 85, 89], "A-"),
            row("Английский язык", 3, [100, 95, 98, 97], "A"),
            row("Философия", 2, [70, 80, 75, 75], "B"),
        ],
        "2024-2025, Весенний семестр" => vec![
            row("Математический анализ II", 5, [85, 90, 88, 88], "B+"),
            row("Объектно-ориентированное программирование", 6, [96, 94, 97, 96], "A"),
            row("История Казахстана", 3, [78, 82, 80, 80], "B"),
        ],
        _ => Vec::new(),
    }
}

/// Journal rows for `course`. Every course shows the same mock group.
pub fn journal(_course: &str) -> Vec<JournalRow> {
    [
        ("Иванов Алмат", "29402", [95, 88, 90, 91], "A-"),
        ("Петров Сергей", "29405", [82, 75, 80, 79], "B+"),
        ("Ахметов Мурат", "29410", [90, 92, 85, 89], "A-"),
        ("Сидорова Анна", "29415", [100, 95, 98, 97], "A"),
        ("Кузнецов Олег", "29420", [70, 80, 75, 75], "B"),
    ]
    .into_iter()
    .map(|(student, id, s, letter)| JournalRow {
        student: student.to_string(),
        student_id: id.to_string(),
        rk1: s[0],
        rk2: s[1],
        exam: s[2],
        total: s[3],
        letter: letter.to_string(),
    })
    .collect()
}

/// Grade points on the 4.0 scale for a letter grade.
pub fn grade_points(letter: &str) -> Option<f32> {
    let points = match letter {
        "A" => 4.0,
        "A-" => 3.67,
        "B+" => 3.33,
        "B" => 3.0,
        "B-" => 2.67,
        "C+" => 2.33,
        "C" => 2.0,
        "C-" => 1.67,
        "D+" => 1.33,
        "D" => 1.0,
        "F" => 0.0,
        _ => return None,
    };
    Some(points)
}

/// Credit-weighted GPA. Rows with an unknown letter are skipped; `None` when
/// nothing is left to average.
pub fn gpa(rows: &[GradeRow]) -> Option<f32> {
    let (weighted, credits) = rows
        .iter()
        .filter_map(|r| grade_points(&r.letter).map(|p| (p * r.credits as f32, r.credits)))
        .fold((0.0_f32, 0_u32), |(w, c), (p, cr)| (w + p, c + cr));
    (credits > 0).then(|| weighted / credits as f32)
}

pub fn total_credits(rows: &[GradeRow]) -> u32 {
    rows.iter().map(|r| r.credits).sum()
}

/// Mean of the journal's totals, rounded to one decimal.
pub fn journal_average(rows: &[JournalRow]) -> Option<f32> {
    if rows.is_empty() {
        return None;
    }
    let sum: u32 = rows.iter().map(|r| u32::from(r.total)).sum();
    let mean = sum as f32 / rows.len() as f32;
    Some((mean * 10.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_semester_has_five_courses() {
        let rows = semester_grades(SEMESTERS[0]);
        assert_eq!(rows.len(), 5);
        assert_eq!(total_credits(&rows), 20);
    }

    #[test]
    fn unknown_semester_is_empty() {
        assert!(semester_grades("1999-2000").is_empty());
        assert_eq!(gpa(&semester_grades("1999-2000")), None);
    }

    #[test]
    fn gpa_is_credit_weighted() {
        let rows = vec![row("X", 1, [0; 4], "A"), row("Y", 3, [0; 4], "B")];
        let value = gpa(&rows).unwrap();
        assert!((value - 3.25).abs() < 1e-4, "{value}");
    }

    #[test]
    fn gpa_skips_unknown_letters() {
        let rows = vec![row("X", 2, [0; 4], "A"), row("Y", 5, [0; 4], "??")];
        assert_eq!(gpa(&rows), Some(4.0));
    }

    #[test]
    fn current_semester_gpa_in_range() {
        let value = gpa(&semester_grades(SEMESTERS[0])).unwrap();
        assert!(value > 3.4 && value < 3.7, "{value}");
    }

    #[test]
    fn journal_average_rounds() {
        let rows = journal("Базы данных");
        assert_eq!(journal_average(&rows), Some(86.2));
        assert_eq!(journal_average(&[]), None);
    }

    #[test]
    fn grade_points_table() {
        assert_eq!(grade_points("A"), Some(4.0));
        assert_eq!(grade_points("F"), Some(0.0));
        assert_eq!(grade_points("E"), None);
    }
}
