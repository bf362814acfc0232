use serde::{Deserialize, Serialize};

/// Column headers of the weekly timetable, Monday first.
pub const WEEK_DAYS: &[&str] = &["Пн 17", "Вт 18", "Ср 19", "Чт 20", "Пт 21", "Сб 22"];
/// Index into [`WEEK_DAYS`] highlighted as today.
pub const TODAY: usize = 1;
/// Start times of the class periods.
pub const TIME_SLOTS: &[&str] = &["08:00", "09:50", "11:40", "13:30", "15:20"];
pub const WEEK_LABEL: &str = "Пн 17 фев – Вс 23 фев";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    Day,
    #[default]
    Week,
    Month,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Day => "День",
            ViewMode::Week => "Неделя",
            ViewMode::Month => "Месяц",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ClassKind {
    Lecture,
    Practice,
    Lab,
    Seminar,
    Online,
}

impl ClassKind {
    pub fn label(&self) -> &'static str {
        match self {
            ClassKind::Lecture => "Лекция",
            ClassKind::Practice => "Практика",
            ClassKind::Lab => "Лаб",
            ClassKind::Seminar => "Семинар",
            ClassKind::Online => "Онлайн",
        }
    }

    /// Token used as a `data-kind` attribute for colouring.
    pub fn key(&self) -> &'static str {
        match self {
            ClassKind::Lecture => "lecture",
            ClassKind::Practice => "practice",
            ClassKind::Lab => "lab",
            ClassKind::Seminar => "seminar",
            ClassKind::Online => "online",
        }
    }
}

/// One class in the timetable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassSlot {
    /// Index into [`WEEK_DAYS`].
    pub day: usize,
    pub time: String,
    pub title: String,
    pub teacher: String,
    pub room: String,
    pub kind: ClassKind,
}

fn slot(day: usize, time: &str, title: &str, teacher: &str, room: &str, kind: ClassKind) -> ClassSlot {
    ClassSlot {
        day,
        time: time.to_string(),
        title: title.to_string(),
        teacher: teacher.to_string(),
        room: room.to_string(),
        kind,
    }
}

/// Mock timetable for the displayed week.
pub fn week_schedule() -> Vec<ClassSlot> {
    vec![
        slot(0, "08:00", "Математический анализ II", "Козлов М.В.", "302 каб.", ClassKind::Lecture),
        slot(1, "09:50", "Разработка интерфейсов (UI/UX Design)", "Иванов А.С.", "Online MS Teams", ClassKind::Online),
        slot(1, "11:40", "Алгоритмы и структуры данных", "Абдикерим Н.Б.", "Кабинет 405", ClassKind::Lecture),
        slot(2, "13:30", "Базы данных", "Мухамедиев Р.И.", "Кабинет 302", ClassKind::Lab),
        slot(3, "09:50", "Мобильная разработка", "Сарсенбай А.К.", "Кабинет 210", ClassKind::Practice),
        slot(4, "11:40", "Философия", "Омаров Д.К.", "Кабинет 118", ClassKind::Seminar),
    ]
}

/// Classes on `day`, ordered by start time.
pub fn classes_on(schedule: &[ClassSlot], day: usize) -> Vec<ClassSlot> {
    let mut classes: Vec<ClassSlot> = schedule.iter().filter(|s| s.day == day).cloned().collect();
    classes.sort_by(|a, b| a.time.cmp(&b.time));
    classes
}

/// The class occupying a timetable cell, if any.
pub fn class_at<'a>(schedule: &'a [ClassSlot], day: usize, time: &str) -> Option<&'a ClassSlot> {
    schedule.iter().find(|s| s.day == day && s.time == time)
}

pub const MONTH_LABEL: &str = "Февраль 2025";
const MONTH_LENGTH: u32 = 28;
/// Weekday of the 1st, Monday = 0.
const MONTH_FIRST_WEEKDAY: usize = 5;
/// Date of the displayed week's Monday.
const WEEK_START_DATE: u32 = 17;

/// A date cell in the month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthDay {
    pub date: u32,
    /// Monday = 0.
    pub weekday: usize,
    pub classes: usize,
    pub today: bool,
}

/// Month calendar cells, Monday first, with `None` padding before the 1st.
/// The weekly timetable repeats on every week of the month.
pub fn month_grid(schedule: &[ClassSlot]) -> Vec<Option<MonthDay>> {
    let today = WEEK_START_DATE + TODAY as u32;
    let padding = std::iter::repeat(None).take(MONTH_FIRST_WEEKDAY);
    let days = (1..=MONTH_LENGTH).map(|date| {
        let weekday = (MONTH_FIRST_WEEKDAY + date as usize - 1) % 7;
        Some(MonthDay {
            date,
            weekday,
            classes: schedule.iter().filter(|s| s.day == weekday).count(),
            today: date == today,
        })
    });
    padding.chain(days).collect()
}

/// Length of one class period in minutes.
pub const CLASS_MINUTES: u32 = 100;
const EXPORT_STAMP: &str = "20250217T000000Z";

fn minutes_of(time: &str) -> Option<u32> {
    let (hours, minutes) = time.split_once(':')?;
    Some(hours.parse::<u32>().ok()? * 60 + minutes.parse::<u32>().ok()?)
}

fn ical_clock(minutes: u32) -> String {
    format!("{:02}{:02}00", minutes / 60, minutes % 60)
}

fn ical_text(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

/// iCalendar (RFC 5545) document with one weekly-repeating event per class,
/// anchored on the displayed week. Slots with an unreadable start time are
/// skipped.
pub fn ical_export(schedule: &[ClassSlot]) -> String {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "PRODID:-//IITU Digital//Schedule//RU".to_string(),
    ];
    for (index, class) in schedule.iter().enumerate() {
        let Some(start) = minutes_of(&class.time) else {
            tracing::warn!(time = %class.time, title = %class.title, "skipping class with bad start time");
            continue;
        };
        let date = format!("202502{:02}", WEEK_START_DATE as usize + class.day);
        lines.extend([
            "BEGIN:VEVENT".to_string(),
            format!("UID:iitu-class-{index}@iitu.edu.kz"),
            format!("DTSTAMP:{EXPORT_STAMP}"),
            format!("DTSTART:{date}T{}", ical_clock(start)),
            format!("DTEND:{date}T{}", ical_clock(start + CLASS_MINUTES)),
            "RRULE:FREQ=WEEKLY".to_string(),
            format!("SUMMARY:{} ({})", ical_text(&class.title), class.kind.label()),
            format!("LOCATION:{}", ical_text(&class.room)),
            format!("DESCRIPTION:{}", ical_text(&class.teacher)),
            "END:VEVENT".to_string(),
        ]);
    }
    lines.push("END:VCALENDAR".to_string());
    let mut out = lines.join("\r\n");
    out.push_str("\r\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_slot_fits_the_grid() {
        for s in week_schedule() {
            assert!(s.day < WEEK_DAYS.len());
            assert!(TIME_SLOTS.contains(&s.time.as_str()), "{}", s.time);
        }
    }

    #[test]
    fn classes_on_sorts_by_time() {
        let today = classes_on(&week_schedule(), TODAY);
        let times: Vec<&str> = today.iter().map(|s| s.time.as_str()).collect();
        assert_eq!(times, vec!["09:50", "11:40"]);
    }

    #[test]
    fn free_day_is_empty() {
        assert!(classes_on(&week_schedule(), 5).is_empty());
    }

    #[test]
    fn class_at_finds_cell() {
        let schedule = week_schedule();
        assert_eq!(class_at(&schedule, 0, "08:00").unwrap().kind, ClassKind::Lecture);
        assert!(class_at(&schedule, 0, "09:50").is_none());
    }

    #[test]
    fn month_grid_starts_on_saturday() {
        let grid = month_grid(&week_schedule());
        assert_eq!(grid.len(), 5 + 28);
        assert!(grid[..5].iter().all(Option::is_none));
        let first = grid[5].unwrap();
        assert_eq!((first.date, first.weekday), (1, 5));
    }

    #[test]
    fn month_grid_repeats_weekly_classes() {
        let grid: Vec<MonthDay> = month_grid(&week_schedule()).into_iter().flatten().collect();
        let monday_17 = grid.iter().find(|d| d.date == 17).unwrap();
        assert_eq!(monday_17.weekday, 0);
        assert_eq!(monday_17.classes, 1);
        let tuesday_18 = grid.iter().find(|d| d.date == 18).unwrap();
        assert_eq!(tuesday_18.classes, 2);
        assert!(tuesday_18.today);
        assert_eq!(grid.iter().filter(|d| d.today).count(), 1);
        assert!(grid.iter().filter(|d| d.weekday == 6).all(|d| d.classes == 0));
    }

    #[test]
    fn ical_export_has_one_event_per_class() {
        let ics = ical_export(&week_schedule());
        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), week_schedule().len());
        assert_eq!(ics.matches("RRULE:FREQ=WEEKLY").count(), week_schedule().len());
    }

    #[test]
    fn ical_event_times_follow_the_slot() {
        let ics = ical_export(&week_schedule()[..1]);
        assert!(ics.contains("DTSTART:20250217T080000\r\n"), "{ics}");
        assert!(ics.contains("DTEND:20250217T094000\r\n"), "{ics}");
        assert!(ics.contains("SUMMARY:Математический анализ II (Лекция)"));
    }

    #[test]
    fn ical_escapes_text_values() {
        let mut class = week_schedule().remove(3);
        class.room = "Корпус 1, ауд. 302; 3 этаж".to_string();
        let ics = ical_export(&[class]);
        assert!(ics.contains("LOCATION:Корпус 1\\, ауд. 302\\; 3 этаж\r\n"), "{ics}");
        assert!(ics.contains("DTSTART:20250219T133000"));
    }

    #[test]
    fn ical_skips_unreadable_times() {
        let mut class = week_schedule().remove(0);
        class.time = "утро".to_string();
        assert!(!ical_export(&[class]).contains("BEGIN:VEVENT"));
    }

    #[test]
    fn default_view_is_week() {
        assert_eq!(ViewMode::default(), ViewMode::Week);
        assert_eq!(ViewMode::Month.label(), "Месяц");
    }
}
