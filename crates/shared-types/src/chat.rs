use serde::{Deserialize, Serialize};

/// Conversation list entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conversation {
    pub title: String,
    pub preview: String,
    pub time: String,
    pub unread: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum MessageBody {
    Text(String),
    File { name: String, size: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub body: MessageBody,
    pub from_me: bool,
    pub time: String,
    #[serde(default)]
    pub unread: bool,
}

impl ChatMessage {
    /// Text placed on the clipboard: the message body, or a file's name.
    pub fn copy_text(&self) -> &str {
        match &self.body {
            MessageBody::Text(text) => text,
            MessageBody::File { name, .. } => name,
        }
    }
}

/// An open message thread. Lives only as long as the chat view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Thread {
    messages: Vec<ChatMessage>,
}

impl Thread {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append an outgoing text message. Blank input is ignored and
    /// reported as `false`.
    pub fn send(&mut self, text: &str, time: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let id = self.messages.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        self.messages.push(ChatMessage {
            id,
            body: MessageBody::Text(text.to_string()),
            from_me: true,
            time: time.to_string(),
            unread: false,
        });
        true
    }

    /// Remove message `id`, returning it if it was present.
    pub fn delete(&mut self, id: u64) -> Option<ChatMessage> {
        let index = self.messages.iter().position(|m| m.id == id)?;
        Some(self.messages.remove(index))
    }

    /// Flag message `id` as unread. Returns `false` for unknown ids.
    pub fn mark_unread(&mut self, id: u64) -> bool {
        match self.messages.iter_mut().find(|m| m.id == id) {
            Some(message) => {
                message.unread = true;
                true
            }
            None => false,
        }
    }
}

pub fn conversations() -> Vec<Conversation> {
    [
        ("Иванов А. — Алгоритмы и структуры данных", "Проверьте задание...", "14:30", 0),
        ("CS-2101 (Группа)", "Марат: Скиньте расписание на завтра", "12:45", 3),
        ("Динара М.", "Спасибо!", "Пн", 0),
    ]
    .into_iter()
    .map(|(title, preview, time, unread)| Conversation {
        title: title.to_string(),
        preview: preview.to_string(),
        time: time.to_string(),
        unread,
    })
    .collect()
}

/// Opening thread with the course teacher.
pub fn sample_thread() -> Thread {
    let text = |id: u64, body: &str, from_me: bool, time: &str| ChatMessage {
        id,
        body: MessageBody::Text(body.to_string()),
        from_me,
        time: time.to_string(),
        unread: false,
    };
    Thread::new(vec![
        text(
            1,
            "Добрый день! Я проверил вашу лабораторную работу №3. Есть несколько замечаний по сложности алгоритма сортировки.",
            false,
            "14:20",
        ),
        ChatMessage {
            id: 2,
            body: MessageBody::File {
                name: "Feedback_Lab3.pdf".to_string(),
                size: "2.4 MB".to_string(),
            },
            from_me: false,
            time: "14:20".to_string(),
            unread: false,
        },
        text(
            3,
            "Здравствуйте! Спасибо за фидбек. Я ознакомлюсь с файлом и внесу правки до завтрашнего вечера.",
            true,
            "14:30",
        ),
        text(4, "Можно будет сдать исправленный вариант в LMS?", true, "14:31"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_appends_with_next_id() {
        let mut thread = sample_thread();
        assert!(thread.send("  Да, конечно  ", "14:35"));
        let last = thread.messages().last().unwrap();
        assert_eq!(last.id, 5);
        assert!(last.from_me);
        assert_eq!(last.body, MessageBody::Text("Да, конечно".into()));
    }

    #[test]
    fn blank_message_is_ignored() {
        let mut thread = sample_thread();
        assert!(!thread.send("   \n", "14:35"));
        assert_eq!(thread.messages().len(), 4);
    }

    #[test]
    fn send_on_empty_thread_starts_at_one() {
        let mut thread = Thread::default();
        assert!(thread.send("hi", "09:00"));
        assert_eq!(thread.messages()[0].id, 1);
    }

    #[test]
    fn delete_removes_only_that_message() {
        let mut thread = sample_thread();
        let removed = thread.delete(2).unwrap();
        assert_eq!(removed.copy_text(), "Feedback_Lab3.pdf");
        let ids: Vec<u64> = thread.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
        assert!(thread.delete(2).is_none());
    }

    #[test]
    fn ids_stay_unique_after_delete() {
        let mut thread = sample_thread();
        thread.delete(4);
        assert!(thread.send("ещё", "14:40"));
        let ids: Vec<u64> = thread.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        thread.delete(1);
        assert!(thread.send("и ещё", "14:41"));
        assert_eq!(thread.messages().last().unwrap().id, 5);
    }

    #[test]
    fn mark_unread_flags_known_ids() {
        let mut thread = sample_thread();
        assert!(thread.mark_unread(1));
        assert!(thread.messages()[0].unread);
        assert!(!thread.messages()[1].unread);
        assert!(!thread.mark_unread(99));
    }

    #[test]
    fn copy_text_prefers_body() {
        let thread = sample_thread();
        assert!(thread.messages()[0].copy_text().starts_with("Добрый день"));
    }

    #[test]
    fn group_chat_has_unread() {
        let unread: u32 = conversations().iter().map(|c| c.unread).sum();
        assert_eq!(unread, 3);
    }
}
