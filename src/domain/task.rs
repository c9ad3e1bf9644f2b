/// Upper bound on the document text embedded in a task prompt, in characters.
pub const MAX_INPUT_CHARS: usize = 2000;

pub const DEFAULT_TARGET_LANGUAGE: &str = "English";

/// What the model is asked to do with a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Summarize,
    Translate { target_language: String },
    Answer { question: String },
    FreeForm,
}

impl Task {
    pub fn translate_to(target_language: impl Into<String>) -> Self {
        Self::Translate {
            target_language: target_language.into(),
        }
    }

    pub fn answer(question: impl Into<String>) -> Self {
        Self::Answer {
            question: question.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Summarize => "summarize",
            Self::Translate { .. } => "translate",
            Self::Answer { .. } => "answer",
            Self::FreeForm => "free_form",
        }
    }

    /// Free-form input is sent whole; the other tasks embed at most
    /// `MAX_INPUT_CHARS` of the text.
    pub fn prompt(&self, text: &str) -> String {
        let payload = || truncate_chars(text, MAX_INPUT_CHARS);
        match self {
            Self::Summarize => format!("Bu metni özetle:\n\n{}", payload()),
            Self::Translate { target_language } => {
                format!("Bu metni {target_language} diline çevir:\n\n{}", payload())
            }
            Self::Answer { question } => format!(
                "Aşağıdaki metne dayanarak şu soruya cevap ver: {question}\n\n{}",
                payload()
            ),
            Self::FreeForm => text.to_string(),
        }
    }
}

/// Returns the longest prefix of `text` holding at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
