const EXIT_KEYWORD: &str = "exit";
const LIST_KEYWORD: &str = "listele";
const READ_KEYWORD: &str = "oku";

/// A line of user input, classified by keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    List,
    Read,
    Forward(String),
}

impl Command {
    /// Precedence: exact `exit`, then `listele` anywhere, then `oku`
    /// anywhere. Everything else goes to the model untouched.
    pub fn parse(line: &str) -> Self {
        let lowered = line.to_lowercase();

        if lowered == EXIT_KEYWORD {
            Self::Exit
        } else if lowered.contains(LIST_KEYWORD) {
            Self::List
        } else if lowered.contains(READ_KEYWORD) {
            Self::Read
        } else {
            Self::Forward(line.to_string())
        }
    }
}
