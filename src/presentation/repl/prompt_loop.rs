use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::application::ports::DocumentStoreError;
use crate::application::services::{AssistantService, DocumentService};
use crate::domain::AgentRequest;

use super::Command;
use super::messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplState {
    Running,
    Exiting,
}

#[derive(Debug, thiserror::Error)]
pub enum ReplError {
    #[error("console i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Listing(#[from] DocumentStoreError),
}

/// Line-oriented prompt loop over any async reader/writer pair.
pub struct Repl<R, W> {
    documents: DocumentService,
    assistant: AssistantService,
    input: R,
    output: W,
}

impl<R, W> Repl<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(documents: DocumentService, assistant: AssistantService, input: R, output: W) -> Self {
        Self {
            documents,
            assistant,
            input,
            output,
        }
    }

    /// Runs until `exit` or end of input. A documents directory that cannot
    /// be read ends the loop with an error.
    pub async fn run(&mut self) -> Result<(), ReplError> {
        self.write_line(messages::BANNER).await?;

        let mut state = ReplState::Running;
        while state == ReplState::Running {
            self.write(messages::COMMAND_PROMPT).await?;
            state = match self.read_line().await? {
                Some(line) => self.dispatch(&line).await?,
                None => {
                    self.write_line(messages::FAREWELL).await?;
                    ReplState::Exiting
                }
            };
        }

        Ok(())
    }

    pub async fn dispatch(&mut self, line: &str) -> Result<ReplState, ReplError> {
        let command = Command::parse(line);
        tracing::debug!(?command, "Dispatching command");

        match command {
            Command::Exit => {
                self.write_line(messages::FAREWELL).await?;
                Ok(ReplState::Exiting)
            }
            Command::List => {
                let names = self.documents.list().await?;
                self.write_line(&messages::pdf_listing(&names)).await?;
                Ok(ReplState::Running)
            }
            Command::Read => self.read_document().await,
            Command::Forward(input) => {
                let reply = match self.assistant.respond(AgentRequest::new(input)).await {
                    Ok(output) => messages::agent_answer(&output),
                    Err(e) => messages::assistant_error(&e),
                };
                self.write_line(&reply).await?;
                Ok(ReplState::Running)
            }
        }
    }

    async fn read_document(&mut self) -> Result<ReplState, ReplError> {
        if self.documents.list().await?.is_empty() {
            self.write_line(messages::NO_PDFS).await?;
            return Ok(ReplState::Running);
        }

        self.write(messages::FILE_PROMPT).await?;
        let Some(name) = self.read_line().await? else {
            self.write_line(messages::FAREWELL).await?;
            return Ok(ReplState::Exiting);
        };

        let reply = match self.documents.read(&name).await {
            Ok(text) => messages::document_text(&text),
            Err(e) => messages::document_error(&e),
        };
        self.write_line(&reply).await?;

        Ok(ReplState::Running)
    }

    async fn read_line(&mut self) -> Result<Option<String>, ReplError> {
        let mut buffer = String::new();
        if self.input.read_line(&mut buffer).await? == 0 {
            return Ok(None);
        }
        Ok(Some(
            buffer.trim_end_matches(|c: char| c == '\n' || c == '\r').to_string(),
        ))
    }

    async fn write(&mut self, text: &str) -> Result<(), ReplError> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }

    async fn write_line(&mut self, text: &str) -> Result<(), ReplError> {
        self.write(text).await?;
        self.write("\n").await
    }
}
