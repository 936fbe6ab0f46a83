use crate::domain::model::{LockerPass, OrderOutcome, Pass, PassType};
use crate::domain::ports::{InputProvider, OutputPresenter};
use crate::utils::error::{Result, StudyCafeError};
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Line-oriented reader for the customer's answers.
pub struct ConsoleInput<R> {
    reader: R,
}

impl<R: AsyncBufRead + Unpin + Send> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    async fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line).await?;
        if read == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input closed before the order was complete",
            )
            .into());
        }
        Ok(line.trim().to_string())
    }
}

pub fn parse_pass_type(token: &str) -> Result<PassType> {
    match token {
        "1" => Ok(PassType::Hourly),
        "2" => Ok(PassType::Weekly),
        "3" => Ok(PassType::Fixed),
        _ => Err(StudyCafeError::invalid_input()),
    }
}

/// Resolves a 1-based choice against `candidates`.
pub fn parse_pass_selection(token: &str, candidates: &[Pass]) -> Result<Pass> {
    if candidates.is_empty() {
        return Err(StudyCafeError::application(
            "No passes are available for the selected type.",
        ));
    }

    token
        .parse::<usize>()
        .ok()
        .and_then(|choice| choice.checked_sub(1))
        .and_then(|index| candidates.get(index))
        .cloned()
        .ok_or_else(|| StudyCafeError::application("Invalid selection."))
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> InputProvider for ConsoleInput<R> {
    async fn get_pass_type(&mut self) -> Result<PassType> {
        let token = self.read_line().await?;
        parse_pass_type(&token)
    }

    async fn get_pass_selection(&mut self, candidates: &[Pass]) -> Result<Pass> {
        let token = self.read_line().await?;
        parse_pass_selection(&token, candidates)
    }

    async fn get_locker_confirmation(&mut self) -> Result<bool> {
        let token = self.read_line().await?;
        Ok(token == "1")
    }
}

pub struct ConsoleOutput<W> {
    writer: W,
}

impl<W: AsyncWrite + Unpin + Send> ConsoleOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    async fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            self.writer.write_all(line.as_bytes()).await?;
            self.writer.write_all(b"\n").await?;
        }
        self.writer.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> OutputPresenter for ConsoleOutput<W> {
    async fn show_welcome(&mut self) -> Result<()> {
        self.write_lines(&["*** Premium Study Cafe ***".to_string()]).await
    }

    async fn show_announcement(&mut self) -> Result<()> {
        self.write_lines(&[
            "* Lockers can be added to hourly and weekly passes. (extra charge)".to_string(),
            "* Opening event! 10% off 2+ week passes, 15% off 12 week passes. (applied at checkout)"
                .to_string(),
            String::new(),
        ])
        .await
    }

    async fn prompt_pass_type_selection(&mut self) -> Result<()> {
        self.write_lines(&[
            "Please choose a pass.".to_string(),
            "1. Hourly pass (open seat) | 2. Weekly pass (open seat) | 3. Fixed seat".to_string(),
        ])
        .await
    }

    async fn show_pass_list(&mut self, candidates: &[Pass]) -> Result<()> {
        let mut lines = vec![String::new(), "Available passes".to_string()];
        lines.extend(
            candidates
                .iter()
                .enumerate()
                .map(|(index, pass)| format!("{}. {}", index + 1, pass)),
        );
        lines.push("Enter the number of the pass.".to_string());
        self.write_lines(&lines).await
    }

    async fn prompt_locker_offer(&mut self, locker_pass: &LockerPass) -> Result<()> {
        self.write_lines(&[
            String::new(),
            format!(
                "Would you like to add a locker? ({} won)",
                locker_pass.price
            ),
            "1. Yes | 2. No".to_string(),
        ])
        .await
    }

    async fn show_order_summary(
        &mut self,
        pass: &Pass,
        locker_pass: Option<&LockerPass>,
    ) -> Result<()> {
        let mut lines = vec![
            String::new(),
            "Order summary".to_string(),
            format!("Pass: {}", pass),
        ];
        if let Some(locker_pass) = locker_pass {
            lines.push(format!("Locker: {}", locker_pass));
        }

        let outcome = OrderOutcome {
            pass: pass.clone(),
            locker_pass: locker_pass.cloned(),
        };
        if outcome.discount_price() > 0 {
            lines.push(format!("Event discount: {} won", outcome.discount_price()));
        }
        lines.push(format!("Total: {} won", outcome.total_price()));
        lines.push(String::new());

        self.write_lines(&lines).await
    }

    async fn show_message(&mut self, message: &str) -> Result<()> {
        self.write_lines(&[message.to_string()]).await
    }
}
