use crate::domain::email::Email;
use crate::domain::ports::EmailService;
use crate::error::{CapabilityError, Result};
use async_trait::async_trait;
use std::collections::HashSet;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct SentEmail {
    pub to: Email,
    pub message: String,
}

/// Keeps every sent message in a shared in-memory outbox.
///
/// Clones share the outbox.
#[derive(Default, Clone)]
pub struct OutboxEmailService {
    outbox: Arc<RwLock<Vec<SentEmail>>>,
}

impl OutboxEmailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages sent so far, oldest first.
    pub async fn sent(&self) -> Vec<SentEmail> {
        self.outbox.read().await.clone()
    }
}

#[async_trait]
impl EmailService for OutboxEmailService {
    async fn send(&self, to: &Email, message: &str) -> Result<()> {
        let mut outbox = self.outbox.write().await;
        outbox.push(SentEmail {
            to: to.clone(),
            message: message.to_string(),
        });
        debug!(to = %to, queued = outbox.len(), "email queued in outbox");
        Ok(())
    }
}

/// Writes one `to: <address> | <message>` line per email.
pub struct ConsoleEmailService<W: Write + Send> {
    sink: Mutex<W>,
}

impl<W: Write + Send> ConsoleEmailService<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    pub fn into_inner(self) -> W {
        self.sink
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl<W: Write + Send> EmailService for ConsoleEmailService<W> {
    async fn send(&self, to: &Email, message: &str) -> Result<()> {
        let mut sink = self
            .sink
            .lock()
            .map_err(|_| CapabilityError::Delivery("console sink poisoned".to_string()))?;
        writeln!(sink, "to: {to} | {message}")?;
        sink.flush()?;
        Ok(())
    }
}

/// Wraps another email service and refuses to deliver to suppressed addresses.
///
/// Providers keep such lists for hard bounces and unsubscribes; every other
/// recipient is handed to the inner service unchanged.
pub struct SuppressionListEmailService<S: EmailService> {
    inner: S,
    suppressed: HashSet<Email>,
}

impl<S: EmailService> SuppressionListEmailService<S> {
    pub fn new(inner: S, suppressed: impl IntoIterator<Item = Email>) -> Self {
        Self {
            inner,
            suppressed: suppressed.into_iter().collect(),
        }
    }
}

#[async_trait]
impl<S: EmailService> EmailService for SuppressionListEmailService<S> {
    async fn send(&self, to: &Email, message: &str) -> Result<()> {
        if self.suppressed.contains(to) {
            return Err(CapabilityError::Delivery(format!(
                "{to} is on the suppression list"
            )));
        }
        self.inner.send(to, message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_outbox_records_messages_in_order() {
        let outbox = OutboxEmailService::new();
        let to = Email::parse("a@example.com").unwrap();

        outbox.send(&to, "first").await.unwrap();
        outbox.send(&to, "second").await.unwrap();

        let sent = outbox.sent().await;
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].message, "first");
        assert_eq!(sent[1].message, "second");
    }

    #[tokio::test]
    async fn test_console_writes_one_line_per_email() {
        let console = ConsoleEmailService::new(Vec::new());
        let to = Email::parse("a@example.com").unwrap();

        console.send(&to, "hello").await.unwrap();

        let written = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(written, "to: a@example.com | hello\n");
    }

    #[tokio::test]
    async fn test_suppression_list_blocks_only_listed_recipients() {
        let outbox = OutboxEmailService::new();
        let bounced = Email::parse("bounced@example.com").unwrap();
        let service = SuppressionListEmailService::new(outbox.clone(), [bounced.clone()]);

        let err = service.send(&bounced, "hello").await.unwrap_err();
        assert!(matches!(err, CapabilityError::Delivery(_)));
        assert!(err.to_string().contains("suppression list"));

        let ok = Email::parse("ok@example.com").unwrap();
        service.send(&ok, "hello").await.unwrap();

        let sent = outbox.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, ok);
    }
}
