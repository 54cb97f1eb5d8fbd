//! PDF rendering — a pluggable, trait-based renderer seam.
//!
//! Default: `ChromiumRenderer`, which prints the HTML document through a
//! headless Chromium subprocess. The browser call is a black box: it is
//! bounded by a timeout and the process is always reaped, on success and
//! failure alike. No retries.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("renderer timed out after {0}s")]
    Timeout(u64),

    #[error("renderer exited with {0}")]
    Failed(std::process::ExitStatus),

    #[error("renderer produced no output")]
    EmptyOutput,
}

/// The PDF renderer seam. Carried in `AppState` as `Arc<dyn PdfRenderer>`
/// so the export handler never knows which backend is behind it.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render(&self, html: &str) -> Result<Vec<u8>, RenderError>;
}

/// Prints HTML to PDF via `chromium --headless --print-to-pdf`.
pub struct ChromiumRenderer {
    bin: String,
    timeout: Duration,
}

impl ChromiumRenderer {
    pub fn new(bin: String, timeout_secs: u64) -> Self {
        Self {
            bin,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    async fn print_to_pdf(&self, html_path: &Path, pdf_path: &Path) -> Result<(), RenderError> {
        let mut child = Command::new(&self.bin)
            .arg("--headless")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--no-pdf-header-footer")
            .arg(format!("--print-to-pdf={}", pdf_path.display()))
            .arg(html_path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;

        match tokio::time::timeout(self.timeout, child.wait()).await {
            Ok(status) => {
                let status = status?;
                if status.success() {
                    Ok(())
                } else {
                    Err(RenderError::Failed(status))
                }
            }
            Err(_) => {
                child.kill().await.ok();
                Err(RenderError::Timeout(self.timeout.as_secs()))
            }
        }
    }
}

#[async_trait]
impl PdfRenderer for ChromiumRenderer {
    async fn render(&self, html: &str) -> Result<Vec<u8>, RenderError> {
        // The temp dir (input HTML and output PDF) is removed when `dir`
        // drops, whichever way this function exits.
        let dir = tempfile::tempdir()?;
        let html_path = dir.path().join("resume.html");
        let pdf_path = dir.path().join("resume.pdf");
        tokio::fs::write(&html_path, html).await?;

        self.print_to_pdf(&html_path, &pdf_path).await?;

        let pdf = tokio::fs::read(&pdf_path).await?;
        if pdf.is_empty() {
            return Err(RenderError::EmptyOutput);
        }
        debug!("Rendered PDF ({} bytes)", pdf.len());
        Ok(pdf)
    }
}
