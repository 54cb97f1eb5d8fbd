// Export pipeline: resume -> printable HTML -> PDF via a headless browser
// subprocess behind the PdfRenderer trait.

pub mod handlers;
pub mod html;
pub mod pdf;
