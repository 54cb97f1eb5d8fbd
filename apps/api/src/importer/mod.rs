// Importers: best-effort conversion of outside data (LinkedIn PDF text,
// GitHub profiles) into partial resumes. Both return a patch for the client
// to merge; neither touches the stored resume.

pub mod github;
pub mod handlers;
pub mod linkedin;
