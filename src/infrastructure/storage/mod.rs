mod local_pdf_directory;

pub use local_pdf_directory::LocalPdfDirectory;
