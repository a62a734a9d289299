mod docrag_service;

pub use docrag_service::{AskCommand, DocragError, DocragService, IngestCommand};
