pub mod corpus;
pub mod loader;

pub use corpus::IgalaCorpus;
pub use loader::CorpusLoader;
