mod store;

pub use store::SessionFileStore;
