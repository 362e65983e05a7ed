pub mod blob_sidecars;
pub mod states;
