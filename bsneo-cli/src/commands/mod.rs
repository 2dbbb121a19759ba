pub(crate) mod config;
pub(crate) mod export;
pub(crate) mod regions;
pub(crate) mod systems;
