// Game modules: characters and their skill sets

pub mod characters;
pub mod skills;
