pub mod rsync;
pub mod supervisor;
