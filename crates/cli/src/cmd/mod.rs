pub mod doctor;
pub mod expand;
pub mod list;
pub mod new;
pub mod show;
