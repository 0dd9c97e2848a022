//! Repository implementations for the Academies domain

pub mod academies;

pub use academies::AcademyRepository;
