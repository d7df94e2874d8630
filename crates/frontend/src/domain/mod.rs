pub mod a001_school;
pub mod a002_accreditation_application;
