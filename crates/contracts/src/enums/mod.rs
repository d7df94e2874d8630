pub mod accreditation_status;
