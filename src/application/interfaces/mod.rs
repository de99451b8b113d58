/// List and subscriber service interface
pub mod audience;
/// Campaign service interface
pub mod campaign;
/// Transactional email service interface
pub mod email;
