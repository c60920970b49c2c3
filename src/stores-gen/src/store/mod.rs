pub mod dictionary;
pub mod record;
pub mod scenario;
