mod record;

pub use record::PersonRecord;
