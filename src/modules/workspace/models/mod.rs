mod business_data;

pub use business_data::BusinessData;
