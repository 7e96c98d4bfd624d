pub mod csv_export;
pub mod pdf_export;
pub mod sql_export;
