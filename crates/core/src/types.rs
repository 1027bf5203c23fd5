/// All database primary keys are SQLite 64-bit rowids.
pub type DbId = i64;
