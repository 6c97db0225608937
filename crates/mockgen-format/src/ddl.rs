//! DDL and statement fragments for the `mock` table.

/// Target table name.
pub const TABLE_NAME: &str = "mock";

/// Column list shared by `INSERT` and `COPY`.
pub const COLUMN_LIST: &str = "handle, range_low, range_high, stuff";

/// `CREATE TABLE` statement for the `mock` table.
///
/// `range_type` is spliced in verbatim as the endpoint column type, so the
/// help text can pass a `<type>` placeholder.
pub fn create_table_sql(range_type: &str) -> String {
    format!(
        "CREATE TABLE {TABLE_NAME} (\n  \
         handle INT NOT NULL\n  \
         ,range_low {range_type} NOT NULL\n  \
         ,range_high {range_type} NOT NULL\n  \
         ,stuff TEXT\n\
         );"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_table_sql() {
        let ddl = create_table_sql("INT");
        assert_eq!(
            ddl,
            "CREATE TABLE mock (\n  handle INT NOT NULL\n  ,range_low INT NOT NULL\n  ,range_high INT NOT NULL\n  ,stuff TEXT\n);"
        );
    }

    #[test]
    fn test_create_table_sql_placeholder() {
        let ddl = create_table_sql("<type>");
        assert!(ddl.contains("range_low <type> NOT NULL"));
        assert!(ddl.contains("range_high <type> NOT NULL"));
    }
}
