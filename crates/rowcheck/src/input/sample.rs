//! Built-in demonstration dataset.

use super::source::{DataTable, Record};
use crate::schema::{AGE, FULL_NAME, HEALTH_PLAN, IDENTITY_NUMBER, SEX};

/// Five records exercising the age, sex and plan rules.
///
/// Rows 1 and 5 pass; the others fail on age, sex, or age and plan.
pub fn sample_dataset() -> DataTable {
    let rows: [(&str, &str, i64, &str, &str); 5] = [
        ("37290938", "Gabriel Palacios", 17, "M", "premium"),
        ("93457250", "Fabricio Sbeded", 150, "H", "basico"),
        ("33299034", "Juan Stardust", 44, "X", "premium"),
        ("34965920", "Ziggy Treli", 500, "M", ""),
        ("42441983", "Mariela Lana", 20, "M", "basico"),
    ];

    DataTable::from_records(
        rows.into_iter()
            .map(|(identity, name, age, sex, plan)| {
                Record::new()
                    .with(IDENTITY_NUMBER, identity)
                    .with(FULL_NAME, name)
                    .with(AGE, age)
                    .with(SEX, sex)
                    .with(HEALTH_PLAN, plan)
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::REQUIRED_FIELDS;

    #[test]
    fn test_sample_shape() {
        let table = sample_dataset();
        assert_eq!(table.row_count(), 5);
        assert_eq!(table.headers, REQUIRED_FIELDS);
    }
}
