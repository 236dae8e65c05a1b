//! Delimited-row formatting for extracted transactions.
//!
//! Row shape: date, method, code, description, category, amount — tab
//! separated. The padded variant left-justifies each column for terminal
//! echo; the file output stays unpadded.

use ledgersift_core::Transaction;

const W_DATE: usize = 10;
const W_METHOD: usize = 8;
const W_CODE: usize = 23;
const W_DESC: usize = 60;
const W_CATEGORY: usize = 30;
const W_AMOUNT: usize = 15;

pub fn format_row(tx: &Transaction, padded: bool) -> String {
    let date = tx.date.format("%Y-%m-%d").to_string();
    let method = tx.method.as_str();
    let code = tx.code.as_deref().unwrap_or("");
    let category = tx.category.as_deref().unwrap_or("");
    let amount = format!("{:.2}", tx.amount);

    if padded {
        format!(
            "{date:<W_DATE$}\t{method:<W_METHOD$}\t{code:<W_CODE$}\t{desc:<W_DESC$}\t{category:<W_CATEGORY$}\t{amount:<W_AMOUNT$}",
            desc = tx.description,
        )
    } else {
        format!(
            "{date}\t{method}\t{code}\t{desc}\t{category}\t{amount}",
            desc = tx.description,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ledgersift_core::Method;

    fn tx() -> Transaction {
        Transaction {
            date: NaiveDate::from_ymd_opt(2023, 11, 15).unwrap(),
            posting_date: NaiveDate::from_ymd_opt(2023, 11, 15).unwrap(),
            description: "GROCERY STORE".to_string(),
            amount: -45.67,
            code: None,
            category: Some("Groceries".to_string()),
            method: Method::Chequing,
        }
    }

    #[test]
    fn test_unpadded_row() {
        assert_eq!(
            format_row(&tx(), false),
            "2023-11-15\tchequing\t\tGROCERY STORE\tGroceries\t-45.67"
        );
    }

    #[test]
    fn test_padded_row_aligns_columns() {
        let row = format_row(&tx(), true);
        let cols: Vec<&str> = row.split('\t').collect();
        assert_eq!(cols.len(), 6);
        assert_eq!(cols[0].len(), 10);
        assert_eq!(cols[2].len(), 23);
        assert_eq!(cols[3].len(), 60);
    }
}
