//! Horizontal-offset field classification for the layout pipeline.
//!
//! A statement page lays its columns out at fixed horizontal positions, so a
//! fragment's left offset decides which semantic field it can be. One
//! classifier instance holds the whole band table, so supporting another
//! sub-layout means supplying different bands, not another pipeline.

use ledgersift_core::{ShortDate, is_amount};

use crate::fragment::Fragment;

/// Semantic column a fragment can land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Date,
    Description,
    Withdrawal,
    Deposit,
}

/// Exclusive horizontal-offset range mapped to a field.
#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub lo: f32,
    pub hi: f32,
    pub field: Field,
}

impl Band {
    pub const fn new(lo: f32, hi: f32, field: Field) -> Self {
        Self { lo, hi, field }
    }

    fn contains(&self, left: f32) -> bool {
        self.lo < left && left < self.hi
    }
}

/// Classifies fragments by offset band plus a per-field text check: date
/// columns must hold a short date, amount columns must hold currency text.
/// Fragments outside every band (the balance column, page decoration) map to
/// `None` and are ignored by the pipeline.
#[derive(Debug, Clone)]
pub struct FieldClassifier {
    bands: Vec<Band>,
}

impl FieldClassifier {
    pub fn new(bands: Vec<Band>) -> Self {
        Self { bands }
    }

    /// Band table for chequing/savings e-statements. Two date and two
    /// description bands because the chequing and savings sub-layouts
    /// coexist in one document; (460, 600) is the balance column and is
    /// deliberately unmapped.
    pub fn chequing() -> Self {
        Self::new(vec![
            Band::new(10.0, 20.0, Field::Date),
            Band::new(40.0, 50.0, Field::Date),
            Band::new(60.0, 75.0, Field::Description),
            Band::new(85.0, 100.0, Field::Description),
            Band::new(250.0, 360.0, Field::Withdrawal),
            Band::new(360.0, 460.0, Field::Deposit),
        ])
    }

    pub fn classify(&self, fragment: &Fragment) -> Option<Field> {
        let band = self.bands.iter().find(|b| b.contains(fragment.left))?;

        let text_fits = match band.field {
            Field::Date => ShortDate::parse_day_first(&fragment.text).is_some(),
            Field::Description => true,
            Field::Withdrawal | Field::Deposit => is_amount(&fragment.text),
        };

        text_fits.then_some(band.field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag(text: &str, left: f32) -> Fragment {
        Fragment {
            text: text.to_string(),
            left,
        }
    }

    #[test]
    fn test_date_band_requires_date_text() {
        let c = FieldClassifier::chequing();
        assert_eq!(c.classify(&frag("15 Nov", 12.0)), Some(Field::Date));
        assert_eq!(c.classify(&frag("15 Nov", 45.0)), Some(Field::Date));
        assert_eq!(c.classify(&frag("Opening balance", 12.0)), None);
    }

    #[test]
    fn test_description_bands() {
        let c = FieldClassifier::chequing();
        assert_eq!(c.classify(&frag("GROCERY STORE", 65.0)), Some(Field::Description));
        assert_eq!(c.classify(&frag("GROCERY STORE", 90.0)), Some(Field::Description));
    }

    #[test]
    fn test_amount_bands_require_currency_text() {
        let c = FieldClassifier::chequing();
        assert_eq!(c.classify(&frag("$45.67", 300.0)), Some(Field::Withdrawal));
        assert_eq!(c.classify(&frag("1,250.00", 400.0)), Some(Field::Deposit));
        assert_eq!(c.classify(&frag("see note 2", 300.0)), None);
    }

    #[test]
    fn test_balance_column_is_ignored() {
        let c = FieldClassifier::chequing();
        assert_eq!(c.classify(&frag("$1,234.56", 500.0)), None);
    }

    #[test]
    fn test_band_bounds_are_exclusive() {
        let c = FieldClassifier::chequing();
        assert_eq!(c.classify(&frag("15 Nov", 10.0)), None);
        assert_eq!(c.classify(&frag("15 Nov", 20.0)), None);
    }
}
