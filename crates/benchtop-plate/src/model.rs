//! Model seam behind the plate controller

use tracing::debug;

use crate::error::PlateResult;
use crate::grid::PlateFormat;
use crate::sample::SampleRecord;

/// Storage behind the plate manager
pub trait PlateModel {
    /// Accepts one saved sample
    fn save_sample(&mut self, record: &SampleRecord) -> PlateResult<()>;

    /// Accepts the current plate layout. Returns whether it was stored.
    fn save_layout(&mut self, format: PlateFormat) -> PlateResult<bool>;

    /// Returns a stored layout, if there is one
    fn load_layout(&mut self) -> PlateResult<Option<PlateFormat>>;
}

/// Model that keeps nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullModel;

impl PlateModel for NullModel {
    fn save_sample(&mut self, record: &SampleRecord) -> PlateResult<()> {
        debug!(well = %record.well, sample_id = %record.sample_id, "sample discarded");
        Ok(())
    }

    fn save_layout(&mut self, format: PlateFormat) -> PlateResult<bool> {
        debug!(%format, "layout discarded");
        Ok(false)
    }

    fn load_layout(&mut self) -> PlateResult<Option<PlateFormat>> {
        debug!("no stored layout");
        Ok(None)
    }
}

impl<M: PlateModel + ?Sized> PlateModel for &mut M {
    fn save_sample(&mut self, record: &SampleRecord) -> PlateResult<()> {
        (**self).save_sample(record)
    }

    fn save_layout(&mut self, format: PlateFormat) -> PlateResult<bool> {
        (**self).save_layout(format)
    }

    fn load_layout(&mut self) -> PlateResult<Option<PlateFormat>> {
        (**self).load_layout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::SampleForm;

    #[test]
    fn test_null_model_discards() {
        let mut model = NullModel;
        let record = SampleForm::new("A1").build().unwrap();
        assert_eq!(model.save_sample(&record), Ok(()));
        assert_eq!(model.save_layout(PlateFormat::Wells384), Ok(false));
        assert_eq!(model.load_layout(), Ok(None));
    }

    #[test]
    fn test_forwarding_through_mut_ref() {
        fn load<M: PlateModel>(mut model: M) -> PlateResult<Option<PlateFormat>> {
            model.load_layout()
        }
        let mut model = NullModel;
        assert_eq!(load(&mut model), Ok(None));
    }
}
