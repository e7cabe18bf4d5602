mod grid;
mod state;
mod widget;
pub(crate) use self::state::{DatePicker, DateRange, PickerInput, PickerResponse};
pub(crate) use self::widget::{PickerPanel, PickerTrigger};
