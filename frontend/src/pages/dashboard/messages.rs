use common::model::address::BaseAddress;
use common::model::calculation::CalculationResponse;

use crate::api::ApiError;

pub enum Msg {
    Submit(BaseAddress, web_sys::File),
    Finished(Result<CalculationResponse, ApiError>),
    ExportResults,
    ExportDone,
    ToggleMenu,
    Logout,
    OpenAdmin,
}
