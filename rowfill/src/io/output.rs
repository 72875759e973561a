use crate::config::RowFillConfig;
use crate::strategy::Selection;
use printnest::io::ext_repr::ExtInstance;
use serde::Serialize;

#[derive(Serialize, Clone)]
pub struct SelectionOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub selection: Selection,
    pub config: RowFillConfig,
}
