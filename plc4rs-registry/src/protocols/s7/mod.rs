//! Enumerated fields of the S7 protocol

use crate::closed_enum;

closed_enum! {
    /// Module class carried in an SZL (system status list) identifier.
    ///
    /// The default is [`SzlModuleTypeClass::CPU`], the zero value of the field.
    pub enum SzlModuleTypeClass {
        /// Central processing unit
        CPU = 0 => "CPU",
        /// Interface module
        IM = 1 => "IM",
        /// Function module
        FM = 2 => "FM",
        /// Communication processor
        CP = 3 => "CP",
    }
    default = CPU;
}
