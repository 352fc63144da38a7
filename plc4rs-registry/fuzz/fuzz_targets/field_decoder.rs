#![no_main]
use libfuzzer_sys::fuzz_target;
use plc4rs_registry::spi::codec;
use plc4rs_registry::{ClosedEnum, SzlModuleTypeClass};

fuzz_target!(|data: &[u8]| {
    let _ = codec::parse::<SzlModuleTypeClass>(data);
    let _ = codec::parse_lenient::<SzlModuleTypeClass>(data);
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = SzlModuleTypeClass::from_name(text);
    }
});
