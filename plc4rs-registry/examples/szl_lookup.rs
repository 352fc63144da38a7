use bytes::BytesMut;
use plc4rs_registry::spi::codec;
use plc4rs_registry::{ClosedEnum, DecodeConfig, SzlModuleTypeClass};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Textual lookup, as a configuration file would name the field
    let class = SzlModuleTypeClass::from_name("FM")?;
    println!("{} has ordinal {}", class, class.ordinal());

    // Encode every member as it travels on the wire
    let mut buf = BytesMut::new();
    for value in SzlModuleTypeClass::iter() {
        codec::serialize(value, &mut buf)?;
    }
    buf.extend_from_slice(&[0x0C]);
    println!("Encoded: {:?}", &buf[..]);

    // Decode, preserving the trailing unknown ordinal
    let config = DecodeConfig::preserving();
    let mut input = &buf[..];
    while !input.is_empty() {
        let (rest, value) = codec::parse_with::<SzlModuleTypeClass>(input, &config)
            .map_err(|e| format!("decode failed: {:?}", e))?;
        match value.known() {
            Some(class) => println!("Decoded: {}", class),
            None => println!("Decoded unknown ordinal {:#04x}", value.raw()?),
        }
        input = rest;
    }

    Ok(())
}
