//! Balance Inquiry Example
//!
//! Declares a small custom family (instead of the bundled dialect) to
//! show the declaration API, including a header section and an alias.

use iso8583_codec::{
    dialect, ContentClass, FieldOptions, FixedCodec, Layout, MessageFamily, VarCodec,
};

fn declare_family() -> Result<MessageFamily, Box<dyn std::error::Error>> {
    let mut family = MessageFamily::new();
    family.set_layout(Layout::new().with_header(true).with_hex_bitmap(true));

    family.declare_mti("0100", "Authorization Request")?;
    family.declare_mti("0110", "Authorization Response")?;

    family.declare_header("h0", "Product Indicator", &FixedCodec::numeric(3), &FieldOptions::new());
    family.declare_header("h1", "Release Number", &FixedCodec::numeric(2), &FieldOptions::new());

    family.declare_field(
        2,
        "Primary Account Number",
        &VarCodec::llvar(ContentClass::Numeric),
        &FieldOptions::from_pairs(&[("max", "19")]),
    )?;
    family.declare_field(3, "Processing Code", &FixedCodec::numeric(6), &FieldOptions::new())?;
    family.declare_field(39, "Response Code", &FixedCodec::alphanumeric(2), &FieldOptions::new())?;
    family.declare_field(
        54,
        "Additional Amounts",
        &VarCodec::lllvar(ContentClass::AlphanumericSpecial).with_max(120),
        &FieldOptions::new(),
    )?;
    family.declare_alias(2, "pan")?;

    Ok(family)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let family = declare_family()?;

    let mut request = family.message_with_mti("Authorization Request")?;
    request.set("h0", "103")?;
    request.set("h1", "01")?;
    request.set("pan", "4111111111111111")?;
    request.set(3, "310000")?; // Balance inquiry, checking account
    let wire = request.to_bytes()?;
    println!("request ({} bytes):\n{}", wire.len(), request.describe());

    let mut response = family.message_with_mti("0110")?;
    response.set("h0", "103")?;
    response.set("h1", "01")?;
    response.set("pan", "4111111111111111")?;
    response.set(3, "310000")?;
    response.set(39, "00")?;
    response.set(54, "0084001C000000123456")?; // Available balance
    let wire = response.to_bytes()?;
    println!("response ({} bytes):\n{}", wire.len(), response.describe());

    // The same traffic through the bundled dialect needs no declarations
    let standard = dialect::iso1987();
    let mut echo = standard.message_with_mti("0800")?;
    echo.set("nm_info_code", "301")?;
    println!("echo test:\n{}", echo.describe());

    Ok(())
}
