//! POS Purchase Transaction Example
//!
//! Builds a financial request with the bundled 1987 dialect, sends it
//! through a serialize/parse roundtrip, and prints both legs.

use iso8583_codec::{dialect, utils};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let family = dialect::iso1987();

    // Financial request (0200) for a card-present purchase
    let mut request = family.message_with_mti("Financial Request")?;
    request.set("pan", "4111111111111111")?;
    request.set("processing_code", "000000")?;
    request.set("amount", "000000012550")?; // $125.50
    request.set("transmission_datetime", utils::now_transmission_datetime())?;
    request.set("stan", utils::next_stan())?;
    request.set("local_time", utils::now_local_time())?;
    request.set("local_date", utils::now_local_date())?;
    request.set(22, "051")?; // Chip read
    request.set("terminal_id", "POS00012")?;
    request.set("merchant_id", "COFFEE_SHOP_001")?;
    request.set("currency_code", "840")?;

    let wire = request.to_bytes()?;
    println!("=== Purchase request ===");
    println!("  Card:   {}", utils::mask_pan("4111111111111111"));
    println!(
        "  Amount: {}",
        utils::format_amount("000000012550", "$").unwrap_or_default()
    );
    println!("  Wire:   {} bytes", wire.len());
    println!("{}", request.describe());

    // The issuer parses the frame and answers
    let received = family.parse(&wire)?;
    let mut response = family.message_with_mti("Financial Response")?;
    for key in ["pan", "processing_code", "amount", "stan", "local_time", "local_date"] {
        if let Some(value) = received.get(key) {
            response.set(key, value.clone())?;
        }
    }
    response.set("approval_code", "A1B2C3")?;
    response.set("response_code", "00")?;

    let response_wire = response.to_bytes()?;
    println!("=== Purchase response ===");
    println!("  Approved, auth code A1B2C3");
    println!("  Wire:   {} bytes", response_wire.len());
    println!("{}", response.describe());

    Ok(())
}
