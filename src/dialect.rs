//! Bundled ISO 8583:1987 dialect
//!
//! A fully declared [`MessageFamily`] covering data fields 2-128 with the
//! standard content classes and length disciplines, the standard MTI set,
//! and aliases for the fields applications touch most.

use crate::codec::ContentClass::{Alphanumeric, AlphanumericSpecial, Binary, Numeric};
use crate::codec::{DateTimeCodec, DateTimeKind, FieldCodec, FieldOptions, FixedCodec, VarCodec};
use crate::mti::STANDARD_1987_MTIS;
use crate::schema::MessageFamily;

fn field(family: &mut MessageFamily, number: u8, name: &str, codec: &dyn FieldCodec) {
    family
        .declare_field(number, name, codec, &FieldOptions::new())
        .expect("static dialect table uses valid field numbers");
}

/// Build the ISO 8583:1987 message family
pub fn iso1987() -> MessageFamily {
    let mut f = MessageFamily::new();

    for (code, name) in STANDARD_1987_MTIS {
        f.declare_mti(code, name)
            .expect("standard MTI set is conflict-free");
    }

    field(&mut f, 2, "Primary Account Number", &VarCodec::llvar(Numeric).with_max(19));
    field(&mut f, 3, "Processing Code", &FixedCodec::numeric(6));
    field(&mut f, 4, "Transaction Amount", &FixedCodec::numeric(12));
    field(&mut f, 5, "Settlement Amount", &FixedCodec::numeric(12));
    field(&mut f, 6, "Cardholder Billing Amount", &FixedCodec::numeric(12));
    field(&mut f, 7, "Transmission Date & Time", &DateTimeCodec::new(DateTimeKind::MmDdHhMmSs));
    field(&mut f, 8, "Cardholder Billing Fee Amount", &FixedCodec::numeric(8));
    field(&mut f, 9, "Settlement Conversion Rate", &FixedCodec::numeric(8));
    field(&mut f, 10, "Cardholder Billing Conversion Rate", &FixedCodec::numeric(8));
    field(&mut f, 11, "System Trace Audit Number", &FixedCodec::numeric(6));
    field(&mut f, 12, "Local Transaction Time", &DateTimeCodec::new(DateTimeKind::HhMmSs));
    field(&mut f, 13, "Local Transaction Date", &DateTimeCodec::new(DateTimeKind::MmDd));
    field(&mut f, 14, "Expiration Date", &DateTimeCodec::new(DateTimeKind::YyMm));
    field(&mut f, 15, "Settlement Date", &DateTimeCodec::new(DateTimeKind::MmDd));
    field(&mut f, 16, "Currency Conversion Date", &DateTimeCodec::new(DateTimeKind::MmDd));
    field(&mut f, 17, "Capture Date", &DateTimeCodec::new(DateTimeKind::MmDd));
    field(&mut f, 18, "Merchant Type", &FixedCodec::numeric(4));
    field(&mut f, 19, "Acquiring Institution Country Code", &FixedCodec::numeric(3));
    field(&mut f, 20, "PAN Extended Country Code", &FixedCodec::numeric(3));
    field(&mut f, 21, "Forwarding Institution Country Code", &FixedCodec::numeric(3));
    field(&mut f, 22, "Point of Service Entry Mode", &FixedCodec::numeric(3));
    field(&mut f, 23, "Card Sequence Number", &FixedCodec::numeric(3));
    field(&mut f, 24, "Function Code", &FixedCodec::numeric(3));
    field(&mut f, 25, "Point of Service Condition Code", &FixedCodec::numeric(2));
    field(&mut f, 26, "Point of Service Capture Code", &FixedCodec::numeric(2));
    field(&mut f, 27, "Authorization Identification Response Length", &FixedCodec::numeric(1));
    field(&mut f, 28, "Transaction Fee Amount", &FixedCodec::numeric(9));
    field(&mut f, 29, "Settlement Fee Amount", &FixedCodec::numeric(9));
    field(&mut f, 30, "Transaction Processing Fee Amount", &FixedCodec::numeric(9));
    field(&mut f, 31, "Settlement Processing Fee Amount", &FixedCodec::numeric(9));
    field(&mut f, 32, "Acquiring Institution Identification Code", &VarCodec::llvar(Numeric).with_max(11));
    field(&mut f, 33, "Forwarding Institution Identification Code", &VarCodec::llvar(Numeric).with_max(11));
    field(&mut f, 34, "Extended Primary Account Number", &VarCodec::llvar(Alphanumeric).with_max(28));
    field(&mut f, 35, "Track 2 Data", &VarCodec::llvar(AlphanumericSpecial).with_max(37));
    field(&mut f, 36, "Track 3 Data", &VarCodec::lllvar(AlphanumericSpecial).with_max(104));
    field(&mut f, 37, "Retrieval Reference Number", &FixedCodec::alphanumeric(12));
    field(&mut f, 38, "Authorization Identification Response", &FixedCodec::alphanumeric(6));
    field(&mut f, 39, "Response Code", &FixedCodec::alphanumeric(2));
    field(&mut f, 40, "Service Restriction Code", &FixedCodec::alphanumeric(3));
    field(&mut f, 41, "Card Acceptor Terminal Identification", &FixedCodec::alphanumeric_special(8));
    field(&mut f, 42, "Card Acceptor Identification Code", &FixedCodec::alphanumeric_special(15));
    field(&mut f, 43, "Card Acceptor Name/Location", &FixedCodec::alphanumeric_special(40));
    field(&mut f, 44, "Additional Response Data", &VarCodec::llvar(AlphanumericSpecial).with_max(25));
    field(&mut f, 45, "Track 1 Data", &VarCodec::llvar(AlphanumericSpecial).with_max(76));
    field(&mut f, 46, "Additional Data (ISO)", &VarCodec::lllvar(AlphanumericSpecial).with_max(999));
    field(&mut f, 47, "Additional Data (National)", &VarCodec::lllvar(AlphanumericSpecial).with_max(999));
    field(&mut f, 48, "Additional Data (Private)", &VarCodec::lllvar(AlphanumericSpecial).with_max(999));
    field(&mut f, 49, "Currency Code, Transaction", &FixedCodec::alphanumeric(3));
    field(&mut f, 50, "Currency Code, Settlement", &FixedCodec::alphanumeric(3));
    field(&mut f, 51, "Currency Code, Cardholder Billing", &FixedCodec::alphanumeric(3));
    field(&mut f, 52, "Personal Identification Number Data", &FixedCodec::binary(8));
    field(&mut f, 53, "Security Related Control Information", &FixedCodec::numeric(16));
    field(&mut f, 54, "Additional Amounts", &VarCodec::lllvar(AlphanumericSpecial).with_max(120));
    field(&mut f, 55, "ICC Data", &VarCodec::lllvar(Binary).with_max(999));
    for number in 56..=63u8 {
        field(&mut f, number, "Reserved", &VarCodec::lllvar(AlphanumericSpecial).with_max(999));
    }
    field(&mut f, 64, "Message Authentication Code", &FixedCodec::binary(8));

    field(&mut f, 66, "Settlement Code", &FixedCodec::numeric(1));
    field(&mut f, 67, "Extended Payment Code", &FixedCodec::numeric(2));
    field(&mut f, 68, "Receiving Institution Country Code", &FixedCodec::numeric(3));
    field(&mut f, 69, "Settlement Institution Country Code", &FixedCodec::numeric(3));
    field(&mut f, 70, "Network Management Information Code", &FixedCodec::numeric(3));
    field(&mut f, 71, "Message Number", &FixedCodec::numeric(4));
    field(&mut f, 72, "Message Number Last", &FixedCodec::numeric(4));
    field(&mut f, 73, "Date Action", &DateTimeCodec::new(DateTimeKind::YyMmDd));
    for (number, name) in [
        (74u8, "Credits Number"),
        (75, "Credits Reversal Number"),
        (76, "Debits Number"),
        (77, "Debits Reversal Number"),
        (78, "Transfer Number"),
        (79, "Transfer Reversal Number"),
        (80, "Inquiries Number"),
        (81, "Authorizations Number"),
    ] {
        field(&mut f, number, name, &FixedCodec::numeric(10));
    }
    for (number, name) in [
        (82u8, "Credits Processing Fee Amount"),
        (83, "Credits Transaction Fee Amount"),
        (84, "Debits Processing Fee Amount"),
        (85, "Debits Transaction Fee Amount"),
    ] {
        field(&mut f, number, name, &FixedCodec::numeric(12));
    }
    for (number, name) in [
        (86u8, "Credits Amount"),
        (87, "Credits Reversal Amount"),
        (88, "Debits Amount"),
        (89, "Debits Reversal Amount"),
    ] {
        field(&mut f, number, name, &FixedCodec::numeric(16));
    }
    field(&mut f, 90, "Original Data Elements", &FixedCodec::numeric(42));
    field(&mut f, 91, "File Update Code", &FixedCodec::alphanumeric(1));
    field(&mut f, 92, "File Security Code", &FixedCodec::alphanumeric(2));
    field(&mut f, 93, "Response Indicator", &FixedCodec::alphanumeric(5));
    field(&mut f, 94, "Service Indicator", &FixedCodec::alphanumeric(7));
    field(&mut f, 95, "Replacement Amounts", &FixedCodec::alphanumeric(42));
    field(&mut f, 96, "Message Security Code", &FixedCodec::binary(8));
    field(&mut f, 97, "Net Settlement Amount", &FixedCodec::numeric(16));
    field(&mut f, 98, "Payee", &FixedCodec::alphanumeric_special(25));
    field(&mut f, 99, "Settlement Institution Identification Code", &VarCodec::llvar(Numeric).with_max(11));
    field(&mut f, 100, "Receiving Institution Identification Code", &VarCodec::llvar(Numeric).with_max(11));
    field(&mut f, 101, "File Name", &VarCodec::llvar(AlphanumericSpecial).with_max(17));
    field(&mut f, 102, "Account Identification 1", &VarCodec::llvar(AlphanumericSpecial).with_max(28));
    field(&mut f, 103, "Account Identification 2", &VarCodec::llvar(AlphanumericSpecial).with_max(28));
    field(&mut f, 104, "Transaction Description", &VarCodec::lllvar(AlphanumericSpecial).with_max(100));
    for number in 105..=123u8 {
        field(&mut f, number, "Reserved", &VarCodec::lllvar(AlphanumericSpecial).with_max(999));
    }
    field(&mut f, 124, "Info Text", &VarCodec::lllvar(AlphanumericSpecial).with_max(255));
    field(&mut f, 125, "Network Management Information", &VarCodec::lllvar(AlphanumericSpecial).with_max(50));
    field(&mut f, 126, "Issuer Trace Id", &VarCodec::lllvar(AlphanumericSpecial).with_max(6));
    field(&mut f, 127, "Reserved", &VarCodec::lllvar(AlphanumericSpecial).with_max(999));
    field(&mut f, 128, "Message Authentication Code 2", &FixedCodec::binary(8));

    for (number, alias) in [
        (2u8, "pan"),
        (3, "processing_code"),
        (4, "amount"),
        (7, "transmission_datetime"),
        (11, "stan"),
        (12, "local_time"),
        (13, "local_date"),
        (14, "expiration_date"),
        (35, "track2"),
        (37, "rrn"),
        (38, "approval_code"),
        (39, "response_code"),
        (41, "terminal_id"),
        (42, "merchant_id"),
        (49, "currency_code"),
        (70, "nm_info_code"),
    ] {
        f.declare_alias(number, alias)
            .expect("aliases target declared fields");
    }

    f
}
