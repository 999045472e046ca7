use criterion::{black_box, criterion_group, criterion_main, Criterion};
use iso8583_codec::{dialect, Message, MessageFamily};

fn authorization_request(family: &MessageFamily) -> Message<'_> {
    let mut message = family.message_with_mti("0100").unwrap();
    message.set("pan", "4111111111111111").unwrap();
    message.set("processing_code", "000000").unwrap();
    message.set("amount", "000000010000").unwrap();
    message.set("transmission_datetime", "0115120000").unwrap();
    message.set("stan", "123456").unwrap();
    message.set("local_time", "120000").unwrap();
    message.set("local_date", "0115").unwrap();
    message.set("terminal_id", "TERM0001").unwrap();
    message.set("merchant_id", "MERCHANT0000001").unwrap();
    message.set("currency_code", "840").unwrap();
    message
}

fn bench_serialize(c: &mut Criterion) {
    let family = dialect::iso1987();
    let message = authorization_request(&family);

    c.bench_function("serialize_authorization_request", |b| {
        b.iter(|| black_box(&message).to_bytes().unwrap())
    });
}

fn bench_parse(c: &mut Criterion) {
    let family = dialect::iso1987();
    let bytes = authorization_request(&family).to_bytes().unwrap();

    c.bench_function("parse_authorization_request", |b| {
        b.iter(|| family.parse(black_box(&bytes)).unwrap())
    });
}

criterion_group!(benches, bench_serialize, bench_parse);
criterion_main!(benches);
