use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use slp_messages::{decode, encode, ProtocolMessage};
use slp_types::{TokenAmount, TokenId, TokenType};

fn send_payload(outputs: usize) -> Vec<u8> {
    let msg = ProtocolMessage::send(
        TokenType::Fungible,
        TokenId::new([0x42; 32]),
        vec![TokenAmount::new(1_000); outputs],
    );
    encode(&msg).unwrap()
}

fn bench_decode_send(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_send");

    for outputs in [1, 5, 10, 19] {
        let payload = send_payload(outputs);
        group.bench_with_input(BenchmarkId::new("outputs", outputs), &payload, |b, payload| {
            b.iter(|| black_box(decode(black_box(payload))));
        });
    }

    group.finish();
}

fn bench_decode_garbage(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_garbage");

    for size in [16, 223, 2048, 65536] {
        // Lokad id followed by a run of one-byte pushes: the longest field
        // list a payload of this size can declare.
        let mut payload = vec![0x6a, 0x04, b'S', b'L', b'P', 0x00];
        while payload.len() + 2 <= size {
            payload.extend_from_slice(&[0x01, 0xff]);
        }
        group.bench_with_input(BenchmarkId::new("bytes", size), &payload, |b, payload| {
            b.iter(|| black_box(decode(black_box(payload))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode_send, bench_decode_garbage);
criterion_main!(benches);
