use afl::fuzz;
use nic_decoder::{is_padding, Decoder, Format, Rejection, Verdict};
use rand::{rngs::StdRng, Rng, SeedableRng};

const VALID_SEEDS: &[&str] = &[
    "850234567X",
    "725501234V",
    "000010001V",
    "199901234567",
    "200156712345",
];

#[cfg(not(feature = "manual_test"))]
fn main() {
    // Metric handles aren't unwind safe, a panic aborts the run anyway.
    let decoder = std::panic::AssertUnwindSafe(Decoder::default());
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(&decoder, data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&Decoder::default(), &input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

/// Input is either `<text>` which is validated as is, or `<text>,<seed>` where the seed
/// drives mutations of a known valid number.
fn run_raw_fuzz(decoder: &Decoder, bytes: &[u8]) -> Option<()> {
    let Some((input, rand_seed)) = split_bytes_once(bytes) else {
        check_invariants(decoder, std::str::from_utf8(bytes).ok()?);
        return Some(());
    };

    check_invariants(decoder, std::str::from_utf8(input).ok()?);

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }
    let mut rng = StdRng::seed_from_u64(rng_seed);
    let mutated = mutate(VALID_SEEDS[rng.gen_range(0..VALID_SEEDS.len())], &mut rng);
    check_invariants(decoder, &mutated);

    Some(())
}

fn mutate(seed: &str, rng: &mut StdRng) -> String {
    let mut symbols: Vec<char> = seed.chars().collect();
    for _ in 0..rng.gen_range(1..4) {
        let position = rng.gen_range(0..symbols.len());
        symbols[position] = match rng.gen_range::<u8, _>(0..4) {
            0 => char::from(b'0' + rng.gen_range(0..10)),
            1 => ['V', 'X', 'v', 'x'][rng.gen_range(0..4)],
            2 => char::from(rng.gen_range(b' '..=b'~')),
            _ => 'ß',
        };
    }
    symbols.into_iter().collect()
}

fn check_invariants(decoder: &Decoder, input: &str) {
    let verdict = decoder.validate(input);
    assert_eq!(verdict, decoder.validate(input), "not idempotent");

    let length = input.trim_matches(is_padding).to_uppercase().chars().count();
    if Format::from_length(length).is_none() {
        assert_eq!(
            verdict.rejection(),
            Some(&Rejection::InvalidLength { length })
        );
    }

    match &verdict {
        Verdict::Accepted(record) => {
            let derived = record.derived().expect("accepted record without derived fields");
            assert!((1..=366).contains(&derived.day_of_year));
            assert_eq!(record.suffix().is_some(), record.format() == Format::Legacy);
            assert_eq!(record.check_digit().is_some(), record.format() == Format::Modern);
        }
        Verdict::Rejected { rejection, record } => {
            assert_eq!(
                record.is_some(),
                matches!(rejection, Rejection::InvalidDayCount { .. })
            );
            assert!(matches!(
                rejection,
                Rejection::InvalidLength { .. }
                    | Rejection::InvalidCharacter { .. }
                    | Rejection::InvalidDayCount { .. }
            ));
        }
    }
}
